//! Common tokenizer interfaces and registry
//!
//! This module defines the `Tokenizer` trait and `TokenizerRegistry` for
//! pluggable tokenizer implementations. The detector consumes categorized
//! tokens and never cares how they were produced, so tokenizers for other
//! source languages can be substituted here without touching it.

use crate::fold::lexers::base_tokenization::tokenize;
use crate::fold::lexers::ensure_source_ends_with_newline;
use crate::fold::lexers::transformations::{line_structure, LineIndex};
use crate::fold::token::Token;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Errors that can occur during tokenization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    TokenizerNotFound(String),
    InvalidInput(String),
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizeError::TokenizerNotFound(name) => write!(f, "Tokenizer '{}' not found", name),
            TokenizeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TokenizeError {}

/// Trait for pluggable tokenizer implementations
pub trait Tokenizer: Send + Sync {
    /// Return the name of this tokenizer implementation
    fn name(&self) -> &'static str;

    /// Tokenize source text into categorized tokens for the detector
    fn tokenize(&self, source: &str) -> Result<Vec<Token>, TokenizeError>;
}

/// Registry for tokenizer implementations
#[derive(Clone, Default)]
pub struct TokenizerRegistry {
    tokenizers: HashMap<String, Arc<dyn Tokenizer>>,
}

impl TokenizerRegistry {
    /// Create a new, empty tokenizer registry
    pub fn new() -> Self {
        TokenizerRegistry {
            tokenizers: HashMap::new(),
        }
    }

    /// Register a tokenizer implementation
    pub fn register(&mut self, tokenizer: Arc<dyn Tokenizer>) {
        self.tokenizers
            .insert(tokenizer.name().to_string(), tokenizer);
    }

    /// Get a registered tokenizer by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Tokenizer>, TokenizeError> {
        self.tokenizers
            .get(name)
            .cloned()
            .ok_or_else(|| TokenizeError::TokenizerNotFound(name.to_string()))
    }

    /// Names of all registered tokenizers
    pub fn names(&self) -> Vec<&str> {
        self.tokenizers.keys().map(|name| name.as_str()).collect()
    }
}

/// The built-in tokenizer for whitespace-significant (Python-style) source.
///
/// Normalizes the source to end with a newline, runs the logos base
/// tokenization and applies the line-structure transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentTokenizer;

impl Tokenizer for IndentTokenizer {
    fn name(&self) -> &'static str {
        "indent"
    }

    fn tokenize(&self, source: &str) -> Result<Vec<Token>, TokenizeError> {
        let source = ensure_source_ends_with_newline(source);
        let raw = tokenize(&source);
        let index = LineIndex::new(&source);
        Ok(line_structure(&raw, &index))
    }
}

/// The registry holding the built-in tokenizers
pub fn default_registry() -> &'static TokenizerRegistry {
    static REGISTRY: Lazy<TokenizerRegistry> = Lazy::new(|| {
        let mut registry = TokenizerRegistry::new();
        registry.register(Arc::new(IndentTokenizer));
        registry
    });
    &REGISTRY
}
