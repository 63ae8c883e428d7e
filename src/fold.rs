//! Fold-point detection pipeline
//!
//! This module orchestrates the complete fold-detection pipeline for
//! whitespace-significant source text.
//!
//! The pipeline consists of:
//! 1. Core tokenization using the logos lexer ./fold/lexers/base_tokenization.rs
//! 2. Line-structure transformation (raw tokens -> semantic Indent/Dedent,
//!    BlankLine, LogicalNewline, Comment, Other tokens) ./fold/lexers/transformations/line_structure.rs
//! 3. Fold-point detection (token stream -> fold intervals) ./fold/detector.rs
//!
//! Indentation Handling
//!
//!     At the raw lexing pass we only do simple 4 spaces / 1 tab substitutions
//!     for indentation blocks; a line that is 2 levels indented produces two
//!     raw indentation tokens. The semantic indent and dedent tokens are
//!     produced by a later transformation step, separate from all other
//!     tokenization. This lets us use a vanilla logos lexer with no custom
//!     code, and keeps the detector agnostic to how indentation is spelled.
//!
//! The detector itself is tokenizer-agnostic: any [`Tokenizer`](lexers::Tokenizer)
//! implementation that emits the six [`TokenCategory`](token::TokenCategory)
//! kinds can feed it.

pub mod detector;
pub mod lexers;
pub mod token;

use std::fmt;

pub use detector::{detect_folds, UnbalancedIndentationError};
pub use lexers::{default_registry, IndentTokenizer, TokenizeError, Tokenizer, TokenizerRegistry};
pub use token::{FoldPoint, Token, TokenCategory};

/// Errors that can occur while scanning source text for fold points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The tokenizer rejected the input
    Tokenize(TokenizeError),
    /// The token stream's indent/dedent nesting could not be resolved
    UnbalancedIndentation(UnbalancedIndentationError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Tokenize(err) => write!(f, "Tokenization failed: {}", err),
            ScanError::UnbalancedIndentation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<TokenizeError> for ScanError {
    fn from(err: TokenizeError) -> Self {
        ScanError::Tokenize(err)
    }
}

impl From<UnbalancedIndentationError> for ScanError {
    fn from(err: UnbalancedIndentationError) -> Self {
        ScanError::UnbalancedIndentation(err)
    }
}

/// Find the fold points of a block of source text.
///
/// Runs the default whitespace-significant tokenizer over `source` and feeds
/// the resulting token stream to the detector. The returned collection is
/// unordered; callers that need line order must sort by `start_row`.
pub fn find_fold_points(source: &str) -> Result<Vec<FoldPoint>, ScanError> {
    let tokens = IndentTokenizer.tokenize(source)?;
    let folds = detect_folds(&tokens)?;
    Ok(folds)
}
