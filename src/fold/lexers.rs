//! Tokenizer adapters
//!
//! The fold-point detector is agnostic to how tokens are produced; this module
//! supplies the tokenizer side of the pipeline. The built-in adapter targets
//! whitespace-significant (Python-style) source and is structured as:
//!
//! 1. Base tokenization using the logos lexer ./lexers/base_tokenization.rs
//! 2. Line-structure transformation (raw tokens -> categorized tokens with
//!    semantic Indent/Dedent) ./lexers/transformations/line_structure.rs
//!
//! Alternative source-language tokenizers plug in through the [`Tokenizer`]
//! trait and [`TokenizerRegistry`] without touching the detector.

pub mod base_tokenization;
pub mod interface;
pub mod tokens_raw;
pub mod transformations;

pub use base_tokenization::tokenize;
pub use interface::{
    default_registry, IndentTokenizer, TokenizeError, Tokenizer, TokenizerRegistry,
};
pub use tokens_raw::RawToken;

/// Preprocesses source text to ensure it ends with a newline.
///
/// This is required so the final line is terminated like every other line and
/// end-of-input dedents land on a well-defined row. Returns the original
/// string if it already ends with a newline (or is empty); otherwise appends
/// one.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}
