//! Base tokenization for the whitespace-significant tokenizer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become raw token streams.
//!
//! Transformations operate on the token stream produced here; they do not
//! call the logos lexer themselves.

use crate::fold::lexers::tokens_raw::RawToken;
use logos::Logos;

/// Tokenize source code with location information
///
/// Performs raw tokenization using the logos lexer, returning tokens paired
/// with their byte spans. Characters the lexer cannot match (stray quotes,
/// carriage returns) are skipped rather than failing the whole scan; the
/// fold structure of the surrounding lines is unaffected.
pub fn tokenize(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
