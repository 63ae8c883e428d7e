//! Raw token definitions for the whitespace-significant tokenizer
//!
//! These tokens are produced directly by the logos lexer and carry no
//! structural meaning yet; the line-structure transformation turns them into
//! the categorized tokens the detector consumes.
//!
//! Indentation is lexed as one token per 4 spaces or 1 tab. String literals
//! (including triple-quoted, line-spanning ones) lex as a single token so
//! that newlines and leading whitespace inside them never read as line
//! structure. Bracket tokens exist only so the transformation can track
//! open bracket depth for continuation lines.

use logos::Logos;

/// All raw tokens of the whitespace-significant source lexer
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum RawToken {
    // Indentation (one token per 4 spaces or tab)
    #[regex(r" {4}|\t", priority = 3)]
    Indentation,

    // Whitespace remainders (excluding newlines and indentation)
    #[regex(r" {1,3}", priority = 1)]
    Whitespace,

    // Line breaks
    #[token("\n")]
    Newline,

    // Comments run to end of line
    #[regex(r"#[^\n]*")]
    Comment,

    // Brackets, tracked for continuation-line detection
    #[regex(r"[(\[{]")]
    OpenBracket,
    #[regex(r"[)\]}]")]
    CloseBracket,

    // String literals lex as single tokens; triple-quoted ones may span lines
    #[regex(r#""""([^"]|"[^"]|""[^"])*""""#, priority = 5)]
    #[regex(r"'''([^']|'[^']|''[^'])*'''", priority = 5)]
    #[regex(r#""([^"\n\\]|\\[^\n])*""#, priority = 2)]
    #[regex(r"'([^'\n\\]|\\[^\n])*'", priority = 2)]
    Str,

    // Everything else: names, operators, literals, keywords
    #[regex(r#"[^ \t\n#()\[\]{}'"]+"#)]
    Word,
}

impl RawToken {
    /// Check if this token carries line content (code, not whitespace/comment)
    pub fn is_code(&self) -> bool {
        matches!(
            self,
            RawToken::OpenBracket | RawToken::CloseBracket | RawToken::Str | RawToken::Word
        )
    }
}
