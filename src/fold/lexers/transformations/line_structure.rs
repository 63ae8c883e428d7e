//! Line-structure transformation for the whitespace-significant tokenizer
//!
//! This transformation turns the raw logos token stream into the categorized
//! tokens the fold-point detector consumes: indentation-level changes become
//! semantic Indent and Dedent tokens, and each physical line's terminating
//! newline is classified as statement-ending (LogicalNewline) or not
//! (BlankLine).
//!
//! # Algorithm
//!
//! 1. Walk the raw stream one physical line at a time (lines end at Newline
//!    tokens; a multi-line string literal is a single token and therefore
//!    never splits a line)
//! 2. Blank lines and comment-only lines do not affect the indentation level;
//!    their indentation tokens are ignored
//! 3. For a code line, count the leading indentation tokens and compare with
//!    the current level: emit one Indent per additional level or one Dedent
//!    per reduced level, located at the line where the change is observed
//! 4. Track open bracket depth across lines; while a bracket pair is open,
//!    lines are continuations of the same logical statement, so their leading
//!    indentation is ignored and their newlines are not statement-ending
//! 5. At end of input, close all remaining levels with Dedents on the row
//!    after the last line

use crate::fold::lexers::tokens_raw::RawToken;
use crate::fold::token::{Token, TokenCategory};

/// Maps byte offsets to 1-based source rows.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    source_len: usize,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        LineIndex {
            line_starts,
            source_len: source.len(),
        }
    }

    /// 1-based row containing the given byte offset
    pub fn row(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Number of physical lines the source occupies
    pub fn line_count(&self) -> usize {
        if self.source_len == 0 {
            0
        } else if *self.line_starts.last().unwrap_or(&0) == self.source_len {
            // newline-terminated: the final "line start" is past the end
            self.line_starts.len() - 1
        } else {
            self.line_starts.len()
        }
    }
}

/// Transform raw tokens into categorized tokens with semantic indentation.
///
/// `index` must be built from the same source string the raw tokens were
/// lexed from; rows are derived from the tokens' byte spans.
pub fn line_structure(tokens: &[(RawToken, logos::Span)], index: &LineIndex) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::new();
    let mut current_level: usize = 0;
    let mut bracket_depth: usize = 0;
    let mut i = 0;

    while i < tokens.len() {
        // the line runs from i up to (not including) its Newline token
        let mut line_end = i;
        while line_end < tokens.len() && !matches!(tokens[line_end].0, RawToken::Newline) {
            line_end += 1;
        }
        let newline = (line_end < tokens.len()).then_some(line_end);

        let continuation = bracket_depth > 0;

        // leading indentation only counts on fresh logical lines
        let mut content_start = i;
        let mut level = 0;
        if !continuation {
            while content_start < line_end
                && matches!(tokens[content_start].0, RawToken::Indentation)
            {
                level += 1;
                content_start += 1;
            }
        }

        let has_code = tokens[content_start..line_end]
            .iter()
            .any(|(tok, _)| tok.is_code());

        if has_code && !continuation {
            let line_row = index.row(tokens[i].1.start);
            if level > current_level {
                for _ in 0..(level - current_level) {
                    out.push(Token::new(TokenCategory::Indent, line_row));
                }
            } else {
                for _ in 0..(current_level - level) {
                    out.push(Token::new(TokenCategory::Dedent, line_row));
                }
            }
            current_level = level;
        }

        // emit the line's content tokens and track bracket depth
        for (tok, span) in &tokens[content_start..line_end] {
            let row = index.row(span.start);
            match tok {
                RawToken::Indentation | RawToken::Whitespace => {}
                RawToken::Comment => out.push(Token::new(TokenCategory::Comment, row)),
                RawToken::OpenBracket => {
                    bracket_depth += 1;
                    out.push(Token::new(TokenCategory::Other, row));
                }
                RawToken::CloseBracket => {
                    bracket_depth = bracket_depth.saturating_sub(1);
                    out.push(Token::new(TokenCategory::Other, row));
                }
                RawToken::Str | RawToken::Word => {
                    out.push(Token::new(TokenCategory::Other, row))
                }
                RawToken::Newline => unreachable!("newline terminates the line scan"),
            }
        }

        // classify the line's newline: statement-ending only when the line
        // carried code and no bracket pair remains open
        if let Some(newline_idx) = newline {
            let row = index.row(tokens[newline_idx].1.start);
            let ends_statement = (has_code || continuation) && bracket_depth == 0;
            let category = if ends_statement {
                TokenCategory::LogicalNewline
            } else {
                TokenCategory::BlankLine
            };
            out.push(Token::new(category, row));
            i = newline_idx + 1;
        } else {
            i = line_end;
        }
    }

    // close all remaining levels on the row after the last line
    let eof_row = index.line_count() + 1;
    for _ in 0..current_level {
        out.push(Token::new(TokenCategory::Dedent, eof_row));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::lexers::base_tokenization::tokenize;
    use TokenCategory::{BlankLine, Comment, Dedent, Indent, LogicalNewline, Other};

    fn transform(source: &str) -> Vec<Token> {
        let index = LineIndex::new(source);
        line_structure(&tokenize(source), &index)
    }

    fn tok(category: TokenCategory, row: usize) -> Token {
        Token::new(category, row)
    }

    #[test]
    fn test_line_index_rows() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.row(0), 1);
        assert_eq!(index.row(2), 1);
        assert_eq!(index.row(3), 2);
        assert_eq!(index.row(5), 2);
        assert_eq!(index.line_count(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(""), vec![]);
    }

    #[test]
    fn test_flat_lines() {
        assert_eq!(
            transform("a\nb\n"),
            vec![
                tok(Other, 1),
                tok(LogicalNewline, 1),
                tok(Other, 2),
                tok(LogicalNewline, 2),
            ]
        );
    }

    #[test]
    fn test_simple_indentation() {
        assert_eq!(
            transform("a:\n    b\nc\n"),
            vec![
                tok(Other, 1),
                tok(LogicalNewline, 1),
                tok(Indent, 2),
                tok(Other, 2),
                tok(LogicalNewline, 2),
                tok(Dedent, 3),
                tok(Other, 3),
                tok(LogicalNewline, 3),
            ]
        );
    }

    #[test]
    fn test_eof_dedents_close_open_levels() {
        assert_eq!(
            transform("a:\n    b:\n        c\n"),
            vec![
                tok(Other, 1),
                tok(LogicalNewline, 1),
                tok(Indent, 2),
                tok(Other, 2),
                tok(LogicalNewline, 2),
                tok(Indent, 3),
                tok(Other, 3),
                tok(LogicalNewline, 3),
                tok(Dedent, 4),
                tok(Dedent, 4),
            ]
        );
    }

    #[test]
    fn test_sharp_drop_emits_multiple_dedents() {
        let tokens = transform("a:\n    b:\n        c\nd\n");
        let dedents: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.category == Dedent)
            .collect();
        assert_eq!(dedents.len(), 2);
        assert!(dedents.iter().all(|t| t.start_row == 4));
    }

    #[test]
    fn test_blank_line_is_transparent_to_level() {
        assert_eq!(
            transform("a:\n    b\n\n    c\n"),
            vec![
                tok(Other, 1),
                tok(LogicalNewline, 1),
                tok(Indent, 2),
                tok(Other, 2),
                tok(LogicalNewline, 2),
                tok(BlankLine, 3),
                tok(Other, 4),
                tok(LogicalNewline, 4),
                tok(Dedent, 5),
            ]
        );
    }

    #[test]
    fn test_blank_line_with_indentation_is_still_blank() {
        // the whitespace-only line between the two body lines must not
        // produce dedent/indent churn
        let tokens = transform("a:\n    b\n    \n    c\n");
        assert_eq!(
            tokens,
            vec![
                tok(Other, 1),
                tok(LogicalNewline, 1),
                tok(Indent, 2),
                tok(Other, 2),
                tok(LogicalNewline, 2),
                tok(BlankLine, 3),
                tok(Other, 4),
                tok(LogicalNewline, 4),
                tok(Dedent, 5),
            ]
        );
    }

    #[test]
    fn test_comment_only_line_is_transparent_to_level() {
        assert_eq!(
            transform("a:\n    # note\n    b\n"),
            vec![
                tok(Other, 1),
                tok(LogicalNewline, 1),
                tok(Comment, 2),
                tok(BlankLine, 2),
                tok(Indent, 3),
                tok(Other, 3),
                tok(LogicalNewline, 3),
                tok(Dedent, 4),
            ]
        );
    }

    #[test]
    fn test_trailing_comment_on_code_line() {
        assert_eq!(
            transform("a  # note\n"),
            vec![tok(Other, 1), tok(Comment, 1), tok(LogicalNewline, 1)]
        );
    }

    #[test]
    fn test_bracket_continuation_ignores_indentation() {
        // the second line is a continuation of the open call, not a block
        let tokens = transform("f(a,\n        b)\nc\n");
        assert_eq!(
            tokens,
            vec![
                tok(Other, 1),
                tok(Other, 1),
                tok(Other, 1),
                tok(BlankLine, 1),
                tok(Other, 2),
                tok(Other, 2),
                tok(LogicalNewline, 2),
                tok(Other, 3),
                tok(LogicalNewline, 3),
            ]
        );
    }

    #[test]
    fn test_blank_line_inside_brackets() {
        let tokens = transform("f(a,\n\nb)\n");
        let categories: Vec<TokenCategory> = tokens.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![
                Other,
                Other,
                Other,
                BlankLine,
                BlankLine,
                Other,
                Other,
                LogicalNewline,
            ]
        );
    }

    #[test]
    fn test_triple_quoted_string_does_not_split_lines() {
        // the docstring's interior lines never produce indentation tokens
        let tokens = transform("a:\n    \"\"\"doc\nnot indented\n    \"\"\"\n    b\n");
        let indents = tokens.iter().filter(|t| t.category == Indent).count();
        let dedents = tokens.iter().filter(|t| t.category == Dedent).count();
        assert_eq!(indents, 1);
        assert_eq!(dedents, 1);
    }

    #[test]
    fn test_multi_step_indent_jump() {
        let tokens = transform("a:\n        b\n");
        let indents: Vec<&Token> = tokens
            .iter()
            .filter(|t| t.category == Indent)
            .collect();
        assert_eq!(indents.len(), 2);
        assert!(indents.iter().all(|t| t.start_row == 2));
    }

    #[test]
    fn test_unterminated_source_without_newline() {
        // callers normally normalize the source first; a missing final
        // newline must still close open levels
        let tokens = transform("a:\n    b");
        assert_eq!(tokens.last(), Some(&tok(Dedent, 3)));
    }
}
