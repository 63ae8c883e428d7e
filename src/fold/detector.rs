//! Fold-point detector
//!
//! This module converts a stream of categorized lexical tokens into a set of
//! `(start_row, end_row, depth)` fold intervals. It is a single linear-scan
//! state machine with one explicit stack and two correction counters.
//!
//! # Algorithm
//!
//! 1. Track the current indentation depth (incremented on `Indent`,
//!    decremented on `Dedent`)
//! 2. On `Indent`, push the corrected header row onto the indent stack:
//!    the indent token's row minus one (the row of the block's header line)
//!    minus the current comment run (comment lines sitting between the header
//!    and the first real body line)
//! 3. On `Dedent`, pop the matching start row and record a fold ending at the
//!    dedent token's row minus one (the block's last body row) minus the
//!    current blank run (trailing blank lines after the block's last statement)
//! 4. Any non-transparent token resets both run counters
//!
//! The run counters exist because raw token row numbers measure where tokens
//! physically sit, not where a human would consider a logical block to start
//! or end. A block preceded by an explanatory comment line folds from the
//! comment; blank padding after a block's last statement is not part of its
//! body. Both corrections are bounded by the immediately adjacent run and
//! reset on any semantically meaningful token, so they cannot leak across
//! unrelated blocks.

use crate::fold::token::{FoldPoint, Token, TokenCategory};
use std::fmt;

/// The token stream's indent/dedent nesting could not be resolved to a
/// well-formed stack discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnbalancedIndentationError {
    /// More `Indent` tokens were opened than `Dedent` tokens closed them
    UnclosedIndents(usize),
    /// A `Dedent` arrived with no open indented region to close
    DedentWithoutIndent { row: usize },
}

impl fmt::Display for UnbalancedIndentationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnbalancedIndentationError::UnclosedIndents(count) => write!(
                f,
                "Unbalanced indentation: {} indented region(s) left open at end of input",
                count
            ),
            UnbalancedIndentationError::DedentWithoutIndent { row } => write!(
                f,
                "Unbalanced indentation: dedent at row {} has no matching indent",
                row
            ),
        }
    }
}

impl std::error::Error for UnbalancedIndentationError {}

/// Detect the fold points of a token stream.
///
/// Returns the fold intervals derived from the stream's `Indent`/`Dedent`
/// structure, with `start_row` compensated for leading comment lines and
/// `end_row` compensated for trailing blank lines. The returned collection
/// is unordered; callers that need line order must sort by `start_row`.
///
/// Fails with [`UnbalancedIndentationError`] if the stream leaves indented
/// regions open at end of input, or closes a region that was never opened.
/// No partial result is returned on failure: a fold set built from malformed
/// nesting could misrepresent block boundaries to downstream consumers.
pub fn detect_folds(tokens: &[Token]) -> Result<Vec<FoldPoint>, UnbalancedIndentationError> {
    let mut depth: usize = 0;
    let mut blank_run: usize = 0;
    let mut comment_run: usize = 0;
    let mut open_starts: Vec<usize> = Vec::new();
    let mut results: Vec<FoldPoint> = Vec::new();

    for token in tokens {
        match token.category {
            TokenCategory::BlankLine => blank_run += 1,
            TokenCategory::Comment => comment_run += 1,
            TokenCategory::Indent => {
                depth += 1;
                // row - 1 is the block's header line; backing past the
                // comment run lands on the first of any comment lines that
                // sit between the header and the first body statement
                open_starts.push(token.start_row.saturating_sub(1 + comment_run));
            }
            TokenCategory::Dedent => {
                // the next dedent always belongs to the most recent indent
                let matched_start = open_starts.pop().ok_or(
                    UnbalancedIndentationError::DedentWithoutIndent {
                        row: token.start_row,
                    },
                )?;
                // row - 1 is the block's last body row; the blank run trims
                // trailing blank lines off the end of the region
                let end_row = token.start_row.saturating_sub(1 + blank_run);
                results.push(FoldPoint::new(matched_start, end_row, depth));
                depth -= 1;
            }
            // logical newlines legitimately appear adjacent to comments and
            // indentation markers without invalidating the runs
            TokenCategory::LogicalNewline => {}
            TokenCategory::Other => {
                blank_run = 0;
                comment_run = 0;
            }
        }
    }

    if !open_starts.is_empty() {
        return Err(UnbalancedIndentationError::UnclosedIndents(
            open_starts.len(),
        ));
    }

    Ok(results)
}
