//! Token and fold-point types shared across the tokenizer adapters and the detector.
//!
//! The detector deliberately consumes a very small token shape: a category and
//! the 1-based source row where the token begins. End positions and token text
//! are adapter concerns and never reach the detector.

use serde::Serialize;

/// Lexical categories the detector distinguishes.
///
/// `Other` subsumes names, operators, literals, keywords - anything not needed
/// to detect folds. Adapters map their language-specific token kinds onto
/// these six categories:
///
/// - newline that ends a logical statement -> `LogicalNewline`
/// - newline inside a blank or comment-only line -> `BlankLine`
/// - indentation level increase/decrease markers -> `Indent` / `Dedent`
/// - comment tokens -> `Comment`
/// - everything else -> `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenCategory {
    Indent,
    Dedent,
    BlankLine,
    LogicalNewline,
    Comment,
    Other,
}

impl TokenCategory {
    /// Transparent categories do not reset the blank/comment run counters.
    pub fn is_transparent(&self) -> bool {
        !matches!(self, TokenCategory::Other)
    }
}

/// A lexical unit as consumed by the fold-point detector.
///
/// Tokens must be produced in non-decreasing `start_row` order, matching the
/// source's top-to-bottom order. `Indent` tokens occur at the first line of a
/// newly indented region; `Dedent` tokens occur at the first line after a
/// region ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub category: TokenCategory,
    /// 1-based source line on which the token begins
    pub start_row: usize,
}

impl Token {
    pub fn new(category: TokenCategory, start_row: usize) -> Self {
        Token {
            category,
            start_row,
        }
    }
}

/// One reported indented region of source text.
///
/// `start_row..=end_row` is an inclusive, 1-based line range covering the
/// region's header line through its last body line. `depth` counts from 1 for
/// the outermost indented region. For any two fold points produced from one
/// run, the intervals are either disjoint or nested - never partially
/// overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FoldPoint {
    pub start_row: usize,
    pub end_row: usize,
    pub depth: usize,
}

impl FoldPoint {
    pub fn new(start_row: usize, end_row: usize, depth: usize) -> Self {
        FoldPoint {
            start_row,
            end_row,
            depth,
        }
    }

    /// Check whether this fold's line range fully contains `other`'s.
    pub fn contains(&self, other: &FoldPoint) -> bool {
        self.start_row <= other.start_row && other.end_row <= self.end_row
    }

    /// Check whether this fold's line range is disjoint from `other`'s.
    pub fn is_disjoint(&self, other: &FoldPoint) -> bool {
        self.end_row < other.start_row || other.end_row < self.start_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_categories() {
        assert!(TokenCategory::Indent.is_transparent());
        assert!(TokenCategory::Dedent.is_transparent());
        assert!(TokenCategory::BlankLine.is_transparent());
        assert!(TokenCategory::LogicalNewline.is_transparent());
        assert!(TokenCategory::Comment.is_transparent());
        assert!(!TokenCategory::Other.is_transparent());
    }

    #[test]
    fn test_fold_point_containment() {
        let outer = FoldPoint::new(1, 10, 1);
        let inner = FoldPoint::new(3, 5, 2);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        // shared end rows still count as containment
        let flush = FoldPoint::new(8, 10, 2);
        assert!(outer.contains(&flush));
    }

    #[test]
    fn test_fold_point_disjoint() {
        let first = FoldPoint::new(1, 3, 1);
        let second = FoldPoint::new(4, 6, 1);
        assert!(first.is_disjoint(&second));
        assert!(second.is_disjoint(&first));
        assert!(!first.is_disjoint(&FoldPoint::new(3, 4, 1)));
    }
}
