//! # codefold
//!
//! Fold-point detection for whitespace-significant source files.
//!
//! The crate scans the lexical structure of a block of source text and reports
//! the line ranges that correspond to indented regions: contiguous spans that
//! begin where indentation increases and end where it returns to the prior
//! level. Downstream tooling (block splitters, reorganizers, folding UIs) can
//! slice the original text with the reported `start_row..=end_row` ranges.
//!
//! ## Testing
//!
//! Unit tests live in `#[cfg(test)]` modules next to the code they cover;
//! known-value fixtures and property tests live under `tests/`.

pub mod fold;

pub use fold::detector::{detect_folds, UnbalancedIndentationError};
pub use fold::token::{FoldPoint, Token, TokenCategory};
pub use fold::{find_fold_points, ScanError};
