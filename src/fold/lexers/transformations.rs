//! Token stream transformations for the whitespace-significant tokenizer

pub mod line_structure;

pub use line_structure::{line_structure, LineIndex};
