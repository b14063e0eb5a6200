//! Error types for style-tree compilation.
//!
//! Compilation is a pure transform over a well-formed style tree. The errors
//! here describe malformed input: a nested-block key that holds a leaf, a
//! declaration key that holds a nested block, or a leaf value that has no
//! CSS spelling. They are surfaced instead of emitting silently-wrong CSS.

use thiserror::Error;

/// Errors that can occur while merging, loading, or compiling style trees.
///
/// # Examples
///
/// ```rust
/// use cssgen::{merge_styles, CssGenError};
///
/// // Merging requires at least one fragment.
/// let result = merge_styles(&[]);
/// assert!(matches!(result, Err(CssGenError::EmptyInput)));
/// ```
#[derive(Error, Debug)]
pub enum CssGenError {
    /// No style fragments were supplied to a merge.
    #[error("no style fragments to merge")]
    EmptyInput,

    /// A pseudo, media, or descendant key holds a leaf value instead of a
    /// nested style block.
    #[error("key '{key}' must hold a nested style block")]
    InvalidNesting { key: String },

    /// A plain declaration key holds a nested style block.
    #[error("declaration '{property}' holds a nested style block")]
    InvalidDeclaration { property: String },

    /// A leaf value cannot be written as CSS.
    #[error("invalid value for '{property}': {reason}")]
    InvalidValue { property: String, reason: String },

    /// The JSON source for a style fragment could not be read.
    #[error("JSON error reading style fragment")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CssGenError>;
