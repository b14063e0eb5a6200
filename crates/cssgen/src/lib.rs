//! # cssgen - style tree to CSS compiler
//!
//! Converts nested style descriptions into flat CSS bound to one generated
//! class selector. A style description is a tree of [`StyleNode`]s whose keys
//! are plain CSS properties, pseudo selectors (`:hover`), media queries
//! (`@media ...`), or descendant blocks (`>>name`).
//!
//! ## Quick Start
//!
//! ```rust
//! use cssgen::{generate_css, CompileOptions, StyleNode};
//!
//! let base = StyleNode::new().with("color", "red").with("lineHeight", 1.5);
//! let hover = StyleNode::new().with(":hover", StyleNode::new().with("color", "blue"));
//!
//! let css = generate_css(".title_a1", &[base, hover], &CompileOptions::new()).unwrap();
//! assert_eq!(
//!     css,
//!     ".title_a1{color:red !important;line-height:1.5 !important;}\
//!      .title_a1:hover{color:blue !important;}"
//! );
//! ```
//!
//! ## Pipeline
//!
//! 1. [`merge_styles`] deep-merges the fragments, later fragments winning
//! 2. [`collect_descendant_names`] maps descendant keys to class names
//! 3. [`compile`] partitions each scope and stitches the rulesets together
//!
//! ## Modules
//!
//! - [`tree`]: style tree data model, merging, name collection, JSON loading
//! - [`generate`]: partitioning, compilation, and declaration formatting
//! - [`error`]: error types for malformed input

pub mod error;
pub mod generate;
pub mod tree;

pub use error::{CssGenError, Result};
pub use generate::{
    CompileOptions, Declarations, Important, NoopPrefixer, Prefixer, StringHandlers, UnitPolicy,
    compile, format_ruleset, generate_css, importantify, kebab_case, partition, stringify_value,
};
pub use tree::{
    DescendantNames, KeyKind, StyleNode, StyleValue, collect_descendant_names, merge_styles,
    parse_fragments,
};
