//! Style trees: data model, merging, and descendant name collection.
//!
//! - [`StyleNode`] / [`StyleValue`]: one scope of style and its values
//! - [`KeyKind`]: prefix-based key classification
//! - [`merge_styles`]: deep merge of ordered fragments
//! - [`collect_descendant_names`]: descendant key to class name mapping
//! - [`parse_fragments`]: JSON loading

pub mod json;
pub mod merge;
pub mod names;
pub mod node;

pub use crate::tree::json::parse_fragments;
pub use crate::tree::merge::{merge_into, merge_styles};
pub use crate::tree::names::{DescendantNames, collect_descendant_names};
pub use crate::tree::node::{DESCENDANT_MARKER, KeyKind, NAMES_FIELD, StyleNode, StyleValue};
