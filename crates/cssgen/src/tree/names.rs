//! Descendant name collection.
//!
//! A descendant block can be rendered under several class names depending on
//! which concrete styles matched further down. Before compiling, the whole
//! merged tree is walked once and every descendant key is mapped to all the
//! names its blocks advertise.

use crate::error::{CssGenError, Result};
use crate::tree::node::{KeyKind, StyleNode, StyleValue};

/// Mapping from descendant key to the class names it resolves to.
///
/// Names keep discovery order and may repeat. A key that is absent resolves
/// to no names at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescendantNames {
    entries: Vec<(String, Vec<String>)>,
}

impl DescendantNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` to the list for `key`.
    pub fn push(&mut self, key: &str, name: impl Into<String>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, names)) => names.push(name),
            None => self.entries.push((key.to_string(), vec![name])),
        }
    }

    /// Names registered for `key`; empty when the key is unknown.
    pub fn get(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, names)| names.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, names)| (k.as_str(), names.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Walks `style` and collects the names of every descendant block.
///
/// Pseudo and media blocks are descended into without recording anything.
/// For a descendant block the deeper levels are collected first, then the
/// block's own names are appended under its key.
pub fn collect_descendant_names(style: &StyleNode) -> Result<DescendantNames> {
    let mut names = DescendantNames::new();
    collect_into(style, &mut names)?;
    log::debug!("collected names for {} descendant key(s)", names.len());
    Ok(names)
}

fn collect_into(style: &StyleNode, names: &mut DescendantNames) -> Result<()> {
    for (key, value) in style.iter() {
        let kind = KeyKind::of(key);
        if !kind.is_nested() {
            continue;
        }

        let nested = nested_node(key, value)?;
        collect_into(nested, names)?;

        if kind == KeyKind::Descendant {
            for name in nested.names() {
                names.push(key, name.clone());
            }
        }
    }
    Ok(())
}

/// Returns the block held by a nested key, or an error for a leaf value.
pub(crate) fn nested_node<'a>(key: &str, value: &'a StyleValue) -> Result<&'a StyleNode> {
    value.as_node().ok_or_else(|| CssGenError::InvalidNesting {
        key: key.to_string(),
    })
}
