//! Partitioning a style node into declaration, pseudo, media and descendant
//! buckets.
//!
//! Descendant blocks fan out here: a block whose key resolves to N class
//! names is registered N times, once per `(descendant-key, class-name)`
//! pair. A key with no names is dropped.

use std::rc::Rc;

use crate::error::{CssGenError, Result};
use crate::generate::prefix::Declarations;
use crate::tree::names::nested_node;
use crate::tree::{DescendantNames, KeyKind, StyleNode};

/// A descendant block bound to one resolved class name.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpandedDescendant {
    /// The `>>` key the block was written under.
    pub descendant_key: String,
    /// Together with `descendant_key`, unique within a partition.
    pub class_name: String,
    /// The block's styles with its class names stripped. Shared between all
    /// names resolved from the same descendant key.
    pub style: Rc<StyleNode>,
}

/// The four buckets of one style node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition<'a> {
    pub declarations: Declarations,
    pub pseudo_styles: Vec<(&'a str, &'a StyleNode)>,
    pub media_queries: Vec<(&'a str, &'a StyleNode)>,
    pub descendants: Vec<ExpandedDescendant>,
}

/// Splits `style` into buckets, expanding descendant blocks through `names`.
pub fn partition<'a>(style: &'a StyleNode, names: &DescendantNames) -> Result<Partition<'a>> {
    let mut parts = Partition::default();

    for (key, value) in style.iter() {
        match KeyKind::of(key) {
            KeyKind::Declaration => {
                if value.is_node() {
                    return Err(CssGenError::InvalidDeclaration {
                        property: key.to_string(),
                    });
                }
                parts.declarations.insert(key, value.clone());
            }
            KeyKind::Pseudo => parts.pseudo_styles.push((key, nested_node(key, value)?)),
            KeyKind::Media => parts.media_queries.push((key, nested_node(key, value)?)),
            KeyKind::Descendant => {
                let nested = nested_node(key, value)?;
                let resolved = names.get(key);
                if resolved.is_empty() {
                    log::debug!(
                        "dropping descendant block '{}': no class names resolve to it",
                        key
                    );
                    continue;
                }

                let stripped = Rc::new(nested.without_names());
                for class_name in resolved {
                    register(&mut parts.descendants, key, class_name, &stripped);
                }
            }
        }
    }

    Ok(parts)
}

fn register(
    descendants: &mut Vec<ExpandedDescendant>,
    key: &str,
    class_name: &str,
    style: &Rc<StyleNode>,
) {
    let entry = ExpandedDescendant {
        descendant_key: key.to_string(),
        class_name: class_name.to_string(),
        style: Rc::clone(style),
    };
    match descendants
        .iter_mut()
        .find(|d| d.descendant_key == key && d.class_name == class_name)
    {
        Some(existing) => *existing = entry,
        None => descendants.push(entry),
    }
}
