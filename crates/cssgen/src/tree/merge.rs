//! Deep merging of style fragments.
//!
//! Fragments are folded left to right. When both sides hold a nested block
//! under the same key the blocks are merged recursively; any other collision
//! is won by the later fragment. Lists are leaves and are replaced outright.

use crate::error::{CssGenError, Result};
use crate::tree::node::{StyleNode, StyleValue};

/// Merges an ordered sequence of fragments into one tree.
///
/// The inputs are not modified.
///
/// # Example
///
/// ```
/// use cssgen::{merge_styles, StyleNode, StyleValue};
///
/// let merged = merge_styles(&[
///     StyleNode::new().with("color", "red"),
///     StyleNode::new().with("color", "blue"),
/// ])
/// .unwrap();
///
/// assert_eq!(merged.get("color"), Some(&StyleValue::from("blue")));
/// ```
pub fn merge_styles(fragments: &[StyleNode]) -> Result<StyleNode> {
    let (first, rest) = fragments.split_first().ok_or(CssGenError::EmptyInput)?;

    let merged = rest.iter().fold(first.clone(), |mut acc, fragment| {
        merge_into(&mut acc, fragment);
        acc
    });

    log::debug!(
        "merged {} fragment(s) into {} top-level key(s)",
        fragments.len(),
        merged.len()
    );
    Ok(merged)
}

/// Merges `incoming` on top of `target`.
pub fn merge_into(target: &mut StyleNode, incoming: &StyleNode) {
    for name in incoming.names() {
        target.add_name(name.clone());
    }

    for (key, value) in incoming.iter() {
        if let StyleValue::Node(nested) = value {
            if let Some(StyleValue::Node(existing)) = target.get_mut(key) {
                merge_into(existing, nested);
                continue;
            }
        }
        target.insert(key, value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_fragment_is_identity() {
        let style = StyleNode::new()
            .with("color", "red")
            .with(":hover", StyleNode::new().with("color", "blue"));

        assert_eq!(merge_styles(&[style.clone()]).unwrap(), style);
    }

    #[test]
    fn later_fragment_wins() {
        let merged = merge_styles(&[
            StyleNode::new().with("color", "red"),
            StyleNode::new().with("color", "blue"),
        ])
        .unwrap();

        assert_eq!(merged.get("color"), Some(&StyleValue::from("blue")));
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn disjoint_keys_union_in_either_order() {
        let a = StyleNode::new().with("color", "red");
        let b = StyleNode::new().with("margin", 10);

        let ab = merge_styles(&[a.clone(), b.clone()]).unwrap();
        let ba = merge_styles(&[b, a]).unwrap();

        for key in ["color", "margin"] {
            assert_eq!(ab.get(key), ba.get(key));
        }
        assert_eq!(ab.len(), 2);
        assert_eq!(ba.len(), 2);
    }

    #[test]
    fn nested_blocks_merge_recursively() {
        let merged = merge_styles(&[
            StyleNode::new().with(
                ":hover",
                StyleNode::new().with("color", "red").with("margin", 1),
            ),
            StyleNode::new().with(":hover", StyleNode::new().with("color", "blue")),
        ])
        .unwrap();

        let hover = merged.get(":hover").and_then(StyleValue::as_node).unwrap();
        assert_eq!(hover.get("color"), Some(&StyleValue::from("blue")));
        assert_eq!(hover.get("margin"), Some(&StyleValue::from(1)));
    }

    #[test]
    fn lists_are_replaced_outright() {
        let merged = merge_styles(&[
            StyleNode::new().with("display", vec!["-webkit-box", "flex"]),
            StyleNode::new().with("display", vec!["grid"]),
        ])
        .unwrap();

        assert_eq!(merged.get("display"), Some(&StyleValue::from(vec!["grid"])));
    }

    #[test]
    fn descendant_names_are_unioned() {
        let merged = merge_styles(&[
            StyleNode::new().with(">>item", StyleNode::new().named("x")),
            StyleNode::new().with(">>item", StyleNode::new().named("y").named("x")),
        ])
        .unwrap();

        let item = merged.get(">>item").and_then(StyleValue::as_node).unwrap();
        assert_eq!(item.names(), ["x", "y"]);
    }

    #[test]
    fn inputs_are_not_modified() {
        let a = StyleNode::new().with(":hover", StyleNode::new().with("color", "red"));
        let b = StyleNode::new().with(":hover", StyleNode::new().with("margin", 2));
        let before = a.clone();

        merge_styles(&[a.clone(), b]).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(merge_styles(&[]), Err(CssGenError::EmptyInput)));
    }
}
