//! The recursive ruleset compiler.
//!
//! For one scope the output is the concatenation, in order, of:
//!
//! 1. the ruleset for the scope's own declarations
//! 2. each pseudo block, compiled under `selector ++ pseudo`
//! 3. each media block, compiled under the same selector and wrapped in
//!    `query{...}`
//! 4. each resolved descendant, compiled under `selector .class-name`
//!
//! Fragments are joined with no separator and empty fragments add nothing.

use crate::error::Result;
use crate::generate::options::CompileOptions;
use crate::generate::partition::partition;
use crate::generate::ruleset::format_ruleset;
use crate::tree::{DescendantNames, StyleNode, collect_descendant_names, merge_styles};

/// Compiles `style` into CSS scoped to `selector`.
///
/// `names` maps descendant keys anywhere in the tree to the class names they
/// resolve to; see [`collect_descendant_names`].
pub fn compile(
    selector: &str,
    style: &StyleNode,
    options: &CompileOptions,
    names: &DescendantNames,
) -> Result<String> {
    log::trace!("compiling scope '{}' ({} keys)", selector, style.len());

    let parts = partition(style, names)?;
    let mut css = format_ruleset(selector, &parts.declarations, options)?;

    for (pseudo, nested) in &parts.pseudo_styles {
        let scoped = format!("{selector}{pseudo}");
        css.push_str(&compile(&scoped, nested, options, names)?);
    }

    for (query, nested) in &parts.media_queries {
        let inner = compile(selector, nested, options, names)?;
        if !inner.is_empty() {
            css.push_str(query);
            css.push('{');
            css.push_str(&inner);
            css.push('}');
        }
    }

    for descendant in &parts.descendants {
        let scoped = format!("{selector} .{}", descendant.class_name);
        css.push_str(&compile(&scoped, &descendant.style, options, names)?);
    }

    Ok(css)
}

/// Merges `fragments`, collects descendant names, and compiles the result.
///
/// ```
/// use cssgen::{generate_css, CompileOptions, StyleNode};
///
/// let css = generate_css(
///     ".button_x1",
///     &[
///         StyleNode::new().with("color", "red"),
///         StyleNode::new().with(":hover", StyleNode::new().with("color", "blue")),
///     ],
///     &CompileOptions::new().important(false),
/// )
/// .unwrap();
///
/// assert_eq!(css, ".button_x1{color:red;}.button_x1:hover{color:blue;}");
/// ```
pub fn generate_css(
    selector: &str,
    fragments: &[StyleNode],
    options: &CompileOptions,
) -> Result<String> {
    let merged = merge_styles(fragments)?;
    let names = collect_descendant_names(&merged)?;
    compile(selector, &merged, options, &names)
}
