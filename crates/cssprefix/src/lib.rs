//! # cssprefix - vendor prefixing for generated CSS
//!
//! A table-driven [`Prefixer`] for [`cssgen`]. For every declaration it
//! emits the vendor-prefixed copies of the property first, then the
//! property itself. Keyword values with legacy spellings (`display: flex`,
//! `position: sticky`, gradients, intrinsic sizes) become an ordered fallback
//! list that ends in the standard value.
//!
//! Property names keep the spelling they came in with: camel-case input
//! gets camel-case prefixes (`WebkitTransform`), kebab-case input gets
//! kebab-case prefixes (`-webkit-transform`).
//!
//! ```rust
//! use cssgen::{CompileOptions, StyleNode, generate_css};
//! use cssprefix::VendorPrefixer;
//!
//! let options = CompileOptions::new().important(false).prefixer(VendorPrefixer);
//! let css = generate_css(
//!     ".a",
//!     &[StyleNode::new().with("userSelect", "none")],
//!     &options,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     css,
//!     ".a{-webkit-user-select:none;-moz-user-select:none;-ms-user-select:none;user-select:none;}"
//! );
//! ```

pub mod tables;

use std::collections::HashSet;

use cssgen::{Declarations, Prefixer, StyleValue, kebab_case};

use crate::tables::{
    CURSOR_VALUES, DISPLAY_VALUES, GRADIENT_FUNCTIONS, GRADIENT_PROPERTIES, POSITION_VALUES,
    PROPERTY_PREFIXES, SIZING_PROPERTIES, SIZING_VALUES, Vendor,
};

/// Prefixes declarations using the built-in vendor tables.
///
/// Output order depends only on input order, so identical input always
/// yields identical output.
#[derive(Clone, Copy, Debug, Default)]
pub struct VendorPrefixer;

impl Prefixer for VendorPrefixer {
    fn prefix(&self, declarations: Declarations) -> Declarations {
        let mut out = Declarations::new();
        // `WebkitTransform` and `-webkit-transform` name the same property
        let written: HashSet<String> = declarations.iter().map(|(p, _)| kebab_case(p)).collect();

        for (property, value) in declarations.iter() {
            let kebab = kebab_case(property);

            if let Some(vendors) = PROPERTY_PREFIXES.get(kebab.as_str()) {
                for vendor in vendors.iter() {
                    let prefixed = prefixed_name(property, *vendor);
                    if !written.contains(&kebab_case(&prefixed)) {
                        log::trace!("prefixing '{}' as '{}'", property, prefixed);
                        out.insert(prefixed, value.clone());
                    }
                }
            }

            out.insert(property, prefix_value(&kebab, value));
        }

        out
    }
}

/// Spells `property` with `vendor`'s prefix, keeping its casing convention.
pub fn prefixed_name(property: &str, vendor: Vendor) -> String {
    if property.contains('-') {
        return format!("{}{}", vendor.kebab(), property);
    }

    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{}{}",
            vendor.camel(),
            first.to_ascii_uppercase(),
            chars.as_str()
        ),
        None => vendor.camel().to_string(),
    }
}

/// Expands a value into legacy fallbacks for the kebab-case `property`.
///
/// Values without legacy spellings are returned unchanged.
pub fn prefix_value(property: &str, value: &StyleValue) -> StyleValue {
    let StyleValue::Str(keyword) = value else {
        return value.clone();
    };
    let keyword = keyword.trim();

    let table = match property {
        "display" => Some(&DISPLAY_VALUES),
        "position" => Some(&POSITION_VALUES),
        "cursor" => Some(&CURSOR_VALUES),
        p if SIZING_PROPERTIES.contains(&p) => Some(&SIZING_VALUES),
        _ => None,
    };

    if let Some(fallbacks) = table.and_then(|t| t.get(keyword)) {
        return StyleValue::List(fallbacks.iter().map(|v| StyleValue::from(*v)).collect());
    }

    if GRADIENT_PROPERTIES.contains(&property) && has_unprefixed_gradient(keyword) {
        return StyleValue::List(vec![
            StyleValue::Str(prefix_gradients(keyword, "-webkit-")),
            StyleValue::Str(prefix_gradients(keyword, "-moz-")),
            StyleValue::Str(keyword.to_string()),
        ]);
    }

    value.clone()
}

fn has_unprefixed_gradient(value: &str) -> bool {
    !value.contains("-webkit-") && GRADIENT_FUNCTIONS.iter().any(|f| value.contains(f))
}

fn prefix_gradients(value: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(value.len() + 16);
    let mut rest = value;

    while let Some((index, function)) = GRADIENT_FUNCTIONS
        .iter()
        .filter_map(|f| rest.find(f).map(|i| (i, *f)))
        // the longest match wins so `repeating-` is not split
        .min_by_key(|(i, f)| (*i, std::cmp::Reverse(f.len())))
    {
        out.push_str(&rest[..index]);
        out.push_str(prefix);
        out.push_str(function);
        rest = &rest[index + function.len()..];
    }
    out.push_str(rest);
    out
}
