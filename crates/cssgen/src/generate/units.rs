//! Numeric value formatting and the unitless property policy.

use std::collections::HashSet;

use phf::phf_set;

use crate::error::{CssGenError, Result};
use crate::generate::property::{kebab_case, strip_vendor_prefix};
use crate::tree::StyleValue;

/// Properties whose numeric values are dimensionless.
static UNITLESS: phf::Set<&'static str> = phf_set! {
    "animation-iteration-count",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "flex",
    "flex-grow",
    "flex-positive",
    "flex-shrink",
    "flex-negative",
    "flex-order",
    "grid-row",
    "grid-column",
    "font-weight",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
    "fill-opacity",
    "flood-opacity",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
};

/// Decides which numeric properties receive a length unit.
///
/// Starts from the built-in unitless list; individual properties can be
/// added to or removed from it. Names are accepted in camel or kebab case.
///
/// ```
/// use cssgen::UnitPolicy;
///
/// let policy = UnitPolicy::default().unitless("aspectRatio").with_unit("zoom");
/// assert!(policy.is_unitless("aspect-ratio"));
/// assert!(!policy.is_unitless("zoom"));
/// assert!(policy.is_unitless("opacity"));
/// ```
#[derive(Clone, Debug)]
pub struct UnitPolicy {
    unit: String,
    unitless: HashSet<String>,
    with_unit: HashSet<String>,
}

impl Default for UnitPolicy {
    fn default() -> Self {
        Self {
            unit: String::from("px"),
            unitless: HashSet::new(),
            with_unit: HashSet::new(),
        }
    }
}

impl UnitPolicy {
    /// Uses `unit` instead of `px` for numeric lengths.
    pub fn default_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Treats `property` as unitless.
    pub fn unitless(mut self, property: &str) -> Self {
        let property = kebab_case(property);
        self.with_unit.remove(&property);
        self.unitless.insert(property);
        self
    }

    /// Gives `property` the default unit even if it is unitless by default.
    pub fn with_unit(mut self, property: &str) -> Self {
        let property = kebab_case(property);
        self.unitless.remove(&property);
        self.with_unit.insert(property);
        self
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// True when numbers for the kebab-case `property` take no unit.
    pub fn is_unitless(&self, property: &str) -> bool {
        if property.starts_with("--") {
            return true;
        }
        let base = strip_vendor_prefix(property);
        if self.with_unit.contains(property) || self.with_unit.contains(base) {
            return false;
        }
        self.unitless.contains(property)
            || self.unitless.contains(base)
            || UNITLESS.contains(base)
    }
}

/// Writes a single leaf value for the kebab-case `property`.
///
/// Lists are expanded by the caller, so a list here means a list nested in
/// a list, which has no CSS spelling.
pub fn stringify_value(property: &str, value: &StyleValue, policy: &UnitPolicy) -> Result<String> {
    match value {
        StyleValue::Str(s) => Ok(s.clone()),
        StyleValue::Number(n) if !n.is_finite() => Err(CssGenError::InvalidValue {
            property: property.to_string(),
            reason: format!("{n} is not a finite number"),
        }),
        StyleValue::Number(n) if policy.is_unitless(property) => Ok(n.to_string()),
        StyleValue::Number(n) => Ok(format!("{n}{}", policy.unit)),
        StyleValue::List(_) => Err(CssGenError::InvalidValue {
            property: property.to_string(),
            reason: String::from("nested fallback lists are not supported"),
        }),
        StyleValue::Node(_) => Err(CssGenError::InvalidDeclaration {
            property: property.to_string(),
        }),
    }
}
