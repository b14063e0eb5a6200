//! Property name conversion.

/// Converts a camel-case style key to its CSS property name.
///
/// Capitalised vendor prefixes become hyphenated (`WebkitTransition` becomes
/// `-webkit-transition`), and since the Microsoft prefix is conventionally
/// written lowercase, a result starting with `ms-` gains a leading hyphen.
/// Names that are already kebab-case, including custom properties, pass
/// through unchanged.
///
/// ```
/// use cssgen::kebab_case;
///
/// assert_eq!(kebab_case("fontSize"), "font-size");
/// assert_eq!(kebab_case("msTransition"), "-ms-transition");
/// assert_eq!(kebab_case("--brand-color"), "--brand-color");
/// ```
pub fn kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    if out.starts_with("ms-") {
        out.insert(0, '-');
    }
    out
}

/// Strips a leading vendor prefix from a kebab-case property name.
pub fn strip_vendor_prefix(property: &str) -> &str {
    ["-webkit-", "-moz-", "-ms-", "-o-"]
        .iter()
        .find_map(|prefix| property.strip_prefix(prefix))
        .unwrap_or(property)
}
