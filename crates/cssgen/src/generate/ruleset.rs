//! Formatting of one selector's declarations into a ruleset.
//!
//! Steps, in order: string handlers, prefixing, property name conversion and
//! value stringification, then `!important` marking. A selector with no
//! declarations produces no text at all.

use crate::error::Result;
use crate::generate::options::CompileOptions;
use crate::generate::prefix::Declarations;
use crate::generate::property::kebab_case;
use crate::generate::units::stringify_value;
use crate::tree::StyleValue;

const IMPORTANT: &str = "!important";

/// Formats `declarations` as `selector{prop:value;...}`.
///
/// ```
/// use cssgen::{format_ruleset, CompileOptions, Declarations};
///
/// let declarations: Declarations = [("fontSize", 12)].into_iter().collect();
/// let css = format_ruleset(".a", &declarations, &CompileOptions::new()).unwrap();
/// assert_eq!(css, ".a{font-size:12px !important;}");
/// ```
pub fn format_ruleset(
    selector: &str,
    declarations: &Declarations,
    options: &CompileOptions,
) -> Result<String> {
    let handled: Declarations = declarations
        .iter()
        .map(|(property, value)| (property, options.string_handlers.apply(property, value)))
        .collect();

    let prefixed = options.prefixer.prefix(handled);

    let mut rules = String::new();
    for (property, value) in prefixed.iter() {
        let name = kebab_case(property);
        match value {
            StyleValue::List(alternatives) => {
                for alternative in alternatives {
                    push_declaration(&mut rules, &name, alternative, options)?;
                }
            }
            scalar => push_declaration(&mut rules, &name, scalar, options)?,
        }
    }

    if rules.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{selector}{{{rules}}}"))
    }
}

fn push_declaration(
    rules: &mut String,
    name: &str,
    value: &StyleValue,
    options: &CompileOptions,
) -> Result<()> {
    let value = stringify_value(name, value, &options.units)?;
    let declaration = format!("{name}:{value};");
    if options.important.is_enabled() {
        rules.push_str(&importantify(&declaration));
    } else {
        rules.push_str(&declaration);
    }
    Ok(())
}

/// Marks a single `prop:value;` declaration as `!important`.
///
/// Declarations that already carry the marker are returned unchanged.
///
/// ```
/// use cssgen::importantify;
///
/// assert_eq!(importantify("color:red;"), "color:red !important;");
/// assert_eq!(importantify("color:red !important;"), "color:red !important;");
/// ```
pub fn importantify(declaration: &str) -> String {
    let body = declaration.strip_suffix(';').unwrap_or(declaration);
    if body.trim_end().ends_with(IMPORTANT) {
        format!("{body};")
    } else {
        format!("{body} {IMPORTANT};")
    }
}
