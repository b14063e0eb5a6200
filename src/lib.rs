//! # stylegen
//!
//! Compiles merged style fragments into CSS bound to a generated class
//! selector, with vendor prefixing on by default.
//!
//! This crate wires together [`cssgen`] (the style tree compiler) and
//! [`cssprefix`] (vendor prefix tables), and adds a file logger for the
//! command-line tool.
//!
//! ```rust
//! use stylegen::{StyleNode, css_for_class, default_options};
//!
//! let css = css_for_class(
//!     "row_k2",
//!     &[StyleNode::new().with("display", "flex").with("order", 2)],
//!     &default_options().important(false),
//! )
//! .unwrap();
//!
//! assert!(css.starts_with(".row_k2{display:-webkit-box;"));
//! assert!(css.ends_with("-webkit-order:2;order:2;}"));
//! ```

pub mod error;
pub mod log_init;

pub use cssgen;
pub use cssprefix;

pub use cssgen::{
    CompileOptions, CssGenError, DescendantNames, Important, StyleNode, StyleValue, UnitPolicy,
    collect_descendant_names, compile, generate_css, merge_styles, parse_fragments,
};
pub use cssprefix::VendorPrefixer;
pub use error::{Result, StylegenError};
pub use log_init::{init_logger, log_path};

/// Compile options with the vendor prefixer installed.
pub fn default_options() -> CompileOptions {
    CompileOptions::new().prefixer(VendorPrefixer)
}

/// Compiles `fragments` for the class `class_name` (without the leading dot).
pub fn css_for_class(
    class_name: &str,
    fragments: &[StyleNode],
    options: &CompileOptions,
) -> Result<String> {
    let selector = format!(".{class_name}");
    Ok(generate_css(&selector, fragments, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_becomes_selector() {
        let css = css_for_class(
            "btn_1",
            &[StyleNode::new().with("color", "red")],
            &CompileOptions::new(),
        )
        .unwrap();
        assert_eq!(css, ".btn_1{color:red !important;}");
    }

    #[test]
    fn compile_errors_are_wrapped() {
        let err = css_for_class("x", &[], &default_options()).unwrap_err();
        assert!(matches!(err, StylegenError::Css(CssGenError::EmptyInput)));
    }
}
