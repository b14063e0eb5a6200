//! CSS generation from merged style trees.
//!
//! - [`compile`] / [`generate_css`]: recursive compilation of a tree
//! - [`partition`]: key classification into buckets
//! - [`format_ruleset`]: one selector's declarations as a ruleset
//! - [`CompileOptions`]: string handlers, `!important` policy, units, prefixer
//!
//! ## Submodules
//!
//! - [`compile`]: scope recursion and output stitching
//! - [`partition`]: bucket split and descendant fan-out
//! - [`ruleset`]: declaration formatting and `!important` marking
//! - [`property`]: camel-case to kebab-case names
//! - [`units`]: numeric values and the unitless policy
//! - [`prefix`]: the vendor prefixing seam
//! - [`options`]: per-call configuration

pub mod compile;
pub mod options;
pub mod partition;
pub mod prefix;
pub mod property;
pub mod ruleset;
pub mod units;

pub use crate::generate::compile::{compile, generate_css};
pub use crate::generate::options::{CompileOptions, Important, StringHandler, StringHandlers};
pub use crate::generate::partition::{ExpandedDescendant, Partition, partition};
pub use crate::generate::prefix::{Declarations, NoopPrefixer, Prefixer};
pub use crate::generate::property::{kebab_case, strip_vendor_prefix};
pub use crate::generate::ruleset::{format_ruleset, importantify};
pub use crate::generate::units::{UnitPolicy, stringify_value};
