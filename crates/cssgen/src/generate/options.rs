//! Per-call compile configuration.
//!
//! Everything that shapes the output of a compile is carried in a
//! [`CompileOptions`] value passed by the caller. There is no global state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::generate::prefix::{NoopPrefixer, Prefixer};
use crate::generate::units::UnitPolicy;
use crate::tree::StyleValue;

/// Formats the raw value of one property before prefixing.
pub type StringHandler = Arc<dyn Fn(&StyleValue) -> StyleValue + Send + Sync>;

/// Property name to [`StringHandler`] mapping. Keys match the style keys as
/// written in the tree (e.g. `fontFamily`).
#[derive(Clone, Default)]
pub struct StringHandlers {
    handlers: HashMap<String, StringHandler>,
}

impl StringHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<F>(&mut self, property: impl Into<String>, handler: F)
    where
        F: Fn(&StyleValue) -> StyleValue + Send + Sync + 'static,
    {
        self.handlers.insert(property.into(), Arc::new(handler));
    }

    pub fn get(&self, property: &str) -> Option<&StringHandler> {
        self.handlers.get(property)
    }

    /// Runs the handler for `property`, or clones the value when none is set.
    pub fn apply(&self, property: &str, value: &StyleValue) -> StyleValue {
        match self.handlers.get(property) {
            Some(handler) => handler(value),
            None => value.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for StringHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.handlers.keys().collect();
        keys.sort();
        f.debug_set().entries(keys).finish()
    }
}

/// Whether declarations are marked `!important`.
///
/// Only an explicit `Disabled` turns marking off; leaving it unset keeps it on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Important {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl Important {
    pub fn is_enabled(self) -> bool {
        self != Important::Disabled
    }
}

impl From<bool> for Important {
    fn from(value: bool) -> Self {
        if value {
            Important::Enabled
        } else {
            Important::Disabled
        }
    }
}

impl From<Option<bool>> for Important {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Important::Unset, Important::from)
    }
}

/// Configuration for one compile call.
///
/// ```
/// use cssgen::{CompileOptions, StyleValue};
///
/// let options = CompileOptions::new()
///     .important(false)
///     .handler("content", |v: &StyleValue| match v {
///         StyleValue::Str(s) => StyleValue::Str(format!("\"{s}\"")),
///         other => other.clone(),
///     });
///
/// assert!(!options.important.is_enabled());
/// ```
#[derive(Clone)]
pub struct CompileOptions {
    pub important: Important,
    pub string_handlers: StringHandlers,
    pub units: UnitPolicy,
    pub prefixer: Arc<dyn Prefixer>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            important: Important::Unset,
            string_handlers: StringHandlers::new(),
            units: UnitPolicy::default(),
            prefixer: Arc::new(NoopPrefixer),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn important(mut self, important: impl Into<Important>) -> Self {
        self.important = important.into();
        self
    }

    pub fn handler<F>(mut self, property: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&StyleValue) -> StyleValue + Send + Sync + 'static,
    {
        self.string_handlers.insert(property, handler);
        self
    }

    pub fn string_handlers(mut self, handlers: StringHandlers) -> Self {
        self.string_handlers = handlers;
        self
    }

    pub fn units(mut self, units: UnitPolicy) -> Self {
        self.units = units;
        self
    }

    pub fn prefixer(mut self, prefixer: impl Prefixer + 'static) -> Self {
        self.prefixer = Arc::new(prefixer);
        self
    }
}

impl fmt::Debug for CompileOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompileOptions")
            .field("important", &self.important)
            .field("string_handlers", &self.string_handlers)
            .field("units", &self.units)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn important_is_on_unless_disabled() {
        assert!(Important::Unset.is_enabled());
        assert!(Important::from(true).is_enabled());
        assert!(Important::from(None).is_enabled());
        assert!(!Important::from(Some(false)).is_enabled());
    }

    #[test]
    fn handlers_only_touch_their_property() {
        let mut handlers = StringHandlers::new();
        handlers.insert("fontFamily", |_: &StyleValue| StyleValue::from("serif"));

        let raw = StyleValue::from("Georgia");
        assert_eq!(handlers.apply("fontFamily", &raw), StyleValue::from("serif"));
        assert_eq!(handlers.apply("color", &raw), raw);
    }
}
