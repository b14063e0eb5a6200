//! The vendor prefixing seam.
//!
//! The compiler hands each scope's declarations to a [`Prefixer`] exactly
//! once, after string handlers have run. A prefixer may add prefixed
//! properties or turn a value into an ordered [`StyleValue::List`] of
//! fallbacks. The compiler itself knows no vendor tables.

use crate::tree::StyleValue;

/// Ordered `(property, value)` pairs for one scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(String, StyleValue)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an existing value in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Declarations {
    type Item = (String, StyleValue);
    type IntoIter = std::vec::IntoIter<(String, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut declarations = Declarations::new();
        for (property, value) in iter {
            declarations.insert(property, value);
        }
        declarations
    }
}

/// Pure transform from declarations to prefixed declarations.
pub trait Prefixer: Send + Sync {
    fn prefix(&self, declarations: Declarations) -> Declarations;
}

/// Returns declarations unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPrefixer;

impl Prefixer for NoopPrefixer {
    fn prefix(&self, declarations: Declarations) -> Declarations {
        declarations
    }
}

impl<F> Prefixer for F
where
    F: Fn(Declarations) -> Declarations + Send + Sync,
{
    fn prefix(&self, declarations: Declarations) -> Declarations {
        self(declarations)
    }
}
