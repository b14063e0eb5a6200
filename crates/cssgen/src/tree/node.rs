//! Style tree data structures.
//!
//! A [`StyleNode`] is one scope of style: an ordered list of keyed values plus
//! the class names (`_names`) the scope can be reached through. Keys are
//! classified by their prefix into a [`KeyKind`].

/// Marker that introduces a descendant block key, e.g. `>>span`.
pub const DESCENDANT_MARKER: &str = ">>";

/// Reserved field carrying the class names of a descendant block in
/// serialized fragments. Never stored as an entry.
pub const NAMES_FIELD: &str = "_names";

/// The category of a style key, decided by its prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    /// Plain CSS property, e.g. `color` or `fontSize`.
    Declaration,
    /// Pseudo-class or pseudo-element fragment, e.g. `:hover`.
    Pseudo,
    /// Media query, e.g. `@media (min-width: 100px)`.
    Media,
    /// Descendant block, e.g. `>>item`.
    Descendant,
}

impl KeyKind {
    /// Classifies a key by its prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use cssgen::KeyKind;
    ///
    /// assert_eq!(KeyKind::of(":hover"), KeyKind::Pseudo);
    /// assert_eq!(KeyKind::of("@media print"), KeyKind::Media);
    /// assert_eq!(KeyKind::of(">>label"), KeyKind::Descendant);
    /// assert_eq!(KeyKind::of("color"), KeyKind::Declaration);
    /// ```
    pub fn of(key: &str) -> Self {
        if key.starts_with(':') {
            KeyKind::Pseudo
        } else if key.starts_with('@') {
            KeyKind::Media
        } else if key.starts_with(DESCENDANT_MARKER) {
            KeyKind::Descendant
        } else {
            KeyKind::Declaration
        }
    }

    /// True for keys whose value must be a nested [`StyleNode`].
    pub fn is_nested(self) -> bool {
        !matches!(self, KeyKind::Declaration)
    }
}

/// A value stored under a style key.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Keyword or preformatted value, emitted verbatim.
    Str(String),
    /// Numeric value; gets the default length unit unless the property is unitless.
    Number(f64),
    /// Ordered fallback alternatives, emitted as repeated declarations.
    List(Vec<StyleValue>),
    /// Nested scope (pseudo, media or descendant block).
    Node(StyleNode),
}

impl StyleValue {
    pub fn as_node(&self) -> Option<&StyleNode> {
        match self {
            StyleValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, StyleValue::Node(_))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<StyleNode> for StyleValue {
    fn from(node: StyleNode) -> Self {
        StyleValue::Node(node)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        StyleValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// One scope of style.
///
/// Entries keep insertion order. Setting a key that already exists replaces
/// its value in place, so the key keeps its original position.
///
/// # Example
///
/// ```
/// use cssgen::StyleNode;
///
/// let node = StyleNode::new()
///     .with("color", "red")
///     .with(":hover", StyleNode::new().with("color", "blue"));
///
/// assert_eq!(node.len(), 2);
/// assert!(node.get(":hover").unwrap().is_node());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleNode {
    entries: Vec<(String, StyleValue)>,
    names: Vec<String>,
}

impl StyleNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleNode::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`StyleNode::add_name`].
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.add_name(name);
        self
    }

    /// Sets `key` to `value`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut StyleValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Class names this scope can be reached through.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Records a class name, ignoring duplicates.
    pub fn add_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    /// Returns a copy of this node with its class names removed.
    pub fn without_names(&self) -> StyleNode {
        StyleNode {
            entries: self.entries.clone(),
            names: Vec::new(),
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleNode {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = StyleNode::new();
        for (key, value) in iter {
            node.insert(key, value);
        }
        node
    }
}
