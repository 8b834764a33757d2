//! Output attributes for inline nodes and the allow-list consulted when
//! they are written.
//!
//! Attributes never take part in matching; a rule builds its node without
//! them and the host may attach some before rendering.

/// Insertion-ordered `name="value"` pairs attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing the value in place if it is already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (n, v) in iter {
            attrs.set(n, v);
        }
        attrs
    }
}

/// Attribute names an element may carry in output.
///
/// Names outside the list are dropped silently at render time, except
/// `data-*` names which are always allowed. A name that could break out of
/// the attribute (quotes, `<`, `>`, `/`, `=`, whitespace or controls) is
/// never allowed, whatever the list says.
#[derive(Debug, Clone, Copy)]
pub struct AttributeFilter {
    names: &'static [&'static str],
}

impl AttributeFilter {
    const DATA_PREFIX: &'static str = "data-";

    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub fn allows(&self, name: &str) -> bool {
        is_attribute_name(name)
            && (self.names.contains(&name) || name.starts_with(Self::DATA_PREFIX))
    }
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// HTML global attributes, valid on every element.
pub const GLOBAL_ATTRIBUTE_FILTER: AttributeFilter = AttributeFilter::new(&[
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "itemid",
    "itemprop",
    "itemref",
    "itemscope",
    "itemtype",
    "lang",
    "part",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
]);

/// `<sub>` has no element-specific attributes.
pub const SUBSCRIPT_ATTRIBUTE_FILTER: AttributeFilter = GLOBAL_ATTRIBUTE_FILTER;
