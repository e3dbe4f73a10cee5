//! Ordered attribute and style maps
//!
//! Both maps keep the position of the first insertion of a key; a later write
//! replaces the value in place. `class` is the one attribute with a second
//! merge rule: shorthand class tokens append to it instead of replacing it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The attribute that accumulates shorthand class tokens.
pub const CLASS: &str = "class";

/// The attribute set by `#id` shorthand tokens.
pub const ID: &str = "id";

/// Element attributes in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Append a class name, space separated, to the `class` attribute.
    pub fn append_class(&mut self, class: &str) {
        match self.0.get_mut(CLASS) {
            Some(existing) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some(existing) => existing.push_str(class),
            None => {
                self.0.insert(CLASS.to_string(), class.to_string());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Inline style declarations in first-insertion order, last value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles(IndexMap<String, String>);

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Styles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut styles = Styles::new();
        for (property, value) in iter {
            styles.set(property, value);
        }
        styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("src", "a.png");
        attrs.set("alt", "A");
        attrs.set("src", "b.png");

        assert_eq!(attrs.get("src"), Some("b.png"));
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["src", "alt"]);
    }

    #[test]
    fn test_append_class_joins_with_space() {
        let mut attrs = Attributes::new();
        attrs.append_class("card");
        attrs.set(ID, "main");
        attrs.append_class("wide");

        assert_eq!(attrs.get(CLASS), Some("card wide"));
        // class keeps the position of its first insertion
        assert_eq!(attrs.names().collect::<Vec<_>>(), vec!["class", "id"]);
    }

    #[test]
    fn test_set_class_replaces_accumulated_value() {
        let mut attrs = Attributes::new();
        attrs.append_class("a");
        attrs.append_class("b");
        attrs.set(CLASS, "c");

        assert_eq!(attrs.get(CLASS), Some("c"));
    }

    #[test]
    fn test_styles_last_value_wins_first_position_kept() {
        let styles: Styles = [("color", "red"), ("margin", "0"), ("color", "blue")]
            .into_iter()
            .collect();

        assert_eq!(styles.get("color"), Some("blue"));
        assert_eq!(
            styles.properties().collect::<Vec<_>>(),
            vec!["color", "margin"]
        );
    }
}
