//! The [`Element`] node type.

use smallvec::SmallVec;

/// One node in a distribution document.
///
/// Attribute keys are case-sensitive and unique; setting an existing key
/// replaces its value in place, so attribute order is insertion order and
/// stays stable across updates. Children keep the order they were appended
/// in — child order is semantically significant to the consuming engine
/// (weighted entries are sampled in document order).
///
/// The optional text body is only ever used for `Description` children;
/// every other node carries data exclusively in attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: SmallVec<[(String, String); 8]>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Create an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// The element tag, e.g. `"Veins"` or `"Setting"`.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any existing value under the same key.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes set on this element.
    #[must_use]
    pub fn attr_count(&self) -> usize {
        self.attributes.len()
    }

    /// Append a new empty child with the given tag and return it for
    /// population, in the spirit of a sub-element constructor.
    pub fn push_child(&mut self, tag: impl Into<String>) -> &mut Element {
        let index = self.children.len();
        self.children.push(Element::new(tag));
        &mut self.children[index]
    }

    /// Append an already-built child element.
    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Children with a given tag, in document order.
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Set the text body.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// The text body, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_attr_replaces_in_place() {
        let mut element = Element::new("Veins");
        element.set_attr("name", "copper");
        element.set_attr("seed", "1234");
        element.set_attr("name", "tin");

        assert_eq!(element.attr_count(), 2);
        assert_eq!(element.attr("name"), Some("tin"));
        let keys: Vec<_> = element.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, ["name", "seed"]);
    }

    #[test]
    fn children_keep_append_order() {
        let mut element = Element::new("Veins");
        element.push_child("OreBlock").set_attr("block", "a");
        element.push_child("Setting").set_attr("name", "Size");
        element.push_child("OreBlock").set_attr("block", "b");

        let tags: Vec<_> = element.children().iter().map(Element::tag).collect();
        assert_eq!(tags, ["OreBlock", "Setting", "OreBlock"]);

        let blocks: Vec<_> = element
            .children_tagged("OreBlock")
            .filter_map(|c| c.attr("block"))
            .collect();
        assert_eq!(blocks, ["a", "b"]);
    }

    #[test]
    fn text_body_defaults_to_none() {
        let mut element = Element::new("Description");
        assert_eq!(element.text(), None);
        element.set_text("iron, but more so");
        assert_eq!(element.text(), Some("iron, but more so"));
    }
}
