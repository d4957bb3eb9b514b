//! Element tree data model for generated distribution documents.
//!
//! An ore distribution document is a tree of [`Element`] nodes: a tag, a set
//! of string attributes, and ordered child elements. The tree is built
//! bottom-up by the `oregen-distribution` assemblers and handed to an
//! external serializer that renders it to markup text; nothing in this crate
//! performs escaping or serialization.

mod element;

pub use element::Element;
