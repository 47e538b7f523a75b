//! Localized document tree nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Document identifier.
pub type DocumentId = i64;

/// Name of the property holding a document's language.
pub const LANGUAGE_PROPERTY: &str = "language";

/// A document property value.
///
/// In TOML a text property is a plain string, a document reference is an
/// inline table:
///
/// ```toml
/// language = "en"
/// product_default_document = { document = 12 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Property {
    Text(String),
    Document { document: DocumentId },
}

impl Property {
    /// Text value, `None` for document references.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Document { .. } => None,
        }
    }

    /// Empty text counts as unset.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

/// A node in the host's document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub id: DocumentId,
    /// Full path, e.g. `/en/shop/products`
    pub path: String,
    pub parent: Option<DocumentId>,
    pub properties: BTreeMap<String, Property>,
}

impl DocumentNode {
    pub fn new(id: DocumentId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
            parent: None,
            properties: BTreeMap::new(),
        }
    }

    pub fn with_parent(mut self, parent: DocumentId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: Property) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    pub fn with_language(self, language: impl Into<String>) -> Self {
        self.with_property(LANGUAGE_PROPERTY, Property::Text(language.into()))
    }

    /// Property by name, ignoring empty values.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name).filter(|value| !value.is_empty())
    }

    pub fn language(&self) -> Option<&str> {
        self.property(LANGUAGE_PROPERTY).and_then(Property::as_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_parsing() {
        #[derive(Deserialize)]
        struct Props {
            properties: BTreeMap<String, Property>,
        }
        let parsed: Props = toml::from_str(
            "[properties]\nlanguage = \"de\"\nnews_default_document = { document = 7 }",
        )
        .unwrap();

        assert_eq!(
            parsed.properties["language"],
            Property::Text("de".to_string())
        );
        assert_eq!(
            parsed.properties["news_default_document"],
            Property::Document { document: 7 }
        );
    }

    #[test]
    fn test_empty_property_is_unset() {
        let doc = DocumentNode::new(1, "/en")
            .with_property("default", Property::Text(String::new()))
            .with_language("en");
        assert!(doc.property("default").is_none());
        assert!(doc.property("missing").is_none());
        assert_eq!(doc.language(), Some("en"));
    }
}
