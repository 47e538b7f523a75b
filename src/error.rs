//! Link generation errors.
//!
//! Every variant is an invalid-input condition: the caller handed the
//! generator something it cannot build a link for. Nothing here is retried
//! or recovered inside the pipeline.

use thiserror::Error;

use crate::content::DocumentId;

/// Result type for link generation.
pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The object is not of the kind this generator links to.
    #[error("Given object is not an instance of {expected} (got {actual})")]
    InvalidObject { expected: String, actual: String },

    /// The resolved document lacks the configured default-document property.
    #[error("Document has no property {0}")]
    MissingProperty(String),

    /// Neither the explicit slug nor the default slug field yielded a value.
    #[error("The object lacks a slug or {field} value")]
    MissingSlug { field: String },

    /// A document path or id could not be resolved by the store.
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentRef),

    /// The URL builder has no route with this name.
    #[error("Unknown route `{0}`")]
    UnknownRoute(String),
}

/// How a missing document was addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentRef {
    Path(String),
    Id(DocumentId),
}

impl std::fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LinkError::MissingProperty("news_default_document".into());
        assert_eq!(
            err.to_string(),
            "Document has no property news_default_document"
        );

        let err = LinkError::InvalidObject {
            expected: "Product".into(),
            actual: "Category".into(),
        };
        assert!(err.to_string().contains("not an instance of Product"));

        let err = LinkError::DocumentNotFound(DocumentRef::Path("/de".into()));
        assert_eq!(err.to_string(), "Document not found: /de");

        let err = LinkError::DocumentNotFound(DocumentRef::Id(42));
        assert_eq!(err.to_string(), "Document not found: #42");
    }
}
