//! Per-call link parameters.

use std::fmt;
use std::sync::Arc;

use crate::content::{ContentObject, DocumentNode};

/// Requested URL form, numbered the way routers number them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceType {
    /// `https://example.com/en/chair`
    AbsoluteUrl,
    /// `/en/chair`
    AbsolutePath,
    /// `../chair`
    RelativePath,
    /// `//example.com/en/chair`
    NetworkPath,
}

impl ReferenceType {
    pub const fn code(self) -> u8 {
        match self {
            Self::AbsoluteUrl => 0,
            Self::AbsolutePath => 1,
            Self::RelativePath => 2,
            Self::NetworkPath => 3,
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::AbsoluteUrl),
            1 => Some(Self::AbsolutePath),
            2 => Some(Self::RelativePath),
            3 => Some(Self::NetworkPath),
            _ => None,
        }
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AbsoluteUrl => "absolute-url",
            Self::AbsolutePath => "absolute-path",
            Self::RelativePath => "relative-path",
            Self::NetworkPath => "network-path",
        };
        write!(f, "{name}")
    }
}

/// Overrides for a single `generate` call. Everything is optional.
#[derive(Debug, Clone, Default)]
pub struct LinkParams {
    /// Locale instead of the ambient one.
    pub locale: Option<String>,
    /// Document to start the anchor lookup from.
    pub document: Option<Arc<DocumentNode>>,
    /// Parent to start the ancestor walk from, instead of the object's own.
    pub parent: Option<Arc<dyn ContentObject>>,
    pub reference_type: Option<ReferenceType>,
}

impl LinkParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_document(mut self, document: Arc<DocumentNode>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_parent(mut self, parent: Arc<dyn ContentObject>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_reference_type(mut self, reference_type: ReferenceType) -> Self {
        self.reference_type = Some(reference_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_type_codes() {
        for code in 0..4 {
            let reference_type = ReferenceType::from_code(code).unwrap();
            assert_eq!(reference_type.code(), code);
        }
        assert_eq!(ReferenceType::from_code(0), Some(ReferenceType::AbsoluteUrl));
        assert_eq!(ReferenceType::from_code(4), None);
    }

    #[test]
    fn test_builder() {
        let params = LinkParams::new()
            .with_locale("de")
            .with_reference_type(ReferenceType::AbsolutePath);
        assert_eq!(params.locale.as_deref(), Some("de"));
        assert_eq!(params.reference_type, Some(ReferenceType::AbsolutePath));
        assert!(params.document.is_none());
        assert!(params.parent.is_none());
    }
}
