//! Data objects and their slug capabilities.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Data object identifier.
pub type ObjectId = i64;

/// Object type tag as stored by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// Regular data object (default).
    #[default]
    Object,
    /// Variant of another object.
    Variant,
    /// Folder; ends the ancestor walk.
    Folder,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Variant => write!(f, "variant"),
            Self::Folder => write!(f, "folder"),
        }
    }
}

/// Object exposes a dedicated slug accessor.
pub trait HasExplicitSlug {
    /// Slug value, `None` when unset.
    fn slug(&self) -> Option<&str>;
}

/// Object exposes named fields usable as slug source.
pub trait HasDefaultSlugField {
    /// Value of the named field, `None` when the field is unknown or unset.
    fn field(&self, name: &str) -> Option<&str>;
}

/// An entity a link can be generated for.
///
/// Capabilities are discovered through [`ContentObject::explicit_slug`] and
/// [`ContentObject::slug_fields`]; both default to "not exposed".
pub trait ContentObject: fmt::Debug + Send + Sync {
    fn id(&self) -> ObjectId;

    /// Class name used by the kind predicate (e.g. `Product`).
    fn class_name(&self) -> &str;

    fn object_type(&self) -> ObjectType;

    fn parent(&self) -> Option<Arc<dyn ContentObject>>;

    fn explicit_slug(&self) -> Option<&dyn HasExplicitSlug> {
        None
    }

    fn slug_fields(&self) -> Option<&dyn HasDefaultSlugField> {
        None
    }

    #[inline]
    fn is_folder(&self) -> bool {
        self.object_type() == ObjectType::Folder
    }
}

// ============================================================================
// DataObject
// ============================================================================

/// Concrete data object backed by a field map.
///
/// `slug: Some(_)` means the class defines a slug field, even when the value
/// is empty. Parents are shared, so an object tree is immutable once built.
#[derive(Debug, Clone)]
pub struct DataObject {
    id: ObjectId,
    class: String,
    kind: ObjectType,
    slug: Option<String>,
    fields: BTreeMap<String, String>,
    parent: Option<Arc<DataObject>>,
}

impl DataObject {
    pub fn new(id: ObjectId, class: impl Into<String>) -> Self {
        Self {
            id,
            class: class.into(),
            kind: ObjectType::Object,
            slug: None,
            fields: BTreeMap::new(),
            parent: None,
        }
    }

    /// Create a folder object.
    pub fn folder(id: ObjectId, key: impl Into<String>) -> Self {
        Self::new(id, "Folder")
            .with_type(ObjectType::Folder)
            .with_field("key", key)
    }

    pub fn with_type(mut self, kind: ObjectType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn with_parent(mut self, parent: Arc<DataObject>) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl ContentObject for DataObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn class_name(&self) -> &str {
        &self.class
    }

    fn object_type(&self) -> ObjectType {
        self.kind
    }

    fn parent(&self) -> Option<Arc<dyn ContentObject>> {
        self.parent
            .as_ref()
            .map(|parent| Arc::clone(parent) as Arc<dyn ContentObject>)
    }

    fn explicit_slug(&self) -> Option<&dyn HasExplicitSlug> {
        self.slug.as_ref().map(|_| self as &dyn HasExplicitSlug)
    }

    fn slug_fields(&self) -> Option<&dyn HasDefaultSlugField> {
        Some(self)
    }
}

impl HasExplicitSlug for DataObject {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl HasDefaultSlugField for DataObject {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
