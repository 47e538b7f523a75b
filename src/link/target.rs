//! Per-class link settings.

use crate::content::ContentObject;

/// Field read when an object has no explicit slug.
pub const DEFAULT_SLUG_FIELD: &str = "name";

/// What varies between link generators: which objects they accept, where
/// the anchor document comes from and which route renders the URL.
pub trait LinkTarget: Send + Sync {
    /// Class name accepted by [`LinkTarget::accepts`].
    fn object_class(&self) -> &str;

    /// Document property referencing the anchor document.
    fn default_document_property(&self) -> &str;

    /// Kind predicate applied before anything else.
    fn accepts(&self, object: &dyn ContentObject) -> bool {
        object.class_name() == self.object_class()
    }

    fn route_name(&self) -> &str;

    fn default_slug_field(&self) -> &str {
        DEFAULT_SLUG_FIELD
    }

    /// Lower-case the default field value before slugifying.
    fn lowercase_default_slug(&self) -> bool {
        true
    }
}

impl<T: LinkTarget + ?Sized> LinkTarget for &T {
    fn object_class(&self) -> &str {
        (**self).object_class()
    }

    fn default_document_property(&self) -> &str {
        (**self).default_document_property()
    }

    fn accepts(&self, object: &dyn ContentObject) -> bool {
        (**self).accepts(object)
    }

    fn route_name(&self) -> &str {
        (**self).route_name()
    }

    fn default_slug_field(&self) -> &str {
        (**self).default_slug_field()
    }

    fn lowercase_default_slug(&self) -> bool {
        (**self).lowercase_default_slug()
    }
}
