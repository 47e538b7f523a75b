//! Content model read by the link generator.
//!
//! | Module     | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `object`   | Data objects being linked to, slug capabilities  |
//! | `document` | Localized document tree nodes and properties     |

mod document;
mod object;

pub use document::{DocumentId, DocumentNode, Property};
pub use object::{
    ContentObject, DataObject, HasDefaultSlugField, HasExplicitSlug, ObjectId, ObjectType,
};
