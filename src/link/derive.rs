//! Slug derivation for objects and their ancestors.

use std::borrow::Cow;

use super::target::LinkTarget;
use crate::config::SlugConfig;
use crate::content::ContentObject;
use crate::error::{LinkError, Result};
use crate::utils::slug::slugify;

/// Slug for `object`: its explicit slug, else the target's default field.
///
/// Fails when neither yields text, or when the text has nothing slugifiable
/// in it.
pub(crate) fn slug_for<T: LinkTarget + ?Sized>(
    object: &dyn ContentObject,
    target: &T,
    config: &SlugConfig,
) -> Result<String> {
    let field = target.default_slug_field();
    let missing = || LinkError::MissingSlug {
        field: field.to_string(),
    };

    let explicit = object
        .explicit_slug()
        .and_then(|capability| capability.slug())
        .filter(|slug| !slug.is_empty());

    let source: Cow<'_, str> = match explicit {
        Some(slug) => Cow::Borrowed(slug),
        None => {
            let value = object
                .slug_fields()
                .and_then(|fields| fields.field(field))
                .filter(|value| !value.is_empty())
                .ok_or_else(missing)?;
            if target.lowercase_default_slug() {
                Cow::Owned(value.to_lowercase())
            } else {
                Cow::Borrowed(value)
            }
        }
    };

    let slug = slugify(&source, config);
    if slug.is_empty() {
        return Err(missing());
    }
    Ok(slug)
}
