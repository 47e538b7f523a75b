//! Ancestor path accumulation.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::content::ContentObject;
use crate::error::Result;

/// Slugs of the ancestors above the nearest folder, outermost first.
///
/// The walk starts at `start` and stops at the first folder (excluded along
/// with everything above it), at the top of the chain, or when an object
/// shows up a second time.
pub(crate) fn ancestor_slugs<F>(start: Option<Arc<dyn ContentObject>>, mut slug: F) -> Result<Vec<String>>
where
    F: FnMut(&dyn ContentObject) -> Result<String>,
{
    let mut slugs = Vec::new();
    let mut visited = FxHashSet::default();
    let mut current = start;
    while let Some(ancestor) = current {
        if ancestor.is_folder() || !visited.insert(ancestor.id()) {
            break;
        }
        slugs.push(slug(ancestor.as_ref())?);
        current = ancestor.parent();
    }
    slugs.reverse();
    Ok(slugs)
}

/// Join path parts with `/`, skipping empty ones.
pub(crate) fn join_path<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
