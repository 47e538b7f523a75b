//! Anchor document resolution and base path.
//!
//! The anchor is the document a link is rooted in:
//!
//! 1. start from the explicit document, the request's document, or `/<locale>`
//! 2. if the start is in another language, walk up until a translation
//!    into the target locale is found (else fall back to `/<locale>`)
//! 3. follow the target's default-document property

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::params::LinkParams;
use crate::content::{DocumentNode, Property};
use crate::debug;
use crate::error::{DocumentRef, LinkError, Result};
use crate::host::HostServices;

/// Resolve the anchor document for `locale`.
pub(crate) fn anchor_document(
    host: &HostServices,
    locale: &str,
    property: &str,
    params: &LinkParams,
) -> Result<Arc<DocumentNode>> {
    let start = start_document(host, locale, params)?;
    let localized = localize(host, start, locale)?;
    default_document(host, &localized, property)
}

fn start_document(
    host: &HostServices,
    locale: &str,
    params: &LinkParams,
) -> Result<Arc<DocumentNode>> {
    if let Some(document) = &params.document {
        return Ok(Arc::clone(document));
    }
    if let Some(document) = host.request.current_document() {
        return Ok(document);
    }
    debug!("anchor"; "no document in request, using /{}", locale);
    locale_root(host, locale)
}

fn locale_root(host: &HostServices, locale: &str) -> Result<Arc<DocumentNode>> {
    let path = format!("/{locale}");
    host.documents
        .by_path(&path)
        .ok_or(LinkError::DocumentNotFound(DocumentRef::Path(path)))
}

/// Find the document's counterpart in `locale`.
fn localize(
    host: &HostServices,
    document: Arc<DocumentNode>,
    locale: &str,
) -> Result<Arc<DocumentNode>> {
    if document.language() == Some(locale) {
        return Ok(document);
    }

    let mut visited = FxHashSet::default();
    let mut current = Some(Arc::clone(&document));
    while let Some(node) = current {
        if !visited.insert(node.id) {
            break;
        }
        if let Some(&id) = host.translations.translations(&node).get(locale) {
            match host.documents.by_id(id) {
                Some(translation) => {
                    debug!("anchor"; "{} -> {} via translation of {}", document.path, translation.path, node.path);
                    return Ok(translation);
                }
                None => debug!("anchor"; "translation #{} of {} does not exist", id, node.path),
            }
        }
        current = node.parent.and_then(|parent| host.documents.by_id(parent));
    }

    debug!("anchor"; "no `{}` translation for {}, using /{}", locale, document.path, locale);
    locale_root(host, locale)
}

/// Follow the default-document property.
///
/// A text value is taken as a document path.
fn default_document(
    host: &HostServices,
    document: &DocumentNode,
    property: &str,
) -> Result<Arc<DocumentNode>> {
    match document.property(property) {
        Some(Property::Document { document: id }) => host
            .documents
            .by_id(*id)
            .ok_or(LinkError::DocumentNotFound(DocumentRef::Id(*id))),
        Some(Property::Text(path)) => host
            .documents
            .by_path(path)
            .ok_or_else(|| LinkError::DocumentNotFound(DocumentRef::Path(path.clone()))),
        None => Err(LinkError::MissingProperty(property.to_string())),
    }
}

/// Anchor path relative to the locale root.
///
/// `/en/shop/` -> `shop`, `/en` -> `""`. A path outside `/<locale>` loses its
/// first segment instead.
pub fn base_path(document_path: &str, locale: &str) -> String {
    let root = format!("/{locale}");
    if document_path == root {
        return String::new();
    }

    let rest = match document_path
        .strip_prefix(root.as_str())
        .and_then(|rest| rest.strip_prefix('/'))
    {
        Some(rest) => rest,
        None => document_path
            .trim_start_matches('/')
            .split_once('/')
            .map_or("", |(_, rest)| rest),
    };
    rest.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path() {
        assert_eq!(base_path("/en/home", "en"), "home");
        assert_eq!(base_path("/en/shop/products/", "en"), "shop/products");
        assert_eq!(base_path("/en", "en"), "");
        assert_eq!(base_path("/en/", "en"), "");
    }

    #[test]
    fn test_base_path_other_root() {
        assert_eq!(base_path("/de/shop", "en"), "shop");
        assert_eq!(base_path("/english/shop", "en"), "shop");
        assert_eq!(base_path("/de", "en"), "");
    }
}
