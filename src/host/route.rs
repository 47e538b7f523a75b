//! Named route patterns and absolute URL generation.
//!
//! A route pattern is a path with placeholders:
//!
//! | Placeholder    | Value                                  |
//! |----------------|----------------------------------------|
//! | `{_locale}`    | Locale, e.g. `en`                      |
//! | `{path}`       | Accumulated document/ancestor path     |
//! | `{objectSlug}` | Slug of the linked object              |
//! | `{objectId}`   | Id of the linked object                |
//!
//! Empty placeholders do not leave empty segments behind:
//! `/{_locale}/{path}/{objectSlug}` with an empty path renders `/en/chair`.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rustc_hash::FxHashMap;
use url::Url;

use super::{UrlBuilder, UrlGenerator, UrlParams};
use crate::error::{LinkError, Result};

/// Characters kept verbatim inside a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Placeholders a route pattern may reference.
pub const PLACEHOLDERS: [&str; 4] = ["{_locale}", "{path}", "{objectSlug}", "{objectId}"];

// ============================================================================
// RouteTable
// ============================================================================

/// Route name -> pattern lookup implementing [`UrlBuilder`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: FxHashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }

    pub fn from_routes(routes: &BTreeMap<String, String>) -> Self {
        Self {
            routes: routes
                .iter()
                .map(|(name, pattern)| (name.clone(), pattern.clone()))
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }
}

impl UrlBuilder for RouteTable {
    fn build(&self, params: &UrlParams, route: &str, absolute: bool) -> Result<String> {
        let pattern = self
            .routes
            .get(route)
            .ok_or_else(|| LinkError::UnknownRoute(route.to_string()))?;

        let rendered = render_pattern(pattern, params);
        if absolute {
            Ok(rendered)
        } else {
            Ok(rendered.trim_start_matches('/').to_string())
        }
    }
}

/// Substitute placeholders and collapse empty segments.
///
/// Unknown placeholders are left in place.
fn render_pattern(pattern: &str, params: &UrlParams) -> String {
    let mut out = String::with_capacity(pattern.len() + 32);
    let mut rest = pattern;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            rest = &rest[start..];
            break;
        };
        let placeholder = &rest[start..start + len + 1];
        match placeholder {
            "{_locale}" => out.push_str(&encode_segment(&params.locale)),
            "{path}" => out.push_str(&encode_path(&params.path)),
            "{objectSlug}" => out.push_str(&encode_segment(&params.object_slug)),
            "{objectId}" => out.push_str(&params.object_id.to_string()),
            other => out.push_str(other),
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);

    collapse_segments(&out)
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(encode_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// `/en//chair` -> `/en/chair`, keeping a leading and trailing slash.
fn collapse_segments(url: &str) -> String {
    let segments: Vec<&str> = url.split('/').filter(|s| !s.is_empty()).collect();
    let mut collapsed = String::with_capacity(url.len());
    if url.starts_with('/') {
        collapsed.push('/');
    }
    collapsed.push_str(&segments.join("/"));
    if url.ends_with('/') && !segments.is_empty() {
        collapsed.push('/');
    }
    collapsed
}

// ============================================================================
// SiteUrlGenerator
// ============================================================================

/// Turns site-root paths into network-absolute URLs under a base URL.
///
/// The base URL's path is kept as prefix, so subdirectory deployments work:
/// `https://example.com/shop` + `/en/chair` -> `https://example.com/shop/en/chair`.
#[derive(Debug, Clone)]
pub struct SiteUrlGenerator {
    base: Url,
}

impl SiteUrlGenerator {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn parse(base: &str) -> std::result::Result<Self, url::ParseError> {
        Url::parse(base).map(Self::new)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl UrlGenerator for SiteUrlGenerator {
    fn to_absolute(&self, url: &str) -> String {
        // Already carries a scheme
        if Url::parse(url).is_ok() {
            return url.to_string();
        }

        // Resolve against the base directory, keeping its path prefix
        let mut base = self.base.clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        match base.join(url.trim_start_matches('/')) {
            Ok(absolute) => absolute.to_string(),
            Err(_) => url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = "/{_locale}/{path}/{objectSlug}~p{objectId}";

    fn params(path: &str) -> UrlParams {
        UrlParams {
            object_slug: "oak-chair".into(),
            object_id: 42,
            path: path.into(),
            locale: "en".into(),
        }
    }

    #[test]
    fn test_render_full() {
        let table = RouteTable::new().with_route("product", PRODUCT);
        let url = table.build(&params("shop/chairs"), "product", true).unwrap();
        assert_eq!(url, "/en/shop/chairs/oak-chair~p42");
    }

    #[test]
    fn test_render_empty_path_collapses() {
        let table = RouteTable::new().with_route("product", PRODUCT);
        let url = table.build(&params(""), "product", true).unwrap();
        assert_eq!(url, "/en/oak-chair~p42");
    }

    #[test]
    fn test_render_relative() {
        let table = RouteTable::new().with_route("product", PRODUCT);
        let url = table.build(&params("shop"), "product", false).unwrap();
        assert_eq!(url, "en/shop/oak-chair~p42");
    }

    #[test]
    fn test_render_encodes_segments() {
        let table = RouteTable::new().with_route("product", PRODUCT);
        let url = table
            .build(&params("größe/a b"), "product", true)
            .unwrap();
        assert_eq!(url, "/en/gr%C3%B6%C3%9Fe/a%20b/oak-chair~p42");
    }

    #[test]
    fn test_trailing_slash_kept() {
        let table = RouteTable::new().with_route("news", "/{_locale}/{path}/{objectSlug}/");
        let url = table.build(&params("news"), "news", true).unwrap();
        assert_eq!(url, "/en/news/oak-chair/");
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let table = RouteTable::new().with_route("odd", "/{_locale}/{page}/{objectId}");
        let url = table.build(&params(""), "odd", true).unwrap();
        assert_eq!(url, "/en/{page}/42");
    }

    #[test]
    fn test_unknown_route() {
        let table = RouteTable::new();
        let err = table.build(&params(""), "missing", true).unwrap_err();
        assert_eq!(err, LinkError::UnknownRoute("missing".into()));
    }

    #[test]
    fn test_to_absolute() {
        let generator = SiteUrlGenerator::parse("https://example.com").unwrap();
        assert_eq!(
            generator.to_absolute("/en/oak-chair~p42"),
            "https://example.com/en/oak-chair~p42"
        );
        assert_eq!(
            generator.to_absolute("en/oak-chair~p42"),
            "https://example.com/en/oak-chair~p42"
        );
    }

    #[test]
    fn test_to_absolute_keeps_prefix() {
        let generator = SiteUrlGenerator::parse("https://example.com/shop/").unwrap();
        assert_eq!(
            generator.to_absolute("/en/chair"),
            "https://example.com/shop/en/chair"
        );
    }

    #[test]
    fn test_to_absolute_keeps_query_and_fragment() {
        let table = RouteTable::new().with_route("item", "/{_locale}/item?id={objectId}");
        let url = table.build(&params(""), "item", true).unwrap();
        assert_eq!(url, "/en/item?id=42");

        let generator = SiteUrlGenerator::parse("https://example.com/shop").unwrap();
        assert_eq!(
            generator.to_absolute(&url),
            "https://example.com/shop/en/item?id=42"
        );
        assert_eq!(
            generator.to_absolute("/en/chair#details"),
            "https://example.com/shop/en/chair#details"
        );
    }

    #[test]
    fn test_to_absolute_passes_absolute_through() {
        let generator = SiteUrlGenerator::parse("https://example.com").unwrap();
        assert_eq!(
            generator.to_absolute("https://cdn.example.org/en/chair"),
            "https://cdn.example.org/en/chair"
        );
    }
}
