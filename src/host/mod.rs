//! Host framework collaborators.
//!
//! The link generator never owns content; it reads it through these traits.
//! In-memory implementations back the CLI and the tests.
//!
//! | Module    | Purpose                                              |
//! |-----------|------------------------------------------------------|
//! | `memory`  | Document/object stores, locale and request fixtures  |
//! | `route`   | Named route patterns and absolute URL generation     |
//! | `fixture` | TOML content fixture loader                          |

pub mod fixture;
pub mod memory;
pub mod route;

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::content::{DocumentId, DocumentNode, ObjectId};
use crate::error::Result;

pub use fixture::ContentFixture;
pub use memory::{FixedRequest, MemoryDocumentStore, MemoryObjectStore, StaticLocale};
pub use route::{RouteTable, SiteUrlGenerator};

/// Translations of a document, keyed by locale.
pub type Translations = FxHashMap<String, DocumentId>;

pub trait DocumentStore: Send + Sync {
    fn by_path(&self, path: &str) -> Option<Arc<DocumentNode>>;
    fn by_id(&self, id: DocumentId) -> Option<Arc<DocumentNode>>;
}

pub trait TranslationIndex: Send + Sync {
    fn translations(&self, document: &DocumentNode) -> Translations;
}

/// The in-flight request, if any.
pub trait RequestContext: Send + Sync {
    /// Document the current request resolved to.
    fn current_document(&self) -> Option<Arc<DocumentNode>>;
}

pub trait LocaleService: Send + Sync {
    fn ambient_locale(&self) -> String;
}

/// Route parameters handed to the [`UrlBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParams {
    pub object_slug: String,
    pub object_id: ObjectId,
    pub path: String,
    pub locale: String,
}

pub trait UrlBuilder: Send + Sync {
    /// Build the URL for a named route.
    ///
    /// `absolute` asks for a site-root path (`/en/...`) instead of a
    /// relative one.
    fn build(&self, params: &UrlParams, route: &str, absolute: bool) -> Result<String>;
}

pub trait UrlGenerator: Send + Sync {
    /// Turn a framework URL into a network-absolute one.
    fn to_absolute(&self, url: &str) -> String;
}

/// Everything the link generator reads from the host.
#[derive(Clone)]
pub struct HostServices {
    pub documents: Arc<dyn DocumentStore>,
    pub translations: Arc<dyn TranslationIndex>,
    pub request: Arc<dyn RequestContext>,
    pub locale: Arc<dyn LocaleService>,
    pub url_builder: Arc<dyn UrlBuilder>,
    pub url_generator: Arc<dyn UrlGenerator>,
}

impl HostServices {
    /// Replace the request context (e.g. per CLI invocation).
    pub fn with_request(mut self, request: Arc<dyn RequestContext>) -> Self {
        self.request = request;
        self
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
