//! In-memory host implementations.

use std::collections::BTreeMap;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{DocumentStore, LocaleService, RequestContext, TranslationIndex, Translations};
use crate::content::{ContentObject, DataObject, DocumentId, DocumentNode, ObjectId};

/// Normalize a document path for lookup (`/en/` and `/en` are the same node).
fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Document tree held in memory, also serving as translation index.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: FxHashMap<DocumentId, Arc<DocumentNode>>,
    paths: FxHashMap<String, DocumentId>,
    translations: FxHashMap<DocumentId, Translations>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(&mut self, document: DocumentNode) {
        if let Some(previous) = self.documents.get(&document.id) {
            self.paths.remove(normalize_path(&previous.path));
        }
        self.paths
            .insert(normalize_path(&document.path).to_string(), document.id);
        self.documents.insert(document.id, Arc::new(document));
    }

    /// Link `document` to its translation in `locale`.
    pub fn insert_translation(
        &mut self,
        document: DocumentId,
        locale: impl Into<String>,
        translation: DocumentId,
    ) {
        self.translations
            .entry(document)
            .or_default()
            .insert(locale.into(), translation);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn by_path(&self, path: &str) -> Option<Arc<DocumentNode>> {
        let id = self.paths.get(normalize_path(path))?;
        self.by_id(*id)
    }

    fn by_id(&self, id: DocumentId) -> Option<Arc<DocumentNode>> {
        self.documents.get(&id).cloned()
    }
}

impl TranslationIndex for MemoryDocumentStore {
    fn translations(&self, document: &DocumentNode) -> Translations {
        self.translations
            .get(&document.id)
            .cloned()
            .unwrap_or_default()
    }
}

// ============================================================================
// Objects
// ============================================================================

/// Data objects keyed by id, ordered for stable listing.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: BTreeMap<ObjectId, Arc<DataObject>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: Arc<DataObject>) {
        self.objects.insert(object.id(), object);
    }

    pub fn get(&self, id: ObjectId) -> Option<Arc<DataObject>> {
        self.objects.get(&id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DataObject>> {
        self.objects.values()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

// ============================================================================
// Locale & Request
// ============================================================================

/// Fixed ambient locale.
#[derive(Debug, Clone)]
pub struct StaticLocale(pub String);

impl LocaleService for StaticLocale {
    fn ambient_locale(&self) -> String {
        self.0.clone()
    }
}

/// Request context with a fixed (or no) current document.
///
/// `FixedRequest::default()` models preview/admin mode: no request in flight.
#[derive(Debug, Clone, Default)]
pub struct FixedRequest(pub Option<Arc<DocumentNode>>);

impl RequestContext for FixedRequest {
    fn current_document(&self) -> Option<Arc<DocumentNode>> {
        self.0.clone()
    }
}
