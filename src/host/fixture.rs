//! TOML content fixture for the in-memory host.
//!
//! # Example
//!
//! ```toml
//! [[documents]]
//! id = 1
//! path = "/en"
//! properties = { language = "en", product_default_document = { document = 3 } }
//! translations = { de = 2 }
//!
//! [[objects]]
//! id = 10
//! type = "folder"
//! fields = { key = "products" }
//!
//! [[objects]]
//! id = 11
//! class = "Product"
//! parent = 10
//! slug = "oak-chair"
//! fields = { name = "Oak Chair" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use super::memory::{MemoryDocumentStore, MemoryObjectStore};
use crate::config::{ConfigError, print_unknown_fields_warning};
use crate::content::{DataObject, DocumentId, DocumentNode, ObjectId, ObjectType, Property};

/// Documents and objects as read from a fixture file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentFixture {
    pub documents: Vec<DocumentEntry>,
    pub objects: Vec<ObjectEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentEntry {
    pub id: DocumentId,
    pub path: String,
    #[serde(default)]
    pub parent: Option<DocumentId>,
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
    /// Locale -> translated document id.
    #[serde(default)]
    pub translations: BTreeMap<String, DocumentId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectEntry {
    pub id: ObjectId,
    #[serde(default)]
    pub class: String,
    #[serde(rename = "type", default)]
    pub kind: ObjectType,
    #[serde(default)]
    pub parent: Option<ObjectId>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl ObjectEntry {
    /// Build the object without its parent link.
    fn to_object(&self) -> DataObject {
        let class = match (self.kind, self.class.is_empty()) {
            (ObjectType::Folder, true) => "Folder",
            _ => self.class.as_str(),
        };
        let mut object = DataObject::new(self.id, class).with_type(self.kind);
        if let Some(slug) = &self.slug {
            object = object.with_slug(slug.clone());
        }
        for (name, value) in &self.fields {
            object = object.with_field(name.clone(), value.clone());
        }
        object
    }
}

impl ContentFixture {
    /// Load a fixture file, warning about keys it does not know.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (fixture, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            print_unknown_fields_warning(&ignored, path);
        }
        Ok(fixture)
    }

    /// Parse fixture TOML.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse fixture TOML, collecting the paths of unknown keys.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let fixture = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((fixture, ignored))
    }

    /// Build the document store, checking ids, paths, parents and translations.
    pub fn documents(&self) -> Result<MemoryDocumentStore, ConfigError> {
        let mut ids = FxHashSet::default();
        let mut paths = FxHashSet::default();
        for entry in &self.documents {
            if !ids.insert(entry.id) {
                return Err(invalid(format!("duplicate document id {}", entry.id)));
            }
            if !paths.insert(entry.path.trim_end_matches('/')) {
                return Err(invalid(format!("duplicate document path `{}`", entry.path)));
            }
        }

        let mut store = MemoryDocumentStore::new();
        for entry in &self.documents {
            if let Some(parent) = entry.parent
                && !ids.contains(&parent)
            {
                return Err(invalid(format!(
                    "document {} references missing parent {parent}",
                    entry.id
                )));
            }

            let mut node = DocumentNode::new(entry.id, entry.path.clone());
            node.parent = entry.parent;
            node.properties = entry.properties.clone();
            store.insert(node);

            for (locale, target) in &entry.translations {
                if !ids.contains(target) {
                    return Err(invalid(format!(
                        "document {} has `{locale}` translation to missing document {target}",
                        entry.id
                    )));
                }
                store.insert_translation(entry.id, locale.clone(), *target);
            }
        }
        Ok(store)
    }

    /// Build the object store, resolving parent links into shared objects.
    pub fn objects(&self) -> Result<MemoryObjectStore, ConfigError> {
        let mut entries: FxHashMap<ObjectId, &ObjectEntry> = FxHashMap::default();
        for entry in &self.objects {
            if entries.insert(entry.id, entry).is_some() {
                return Err(invalid(format!("duplicate object id {}", entry.id)));
            }
        }

        let mut built: FxHashMap<ObjectId, Arc<DataObject>> = FxHashMap::default();
        let mut store = MemoryObjectStore::new();
        for entry in &self.objects {
            store.insert(build_object(entry.id, &entries, &mut built)?);
        }
        Ok(store)
    }
}

/// Build an object after its ancestors, top-down.
fn build_object(
    id: ObjectId,
    entries: &FxHashMap<ObjectId, &ObjectEntry>,
    built: &mut FxHashMap<ObjectId, Arc<DataObject>>,
) -> Result<Arc<DataObject>, ConfigError> {
    // Collect the unbuilt part of the ancestor chain
    let mut chain: Vec<ObjectId> = Vec::new();
    let mut current = Some(id);
    while let Some(object_id) = current {
        if built.contains_key(&object_id) {
            break;
        }
        if chain.contains(&object_id) {
            return Err(invalid(format!("object {object_id} is its own ancestor")));
        }
        let Some(entry) = entries.get(&object_id) else {
            let child = chain.last().copied().unwrap_or(id);
            return Err(invalid(format!(
                "object {child} references missing parent {object_id}"
            )));
        };
        chain.push(object_id);
        current = entry.parent;
    }

    for object_id in chain.into_iter().rev() {
        let Some(entry) = entries.get(&object_id) else {
            continue;
        };
        let mut object = entry.to_object();
        if let Some(parent) = entry.parent.and_then(|parent| built.get(&parent)) {
            object = object.with_parent(Arc::clone(parent));
        }
        built.insert(object_id, Arc::new(object));
    }

    built
        .get(&id)
        .cloned()
        .ok_or_else(|| invalid(format!("object {id} could not be built")))
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentObject;
    use crate::host::{DocumentStore, TranslationIndex};

    const FIXTURE: &str = r#"
[[documents]]
id = 1
path = "/en"
properties = { language = "en", product_default_document = { document = 3 } }
translations = { de = 2 }

[[documents]]
id = 2
path = "/de"
properties = { language = "de" }

[[documents]]
id = 3
path = "/en/shop"
parent = 1

[[objects]]
id = 12
class = "Product"
parent = 11
fields = { name = "Oak Chair" }

[[objects]]
id = 11
class = "Category"
parent = 10
slug = "chairs"

[[objects]]
id = 10
type = "folder"
"#;

    #[test]
    fn test_documents() {
        let fixture = ContentFixture::parse(FIXTURE).unwrap();
        let store = fixture.documents().unwrap();

        let en = store.by_path("/en").unwrap();
        assert_eq!(en.language(), Some("en"));
        assert_eq!(
            en.property("product_default_document"),
            Some(&Property::Document { document: 3 })
        );
        assert_eq!(store.translations(&en).get("de"), Some(&2));
        assert_eq!(store.by_id(3).unwrap().parent, Some(1));
    }

    #[test]
    fn test_objects_resolve_parents_out_of_order() {
        let fixture = ContentFixture::parse(FIXTURE).unwrap();
        let store = fixture.objects().unwrap();
        assert_eq!(store.len(), 3);

        let product = store.get(12).unwrap();
        let category = product.parent().unwrap();
        assert_eq!(category.id(), 11);
        assert_eq!(category.explicit_slug().and_then(|s| s.slug()), Some("chairs"));

        let folder = category.parent().unwrap();
        assert!(folder.is_folder());
        assert_eq!(folder.class_name(), "Folder");
    }

    #[test]
    fn test_object_cycle_rejected() {
        let fixture = ContentFixture::parse(
            "[[objects]]\nid = 1\nparent = 2\n[[objects]]\nid = 2\nparent = 1",
        )
        .unwrap();
        let err = fixture.objects().unwrap_err();
        assert!(err.to_string().contains("its own ancestor"), "{err}");
    }

    #[test]
    fn test_missing_parent_rejected() {
        let fixture = ContentFixture::parse("[[objects]]\nid = 1\nparent = 9").unwrap();
        let err = fixture.objects().unwrap_err();
        assert!(err.to_string().contains("missing parent 9"), "{err}");

        let fixture = ContentFixture::parse("[[documents]]\nid = 1\npath = \"/en\"\nparent = 5")
            .unwrap();
        assert!(fixture.documents().is_err());
    }

    #[test]
    fn test_duplicate_document_path_rejected() {
        let fixture = ContentFixture::parse(
            "[[documents]]\nid = 1\npath = \"/en\"\n[[documents]]\nid = 2\npath = \"/en/\"",
        )
        .unwrap();
        let err = fixture.documents().unwrap_err();
        assert!(err.to_string().contains("duplicate document path"), "{err}");
    }

    #[test]
    fn test_unknown_keys_reported() {
        let (fixture, ignored) = ContentFixture::parse_with_ignored(
            "[[documents]]\nid = 1\npath = \"/en\"\npropertes = { language = \"en\" }\n\
             [[objcts]]\nid = 2",
        )
        .unwrap();
        assert_eq!(ignored, vec!["documents.0.propertes", "objcts"]);
        assert!(fixture.documents[0].properties.is_empty());
        assert!(fixture.objects.is_empty());

        let (_, ignored) = ContentFixture::parse_with_ignored(FIXTURE).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, FIXTURE).unwrap();

        let fixture = ContentFixture::load(&path).unwrap();
        assert_eq!(fixture.documents.len(), 3);
        assert_eq!(fixture.objects.len(), 3);

        let missing = ContentFixture::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io(..))));
    }
}
