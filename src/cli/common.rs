//! Config and content loading shared by the commands.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use linkgen::config::{LinkgenConfig, TargetConfig, find_config_file};
use linkgen::content::{DataObject, DocumentNode, ObjectId};
use linkgen::host::{
    ContentFixture, DocumentStore, FixedRequest, MemoryDocumentStore, MemoryObjectStore,
    StaticLocale,
};
use linkgen::{HostServices, LinkGenerator, debug};

use super::Cli;

/// Locate the config file named on the command line.
pub fn locate_config(cli: &Cli) -> Result<Option<PathBuf>> {
    let cwd = env::current_dir().context("failed to read current directory")?;
    Ok(find_config_file(&cli.config, &cwd))
}

/// Load the config, or defaults when `optional` and no file exists.
pub fn load_config(cli: &Cli, optional: bool) -> Result<LinkgenConfig> {
    match locate_config(cli)? {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            LinkgenConfig::load(&path)
        }
        None if optional => Ok(LinkgenConfig::default()),
        None => bail!(
            "config file '{}' not found in the current directory or its parents",
            cli.config.display()
        ),
    }
}

/// Config plus the content fixture it points at.
pub struct Workspace {
    pub config: LinkgenConfig,
    pub documents: Arc<MemoryDocumentStore>,
    pub objects: MemoryObjectStore,
}

impl Workspace {
    pub fn load(cli: &Cli) -> Result<Self> {
        Self::from_config(load_config(cli, false)?)
    }

    pub fn from_config(config: LinkgenConfig) -> Result<Self> {
        let content_path = config.content_path();
        let fixture = ContentFixture::load(&content_path)
            .with_context(|| format!("failed to load content from {}", content_path.display()))?;

        let documents = fixture.documents().with_context(|| invalid(&content_path))?;
        let objects = fixture.objects().with_context(|| invalid(&content_path))?;
        debug!("config"; "{} documents, {} objects", documents.len(), objects.len());

        Ok(Self {
            config,
            documents: Arc::new(documents),
            objects,
        })
    }

    /// Host services over the loaded content, optionally with a request in flight.
    pub fn host(&self, request: Option<Arc<DocumentNode>>) -> Result<HostServices> {
        Ok(HostServices {
            documents: self.documents.clone(),
            translations: self.documents.clone(),
            request: Arc::new(FixedRequest(request)),
            locale: Arc::new(StaticLocale(self.config.site.locale.clone())),
            url_builder: Arc::new(self.config.route_table()),
            url_generator: Arc::new(self.config.url_generator()?),
        })
    }

    /// Link generator for a named (or the only) target.
    pub fn generator(
        &self,
        target: Option<&str>,
        request: Option<Arc<DocumentNode>>,
    ) -> Result<LinkGenerator<&TargetConfig>> {
        let target = self.config.target(target)?;
        Ok(LinkGenerator::new(target, self.host(request)?)
            .with_slug_config(self.config.slug.clone()))
    }

    pub fn document(&self, path: &str) -> Result<Arc<DocumentNode>> {
        self.documents
            .by_path(path)
            .with_context(|| format!("no document at '{path}'"))
    }

    pub fn object(&self, id: ObjectId) -> Result<Arc<DataObject>> {
        self.objects
            .get(id)
            .with_context(|| format!("no object with id {id}"))
    }
}

fn invalid(path: &Path) -> String {
    format!("invalid content in {}", path.display())
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    pub const CONFIG: &str = r#"
[site]
url = "https://example.com"
locale = "en"

[routes]
product = "/{_locale}/{path}/{objectSlug}~p{objectId}"

[[targets]]
name = "product"
class = "Product"
route = "product"
default_document_property = "product_default_document"
"#;

    pub const CONTENT: &str = r#"
[[documents]]
id = 1
path = "/en"
properties = { language = "en", product_default_document = { document = 3 } }
translations = { de = 2 }

[[documents]]
id = 2
path = "/de"
properties = { language = "de", product_default_document = { document = 4 } }

[[documents]]
id = 3
path = "/en/shop"
parent = 1
properties = { language = "en" }

[[documents]]
id = 4
path = "/de/laden"
parent = 2
properties = { language = "de" }

[[objects]]
id = 10
type = "folder"

[[objects]]
id = 11
class = "Category"
parent = 10
slug = "chairs"

[[objects]]
id = 12
class = "Product"
parent = 11
fields = { name = "Oak Chair" }

[[objects]]
id = 13
class = "Product"
parent = 11
"#;

    /// Write config and content into a temp dir and load them.
    pub fn workspace() -> (TempDir, Workspace) {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("linkgen.toml");
        fs::write(&config_path, CONFIG).unwrap();
        fs::write(dir.path().join("content.toml"), CONTENT).unwrap();

        let config = LinkgenConfig::load(&config_path).unwrap();
        let workspace = Workspace::from_config(config).unwrap();
        (dir, workspace)
    }

    #[test]
    fn test_workspace_loads() {
        let (_dir, ws) = workspace();
        assert_eq!(ws.documents.len(), 4);
        assert_eq!(ws.objects.len(), 4);
        assert_eq!(ws.document("/en/shop").unwrap().id, 3);
        assert!(ws.document("/fr").is_err());
        assert!(ws.object(99).is_err());
    }

    #[test]
    fn test_generator_uses_config() {
        let (_dir, ws) = workspace();
        let generator = ws.generator(None, None).unwrap();
        let chair = ws.object(12).unwrap();
        let url = generator
            .generate(&*chair, &linkgen::LinkParams::new())
            .unwrap();
        assert_eq!(url, "/en/shop/chairs/oak-chair~p12");
    }

    #[test]
    fn test_missing_content_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("linkgen.toml");
        fs::write(&config_path, CONFIG).unwrap();

        let config = LinkgenConfig::load(&config_path).unwrap();
        let err = Workspace::from_config(config).err().unwrap();
        assert!(format!("{err:#}").contains("failed to load content"), "{err:#}");
    }
}
