//! Configuration management for `linkgen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── slug       # [slug]
//! │   └── target     # [[targets]]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError, ConfigDiagnostics
//! ├── util.rs        # Config file discovery, route placeholders
//! └── mod.rs         # LinkgenConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com"
//! locale = "en"
//! content = "content.toml"
//!
//! [routes]
//! product = "/{_locale}/{path}/{objectSlug}~p{objectId}"
//!
//! [[targets]]
//! name = "product"
//! class = "Product"
//! route = "product"
//! default_document_property = "product_default_document"
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{SiteConfig, SlugCase, SlugConfig, SlugSeparator, TargetConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use util::find_config_file;
pub(crate) use util::print_unknown_fields_warning;

use crate::host::route::PLACEHOLDERS;
use crate::host::{RouteTable, SiteUrlGenerator};
use anyhow::{Context, Result, bail};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::route_placeholders;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing linkgen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkgenConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory containing the config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Slug settings
    #[serde(default)]
    pub slug: SlugConfig,

    /// Route name -> pattern
    #[serde(default)]
    pub routes: BTreeMap<String, String>,

    /// Link targets, one per content class
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

impl LinkgenConfig {
    /// Load and validate configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string (no validation).
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Content fixture path, resolved against the config directory.
    pub fn content_path(&self) -> PathBuf {
        self.root.join(&self.site.content)
    }

    /// Look up a target by name.
    ///
    /// Without a name, the only configured target is used.
    pub fn target(&self, name: Option<&str>) -> Result<&TargetConfig> {
        match name {
            Some(name) => self
                .targets
                .iter()
                .find(|target| target.name == name)
                .with_context(|| {
                    format!(
                        "unknown target '{name}', configured: {}",
                        self.target_names().join(", ")
                    )
                }),
            None => match self.targets.as_slice() {
                [only] => Ok(only),
                [] => bail!("no [[targets]] configured"),
                _ => bail!(
                    "several targets configured ({}), pick one with --target",
                    self.target_names().join(", ")
                ),
            },
        }
    }

    fn target_names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }

    /// URL builder over the configured routes.
    pub fn route_table(&self) -> RouteTable {
        RouteTable::from_routes(&self.routes)
    }

    /// Absolute URL generator rooted at `site.url`.
    pub fn url_generator(&self) -> Result<SiteUrlGenerator> {
        SiteUrlGenerator::parse(&self.site.url)
            .with_context(|| format!("invalid site url '{}'", self.site.url))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.validate_routes(&mut diag);
        self.validate_targets(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Every route must identify the object and use known placeholders.
    fn validate_routes(&self, diag: &mut ConfigDiagnostics) {
        for (name, pattern) in &self.routes {
            let field = format!("routes.{name}");
            let placeholders = route_placeholders(pattern);

            for placeholder in &placeholders {
                if !PLACEHOLDERS.contains(placeholder) {
                    diag.error_with_hint(
                        field.clone(),
                        format!("unknown placeholder {placeholder}"),
                        format!("available: {}", PLACEHOLDERS.join(", ")),
                    );
                }
            }

            if !placeholders
                .iter()
                .any(|p| *p == "{objectId}" || *p == "{objectSlug}")
            {
                diag.error_with_hint(
                    field,
                    "route does not identify the object",
                    "include {objectId} or {objectSlug}",
                );
            }
        }
    }

    fn validate_targets(&self, diag: &mut ConfigDiagnostics) {
        if self.targets.is_empty() {
            diag.warn("targets", "no [[targets]] configured");
        }

        let mut names = FxHashSet::default();
        for (index, target) in self.targets.iter().enumerate() {
            if !target.name.is_empty() && !names.insert(target.name.as_str()) {
                diag.error(
                    format!("targets[{index}].name"),
                    format!("duplicate target name '{}'", target.name),
                );
            }
            target.validate(index, &self.routes, diag);
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> LinkgenConfig {
    let (parsed, ignored) = LinkgenConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
