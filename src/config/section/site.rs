//! `[site]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;

/// Site-wide settings shared by every link target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL for network-absolute links (e.g., "https://example.com/shop").
    pub url: String,

    /// Ambient locale used when a link request names none.
    pub locale: String,

    /// Content fixture path, relative to the config file.
    pub content: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost".into(),
            locale: "en".into(),
            content: "content.toml".into(),
        }
    }
}

impl SiteConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `locale` must not be empty or contain `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        "site.url",
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    "site.url",
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }

        if self.locale.is_empty() || self.locale.contains('/') {
            diag.error_with_hint(
                "site.locale",
                format!("invalid locale '{}'", self.locale),
                "use a locale code like \"en\" or \"de_AT\"",
            );
        }
    }
}
