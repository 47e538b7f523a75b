//! `[[targets]]` configuration.
//!
//! One entry per content class that gets links:
//!
//! ```toml
//! [[targets]]
//! name = "product"
//! class = "Product"
//! route = "product"
//! default_document_property = "product_default_document"
//! default_slug_field = "name"        # optional
//! lowercase_default_slug = true      # optional
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ConfigDiagnostics;
use crate::link::{DEFAULT_SLUG_FIELD, LinkTarget};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    /// Target name used on the command line.
    pub name: String,

    /// Class name objects must have.
    pub class: String,

    /// Route name in `[routes]`.
    pub route: String,

    /// Document property pointing at the anchor document.
    pub default_document_property: String,

    /// Field used as slug source when the object has no slug.
    #[serde(default = "default_slug_field")]
    pub default_slug_field: String,

    /// Lower-case the default field value before slugifying.
    #[serde(default = "default_true")]
    pub lowercase_default_slug: bool,
}

fn default_slug_field() -> String {
    DEFAULT_SLUG_FIELD.to_string()
}

const fn default_true() -> bool {
    true
}

impl TargetConfig {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        route: impl Into<String>,
        default_document_property: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            route: route.into(),
            default_document_property: default_document_property.into(),
            default_slug_field: default_slug_field(),
            lowercase_default_slug: true,
        }
    }

    /// Validate one target against the route table.
    pub fn validate(
        &self,
        index: usize,
        routes: &BTreeMap<String, String>,
        diag: &mut ConfigDiagnostics,
    ) {
        let field = |name: &str| format!("targets[{index}].{name}");

        for (name, value) in [
            ("name", &self.name),
            ("class", &self.class),
            ("route", &self.route),
            ("default_document_property", &self.default_document_property),
            ("default_slug_field", &self.default_slug_field),
        ] {
            if value.trim().is_empty() {
                diag.error(field(name), "must not be empty");
            }
        }

        if !self.route.is_empty() && !routes.contains_key(&self.route) {
            diag.error_with_hint(
                field("route"),
                format!("unknown route '{}'", self.route),
                format!(
                    "add it to [routes], e.g.: {} = \"/{{_locale}}/{{path}}/{{objectSlug}}~p{{objectId}}\"",
                    self.route
                ),
            );
        }
    }
}

impl LinkTarget for TargetConfig {
    fn object_class(&self) -> &str {
        &self.class
    }

    fn default_document_property(&self) -> &str {
        &self.default_document_property
    }

    fn route_name(&self) -> &str {
        &self.route
    }

    fn default_slug_field(&self) -> &str {
        &self.default_slug_field
    }

    fn lowercase_default_slug(&self) -> bool {
        self.lowercase_default_slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config(
            "[routes]\nnews = \"/{_locale}/{objectSlug}\"\n\
             [[targets]]\nname = \"news\"\nclass = \"News\"\nroute = \"news\"\n\
             default_document_property = \"news_default_document\"",
        );
        let target = &config.targets[0];
        assert_eq!(target.default_slug_field, "name");
        assert!(target.lowercase_default_slug);
        assert_eq!(target.route_name(), "news");
        assert_eq!(target.object_class(), "News");
    }

    #[test]
    fn test_overrides() {
        let config = test_parse_config(
            "[[targets]]\nname = \"p\"\nclass = \"Product\"\nroute = \"product\"\n\
             default_document_property = \"pdd\"\ndefault_slug_field = \"title\"\n\
             lowercase_default_slug = false",
        );
        let target = &config.targets[0];
        assert_eq!(target.default_slug_field(), "title");
        assert!(!target.lowercase_default_slug());
    }

    #[test]
    fn test_validate_unknown_route_and_empty_fields() {
        let target = TargetConfig::new("product", "", "missing", "pdd");
        let mut diag = ConfigDiagnostics::new();
        target.validate(0, &BTreeMap::new(), &mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["targets[0].class", "targets[0].route"]);
        assert!(diag.errors()[1].hint.is_some());
    }
}
