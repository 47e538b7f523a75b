//! Link generation.
//!
//! # Pipeline
//!
//! ```text
//! object, params
//!   -> validate kind          target.accepts(object)
//!   -> resolve locale         params.locale | ambient locale
//!   -> anchor document        see anchor.rs
//!   -> base path              anchor path minus `/<locale>`
//!   -> ancestor path          parent slugs up to the nearest folder
//!   -> object slug            explicit slug | default field
//!   -> format URL             route + params, absolute if requested
//! ```
//!
//! # Example
//!
//! ```ignore
//! let generator = LinkGenerator::new(target, host);
//! let url = generator.generate(&product, &LinkParams::new().with_locale("de"))?;
//! ```

mod ancestry;
mod anchor;
mod derive;
mod format;
mod params;
mod target;


pub use anchor::base_path;
pub use params::{LinkParams, ReferenceType};
pub use target::{DEFAULT_SLUG_FIELD, LinkTarget};

use crate::config::SlugConfig;
use crate::content::ContentObject;
use crate::debug;
use crate::error::{LinkError, Result};
use crate::host::HostServices;

/// Generates canonical, localized URLs for one [`LinkTarget`].
///
/// Holds no per-call state, so one generator can serve many threads.
#[derive(Debug, Clone)]
pub struct LinkGenerator<T> {
    target: T,
    host: HostServices,
    slug: SlugConfig,
}

impl<T: LinkTarget> LinkGenerator<T> {
    pub fn new(target: T, host: HostServices) -> Self {
        Self {
            target,
            host,
            slug: SlugConfig::default(),
        }
    }

    pub fn with_slug_config(mut self, slug: SlugConfig) -> Self {
        self.slug = slug;
        self
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Generate the URL for `object`.
    pub fn generate(&self, object: &dyn ContentObject, params: &LinkParams) -> Result<String> {
        self.validate_object(object)?;

        let locale = match &params.locale {
            Some(locale) => locale.clone(),
            None => self.host.locale.ambient_locale(),
        };

        let anchor = anchor::anchor_document(
            &self.host,
            &locale,
            self.target.default_document_property(),
            params,
        )?;
        let base = base_path(&anchor.path, &locale);

        let parent = params.parent.clone().or_else(|| object.parent());
        let ancestors = ancestry::ancestor_slugs(parent, |ancestor| {
            derive::slug_for(ancestor, &self.target, &self.slug)
        })?;
        let path = ancestry::join_path(
            std::iter::once(base.as_str()).chain(ancestors.iter().map(String::as_str)),
        );

        let slug = derive::slug_for(object, &self.target, &self.slug)?;
        debug!("link"; "#{} anchor={} path={} slug={}", object.id(), anchor.path, path, slug);

        let url_params = format::url_params(&slug, object.id(), &path, &locale);
        format::format_url(
            &self.host,
            self.target.route_name(),
            &url_params,
            params.reference_type,
        )
    }

    fn validate_object(&self, object: &dyn ContentObject) -> Result<()> {
        if self.target.accepts(object) {
            return Ok(());
        }
        Err(LinkError::InvalidObject {
            expected: self.target.object_class().to_string(),
            actual: object.class_name().to_string(),
        })
    }
}
