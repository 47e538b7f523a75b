//! Final URL assembly.

use super::params::ReferenceType;
use crate::content::ObjectId;
use crate::error::Result;
use crate::host::{HostServices, UrlParams};

/// Route parameters, lower-cased.
pub(crate) fn url_params(slug: &str, id: ObjectId, path: &str, locale: &str) -> UrlParams {
    UrlParams {
        object_slug: slug.to_lowercase(),
        object_id: id,
        path: path.to_lowercase(),
        locale: locale.to_lowercase(),
    }
}

/// Build the route URL, made network-absolute only for
/// [`ReferenceType::AbsoluteUrl`].
pub(crate) fn format_url(
    host: &HostServices,
    route: &str,
    params: &UrlParams,
    reference_type: Option<ReferenceType>,
) -> Result<String> {
    let url = host.url_builder.build(params, route, true)?;
    match reference_type {
        Some(ReferenceType::AbsoluteUrl) => Ok(host.url_generator.to_absolute(&url)),
        _ => Ok(url),
    }
}
