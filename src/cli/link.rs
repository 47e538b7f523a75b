//! Link command implementation.

use std::io::{Write, stdout};

use anyhow::{Context, Result};
use linkgen::{ContentObject, LinkParams, debug};

use super::args::LinkArgs;
use super::common::Workspace;

/// Execute link command
pub fn run_link(args: &LinkArgs, ws: &Workspace) -> Result<()> {
    let url = generate_link(args, ws)?;
    let mut out = stdout().lock();
    writeln!(out, "{url}")?;
    out.flush()?;
    Ok(())
}

/// Resolve the command line into link parameters and generate the URL.
pub fn generate_link(args: &LinkArgs, ws: &Workspace) -> Result<String> {
    let request = args
        .request
        .as_deref()
        .map(|path| ws.document(path))
        .transpose()
        .context("invalid --request")?;
    let generator = ws.generator(args.target.as_deref(), request)?;

    let object = ws.object(args.object)?;
    let mut params = LinkParams::new();
    params.locale = args.locale.clone();
    params.reference_type = args.reference_type;
    if let Some(path) = &args.document {
        params.document = Some(ws.document(path).context("invalid --document")?);
    }
    if let Some(parent) = args.parent {
        let parent: std::sync::Arc<dyn ContentObject> =
            ws.object(parent).context("invalid --parent")?;
        params.parent = Some(parent);
    }

    debug!("link"; "object #{} ({})", object.id(), object.class_name());
    generator
        .generate(&*object, &params)
        .with_context(|| format!("failed to generate link for object {}", args.object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::tests::workspace;
    use linkgen::{LinkError, ReferenceType};

    fn args(object: i64) -> LinkArgs {
        LinkArgs {
            object,
            target: None,
            locale: None,
            document: None,
            parent: None,
            request: None,
            reference_type: None,
        }
    }

    #[test]
    fn test_link() {
        let (_dir, ws) = workspace();
        assert_eq!(
            generate_link(&args(12), &ws).unwrap(),
            "/en/shop/chairs/oak-chair~p12"
        );
    }

    #[test]
    fn test_link_options() {
        let (_dir, ws) = workspace();
        let mut args = args(12);
        args.locale = Some("de".into());
        args.reference_type = Some(ReferenceType::AbsoluteUrl);
        assert_eq!(
            generate_link(&args, &ws).unwrap(),
            "https://example.com/de/laden/chairs/oak-chair~p12"
        );
    }

    #[test]
    fn test_request_document_translated() {
        let (_dir, ws) = workspace();
        let mut args = args(12);
        args.locale = Some("de".into());
        args.request = Some("/en/shop".into());
        assert_eq!(
            generate_link(&args, &ws).unwrap(),
            "/de/laden/chairs/oak-chair~p12"
        );
    }

    #[test]
    fn test_parent_folder_drops_ancestors() {
        let (_dir, ws) = workspace();
        let mut args = args(12);
        args.parent = Some(10);
        assert_eq!(generate_link(&args, &ws).unwrap(), "/en/shop/oak-chair~p12");
    }

    #[test]
    fn test_errors_keep_cause() {
        let (_dir, ws) = workspace();
        let err = generate_link(&args(11), &ws).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LinkError>(),
            Some(LinkError::InvalidObject { .. })
        ));

        let mut missing = args(12);
        missing.document = Some("/fr".into());
        let err = generate_link(&missing, &ws).unwrap_err();
        assert!(format!("{err:#}").contains("invalid --document"), "{err:#}");

        assert!(generate_link(&args(99), &ws).is_err());
    }
}
