//! List command implementation.
//!
//! Generates the link of every object the target accepts, for each requested
//! locale, in parallel.

use std::io::{Write, stdout};
use std::sync::Arc;

use anyhow::{Result, bail};
use linkgen::content::{DataObject, ObjectId};
use linkgen::{ContentObject, LinkError, LinkGenerator, LinkParams, LinkTarget, ReferenceType, log};
use rayon::prelude::*;
use serde::Serialize;

use super::args::ListArgs;
use super::common::Workspace;

/// One generated link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRow {
    pub id: ObjectId,
    pub locale: String,
    pub url: String,
}

/// A link that could not be generated.
#[derive(Debug)]
pub struct LinkFailure {
    pub id: ObjectId,
    pub locale: String,
    pub error: LinkError,
}

/// Execute list command
pub fn run_list(args: &ListArgs, ws: &Workspace) -> Result<()> {
    let generator = ws.generator(args.target.as_deref(), None)?;
    let locales = if args.locale.is_empty() {
        vec![ws.config.site.locale.clone()]
    } else {
        args.locale.clone()
    };

    let objects: Vec<Arc<DataObject>> = ws
        .objects
        .iter()
        .filter(|object| generator.target().accepts(&***object))
        .cloned()
        .collect();
    if objects.is_empty() {
        log!("list"; "no objects of class {}", generator.target().object_class());
        return Ok(());
    }

    let (rows, failures) = collect_links(&generator, &objects, &locales, args.reference_type);
    print_rows(&rows, args)?;

    for failure in &failures {
        log!("error"; "#{} [{}]: {}", failure.id, failure.locale, failure.error);
    }
    log!("list"; "{} generated, {} failed", rows.len(), failures.len());

    if !failures.is_empty() {
        bail!("{} of {} links failed", failures.len(), rows.len() + failures.len());
    }
    Ok(())
}

/// Generate every (object, locale) pair, keeping input order.
pub fn collect_links<T: LinkTarget>(
    generator: &LinkGenerator<T>,
    objects: &[Arc<DataObject>],
    locales: &[String],
    reference_type: Option<ReferenceType>,
) -> (Vec<LinkRow>, Vec<LinkFailure>) {
    let jobs: Vec<(&Arc<DataObject>, &String)> = objects
        .iter()
        .flat_map(|object| locales.iter().map(move |locale| (object, locale)))
        .collect();

    let results: Vec<_> = jobs
        .par_iter()
        .map(|&(object, locale)| {
            let mut params = LinkParams::new().with_locale(locale.as_str());
            params.reference_type = reference_type;
            let result = generator.generate(&**object, &params);
            (object.id(), locale.clone(), result)
        })
        .collect();

    let mut rows = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (id, locale, result) in results {
        match result {
            Ok(url) => rows.push(LinkRow { id, locale, url }),
            Err(error) => failures.push(LinkFailure { id, locale, error }),
        }
    }
    (rows, failures)
}

fn print_rows(rows: &[LinkRow], args: &ListArgs) -> Result<()> {
    let mut out = stdout().lock();
    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(rows)?
        } else {
            serde_json::to_string(rows)?
        };
        writeln!(out, "{json}")?;
    } else {
        for row in rows {
            writeln!(out, "{}\t{}\t{}", row.id, row.locale, row.url)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::tests::workspace;

    #[test]
    fn test_collect_links() {
        let (_dir, ws) = workspace();
        let generator = ws.generator(None, None).unwrap();
        let objects: Vec<_> = ws
            .objects
            .iter()
            .filter(|object| generator.target().accepts(&***object))
            .cloned()
            .collect();
        assert_eq!(objects.len(), 2);

        let locales = vec!["en".to_string(), "de".to_string()];
        let (rows, failures) = collect_links(&generator, &objects, &locales, None);

        assert_eq!(
            rows,
            vec![
                LinkRow {
                    id: 12,
                    locale: "en".into(),
                    url: "/en/shop/chairs/oak-chair~p12".into(),
                },
                LinkRow {
                    id: 12,
                    locale: "de".into(),
                    url: "/de/laden/chairs/oak-chair~p12".into(),
                },
            ]
        );

        // object 13 has no name
        assert_eq!(failures.len(), 2);
        assert!(failures.iter().all(|f| f.id == 13));
        assert!(matches!(failures[0].error, LinkError::MissingSlug { .. }));
    }

    #[test]
    fn test_collect_links_absolute() {
        let (_dir, ws) = workspace();
        let generator = ws.generator(Some("product"), None).unwrap();
        let chair = vec![ws.object(12).unwrap()];
        let (rows, _) = collect_links(
            &generator,
            &chair,
            &["en".to_string()],
            Some(ReferenceType::AbsoluteUrl),
        );
        assert_eq!(rows[0].url, "https://example.com/en/shop/chairs/oak-chair~p12");
    }

    #[test]
    fn test_row_json() {
        let row = LinkRow {
            id: 1,
            locale: "en".into(),
            url: "/en/a~p1".into(),
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"id":1,"locale":"en","url":"/en/a~p1"}"#
        );
    }
}
