//! Slug command implementation.

use std::io::{Write, stdout};

use anyhow::Result;
use linkgen::config::LinkgenConfig;
use linkgen::utils::slug::slugify;

/// Execute slug command
pub fn run_slug(words: &[String], config: &LinkgenConfig) -> Result<()> {
    let slug = slugify(&words.join(" "), &config.slug);
    let mut out = stdout().lock();
    writeln!(out, "{slug}")?;
    out.flush()?;
    Ok(())
}
