//! Configuration utility functions.

use std::path::{Path, PathBuf};

use crate::log;

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Absolute `config_name` paths are returned as-is when they exist.
///
/// # Example
/// ```text
/// /home/user/shop/content/      ← start
/// /home/user/shop/linkgen.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Placeholders (`{name}`) used in a route pattern, in order.
pub fn route_placeholders(pattern: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = pattern;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        found.push(&rest[start..start + len + 1]);
        rest = &rest[start + len + 1..];
    }
    found
}

// ============================================================================
// tests
// ============================================================================

/// Warn about keys serde skipped while reading `path`.
pub(crate) fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}
