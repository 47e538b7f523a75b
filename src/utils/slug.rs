//! ASCII slug transform.
//!
//! Text is transliterated to ASCII (`deunicode`), every run of characters
//! that are not ASCII alphanumerics becomes a single separator, and leading
//! or trailing separators are dropped:
//!
//! | Input             | Output (default config) |
//! |-------------------|-------------------------|
//! | `Café Müller`     | `Cafe-Muller`           |
//! | `Tom & Jerry`     | `Tom-and-Jerry`         |
//! | `  --Hello!!  `   | `Hello`                 |
//! | `Größe 42`        | `Grosse-42`             |

use deunicode::deunicode_with_tofu;

use crate::config::{SlugCase, SlugConfig};

/// Symbols spelled out before transliteration.
const SYMBOLS: [(char, &str); 2] = [('&', " and "), ('@', " at ")];

/// Slugify text according to `config`.
///
/// The result contains only ASCII alphanumerics and the separator, and
/// slugifying it again yields the same string.
pub fn slugify(text: &str, config: &SlugConfig) -> String {
    let separator = config.separator.as_char();
    let ascii = deunicode_with_tofu(&spell_symbols(text), " ");

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(separator);
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    match config.case {
        SlugCase::Lower => slug.to_ascii_lowercase(),
        SlugCase::Upper => slug.to_ascii_uppercase(),
        SlugCase::Preserve => slug,
    }
}

fn spell_symbols(text: &str) -> String {
    let mut spelled = String::with_capacity(text.len());
    for ch in text.chars() {
        match SYMBOLS.iter().find(|(symbol, _)| *symbol == ch) {
            Some((_, word)) => spelled.push_str(word),
            None => spelled.push(ch),
        }
    }
    spelled
}
