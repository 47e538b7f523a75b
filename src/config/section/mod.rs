//! Configuration section definitions.
//!
//! Each module corresponds to a section in `linkgen.toml`:
//!
//! | Module   | TOML Section  | Purpose                                  |
//! |----------|---------------|------------------------------------------|
//! | `site`   | `[site]`      | Base URL, ambient locale, content file   |
//! | `slug`   | `[slug]`      | Slug separator and case                  |
//! | `target` | `[[targets]]` | One link target per content class        |
//!
//! Routes live in a flat `[routes]` table (name -> pattern).

mod site;
mod slug;
mod target;

pub use site::SiteConfig;
pub use slug::{SlugCase, SlugConfig, SlugSeparator};
pub use target::TargetConfig;
