//! linkgen - canonical, localized, slugified links for CMS content objects.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── content/   # ContentObject trait, DataObject, DocumentNode
//! ├── host/      # Host traits and in-memory implementations
//! ├── link/      # LinkGenerator pipeline
//! ├── config/    # linkgen.toml loading and validation
//! ├── utils/     # slugify
//! ├── error.rs   # LinkError
//! └── logger.rs  # log!/debug! macros
//! ```
//!
//! # Example
//!
//! ```ignore
//! let generator = LinkGenerator::new(target, host);
//! let url = generator.generate(&product, &LinkParams::new().with_locale("de"))?;
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod link;
pub mod logger;
pub mod utils;

pub use content::{ContentObject, DataObject, DocumentId, DocumentNode, ObjectId, ObjectType};
pub use error::{LinkError, Result};
pub use host::HostServices;
pub use link::{LinkGenerator, LinkParams, LinkTarget, ReferenceType};
