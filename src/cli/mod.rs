//! Command-line interface module.

mod args;
pub mod common;
pub mod link;
pub mod list;
pub mod slug;

pub use args::{Cli, Commands};
