//! rslkit CLI - authoring tool for RSL license documents.
//!
//! Thin command-line frontend over [`rslkit_engine`]: scaffold documents
//! from URL lists, validate and canonically re-format stored documents,
//! and print embedding snippets for robots.txt and HTML.

pub mod cli;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
