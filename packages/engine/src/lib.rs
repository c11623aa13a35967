//! RSL Engine
//!
//! The document core of the rslkit authoring suite for Really Simple
//! Licensing (RSL): a typed model of machine-readable content licenses,
//! a canonical XML builder, a tolerant parser, and a two-tier validator.
//!
//! All operations are pure, synchronous transformations over their
//! arguments — no I/O, no shared state — so they can be called from any
//! number of request handlers without coordination.
//!
//! # Example
//!
//! ```
//! use rslkit_engine::builder::build_document;
//! use rslkit_engine::factory::{create_license, LicenseOptions};
//! use rslkit_engine::types::Content;
//! use rslkit_engine::validator::{validate, ValidationStrategy};
//!
//! let license = create_license("educational", &LicenseOptions::default())?;
//! let content = Content::new("https://example.com/course").with_license(license);
//!
//! let report = validate(std::slice::from_ref(&content), ValidationStrategy::Basic);
//! assert!(report.is_valid());
//!
//! let xml = build_document(&[content]);
//! assert!(xml.contains("<permits type=\"user\">education</permits>"));
//! # Ok::<(), rslkit_engine::EngineError>(())
//! ```

pub mod builder;
pub mod config;
pub mod embed;
pub mod error;
pub mod factory;
pub mod parser;
pub mod types;
pub mod validator;
pub mod xml;

// Re-export commonly used items
pub use builder::build_document;
pub use error::{EngineError, Result};
pub use factory::{create_license, LicenseArchetype, LicenseOptions};
pub use parser::parse_document;
pub use types::{Content, License, Metadata, Payment, PaymentType, RightsSet, RslData};
pub use validator::{validate, Finding, Severity, ValidationReport, ValidationStrategy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        let _content = Content::new("https://example.com");
        let _strategy = ValidationStrategy::Basic;
        let _severity = Severity::Warning;
    }
}
