//! Error types for the RSL engine.
//!
//! The engine surface is deliberately narrow: the builder renders whatever
//! it is given, the parser recovers from malformed input instead of
//! erroring, and the validator reports findings rather than failing. The
//! one fatal condition is requesting a license archetype that does not
//! exist, which is a programming error at the call site.

use thiserror::Error;

/// Main error type for the RSL engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Requested license archetype is not registered.
    #[error("Unknown license type: '{0}'. Expected one of: free, commercial, educational, research")]
    UnknownLicenseType(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_license_type_display() {
        let err = EngineError::UnknownLicenseType("enterprise".to_string());
        assert!(err.to_string().contains("enterprise"));
        assert!(err.to_string().contains("free, commercial, educational, research"));
    }
}
