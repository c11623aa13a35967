//! License construction presets.
//!
//! New licenses start from a common baseline (fresh id, empty rights,
//! free payment with a default currency) and an archetype overlays its
//! policy on top. Archetypes are a fixed enum dispatched in one match —
//! there is no runtime registry and the set never changes after startup.

use std::str::FromStr;

use uuid::Uuid;

use crate::config::DEFAULT_CURRENCY;
use crate::error::{EngineError, Result};
use crate::types::{LegalEntry, LegalType, License, Payment, PaymentType, RightsSet};

/// Named preset policy for constructing a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseArchetype {
    /// Minimal free license, optionally seeded with usage tokens.
    Free,
    /// Paid license permitting all usage for commercial users.
    Commercial,
    /// Free license for educational use with an as-is disclaimer.
    Educational,
    /// Free license for AI research use.
    Research,
}

impl LicenseArchetype {
    /// String key as used by dashboard payloads and the CLI.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Commercial => "commercial",
            Self::Educational => "educational",
            Self::Research => "research",
        }
    }
}

impl FromStr for LicenseArchetype {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "commercial" => Ok(Self::Commercial),
            "educational" => Ok(Self::Educational),
            "research" => Ok(Self::Research),
            _ => Err(EngineError::UnknownLicenseType(s.to_string())),
        }
    }
}

/// Caller-supplied options for license construction. All fields are
/// optional; archetypes read only the fields they care about.
#[derive(Debug, Clone, Default)]
pub struct LicenseOptions {
    /// Human label (e.g. "License Option 2").
    pub name: Option<String>,

    /// Usage tokens seeded on a free license.
    pub usages: Vec<String>,

    /// Selects subscription instead of purchase for commercial licenses.
    pub subscription: bool,

    /// Price amount for commercial licenses.
    pub amount: Option<String>,

    /// Currency for commercial licenses. Defaults to
    /// [`DEFAULT_CURRENCY`] when unset.
    pub currency: Option<String>,

    /// Restricts research licenses to non-commercial users only.
    pub non_commercial_only: bool,
}

/// Create a license from a string-keyed archetype.
///
/// This is the entry point for callers holding an archetype name from a
/// request payload. Requesting an unknown archetype is a caller bug and
/// fails the whole call.
///
/// # Errors
/// Returns [`EngineError::UnknownLicenseType`] if `archetype` is not a
/// registered archetype name.
///
/// # Examples
/// ```
/// use rslkit_engine::factory::{create_license, LicenseOptions};
///
/// let license = create_license("educational", &LicenseOptions::default()).unwrap();
/// assert_eq!(license.permits.user, vec!["education"]);
/// assert!(create_license("enterprise", &LicenseOptions::default()).is_err());
/// ```
pub fn create_license(archetype: &str, options: &LicenseOptions) -> Result<License> {
    Ok(build_license(archetype.parse()?, options))
}

/// Create a license from a typed archetype.
#[must_use]
pub fn build_license(archetype: LicenseArchetype, options: &LicenseOptions) -> License {
    let mut license = base_license(options);

    match archetype {
        LicenseArchetype::Free => {
            license.permits.usage = options.usages.clone();
        }
        LicenseArchetype::Commercial => {
            license.permits.usage = vec!["all".to_string()];
            license.permits.user = vec!["commercial".to_string()];
            if let Some(payment) = license.payment.as_mut() {
                payment.payment_type = if options.subscription {
                    PaymentType::Subscription
                } else {
                    PaymentType::Purchase
                };
                payment.amount = options.amount.clone();
                if let Some(currency) = &options.currency {
                    payment.currency = Some(currency.clone());
                }
            }
        }
        LicenseArchetype::Educational => {
            license.permits.usage = vec!["ai-train".to_string(), "search".to_string()];
            license.permits.user = vec!["education".to_string()];
            license.legal.push(LegalEntry::new(
                LegalType::Disclaimer,
                vec!["as-is".to_string(), "no-warranty".to_string()],
            ));
        }
        LicenseArchetype::Research => {
            license.permits.usage = vec!["ai-train".to_string(), "ai-input".to_string()];
            license.permits.user = if options.non_commercial_only {
                vec!["non-commercial".to_string()]
            } else {
                vec!["education".to_string(), "non-commercial".to_string()]
            };
        }
    }

    license
}

/// Common baseline every archetype starts from.
fn base_license(options: &LicenseOptions) -> License {
    let mut payment = Payment::new(PaymentType::Free);
    payment.currency = Some(DEFAULT_CURRENCY.to_string());

    License {
        id: Uuid::new_v4().to_string(),
        name: options.name.clone(),
        permits: RightsSet::default(),
        prohibits: RightsSet::default(),
        payment: Some(payment),
        legal: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archetype_from_str() {
        assert_eq!(
            "free".parse::<LicenseArchetype>().unwrap(),
            LicenseArchetype::Free
        );
        assert_eq!(
            "Commercial".parse::<LicenseArchetype>().unwrap(),
            LicenseArchetype::Commercial
        );
        assert_eq!(
            "RESEARCH".parse::<LicenseArchetype>().unwrap(),
            LicenseArchetype::Research
        );
    }

    #[test]
    fn test_unknown_archetype_fails() {
        let err = create_license("enterprise", &LicenseOptions::default()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownLicenseType(name) if name == "enterprise"));
    }

    #[test]
    fn test_base_defaults() {
        let license = build_license(LicenseArchetype::Free, &LicenseOptions::default());

        assert!(!license.id.is_empty());
        assert!(license.name.is_none());
        assert!(license.permits.is_empty());
        assert!(license.prohibits.is_empty());
        assert!(license.legal.is_empty());

        let payment = license.payment.unwrap();
        assert_eq!(payment.payment_type, PaymentType::Free);
        assert_eq!(payment.currency.as_deref(), Some("USD"));
        assert!(payment.amount.is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = build_license(LicenseArchetype::Free, &LicenseOptions::default());
        let b = build_license(LicenseArchetype::Free, &LicenseOptions::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_free_seeds_usages() {
        let options = LicenseOptions {
            usages: vec!["search".to_string(), "ai-summarize".to_string()],
            ..LicenseOptions::default()
        };
        let license = build_license(LicenseArchetype::Free, &options);
        assert_eq!(license.permits.usage, vec!["search", "ai-summarize"]);
        assert!(license.permits.user.is_empty());
    }

    #[test]
    fn test_commercial_defaults() {
        let options = LicenseOptions {
            amount: Some("5".to_string()),
            currency: Some("EUR".to_string()),
            ..LicenseOptions::default()
        };
        let license = build_license(LicenseArchetype::Commercial, &options);

        assert_eq!(license.permits.usage, vec!["all"]);
        assert_eq!(license.permits.user, vec!["commercial"]);

        let payment = license.payment.unwrap();
        assert_eq!(payment.payment_type, PaymentType::Purchase);
        assert_eq!(payment.amount.as_deref(), Some("5"));
        assert_eq!(payment.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_commercial_subscription() {
        let options = LicenseOptions {
            subscription: true,
            ..LicenseOptions::default()
        };
        let license = build_license(LicenseArchetype::Commercial, &options);
        assert_eq!(
            license.payment.unwrap().payment_type,
            PaymentType::Subscription
        );
    }

    #[test]
    fn test_educational_defaults() {
        let license = build_license(LicenseArchetype::Educational, &LicenseOptions::default());

        assert_eq!(license.permits.usage, vec!["ai-train", "search"]);
        assert_eq!(license.permits.user, vec!["education"]);
        assert_eq!(license.legal.len(), 1);

        let legal = &license.legal[0];
        assert_eq!(legal.legal_type, LegalType::Disclaimer);
        assert_eq!(legal.terms, vec!["as-is", "no-warranty"]);
    }

    #[test]
    fn test_research_defaults() {
        let license = build_license(LicenseArchetype::Research, &LicenseOptions::default());
        assert_eq!(license.permits.usage, vec!["ai-train", "ai-input"]);
        assert_eq!(license.permits.user, vec!["education", "non-commercial"]);

        let options = LicenseOptions {
            non_commercial_only: true,
            ..LicenseOptions::default()
        };
        let license = build_license(LicenseArchetype::Research, &options);
        assert_eq!(license.permits.user, vec!["non-commercial"]);
    }

    #[test]
    fn test_name_is_carried() {
        let options = LicenseOptions {
            name: Some("License Option 3".to_string()),
            ..LicenseOptions::default()
        };
        let license = build_license(LicenseArchetype::Free, &options);
        assert_eq!(license.name.as_deref(), Some("License Option 3"));
    }
}
