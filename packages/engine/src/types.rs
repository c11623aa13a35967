//! Core data types for RSL documents.
//!
//! These types form the editable in-memory model of a Really Simple
//! Licensing document: an ordered list of [`Content`] entries, each binding
//! a URL to licenses, payment terms, legal terms, and descriptive metadata.
//! Instances are transient — they live in dashboard state or request
//! payloads, which is why everything here derives serde.

use serde::{Deserialize, Serialize};

/// Payment model of a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// One-time purchase.
    Purchase,
    /// Recurring subscription.
    Subscription,
    /// Paid use as AI training data.
    Training,
    /// Paid crawl access.
    Crawl,
    /// Paid inference-time use.
    Inference,
    /// Attribution required instead of payment.
    Attribution,
    /// No payment required.
    Free,
}

impl PaymentType {
    /// String value as it appears in the XML `type` attribute.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Subscription => "subscription",
            Self::Training => "training",
            Self::Crawl => "crawl",
            Self::Inference => "inference",
            Self::Attribution => "attribution",
            Self::Free => "free",
        }
    }

    /// Parse from an XML attribute value. Unknown values fall back to
    /// [`PaymentType::Free`], matching the parser's tolerance policy.
    #[must_use]
    pub fn from_token(text: &str) -> Self {
        match text {
            "purchase" => Self::Purchase,
            "subscription" => Self::Subscription,
            "training" => Self::Training,
            "crawl" => Self::Crawl,
            "inference" => Self::Inference,
            "attribution" => Self::Attribution,
            _ => Self::Free,
        }
    }

    /// Whether this type requires payment details to be meaningful.
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }
}

/// Payment terms attached to a license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment model.
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// URLs of standard pricing terms, in emission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub standard_urls: Vec<String>,

    /// URL of custom pricing terms (at most one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,

    /// Decimal amount, kept as a string to avoid float round-tripping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// ISO 4217-style currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Payment {
    /// Create payment terms with only a payment model set.
    #[must_use]
    pub fn new(payment_type: PaymentType) -> Self {
        Self {
            payment_type,
            standard_urls: Vec::new(),
            custom_url: None,
            amount: None,
            currency: None,
        }
    }

    /// Whether any pricing details are present beyond the payment model.
    /// The amount counts only together with a currency, mirroring the
    /// builder's emission rule.
    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.standard_urls.is_empty()
            || self.custom_url.is_some()
            || (self.amount.is_some() && self.currency.is_some())
    }
}

/// One allow- or deny-list: usage activities, user classes, and
/// geographic codes.
///
/// Sub-lists hold free-form tokens in caller order; the model does not
/// deduplicate. An empty set is equivalent to an absent one — the builder
/// emits nothing for empty sub-lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightsSet {
    /// Usage activity tokens (e.g. "ai-train", "search", "all").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usage: Vec<String>,

    /// User class tokens (e.g. "commercial", "education").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub user: Vec<String>,

    /// Geographic tokens (ISO country/region codes).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub geo: Vec<String>,
}

impl RightsSet {
    /// Whether all three sub-lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.usage.is_empty() && self.user.is_empty() && self.geo.is_empty()
    }

    /// Sub-lists paired with their XML `type` attribute value, in
    /// emission order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &[String]); 3] {
        [
            ("usage", self.usage.as_slice()),
            ("user", self.user.as_slice()),
            ("geo", self.geo.as_slice()),
        ]
    }

    /// Replace the sub-list named by `key`. Returns `false` for
    /// unrecognized keys, which callers are expected to drop silently.
    pub fn assign(&mut self, key: &str, tokens: Vec<String>) -> bool {
        match key {
            "usage" => self.usage = tokens,
            "user" => self.user = tokens,
            "geo" => self.geo = tokens,
            _ => return false,
        }
        true
    }
}

/// Kind of a legal terms entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalType {
    /// Affirmative warranty terms.
    Warranty,
    /// Disclaimer terms.
    Disclaimer,
}

impl LegalType {
    /// String value as it appears in the XML `type` attribute.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warranty => "warranty",
            Self::Disclaimer => "disclaimer",
        }
    }

    /// Parse from an XML attribute value. Unrecognized values yield
    /// `None` and the element is skipped.
    #[must_use]
    pub fn from_token(text: &str) -> Option<Self> {
        match text {
            "warranty" => Some(Self::Warranty),
            "disclaimer" => Some(Self::Disclaimer),
            _ => None,
        }
    }
}

/// One legal terms entry. In practice a license carries at most one entry
/// per type, but the model does not enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntry {
    /// Entry kind.
    #[serde(rename = "type")]
    pub legal_type: LegalType,

    /// Term tokens (e.g. "as-is", "no-warranty").
    pub terms: Vec<String>,
}

impl LegalEntry {
    /// Create a legal entry.
    #[must_use]
    pub fn new(legal_type: LegalType, terms: Vec<String>) -> Self {
        Self { legal_type, terms }
    }
}

/// One usage-rights bundle attachable to a content entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// Unique identifier within a document. Assigned at creation and
    /// never reassigned; not carried in the XML.
    pub id: String,

    /// Human label (e.g. "License Option 2"). Editor-side only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Allow-list of rights.
    #[serde(default, skip_serializing_if = "RightsSet::is_empty")]
    pub permits: RightsSet,

    /// Deny-list of rights.
    #[serde(default, skip_serializing_if = "RightsSet::is_empty")]
    pub prohibits: RightsSet,

    /// Payment terms. `None` omits the payment block entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,

    /// Legal terms entries, in emission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legal: Vec<LegalEntry>,
}

impl License {
    /// Whether this license declares no rights at all — no permits and
    /// no prohibits. Flagged by comprehensive validation as a warning,
    /// never rejected.
    #[must_use]
    pub fn declares_no_rights(&self) -> bool {
        self.permits.is_empty() && self.prohibits.is_empty()
    }
}

/// Copyright holder kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyrightType {
    /// Natural person.
    Person,
    /// Organization.
    Organization,
}

impl CopyrightType {
    /// String value as it appears in the XML `type` attribute.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
        }
    }
}

/// Per-content descriptive and legal metadata. Absent fields are omitted
/// from the XML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// URL of the licensing schema the document follows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_url: Option<String>,

    /// Name of the copyright holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<String>,

    /// Kind of copyright holder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_type: Option<CopyrightType>,

    /// Licensing contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    /// Licensing contact URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,

    /// URL of the full legal terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_url: Option<String>,
}

impl Metadata {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schema_url.is_none()
            && self.copyright_holder.is_none()
            && self.copyright_type.is_none()
            && self.contact_email.is_none()
            && self.contact_url.is_none()
            && self.terms_url.is_none()
    }

    /// Whether any of the copyright-related fields is set, which decides
    /// whether a `<copyright>` element is emitted at all.
    #[must_use]
    pub fn has_copyright_info(&self) -> bool {
        self.copyright_holder.is_some()
            || self.copyright_type.is_some()
            || self.contact_email.is_some()
            || self.contact_url.is_some()
    }
}

/// Licensing data bundle of a content entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RslData {
    /// URL of a dynamic license-issuing endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_server: Option<String>,

    /// Whether the content is encrypted. Only `true` is ever written to
    /// the XML; `false` omits the attribute.
    #[serde(default)]
    pub encrypted: bool,

    /// Last-modified date string (e.g. "2026-08-07").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,

    /// Licenses attached to the content, in emission order. Zero licenses
    /// is constructible but fails basic validation.
    #[serde(default)]
    pub licenses: Vec<License>,

    /// Descriptive metadata, emitted after all licenses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// One licensed unit: a URL plus its licensing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// URL of the licensed content. Required for validity, though the
    /// model permits constructing an entry without it.
    pub url: String,

    /// Licensing data bundle.
    #[serde(default)]
    pub data: RslData,
}

impl Content {
    /// Create a content entry with empty licensing data.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            data: RslData::default(),
        }
    }

    /// Attach a license.
    #[must_use]
    pub fn with_license(mut self, license: License) -> Self {
        self.data.licenses.push(license);
        self
    }

    /// Attach metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.data.metadata = Some(metadata);
        self
    }
}
