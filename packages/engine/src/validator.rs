//! Two-tier validation of RSL content lists.
//!
//! Basic validation checks structural completeness and runs before every
//! build. Comprehensive validation is a strict superset: it runs the
//! basic checks first and then adds semantic findings (malformed URLs and
//! emails, conflicting rights, incomplete payment terms).
//!
//! Validation is advisory. The builder renders documents regardless of
//! findings — the two calls are never fused, so a dashboard can warn and
//! still generate XML.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::{is_valid_email, is_valid_url};
use crate::types::{Content, License};

/// Validation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStrategy {
    /// Structural completeness only.
    Basic,
    /// Structural completeness plus semantic checks.
    Comprehensive,
}

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks a "document is valid" verdict.
    Error,
    /// Advisory; never blocks.
    Warning,
    /// Informational.
    Info,
}

/// One classified validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Finding severity.
    pub severity: Severity,

    /// Human-readable description.
    pub message: String,

    /// Where the finding applies (usually the content URL), if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        match &self.context {
            Some(context) => write!(f, "{label}: {} ({context})", self.message),
            None => write!(f, "{label}: {}", self.message),
        }
    }
}

/// Outcome of one validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    findings: Vec<Finding>,
}

impl ValidationReport {
    /// True iff the run produced no error-severity findings. Warnings
    /// never block.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    /// All findings, in emission order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Error-severity findings only.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    /// Warning-severity findings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    fn error(&mut self, message: String, context: Option<String>) {
        self.findings.push(Finding {
            severity: Severity::Error,
            message,
            context,
        });
    }

    fn warning(&mut self, message: String, context: Option<String>) {
        self.findings.push(Finding {
            severity: Severity::Warning,
            message,
            context,
        });
    }
}

/// Validate a content list at the given tier.
///
/// Stateless and total: every check is defined over the whole model
/// shape, and a validation run never fails — it reports.
///
/// # Examples
/// ```
/// use rslkit_engine::validator::{validate, ValidationStrategy};
///
/// let report = validate(&[], ValidationStrategy::Basic);
/// assert!(!report.is_valid());
/// assert_eq!(report.findings().len(), 1);
/// ```
#[must_use]
pub fn validate(contents: &[Content], strategy: ValidationStrategy) -> ValidationReport {
    let mut report = ValidationReport::default();

    // An empty document short-circuits: one error, no per-entry checks.
    if contents.is_empty() {
        report.error("Document contains no content entries".to_string(), None);
        return report;
    }

    check_structure(contents, &mut report);

    if strategy == ValidationStrategy::Comprehensive {
        check_semantics(contents, &mut report);
    }

    debug!(
        findings = report.findings.len(),
        valid = report.is_valid(),
        "validation finished"
    );
    report
}

/// Basic tier: URLs present, at least one license per entry, license ids
/// set.
fn check_structure(contents: &[Content], report: &mut ValidationReport) {
    for (index, content) in contents.iter().enumerate() {
        let entry = index + 1;
        let context = non_empty(&content.url);

        if content.url.is_empty() {
            report.error(format!("Content entry {entry}: URL is required"), None);
        }

        if content.data.licenses.is_empty() {
            report.error(
                format!("Content entry {entry}: at least one license is required"),
                context.clone(),
            );
        }

        for (license_index, license) in content.data.licenses.iter().enumerate() {
            if license.id.is_empty() {
                report.error(
                    format!(
                        "Content entry {entry}, license {}: license id is missing",
                        license_index + 1
                    ),
                    context.clone(),
                );
            }
        }
    }
}

/// Comprehensive tier: semantic checks on top of the structural ones.
fn check_semantics(contents: &[Content], report: &mut ValidationReport) {
    for (index, content) in contents.iter().enumerate() {
        let entry = index + 1;
        let context = non_empty(&content.url);

        if !content.url.is_empty() && !is_valid_url(&content.url) {
            report.warning(
                format!(
                    "Content entry {entry}: '{}' is not a valid absolute URL",
                    content.url
                ),
                None,
            );
        }

        for license in &content.data.licenses {
            check_license(license, entry, &context, report);
        }

        if let Some(metadata) = &content.data.metadata {
            for (field, value) in [
                ("schema URL", &metadata.schema_url),
                ("contact URL", &metadata.contact_url),
                ("terms URL", &metadata.terms_url),
            ] {
                if let Some(url) = value {
                    if !is_valid_url(url) {
                        report.warning(
                            format!("Content entry {entry}: {field} '{url}' is malformed"),
                            context.clone(),
                        );
                    }
                }
            }

            if let Some(email) = &metadata.contact_email {
                if !is_valid_email(email) {
                    report.warning(
                        format!("Content entry {entry}: contact email '{email}' is malformed"),
                        context.clone(),
                    );
                }
            }
        }
    }
}

/// Semantic checks for a single license.
fn check_license(
    license: &License,
    entry: usize,
    context: &Option<String>,
    report: &mut ValidationReport,
) {
    let label = license
        .name
        .clone()
        .unwrap_or_else(|| license.id.clone());

    // Same usage token on both the allow- and the deny-list is the one
    // semantic finding severe enough to be an error.
    let conflicts: Vec<&str> = license
        .permits
        .usage
        .iter()
        .filter(|token| license.prohibits.usage.contains(token))
        .map(String::as_str)
        .collect();
    if !conflicts.is_empty() {
        report.error(
            format!(
                "Content entry {entry}, license '{label}': usage both permitted and prohibited: {}",
                conflicts.join(",")
            ),
            context.clone(),
        );
    }

    if let Some(payment) = &license.payment {
        if !payment.payment_type.is_free()
            && payment.amount.is_none()
            && payment.custom_url.is_none()
            && payment.standard_urls.is_empty()
        {
            report.warning(
                format!(
                    "Content entry {entry}, license '{label}': payment type '{}' specified but no payment details provided",
                    payment.payment_type.as_str()
                ),
                context.clone(),
            );
        }

        if payment.amount.is_some() && payment.currency.is_none() {
            report.error(
                format!(
                    "Content entry {entry}, license '{label}': payment amount specified without a currency"
                ),
                context.clone(),
            );
        }

        for url in payment
            .standard_urls
            .iter()
            .chain(payment.custom_url.as_ref())
        {
            if !is_valid_url(url) {
                report.warning(
                    format!(
                        "Content entry {entry}, license '{label}': payment URL '{url}' is malformed"
                    ),
                    context.clone(),
                );
            }
        }
    }

    if license.declares_no_rights() {
        report.warning(
            format!("Content entry {entry}, license '{label}': no permits or prohibits declared"),
            context.clone(),
        );
    }
}

fn non_empty(s: &str) -> Option<String> {
    Some(s.to_string()).filter(|s| !s.is_empty())
}
