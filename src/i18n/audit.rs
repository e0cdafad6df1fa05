//! Required-key audit.
//!
//! Checks that every required message key resolves in every target locale.
//! All gaps are collected in a single pass so one run surfaces everything a
//! deployment is missing.

use crate::i18n::error::AuditError;
use crate::i18n::{Bundle, Locale, Localizer};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// A required key that failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingKey {
    pub locale: Locale,
    pub key: String,

    /// Why resolution failed
    pub reason: String,
}

impl MissingKey {
    /// `locale:key` label used in aggregate errors.
    pub fn label(&self) -> String {
        format!("{}:{}", self.locale, self.key)
    }
}

/// Outcome of auditing a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Locales that were checked, in the order given
    pub locales: Vec<Locale>,

    /// Number of keys checked per locale
    pub required: usize,

    /// Every failing pair, locale-major
    pub missing: Vec<MissingKey>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn into_result(self) -> Result<(), AuditError> {
        if self.is_clean() {
            return Ok(());
        }
        Err(AuditError::MissingKeys(
            self.missing.iter().map(MissingKey::label).collect(),
        ))
    }
}

/// Audit `bundle`, returning the full report.
pub fn audit_required_keys<S: AsRef<str>>(
    bundle: Option<&Arc<Bundle>>,
    required: &[S],
    locales: &[Locale],
) -> Result<AuditReport, AuditError> {
    let bundle = bundle.ok_or(AuditError::NilBundle)?;

    let mut report = AuditReport {
        locales: locales.to_vec(),
        required: required.len(),
        missing: Vec::new(),
    };
    for &locale in locales {
        let localizer = Localizer::new(Arc::clone(bundle), locale);
        for key in required {
            let key = key.as_ref();
            if let Err(err) = localizer.localize(key) {
                warn!(locale = %locale, key, "Required message key does not resolve");
                report.missing.push(MissingKey {
                    locale,
                    key: key.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
    Ok(report)
}

/// Succeeds only if every key in `required` resolves in every locale.
///
/// # Errors
/// * `NilBundle` if no bundle was supplied
/// * `MissingKeys` listing every failing `locale:key` pair
pub fn validate_required_keys<S: AsRef<str>>(
    bundle: Option<&Arc<Bundle>>,
    required: &[S],
    locales: &[Locale],
) -> Result<(), AuditError> {
    audit_required_keys(bundle, required, locales)?.into_result()
}
