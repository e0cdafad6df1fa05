//! Error types for the localization core.
//!
//! Lookup misses (no locale or localizer on a context) are never errors; they
//! surface as `Option`s. Everything here is a failure the immediate caller is
//! expected to handle or escalate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by locale construction and the validation translator registry.
#[derive(Error, Debug)]
pub enum IntlError {
    /// Raw string is not one of the allow-listed locale codes
    #[error("invalid language: {0:?}")]
    InvalidLocale(String),

    /// No locale was bound to the context
    #[error("locale not found in context")]
    LocaleNotFound,

    /// The locale has no registered validation-message set
    #[error("localizer not found for locale {0:?}")]
    NoLocalizer(String),

    /// Registering validation templates failed
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Failures reported by the validation engine while binding templates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A template already exists for this key and override was not requested
    #[error("conflicting translation for key {key:?} in locale {locale:?}")]
    Conflict { locale: String, key: String },

    /// The template text was empty
    #[error("empty translation text for key {key:?} in locale {locale:?}")]
    EmptyText { locale: String, key: String },
}

/// Failures resolving a single message key against a localizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizeError {
    /// Key is absent from the locale's catalog
    #[error("message {key:?} not found in language {locale:?}")]
    MessageNotFound { locale: String, key: String },

    /// Key names a category (message with attributes but no value)
    #[error("message {key:?} in language {locale:?} has no value")]
    NotLeaf { locale: String, key: String },

    /// The provider reported errors while formatting the pattern
    #[error("failed to format message {key:?}: {details}")]
    Format { key: String, details: String },
}

/// Failures loading message catalogs into a bundle.
#[derive(Error, Debug)]
pub enum BundleError {
    /// Failed to read a catalog file
    #[error("failed to read catalog {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to list the catalog directory
    #[error("failed to read catalog directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog source did not parse
    #[error("failed to parse catalog for {locale}: {details}")]
    Parse { locale: String, details: String },

    /// The catalog redefines messages already present for the locale
    #[error("conflicting messages in catalog for {locale}: {details}")]
    Conflict { locale: String, details: String },
}

/// Failures reported by the required-key audit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("bundle is nil")]
    NilBundle,

    /// Every `locale:key` pair that failed to resolve
    #[error("i18n missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),
}

/// Convenience type alias
pub type Result<T> = std::result::Result<T, IntlError>;
