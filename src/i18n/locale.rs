//! Locale type: validated UI language tag.
//!
//! A `Locale` can only be built from one of the allow-listed codes. Parsing is
//! an exact membership check; no case folding or region fallback is applied.

use crate::i18n::error::{IntlError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A validated UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Locale {
    /// BCP-47 style code (e.g., "en", "pt-BR")
    code: &'static str,
}

impl Locale {
    pub const EN: Locale = Locale { code: "en" };
    pub const RU: Locale = Locale { code: "ru" };
    pub const UZ: Locale = Locale { code: "uz" };
    pub const ZH: Locale = Locale { code: "zh" };
    pub const PT_BR: Locale = Locale { code: "pt-BR" };

    /// Sentinel for "no locale resolved". Never produced by [`Locale::parse`].
    pub const UNDETERMINED: Locale = Locale { code: "und" };

    const ALLOWED: [Locale; 5] = [
        Locale::EN,
        Locale::RU,
        Locale::UZ,
        Locale::ZH,
        Locale::PT_BR,
    ];

    /// Create a Locale from a raw code.
    ///
    /// # Returns
    /// * `Ok(Locale)` if `raw` exactly matches an allow-listed code
    /// * `Err(IntlError::InvalidLocale)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let russian = Locale::parse("ru")?;
    /// ```
    pub fn parse(raw: &str) -> Result<Locale> {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|locale| locale.code == raw)
            .ok_or_else(|| IntlError::InvalidLocale(raw.to_string()))
    }

    /// All allow-listed locales.
    pub fn all() -> &'static [Locale] {
        &Self::ALLOWED
    }

    /// Get the language code (e.g., "en", "pt-BR").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Whether this is the [`Locale::UNDETERMINED`] sentinel.
    pub fn is_undetermined(&self) -> bool {
        *self == Self::UNDETERMINED
    }

    /// Language identifier handed to the Fluent provider.
    pub fn language_id(&self) -> LanguageIdentifier {
        // Every allow-listed code is a well-formed identifier; "und" parses too.
        self.code.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = IntlError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
