use crate::i18n::{supported_languages, Locale, REQUIRED_KEYS};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Catalogs
    pub locales_dir: Option<PathBuf>,

    // Languages
    pub default_locale: Locale,
    pub languages: Vec<String>,

    // Audit
    pub required_keys: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_locale = var("INTL_DEFAULT_LOCALE").unwrap_or_else(|| "en".to_string());

        Ok(Self {
            // Catalogs - embedded when unset
            locales_dir: var("INTL_LOCALES_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),

            // Languages
            default_locale: Locale::parse(&default_locale)
                .context("INTL_DEFAULT_LOCALE is not a supported locale")?,
            languages: var("INTL_LANGUAGES")
                .map(|v| split_list(&v))
                .unwrap_or_default(),

            // Audit
            required_keys: var("INTL_REQUIRED_KEYS")
                .map(|v| split_list(&v))
                .filter(|keys| !keys.is_empty())
                .unwrap_or_else(|| REQUIRED_KEYS.iter().map(|key| key.to_string()).collect()),
        })
    }

    /// Locales the audit must cover.
    ///
    /// # Returns
    /// The whitelisted supported languages in registry order (all of them when
    /// `INTL_LANGUAGES` is empty), followed by the default locale when the
    /// whitelist left it out. The default locale is served whenever a request
    /// resolves nothing else, so it is always audited.
    pub fn audit_locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = supported_languages(self.languages.as_slice())
            .into_iter()
            .map(|lang| lang.locale)
            .collect();
        if !locales.contains(&self.default_locale) {
            locales.push(self.default_locale);
        }
        locales
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
