//! Localizer: resolves message keys for a single locale.
//!
//! There is no fallback chain; a key missing from the localizer's locale is a
//! miss even if another locale defines it.

use crate::i18n::bundle::Bundle;
use crate::i18n::error::LocalizeError;
use crate::i18n::{LocalizationMetrics, Locale};
use fluent_bundle::FluentArgs;
use std::sync::Arc;

/// Bundle-backed handle bound to one locale.
#[derive(Debug, Clone)]
pub struct Localizer {
    bundle: Arc<Bundle>,
    locale: Locale,
}

impl Localizer {
    /// Create a localizer over `bundle` for one locale.
    ///
    /// # Arguments
    /// * `bundle` - Catalogs shared across requests
    /// * `locale` - The only locale this localizer resolves in
    pub fn new(bundle: Arc<Bundle>, locale: Locale) -> Self {
        Self { bundle, locale }
    }

    /// Locale this localizer resolves in.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn bundle(&self) -> &Arc<Bundle> {
        &self.bundle
    }

    /// Resolve `key` to display text.
    ///
    /// # Returns
    /// * `Ok(String)` - The formatted message or attribute
    /// * `Err(LocalizeError::MessageNotFound)` - `key` is absent in this locale
    /// * `Err(LocalizeError::NotLeaf)` - `key` names a category without a value
    pub fn localize(&self, key: &str) -> Result<String, LocalizeError> {
        self.resolve(key, None)
    }

    /// Resolve `key`, substituting `args` into the message's placeables.
    pub fn localize_with_args(
        &self,
        key: &str,
        args: &FluentArgs<'_>,
    ) -> Result<String, LocalizeError> {
        self.resolve(key, Some(args))
    }

    fn resolve(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Result<String, LocalizeError> {
        let metrics = LocalizationMetrics::global();
        metrics.record_lookup();

        let result = self.format(key, args);
        if result.is_err() {
            metrics.record_miss();
        }
        result
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> Result<String, LocalizeError> {
        let not_found = || LocalizeError::MessageNotFound {
            locale: self.locale.to_string(),
            key: key.to_string(),
        };

        let catalog = self.bundle.catalog(self.locale).ok_or_else(not_found)?;
        let (id, attribute) = match key.split_once('.') {
            Some((id, attribute)) => (id, Some(attribute)),
            None => (key, None),
        };
        let message = catalog.get_message(id).ok_or_else(not_found)?;

        let pattern = match attribute {
            Some(name) => message
                .get_attribute(name)
                .ok_or_else(not_found)?
                .value(),
            None => message.value().ok_or_else(|| LocalizeError::NotLeaf {
                locale: self.locale.to_string(),
                key: key.to_string(),
            })?,
        };

        let mut errors = vec![];
        let text = catalog.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            return Err(LocalizeError::Format {
                key: key.to_string(),
                details: format!("{:?}", errors),
            });
        }
        Ok(text.into_owned())
    }
}
