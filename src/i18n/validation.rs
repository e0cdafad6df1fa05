//! Validation engine boundary: per-locale templates for validation error tags.
//!
//! The engine itself (rule evaluation producing [`FieldError`]s) lives outside
//! this crate. What is kept here is the shared state registration writes to:
//! each [`Translator`] owns the templates for its locale and the
//! [`ValidationEngine`] records which tags have a template per locale.

use crate::i18n::error::RegistrationError;
use crate::i18n::Locale;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::{OnceLock, PoisonError, RwLock};

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Validation message templates for one locale.
///
/// Templates use positional placeholders: `{0}` is the field name and `{1}`
/// the rule parameter.
#[derive(Debug)]
pub struct Translator {
    locale: Locale,
    templates: RwLock<HashMap<String, String>>,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            templates: RwLock::new(HashMap::new()),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Add a template for `key`.
    ///
    /// Fails with [`RegistrationError::Conflict`] when `key` already has a
    /// template and `override_existing` is false.
    pub fn add(
        &self,
        key: &str,
        text: &str,
        override_existing: bool,
    ) -> Result<(), RegistrationError> {
        if text.is_empty() {
            return Err(RegistrationError::EmptyText {
                locale: self.locale.to_string(),
                key: key.to_string(),
            });
        }

        let mut templates = self.templates.write().unwrap_or_else(PoisonError::into_inner);
        if templates.contains_key(key) && !override_existing {
            return Err(RegistrationError::Conflict {
                locale: self.locale.to_string(),
                key: key.to_string(),
            });
        }
        templates.insert(key.to_string(), text.to_string());
        Ok(())
    }

    /// Render the template for `key`, substituting `params` by position.
    ///
    /// Placeholders without a matching parameter are left as written.
    pub fn translate(&self, key: &str, params: &[&str]) -> Option<String> {
        let templates = self.templates.read().unwrap_or_else(PoisonError::into_inner);
        let template = templates.get(key)?;

        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{(\d+)\}").expect("valid placeholder pattern"));
        let rendered = regex.replace_all(template, |caps: &regex::Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| params.get(index))
                .map(|param| param.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        });
        Some(rendered.into_owned())
    }

    /// Move every template of `staged` into this translator, replacing
    /// templates with the same key.
    pub fn merge(&self, staged: Translator) {
        let staged = staged.templates.into_inner().unwrap_or_else(PoisonError::into_inner);
        self.templates
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(staged);
    }

    /// Number of templates registered.
    pub fn len(&self) -> usize {
        self.templates.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared validation state: which tags have a template in which locale.
#[derive(Debug, Default)]
pub struct ValidationEngine {
    translations: RwLock<HashMap<Locale, HashSet<String>>>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `text` as the template for `tag` in `translator`'s locale.
    pub fn register_translation(
        &self,
        tag: &str,
        translator: &Translator,
        text: &str,
        override_existing: bool,
    ) -> Result<(), RegistrationError> {
        translator.add(tag, text, override_existing)?;
        self.translations
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(translator.locale())
            .or_default()
            .insert(tag.to_string());
        Ok(())
    }

    /// Record every tag of `staged` as registered in this engine.
    pub fn merge(&self, staged: ValidationEngine) {
        let staged = staged.translations.into_inner().unwrap_or_else(PoisonError::into_inner);
        let mut translations = self.translations.write().unwrap_or_else(PoisonError::into_inner);
        for (locale, tags) in staged {
            translations.entry(locale).or_default().extend(tags);
        }
    }

    pub fn has_translation(&self, locale: Locale, tag: &str) -> bool {
        self.translations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locale)
            .is_some_and(|tags| tags.contains(tag))
    }

    /// Number of tags with a template in `locale`.
    pub fn registered_tags(&self, locale: Locale) -> usize {
        self.translations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locale)
            .map_or(0, HashSet::len)
    }
}

/// A failed validation rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub tag: String,
    pub param: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            tag: tag.into(),
            param: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Untranslated message used when no template is registered.
    pub fn default_message(&self) -> String {
        format!(
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
            self.field, self.field, self.tag
        )
    }

    /// Render this error in `translator`'s locale.
    pub fn translate(&self, engine: &ValidationEngine, translator: &Translator) -> String {
        if !engine.has_translation(translator.locale(), &self.tag) {
            return self.default_message();
        }
        let param = self.param.as_deref().unwrap_or_default();
        translator
            .translate(&self.tag, &[self.field.as_str(), param])
            .unwrap_or_else(|| self.default_message())
    }
}
