//! Validation translator registry.
//!
//! Hands out the validation [`Translator`] for the locale bound to a
//! [`Context`], registering that locale's templates into the shared
//! [`ValidationEngine`] on first use. Registration runs under the registry's
//! mutex and happens at most once per locale; later requests are served from
//! the registered set.

use crate::i18n::error::{IntlError, Result};
use crate::i18n::templates::{self, RegisterFn};
use crate::i18n::validation::{Translator, ValidationEngine};
use crate::i18n::{Context, LocalizationMetrics, Locale};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::{debug, warn};

/// One translator per supported locale, plus a fallback.
#[derive(Debug)]
pub struct UniversalTranslator {
    fallback: Arc<Translator>,
    translators: HashMap<Locale, Arc<Translator>>,
}

impl UniversalTranslator {
    pub fn new(fallback: Locale, supported: &[Locale]) -> Self {
        let mut translators: HashMap<Locale, Arc<Translator>> = supported
            .iter()
            .map(|&locale| (locale, Arc::new(Translator::new(locale))))
            .collect();
        let fallback = translators
            .entry(fallback)
            .or_insert_with(|| Arc::new(Translator::new(fallback)))
            .clone();
        Self {
            fallback,
            translators,
        }
    }

    /// Translator for `locale`, or `None` if the locale was not seeded.
    pub fn get_translator(&self, locale: Locale) -> Option<Arc<Translator>> {
        self.translators.get(&locale).cloned()
    }

    pub fn fallback(&self) -> &Arc<Translator> {
        &self.fallback
    }
}

/// Lazily registers and serves per-locale validation translators.
pub struct TranslatorRegistry {
    universal: OnceLock<UniversalTranslator>,
    engine: Arc<ValidationEngine>,
    table: HashMap<&'static str, RegisterFn>,
    registered: Mutex<HashSet<Locale>>,
    registrations: AtomicUsize,
}

impl TranslatorRegistry {
    /// Registry over the default validation templates.
    pub fn new(engine: Arc<ValidationEngine>) -> Self {
        Self::with_table(engine, templates::default_table())
    }

    /// Registry over a custom code to registration-function table.
    pub fn with_table(
        engine: Arc<ValidationEngine>,
        table: impl IntoIterator<Item = (&'static str, RegisterFn)>,
    ) -> Self {
        Self {
            universal: OnceLock::new(),
            engine,
            table: table.into_iter().collect(),
            registered: Mutex::new(HashSet::new()),
            registrations: AtomicUsize::new(0),
        }
    }

    pub fn engine(&self) -> &Arc<ValidationEngine> {
        &self.engine
    }

    fn universal(&self) -> &UniversalTranslator {
        self.universal
            .get_or_init(|| UniversalTranslator::new(Locale::EN, Locale::all()))
    }

    /// Validation translator for the locale bound to `ctx`.
    ///
    /// # Errors
    /// * `LocaleNotFound` if `ctx` carries no locale
    /// * `NoLocalizer` if the locale has no registration function; nothing is
    ///   registered in that case
    /// * `Registration` if binding the templates failed; nothing reaches the
    ///   shared translator or engine, the locale stays unregistered and the
    ///   next request retries
    pub fn translator(&self, ctx: &Context) -> Result<Arc<Translator>> {
        let universal = self.universal();
        let locale = ctx.locale().ok_or(IntlError::LocaleNotFound)?;
        let translator = universal
            .get_translator(locale)
            .unwrap_or_else(|| universal.fallback().clone());

        let mut registered = self.registered.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(register) = self.table.get(locale.code()) else {
            warn!(locale = %locale, "No validation translations for locale");
            return Err(IntlError::NoLocalizer(locale.to_string()));
        };

        if registered.contains(&locale) {
            LocalizationMetrics::global().record_translator_cache_hit();
            return Ok(translator);
        }

        // Stage into fresh state so a failed registration leaves nothing behind.
        self.registrations.fetch_add(1, Ordering::SeqCst);
        let staged_engine = ValidationEngine::new();
        let staged = Translator::new(translator.locale());
        register(&staged_engine, &staged)?;

        translator.merge(staged);
        self.engine.merge(staged_engine);
        registered.insert(locale);
        LocalizationMetrics::global().record_registration();
        debug!(
            locale = %locale,
            templates = translator.len(),
            "Registered validation translations"
        );

        Ok(translator)
    }

    pub fn is_registered(&self, locale: Locale) -> bool {
        self.registered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&locale)
    }

    /// Number of times a registration function has been invoked.
    pub fn registration_count(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }
}
