//! Internationalization (i18n) module: request-scoped localization.
//!
//! # Architecture
//!
//! - `locale`: validated `Locale` type over the allow-listed UI languages
//! - `registry`: ordered list of languages offered to users, with whitelist filtering
//! - `bundle` / `localizer`: Fluent-backed catalogs and per-locale key resolution
//! - `context`: immutable per-request chain carrying the locale and localizer
//! - `translator` / `validation` / `templates`: lazily registered validation translators
//! - `resolver`: fail-fast rendering for always-visible UI text
//! - `audit`: required-key verification across locales
//! - `metrics`: lookup and registration counters
//!
//! # Example
//!
//! ```rust,ignore
//! use request_intl::i18n::{must_localize, Bundle, Context, Locale, Localizer};
//!
//! let bundle = Arc::new(Bundle::embedded()?);
//! let locale = Locale::parse("ru")?;
//! let ctx = Context::background()
//!     .with_locale(locale)
//!     .with_localizer(Arc::new(Localizer::new(bundle, locale)));
//!
//! let home = must_t(&ctx, "nav.home");
//! ```

mod audit;
mod bundle;
mod context;
mod error;
mod locale;
mod localizer;
mod metrics;
mod registry;
mod resolver;
mod templates;
mod translator;
mod validation;

pub use audit::{audit_required_keys, validate_required_keys, AuditReport, MissingKey};
pub use bundle::{Bundle, REQUIRED_KEYS};
pub use context::{use_locale, use_localizer, Context, ContextKey, LOCALE_KEY, LOCALIZER_KEY};
pub use error::{AuditError, BundleError, IntlError, LocalizeError, RegistrationError};
pub use fluent_bundle::FluentArgs;
pub use locale::Locale;
pub use localizer::Localizer;
pub use metrics::{LocalizationMetrics, MetricsReport};
pub use registry::{supported_languages, LanguageRegistry, SupportedLanguage};
pub use resolver::{must_localize, must_localize_with_args, must_t, try_localize, MissingTranslation};
pub use templates::{register_en, register_pt_br, register_ru, register_zh, RegisterFn};
pub use translator::{TranslatorRegistry, UniversalTranslator};
pub use validation::{FieldError, Translator, ValidationEngine};
