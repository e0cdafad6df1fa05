//! Fail-fast message resolution for always-rendered UI text.
//!
//! Navigation, layout chrome and other shared surfaces must never show a raw
//! key. A miss there is a deployment defect, so [`must_localize`] panics with a
//! [`MissingTranslation`] diagnostic naming the key, locale and call site.
//! Code that can degrade gracefully uses [`use_localizer`](crate::i18n::use_localizer)
//! and [`Localizer::localize`] instead.

use crate::i18n::error::LocalizeError;
use crate::i18n::{Context, Localizer, Locale};
use fluent_bundle::FluentArgs;
use std::fmt;
use std::panic::Location;
use tracing::error;

const HINT: &str = "missing or not a leaf string (e.g. parent/category key)";
const REMEDIATION: &str = "run: cargo test required_keys or add the key to locale files";

/// Diagnostic raised when a required message cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslation {
    pub key: String,
    pub locale: Locale,
    pub callsite: &'static Location<'static>,
    pub source: LocalizeError,
}

impl MissingTranslation {
    pub fn hint(&self) -> &'static str {
        HINT
    }

    pub fn remediation(&self) -> &'static str {
        REMEDIATION
    }
}

impl fmt::Display for MissingTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "i18n missing translation: message_id={:?} locale={} callsite={}:{} error={:?} hint={} remediation={:?}",
            self.key,
            self.locale,
            self.callsite.file(),
            self.callsite.line(),
            self.source.to_string(),
            HINT,
            REMEDIATION
        )
    }
}

impl std::error::Error for MissingTranslation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Resolve `key`, reporting failures as a [`MissingTranslation`] attributed to
/// the caller.
#[track_caller]
pub fn try_localize(localizer: &Localizer, key: &str) -> Result<String, MissingTranslation> {
    let callsite = Location::caller();
    localizer
        .localize(key)
        .map_err(|source| missing(localizer, key, callsite, source))
}

/// Resolve `key` or panic with a [`MissingTranslation`] diagnostic.
#[track_caller]
pub fn must_localize(localizer: &Localizer, key: &str) -> String {
    let callsite = Location::caller();
    match localizer.localize(key) {
        Ok(text) => text,
        Err(source) => fail(missing(localizer, key, callsite, source)),
    }
}

/// [`must_localize`] for messages with placeables.
#[track_caller]
pub fn must_localize_with_args(localizer: &Localizer, key: &str, args: &FluentArgs<'_>) -> String {
    let callsite = Location::caller();
    match localizer.localize_with_args(key, args) {
        Ok(text) => text,
        Err(source) => fail(missing(localizer, key, callsite, source)),
    }
}

/// Resolve `key` with the localizer bound to `ctx`.
///
/// # Panics
/// Panics if `ctx` carries no localizer or the key does not resolve.
#[track_caller]
pub fn must_t(ctx: &Context, key: &str) -> String {
    match ctx.localizer() {
        Some(localizer) => must_localize(&localizer, key),
        None => panic!("localizer not found in context"),
    }
}

fn missing(
    localizer: &Localizer,
    key: &str,
    callsite: &'static Location<'static>,
    source: LocalizeError,
) -> MissingTranslation {
    MissingTranslation {
        key: key.to_string(),
        locale: localizer.locale(),
        callsite,
        source,
    }
}

fn fail(diagnostic: MissingTranslation) -> ! {
    error!(
        message_id = %diagnostic.key,
        locale = %diagnostic.locale,
        callsite = %diagnostic.callsite,
        error = %diagnostic.source,
        hint = HINT,
        remediation = REMEDIATION,
        "i18n missing translation"
    );
    panic!("{}", diagnostic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Bundle;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    fn localizer() -> Localizer {
        let mut bundle = Bundle::new();
        bundle
            .add_messages(
                Locale::EN,
                "nav =\n    .home = Home\nwelcome = Welcome, { $name }\n",
            )
            .unwrap();
        Localizer::new(Arc::new(bundle), Locale::EN)
    }

    fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
        payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn test_must_localize_leaf_key() {
        assert_eq!(must_localize(&localizer(), "nav.home"), "Home");
    }

    #[test]
    fn test_must_localize_with_args() {
        let mut args = FluentArgs::new();
        args.set("name", "Ada");
        assert_eq!(
            must_localize_with_args(&localizer(), "welcome", &args),
            "Welcome, Ada"
        );
    }

    #[test]
    fn test_must_localize_missing_key_panics_with_diagnostic() {
        let localizer = localizer();
        let payload = catch_unwind(AssertUnwindSafe(|| must_localize(&localizer, "nav.missing")))
            .expect_err("missing key must panic");

        let message = panic_message(payload);
        assert!(message.contains("message_id=\"nav.missing\""));
        assert!(message.contains("locale=en"));
        assert!(message.contains(file!()));
        assert!(message.contains("hint=missing or not a leaf string"));
        assert!(message.contains("remediation="));
    }

    #[test]
    fn test_must_localize_category_key_panics() {
        let localizer = localizer();
        let payload = catch_unwind(AssertUnwindSafe(|| must_localize(&localizer, "nav")))
            .expect_err("category key must panic");
        assert!(panic_message(payload).contains("has no value"));
    }

    #[test]
    fn test_try_localize_reports_callsite() {
        let localizer = localizer();
        let line = line!() + 1;
        let err = try_localize(&localizer, "nav.missing").unwrap_err();

        assert_eq!(err.key, "nav.missing");
        assert_eq!(err.locale, Locale::EN);
        assert_eq!(err.callsite.file(), file!());
        assert_eq!(err.callsite.line(), line);
        assert!(matches!(err.source, LocalizeError::MessageNotFound { .. }));
        assert_eq!(err.hint(), HINT);
        assert_eq!(err.remediation(), REMEDIATION);
    }

    #[test]
    fn test_must_t_uses_context_localizer() {
        let ctx = Context::background().with_localizer(Arc::new(localizer()));
        assert_eq!(must_t(&ctx, "nav.home"), "Home");
    }

    #[test]
    fn test_must_t_without_localizer_panics() {
        let payload = catch_unwind(|| must_t(&Context::background(), "nav.home"))
            .expect_err("absent localizer must panic");
        assert_eq!(panic_message(payload), "localizer not found in context");
    }
}
