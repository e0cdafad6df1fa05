//! Integration tests for request-scoped localization
//!
//! These tests exercise the full request flow: resolving a locale, binding it
//! and a localizer to a context, rendering UI text and validation errors from
//! downstream code, and auditing catalogs loaded from disk.

use request_intl::i18n::{
    must_t, supported_languages, use_localizer, validate_required_keys, AuditError, Bundle,
    Context, FieldError, IntlError, Locale, Localizer, TranslatorRegistry, ValidationEngine,
    REQUIRED_KEYS,
};
use std::sync::Arc;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Context as an HTTP layer would build it for a request in `code`
fn request_context(bundle: &Arc<Bundle>, code: &str) -> Context {
    let locale = Locale::parse(code).expect("supported locale");
    Context::background()
        .with_locale(locale)
        .with_localizer(Arc::new(Localizer::new(Arc::clone(bundle), locale)))
}

/// Downstream code that only sees the context
fn render_nav(ctx: &Context) -> Vec<String> {
    ["nav.home", "nav.settings", "nav.logout"]
        .iter()
        .map(|key| must_t(ctx, key))
        .collect()
}

fn write_catalog(dir: &TempDir, code: &str, source: &str) {
    std::fs::write(dir.path().join(format!("{code}.ftl")), source).expect("write catalog");
}

// ==================== Request Flow Tests ====================

#[test]
fn test_render_nav_per_request_locale() {
    let bundle = Arc::new(Bundle::embedded().unwrap());

    let en = render_nav(&request_context(&bundle, "en"));
    let ru = render_nav(&request_context(&bundle, "ru"));

    assert_eq!(en, vec!["Home", "Settings", "Log out"]);
    assert_eq!(ru, vec!["Главная", "Настройки", "Выйти"]);
}

#[test]
fn test_concurrent_requests_keep_their_locale() {
    let bundle = Arc::new(Bundle::embedded().unwrap());
    let codes = ["en", "ru", "uz", "zh", "pt-BR"];

    let rendered: Vec<(String, String)> = std::thread::scope(|scope| {
        let handles: Vec<_> = codes
            .iter()
            .map(|code| {
                let ctx = request_context(&bundle, code);
                scope.spawn(move || (code.to_string(), must_t(&ctx, "nav.home")))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (code, text) in rendered {
        let ctx = request_context(&bundle, &code);
        let localizer = use_localizer(&ctx).unwrap();
        assert_eq!(localizer.localize("nav.home").unwrap(), text);
    }
}

#[test]
fn test_background_job_without_localizer_degrades() {
    let ctx = Context::background();
    assert!(use_localizer(&ctx).is_none());
    assert_eq!(ctx.locale_or_undetermined(), Locale::UNDETERMINED);
}

#[test]
fn test_language_picker_from_whitelist() {
    let bundle = Arc::new(Bundle::embedded().unwrap());
    let languages = supported_languages(&["en", "ru"]);

    let labels: Vec<String> = languages
        .iter()
        .map(|lang| {
            let ctx = request_context(&bundle, lang.code);
            format!("{} ({})", lang.verbose_name, must_t(&ctx, "layout.language"))
        })
        .collect();
    assert_eq!(labels, vec!["Русский (Язык)", "English (Language)"]);
}

// ==================== Validation Translator Tests ====================

#[test]
fn test_validation_errors_render_in_request_locale() {
    let registry = TranslatorRegistry::new(Arc::new(ValidationEngine::new()));
    let bundle = Arc::new(Bundle::embedded().unwrap());
    let err = FieldError::new("Email", "email");

    let en = registry.translator(&request_context(&bundle, "en")).unwrap();
    let zh = registry.translator(&request_context(&bundle, "zh")).unwrap();

    assert_eq!(err.translate(registry.engine(), &en), "Email must be a valid email address");
    assert_eq!(err.translate(registry.engine(), &zh), "Email必须是一个有效的邮箱");
}

#[test]
fn test_validation_translator_missing_for_uzbek() {
    let registry = TranslatorRegistry::new(Arc::new(ValidationEngine::new()));
    let bundle = Arc::new(Bundle::embedded().unwrap());

    let result = registry.translator(&request_context(&bundle, "uz"));
    assert!(matches!(result, Err(IntlError::NoLocalizer(_))));
}

#[test]
fn test_shared_registry_across_threads() {
    let registry = Arc::new(TranslatorRegistry::new(Arc::new(ValidationEngine::new())));
    let ctx = Context::background().with_locale(Locale::RU);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let ctx = ctx.clone();
            std::thread::spawn(move || registry.translator(&ctx).map(|t| t.len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 8);
    }
    assert_eq!(registry.registration_count(), 1);
}

// ==================== Audit Tests ====================

#[test]
fn test_audit_catalogs_loaded_from_disk() {
    let dir = TempDir::new().unwrap();
    write_catalog(&dir, "en", "nav =\n    .home = Home\n");
    write_catalog(&dir, "ru", "nav =\n    .home = Главная\n");
    let bundle = Arc::new(Bundle::load_dir(dir.path()).unwrap());

    let result = validate_required_keys(
        Some(&bundle),
        &["nav.home", "nav.missing"],
        &[Locale::EN, Locale::RU],
    );
    assert_eq!(
        result,
        Err(AuditError::MissingKeys(vec![
            "en:nav.missing".to_string(),
            "ru:nav.missing".to_string(),
        ]))
    );
}

#[test]
fn test_embedded_catalog_passes_required_keys() {
    let bundle = Arc::new(Bundle::embedded().unwrap());
    assert!(validate_required_keys(Some(&bundle), REQUIRED_KEYS, Locale::all()).is_ok());
}

#[test]
fn test_audit_without_bundle() {
    let result = validate_required_keys(None, REQUIRED_KEYS, &[Locale::EN]);
    assert_eq!(result, Err(AuditError::NilBundle));
}
