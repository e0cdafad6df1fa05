//! Language registry: the ordered list of languages offered to users.
//!
//! Initialized once on first access with `OnceLock` and never mutated.

use crate::i18n::Locale;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// A language users can pick in the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    /// Machine code (e.g., "ru", "pt-BR")
    pub code: &'static str,

    /// Human-readable name in the language itself (e.g., "Русский")
    pub verbose_name: &'static str,

    /// Resolved locale for this language
    pub locale: Locale,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<SupportedLanguage>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&SupportedLanguage> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, in declared order.
    pub fn list_all(&self) -> &[SupportedLanguage] {
        &self.languages
    }

    /// Languages whose code appears in `whitelist`, in registry order.
    ///
    /// An empty whitelist returns the full registry. Unknown codes in the
    /// whitelist are ignored.
    pub fn filtered<S: AsRef<str>>(&self, whitelist: &[S]) -> Vec<&SupportedLanguage> {
        if whitelist.is_empty() {
            return self.languages.iter().collect();
        }

        let allowed: HashSet<&str> = whitelist.iter().map(AsRef::as_ref).collect();
        self.languages
            .iter()
            .filter(|lang| allowed.contains(lang.code))
            .collect()
    }
}

/// Filtered view over the global registry.
///
/// `supported_languages::<&str>(&[])` returns every language.
pub fn supported_languages<S: AsRef<str>>(whitelist: &[S]) -> Vec<&'static SupportedLanguage> {
    LanguageRegistry::get().filtered(whitelist)
}

fn default_languages() -> Vec<SupportedLanguage> {
    vec![
        SupportedLanguage {
            code: "ru",
            verbose_name: "Русский",
            locale: Locale::RU,
        },
        SupportedLanguage {
            code: "en",
            verbose_name: "English",
            locale: Locale::EN,
        },
        SupportedLanguage {
            code: "uz",
            verbose_name: "O'zbekcha",
            locale: Locale::UZ,
        },
        SupportedLanguage {
            code: "pt-BR",
            verbose_name: "Português (Brasil)",
            locale: Locale::PT_BR,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(languages: &[&SupportedLanguage]) -> Vec<&'static str> {
        languages.iter().map(|lang| lang.code).collect()
    }

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_russian() {
        let lang = LanguageRegistry::get().get_by_code("ru").unwrap();
        assert_eq!(lang.verbose_name, "Русский");
        assert_eq!(lang.locale, Locale::RU);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_codes_are_unique_and_match_locale() {
        let all = LanguageRegistry::get().list_all();
        let unique: HashSet<_> = all.iter().map(|lang| lang.code).collect();
        assert_eq!(unique.len(), all.len());
        for lang in all {
            assert_eq!(lang.locale.code(), lang.code);
        }
    }

    #[test]
    fn test_empty_whitelist_returns_all_in_order() {
        let all = supported_languages::<&str>(&[]);
        assert_eq!(codes(&all), vec!["ru", "en", "uz", "pt-BR"]);
    }

    #[test]
    fn test_empty_owned_whitelist_returns_all() {
        let whitelist: Vec<String> = Vec::new();
        assert_eq!(supported_languages(&whitelist).len(), 4);
    }

    #[test]
    fn test_whitelist_preserves_registry_order() {
        let filtered = supported_languages(&["en", "ru"]);
        assert_eq!(codes(&filtered), vec!["ru", "en"]);
    }

    #[test]
    fn test_whitelist_ignores_unknown_codes() {
        let filtered = supported_languages(&["pt-BR", "fr", "zh"]);
        assert_eq!(codes(&filtered), vec!["pt-BR"]);
    }

    #[test]
    fn test_whitelist_with_no_matches_is_empty() {
        assert!(supported_languages(&["de"]).is_empty());
    }

    #[test]
    fn test_whitelist_duplicates_do_not_duplicate_entries() {
        let filtered = supported_languages(&["uz", "uz"]);
        assert_eq!(codes(&filtered), vec!["uz"]);
    }
}
