//! Message bundle: per-locale Fluent catalogs.
//!
//! Catalogs are plain `.ftl` sources. Dotted keys such as `nav.home` address
//! attribute `home` of message `nav`; a message that only carries attributes is
//! a category and has no displayable text of its own.

use crate::i18n::error::BundleError;
use crate::i18n::Locale;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

pub(crate) type Catalog = FluentBundle<FluentResource>;

const EMBEDDED: [(Locale, &str); 5] = [
    (Locale::EN, include_str!("../../locales/en.ftl")),
    (Locale::RU, include_str!("../../locales/ru.ftl")),
    (Locale::UZ, include_str!("../../locales/uz.ftl")),
    (Locale::ZH, include_str!("../../locales/zh.ftl")),
    (Locale::PT_BR, include_str!("../../locales/pt-BR.ftl")),
];

/// Keys rendered on every page (navigation and layout chrome). Each must
/// resolve in every shipped locale.
pub const REQUIRED_KEYS: &[&str] = &[
    "nav.home",
    "nav.settings",
    "nav.users",
    "nav.logout",
    "layout.title",
    "layout.language",
    "layout.footer",
    "errors.not-found",
    "errors.internal",
];

/// All message catalogs, keyed by locale.
#[derive(Default)]
pub struct Bundle {
    catalogs: HashMap<Locale, Catalog>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle built from the catalogs compiled into the crate.
    pub fn embedded() -> Result<Self, BundleError> {
        let mut bundle = Self::new();
        for (locale, source) in EMBEDDED {
            bundle.add_messages(locale, source)?;
        }
        Ok(bundle)
    }

    /// Load `<code>.ftl` files from `dir`.
    ///
    /// Files whose stem is not an allow-listed locale code are skipped.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, BundleError> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| BundleError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut bundle = Self::new();
        for entry in entries {
            let path = entry
                .map_err(|source| BundleError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("ftl") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Ok(locale) = Locale::parse(stem) else {
                warn!("Skipping catalog for unsupported locale: {}", path.display());
                continue;
            };

            let source = std::fs::read_to_string(&path).map_err(|source| BundleError::ReadFile {
                path: path.clone(),
                source,
            })?;
            bundle.add_messages(locale, &source)?;
            debug!("Loaded catalog {} for {}", path.display(), locale);
        }
        Ok(bundle)
    }

    /// Parse `source` and add its messages to the catalog for `locale`.
    pub fn add_messages(&mut self, locale: Locale, source: &str) -> Result<(), BundleError> {
        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            BundleError::Parse {
                locale: locale.to_string(),
                details: format!("{:?}", errors),
            }
        })?;

        let catalog = self.catalogs.entry(locale).or_insert_with(|| {
            let mut catalog = FluentBundle::new_concurrent(vec![locale.language_id()]);
            catalog.set_use_isolating(false);
            catalog
        });
        catalog
            .add_resource(resource)
            .map_err(|errors| BundleError::Conflict {
                locale: locale.to_string(),
                details: format!("{:?}", errors),
            })
    }

    /// Locales that have a catalog.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.catalogs.keys().copied().collect();
        locales.sort_by_key(|locale| locale.code());
        locales
    }

    pub(crate) fn catalog(&self, locale: Locale) -> Option<&Catalog> {
        self.catalogs.get(&locale)
    }
}

impl fmt::Debug for Bundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bundle")
            .field("locales", &self.locales())
            .finish()
    }
}
