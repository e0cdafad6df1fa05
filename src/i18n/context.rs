//! Request-scoped context: an immutable chain of key/value overlays.
//!
//! Deriving a context allocates one node that points at its parent, so a
//! child sees every binding of its ancestors unless it overrides one, and
//! siblings derived from the same parent never observe each other. Lookups
//! walk from the newest node to the root.

use crate::i18n::{Locale, Localizer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Key under which a value rides on a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextKey(&'static str);

impl ContextKey {
    /// Create a key. Keys compare by name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

pub const LOCALIZER_KEY: ContextKey = ContextKey::new("localizer");
pub const LOCALE_KEY: ContextKey = ContextKey::new("locale");

struct Node {
    parent: Option<Arc<Node>>,
    key: ContextKey,
    value: Arc<dyn Any + Send + Sync>,
}

/// Per-unit-of-work carrier for the resolved locale and localizer.
///
/// Cloning is cheap and yields a handle to the same chain.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// Empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context carrying `value` under `key`.
    pub fn with_value<T: Any + Send + Sync>(&self, key: ContextKey, value: T) -> Context {
        Context {
            head: Some(Arc::new(Node {
                parent: self.head.clone(),
                key,
                value: Arc::new(value),
            })),
        }
    }

    /// Nearest value stored under `key`, if it has type `T`.
    ///
    /// The nearest binding wins even when its type differs, so a mistyped
    /// override hides the ancestor's value instead of leaking it.
    pub fn value<T: Any + Send + Sync>(&self, key: ContextKey) -> Option<&T> {
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return current.value.downcast_ref::<T>();
            }
            node = current.parent.as_deref();
        }
        None
    }

    /// Derive a context carrying `localizer`.
    ///
    /// # Arguments
    /// * `localizer` - Shared localizer for the request's locale
    ///
    /// # Returns
    /// A child context; `self` is left unchanged
    pub fn with_localizer(&self, localizer: Arc<Localizer>) -> Context {
        self.with_value(LOCALIZER_KEY, localizer)
    }

    /// Derive a context carrying `locale`. `self` is left unchanged.
    pub fn with_locale(&self, locale: Locale) -> Context {
        self.with_value(LOCALE_KEY, locale)
    }

    /// Localizer bound by the nearest [`Context::with_localizer`], if any.
    pub fn localizer(&self) -> Option<Arc<Localizer>> {
        self.value::<Arc<Localizer>>(LOCALIZER_KEY).cloned()
    }

    /// Locale bound by the nearest [`Context::with_locale`], if any.
    pub fn locale(&self) -> Option<Locale> {
        self.value::<Locale>(LOCALE_KEY).copied()
    }

    /// Bound locale, or [`Locale::UNDETERMINED`] when none is bound.
    pub fn locale_or_undetermined(&self) -> Locale {
        self.locale().unwrap_or(Locale::UNDETERMINED)
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_deref();
        }
        depth
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("locale", &self.locale())
            .field("has_localizer", &self.localizer().is_some())
            .field("depth", &self.depth())
            .finish()
    }
}

/// Localizer bound to `ctx`, if any.
pub fn use_localizer(ctx: &Context) -> Option<Arc<Localizer>> {
    ctx.localizer()
}

/// Locale bound to `ctx`, if any.
pub fn use_locale(ctx: &Context) -> Option<Locale> {
    ctx.locale()
}
