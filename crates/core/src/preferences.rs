//! Per-visitor display language and cookie-notice decision.

use tracing::warn;

use crate::kv::{self, KeyValueStore, keys};
use crate::types::{ConsentDecision, Locale};

/// A visitor's stored preferences.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
    locale: Locale,
    consent: Option<ConsentDecision>,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Read preferences, defaulting anything missing or unreadable.
    pub fn load(store: S) -> Self {
        let locale = kv::load_json(&store, keys::LOCALE).unwrap_or_default();
        let consent = kv::load_json(&store, keys::COOKIE_CONSENT);
        Self {
            store,
            locale,
            consent,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub const fn consent(&self) -> Option<ConsentDecision> {
        self.consent
    }

    /// Whether the cookie notice should still be shown.
    #[must_use]
    pub const fn needs_consent(&self) -> bool {
        self.consent.is_none()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        if let Err(e) = kv::save_json(&self.store, keys::LOCALE, &locale) {
            warn!(error = %e, "Failed to persist language");
        }
    }

    /// Switch to the other language and return it.
    pub fn toggle_locale(&mut self) -> Locale {
        let next = self.locale.toggled();
        self.set_locale(next);
        next
    }

    pub fn set_consent(&mut self, decision: ConsentDecision) {
        self.consent = Some(decision);
        if let Err(e) = kv::save_json(&self.store, keys::COOKIE_CONSENT, &decision) {
            warn!(error = %e, "Failed to persist cookie decision");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::load(Arc::new(MemoryStore::new()));
        assert_eq!(prefs.locale(), Locale::En);
        assert!(prefs.needs_consent());
    }

    #[test]
    fn test_persisted_across_loads() {
        let backend = Arc::new(MemoryStore::new());
        let mut prefs = Preferences::load(Arc::clone(&backend));
        assert_eq!(prefs.toggle_locale(), Locale::Ar);
        prefs.set_consent(ConsentDecision::Dismissed);

        let reloaded = Preferences::load(Arc::clone(&backend));
        assert_eq!(reloaded.locale(), Locale::Ar);
        assert_eq!(reloaded.consent(), Some(ConsentDecision::Dismissed));
    }

    #[test]
    fn test_unknown_stored_language_falls_back() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(keys::LOCALE, "\"fr\"").unwrap();
        assert_eq!(Preferences::load(backend).locale(), Locale::En);
    }
}
