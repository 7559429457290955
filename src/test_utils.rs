// SPDX-License-Identifier: MPL-2.0
//! Test utilities for code that consumes a [`LocaleProvider`].
//!
//! [`MockLocaleProvider`] stands in for the operating system: its settings can
//! be changed between calls through a shared reference, which lets tests show
//! that a consumer re-resolves locale data instead of caching it.

use crate::locale::LocaleSnapshot;
use crate::provider::LocaleProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Debug)]
struct Settings {
    locale: LocaleSnapshot,
    preferred_language: String,
}

/// A provider whose "system settings" are controlled by the test.
#[derive(Debug)]
pub struct MockLocaleProvider {
    settings: RwLock<Settings>,
    queries: AtomicUsize,
}

impl MockLocaleProvider {
    pub fn new(locale: LocaleSnapshot, preferred_language: impl Into<String>) -> Self {
        Self {
            settings: RwLock::new(Settings {
                locale,
                preferred_language: preferred_language.into(),
            }),
            queries: AtomicUsize::new(0),
        }
    }

    /// Simulates the user changing their region settings.
    pub fn set_settings(&self, locale: LocaleSnapshot) {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .locale = locale;
    }

    /// Simulates the user changing their primary language.
    pub fn set_preferred_language(&self, language: impl Into<String>) {
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .preferred_language = language.into();
    }

    /// Number of locale resolutions served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn resolve(&self) -> LocaleSnapshot {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .locale
            .clone()
    }
}

impl Default for MockLocaleProvider {
    fn default() -> Self {
        Self::new(
            LocaleSnapshot::default(),
            crate::config::defaults::DEFAULT_LANGUAGE_CODE,
        )
    }
}

impl LocaleProvider for MockLocaleProvider {
    fn current_locale(&self) -> LocaleSnapshot {
        self.resolve()
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        self.resolve()
    }

    fn preferred_language(&self) -> String {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .preferred_language
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_language_is_requeried() {
        let provider = MockLocaleProvider::default();
        assert_eq!(provider.preferred_language(), "US");

        provider.set_preferred_language("es-MX");
        assert_eq!(provider.preferred_language(), "es-MX");
    }

    #[test]
    fn query_count_tracks_locale_resolutions() {
        let provider = MockLocaleProvider::default();
        let _ = provider.current_locale();
        let _ = provider.auto_updating_current_locale();
        let _ = provider.preferred_language();
        assert_eq!(provider.query_count(), 2);
    }
}
