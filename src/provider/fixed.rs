// SPDX-License-Identifier: MPL-2.0
use super::LocaleProvider;
use crate::config::defaults::DEFAULT_LANGUAGE_CODE;
use crate::locale::LocaleSnapshot;

/// A provider that answers every query with the same values.
///
/// Useful for embedding hosts that resolve the locale once up front, and as
/// the inner provider of an [`OverlayProvider`](super::OverlayProvider) when
/// no system bridge is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocaleProvider {
    locale: LocaleSnapshot,
    preferred_language: String,
}

impl FixedLocaleProvider {
    #[must_use]
    pub fn new(locale: LocaleSnapshot, preferred_language: impl Into<String>) -> Self {
        Self {
            locale,
            preferred_language: preferred_language.into(),
        }
    }
}

impl Default for FixedLocaleProvider {
    fn default() -> Self {
        Self::new(LocaleSnapshot::default(), DEFAULT_LANGUAGE_CODE)
    }
}

impl LocaleProvider for FixedLocaleProvider {
    fn current_locale(&self) -> LocaleSnapshot {
        self.locale.clone()
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        self.locale.clone()
    }

    fn preferred_language(&self) -> String {
        self.preferred_language.clone()
    }
}
