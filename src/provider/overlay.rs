// SPDX-License-Identifier: MPL-2.0
use super::LocaleProvider;
use crate::config::LocaleOverrides;
use crate::locale::LocaleSnapshot;

/// Overlays custom settings the user has specified on top of the locale
/// resolved by an inner provider.
///
/// Fields without an override pass through unchanged. The auto-updating
/// accessor still re-queries the inner provider on every call, so overrides
/// never freeze the underlying system values.
#[derive(Debug, Clone)]
pub struct OverlayProvider<P> {
    inner: P,
    overrides: LocaleOverrides,
}

impl<P: LocaleProvider> OverlayProvider<P> {
    #[must_use]
    pub fn new(inner: P, overrides: LocaleOverrides) -> Self {
        Self { inner, overrides }
    }

    #[must_use]
    pub fn overrides(&self) -> &LocaleOverrides {
        &self.overrides
    }

    pub fn into_inner(self) -> P {
        self.inner
    }

    fn apply(&self, resolved: LocaleSnapshot) -> LocaleSnapshot {
        if self.overrides.is_empty() {
            return resolved;
        }

        let [identifier, country_code, language_code, currency_symbol, currency_code] =
            resolved.into_parts();
        let pick = |over: &Option<String>, base: String| over.clone().unwrap_or(base);

        LocaleSnapshot::new(
            pick(&self.overrides.identifier, identifier),
            pick(&self.overrides.country_code, country_code),
            pick(&self.overrides.language_code, language_code),
            pick(&self.overrides.currency_symbol, currency_symbol),
            pick(&self.overrides.currency_code, currency_code),
        )
    }
}

impl<P: LocaleProvider> LocaleProvider for OverlayProvider<P> {
    fn current_locale(&self) -> LocaleSnapshot {
        self.apply(self.inner.current_locale())
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        self.apply(self.inner.auto_updating_current_locale())
    }

    fn preferred_language(&self) -> String {
        match &self.overrides.preferred_language {
            Some(language) => language.clone(),
            None => self.inner.preferred_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FixedLocaleProvider;
    use crate::test_utils::MockLocaleProvider;

    fn gb() -> LocaleSnapshot {
        LocaleSnapshot::new("en_GB", "GB", "en", "£", "GBP")
    }

    #[test]
    fn empty_overrides_pass_everything_through() {
        let provider =
            OverlayProvider::new(FixedLocaleProvider::new(gb(), "en-GB"), LocaleOverrides::default());
        assert_eq!(provider.current_locale(), gb());
        assert_eq!(provider.preferred_language(), "en-GB");
    }

    #[test]
    fn only_overridden_fields_are_replaced() {
        let overrides = LocaleOverrides {
            currency_symbol: Some("€".to_string()),
            currency_code: Some("EUR".to_string()),
            ..LocaleOverrides::default()
        };
        let provider = OverlayProvider::new(FixedLocaleProvider::new(gb(), "en-GB"), overrides);

        let locale = provider.current_locale();
        assert_eq!(locale, LocaleSnapshot::new("en_GB", "GB", "en", "€", "EUR"));
    }

    #[test]
    fn preferred_language_override_wins() {
        let overrides = LocaleOverrides {
            preferred_language: Some("cy".to_string()),
            ..LocaleOverrides::default()
        };
        let provider = OverlayProvider::new(FixedLocaleProvider::new(gb(), "en-GB"), overrides);
        assert_eq!(provider.preferred_language(), "cy");
    }

    #[test]
    fn overlay_over_borrowed_mock_sees_changes() {
        let mock = MockLocaleProvider::new(gb(), "en-GB");
        let overrides = LocaleOverrides {
            identifier: Some("custom".to_string()),
            ..LocaleOverrides::default()
        };
        let provider = OverlayProvider::new(&mock, overrides);
        let before = provider.auto_updating_current_locale();

        mock.set_settings(LocaleSnapshot::new("ja_JP", "JP", "ja", "¥", "JPY"));
        let after = provider.auto_updating_current_locale();

        assert_eq!(before.country_code(), "GB");
        assert_eq!(after.country_code(), "JP");
        assert_eq!(after.identifier(), "custom");
    }
}
