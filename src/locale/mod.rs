// SPDX-License-Identifier: MPL-2.0
//! Point-in-time locale data.
//!
//! A [`LocaleSnapshot`] carries the linguistic, cultural, and currency
//! conventions of a locale as five plain strings. It is filled in once by a
//! [`LocaleProvider`](crate::provider::LocaleProvider) and never changes
//! afterwards; obtaining fresher data means asking the provider again.

use crate::config::defaults::{
    DEFAULT_COUNTRY_CODE, DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL, DEFAULT_IDENTIFIER,
    DEFAULT_LANGUAGE_CODE,
};
use serde::Serialize;
use std::fmt;

/// Immutable locale information for formatting data for presentation.
///
/// The empty string marks an absent value; no field is ever missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LocaleSnapshot {
    identifier: String,
    country_code: String,
    language_code: String,
    currency_symbol: String,
    currency_code: String,
}

impl Default for LocaleSnapshot {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_IDENTIFIER.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
        }
    }
}

impl LocaleSnapshot {
    /// Creates a snapshot from already-resolved values, stored verbatim.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        country_code: impl Into<String>,
        language_code: impl Into<String>,
        currency_symbol: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            country_code: country_code.into(),
            language_code: language_code.into(),
            currency_symbol: currency_symbol.into(),
            currency_code: currency_code.into(),
        }
    }

    /// The identifier for the locale, e.g. `"en_GB"`.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The country code for the locale, e.g. `"GB"`, `"FR"`, or `"HK"`.
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The language code for the locale, e.g. `"en"`, `"es"`, or `"zh"`.
    #[must_use]
    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    /// The currency symbol for the locale, e.g. `"$"`, `"€"`, or `"¥"`.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// The currency code for the locale, e.g. `"USD"`, `"EUR"`, or `"JPY"`.
    #[must_use]
    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Consumes the snapshot and returns its fields in declaration order.
    pub(crate) fn into_parts(self) -> [String; 5] {
        [
            self.identifier,
            self.country_code,
            self.language_code,
            self.currency_symbol,
            self.currency_code,
        ]
    }
}

impl fmt::Display for LocaleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.identifier.is_empty() {
            write!(f, "{}-{}", self.language_code, self.country_code)
        } else {
            f.write_str(&self.identifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_exposes_documented_values() {
        let locale = LocaleSnapshot::default();
        assert_eq!(locale.identifier(), "");
        assert_eq!(locale.country_code(), "US");
        assert_eq!(locale.language_code(), "US");
        assert_eq!(locale.currency_symbol(), "$");
        assert_eq!(locale.currency_code(), "USD");
    }

    #[test]
    fn accessors_return_constructed_values_unchanged() {
        let locale = LocaleSnapshot::new("en_GB", "GB", "en", "£", "GBP");
        assert_eq!(locale.identifier(), "en_GB");
        assert_eq!(locale.country_code(), "GB");
        assert_eq!(locale.language_code(), "en");
        assert_eq!(locale.currency_symbol(), "£");
        assert_eq!(locale.currency_code(), "GBP");
    }

    #[test]
    fn values_are_not_normalized() {
        let locale = LocaleSnapshot::new(" zh-Hant_TW ", "tw", "ZH", "NT$", "twd");
        assert_eq!(locale.identifier(), " zh-Hant_TW ");
        assert_eq!(locale.country_code(), "tw");
        assert_eq!(locale.language_code(), "ZH");
        assert_eq!(locale.currency_code(), "twd");
    }

    #[test]
    fn empty_strings_are_kept() {
        let locale = LocaleSnapshot::new("", "", "", "", "");
        assert!(locale.into_parts().iter().all(String::is_empty));
    }

    #[test]
    fn display_prefers_identifier() {
        let locale = LocaleSnapshot::new("fr_FR", "FR", "fr", "€", "EUR");
        assert_eq!(locale.to_string(), "fr_FR");
    }

    #[test]
    fn display_falls_back_to_language_and_country() {
        assert_eq!(LocaleSnapshot::default().to_string(), "US-US");
    }

    #[test]
    fn clones_compare_equal() {
        let locale = LocaleSnapshot::new("ja_JP", "JP", "ja", "¥", "JPY");
        assert_eq!(locale.clone(), locale);
    }
}
