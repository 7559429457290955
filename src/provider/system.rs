// SPDX-License-Identifier: MPL-2.0
//! Operating-system locale bridge.
//!
//! Reads the locale tag the OS reports through `sys-locale`, normalizes POSIX
//! spellings (`en_GB.UTF-8`, `de_DE@euro`) to BCP-47, and maps the parsed
//! [`LanguageIdentifier`] onto snapshot fields. Currency data comes from a
//! fixed region table; no CLDR data is consulted.

use super::LocaleProvider;
use crate::config::defaults::{
    DEFAULT_COUNTRY_CODE, DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL, DEFAULT_LANGUAGE_CODE,
};
use crate::locale::LocaleSnapshot;
use unic_langid::LanguageIdentifier;

/// Region → (ISO 4217 code, display symbol).
const REGION_CURRENCIES: &[(&str, &str, &str)] = &[
    ("AR", "ARS", "$"),
    ("AT", "EUR", "€"),
    ("AU", "AUD", "$"),
    ("BE", "EUR", "€"),
    ("BR", "BRL", "R$"),
    ("CA", "CAD", "$"),
    ("CH", "CHF", "CHF"),
    ("CL", "CLP", "$"),
    ("CN", "CNY", "¥"),
    ("CO", "COP", "$"),
    ("CY", "EUR", "€"),
    ("CZ", "CZK", "Kč"),
    ("DE", "EUR", "€"),
    ("DK", "DKK", "kr."),
    ("EE", "EUR", "€"),
    ("EG", "EGP", "E£"),
    ("ES", "EUR", "€"),
    ("FI", "EUR", "€"),
    ("FR", "EUR", "€"),
    ("GB", "GBP", "£"),
    ("GR", "EUR", "€"),
    ("HK", "HKD", "HK$"),
    ("HR", "EUR", "€"),
    ("HU", "HUF", "Ft"),
    ("ID", "IDR", "Rp"),
    ("IE", "EUR", "€"),
    ("IL", "ILS", "₪"),
    ("IN", "INR", "₹"),
    ("IS", "ISK", "kr"),
    ("IT", "EUR", "€"),
    ("JP", "JPY", "¥"),
    ("KR", "KRW", "₩"),
    ("LT", "EUR", "€"),
    ("LU", "EUR", "€"),
    ("LV", "EUR", "€"),
    ("MT", "EUR", "€"),
    ("MX", "MXN", "$"),
    ("MY", "MYR", "RM"),
    ("NL", "EUR", "€"),
    ("NO", "NOK", "kr"),
    ("NZ", "NZD", "$"),
    ("PH", "PHP", "₱"),
    ("PL", "PLN", "zł"),
    ("PT", "EUR", "€"),
    ("RO", "RON", "lei"),
    ("RU", "RUB", "₽"),
    ("SA", "SAR", "ر.س"),
    ("SE", "SEK", "kr"),
    ("SG", "SGD", "$"),
    ("SI", "EUR", "€"),
    ("SK", "EUR", "€"),
    ("TH", "THB", "฿"),
    ("TR", "TRY", "₺"),
    ("TW", "TWD", "NT$"),
    ("UA", "UAH", "₴"),
    ("US", "USD", "$"),
    ("VN", "VND", "₫"),
    ("ZA", "ZAR", "R"),
];

/// Resolves locale data from the operating system on every call.
///
/// Both locale accessors query the OS afresh; the returned snapshot is a
/// point-in-time copy and never changes afterwards.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLocaleProvider;

impl SystemLocaleProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self) -> LocaleSnapshot {
        snapshot_from_os(sys_locale::get_locale())
    }
}

impl LocaleProvider for SystemLocaleProvider {
    fn current_locale(&self) -> LocaleSnapshot {
        self.resolve()
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        self.resolve()
    }

    fn preferred_language(&self) -> String {
        preferred_from(sys_locale::get_locales(), sys_locale::get_locale())
    }
}

/// Maps the tag reported by the OS to a snapshot, falling back to defaults.
fn snapshot_from_os(reported: Option<String>) -> LocaleSnapshot {
    let Some(tag) = reported else {
        log::debug!("OS reported no locale, using defaults");
        return LocaleSnapshot::default();
    };

    snapshot_from_tag(&tag).unwrap_or_else(|| {
        log::debug!("Unusable OS locale {:?}, using defaults", tag);
        LocaleSnapshot::default()
    })
}

/// Picks the first usable entry of the preference list, then the primary
/// locale, then the default language code.
fn preferred_from(mut preferences: impl Iterator<Item = String>, primary: Option<String>) -> String {
    preferences
        .find_map(|tag| normalize_tag(&tag))
        .or_else(|| primary.as_deref().and_then(normalize_tag))
        .unwrap_or_else(|| {
            log::debug!("OS reported no preferred language, using default");
            DEFAULT_LANGUAGE_CODE.to_string()
        })
}

/// Converts an OS locale spelling to a BCP-47 tag.
///
/// Drops the codeset (`.UTF-8`) and modifier (`@euro`), swaps `_` for `-`,
/// and cuts the tag at its first singleton subtag so extensions such as
/// `-u-ca-buddhist` or `-x-foo` never reach the parser. The `C` and `POSIX`
/// locales carry no language and yield `None`.
fn normalize_tag(raw: &str) -> Option<String> {
    let base = raw
        .trim()
        .split(['.', '@'])
        .next()
        .unwrap_or_default();

    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }

    let subtags: Vec<&str> = base
        .split(['-', '_'])
        .take_while(|subtag| subtag.len() > 1)
        .collect();
    if subtags.is_empty() {
        return None;
    }

    Some(subtags.join("-"))
}

fn snapshot_from_tag(raw: &str) -> Option<LocaleSnapshot> {
    let tag = normalize_tag(raw)?;
    let langid: LanguageIdentifier = tag.parse().ok()?;
    let language = langid.language.as_str();
    if language == "und" {
        return None;
    }

    let region = langid.region.as_ref().map(|region| region.as_str());
    // UN M.49 area codes such as `419` are not country codes.
    let country = region.filter(|code| code.bytes().all(|b| b.is_ascii_alphabetic()));

    let mut identifier = language.to_string();
    if let Some(script) = &langid.script {
        identifier.push('-');
        identifier.push_str(script.as_str());
    }
    if let Some(region) = region {
        identifier.push('_');
        identifier.push_str(region);
    }

    let country_code = country.unwrap_or(DEFAULT_COUNTRY_CODE);
    let (currency_code, currency_symbol) = currency_for_region(country_code)
        .unwrap_or((DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL));

    Some(LocaleSnapshot::new(
        identifier,
        country_code,
        language,
        currency_symbol,
        currency_code,
    ))
}

fn currency_for_region(region: &str) -> Option<(&'static str, &'static str)> {
    REGION_CURRENCIES
        .iter()
        .find(|(candidate, _, _)| *candidate == region)
        .map(|&(_, code, symbol)| (code, symbol))
}
