// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for locale snapshot fields.
//!
//! These are the values a provider falls back to when the operating system
//! cannot be queried, and the values [`LocaleSnapshot::default`] exposes.
//!
//! [`LocaleSnapshot::default`]: crate::locale::LocaleSnapshot

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Default locale identifier. Empty means "no identifier resolved".
pub const DEFAULT_IDENTIFIER: &str = "";

/// Default ISO-style country code.
pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// Default language code.
///
/// Mirrors the country default rather than holding a real language code such
/// as `"en"`. Consumers relying on it should treat it as a sentinel.
pub const DEFAULT_LANGUAGE_CODE: &str = "US";

// ==========================================================================
// Currency Defaults
// ==========================================================================

/// Default currency display symbol.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Default ISO 4217-style currency code.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";
