// SPDX-License-Identifier: MPL-2.0
//! `locale_snapshot` exposes the operating system's region settings as
//! immutable [`LocaleSnapshot`] values.
//!
//! Locale data is obtained through an injected [`LocaleProvider`] rather than
//! global accessors: pass a [`SystemLocaleProvider`] in production, wrap it in
//! an [`OverlayProvider`] to honor user overrides from the config file, and
//! substitute a fixed or mock provider in tests.
//!
//! # Examples
//!
//! ```
//! use locale_snapshot::{FixedLocaleProvider, LocaleProvider, LocaleSnapshot};
//!
//! fn price_label(provider: &dyn LocaleProvider, amount: &str) -> String {
//!     let locale = provider.current_locale();
//!     format!("{}{} {}", locale.currency_symbol(), amount, locale.currency_code())
//! }
//!
//! let gb = LocaleSnapshot::new("en_GB", "GB", "en", "£", "GBP");
//! let provider = FixedLocaleProvider::new(gb, "en-GB");
//! assert_eq!(price_label(&provider, "4.20"), "£4.20 GBP");
//! ```

#![doc(html_root_url = "https://docs.rs/locale_snapshot/0.1.0")]

pub mod config;
pub mod error;
pub mod locale;
pub mod provider;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use locale::LocaleSnapshot;
pub use provider::{FixedLocaleProvider, LocaleProvider, OverlayProvider, SystemLocaleProvider};
