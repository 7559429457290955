// SPDX-License-Identifier: MPL-2.0
//! Sources of locale data.
//!
//! Components that need locale information take a [`LocaleProvider`] rather
//! than reaching for process-wide state, so the operating-system bridge can be
//! swapped per platform or replaced by a fixed value in tests.
//!
//! # Providers
//!
//! - [`SystemLocaleProvider`]: queries the operating system on every call
//! - [`FixedLocaleProvider`]: always answers with the same snapshot
//! - [`OverlayProvider`]: applies user overrides on top of another provider

mod fixed;
mod overlay;
mod system;

pub use fixed::FixedLocaleProvider;
pub use overlay::OverlayProvider;
pub use system::SystemLocaleProvider;

use crate::locale::LocaleSnapshot;
use std::sync::Arc;

/// Resolves locale data from the underlying environment.
///
/// No operation can fail: when the environment cannot be queried, an
/// implementation answers with [`LocaleSnapshot::default`] and the default
/// language code.
pub trait LocaleProvider: Send + Sync {
    /// The user's region settings at the time of the call.
    ///
    /// The returned snapshot does not change even if the user later changes
    /// their settings.
    fn current_locale(&self) -> LocaleSnapshot;

    /// The user's region settings, re-resolved on every call.
    ///
    /// Implementations must not cache: two calls separated by a settings
    /// change return snapshots reflecting that change.
    fn auto_updating_current_locale(&self) -> LocaleSnapshot;

    /// The user's primary language preference, e.g. `"en-GB"`.
    fn preferred_language(&self) -> String;
}

impl<P: LocaleProvider + ?Sized> LocaleProvider for &P {
    fn current_locale(&self) -> LocaleSnapshot {
        (**self).current_locale()
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        (**self).auto_updating_current_locale()
    }

    fn preferred_language(&self) -> String {
        (**self).preferred_language()
    }
}

impl<P: LocaleProvider + ?Sized> LocaleProvider for Box<P> {
    fn current_locale(&self) -> LocaleSnapshot {
        (**self).current_locale()
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        (**self).auto_updating_current_locale()
    }

    fn preferred_language(&self) -> String {
        (**self).preferred_language()
    }
}

impl<P: LocaleProvider + ?Sized> LocaleProvider for Arc<P> {
    fn current_locale(&self) -> LocaleSnapshot {
        (**self).current_locale()
    }

    fn auto_updating_current_locale(&self) -> LocaleSnapshot {
        (**self).auto_updating_current_locale()
    }

    fn preferred_language(&self) -> String {
        (**self).preferred_language()
    }
}
