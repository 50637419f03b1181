//! Process-wide configuration for advisory development checks.

use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// Build mode controlling whether advisory checks run.
///
/// In [`Mode::Development`] the crate warns about dynamically created
/// definitions, `@import` rules and child content passed to a global style.
/// [`Mode::Production`] skips those checks entirely. Rendering behavior is
/// identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// The mode implied by the current build profile.
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    /// Returns true if advisory checks should run.
    pub fn is_development(self) -> bool {
        matches!(self, Mode::Development)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::from_build()
    }
}

static MODE: Lazy<Mutex<Mode>> = Lazy::new(|| Mutex::new(Mode::from_build()));

/// Overrides the process-wide mode.
///
/// Useful for tests, or for release builds that still want warnings.
pub fn set_mode(mode: Mode) {
    let mut guard = MODE.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = mode;
}

/// Returns the current process-wide mode.
pub fn mode() -> Mode {
    *MODE.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn dev_checks_enabled() -> bool {
    mode().is_development()
}
