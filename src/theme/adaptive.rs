//! Light/dark theme pairs for global styles.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, trace};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of theme values for light and dark color modes.
///
/// Supplied as the ambient theme through [`ThemeChoice::Adaptive`], it is
/// resolved on every render of a dynamic global style, so a color mode
/// switch reaches the stylesheet at the next commit.
///
/// [`ThemeChoice::Adaptive`]: crate::ThemeChoice::Adaptive
///
/// # Example
///
/// ```rust
/// use globalstyle::{set_theme_detector, AdaptiveTheme, ColorMode, ThemeChoice};
/// use serde_json::json;
///
/// let adaptive = AdaptiveTheme::new(json!({ "bg": "white" }), json!({ "bg": "black" }));
///
/// set_theme_detector(|| ColorMode::Dark);
/// assert_eq!(ThemeChoice::from(adaptive).resolve(), json!({ "bg": "black" }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveTheme {
    light: Value,
    dark: Value,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Value, dark: Value) -> Self {
        Self { light, dark }
    }

    /// The theme used in light mode.
    pub fn light(&self) -> &Value {
        &self.light
    }

    /// The theme used in dark mode.
    pub fn dark(&self) -> &Value {
        &self.dark
    }

    /// Resolves to the variant matching the current color mode.
    pub(crate) fn resolve(&self) -> Value {
        match detect_color_mode() {
            ColorMode::Light => self.light.clone(),
            ColorMode::Dark => self.dark.clone(),
        }
    }
}

/// Source of the current color mode for adaptive global style themes.
pub type ColorModeSource = fn() -> ColorMode;

static COLOR_MODE_SOURCE: Lazy<Mutex<ColorModeSource>> =
    Lazy::new(|| Mutex::new(system_color_mode));

/// Replaces the color mode source consulted when an [`AdaptiveTheme`] is
/// resolved during a render.
///
/// The swap takes effect at the next render: mounted global styles pick the
/// other variant, see a theme change and re-inject at their next commit.
/// Server renders usually pin a mode here, since the OS setting of the
/// server says nothing about the client.
pub fn set_theme_detector(source: ColorModeSource) {
    *COLOR_MODE_SOURCE
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = source;
    debug!("color mode source replaced");
}

pub(crate) fn detect_color_mode() -> ColorMode {
    let source = *COLOR_MODE_SOURCE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    let mode = source();
    trace!(?mode, "resolved color mode for adaptive theme");
    mode
}

/// Default source: the OS appearance setting.
fn system_color_mode() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
