//! Ambient theme supplied by the host.

use serde_json::Value;

use super::adaptive::AdaptiveTheme;

/// Either a fixed theme value or an adaptive theme.
///
/// This is what the host's theme provider hands to each render. Adaptive
/// themes are resolved on every render, so a color mode change shows up as a
/// theme change at the next commit.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeChoice {
    /// A fixed theme that doesn't change based on color mode.
    Fixed(Value),
    /// A theme that selects light/dark based on OS settings.
    Adaptive(AdaptiveTheme),
}

impl ThemeChoice {
    /// Resolves to a concrete theme value.
    pub fn resolve(&self) -> Value {
        match self {
            ThemeChoice::Fixed(theme) => theme.clone(),
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl From<Value> for ThemeChoice {
    fn from(theme: Value) -> Self {
        ThemeChoice::Fixed(theme)
    }
}

impl From<AdaptiveTheme> for ThemeChoice {
    fn from(adaptive: AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
