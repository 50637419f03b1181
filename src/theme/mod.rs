//! Theme resolution and render contexts.
//!
//! This module provides:
//!
//! - [`Props`]: Render-time properties handed to a global style
//! - [`RenderContext`]: Props merged with the resolved theme
//! - [`resolve_context`]/[`determine_theme`]: Theme precedence rules
//! - [`ThemeChoice`]: The ambient theme supplied by the host, fixed or adaptive
//! - [`AdaptiveTheme`]: Light/dark theme pairs with OS detection
//!
//! The ambient theme is always passed explicitly; nothing here reads
//! framework state.

mod adaptive;
mod choice;
mod context;
mod resolve;

pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode, ColorModeSource};
pub use choice::ThemeChoice;
pub use context::{Props, RenderContext, CHILDREN_KEY, THEME_KEY};
pub use resolve::{determine_theme, resolve_context};
