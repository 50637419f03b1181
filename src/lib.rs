//! # Globalstyle - lifecycle management for global stylesheet rules
//!
//! `globalstyle` tracks global (unscoped) CSS declared by a component tree:
//! which rules belong together, which mount points use them, and when their
//! CSS text goes into and out of a shared stylesheet.
//!
//! ## Concepts
//!
//! - **Definitions**: [`create_global_style`] turns a [`RuleSet`] into a
//!   [`GlobalStyle`] with a content-derived [`StyleId`]. A rule set of plain
//!   literals is *static* and is stringified once per process.
//! - **Mounts**: [`GlobalStyle::mount`] creates a [`GlobalStyleMount`], which
//!   allocates its own instance in the sheet and follows the host's
//!   render/commit/unmount pipeline.
//! - **Themes**: Dynamic rules see a [`RenderContext`] built from props and a
//!   theme resolved from props, the ambient [`ThemeChoice`], then default props.
//! - **Collaborators**: CSS lands in a [`StyleSheet`] (see [`MemorySheet`]) and
//!   is produced by a [`Stringifier`] (see [`CssStringifier`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use globalstyle::{create_global_style, MemorySheet, Props, RenderEnv, RuleSet};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let base = create_global_style(
//!     RuleSet::new().template("body { color: {{ theme.fg }}; }"),
//! );
//!
//! let sheet = Arc::new(MemorySheet::client());
//! let env = RenderEnv::new(sheet.clone()).with_theme(json!({ "fg": "#222" }));
//!
//! let mut mount = base.mount();
//! mount.render(&Props::new(), &env).unwrap();
//! mount.commit().unwrap();
//! assert_eq!(sheet.css(), "body { color: #222; }");
//! ```
//!
//! ## Server rendering
//!
//! A server sheet ([`MemorySheet::server`]) receives CSS synchronously from
//! [`GlobalStyleMount::render`]; there is no commit or removal on the server.
//!
//! ## Development checks
//!
//! In [`Mode::Development`] (the default for debug builds) the crate logs
//! `tracing` warnings for definitions created repeatedly, `@import` rules and
//! child content passed to a global style. See [`set_mode`].

pub mod config;
pub mod definition;
mod error;
mod identity;
pub mod render;
pub mod rules;
pub mod sheet;
pub mod theme;

pub use config::{mode, set_mode, Mode};
pub use definition::{creation_count, GlobalStyleDefinition};
pub use error::StyleError;
pub use identity::{identify, StyleId, ID_PREFIX};
pub use render::{
    create_global_style, CssStringifier, GlobalStyle, GlobalStyleMount, MountState, RenderEnv,
    Stringifier,
};
pub use rules::{Fragment, Interpolation, RuleSet};
pub use sheet::{InstanceHandle, MemorySheet, StyleSheet};
pub use theme::{
    determine_theme, resolve_context, set_theme_detector, AdaptiveTheme, ColorMode,
    ColorModeSource, Props, RenderContext, ThemeChoice,
};
