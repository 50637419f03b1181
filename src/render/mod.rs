//! Rendering global styles into a stylesheet target.
//!
//! - [`create_global_style`]: Declares a global style and returns a [`GlobalStyle`]
//! - [`GlobalStyleMount`]: The per-mount lifecycle (render, commit, unmount)
//! - [`RenderEnv`]: The stylesheet, stringifier and ambient theme for a render
//! - [`Stringifier`]/[`CssStringifier`]: Turning rule sets into CSS text
//!
//! # Lifecycle
//!
//! ```text
//! Unmounted --render--> PendingCommit --commit--> Mounted --unmount--> Removed
//!                                                 |    ^
//!                                                 +----+ render + commit
//! Unmounted --render (server sheet)--> ServerRendered
//! ```
//!
//! Rendering never touches the stylesheet on the client: it only records
//! the inputs of the next commit. The commit removes the previous run's CSS
//! (if any) and injects the new text. Server sheets receive CSS during
//! render and are never asked to remove it.

mod global_style;
mod lifecycle;
mod stringifier;

pub use global_style::{create_global_style, GlobalStyle};
pub use lifecycle::{GlobalStyleMount, MountState, RenderEnv};
pub use stringifier::{CssStringifier, Stringifier};
