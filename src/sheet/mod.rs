//! Stylesheet targets and instance handles.
//!
//! The [`StyleSheet`] trait is the seam to whatever physically holds CSS
//! text: a DOM-backed sheet on the client or a buffer during server
//! rendering. The lifecycle only ever issues keyed inject/remove calls and
//! leaves ordering and deduplication to the target.
//!
//! [`MemorySheet`] is a bundled in-memory target, suitable as a server-side
//! buffer and for tests.

mod memory;

pub use memory::MemorySheet;

use std::fmt;

use crate::error::StyleError;
use crate::identity::StyleId;

/// One mounted usage of a global style definition.
///
/// The handle carries its definition's identifier, so handles allocated
/// for different definitions never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceHandle {
    style: StyleId,
    index: u32,
}

impl InstanceHandle {
    /// Creates a handle. Only stylesheet targets should need this.
    pub fn new(style: StyleId, index: u32) -> Self {
        Self { style, index }
    }

    /// The definition this instance belongs to.
    pub fn style(&self) -> &StyleId {
        &self.style
    }

    /// The instance number within its definition.
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl fmt::Display for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.style, self.index)
    }
}

/// Where global style CSS text is injected.
///
/// Implementations are shared process-wide, so all methods take `&self`.
/// `inject` and `remove` must tolerate repeated calls with the same
/// arguments.
pub trait StyleSheet: Send + Sync {
    /// Whether this target is a server-side buffer.
    ///
    /// Server targets receive CSS synchronously during render and are never
    /// asked to remove it.
    fn is_server(&self) -> bool;

    /// Allocates a fresh instance handle under `style`.
    fn allocate_instance(&self, style: &StyleId) -> InstanceHandle;

    /// Injects (or replaces) the CSS text for an instance.
    fn inject(&self, instance: &InstanceHandle, css: &str) -> Result<(), StyleError>;

    /// Removes the CSS text for an instance. Removing nothing is not an error.
    fn remove(&self, instance: &InstanceHandle) -> Result<(), StyleError>;
}
