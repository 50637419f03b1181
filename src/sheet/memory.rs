//! In-memory stylesheet target.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{InstanceHandle, StyleSheet};
use crate::error::StyleError;
use crate::identity::StyleId;

#[derive(Debug, Default)]
struct SheetState {
    counters: HashMap<StyleId, u32>,
    /// Injected rules in first-injection order.
    rules: Vec<(InstanceHandle, String)>,
}

/// A stylesheet target that keeps injected CSS in memory.
///
/// Instance numbers start at 1 and count up per identifier. Injecting for a
/// live instance replaces its text in place, so the sheet order reflects
/// when each instance first injected.
///
/// # Example
///
/// ```rust
/// use globalstyle::{identify, MemorySheet, StyleSheet};
///
/// let sheet = MemorySheet::server();
/// let id = identify("body");
/// let handle = sheet.allocate_instance(&id);
///
/// sheet.inject(&handle, "body { margin: 0; }").unwrap();
/// assert_eq!(sheet.css(), "body { margin: 0; }");
/// ```
#[derive(Debug, Default)]
pub struct MemorySheet {
    server: bool,
    state: Mutex<SheetState>,
}

impl MemorySheet {
    /// Creates a client-side sheet.
    pub fn client() -> Self {
        Self::default()
    }

    /// Creates a server-side buffer.
    pub fn server() -> Self {
        Self {
            server: true,
            state: Mutex::default(),
        }
    }

    /// Returns all injected CSS, one instance per line.
    pub fn css(&self) -> String {
        let state = self.lock();
        state
            .rules
            .iter()
            .map(|(_, css)| css.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Returns the CSS currently injected for `instance`.
    pub fn rules_for(&self, instance: &InstanceHandle) -> Option<String> {
        self.lock()
            .rules
            .iter()
            .find(|(handle, _)| handle == instance)
            .map(|(_, css)| css.clone())
    }

    /// Number of instances with injected CSS.
    pub fn len(&self) -> usize {
        self.lock().rules.len()
    }

    /// Returns true if nothing is injected.
    pub fn is_empty(&self) -> bool {
        self.lock().rules.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, SheetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StyleSheet for MemorySheet {
    fn is_server(&self) -> bool {
        self.server
    }

    fn allocate_instance(&self, style: &StyleId) -> InstanceHandle {
        let mut state = self.lock();
        let counter = state.counters.entry(style.clone()).or_insert(0);
        *counter += 1;
        InstanceHandle::new(style.clone(), *counter)
    }

    fn inject(&self, instance: &InstanceHandle, css: &str) -> Result<(), StyleError> {
        let mut state = self.lock();
        match state.rules.iter_mut().find(|(handle, _)| handle == instance) {
            Some((_, existing)) => {
                existing.clear();
                existing.push_str(css);
            }
            None => state.rules.push((instance.clone(), css.to_string())),
        }
        Ok(())
    }

    fn remove(&self, instance: &InstanceHandle) -> Result<(), StyleError> {
        self.lock().rules.retain(|(handle, _)| handle != instance);
        Ok(())
    }
}
