//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use globalstyle::{
    CssStringifier, InstanceHandle, RenderContext, RuleSet, StyleError, StyleId, StyleSheet,
    Stringifier,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Inject(InstanceHandle, String),
    Remove(InstanceHandle),
}

/// A stylesheet that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingSheet {
    server: bool,
    counters: Mutex<HashMap<StyleId, u32>>,
    calls: Mutex<Vec<Call>>,
    failing_removes: AtomicUsize,
    remove_attempts: AtomicUsize,
}

impl RecordingSheet {
    pub fn client() -> Self {
        Self::default()
    }

    pub fn server() -> Self {
        Self {
            server: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn injects(&self) -> Vec<(InstanceHandle, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Inject(handle, css) => Some((handle, css)),
                Call::Remove(_) => None,
            })
            .collect()
    }

    pub fn removes(&self) -> Vec<InstanceHandle> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Remove(handle) => Some(handle),
                Call::Inject(..) => None,
            })
            .collect()
    }

    /// Makes the next `count` calls to `remove` fail without removing anything.
    pub fn fail_next_removes(&self, count: usize) {
        self.failing_removes.store(count, Ordering::SeqCst);
    }

    /// Every `remove` call, failed or not.
    pub fn remove_attempts(&self) -> usize {
        self.remove_attempts.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl StyleSheet for RecordingSheet {
    fn is_server(&self) -> bool {
        self.server
    }

    fn allocate_instance(&self, style: &StyleId) -> InstanceHandle {
        let mut counters = self.counters.lock().unwrap();
        let counter = counters.entry(style.clone()).or_insert(0);
        *counter += 1;
        InstanceHandle::new(style.clone(), *counter)
    }

    fn inject(&self, instance: &InstanceHandle, css: &str) -> Result<(), StyleError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Inject(instance.clone(), css.to_string()));
        Ok(())
    }

    fn remove(&self, instance: &InstanceHandle) -> Result<(), StyleError> {
        self.remove_attempts.fetch_add(1, Ordering::SeqCst);
        let failing = self.failing_removes.load(Ordering::SeqCst);
        if failing > 0 {
            self.failing_removes.store(failing - 1, Ordering::SeqCst);
            return Err(StyleError::sheet("remove rejected"));
        }
        self.calls.lock().unwrap().push(Call::Remove(instance.clone()));
        Ok(())
    }
}

/// Wraps [`CssStringifier`] and counts invocations.
#[derive(Debug, Default)]
pub struct CountingStringifier {
    inner: CssStringifier,
    calls: AtomicUsize,
}

impl CountingStringifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Stringifier for CountingStringifier {
    fn stringify(&self, rules: &RuleSet, context: &RenderContext) -> Result<String, StyleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.stringify(rules, context)
    }
}

/// A sheet whose injections always fail.
#[derive(Debug, Default)]
pub struct FailingSheet;

impl StyleSheet for FailingSheet {
    fn is_server(&self) -> bool {
        false
    }

    fn allocate_instance(&self, style: &StyleId) -> InstanceHandle {
        InstanceHandle::new(style.clone(), 1)
    }

    fn inject(&self, _instance: &InstanceHandle, _css: &str) -> Result<(), StyleError> {
        Err(StyleError::sheet("sheet detached"))
    }

    fn remove(&self, _instance: &InstanceHandle) -> Result<(), StyleError> {
        Ok(())
    }
}
