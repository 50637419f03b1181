//! Detection of global styles created repeatedly at runtime.
//!
//! A global style should be declared once, at a stable location, and then
//! mounted as often as needed. Each creation bumps a per-identifier counter;
//! the first creation fixes the expected count and anything past it means
//! the declaration is being re-run, typically from inside a render.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

use crate::identity::StyleId;

const EXPECTED_CREATIONS: usize = 1;

static CREATIONS: Lazy<Mutex<HashMap<StyleId, usize>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// How many times a definition with this identifier has been created.
pub fn creation_count(id: &StyleId) -> usize {
    CREATIONS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(id)
        .copied()
        .unwrap_or(0)
}

fn record_creation(id: &StyleId) -> usize {
    let mut creations = CREATIONS.lock().unwrap_or_else(PoisonError::into_inner);
    let count = creations.entry(id.clone()).or_insert(0);
    *count += 1;
    *count
}

/// Records a creation and warns the first time it exceeds the expected count.
pub(crate) fn check_dynamic_creation(id: &StyleId) {
    let count = record_creation(id);
    if count == EXPECTED_CREATIONS + 1 {
        warn!(
            id = %id,
            "global style has been created dynamically; declare it once outside of render and reuse it"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::identify;

    #[test]
    fn test_creation_count_increments() {
        let id = identify("guard-test-increments");
        assert_eq!(creation_count(&id), 0);

        check_dynamic_creation(&id);
        assert_eq!(creation_count(&id), 1);

        check_dynamic_creation(&id);
        check_dynamic_creation(&id);
        assert_eq!(creation_count(&id), 3);
    }

    #[test]
    fn test_counts_are_per_identifier() {
        let a = identify("guard-test-a");
        let b = identify("guard-test-b");
        check_dynamic_creation(&a);
        assert_eq!(creation_count(&a), 1);
        assert_eq!(creation_count(&b), 0);
    }
}
