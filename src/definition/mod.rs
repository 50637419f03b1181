//! Global style definitions.
//!
//! A [`GlobalStyleDefinition`] pairs a rule set with its identifier and
//! staticity. It is created once per declaration, never mutated, and shared
//! by every mount point that renders it. The only interior state is a
//! write-once cell holding the CSS text of a static definition.

mod checks;
mod guard;

pub use guard::creation_count;

pub(crate) use checks::warn_on_import;
pub(crate) use guard::check_dynamic_creation;

use once_cell::sync::OnceCell;

use crate::error::StyleError;
use crate::identity::{identify, StyleId};
use crate::render::Stringifier;
use crate::rules::RuleSet;
use crate::theme::RenderContext;

/// The immutable pairing of identifier, rule set and staticity.
#[derive(Debug)]
pub struct GlobalStyleDefinition {
    id: StyleId,
    rules: RuleSet,
    is_static: bool,
    static_css: OnceCell<String>,
}

impl GlobalStyleDefinition {
    /// Creates a definition, deriving its identifier from the serialized rules.
    pub fn new(rules: RuleSet) -> Self {
        let id = identify(&rules.serialized());
        let is_static = rules.is_static();
        Self {
            id,
            rules,
            is_static,
            static_css: OnceCell::new(),
        }
    }

    /// The definition's identifier.
    pub fn id(&self) -> &StyleId {
        &self.id
    }

    /// The rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns true if the rules never depend on props or theme.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// The cached CSS text of a static definition, once computed.
    pub fn cached_css(&self) -> Option<&str> {
        self.static_css.get().map(String::as_str)
    }

    /// Returns the CSS text of a static definition, stringifying on first use.
    ///
    /// Computed with the empty render context. Concurrent first calls may
    /// both stringify; only one result is kept and both are identical.
    pub(crate) fn static_css(&self, stringifier: &dyn Stringifier) -> Result<&str, StyleError> {
        self.static_css
            .get_or_try_init(|| stringifier.stringify(&self.rules, &RenderContext::default()))
            .map(String::as_str)
    }

    /// Stringifies the rules against a fresh render context.
    pub(crate) fn dynamic_css(
        &self,
        context: &RenderContext,
        stringifier: &dyn Stringifier,
    ) -> Result<String, StyleError> {
        stringifier.stringify(&self.rules, context)
    }
}
