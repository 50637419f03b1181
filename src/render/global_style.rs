//! Declaring global styles.

use std::sync::Arc;

use super::lifecycle::GlobalStyleMount;
use crate::config::dev_checks_enabled;
use crate::definition::{check_dynamic_creation, warn_on_import, GlobalStyleDefinition};
use crate::identity::StyleId;
use crate::rules::RuleSet;
use crate::theme::Props;

/// Declares a global style.
///
/// Call this once per declaration, at program initialization, and keep the
/// returned [`GlobalStyle`] around (a `once_cell::sync::Lazy` static works
/// well). Every place that needs the style calls [`GlobalStyle::mount`].
///
/// In development mode, creating the same definition more than once logs a
/// warning, as does an `@import` in the rules.
///
/// # Example
///
/// ```rust
/// use globalstyle::{create_global_style, MemorySheet, Props, RenderEnv};
/// use std::sync::Arc;
///
/// let reset = create_global_style("body { margin: 0; }");
/// let sheet = Arc::new(MemorySheet::client());
/// let env = RenderEnv::new(sheet.clone());
///
/// let mut mount = reset.mount();
/// mount.render(&Props::new(), &env).unwrap();
/// assert!(sheet.is_empty());
///
/// mount.commit().unwrap();
/// assert_eq!(sheet.css(), "body { margin: 0; }");
///
/// mount.unmount().unwrap();
/// assert!(sheet.is_empty());
/// ```
pub fn create_global_style(rules: impl Into<RuleSet>) -> GlobalStyle {
    let definition = GlobalStyleDefinition::new(rules.into());

    if dev_checks_enabled() {
        check_dynamic_creation(definition.id());
        warn_on_import(definition.id(), definition.rules());
    }

    GlobalStyle {
        definition: Arc::new(definition),
        default_props: None,
    }
}

/// A declared global style, ready to be mounted.
///
/// Cloning is cheap and shares the definition, including the cached CSS of
/// a static definition.
#[derive(Debug, Clone)]
pub struct GlobalStyle {
    definition: Arc<GlobalStyleDefinition>,
    default_props: Option<Props>,
}

impl GlobalStyle {
    /// Sets default props, returning the updated style for chaining.
    ///
    /// Defaults sit underneath render props, and their `theme` is the last
    /// fallback when neither props nor the ambient context supply one.
    pub fn with_default_props(mut self, props: Props) -> Self {
        self.default_props = Some(props);
        self
    }

    /// The definition's identifier.
    pub fn id(&self) -> &StyleId {
        self.definition.id()
    }

    /// Returns true if the rules never depend on props or theme.
    pub fn is_static(&self) -> bool {
        self.definition.is_static()
    }

    /// The shared definition.
    pub fn definition(&self) -> &GlobalStyleDefinition {
        &self.definition
    }

    /// The declared default props.
    pub fn default_props(&self) -> Option<&Props> {
        self.default_props.as_ref()
    }

    /// Creates a new, unmounted mount point for this style.
    pub fn mount(&self) -> GlobalStyleMount {
        GlobalStyleMount::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{set_mode, Mode};
    use crate::definition::creation_count;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_repeated_creation_is_counted_in_development() {
        set_mode(Mode::Development);
        let first = create_global_style("main { display: block; } /* guard-dev */");
        let _second = create_global_style("main { display: block; } /* guard-dev */");

        assert_eq!(creation_count(first.id()), 2);
        set_mode(Mode::from_build());
    }

    #[test]
    #[serial]
    fn test_production_skips_creation_guard() {
        set_mode(Mode::Production);
        let style = create_global_style("main { display: block; } /* guard-prod */");

        assert_eq!(creation_count(style.id()), 0);
        set_mode(Mode::from_build());
    }

    #[test]
    fn test_clones_share_definition() {
        let style = create_global_style("p { margin: 0; } /* clone */");
        let copy = style.clone();
        assert!(std::ptr::eq(style.definition(), copy.definition()));
    }

    #[test]
    fn test_default_props_are_kept() {
        let style = create_global_style(RuleSet::new().template("{{ theme.bg }}"))
            .with_default_props(Props::new().with("theme", "dark"));

        assert!(!style.is_static());
        assert!(style.default_props().is_some());
    }
}
