//! Ordered rule sets with a fluent builder API.

use serde_json::Value;

use super::fragment::{Fragment, Interpolation};
use crate::theme::RenderContext;

/// Returns true if every fragment is a literal.
///
/// Walks the slice once. Nested rule sets are expected to have been
/// flattened before they reach this point.
pub fn is_static(fragments: &[Fragment]) -> bool {
    fragments.iter().all(Fragment::is_static)
}

/// An ordered sequence of rule fragments.
///
/// # Example
///
/// ```rust
/// use globalstyle::RuleSet;
///
/// let rules = RuleSet::new()
///     .literal("body { margin: 0; }")
///     .template("html { color: {{ theme.fg }}; }")
///     .interpolate("font", |ctx| {
///         let size = ctx.get("size").and_then(|v| v.as_i64()).unwrap_or(16);
///         format!("html {{ font-size: {}px; }}", size)
///     });
///
/// assert_eq!(rules.len(), 3);
/// assert!(!rules.is_static());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fragments: Vec<Fragment>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a literal fragment, returning the updated rule set for chaining.
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Literal(text.into()));
        self
    }

    /// Appends a template fragment rendered against the render context.
    pub fn template(mut self, source: impl Into<String>) -> Self {
        self.fragments.push(Fragment::Template(source.into()));
        self
    }

    /// Appends a labelled interpolation.
    pub fn interpolate<F>(mut self, label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&RenderContext) -> String + Send + Sync + 'static,
    {
        self.fragments
            .push(Fragment::Interpolation(Interpolation::new(label, func)));
        self
    }

    /// Appends any fragment.
    pub fn push(&mut self, fragment: impl Into<Fragment>) {
        self.fragments.push(fragment.into());
    }

    /// Returns the fragments in declaration order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if there are no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns true if no fragment depends on render-time input.
    pub fn is_static(&self) -> bool {
        is_static(&self.fragments)
    }

    /// Serializes the rule set to the JSON text used as the identity seed.
    ///
    /// Literals serialize as strings, templates as `{"template": source}` and
    /// interpolations as `{"fn": label}`.
    pub fn serialized(&self) -> String {
        Value::Array(self.fragments.iter().map(Fragment::to_seed).collect()).to_string()
    }
}

impl From<&str> for RuleSet {
    fn from(text: &str) -> Self {
        RuleSet::new().literal(text)
    }
}

impl From<String> for RuleSet {
    fn from(text: String) -> Self {
        RuleSet::new().literal(text)
    }
}

impl From<Vec<&str>> for RuleSet {
    fn from(texts: Vec<&str>) -> Self {
        texts.into_iter().map(Fragment::from).collect()
    }
}

impl From<Vec<Fragment>> for RuleSet {
    fn from(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }
}

impl FromIterator<Fragment> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_only_rule_set_is_static() {
        let rules = RuleSet::from(vec!["body { margin: 0; }", "html { color: red; }"]);
        assert!(rules.is_static());
    }

    #[test]
    fn test_single_interpolation_flips_staticity() {
        let rules = RuleSet::from("body { margin: 0; }").interpolate("c", |_| String::new());
        assert!(!rules.is_static());
    }

    #[test]
    fn test_single_template_flips_staticity() {
        let rules = RuleSet::from("body {").template("{{ theme.bg }}").literal("}");
        assert!(!rules.is_static());
    }

    #[test]
    fn test_empty_rule_set_is_static() {
        assert!(RuleSet::new().is_static());
        assert!(RuleSet::new().is_empty());
    }

    #[test]
    fn test_serialized_form() {
        let rules = RuleSet::from("a{}")
            .template("{{ x }}")
            .interpolate("color", |_| String::new());
        assert_eq!(
            rules.serialized(),
            r#"["a{}",{"template":"{{ x }}"},{"fn":"color"}]"#
        );
    }

    #[test]
    fn test_push_appends() {
        let mut rules = RuleSet::new();
        rules.push("a{}");
        rules.push(10_i64);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.fragments()[1].source(), Some("10"));
    }
}
