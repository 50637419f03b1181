//! Rule set stringification.

use minijinja::Environment;

use crate::error::StyleError;
use crate::rules::{Fragment, RuleSet};
use crate::theme::RenderContext;

/// Turns a rule set into CSS text for a render context.
///
/// Implementations must be deterministic: identical rules and context give
/// identical output. Static definitions rely on this to stringify once per
/// process.
pub trait Stringifier: Send + Sync {
    /// Produces the CSS text for `rules` under `context`.
    fn stringify(&self, rules: &RuleSet, context: &RenderContext) -> Result<String, StyleError>;
}

impl<F> Stringifier for F
where
    F: Fn(&RuleSet, &RenderContext) -> Result<String, StyleError> + Send + Sync,
{
    fn stringify(&self, rules: &RuleSet, context: &RenderContext) -> Result<String, StyleError> {
        self(rules, context)
    }
}

/// The default stringifier.
///
/// Literals are copied as-is, templates are rendered with MiniJinja against
/// the render context and interpolations are called with it. The pieces are
/// concatenated and surrounding whitespace trimmed.
///
/// # Example
///
/// ```rust
/// use globalstyle::{CssStringifier, RenderContext, RuleSet, Stringifier};
/// use serde_json::json;
///
/// let rules = RuleSet::new().template("body { background: {{ theme.bg }}; }");
/// let context = RenderContext::from_json(json!({ "theme": { "bg": "navy" } }));
///
/// let css = CssStringifier::new().stringify(&rules, &context).unwrap();
/// assert_eq!(css, "body { background: navy; }");
/// ```
#[derive(Debug)]
pub struct CssStringifier {
    env: Environment<'static>,
}

impl CssStringifier {
    /// Creates a stringifier with a default MiniJinja environment.
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register filters or functions available to template fragments.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for CssStringifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Stringifier for CssStringifier {
    fn stringify(&self, rules: &RuleSet, context: &RenderContext) -> Result<String, StyleError> {
        let mut css = String::new();
        for fragment in rules.fragments() {
            match fragment {
                Fragment::Literal(text) => css.push_str(text),
                Fragment::Template(source) => css.push_str(&self.env.render_str(source, context)?),
                Fragment::Interpolation(interp) => css.push_str(&interp.call(context)),
            }
        }
        Ok(css.trim().to_string())
    }
}
