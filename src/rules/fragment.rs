//! Individual rule fragments.

use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

use crate::theme::RenderContext;

type InterpolationFn = dyn Fn(&RenderContext) -> String + Send + Sync;

/// A render-time function producing CSS text from the render context.
///
/// The label stands in for the function body when the rule set is
/// serialized for identity, so two interpolations with the same label at the
/// same position yield the same identifier.
#[derive(Clone)]
pub struct Interpolation {
    label: String,
    func: Arc<InterpolationFn>,
}

impl Interpolation {
    /// Creates a labelled interpolation.
    pub fn new<F>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&RenderContext) -> String + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// The label used when serializing this interpolation.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluates the interpolation against a render context.
    pub fn call(&self, context: &RenderContext) -> String {
        (self.func)(context)
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolation")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One element of a rule set.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// CSS text fixed at declaration time.
    Literal(String),
    /// Minijinja source rendered with the render context, e.g.
    /// `"body { color: {{ theme.fg }}; }"`.
    Template(String),
    /// A closure over the render context.
    Interpolation(Interpolation),
}

impl Fragment {
    /// Returns true if this fragment does not depend on render-time input.
    pub fn is_static(&self) -> bool {
        matches!(self, Fragment::Literal(_))
    }

    /// The CSS or template source carried by this fragment, if any.
    pub fn source(&self) -> Option<&str> {
        match self {
            Fragment::Literal(text) | Fragment::Template(text) => Some(text),
            Fragment::Interpolation(_) => None,
        }
    }

    pub(crate) fn to_seed(&self) -> Value {
        match self {
            Fragment::Literal(text) => Value::String(text.clone()),
            Fragment::Template(source) => json!({ "template": source }),
            Fragment::Interpolation(interp) => json!({ "fn": interp.label() }),
        }
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::Literal(text.to_string())
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::Literal(text)
    }
}

impl From<i64> for Fragment {
    fn from(n: i64) -> Self {
        Fragment::Literal(n.to_string())
    }
}

impl From<f64> for Fragment {
    fn from(n: f64) -> Self {
        Fragment::Literal(n.to_string())
    }
}

impl From<Interpolation> for Fragment {
    fn from(interp: Interpolation) -> Self {
        Fragment::Interpolation(interp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_static() {
        assert!(Fragment::from("body { margin: 0; }").is_static());
        assert!(Fragment::from(12_i64).is_static());
    }

    #[test]
    fn test_template_and_interpolation_are_dynamic() {
        assert!(!Fragment::Template("{{ theme.bg }}".into()).is_static());
        let interp = Interpolation::new("bg", |_| "red".to_string());
        assert!(!Fragment::from(interp).is_static());
    }

    #[test]
    fn test_number_literals_render_plainly() {
        assert_eq!(Fragment::from(1.5_f64).source(), Some("1.5"));
        assert_eq!(Fragment::from(0_i64).source(), Some("0"));
    }

    #[test]
    fn test_interpolation_call_reads_context() {
        let interp = Interpolation::new("pad", |ctx| {
            format!("{}px", ctx.get("pad").and_then(|v| v.as_i64()).unwrap_or(0))
        });
        let ctx = RenderContext::from_json(json!({ "pad": 4 }));
        assert_eq!(interp.call(&ctx), "4px");
    }

    #[test]
    fn test_seed_uses_label_for_interpolation() {
        let interp = Interpolation::new("accent", |_| String::new());
        assert_eq!(
            Fragment::from(interp).to_seed(),
            json!({ "fn": "accent" })
        );
    }
}
