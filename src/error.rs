//! Error types for style rendering and stylesheet collaborators.

use thiserror::Error;

/// Error raised while computing or injecting global style CSS.
///
/// Failures from the [`Stringifier`](crate::render::Stringifier) or the
/// [`StyleSheet`](crate::sheet::StyleSheet) are passed through as-is; the
/// lifecycle never retries or swallows them.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A template fragment failed to render against the render context.
    #[error("template fragment failed to render: {0}")]
    Template(#[from] minijinja::Error),

    /// The stringifier rejected the rule set.
    #[error("failed to stringify rule set: {0}")]
    Stringify(String),

    /// The stylesheet target failed to inject or remove rules.
    #[error("stylesheet target error: {0}")]
    Sheet(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StyleError {
    /// Wraps an arbitrary stylesheet failure.
    pub fn sheet<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        StyleError::Sheet(err.into())
    }
}
