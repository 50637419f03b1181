//! Props and render contexts.

use serde::Serialize;
use serde_json::{Map, Value};

/// Key under which the resolved theme is exposed.
pub const THEME_KEY: &str = "theme";

/// Key carrying child content, which global styles never render.
pub const CHILDREN_KEY: &str = "children";

/// Render-time properties passed to a mounted global style.
///
/// Compared by value: two renders with equal props are treated as unchanged.
///
/// # Example
///
/// ```rust
/// use globalstyle::Props;
/// use serde_json::json;
///
/// let props = Props::new()
///     .with("density", "compact")
///     .with("theme", json!({ "bg": "black" }));
///
/// assert_eq!(props.theme(), Some(&json!({ "bg": "black" })));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

impl Props {
    /// Creates empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds props from a JSON value. Non-object values yield empty props.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Sets a property, returning the updated props for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets a property in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The explicitly passed theme. `null` counts as absent.
    pub fn theme(&self) -> Option<&Value> {
        self.0.get(THEME_KEY).filter(|v| !v.is_null())
    }

    /// Number of child items passed under [`CHILDREN_KEY`].
    ///
    /// `null` and booleans count as nothing, arrays count their non-null
    /// entries, anything else counts as one child.
    pub fn children_count(&self) -> usize {
        match self.0.get(CHILDREN_KEY) {
            None | Some(Value::Null) | Some(Value::Bool(_)) => 0,
            Some(Value::Array(items)) => items.iter().filter(|v| !v.is_null()).count(),
            Some(_) => 1,
        }
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Props merged with the resolved theme, as seen by dynamic fragments.
///
/// Static definitions always render with the empty context.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext(Map<String, Value>);

impl RenderContext {
    /// Builds a context from a JSON value. Non-object values yield an empty context.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Looks up a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The resolved theme, if any source supplied one.
    pub fn theme(&self) -> Option<&Value> {
        self.0.get(THEME_KEY)
    }

    /// Returns true if the context carries no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
