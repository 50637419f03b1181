//! Theme precedence and render context construction.

use serde_json::Value;

use super::context::{Props, RenderContext, CHILDREN_KEY, THEME_KEY};

/// Picks the theme for a render.
///
/// An explicit theme in `props` wins, then the ambient `context_theme`, then
/// the theme in the definition's `default_props`. `null` counts as absent at
/// every level.
pub fn determine_theme<'a>(
    props: &'a Props,
    context_theme: Option<&'a Value>,
    default_props: Option<&'a Props>,
) -> Option<&'a Value> {
    props
        .theme()
        .or_else(|| context_theme.filter(|v| !v.is_null()))
        .or_else(|| default_props.and_then(Props::theme))
}

/// Builds the render context for a dynamic definition.
///
/// Default props sit underneath the render props, the `children` key is
/// dropped and `theme` is replaced with the resolved theme (omitted when no
/// source supplies one). Never cached: every render sees its own inputs.
pub fn resolve_context(
    props: &Props,
    context_theme: Option<&Value>,
    default_props: Option<&Props>,
) -> RenderContext {
    let mut map = default_props
        .map(|defaults| defaults.as_map().clone())
        .unwrap_or_default();
    for (key, value) in props.as_map() {
        map.insert(key.clone(), value.clone());
    }

    let theme = determine_theme(props, context_theme, default_props).cloned();
    map.remove(CHILDREN_KEY);
    map.remove(THEME_KEY);
    if let Some(theme) = theme {
        map.insert(THEME_KEY.to_string(), theme);
    }

    RenderContext::from_map(map)
}
