//! Per-mount lifecycle of a global style.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use super::global_style::GlobalStyle;
use super::stringifier::{CssStringifier, Stringifier};
use crate::config::dev_checks_enabled;
use crate::definition::GlobalStyleDefinition;
use crate::error::StyleError;
use crate::sheet::{InstanceHandle, StyleSheet};
use crate::theme::{resolve_context, Props, RenderContext, ThemeChoice};

static DEFAULT_STRINGIFIER: Lazy<Arc<CssStringifier>> = Lazy::new(|| Arc::new(CssStringifier::new()));

/// Everything a render needs from its surroundings.
///
/// Changing the sheet or stringifier (by `Arc` identity) or the resolved
/// theme between commits re-runs the injection. Keep one environment and
/// clone it rather than rebuilding it per render.
#[derive(Clone)]
pub struct RenderEnv {
    sheet: Arc<dyn StyleSheet>,
    stringifier: Arc<dyn Stringifier>,
    theme: Option<ThemeChoice>,
}

impl RenderEnv {
    /// Creates an environment using the shared default [`CssStringifier`]
    /// and no ambient theme.
    pub fn new(sheet: Arc<dyn StyleSheet>) -> Self {
        let stringifier: Arc<dyn Stringifier> = DEFAULT_STRINGIFIER.clone();
        Self {
            sheet,
            stringifier,
            theme: None,
        }
    }

    /// Replaces the stringifier, returning the updated environment for chaining.
    pub fn with_stringifier(mut self, stringifier: Arc<dyn Stringifier>) -> Self {
        self.stringifier = stringifier;
        self
    }

    /// Sets the ambient theme, returning the updated environment for chaining.
    pub fn with_theme(mut self, theme: impl Into<ThemeChoice>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Sets or clears the ambient theme in place.
    pub fn set_theme(&mut self, theme: Option<ThemeChoice>) {
        self.theme = theme;
    }

    /// The stylesheet target.
    pub fn sheet(&self) -> &Arc<dyn StyleSheet> {
        &self.sheet
    }

    /// The stringifier.
    pub fn stringifier(&self) -> &Arc<dyn Stringifier> {
        &self.stringifier
    }

    /// The ambient theme.
    pub fn theme(&self) -> Option<&ThemeChoice> {
        self.theme.as_ref()
    }
}

impl fmt::Debug for RenderEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderEnv")
            .field("server", &self.sheet.is_server())
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

/// Where a mount point is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    /// Created, never rendered.
    Unmounted,
    /// Rendered on the client, first commit still outstanding.
    PendingCommit,
    /// Committed on the client; CSS is live in the sheet.
    Mounted,
    /// Unmounted on the client. Terminal.
    Removed,
    /// Rendered into a server sheet. Terminal; nothing is ever removed.
    ServerRendered,
}

/// Inputs of one commit-time injection.
struct EffectDeps {
    instance: InstanceHandle,
    props: Props,
    theme: Option<Value>,
    /// Present only for dynamic definitions.
    context: Option<RenderContext>,
    sheet: Arc<dyn StyleSheet>,
    stringifier: Arc<dyn Stringifier>,
}

impl EffectDeps {
    fn same_inputs(&self, other: &EffectDeps) -> bool {
        self.instance == other.instance
            && self.props == other.props
            && self.theme == other.theme
            && same_arc(&self.sheet, &other.sheet)
            && same_arc(&self.stringifier, &other.stringifier)
    }
}

fn same_arc<T: ?Sized>(a: &Arc<T>, b: &Arc<T>) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

/// One mount point of a [`GlobalStyle`].
///
/// The host drives it through three calls that mirror its own pipeline:
///
/// - [`render`](Self::render) on every render pass
/// - [`commit`](Self::commit) once the render is committed, before paint
/// - [`unmount`](Self::unmount) when the mount point goes away
///
/// The instance handle is allocated on the first render and kept for the
/// mount point's whole life. Dropping a mount does not remove its CSS; call
/// [`unmount`](Self::unmount).
pub struct GlobalStyleMount {
    style: GlobalStyle,
    state: MountState,
    instance: Option<InstanceHandle>,
    pending: Option<EffectDeps>,
    /// Inputs of the live injection, i.e. the registered cleanup.
    committed: Option<EffectDeps>,
}

impl GlobalStyleMount {
    pub(crate) fn new(style: GlobalStyle) -> Self {
        Self {
            style,
            state: MountState::Unmounted,
            instance: None,
            pending: None,
            committed: None,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> MountState {
        self.state
    }

    /// The allocated instance, once rendered.
    pub fn instance(&self) -> Option<&InstanceHandle> {
        self.instance.as_ref()
    }

    /// Returns true if the last render scheduled an injection.
    pub fn has_pending_commit(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs the render phase.
    ///
    /// On a client sheet this only records what the next [`commit`](Self::commit)
    /// should inject; if the inputs equal those of the live injection, nothing
    /// is scheduled. On a server sheet the CSS is injected right away, since
    /// there is no commit to defer to. Calling this repeatedly before a commit
    /// is harmless: the last call wins.
    ///
    /// # Errors
    ///
    /// Only the server path can fail, with whatever the stringifier or sheet
    /// returned.
    pub fn render(&mut self, props: &Props, env: &RenderEnv) -> Result<(), StyleError> {
        if self.state == MountState::Removed {
            debug!(id = %self.definition().id(), "render after unmount ignored");
            return Ok(());
        }

        if dev_checks_enabled() && props.children_count() > 0 {
            warn!(
                id = %self.definition().id(),
                "global style was given children; global styles do not render children"
            );
        }

        let instance = self.allocate(env.sheet().as_ref());

        let ambient = env.theme().map(ThemeChoice::resolve);
        let (theme, context) = if self.definition().is_static() {
            (ambient, None)
        } else {
            let context = resolve_context(props, ambient.as_ref(), self.style.default_props());
            (context.theme().cloned(), Some(context))
        };

        if env.sheet().is_server() {
            render_styles(
                self.definition(),
                &instance,
                context.as_ref(),
                env.sheet().as_ref(),
                env.stringifier().as_ref(),
            )?;
            self.state = MountState::ServerRendered;
            return Ok(());
        }

        let deps = EffectDeps {
            instance,
            props: props.clone(),
            theme,
            context,
            sheet: Arc::clone(env.sheet()),
            stringifier: Arc::clone(env.stringifier()),
        };

        if self
            .committed
            .as_ref()
            .is_some_and(|live| live.same_inputs(&deps))
        {
            trace!(id = %self.definition().id(), "inputs unchanged, skipping commit");
            self.pending = None;
        } else {
            self.pending = Some(deps);
        }

        if self.state == MountState::Unmounted {
            self.state = MountState::PendingCommit;
        }
        Ok(())
    }

    /// Runs the commit-time effect scheduled by the last render.
    ///
    /// The previous injection is removed first, then the new CSS injected.
    /// Without a scheduled effect this does nothing, so a repeated commit
    /// is a no-op.
    pub fn commit(&mut self) -> Result<(), StyleError> {
        let Some(deps) = self.pending.take() else {
            return Ok(());
        };

        if let Err(err) = self.cleanup() {
            self.pending = Some(deps);
            return Err(err);
        }
        render_styles(
            self.definition(),
            &deps.instance,
            deps.context.as_ref(),
            deps.sheet.as_ref(),
            deps.stringifier.as_ref(),
        )?;

        self.committed = Some(deps);
        if self.state != MountState::Mounted {
            debug!(id = %self.definition().id(), "global style mounted");
            self.state = MountState::Mounted;
        }
        Ok(())
    }

    /// Removes this mount's CSS and ends its lifecycle.
    ///
    /// Server-rendered mounts have nothing to remove. Unmounting twice, or
    /// before the first commit, issues no removal.
    pub fn unmount(&mut self) -> Result<(), StyleError> {
        if matches!(self.state, MountState::ServerRendered | MountState::Removed) {
            return Ok(());
        }

        self.pending = None;
        self.cleanup()?;
        self.state = MountState::Removed;
        debug!(id = %self.definition().id(), "global style removed");
        Ok(())
    }

    fn definition(&self) -> &GlobalStyleDefinition {
        self.style.definition()
    }

    fn allocate(&mut self, sheet: &dyn StyleSheet) -> InstanceHandle {
        if let Some(instance) = &self.instance {
            return instance.clone();
        }
        let instance = sheet.allocate_instance(self.style.id());
        trace!(id = %self.style.id(), instance = instance.index(), "allocated instance");
        self.instance = Some(instance.clone());
        instance
    }

    fn cleanup(&mut self) -> Result<(), StyleError> {
        // Forget the live injection only once the sheet confirms the removal.
        if let Some(live) = &self.committed {
            live.sheet.remove(&live.instance)?;
            trace!(id = %live.instance.style(), instance = live.instance.index(), "removed styles");
        }
        self.committed = None;
        Ok(())
    }
}

impl fmt::Debug for GlobalStyleMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalStyleMount")
            .field("id", self.style.id())
            .field("state", &self.state)
            .field("instance", &self.instance)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

/// Computes and injects the CSS for one instance.
///
/// Static definitions reuse their cached text; dynamic ones stringify the
/// given context every time.
fn render_styles(
    definition: &GlobalStyleDefinition,
    instance: &InstanceHandle,
    context: Option<&RenderContext>,
    sheet: &dyn StyleSheet,
    stringifier: &dyn Stringifier,
) -> Result<(), StyleError> {
    match context {
        Some(context) => {
            let css = definition.dynamic_css(context, stringifier)?;
            sheet.inject(instance, &css)?;
        }
        None => {
            let css = definition.static_css(stringifier)?;
            sheet.inject(instance, css)?;
        }
    }
    trace!(id = %instance.style(), instance = instance.index(), "injected styles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::create_global_style;
    use crate::rules::RuleSet;
    use crate::sheet::MemorySheet;
    use serde_json::json;

    fn client_env() -> (Arc<MemorySheet>, RenderEnv) {
        let sheet = Arc::new(MemorySheet::client());
        let env = RenderEnv::new(sheet.clone());
        (sheet, env)
    }

    #[test]
    fn test_render_does_not_touch_client_sheet() {
        let (sheet, env) = client_env();
        let mut mount = create_global_style("body { margin: 0; } /* lc-pure */").mount();

        mount.render(&Props::new(), &env).unwrap();
        mount.render(&Props::new(), &env).unwrap();

        assert!(sheet.is_empty());
        assert_eq!(mount.state(), MountState::PendingCommit);
        assert!(mount.has_pending_commit());
    }

    #[test]
    fn test_state_walk_on_client() {
        let (sheet, env) = client_env();
        let mut mount = create_global_style("body { margin: 0; } /* lc-walk */").mount();
        assert_eq!(mount.state(), MountState::Unmounted);
        assert!(mount.instance().is_none());

        mount.render(&Props::new(), &env).unwrap();
        mount.commit().unwrap();
        assert_eq!(mount.state(), MountState::Mounted);
        assert_eq!(sheet.len(), 1);

        mount.render(&Props::new(), &env).unwrap();
        assert!(!mount.has_pending_commit());
        assert_eq!(mount.state(), MountState::Mounted);

        mount.unmount().unwrap();
        assert_eq!(mount.state(), MountState::Removed);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_instance_is_stable_across_renders() {
        let (_sheet, env) = client_env();
        let style = create_global_style(RuleSet::new().template("a { b: {{ n }}; } /* lc-stable */"));
        let mut mount = style.mount();

        mount.render(&Props::new().with("n", 1), &env).unwrap();
        let first = mount.instance().cloned();
        mount.commit().unwrap();
        mount.render(&Props::new().with("n", 2), &env).unwrap();
        mount.commit().unwrap();

        assert_eq!(mount.instance().cloned(), first);
    }

    #[test]
    fn test_dynamic_props_change_replaces_css() {
        let (sheet, env) = client_env();
        let style = create_global_style(RuleSet::new().template("a { gap: {{ gap }}px; } /* lc-props */"));
        let mut mount = style.mount();

        mount.render(&Props::new().with("gap", 2), &env).unwrap();
        mount.commit().unwrap();
        assert_eq!(sheet.css(), "a { gap: 2px; } /* lc-props */");

        mount.render(&Props::new().with("gap", 4), &env).unwrap();
        mount.commit().unwrap();
        assert_eq!(sheet.css(), "a { gap: 4px; } /* lc-props */");
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn test_server_render_injects_immediately() {
        let sheet = Arc::new(MemorySheet::server());
        let env = RenderEnv::new(sheet.clone()).with_theme(json!({ "fg": "red" }));
        let style = create_global_style(RuleSet::new().template("p { color: {{ theme.fg }}; }"));
        let mut mount = style.mount();

        mount.render(&Props::new(), &env).unwrap();
        assert_eq!(mount.state(), MountState::ServerRendered);
        assert_eq!(sheet.css(), "p { color: red; }");

        mount.commit().unwrap();
        mount.unmount().unwrap();
        assert_eq!(sheet.css(), "p { color: red; }");
    }

    #[test]
    fn test_unmount_before_commit_removes_nothing() {
        let (sheet, env) = client_env();
        let mut mount = create_global_style("b { x: y; } /* lc-early */").mount();

        mount.render(&Props::new(), &env).unwrap();
        mount.unmount().unwrap();
        mount.commit().unwrap();

        assert_eq!(mount.state(), MountState::Removed);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_render_after_unmount_is_ignored() {
        let (sheet, env) = client_env();
        let mut mount = create_global_style("b { x: z; } /* lc-late */").mount();

        mount.render(&Props::new(), &env).unwrap();
        mount.commit().unwrap();
        mount.unmount().unwrap();
        mount.render(&Props::new(), &env).unwrap();
        mount.commit().unwrap();

        assert!(sheet.is_empty());
        assert_eq!(mount.state(), MountState::Removed);
    }

    #[test]
    fn test_same_arc_compares_allocation() {
        let sheet: Arc<dyn StyleSheet> = Arc::new(MemorySheet::client());
        let other: Arc<dyn StyleSheet> = Arc::new(MemorySheet::client());
        assert!(same_arc(&sheet, &sheet.clone()));
        assert!(!same_arc(&sheet, &other));
    }
}
