//! Rule sets and their fragments.
//!
//! A global style is declared as an ordered [`RuleSet`] of [`Fragment`]s:
//!
//! - [`Fragment::Literal`]: CSS text known at declaration time
//! - [`Fragment::Template`]: a minijinja template evaluated against the render context
//! - [`Fragment::Interpolation`]: a closure evaluated against the render context
//!
//! A rule set made only of literals is *static*: its CSS text does not depend
//! on props or theme and can be computed once per process.

mod fragment;
mod ruleset;

pub use fragment::{Fragment, Interpolation};
pub use ruleset::{is_static, RuleSet};
