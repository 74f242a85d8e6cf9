//! Navigation menu rendering.
//!
//! Flat menu records are turned into bar-with-dropdown markup:
//! - `item`: records and the parent → children index
//! - `walker`: classification and the depth-first renderer
//! - `hooks`: caller-supplied rewrites and escaping
//! - `shell`: container/list wrapper and the no-menu fallback
//! - `active`: current-page trail marking

mod active;
mod escape;
mod hooks;
mod item;
mod shell;
mod walker;

pub use active::mark_active_trail;
pub use escape::{ALLOWED_PROTOCOLS, escape_attribute, escape_url};
pub use hooks::{DEFAULT_ADMIN_MENU_URL, DefaultHooks, LinkAttributes, MenuHooks};
pub use item::{ChildIndex, MenuItem};
pub use shell::{FALLBACK_LABEL, ShellOptions, render_fallback, render_menu, wrap};
pub use walker::{NodeKind, RenderConfig, classify, clean_classes, render};
