//! Navwalker Library
//!
//! Renders flat CMS menu records into bar-with-dropdown navigation markup.
//! The `navwalker` binary wraps this for use from the command line.

pub mod error;
pub mod loader;
pub mod menu;

pub use error::{MenuError, MenuResult};
pub use menu::{MenuItem, RenderConfig, ShellOptions, render, render_fallback, render_menu};
