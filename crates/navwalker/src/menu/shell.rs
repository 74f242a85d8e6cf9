//! Outer menu markup: optional container element plus the `<ul>` list.
//!
//! Shared by the normal render path and the "Add a menu" fallback shown when
//! a site has no menu assigned yet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hooks::MenuHooks;
use super::item::MenuItem;
use super::walker::{RenderConfig, render};

/// Label of the single fallback link.
pub const FALLBACK_LABEL: &str = "Add a menu";

/// Container tags a menu may be wrapped in.
const ALLOWED_CONTAINERS: &[&str] = &["div", "nav"];

/// Wrapper element options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// Container tag (`div` or `nav`); empty means no container.
    pub container: String,
    pub container_id: String,
    pub container_class: String,
    pub menu_id: String,
    pub menu_class: String,
}

impl ShellOptions {
    fn container_tag(&self) -> Option<&str> {
        let tag = self.container.trim();
        if tag.is_empty() {
            return None;
        }
        if ALLOWED_CONTAINERS.contains(&tag) {
            Some(tag)
        } else {
            debug!(container = %tag, "ignoring unsupported menu container");
            None
        }
    }
}

/// Wrap already-rendered `<li>` markup in the menu shell.
pub fn wrap(inner: &str, shell: &ShellOptions, hooks: &dyn MenuHooks) -> String {
    let mut html = String::new();
    let container = shell.container_tag();

    if let Some(tag) = container {
        html.push('<');
        html.push_str(tag);
        html.push_str(&id_and_class(&shell.container_id, &shell.container_class, hooks));
        html.push('>');
    }

    html.push_str("<ul");
    html.push_str(&id_and_class(&shell.menu_id, &shell.menu_class, hooks));
    html.push('>');
    html.push_str(inner);
    html.push_str("</ul>");

    if let Some(tag) = container {
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
    html
}

/// Render `items` and wrap them in the menu shell.
pub fn render_menu(items: &[MenuItem], config: &RenderConfig, shell: &ShellOptions) -> String {
    wrap(&render(items, config), shell, config.hooks())
}

/// Markup for a site with no menu: an "Add a menu" link for administrators,
/// nothing for everyone else.
pub fn render_fallback(shell: &ShellOptions, config: &RenderConfig) -> String {
    let hooks = config.hooks();
    if !hooks.has_admin_capability() {
        debug!("no menu assigned and viewer cannot configure menus");
        return String::new();
    }

    let item = format!(
        "<li><a href=\"{}\">{}</a></li>",
        hooks.escape_url(&hooks.admin_menu_config_url()),
        hooks.escape_attribute(&hooks.translate(FALLBACK_LABEL)),
    );
    wrap(&item, shell, hooks)
}

fn id_and_class(id: &str, class: &str, hooks: &dyn MenuHooks) -> String {
    let mut attrs = String::new();
    if !id.is_empty() {
        attrs.push_str(&format!(" id=\"{}\"", hooks.escape_attribute(id)));
    }
    if !class.is_empty() {
        attrs.push_str(&format!(" class=\"{}\"", hooks.escape_attribute(class)));
    }
    attrs
}
