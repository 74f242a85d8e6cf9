//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result};
use navwalker::menu::{DEFAULT_ADMIN_MENU_URL, MenuHooks, RenderConfig, ShellOptions};
use navwalker::{MenuError, MenuResult};

/// Command-line renderer configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deepest level rendered, 0 = unlimited (default: 2).
    pub max_depth: usize,

    /// Tab-indent nested levels (default: true).
    pub indent: bool,

    /// Container tag around the list: "div", "nav" or empty (default: "div").
    pub container: String,

    /// Container id attribute.
    pub container_id: String,

    /// Container class attribute (default: "collapse navbar-collapse").
    pub container_class: String,

    /// List id attribute.
    pub menu_id: String,

    /// List class attribute (default: "navbar-nav").
    pub menu_class: String,

    /// Whether the viewer may configure menus, enabling the fallback link.
    pub admin: bool,

    /// Target of the fallback "Add a menu" link.
    pub admin_menu_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_depth = lookup("NAVWALKER_MAX_DEPTH")
            .unwrap_or_else(|| "2".to_string())
            .parse()
            .context("NAVWALKER_MAX_DEPTH must be a non-negative integer")?;

        let indent = parse_flag("NAVWALKER_INDENT", lookup("NAVWALKER_INDENT"), true)?;

        let container = lookup("NAVWALKER_CONTAINER").unwrap_or_else(|| "div".to_string());
        let container_id = lookup("NAVWALKER_CONTAINER_ID").unwrap_or_default();
        let container_class = lookup("NAVWALKER_CONTAINER_CLASS")
            .unwrap_or_else(|| "collapse navbar-collapse".to_string());
        let menu_id = lookup("NAVWALKER_MENU_ID").unwrap_or_default();
        let menu_class =
            lookup("NAVWALKER_MENU_CLASS").unwrap_or_else(|| "navbar-nav".to_string());

        let admin = parse_flag("NAVWALKER_ADMIN", lookup("NAVWALKER_ADMIN"), false)?;
        let admin_menu_url = lookup("NAVWALKER_ADMIN_MENU_URL")
            .unwrap_or_else(|| DEFAULT_ADMIN_MENU_URL.to_string());

        Ok(Self {
            max_depth,
            indent,
            container,
            container_id,
            container_class,
            menu_id,
            menu_class,
            admin,
            admin_menu_url,
        })
    }

    /// Render options with this site's hooks.
    pub fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::with_max_depth(self.max_depth);
        config.indent = self.indent;
        config.with_hooks(SiteHooks {
            admin: self.admin,
            admin_menu_url: self.admin_menu_url.clone(),
        })
    }

    /// Wrapper element options.
    pub fn shell(&self) -> ShellOptions {
        ShellOptions {
            container: self.container.clone(),
            container_id: self.container_id.clone(),
            container_class: self.container_class.clone(),
            menu_id: self.menu_id.clone(),
            menu_class: self.menu_class.clone(),
        }
    }
}

/// Hooks backed by the command-line configuration.
#[derive(Debug, Clone)]
struct SiteHooks {
    admin: bool,
    admin_menu_url: String,
}

impl MenuHooks for SiteHooks {
    fn has_admin_capability(&self) -> bool {
        self.admin
    }

    fn admin_menu_config_url(&self) -> String {
        self.admin_menu_url.clone()
    }
}

fn parse_flag(name: &str, value: Option<String>, default: bool) -> MenuResult<bool> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(MenuError::InvalidConfig(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
