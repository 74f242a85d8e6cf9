//! Extension points consulted while a menu is rendered.
//!
//! Every method has a default, so an implementation only overrides what it
//! needs. Hooks must not keep per-render state: one [`RenderConfig`] (and
//! the hooks it holds) may serve many renders at once.

use super::escape;
use super::item::MenuItem;
use super::walker::RenderConfig;

/// Default target of the "Add a menu" fallback link.
pub const DEFAULT_ADMIN_MENU_URL: &str = "/admin/structure/menu";

/// Caller-supplied rewrites applied during rendering.
pub trait MenuHooks: Send + Sync {
    /// Escape a value for a double-quoted attribute.
    fn escape_attribute(&self, value: &str) -> String {
        escape::escape_attribute(value)
    }

    /// Clean a link target for an `href` attribute.
    fn escape_url(&self, url: &str) -> String {
        escape::escape_url(url)
    }

    /// Override the markup id of an item (default `menu-item-<id>`).
    fn item_id(&self, default_id: String, _item: &MenuItem, _config: &RenderConfig) -> String {
        default_id
    }

    /// Add, remove or reorder classes before they are joined.
    fn css_classes(
        &self,
        classes: Vec<String>,
        _item: &MenuItem,
        _config: &RenderConfig,
    ) -> Vec<String> {
        classes
    }

    /// Add, override or remove link attributes before escaping.
    fn link_attributes(
        &self,
        attributes: LinkAttributes,
        _item: &MenuItem,
        _config: &RenderConfig,
    ) -> LinkAttributes {
        attributes
    }

    /// Transform display text before it is escaped and wrapped.
    fn title(&self, title: &str, _item: &MenuItem) -> String {
        title.to_string()
    }

    /// Translate fixed interface text such as the fallback label.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    /// Last-chance rewrite of one link element's markup.
    fn start_element(
        &self,
        markup: String,
        _item: &MenuItem,
        _depth: usize,
        _config: &RenderConfig,
    ) -> String {
        markup
    }

    /// Whether the viewer may configure menus. Gates the fallback output.
    fn has_admin_capability(&self) -> bool {
        false
    }

    /// Where the fallback "Add a menu" link points.
    fn admin_menu_config_url(&self) -> String {
        DEFAULT_ADMIN_MENU_URL.to_string()
    }
}

/// Hooks with every default left in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl MenuHooks for DefaultHooks {}

/// Ordered link attributes.
///
/// Setting an existing name replaces its value in place, so emission order
/// follows first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkAttributes {
    entries: Vec<(String, String)>,
}

impl LinkAttributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, keeping its position if already set.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Remove `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Iterate `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of attributes, empty values included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as ` name="value"` pairs, skipping empty values.
    ///
    /// `href` goes through the URL escaper, everything else through the
    /// attribute escaper.
    pub fn to_html(&self, hooks: &dyn MenuHooks) -> String {
        self.iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| {
                let escaped = if name == "href" {
                    hooks.escape_url(value)
                } else {
                    hooks.escape_attribute(value)
                };
                format!(" {name}=\"{escaped}\"")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut atts = LinkAttributes::new();
        atts.set("title", "Home");
        atts.set("class", "nav-link");
        atts.set("href", "/");
        atts.set("class", "dropdown-toggle nav-link");

        let names: Vec<&str> = atts.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["title", "class", "href"]);
        assert_eq!(atts.len(), 3);
        assert_eq!(atts.get("class"), Some("dropdown-toggle nav-link"));
    }

    #[test]
    fn remove_attribute() {
        let mut atts = LinkAttributes::new();
        atts.set("rel", "nofollow");
        assert_eq!(atts.remove("rel"), Some("nofollow".to_string()));
        assert_eq!(atts.remove("rel"), None);
        assert!(atts.is_empty());
    }

    #[test]
    fn to_html_skips_empty_and_escapes() {
        let mut atts = LinkAttributes::new();
        atts.set("title", "Fish & \"Chips\"");
        atts.set("target", "");
        atts.set("href", "/menu?a=1&b=2");

        assert_eq!(
            atts.to_html(&DefaultHooks),
            " title=\"Fish &amp; &quot;Chips&quot;\" href=\"/menu?a=1&#038;b=2\""
        );
    }

    #[test]
    fn default_hooks_deny_admin() {
        assert!(!DefaultHooks.has_admin_capability());
        assert_eq!(DefaultHooks.admin_menu_config_url(), DEFAULT_ADMIN_MENU_URL);
        assert_eq!(DefaultHooks.translate("Add a menu"), "Add a menu");
    }
}
