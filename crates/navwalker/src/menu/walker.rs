//! Depth-first menu renderer for the bar-with-dropdown navigation style.
//!
//! Output layout:
//! - depth 0: `<li class="nav-item …"><a class="nav-link" …>…</a></li>`
//! - children of a node: wrapped in `<div role="menu" class="dropdown-menu">`
//! - depth 1: `<a class="dropdown-item" …>`, or a divider / header block
//!
//! Each visit returns its own fragment and the caller concatenates, so any
//! subtree can be rendered and inspected on its own.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, trace};

use super::hooks::{DefaultHooks, LinkAttributes, MenuHooks};
use super::item::{ChildIndex, MenuItem};

/// Generated bookkeeping classes that carry no styling meaning.
///
/// # Panics
///
/// Panics if the hard-coded regex literal is invalid (impossible in practice).
#[allow(clippy::expect_used)]
static BOOKKEEPING_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:menu|nav)-item-\S+|(?:current[_-])?(?:page|menu)[_-]item(?:-\d+)?)$")
        .expect("valid regex literal")
});

/// Rendering options and hooks for one menu.
#[derive(Clone)]
pub struct RenderConfig {
    /// Deepest level rendered; 0 renders every level.
    pub max_depth: usize,
    /// Markup placed before each link element.
    pub before: String,
    /// Markup placed after each link element.
    pub after: String,
    /// Markup placed before the link text, inside the anchor.
    pub link_before: String,
    /// Markup placed after the link text, inside the anchor.
    pub link_after: String,
    /// Emit tab indentation for nested levels.
    pub indent: bool,
    hooks: Arc<dyn MenuHooks>,
}

impl RenderConfig {
    /// Default options with `max_depth` levels.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Replace the hook set.
    pub fn with_hooks(mut self, hooks: impl MenuHooks + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Share an existing hook set.
    pub fn with_shared_hooks(mut self, hooks: Arc<dyn MenuHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// The hook set used for this render.
    pub fn hooks(&self) -> &dyn MenuHooks {
        self.hooks.as_ref()
    }

    /// Whether children of a node at `depth` are rendered.
    fn descends(&self, depth: usize) -> bool {
        self.max_depth == 0 || self.max_depth > depth + 1
    }

    fn indent(&self, depth: usize) -> String {
        if self.indent {
            "\t".repeat(depth)
        } else {
            String::new()
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            before: String::new(),
            after: String::new(),
            link_before: String::new(),
            link_after: String::new(),
            indent: true,
            hooks: Arc::new(DefaultHooks),
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("max_depth", &self.max_depth)
            .field("before", &self.before)
            .field("after", &self.after)
            .field("link_before", &self.link_before)
            .field("link_after", &self.link_after)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}

/// How a node is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Separator line inside a dropdown.
    Divider,
    /// Non-interactive label inside a dropdown.
    Header,
    /// Regular link (top-level bar item or dropdown item).
    Link,
}

/// Classify `item` as it would be drawn at `depth`.
///
/// Dividers and headers only exist directly inside a dropdown (depth 1);
/// anywhere else the same markers fall through to [`NodeKind::Link`].
pub fn classify(item: &MenuItem, depth: usize) -> NodeKind {
    if depth != 1 {
        return NodeKind::Link;
    }
    if item.attr_title.eq_ignore_ascii_case("divider") || item.title.eq_ignore_ascii_case("divider")
    {
        NodeKind::Divider
    } else if item.attr_title.to_ascii_lowercase().contains("header") {
        NodeKind::Header
    } else {
        NodeKind::Link
    }
}

/// Strip bookkeeping classes, drop empties and duplicates, keep order.
pub fn clean_classes(classes: &[String]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(classes.len());
    for class in classes.iter().flat_map(|c| c.split_whitespace()) {
        if BOOKKEEPING_CLASS.is_match(class) || cleaned.iter().any(|c| c == class) {
            continue;
        }
        cleaned.push(class.to_string());
    }
    cleaned
}

/// Render `items` into navigation markup.
pub fn render(items: &[MenuItem], config: &RenderConfig) -> String {
    let index = ChildIndex::build(items);
    let mut walker = Walker::new(&index, config);

    let mut html = String::new();
    for &idx in index.roots() {
        html.push_str(&walker.visit(idx, 0));
    }

    if config.max_depth == 0 {
        // Orphans first, then whatever a parent cycle kept out of reach.
        // Already visited nodes render as empty fragments.
        let pending = index.orphans().into_iter().chain(0..index.len());
        let mut rendered = 0;
        for idx in pending {
            let fragment = walker.visit(idx, 0);
            if !fragment.is_empty() {
                rendered += 1;
            }
            html.push_str(&fragment);
        }
        if rendered > 0 {
            debug!(orphans = rendered, "rendered orphaned menu items at top level");
        }
    }

    debug!(
        items = items.len(),
        max_depth = config.max_depth,
        bytes = html.len(),
        "rendered menu"
    );
    html
}

/// One render pass over a [`ChildIndex`].
struct Walker<'i, 'a> {
    index: &'i ChildIndex<'a>,
    config: &'i RenderConfig,
    visited: Vec<bool>,
}

impl<'i, 'a> Walker<'i, 'a> {
    fn new(index: &'i ChildIndex<'a>, config: &'i RenderConfig) -> Self {
        Self {
            index,
            config,
            visited: vec![false; index.len()],
        }
    }

    /// Render one node and, depth permitting, its subtree.
    ///
    /// A node is emitted at most once per render; a second visit (duplicate
    /// ids, parent cycles) yields an empty fragment.
    fn visit(&mut self, idx: usize, depth: usize) -> String {
        if std::mem::replace(&mut self.visited[idx], true) {
            return String::new();
        }

        let index = self.index;
        let item = index.get(idx);
        let kind = classify(item, depth);
        // Children already emitted elsewhere (cycles, duplicate ids) do not
        // make this node a dropdown.
        let children = index.children_of(&item.id);
        let has_children = children.iter().any(|&child| !self.visited[child]);
        trace!(id = %item.id, depth, ?kind, has_children, "visit menu item");

        let mut html = self.start_el(item, kind, depth, has_children);

        if has_children && self.config.descends(depth) {
            html.push_str(&self.start_lvl(depth));
            for &child in children {
                html.push_str(&self.visit(child, depth + 1));
            }
            html.push_str(&self.end_lvl(depth));
        }

        html.push_str(end_el(kind, depth));
        html
    }

    fn start_lvl(&self, depth: usize) -> String {
        format!(
            "\n{}<div role=\"menu\" class=\"dropdown-menu\">\n",
            self.config.indent(depth)
        )
    }

    fn end_lvl(&self, depth: usize) -> String {
        format!("{}</div>\n", self.config.indent(depth))
    }

    fn start_el(&self, item: &MenuItem, kind: NodeKind, depth: usize, has_children: bool) -> String {
        let indent = self.config.indent(depth);
        match kind {
            NodeKind::Divider => format!("{indent}<div class=\"dropdown-divider\">"),
            NodeKind::Header => format!(
                "{indent}<h6 class=\"dropdown-header\">{}",
                self.config.hooks().escape_attribute(&item.title)
            ),
            NodeKind::Link => self.start_link(item, depth, has_children),
        }
    }

    fn start_link(&self, item: &MenuItem, depth: usize, has_children: bool) -> String {
        let config = self.config;
        let hooks = config.hooks();

        let mut classes = item.css_classes.clone();
        let mut atts = LinkAttributes::new();
        atts.set("title", item.title.as_str());
        atts.set("target", item.target.as_str());
        atts.set("rel", item.relationship.as_str());
        atts.set("href", item.url.as_str());

        let id = hooks.item_id(format!("menu-item-{}", item.id), item, config);
        let mut html = String::new();

        if depth == 0 {
            classes.push("nav-item".to_string());
            classes.push(format!("nav-item-{}", item.id));
            atts.set("class", "nav-link");

            if has_children {
                classes.push("dropdown".to_string());
                atts.set("data-hover", "show");
                atts.set("data-target", ".dropdown");
                atts.set("class", "dropdown-toggle nav-link");
                atts.set("role", "button");
                atts.set("aria-haspopup", "true");
            }

            let candidates = classes.iter().filter(|c| !c.is_empty()).cloned().collect();
            let class_names = rewrite_active(&hooks.css_classes(candidates, item, config), item);

            html.push_str("<li");
            if !id.is_empty() {
                html.push_str(&format!(" id=\"{}\"", hooks.escape_attribute(&id)));
            }
            if !class_names.is_empty() {
                html.push_str(&format!(" class=\"{}\"", hooks.escape_attribute(&class_names)));
            }
            html.push('>');
        } else {
            classes.push("dropdown-item".to_string());
            let candidates = classes.iter().filter(|c| !c.is_empty()).cloned().collect();
            atts.set("class", hooks.css_classes(candidates, item, config).join(" "));
            atts.set("id", id);
        }

        if item.is_current {
            let class = with_token(atts.get("class").unwrap_or_default(), "active");
            atts.set("class", class);
        }

        let atts = hooks.link_attributes(atts, item, config);

        let scoped = MenuItem {
            css_classes: clean_classes(&classes),
            ..item.clone()
        };

        let mut link = String::new();
        link.push_str(&config.before);
        link.push_str("<a");
        link.push_str(&atts.to_html(hooks));
        link.push('>');
        if !item.attr_title.is_empty() {
            link.push_str(&format!(
                "<span class=\"{}\"></span>&nbsp;",
                hooks.escape_attribute(&item.attr_title)
            ));
        }
        link.push_str(&config.link_before);
        link.push_str(&hooks.escape_attribute(&hooks.title(&item.title, item)));
        link.push_str(&config.link_after);
        link.push_str("</a>");
        link.push_str(&config.after);

        html.push_str(&hooks.start_element(link, &scoped, depth, config));
        html
    }
}

fn end_el(kind: NodeKind, depth: usize) -> &'static str {
    match kind {
        NodeKind::Divider => "</div>",
        NodeKind::Header => "</h6>",
        NodeKind::Link if depth == 0 => "</li>",
        NodeKind::Link => "",
    }
}

/// Drop `active` from a top-level class list, marking ancestors instead.
///
/// Keeps the parent of the current page from looking like the page itself.
fn rewrite_active(classes: &[String], item: &MenuItem) -> String {
    let tokens: Vec<&str> = classes.iter().flat_map(|c| c.split_whitespace()).collect();
    if !tokens.contains(&"active") {
        return tokens.join(" ");
    }

    let mut kept: Vec<&str> = tokens.into_iter().filter(|t| *t != "active").collect();
    if (item.is_current_ancestor || item.is_current_parent) && !kept.contains(&"has-active") {
        kept.push("has-active");
    }
    kept.join(" ")
}

/// Append `token` to a space-separated list unless already present.
fn with_token(list: &str, token: &str) -> String {
    if list.split_whitespace().any(|t| t == token) {
        return list.trim().to_string();
    }
    format!("{list} {token}").trim().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn item(id: &str, parent: Option<&str>, title: &str) -> MenuItem {
        MenuItem {
            parent_id: parent.map(str::to_string),
            ..MenuItem::new(id, title)
        }
    }

    #[test]
    fn classify_divider_by_title_or_marker() {
        let by_title = item("2", Some("1"), "DiViDeR");
        let mut by_marker = item("3", Some("1"), "Anything");
        by_marker.attr_title = "divider".into();

        assert_eq!(classify(&by_title, 1), NodeKind::Divider);
        assert_eq!(classify(&by_marker, 1), NodeKind::Divider);
    }

    #[test]
    fn classify_header_by_substring() {
        let mut header = item("2", Some("1"), "Section");
        header.attr_title = "dropdown-Header".into();
        assert_eq!(classify(&header, 1), NodeKind::Header);
    }

    #[test]
    fn classify_markers_only_at_depth_one() {
        let mut marked = item("2", Some("1"), "divider");
        assert_eq!(classify(&marked, 0), NodeKind::Link);
        assert_eq!(classify(&marked, 2), NodeKind::Link);
        marked.title = "Section".into();
        marked.attr_title = "header".into();
        assert_eq!(classify(&marked, 0), NodeKind::Link);
        assert_eq!(classify(&marked, 2), NodeKind::Link);
    }

    #[test]
    fn clean_classes_strips_bookkeeping() {
        let classes: Vec<String> = [
            "menu-item-12",
            "nav-item-12",
            "current-menu-item",
            "current_page_item",
            "page-item-4",
            "custom",
            "",
            "custom",
            "dropdown",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(clean_classes(&classes), vec!["custom", "dropdown"]);
    }

    #[test]
    fn rewrite_active_strips_whole_tokens_only() {
        let plain = item("1", None, "Home");
        let classes = vec!["nav-item".to_string(), "active".into(), "inactive-x".into()];
        assert_eq!(rewrite_active(&classes, &plain), "nav-item inactive-x");

        let mut ancestor = plain.clone();
        ancestor.is_current_ancestor = true;
        assert_eq!(rewrite_active(&classes, &ancestor), "nav-item inactive-x has-active");

        let no_active = vec!["nav-item".to_string()];
        assert_eq!(rewrite_active(&no_active, &ancestor), "nav-item");
    }

    #[test]
    fn with_token_appends_once() {
        assert_eq!(with_token("nav-link", "active"), "nav-link active");
        assert_eq!(with_token("nav-link active", "active"), "nav-link active");
        assert_eq!(with_token("", "active"), "active");
    }

    #[test]
    fn single_leaf_renders_one_list_item() {
        let mut home = item("1", None, "Home");
        home.url = "/".into();
        let html = render(&[home], &RenderConfig::default());

        assert_eq!(
            html,
            "<li id=\"menu-item-1\" class=\"nav-item nav-item-1\">\
             <a title=\"Home\" href=\"/\" class=\"nav-link\">Home</a></li>"
        );
    }

    #[test]
    fn parent_with_divider_child() {
        let shop = item("1", None, "Shop");
        let divider = item("2", Some("1"), "divider");
        let html = render(&[shop, divider], &RenderConfig::default());

        assert_eq!(
            html,
            "<li id=\"menu-item-1\" class=\"nav-item nav-item-1 dropdown\">\
             <a title=\"Shop\" class=\"dropdown-toggle nav-link\" data-hover=\"show\" \
             data-target=\".dropdown\" role=\"button\" aria-haspopup=\"true\">Shop</a>\
             \n<div role=\"menu\" class=\"dropdown-menu\">\n\
             \t<div class=\"dropdown-divider\"></div>\
             </div>\n</li>"
        );
    }

    #[test]
    fn submenu_link_carries_id_and_class() {
        let parent = item("1", None, "Shop");
        let mut child = item("2", Some("1"), "Shoes");
        child.url = "/shoes".into();
        child.is_current = true;
        let html = render(&[parent, child], &RenderConfig::default());

        assert!(html.contains(
            "<a title=\"Shoes\" href=\"/shoes\" class=\"dropdown-item active\" \
             id=\"menu-item-2\">Shoes</a>"
        ));
    }

    #[test]
    fn header_wraps_escaped_title() {
        let parent = item("1", None, "Shop");
        let mut header = item("2", Some("1"), "Kids & <Teens>");
        header.attr_title = "Header".into();
        let html = render(&[parent, header], &RenderConfig::default());

        assert!(html.contains("\t<h6 class=\"dropdown-header\">Kids &amp; &lt;Teens&gt;</h6>"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn icon_prefix_for_links() {
        let mut home = item("1", None, "Home");
        home.attr_title = "fa fa-home".into();
        let html = render(&[home], &RenderConfig::default());

        assert!(html.contains("<span class=\"fa fa-home\"></span>&nbsp;Home</a>"));
    }

    #[test]
    fn indentation_can_be_disabled() {
        let config = RenderConfig {
            indent: false,
            ..RenderConfig::default()
        };
        let html = render(
            &[item("1", None, "Shop"), item("2", Some("1"), "divider")],
            &config,
        );
        assert!(!html.contains('\t'));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(&[], &RenderConfig::default()), "");
    }
}
