//! Navwalker test utilities.
//!
//! Helpers for integration testing: menu item fixtures, hook doubles,
//! and assertion utilities for rendered markup.

use navwalker::menu::{MenuHooks, MenuItem};

/// Create a top-level test menu item.
pub fn test_item(id: &str, title: &str) -> TestMenuItem {
    TestMenuItem {
        item: MenuItem::new(id, title),
    }
}

/// A menu item builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestMenuItem {
    item: MenuItem,
}

impl TestMenuItem {
    /// Place under a parent.
    pub fn under(mut self, parent_id: &str) -> Self {
        self.item.parent_id = Some(parent_id.to_string());
        self
    }

    /// Set the link target.
    pub fn with_url(mut self, url: &str) -> Self {
        self.item.url = url.to_string();
        self
    }

    /// Set the icon / divider / header marker.
    pub fn with_attr_title(mut self, attr_title: &str) -> Self {
        self.item.attr_title = attr_title.to_string();
        self
    }

    /// Set the link target window.
    pub fn with_target(mut self, target: &str) -> Self {
        self.item.target = target.to_string();
        self
    }

    /// Set the link relationship.
    pub fn with_rel(mut self, rel: &str) -> Self {
        self.item.relationship = rel.to_string();
        self
    }

    /// Add CSS classes.
    pub fn with_classes(mut self, classes: &[&str]) -> Self {
        self.item
            .css_classes
            .extend(classes.iter().map(|c| c.to_string()));
        self
    }

    /// Mark as the current page.
    pub fn current(mut self) -> Self {
        self.item.is_current = true;
        self
    }

    /// Mark as the parent of the current page.
    pub fn current_parent(mut self) -> Self {
        self.item.is_current_parent = true;
        self.item.is_current_ancestor = true;
        self
    }

    /// Mark as an ancestor of the current page.
    pub fn current_ancestor(mut self) -> Self {
        self.item.is_current_ancestor = true;
        self
    }

    /// Finish the builder.
    pub fn build(self) -> MenuItem {
        self.item
    }
}

impl From<TestMenuItem> for MenuItem {
    fn from(test: TestMenuItem) -> Self {
        test.build()
    }
}

/// Build a menu from test items.
pub fn menu(items: impl IntoIterator<Item = TestMenuItem>) -> Vec<MenuItem> {
    items.into_iter().map(TestMenuItem::build).collect()
}

/// Hooks for a viewer who cannot configure menus.
pub fn visitor() -> TestHooks {
    TestHooks { admin: false }
}

/// Hooks for a menu administrator.
pub fn admin() -> TestHooks {
    TestHooks { admin: true }
}

/// Hook double with a switchable admin capability.
#[derive(Debug, Clone, Copy)]
pub struct TestHooks {
    pub admin: bool,
}

impl MenuHooks for TestHooks {
    fn has_admin_capability(&self) -> bool {
        self.admin
    }
}

/// Menu fixtures.
pub mod fixtures {
    use super::{menu, test_item};
    use navwalker::menu::MenuItem;

    /// Shop dropdown (header, links, divider) plus a plain About link.
    pub fn shop_menu() -> Vec<MenuItem> {
        menu([
            test_item("1", "Home").with_url("/"),
            test_item("2", "Shop").with_url("/shop"),
            test_item("3", "Clothing")
                .under("2")
                .with_attr_title("dropdown-header"),
            test_item("4", "Shoes").under("2").with_url("/shop/shoes"),
            test_item("5", "Hats").under("2").with_url("/shop/hats"),
            test_item("6", "divider").under("2"),
            test_item("7", "Sale").under("2").with_url("/shop/sale"),
            test_item("8", "About").with_url("/about"),
        ])
    }

    /// Three levels deep: Products > Software > Editors.
    pub fn deep_menu() -> Vec<MenuItem> {
        menu([
            test_item("10", "Products").with_url("/products"),
            test_item("11", "Software")
                .under("10")
                .with_url("/products/software"),
            test_item("12", "Editors")
                .under("11")
                .with_url("/products/software/editors"),
            test_item("13", "Hardware")
                .under("10")
                .with_url("/products/hardware"),
        ])
    }
}

/// Assertion helpers for rendered markup.
pub mod assert {
    /// Number of non-overlapping occurrences of `needle`.
    pub fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    /// Assert that `open` and `close` occur equally often.
    pub fn balanced(html: &str, open: &str, close: &str) {
        let opened = count(html, open);
        let closed = count(html, close);
        assert_eq!(
            opened, closed,
            "Unbalanced markup: {opened} x '{open}' vs {closed} x '{close}'\nActual: {html}"
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{}'\nActual: {}",
            needle,
            haystack
        );
    }

    /// Assert that a string does not contain a substring.
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{}'\nActual: {}",
            needle,
            haystack
        );
    }
}
