//! Menu item records and the parent → children index built from them.
//!
//! Items arrive as a flat list (typically straight out of a CMS menu table).
//! Hierarchy is expressed only through `parent_id`; the [`ChildIndex`] turns
//! that into something a depth-first walk can use.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Parent id values that mean "top level".
const TOP_LEVEL_SENTINELS: &[&str] = &["", "0"];

/// A single menu item record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier (key in the child index).
    #[serde(deserialize_with = "id_from_scalar")]
    pub id: String,

    /// Containing item, or `None` for top-level items.
    #[serde(
        default,
        deserialize_with = "optional_id_from_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,

    /// Display text.
    #[serde(default)]
    pub title: String,

    /// Link target, may be empty.
    #[serde(default)]
    pub url: String,

    /// Icon class, or the `divider` / `...header...` markers at depth 1.
    #[serde(default)]
    pub attr_title: String,

    /// Link `target` attribute.
    #[serde(default)]
    pub target: String,

    /// Link `rel` attribute (XFN).
    #[serde(default, alias = "xfn")]
    pub relationship: String,

    /// Extra CSS classes, in order.
    #[serde(default, alias = "classes")]
    pub css_classes: Vec<String>,

    /// This item is the page being viewed.
    #[serde(default)]
    pub is_current: bool,

    /// This item is an ancestor of the current item.
    #[serde(default)]
    pub is_current_ancestor: bool,

    /// This item is the direct parent of the current item.
    #[serde(default)]
    pub is_current_parent: bool,
}

impl MenuItem {
    /// Create a top-level item with the given id and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parent id with the top-level sentinels folded into `None`.
    pub fn parent_key(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !TOP_LEVEL_SENTINELS.contains(p))
    }

    /// Whether this item sits at the top of the menu.
    pub fn is_top_level(&self) -> bool {
        self.parent_key().is_none()
    }
}

/// Ids may be written as strings or integers in menu files.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<ScalarId> for String {
    fn from(id: ScalarId) -> Self {
        match id {
            ScalarId::Text(s) => s,
            ScalarId::Signed(n) => n.to_string(),
            ScalarId::Unsigned(n) => n.to_string(),
        }
    }
}

fn id_from_scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ScalarId::deserialize(deserializer).map(String::from)
}

fn optional_id_from_scalar<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<ScalarId>::deserialize(deserializer).map(|id| id.map(String::from))
}

/// Parent id → ordered children, built once per render.
///
/// Stores indices into the borrowed item slice so the walker can track which
/// records it has already emitted.
#[derive(Debug)]
pub struct ChildIndex<'a> {
    items: &'a [MenuItem],
    roots: Vec<usize>,
    root_key: Option<&'a str>,
    children: HashMap<&'a str, Vec<usize>>,
    ids: HashSet<&'a str>,
}

impl<'a> ChildIndex<'a> {
    /// Group `items` by parent, preserving input order within each group.
    ///
    /// When no item is top level, the first item's parent is taken as the
    /// root, so a slice of a larger menu still renders.
    pub fn build(items: &'a [MenuItem]) -> Self {
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut top = Vec::new();
        let mut ids = HashSet::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            if !ids.insert(item.id.as_str()) {
                warn!(id = %item.id, "duplicate menu item id");
            }
            match item.parent_key() {
                None => top.push(idx),
                Some(parent) => children.entry(parent).or_default().push(idx),
            }
        }

        let (roots, root_key) = if !top.is_empty() {
            (top, None)
        } else if let Some(parent) = items.first().and_then(MenuItem::parent_key) {
            (children.get(parent).cloned().unwrap_or_default(), Some(parent))
        } else {
            (Vec::new(), None)
        };

        Self {
            items,
            roots,
            root_key,
            children,
            ids,
        }
    }

    /// The item at `idx` in the indexed slice.
    pub fn get(&self, idx: usize) -> &'a MenuItem {
        &self.items[idx]
    }

    /// Indices of the items rendered at depth 0.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Indices of the direct children of `id`, in input order.
    pub fn children_of(&self, id: &str) -> &[usize] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether `id` has at least one child.
    pub fn has_children(&self, id: &str) -> bool {
        !self.children_of(id).is_empty()
    }

    /// Items whose parent is neither the root nor present in the list.
    pub fn orphans(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                item.parent_key()
                    .is_some_and(|p| Some(p) != self.root_key && !self.ids.contains(p))
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the index holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn child(id: &str, parent: &str) -> MenuItem {
        MenuItem {
            parent_id: Some(parent.to_string()),
            ..MenuItem::new(id, id)
        }
    }

    #[test]
    fn sentinels_mean_top_level() {
        let mut item = MenuItem::new("1", "Home");
        assert!(item.is_top_level());
        item.parent_id = Some("0".into());
        assert!(item.is_top_level());
        item.parent_id = Some(String::new());
        assert!(item.is_top_level());
        item.parent_id = Some("7".into());
        assert_eq!(item.parent_key(), Some("7"));
    }

    #[test]
    fn index_groups_children_in_input_order() {
        let items = vec![
            MenuItem::new("1", "Shop"),
            child("3", "1"),
            MenuItem::new("2", "About"),
            child("4", "1"),
        ];
        let index = ChildIndex::build(&items);

        assert_eq!(index.roots(), &[0, 2]);
        assert_eq!(index.children_of("1"), &[1, 3]);
        assert!(index.has_children("1"));
        assert!(!index.has_children("2"));
        assert!(index.children_of("missing").is_empty());
    }

    #[test]
    fn index_infers_root_from_first_item() {
        let items = vec![child("10", "5"), child("11", "5"), child("12", "10")];
        let index = ChildIndex::build(&items);

        assert_eq!(index.roots(), &[0, 1]);
        assert!(index.orphans().is_empty());
    }

    #[test]
    fn orphans_are_items_with_missing_parents() {
        let items = vec![
            MenuItem::new("1", "Home"),
            child("2", "99"),
            child("3", "2"),
        ];
        let index = ChildIndex::build(&items);

        assert_eq!(index.orphans(), vec![1]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn empty_index() {
        let index = ChildIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.roots().is_empty());
    }

    #[test]
    fn deserialize_numeric_and_string_ids() {
        let json = r#"[
            {"id": 1, "title": "Home", "url": "/"},
            {"id": "2", "parent_id": 1, "title": "Sub", "xfn": "nofollow", "classes": ["a"]},
            {"id": 3, "parent_id": null, "title": "Top"}
        ]"#;
        let items: Vec<MenuItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0].id, "1");
        assert!(items[0].is_top_level());
        assert_eq!(items[1].parent_key(), Some("1"));
        assert_eq!(items[1].relationship, "nofollow");
        assert_eq!(items[1].css_classes, vec!["a".to_string()]);
        assert!(items[2].is_top_level());
    }
}
