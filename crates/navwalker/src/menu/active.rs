//! Marks the active trail (current item, its parent and ancestors) from the
//! URL being viewed.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::item::MenuItem;

/// Copy of `items` with the current-page flags recomputed for `current_url`.
///
/// Any flags already present on the input are cleared first. Matching ignores
/// a trailing slash and the fragment.
pub fn mark_active_trail(items: &[MenuItem], current_url: &str) -> Vec<MenuItem> {
    let mut marked: Vec<MenuItem> = items
        .iter()
        .map(|item| MenuItem {
            is_current: false,
            is_current_parent: false,
            is_current_ancestor: false,
            ..item.clone()
        })
        .collect();

    let Some(target) = normalize_url(current_url) else {
        return marked;
    };

    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        by_id.entry(item.id.as_str()).or_insert(idx);
    }
    let parent_of = |idx: usize| {
        items[idx]
            .parent_key()
            .and_then(|p| by_id.get(p))
            .copied()
    };

    let mut current = 0;
    for (idx, item) in items.iter().enumerate() {
        if normalize_url(&item.url).as_deref() != Some(target.as_str()) {
            continue;
        }
        current += 1;
        marked[idx].is_current = true;

        let mut seen = HashSet::from([idx]);
        let mut parent = parent_of(idx);
        let mut direct = true;
        while let Some(p) = parent {
            if !seen.insert(p) {
                warn!(id = %items[p].id, "cycle in menu parent links");
                break;
            }
            if direct {
                marked[p].is_current_parent = true;
                direct = false;
            }
            marked[p].is_current_ancestor = true;
            parent = parent_of(p);
        }
    }

    debug!(url = %target, current, "marked active menu trail");
    marked
}

fn normalize_url(url: &str) -> Option<String> {
    let without_fragment = url.trim().split('#').next().unwrap_or_default();
    let trimmed = without_fragment.trim_end_matches('/');
    if trimmed.is_empty() {
        if without_fragment.starts_with('/') {
            return Some("/".to_string());
        }
        return None;
    }
    Some(trimmed.to_string())
}
