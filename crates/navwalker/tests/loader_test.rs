#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu file loading tests, end to end through the renderer.

use std::fs;

use navwalker::MenuError;
use navwalker::loader::load_items;
use navwalker::menu::{RenderConfig, mark_active_trail, render};
use navwalker_test_utils::assert;

#[test]
fn test_load_json_and_render() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.json");
    fs::write(
        &path,
        r#"{
            "items": [
                {"id": 1, "parent_id": 0, "title": "Home", "url": "/"},
                {"id": 2, "parent_id": 0, "title": "Shop", "url": "/shop"},
                {"id": 3, "parent_id": 2, "title": "Shoes", "url": "/shop/shoes"}
            ]
        }"#,
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    assert_eq!(items.len(), 3);

    let html = render(&items, &RenderConfig::default());
    assert_eq!(assert::count(&html, "<li"), 2);
    assert::contains(&html, "class=\"dropdown-item\" id=\"menu-item-3\">Shoes</a>");
}

#[test]
fn test_load_yaml_with_active_trail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.yaml");
    fs::write(
        &path,
        "- id: shop\n  title: Shop\n  url: /shop\n  classes: [active]\n\
         - id: shoes\n  parent_id: shop\n  title: Shoes\n  url: /shop/shoes\n",
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    let items = mark_active_trail(&items, "/shop/shoes/");
    let html = render(&items, &RenderConfig::default());

    assert::contains(
        &html,
        "<li id=\"menu-item-shop\" class=\"nav-item nav-item-shop dropdown has-active\">",
    );
    assert::contains(&html, "class=\"dropdown-item active\" id=\"menu-item-shoes\"");
}

#[test]
fn test_load_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"title\": \"no id\"}]").unwrap();

    let err = load_items(&path).unwrap_err();
    assert!(matches!(err, MenuError::Json(_)));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_items(&dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, MenuError::Io { .. }));
}
