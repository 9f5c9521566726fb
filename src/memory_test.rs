use super::*;

#[test]
fn store_get_returns_none_for_missing_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("dark"), None);
    assert!(store.is_empty());
}

#[test]
fn store_set_overwrites_existing_value() {
    let mut store = MemoryStore::with_entry("dark", "light");
    store.set("dark", "dark");
    assert_eq!(store.get("dark").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn root_add_and_remove_are_idempotent() {
    let mut root = MemoryRoot::new();
    root.add_class("dark");
    root.add_class("dark");
    assert!(root.has_class("dark"));
    assert_eq!(root.class_name(), "dark");

    root.remove_class("dark");
    root.remove_class("dark");
    assert!(!root.has_class("dark"));
    assert_eq!(root.class_name(), "");
}

#[test]
fn root_keeps_unrelated_classes() {
    let mut root = MemoryRoot::new();
    root.add_class("app");
    root.add_class("dark");
    root.remove_class("dark");
    assert_eq!(root.class_name(), "app");
}

#[test]
fn fixed_color_scheme_reports_its_value() {
    assert!(FixedColorScheme(true).prefers_dark());
    assert!(!FixedColorScheme(false).prefers_dark());
}
