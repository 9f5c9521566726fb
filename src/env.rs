//! Capability traits for the environment the theme runs in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes the store, the document root and `matchMedia` as
//! process-wide globals. Passing them in through these traits keeps the
//! controller free of web-sys so it can run against fakes and in SSR builds.

/// Persistent string key/value store (`localStorage` in the browser).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The document's root element, seen as a set of classes.
pub trait RootNode {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
}

/// System-level color-scheme preference.
pub trait ColorSchemeQuery {
    /// Whether the system reports a preference for a dark color scheme.
    fn prefers_dark(&self) -> bool;
}
