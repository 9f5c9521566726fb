//! Browser bindings for the theme controller.
//!
//! Wraps `localStorage`, the `<html>` element's class list and `matchMedia`
//! in the capability traits, and provides the startup entry points. Requires
//! a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Browser calls that throw (storage quota, privacy modes, detached
//! documents) are logged and dropped. A theme that fails to persist is not
//! worth interrupting startup for.

use wasm_bindgen::prelude::*;
use web_sys::{Element, MediaQueryList, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::env::{ColorSchemeQuery, KeyValueStore, RootNode};
use crate::preference::ThemePreference;

/// Controller wired to the live page.
pub type BrowserThemeController = ThemeController<LocalStorage, DocumentRoot, MatchMedia>;

/// `window.localStorage`.
pub struct LocalStorage(Storage);

impl LocalStorage {
    /// `None` when storage is absent or access throws.
    #[must_use]
    pub fn from_window(window: &Window) -> Option<Self> {
        window.local_storage().ok().flatten().map(Self)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.0.set_item(key, value) {
            log::warn!("failed to persist {key}={value}: {err:?}");
        }
    }
}

/// The document's `<html>` element.
pub struct DocumentRoot(Element);

impl DocumentRoot {
    #[must_use]
    pub fn from_window(window: &Window) -> Option<Self> {
        window.document().and_then(|doc| doc.document_element()).map(Self)
    }
}

impl RootNode for DocumentRoot {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&mut self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("failed to add class {class}: {err:?}");
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("failed to remove class {class}: {err:?}");
        }
    }
}

/// Result of `window.matchMedia(query)`.
pub struct MatchMedia(MediaQueryList);

impl MatchMedia {
    /// `None` when `matchMedia` is missing or rejects the query.
    #[must_use]
    pub fn from_window(window: &Window, query: &str) -> Option<Self> {
        window.match_media(query).ok().flatten().map(Self)
    }
}

impl ColorSchemeQuery for MatchMedia {
    fn prefers_dark(&self) -> bool {
        self.0.matches()
    }
}

/// Build a controller for the current page. `None` without a window or
/// document, or when `config` fails validation.
pub fn controller(config: &ThemeConfig) -> Option<BrowserThemeController> {
    let window = web_sys::window()?;
    let root = DocumentRoot::from_window(&window)?;
    let store = LocalStorage::from_window(&window);
    let media = MatchMedia::from_window(&window, &config.media_query);
    match ThemeController::try_new(config.clone(), store, root, media) {
        Ok(controller) => Some(controller),
        Err(err) => {
            log::warn!("theme disabled: {err}");
            None
        }
    }
}

/// Apply the stored or system theme to the page using `config`.
pub fn init_with(config: &ThemeConfig) -> Option<ThemePreference> {
    controller(config)?.initialize()
}

/// Apply the stored or system theme with the default config. Call once before
/// mounting the UI.
pub fn init() -> Option<ThemePreference> {
    init_with(&ThemeConfig::default())
}

/// Explicit choice from UI code, persisted under `config.storage_key`.
pub fn choose_with(config: &ThemeConfig, theme: ThemePreference) -> Option<ThemePreference> {
    let mut controller = controller(config)?;
    controller.choose(theme);
    Some(theme)
}

/// Explicit choice with the default config.
pub fn choose(theme: ThemePreference) -> Option<ThemePreference> {
    choose_with(&ThemeConfig::default(), theme)
}

/// Explicit toggle from UI code using `config`. Returns the new variant.
pub fn toggle_with(config: &ThemeConfig) -> Option<ThemePreference> {
    controller(config).map(|mut c| c.toggle())
}

/// Explicit toggle with the default config. Pages started with
/// [`init_with`] must toggle through [`toggle_with`] and the same config.
pub fn toggle() -> Option<ThemePreference> {
    toggle_with(&ThemeConfig::default())
}

/// WASM start hook: console logging, panic hook, then [`init`].
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    init();
}
