//! Theme preference controller.
//!
//! Reads the stored choice once at startup, falls back to the system
//! color-scheme preference, applies the result as a marker class on the
//! document root, and persists explicit choices.
//!
//! DESIGN
//! ======
//! The marker class is the source of truth for what is shown; the store only
//! records what should be shown next session. `apply` rewrites the stored
//! entry only when one already exists, so the derived default from
//! `initialize` is shown but never persisted. Persistence starts with the
//! first explicit `choose`/`toggle`.

use crate::config::ThemeConfig;
use crate::env::{ColorSchemeQuery, KeyValueStore, RootNode};
use crate::preference::{ThemeError, ThemePreference};

pub struct ThemeController<S, R, M> {
    config: ThemeConfig,
    store: Option<S>,
    root: R,
    media: Option<M>,
}

impl<S, R, M> ThemeController<S, R, M>
where
    S: KeyValueStore,
    R: RootNode,
    M: ColorSchemeQuery,
{
    /// Build a controller. `store` is `None` when the environment has no
    /// persistent storage; `media` is `None` when it cannot answer media
    /// queries.
    #[must_use]
    pub fn new(config: ThemeConfig, store: Option<S>, root: R, media: Option<M>) -> Self {
        Self { config, store, root, media }
    }

    /// Like [`ThemeController::new`], but rejects a config that fails
    /// [`ThemeConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for an empty storage key or an
    /// unusable marker class.
    pub fn try_new(
        config: ThemeConfig,
        store: Option<S>,
        root: R,
        media: Option<M>,
    ) -> Result<Self, ThemeError> {
        config.validate()?;
        Ok(Self::new(config, store, root, media))
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    /// System preference for dark. Without a media capability this is
    /// `true`.
    #[must_use]
    pub fn prefers_dark(&self) -> bool {
        self.media.as_ref().map_or(true, ColorSchemeQuery::prefers_dark)
    }

    /// Show `theme`. Overwrites the stored entry only if one already exists.
    pub fn apply(&mut self, theme: ThemePreference) {
        self.apply_marker(theme);

        let key = &self.config.storage_key;
        if let Some(store) = self.store.as_mut() {
            if store.get(key).is_some() {
                store.set(key, theme.as_str());
            }
        }
    }

    /// Variant currently shown, read back from the marker class.
    #[must_use]
    pub fn current(&self) -> ThemePreference {
        ThemePreference::from_prefers_dark(self.root.has_class(&self.config.marker_class))
    }

    /// Apply the stored choice, or the system default when none is stored.
    ///
    /// Returns the variant applied, or `None` when there is no persistent
    /// store and the page is left as rendered. A stored value that is neither
    /// `"light"` nor `"dark"` is treated as absent: the derived default is
    /// shown and the entry is left untouched.
    pub fn initialize(&mut self) -> Option<ThemePreference> {
        let stored = self.store.as_ref()?.get(&self.config.storage_key);

        let theme = match stored.as_deref().map(str::parse::<ThemePreference>) {
            Some(Ok(theme)) => {
                self.apply(theme);
                theme
            }
            Some(Err(err)) => {
                log::warn!("ignoring stored theme: {err}");
                let theme = self.derived_default();
                self.apply_marker(theme);
                theme
            }
            None => {
                let theme = self.derived_default();
                self.apply(theme);
                theme
            }
        };

        log::debug!("theme initialized: {theme}");
        Some(theme)
    }

    /// Explicit user choice: persist `theme`, then show it.
    pub fn choose(&mut self, theme: ThemePreference) {
        let key = &self.config.storage_key;
        if let Some(store) = self.store.as_mut() {
            store.set(key, theme.as_str());
        }
        self.apply(theme);
        log::debug!("theme chosen: {theme}");
    }

    /// Switch to the other variant as an explicit choice. Returns the new
    /// variant.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.current().toggled();
        self.choose(next);
        next
    }

    fn derived_default(&self) -> ThemePreference {
        ThemePreference::from_prefers_dark(self.prefers_dark())
    }

    fn apply_marker(&mut self, theme: ThemePreference) {
        let class = &self.config.marker_class;
        match theme {
            ThemePreference::Dark => self.root.add_class(class),
            ThemePreference::Light => self.root.remove_class(class),
        }
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
