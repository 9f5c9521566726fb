//! # theme
//!
//! Light/dark theme preference for the web client.
//!
//! Decides whether the page renders light or dark, derives a default from the
//! system color-scheme preference when nothing was persisted, applies the
//! choice as a marker class on the document root, and persists explicit
//! choices in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page and the browser store are reached only through the capability
//! traits in [`env`]. The `hydrate` feature wires them to web-sys; without it
//! the crate is plain Rust and runs against the in-memory implementations in
//! [`memory`]. The mounting code calls `browser::init` (or lets
//! `browser::start` run) before rendering so the first paint already has
//! the right theme.

pub mod config;
pub mod controller;
pub mod env;
pub mod memory;
pub mod preference;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use env::{ColorSchemeQuery, KeyValueStore, RootNode};
pub use preference::{ThemeError, ThemePreference};
