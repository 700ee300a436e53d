mod browser;
mod memory;

use std::fmt::{ Display, Formatter };
use std::rc::Rc;
use log::{ info, warn };
use crate::utils::ThemeState;

pub use browser::{ host_capabilities, on_system_scheme_change, NoMedia, NoStorage };
#[cfg(target_arch = "wasm32")]
pub use browser::{ LocalStorage, WindowMedia };
pub use memory::{ FixedMedia, MemoryStore };

/// Storage key under which an explicit dark/light choice is persisted.
pub const DARK_MODE_KEY: &str = "tuiDark";

/// Media query describing the operating system's dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Durable key-value storage provided by the host.
///
/// Implementations swallow their own failures; a host without storage
/// behaves like an always-empty store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Read-only access to the system color scheme signal.
pub trait ColorSchemeMedia {
    fn matches_dark_preference(&self) -> bool;
}

/// Which source produced the current appearance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceSource {
    Stored,
    System,
}

impl Display for PreferenceSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceSource::Stored => write!(f, "stored"),
            PreferenceSource::System => write!(f, "system"),
        }
    }
}

/// Resolved dark/light preference.
///
/// An explicit choice wins and is written through to the store. Without one,
/// the value follows the system signal sampled at construction or reset.
pub struct AppearancePreference {
    store: Rc<dyn PreferenceStore>,
    media: Rc<dyn ColorSchemeMedia>,
    is_dark: bool,
    source: PreferenceSource,
}

impl AppearancePreference {
    pub fn new(store: Rc<dyn PreferenceStore>, media: Rc<dyn ColorSchemeMedia>) -> Self {
        let (is_dark, source) = match read_stored(store.as_ref()) {
            Some(value) => (value, PreferenceSource::Stored),
            None => (media.matches_dark_preference(), PreferenceSource::System),
        };
        info!("Appearance resolved to {} from {} preference", mode_name(is_dark), source);

        Self {
            store,
            media,
            is_dark,
            source,
        }
    }

    /// Light, system-sourced preference that touches no host capability.
    /// Server render and the first client render both start here so the
    /// hydrated markup matches.
    pub fn detached() -> Self {
        Self::new(Rc::new(NoStorage), Rc::new(NoMedia))
    }

    /// Builds the preference from whatever the current host offers.
    pub fn from_host() -> Self {
        let (store, media) = host_capabilities();
        Self::new(store, media)
    }

    pub fn get(&self) -> bool {
        self.is_dark
    }

    pub fn source(&self) -> PreferenceSource {
        self.source
    }

    pub fn set(&mut self, value: bool) {
        self.is_dark = value;
        self.source = PreferenceSource::Stored;
        self.store.set(DARK_MODE_KEY, if value { "true" } else { "false" });
        info!("Appearance set to {}", mode_name(value));
    }

    pub fn toggle(&mut self) {
        let next = !self.is_dark;
        self.set(next);
    }

    /// Drops the explicit choice and goes back to the system signal.
    pub fn reset(&mut self) {
        self.store.remove(DARK_MODE_KEY);
        self.is_dark = self.media.matches_dark_preference();
        self.source = PreferenceSource::System;
        info!("Appearance reset to system preference ({})", mode_name(self.is_dark));
    }

    /// Re-samples the system signal unless an explicit choice is active.
    /// Returns whether the resolved value changed.
    pub fn follow_system(&mut self) -> bool {
        if self.source == PreferenceSource::Stored {
            return false;
        }
        let sampled = self.media.matches_dark_preference();
        let changed = sampled != self.is_dark;
        self.is_dark = sampled;
        changed
    }

    pub fn theme(&self) -> ThemeState {
        ThemeState { is_dark: self.is_dark }
    }
}

fn read_stored(store: &dyn PreferenceStore) -> Option<bool> {
    let raw = store.get(DARK_MODE_KEY)?;
    match serde_json::from_str::<bool>(raw.trim()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring unreadable {} value {:?}: {}", DARK_MODE_KEY, raw, e);
            None
        }
    }
}

fn mode_name(is_dark: bool) -> &'static str {
    if is_dark { "dark" } else { "light" }
}
