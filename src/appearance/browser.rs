use std::rc::Rc;
use super::{ ColorSchemeMedia, PreferenceStore };

/// Stand-in for hosts without durable storage: forgets every write.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStorage;

impl PreferenceStore for NoStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// Stand-in for hosts without media queries: always light.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMedia;

impl ColorSchemeMedia for NoMedia {
    fn matches_dark_preference(&self) -> bool {
        false
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{ LocalStorage, WindowMedia };

#[cfg(target_arch = "wasm32")]
mod web {
    use log::warn;
    use super::super::{ ColorSchemeMedia, PreferenceStore, DARK_SCHEME_QUERY };

    /// `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Option<Self> {
            let window = web_sys::window()?;
            match window.local_storage() {
                Ok(Some(storage)) => Some(Self { storage }),
                Ok(None) => None,
                Err(e) => {
                    warn!("localStorage unavailable: {:?}", e);
                    None
                }
            }
        }
    }

    impl PreferenceStore for LocalStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).unwrap_or_else(|e| {
                warn!("Failed to read {} from localStorage: {:?}", key, e);
                None
            })
        }

        fn set(&self, key: &str, value: &str) {
            if let Err(e) = self.storage.set_item(key, value) {
                warn!("Failed to write {} to localStorage: {:?}", key, e);
            }
        }

        fn remove(&self, key: &str) {
            if let Err(e) = self.storage.remove_item(key) {
                warn!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }

    /// `window.matchMedia("(prefers-color-scheme: dark)")`.
    pub struct WindowMedia {
        list: web_sys::MediaQueryList,
    }

    impl WindowMedia {
        pub fn open() -> Option<Self> {
            let window = web_sys::window()?;
            match window.match_media(DARK_SCHEME_QUERY) {
                Ok(Some(list)) => Some(Self { list }),
                Ok(None) => None,
                Err(e) => {
                    warn!("matchMedia unavailable: {:?}", e);
                    None
                }
            }
        }
    }

    impl ColorSchemeMedia for WindowMedia {
        fn matches_dark_preference(&self) -> bool {
            self.list.matches()
        }
    }
}

/// Storage and media capabilities of the running host, with the
/// no-op stand-ins substituted for anything missing.
#[cfg(target_arch = "wasm32")]
pub fn host_capabilities() -> (Rc<dyn PreferenceStore>, Rc<dyn ColorSchemeMedia>) {
    let store: Rc<dyn PreferenceStore> = match LocalStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("No persistent storage, appearance choices will not survive a reload");
            Rc::new(NoStorage)
        }
    };
    let media: Rc<dyn ColorSchemeMedia> = match WindowMedia::open() {
        Some(media) => Rc::new(media),
        None => {
            log::warn!("No color scheme media query, defaulting to light");
            Rc::new(NoMedia)
        }
    };
    (store, media)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn host_capabilities() -> (Rc<dyn PreferenceStore>, Rc<dyn ColorSchemeMedia>) {
    (Rc::new(NoStorage), Rc::new(NoMedia))
}

/// Runs `handler` whenever the system color scheme changes.
#[cfg(target_arch = "wasm32")]
pub fn on_system_scheme_change(mut handler: impl FnMut() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let list = match web_sys::window().and_then(|w| w.match_media(super::DARK_SCHEME_QUERY).ok().flatten()) {
        Some(list) => list,
        None => return,
    };

    let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |_event| handler());
    if let Err(e) = list.add_event_listener_with_callback(
        "change",
        callback.as_ref().unchecked_ref::<js_sys::Function>()
    ) {
        log::warn!("Failed to watch color scheme changes: {:?}", e);
    }
    // lives as long as the page
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_system_scheme_change(_handler: impl FnMut() + 'static) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_storage_forgets_writes() {
        let store = NoStorage;
        store.set("tuiDark", "true");
        assert!(store.get("tuiDark").is_none());
    }

    #[test]
    fn test_native_host_has_no_capabilities() {
        let (store, media) = host_capabilities();
        store.set("tuiDark", "true");
        assert!(store.get("tuiDark").is_none());
        assert!(!media.matches_dark_preference());
    }
}
