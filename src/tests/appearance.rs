use std::rc::Rc;
use crate::appearance::{ AppearancePreference, FixedMedia, MemoryStore, PreferenceSource };
use super::common;

/// A fresh preference over the same storage, as after a page reload.
fn reload(store: &MemoryStore, media: &FixedMedia) -> AppearancePreference {
    AppearancePreference::new(Rc::new(store.clone()), Rc::new(media.clone()))
}

#[test]
fn test_first_start_follows_dark_system() {
    common::setup();
    let pref = reload(&MemoryStore::default(), &FixedMedia::new(true));

    assert!(pref.get());
}

#[test]
fn test_set_survives_restart() {
    common::setup();
    for value in [true, false] {
        let store = MemoryStore::default();
        let media = FixedMedia::new(!value);

        let mut pref = reload(&store, &media);
        pref.set(value);
        assert_eq!(pref.get(), value);

        let restarted = reload(&store, &media);
        assert_eq!(restarted.get(), value);
        assert_eq!(restarted.source(), PreferenceSource::Stored);
    }
}

#[test]
fn test_stored_light_beats_dark_system_after_restart() {
    common::setup();
    let store = MemoryStore::default();
    let media = FixedMedia::new(true);
    reload(&store, &media).set(false);

    let restarted = reload(&store, &media);

    assert!(!restarted.get());
}

#[test]
fn test_reset_after_dark_choice_with_light_system() {
    common::setup();
    let store = MemoryStore::default();
    let media = FixedMedia::new(false);
    let mut pref = reload(&store, &media);

    pref.set(true);
    pref.reset();

    assert!(!pref.get());
    assert!(!pref.get());
    assert!(!reload(&store, &media).get());
}

#[test]
fn test_reset_samples_signal_at_reset_time() {
    common::setup();
    let store = MemoryStore::default();
    let media = FixedMedia::new(false);
    let mut pref = reload(&store, &media);
    pref.set(false);

    media.set_dark(true);
    pref.reset();
    media.set_dark(false);

    assert!(pref.get());
}
