use std::fs;

use match_core::{AccessibilityPreferences, ColorBlindMode};
use match_engine::{
    ensure_state_dir, load_or_default, AtomicFileWriter, MemoryPreferenceStore, PersistError,
    PreferenceStore, RonPreferenceStore, PREFERENCES_FILENAME,
};
use tempfile::TempDir;

#[test]
fn creates_missing_state_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_state_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("prefs.ron", "hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("prefs.ron", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn write_into_a_file_path_fails() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(matches!(
        writer.write("prefs.ron", "data"),
        Err(PersistError::StateDir(_))
    ));
}

#[test]
fn ron_store_round_trips_preferences() {
    let temp = TempDir::new().unwrap();
    let store = RonPreferenceStore::new(temp.path().join("state"));

    assert_eq!(store.load().unwrap(), AccessibilityPreferences::default());

    let prefs = AccessibilityPreferences {
        high_contrast: true,
        color_blind_mode: ColorBlindMode::Protanopia,
        ..Default::default()
    };
    store.save(&prefs).unwrap();
    assert!(store.path().ends_with(PREFERENCES_FILENAME));
    assert_eq!(store.load().unwrap(), prefs);
}

#[test]
fn ron_store_merges_partial_files_over_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(PREFERENCES_FILENAME), "(large_text: true)").unwrap();
    let store = RonPreferenceStore::new(temp.path());

    let prefs = store.load().unwrap();
    assert!(prefs.large_text);
    assert!(!prefs.high_contrast);
}

#[test]
fn corrupt_file_loads_defaults() {
    match_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(PREFERENCES_FILENAME), "{{ not ron").unwrap();
    let store = RonPreferenceStore::new(temp.path());

    assert!(matches!(store.load(), Err(PersistError::Parse { .. })));
    assert_eq!(load_or_default(&store), AccessibilityPreferences::default());
}

#[test]
fn memory_store_counts_saves() {
    let store = MemoryPreferenceStore::with_saved(AccessibilityPreferences {
        reduced_motion: true,
        ..Default::default()
    });
    assert!(store.load().unwrap().reduced_motion);

    store.save(&AccessibilityPreferences::default()).unwrap();
    assert_eq!(store.save_count(), 1);
    assert!(!store.load().unwrap().reduced_motion);
}
