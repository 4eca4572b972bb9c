use super::*;
use crate::storage::MemoryStore;

#[test]
fn stored_preference_absent_is_none() {
    assert_eq!(stored_preference(&MemoryStore::new()), None);
}

#[test]
fn stored_preference_reads_true_and_false() {
    let dark: MemoryStore = [(STORAGE_KEY, "true")].into_iter().collect();
    let light: MemoryStore = [(STORAGE_KEY, "false")].into_iter().collect();
    assert_eq!(stored_preference(&dark), Some(true));
    assert_eq!(stored_preference(&light), Some(false));
}

#[test]
fn read_preference_without_browser_defaults_to_light() {
    assert!(!read_preference(&MemoryStore::new()));
}

#[test]
fn toggle_persists_new_value() {
    let mut storage = MemoryStore::new();
    assert_eq!(toggle(&mut storage, false), Ok(true));
    assert_eq!(stored_preference(&storage), Some(true));
    assert_eq!(toggle(&mut storage, true), Ok(false));
    assert_eq!(stored_preference(&storage), Some(false));
}
