use smartnotes_core::{
    CollectionError, JsonFileStore, MemoryStore, NoteCollection, NoteStore, StoreError,
};
use std::fs;

fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("notes.json"))
}

#[test]
fn missing_file_loads_as_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let collection = NoteCollection::load(store_in(&dir)).unwrap();
    assert!(collection.is_empty());
}

#[test]
fn save_then_load_round_trips_ordered_texts() {
    let dir = tempfile::tempdir().unwrap();

    let mut collection = NoteCollection::load(store_in(&dir)).unwrap();
    collection.add("first").unwrap();
    collection.add("second\nwith a second line").unwrap();
    collection.add("third").unwrap();

    let reloaded = NoteCollection::load(store_in(&dir)).unwrap();
    let texts: Vec<&str> = reloaded.notes().iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second\nwith a second line", "third"]);
}

#[test]
fn file_holds_only_text_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut collection = NoteCollection::load(store_in(&dir)).unwrap();
    let id = collection.add("visible text").unwrap();
    collection.toggle_favorite(id).unwrap();

    let raw = fs::read_to_string(dir.path().join("notes.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!([{ "text": "visible text" }]));
}

#[test]
fn every_mutation_rewrites_the_file_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let mut collection = NoteCollection::load(store_in(&dir)).unwrap();
    let a = collection.add("A").unwrap();
    collection.add("B").unwrap();
    collection.delete(a).unwrap();
    let remaining = collection.notes()[0].id;
    collection.edit(remaining, "B edited").unwrap();

    let reloaded = store_in(&dir).load().unwrap();
    assert_eq!(reloaded, vec!["B edited".to_string()]);
}

#[test]
fn corrupt_json_is_an_error_not_an_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, "{ not json ]").unwrap();

    let err = NoteCollection::load(JsonFileStore::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        CollectionError::Store(StoreError::Corrupt { .. })
    ));
    // The file content must survive the failed load.
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json ]");
}

#[test]
fn wrong_shape_json_is_corrupt_too() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, r#"{"text": "an object, not an array"}"#).unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn memory_store_mirrors_saves() {
    let mut store = MemoryStore::new();
    store.save(&["one", "two"]).unwrap();
    assert_eq!(store.saved_texts(), ["one".to_string(), "two".to_string()]);
    assert_eq!(store.load().unwrap(), vec!["one", "two"]);
}
