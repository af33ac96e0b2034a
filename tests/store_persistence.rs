use std::fs;
use std::path::PathBuf;

use tempfile::{TempDir, tempdir};
use trakr::idgen::SerialIds;
use trakr::store::TaskStore;

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

/// Store with deterministic ids (1, 2, 3, ...) in an isolated directory.
fn open_serial(dir: &TempDir) -> TaskStore {
    TaskStore::with_generator(Some(store_path(dir)), Box::new(SerialIds::new()))
}

#[test]
fn add_appends_pending_task() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);

    let id = store.add_task("Buy milk").unwrap().expect("task created");

    assert_eq!(store.len(), 1);
    let task = &store.tasks()[0];
    assert_eq!(task.id, id);
    assert_eq!(task.title, "Buy milk");
    assert!(!task.completed);
}

#[test]
fn add_keeps_untrimmed_title() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);

    // Only the emptiness check trims; the stored title does not.
    store.add_task("  call the plumber  ").unwrap();

    assert_eq!(store.tasks()[0].title, "  call the plumber  ");
}

#[test]
fn new_tasks_go_to_the_end() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);

    store.add_task("first").unwrap();
    store.add_task("second").unwrap();
    store.add_task("third").unwrap();

    let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn blank_add_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);

    assert!(store.add_task("").unwrap().is_none());
    assert!(store.add_task("   \t  ").unwrap().is_none());

    assert!(store.is_empty());
    // No mutation happened, so nothing was written either.
    assert!(!store_path(&dir).exists());
}

#[test]
fn toggle_is_involutive() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);
    let id = store.add_task("flip me").unwrap().unwrap();
    store.add_task("bystander").unwrap();
    let before = store.tasks().to_vec();

    assert!(store.toggle_task(id).unwrap());
    assert!(store.tasks()[0].completed);
    assert!(store.toggle_task(id).unwrap());

    assert_eq!(store.tasks(), &before[..]);
}

#[test]
fn toggle_unknown_id_is_a_noop() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);
    store.add_task("only task").unwrap();
    let before = store.tasks().to_vec();
    let on_disk_before = fs::read_to_string(store_path(&dir)).unwrap();

    assert!(!store.toggle_task(9999).unwrap());

    assert_eq!(store.tasks(), &before[..]);
    assert_eq!(fs::read_to_string(store_path(&dir)).unwrap(), on_disk_before);
}

#[test]
fn list_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);
    store.add_task("one").unwrap();
    let id = store.add_task("two").unwrap().unwrap();
    store.add_task("three").unwrap();
    store.toggle_task(id).unwrap();
    let before = store.tasks().to_vec();
    drop(store);

    let reopened = open_serial(&dir);

    assert_eq!(reopened.tasks(), &before[..]);
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempdir().unwrap();

    let store = open_serial(&dir);

    assert!(store.is_empty());
}

#[test]
fn malformed_file_falls_back_to_empty() {
    let dir = tempdir().unwrap();
    fs::write(store_path(&dir), "{ not json at all").unwrap();

    let store = open_serial(&dir);

    assert!(store.is_empty());
}

#[test]
fn wrong_shape_file_falls_back_to_empty() {
    let dir = tempdir().unwrap();
    // Valid JSON, but not a task list.
    fs::write(store_path(&dir), r#"{"id": 1, "title": "x"}"#).unwrap();

    let store = open_serial(&dir);

    assert!(store.is_empty());
}

#[test]
fn completed_state_reaches_disk() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);

    let id = store.add_task("Buy milk").unwrap().unwrap();
    store.toggle_task(id).unwrap();

    let json = fs::read_to_string(store_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let saved = value.as_array().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["title"], "Buy milk");
    assert_eq!(saved[0]["completed"], true);
}

#[test]
fn persisted_objects_have_exact_field_set() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);
    store.add_task("shape check").unwrap();

    let json = fs::read_to_string(store_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let obj = value.as_array().unwrap()[0].as_object().unwrap();

    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["completed", "id", "title"]);
    assert!(obj["id"].is_u64());
    assert!(obj["title"].is_string());
    assert!(obj["completed"].is_boolean());
}

#[test]
fn reload_never_reuses_persisted_ids() {
    let dir = tempdir().unwrap();
    let mut store = open_serial(&dir);
    store.add_task("one").unwrap();
    store.add_task("two").unwrap();
    drop(store);

    // A fresh generator would restart at 1; the store floors it to the
    // highest id already on disk.
    let mut reopened = open_serial(&dir);
    let id = reopened.add_task("three").unwrap().unwrap();

    assert_eq!(id, 3);
}

#[test]
fn fast_successive_adds_get_distinct_ids() {
    let dir = tempdir().unwrap();
    // Default clock-seeded generator; many adds within one tick.
    let mut store = TaskStore::open(Some(store_path(&dir)));
    for i in 0..50 {
        store.add_task(&format!("task {}", i)).unwrap();
    }

    let mut ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}
