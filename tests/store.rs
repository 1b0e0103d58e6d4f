//! Integration tests for the JSON file store and the in-memory store.

use court_schedule::{
    generate_schedule, CompletionMap, JsonFileStore, MemoryStore, ScheduleStore, Variant,
};

fn completion(entries: &[(usize, usize)]) -> CompletionMap {
    let mut map = CompletionMap::new();
    for &(round, court) in entries {
        map.entry(round).or_default().insert(court);
    }
    map
}

#[test]
fn json_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedules.json");
    let schedule = generate_schedule(6, Variant::Seeded).unwrap();

    {
        let mut store = JsonFileStore::open(&path);
        assert!(store.load(6).is_none());
        assert!(store.load_completion(6).is_empty());
        store.save(6, &schedule).unwrap();
        store.save_completion(6, &completion(&[(0, 1), (2, 0)])).unwrap();
        assert!(store.saved_at(6).is_some());
    }

    let store = JsonFileStore::open(&path);
    assert_eq!(store.load(6), Some(schedule));
    assert_eq!(store.load_completion(6), completion(&[(0, 1), (2, 0)]));
    assert!(store.load(7).is_none());
}

#[test]
fn json_store_keys_by_team_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedules.json");
    let four = generate_schedule(4, Variant::FixedOpening).unwrap();
    let nine = generate_schedule(9, Variant::FixedOpening).unwrap();

    let mut store = JsonFileStore::open(&path);
    store.save(4, &four).unwrap();
    store.save(9, &nine).unwrap();
    store.save_completion(9, &completion(&[(1, 1)])).unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(store.load(4), Some(four));
    assert_eq!(store.load(9), Some(nine));
    assert!(store.load_completion(4).is_empty());
    assert_eq!(store.load_completion(9), completion(&[(1, 1)]));
}

#[test]
fn malformed_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedules.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileStore::open(&path);
    assert!(store.load(4).is_none());
    assert!(store.load_completion(4).is_empty());

    // Next save replaces the broken file with a valid one.
    let schedule = generate_schedule(4, Variant::Seeded).unwrap();
    store.save(4, &schedule).unwrap();
    assert_eq!(JsonFileStore::open(&path).load(4), Some(schedule));
}

#[test]
fn malformed_entry_reads_as_absent_without_hiding_others() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedules.json");
    let five = generate_schedule(5, Variant::LoadBalanced).unwrap();
    {
        let mut store = JsonFileStore::open(&path);
        store.save(5, &five).unwrap();
    }

    let text = std::fs::read_to_string(&path).unwrap();
    let mut doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    doc["4"] = serde_json::json!({ "schedule": 42, "completion": "nope" });
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    let store = JsonFileStore::open(&path);
    assert!(store.load(4).is_none());
    assert!(store.load_completion(4).is_empty());
    assert_eq!(store.load(5), Some(five));
}

#[test]
fn missing_file_is_created_on_first_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.json");
    let mut store = JsonFileStore::open(&path);
    assert!(!path.exists());
    store.save_completion(8, &CompletionMap::new()).unwrap();
    assert!(path.exists());
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn memory_store_round_trip() {
    let mut store = MemoryStore::new();
    let schedule = generate_schedule(10, Variant::Seeded).unwrap();
    assert!(store.load(10).is_none());
    store.save(10, &schedule).unwrap();
    store.save_completion(10, &completion(&[(3, 0)])).unwrap();
    assert_eq!(store.load(10), Some(schedule));
    assert_eq!(store.load_completion(10), completion(&[(3, 0)]));
}

#[test]
fn json_snapshot_writes_schedule_and_completion_together() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedules.json");
    let schedule = generate_schedule(7, Variant::FixedOpening).unwrap();

    let mut store = JsonFileStore::open(&path);
    store.save_snapshot(7, &schedule, &completion(&[(0, 0)])).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(doc["7"]["schedule"].is_object());
    assert!(doc["7"]["completion"].is_object());
    assert!(doc["7"]["saved_at"].is_string());

    let store = JsonFileStore::open(&path);
    assert_eq!(store.load(7), Some(schedule));
    assert_eq!(store.load_completion(7), completion(&[(0, 0)]));
}
