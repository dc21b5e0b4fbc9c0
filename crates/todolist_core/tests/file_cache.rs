use chrono::{TimeZone, Utc};
use todolist_core::{CacheError, FileCache, Importance, TodoItem};

fn item_at(id: &str, text: &str, is_done: bool) -> TodoItem {
    let mut item = TodoItem::with_id(id, text, is_done);
    item.creation_date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    item
}

#[test]
fn upsert_appends_new_ids_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FileCache::new(dir.path().join("todos.json"));

    cache.upsert(item_at("a1", "first", false));
    cache.upsert(item_at("b2", "second", false));
    cache.upsert(item_at("c3", "third", true));

    let ids: Vec<&str> = cache.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["a1", "b2", "c3"]);
}

#[test]
fn upsert_replaces_in_place_keeping_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FileCache::new(dir.path().join("todos.json"));

    cache.upsert(item_at("a1", "first", false));
    cache.upsert(item_at("b2", "second", false));
    cache.upsert(item_at("a1", "first, revised", true));

    assert_eq!(cache.items().len(), 2);
    assert_eq!(cache.items()[0].id, "a1");
    assert_eq!(cache.items()[0].text, "first, revised");
    assert!(cache.items()[0].is_done);
    assert_eq!(cache.items()[1].id, "b2");
}

#[test]
fn remove_deletes_matching_item() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FileCache::new(dir.path().join("todos.json"));

    cache.upsert(item_at("a1", "first", false));
    cache.upsert(item_at("b2", "second", false));
    cache.remove("a1");

    assert_eq!(cache.items().len(), 1);
    assert_eq!(cache.items()[0].id, "b2");
}

#[test]
fn remove_missing_id_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FileCache::new(dir.path().join("todos.json"));

    cache.upsert(item_at("a1", "first", false));
    cache.remove("zz");

    assert_eq!(cache.items().len(), 1);
    assert_eq!(cache.items()[0].id, "a1");
}

#[test]
fn save_then_load_restores_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");

    let cache = FileCache::new(&path);
    cache.save().unwrap();

    let mut reloaded = FileCache::new(&path);
    reloaded.upsert(item_at("stale", "should vanish", false));
    reloaded.load().unwrap();

    assert!(reloaded.items().is_empty());
}

#[test]
fn save_then_load_round_trips_mixed_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");

    let mut urgent = item_at("a1", "file taxes", false);
    urgent.importance = Some(Importance::Important);
    urgent.deadline = Some(Utc.with_ymd_and_hms(2024, 4, 15, 23, 59, 59).unwrap());

    let mut plain = item_at("b2", "buy milk", true);
    plain.importance = Some(Importance::Ordinary);
    plain.modification_date = Some(Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap());

    let someday = item_at("c3", "learn the accordion", false);

    let mut cache = FileCache::new(&path);
    cache.upsert(urgent.clone());
    cache.upsert(plain.clone());
    cache.upsert(someday.clone());
    cache.save().unwrap();

    let mut reloaded = FileCache::new(&path);
    reloaded.load().unwrap();

    assert_eq!(reloaded.items().len(), 3);
    for (loaded, expected) in reloaded.items().iter().zip([&urgent, &plain, &someday]) {
        assert_eq!(loaded.id, expected.id);
        assert_eq!(loaded.text, expected.text);
        assert_eq!(loaded.importance, expected.importance);
        assert_eq!(loaded.deadline, expected.deadline);
        assert_eq!(loaded.is_done, expected.is_done);
        assert_eq!(loaded.creation_date, expected.creation_date);
        assert_eq!(loaded.modification_date, expected.modification_date);
    }
}

#[test]
fn save_replaces_prior_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");

    let mut cache = FileCache::new(&path);
    cache.upsert(item_at("a1", "first", false));
    cache.upsert(item_at("b2", "second", false));
    cache.save().unwrap();

    cache.remove("a1");
    cache.save().unwrap();

    let mut reloaded = FileCache::new(&path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items()[0].id, "b2");
}

#[test]
fn load_missing_file_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = FileCache::new(dir.path().join("absent.json"));
    cache.upsert(item_at("a1", "kept", false));

    let error = cache.load().unwrap_err();
    assert!(matches!(error, CacheError::Io(_)));
    assert_eq!(cache.items().len(), 1);
    assert_eq!(cache.items()[0].id, "a1");
}

#[test]
fn load_corrupt_file_fails_and_preserves_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.json");
    std::fs::write(&path, b"[{\"id\": \"half an it").unwrap();

    let mut cache = FileCache::new(&path);
    cache.upsert(item_at("a1", "kept", false));

    let error = cache.load().unwrap_err();
    assert!(matches!(error, CacheError::Decode(_)));
    assert_eq!(cache.items().len(), 1);
    assert_eq!(cache.items()[0].id, "a1");
}
