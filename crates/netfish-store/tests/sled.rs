use netfish_store::{LocalStorage, SledStore, Storage};
use serde_json::{Value, json};

fn temp_db() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("netfish-test-sled-")
        .tempdir()
        .expect("Failed to create temp dir")
}

#[test]
fn values_outlive_the_handle() {
    let dir = temp_db();
    let path = dir.path().join("db");

    {
        let storage = LocalStorage::new(SledStore::open(&path).expect("open db"));
        storage.set_item("session", &json!({"user": "ada", "ttl": 60})).unwrap();
        storage.backend().flush().unwrap();
    }

    let storage = LocalStorage::new(SledStore::open(&path).expect("reopen db"));
    let session: Option<Value> = storage.get_item("session").unwrap();
    assert_eq!(session, Some(json!({"user": "ada", "ttl": 60})));
}

#[test]
fn get_all_items_lists_every_key() {
    let storage = LocalStorage::new(SledStore::temporary().expect("temporary db"));
    storage.set_item("one", &1).unwrap();
    storage.set_item("two", &json!({"n": 2})).unwrap();
    storage.backend().set("raw", "<html>").unwrap();

    let all = storage.get_all_items().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all["one"], json!(1));
    assert_eq!(all["two"], json!({"n": 2}));
    assert_eq!(all["raw"], json!("<html>"));
}

#[test]
fn overwrite_replaces_previous_value() {
    let storage = LocalStorage::new(SledStore::temporary().expect("temporary db"));
    storage.set_item("k", &"first").unwrap();
    storage.set_item("k", &"second").unwrap();

    assert_eq!(storage.get_item::<String>("k").unwrap().as_deref(), Some("second"));
    assert_eq!(storage.backend().keys().unwrap(), ["k"]);
}
