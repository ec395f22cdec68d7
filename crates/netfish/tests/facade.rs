use netfish::{
    Config, Error, FetchError, MemoryStore, Netfish, RequestDescriptor, StoreSetting, Transport,
    TransportResponse, ValidationError, object, text,
};
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
#[error("offline")]
struct Offline;

/// Serves the same JSON document for every request.
struct StaticTransport(&'static str);

struct StaticResponse(&'static str);

impl TransportResponse for StaticResponse {
    type Error = Offline;

    fn status(&self) -> u16 {
        200
    }

    async fn bytes(self) -> Result<Vec<u8>, Offline> {
        Ok(self.0.as_bytes().to_vec())
    }
}

impl Transport for StaticTransport {
    type Error = Offline;
    type Response = StaticResponse;

    async fn send(&self, _: RequestDescriptor) -> Result<StaticResponse, Offline> {
        Ok(StaticResponse(self.0))
    }
}

#[tokio::test]
async fn fetched_json_can_be_stored_and_read_back() {
    let netfish = Netfish::new(
        StaticTransport(r#"{"id": 1, "title": "buy milk", "done": false}"#),
        MemoryStore::new(),
    );

    let todo = netfish.get("https://api.dev/todos/1").await.unwrap();
    netfish.set_item("todo", &todo).unwrap();

    let stored: Option<Value> = netfish.get_item("todo").unwrap();
    assert_eq!(stored, Some(todo.clone()));

    let all = netfish.get_all_items().unwrap();
    assert_eq!(Value::Object(all), json!({"todo": todo}));
}

#[tokio::test]
async fn validation_failures_surface_as_invalid() {
    let netfish = Netfish::new(StaticTransport("{}"), MemoryStore::new());

    let err = netfish.post("localhost/api", &json!({})).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Fetch(FetchError::Invalid(ValidationError::InvalidUrl))
    ));

    let err = netfish.set_item("k", &Value::Null).unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert_eq!(netfish.get_item::<Value>("k").unwrap(), None);
}

#[test]
fn config_selects_store() {
    let dir = tempfile::Builder::new()
        .prefix("netfish-test-facade-")
        .tempdir()
        .expect("Failed to create temp dir");

    let config = Config {
        store: StoreSetting {
            path: Some(dir.path().join("store")),
        },
        ..Config::default()
    };
    let netfish = Netfish::from_config(config).unwrap();
    netfish.set_item("persisted", &[1, 2, 3]).unwrap();
    assert_eq!(netfish.get_item::<Vec<u8>>("persisted").unwrap(), Some(vec![1, 2, 3]));

    let in_memory = Netfish::from_config(Config::default()).unwrap();
    assert!(in_memory.get_all_items().unwrap().is_empty());
}

#[test]
fn helpers_are_reexported() {
    let users = json!({"ann": 31, "bob": 25, "cid": 31});
    assert_eq!(object::has_duplicate_values(&users), Ok(true));

    let adults = object::filter(&users, Some(&|v: &Value| v.as_u64() > Some(30))).unwrap();
    assert_eq!(adults, json!({"ann": 31, "cid": 31}));

    assert_eq!(text::remove_spaces(&text::capitalize("hi.  there")), "Hi. There");
}
