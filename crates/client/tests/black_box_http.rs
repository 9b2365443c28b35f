//! Drives the HTTP transport and the controller against a fake backend
//! served by axum on an ephemeral port.

mod support;

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use meatkonnex_client::notify::alerts;
use meatkonnex_client::render;
use meatkonnex_client::{
    ApiError, ClientConfig, ClientError, HttpInventoryApi, InventoryApi, InventoryFormController,
};
use meatkonnex_core::{AnimalId, MeatPartId};
use meatkonnex_inventory::{InventoryItem, NewInventory};
use serde_json::{Value, json};

use support::*;

#[derive(Clone, Default)]
struct Backend {
    inventory: Arc<Mutex<Vec<InventoryItem>>>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
}

impl Backend {
    fn seen_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(value);
    }
}

async fn list_animals(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.seen_auth(&headers);
    // Same shape as the real backend: more fields than the client reads.
    Json(json!([
        {"id": 1, "name": "Goat", "total_weight_kg": 40.0, "purchase_price_jmd": 52000.0},
        {"id": 2, "name": "Pork", "total_weight_kg": 80.0, "purchase_price_jmd": 61000.0}
    ]))
}

async fn list_meat_parts(Path(animal_id): Path<i64>) -> Json<Value> {
    let parts = match animal_id {
        1 => json!([
            {"id": 10, "animal_id": 1, "part_name": "Leg", "weight_lb": 9.5, "price_per_lb_jmd": 1400.0},
            {"id": 11, "animal_id": 1, "part_name": "Shoulder", "weight_lb": 7.0, "price_per_lb_jmd": 1400.0}
        ]),
        _ => json!([]),
    };
    Json(parts)
}

async fn list_inventory(State(backend): State<Backend>) -> Json<Vec<InventoryItem>> {
    Json(backend.inventory.lock().unwrap().clone())
}

async fn create_inventory(
    State(backend): State<Backend>,
    Json(body): Json<NewInventory>,
) -> impl IntoResponse {
    let (meat_part, animal) = match body.meat_part_id.get() {
        10 => ("Leg", "Goat"),
        11 => ("Shoulder", "Goat"),
        _ => return (StatusCode::NOT_FOUND, Json(json!({"detail": "Meat part not found"}))),
    };

    let mut inventory = backend.inventory.lock().unwrap();
    let id = inventory.len() as i64 + 1;
    inventory.push(InventoryItem {
        inventory_id: id.into(),
        meat_part: meat_part.into(),
        animal: animal.into(),
        stock_lb: body.current_stock_lb,
        seasoned: body.is_seasoned,
        location: body.location,
    });
    (StatusCode::OK, Json(json!({"id": id})))
}

fn healthy_backend(backend: Backend) -> Router {
    Router::new()
        .route("/animals", get(list_animals))
        .route("/meat_parts/:animal_id", get(list_meat_parts))
        .route("/inventory", get(list_inventory).post(create_inventory))
        .with_state(backend)
}

/// A backend that answers HTML where JSON is expected and fails everything else.
fn broken_backend() -> Router {
    Router::new()
        .route("/animals", get(|| async { "<html>maintenance</html>" }))
        .route(
            "/inventory",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        )
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn page_load_and_create_over_http() {
    let backend = Backend::default();
    let server = TestServer::spawn(healthy_backend(backend.clone())).await;
    let api = HttpInventoryApi::new(&ClientConfig::new(format!("{}/", server.base_url)));
    let controller = InventoryFormController::new(api, RecordingNotifier::default());

    let (animals, inventory) = tokio::join!(controller.load_animals(), controller.load_inventory());
    animals.unwrap();
    inventory.unwrap();
    assert_eq!(
        controller.with_state(|s| render::animal_options(s.animals()).len()),
        2
    );
    assert!(controller.with_state(|s| s.inventory().is_empty()));

    controller.load_meat_parts("1").await.unwrap();
    controller.select_meat_part("11");
    controller.set_stock("14.25");
    controller.set_seasoned("true");
    controller.set_location("Walk-in Cooler");
    controller.submit_inventory().await.unwrap();

    let rows = controller.with_state(|s| render::inventory_rows(s.inventory()));
    assert_eq!(
        rows.iter().map(|r| r.cells.clone()).collect::<Vec<_>>(),
        vec![["1", "Shoulder", "Goat", "14.25", "Yes", "Walk-in Cooler"].map(String::from)]
    );
    assert_eq!(controller.notifier().alerts(), vec![alerts::ADDED]);
}

#[tokio::test]
async fn unknown_meat_part_is_a_status_error() {
    let server = TestServer::spawn(healthy_backend(Backend::default())).await;
    let api = HttpInventoryApi::new(&ClientConfig::new(&server.base_url));

    let body = NewInventory::new(MeatPartId::new(99), 1.0, false, "Nowhere");
    let err = api.create_inventory(&body).await.unwrap_err();

    match err {
        ApiError::Status(code, text) => {
            assert_eq!(code, 404);
            assert!(text.contains("Meat part not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_numeric_stock_reaches_backend_as_null() {
    let backend = Backend::default();
    let server = TestServer::spawn(healthy_backend(backend.clone())).await;
    let api = HttpInventoryApi::new(&ClientConfig::new(&server.base_url));
    let controller = InventoryFormController::new(api, RecordingNotifier::default());

    controller.load_meat_parts("1").await.unwrap();
    controller.select_meat_part("10");
    controller.set_stock("1,5");
    let err = controller.submit_inventory().await.unwrap_err();

    // The fake backend's typed body rejects `null` for the stock field.
    assert!(matches!(err, ClientError::Api(ApiError::Status(422, _))));
    assert_eq!(controller.notifier().alerts(), vec![alerts::ADD_FAILED]);
    assert!(backend.inventory.lock().unwrap().is_empty());
    assert_eq!(controller.with_state(|s| s.form().stock_lb.clone()), "1,5");
}

#[tokio::test]
async fn empty_part_list_still_enables_selector() {
    let server = TestServer::spawn(healthy_backend(Backend::default())).await;
    let api = HttpInventoryApi::new(&ClientConfig::new(&server.base_url));

    assert!(api.list_meat_parts(AnimalId::new(2)).await.unwrap().is_empty());

    let controller = InventoryFormController::new(api, RecordingNotifier::default());
    controller.load_meat_parts("2").await.unwrap();
    let view = controller.with_state(|s| render::meat_part_select(s.meat_parts()));
    assert!(view.enabled);
    assert_eq!(view.options.len(), 1);
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let backend = Backend::default();
    let server = TestServer::spawn(healthy_backend(backend.clone())).await;

    let anonymous = HttpInventoryApi::new(&ClientConfig::new(&server.base_url));
    anonymous.list_animals().await.unwrap();
    let authed = HttpInventoryApi::new(&ClientConfig::new(&server.base_url).with_token("s3cret"));
    authed.list_animals().await.unwrap();

    assert_eq!(
        *backend.auth_headers.lock().unwrap(),
        vec![None, Some("Bearer s3cret".to_string())]
    );
}

#[tokio::test]
async fn broken_backend_failures_are_alerted() {
    let server = TestServer::spawn(broken_backend()).await;
    let api = HttpInventoryApi::new(&ClientConfig::new(&server.base_url));
    let controller = InventoryFormController::new(api, RecordingNotifier::default());

    let animals = controller.load_animals().await.unwrap_err();
    let inventory = controller.load_inventory().await.unwrap_err();

    assert!(matches!(animals, ClientError::Api(ApiError::Parse(_))));
    assert!(matches!(inventory, ClientError::Api(ApiError::Status(500, _))));
    assert_eq!(
        controller.notifier().alerts(),
        vec![alerts::ANIMALS_FAILED, alerts::INVENTORY_FAILED]
    );
    assert_eq!(controller.notifier().error_count(), 2);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Bind and immediately drop a listener to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpInventoryApi::new(&ClientConfig::new(format!("http://{addr}")));
    let err = api.list_inventory().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
