//! End-to-end tests against an in-process stub of the inventory backend.
//!
//! The stub binds an ephemeral port and serves canned JSON; the real client
//! and screens are driven against it over HTTP.

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use stockroom_client::screens::{
    CreateItemScreen, CreateSupplierScreen, DeleteItemScreen, ListItemsScreen,
    ListSuppliersScreen, LookupScreen, SearchScreen, UpdateItemsScreen,
};
use stockroom_client::{ApiClient, LookupResolver};
use stockroom_core::{messages, NewInventoryItem, NewSupplier, SearchField, SearchMode};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, stub_app()).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn fixture(id: &str, category_id: i64, name: &str) -> Value {
    json!({
        "_id": id,
        "categoryId": category_id,
        "supplierId": 7,
        "name": name,
        "quantity": 4,
        "price": 2.5
    })
}

fn stub_app() -> Router {
    Router::new()
        .route(
            "/api",
            get(|| async { Json(json!({"message": "Inventory API running"})) }),
        )
        .route("/api/inventory", get(list_items).post(create_item))
        .route("/api/inventory/search", get(search_items))
        .route(
            "/api/inventory/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/api/supplier", get(list_suppliers).post(create_supplier))
}

async fn list_items() -> Json<Value> {
    Json(json!([
        fixture("abc123id", 1, "Widget"),
        fixture("def456id", 1, "Gadget"),
    ]))
}

async fn get_item(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "abc123id" => Json(fixture("abc123id", 1, "Widget")).into_response(),
        "badid" => StatusCode::BAD_REQUEST.into_response(),
        "boom" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        // Never answers; lets tests observe a submission mid-flight.
        "stall" => std::future::pending::<Response>().await,
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn search_items(Query(params): Query<HashMap<String, String>>) -> Response {
    if let Some(category) = params.get("categoryId") {
        return match category.as_str() {
            "1" => Json(json!([
                fixture("abc123id", 1, "Widget"),
                fixture("def456id", 1, "Gadget"),
            ]))
            .into_response(),
            "2" => Json(json!([fixture("xyz789id", 2, "Sprocket")])).into_response(),
            "9" => Json(json!([])).into_response(),
            "bad" => StatusCode::BAD_REQUEST.into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        };
    }
    if let Some(name) = params.get("name") {
        if name == "Widget" {
            return Json(json!([fixture("abc123id", 1, "Widget")])).into_response();
        }
        return Json(json!([])).into_response();
    }
    if params.contains_key("supplierId") {
        return Json(json!([fixture("abc123id", 1, "Widget")])).into_response();
    }
    StatusCode::BAD_REQUEST.into_response()
}

async fn create_item(Json(body): Json<Value>) -> Response {
    if body["name"] == "explode" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let mut created = body;
    created["_id"] = json!("new123id");
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_item(Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    if id == "abc123id" && body["_id"] == json!("abc123id") {
        return Json(body).into_response();
    }
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

async fn delete_item(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "ok" => Json(json!({"message": "Inventory item deleted successfully.", "id": "ok"}))
            .into_response(),
        "silent" => Json(json!({})).into_response(),
        "badid" => StatusCode::BAD_REQUEST.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_suppliers() -> Json<Value> {
    Json(json!([{
        "_id": "sup1",
        "supplierId": 100,
        "supplierName": "Tech Supplier",
        "contactInformation": "133-456-7890",
        "address": "123 Apple Ave"
    }]))
}

async fn create_supplier(Json(body): Json<Value>) -> Response {
    if body["supplierName"] == "explode" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    (StatusCode::CREATED, Json(body)).into_response()
}

// ---- lookup ----

#[tokio::test]
async fn category_search_with_two_results_fills_the_table_only() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ByCategory, "1").await;

    assert_eq!(screen.error_message(), "");
    assert_eq!(screen.items.len(), 2);
    assert!(screen.item.is_none());
    assert!(!screen.busy);
}

#[tokio::test]
async fn category_search_with_one_result_also_fills_the_card() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ByCategory, "2").await;

    assert_eq!(screen.items.len(), 1);
    let card = screen.item.as_ref().expect("card view populated");
    assert_eq!(card.id, "xyz789id");
    assert_eq!(card, &screen.items[0]);
}

#[tokio::test]
async fn category_search_with_no_results_is_an_error_state() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ByCategory, "9").await;

    assert_eq!(screen.error_message(), messages::NO_ITEMS_FOR_CATEGORY);
    assert!(screen.items.is_empty());
    assert!(screen.item.is_none());
}

#[tokio::test]
async fn category_search_maps_400_and_404() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ByCategory, "bad").await;
    assert_eq!(screen.error_message(), messages::INVALID_CATEGORY_ID);

    screen.submit(SearchMode::ByCategory, "77").await;
    assert_eq!(screen.error_message(), messages::NO_ITEMS_FOR_CATEGORY);
}

#[tokio::test]
async fn id_search_success_yields_card_and_single_row() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ById, "abc123id").await;

    assert_eq!(screen.error_message(), "");
    assert_eq!(screen.items.len(), 1);
    let card = screen.item.as_ref().expect("card view populated");
    assert_eq!(card.id, "abc123id");
    assert_eq!(card.name, "Widget");
    assert_eq!(card, &screen.items[0]);
}

#[tokio::test]
async fn id_search_maps_the_error_statuses() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ById, "missing").await;
    assert_eq!(screen.error_message(), messages::ITEM_NOT_FOUND);
    assert!(screen.item.is_none());
    assert!(screen.items.is_empty());

    screen.submit(SearchMode::ById, "badid").await;
    assert_eq!(screen.error_message(), messages::INVALID_ITEM_ID);

    screen.submit(SearchMode::ById, "boom").await;
    assert_eq!(screen.error_message(), messages::ITEM_LOAD_FAILED);
}

#[tokio::test]
async fn busy_flag_is_set_while_a_request_is_in_flight() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());
    assert!(!screen.busy);

    // The stalled route never responds, so the submission times out with
    // the request still outstanding. Abandoning it leaves the flag as it
    // was at that moment.
    let outcome = tokio::time::timeout(
        std::time::Duration::from_millis(100),
        screen.submit(SearchMode::ById, "stall"),
    )
    .await;

    assert!(outcome.is_err());
    assert!(screen.busy);
}

#[tokio::test]
async fn id_value_is_trimmed_before_the_request() {
    let server = TestServer::spawn().await;
    let mut screen = LookupScreen::new(server.client());

    screen.submit(SearchMode::ById, "  abc123id  ").await;

    assert_eq!(screen.error_message(), "");
    assert_eq!(screen.items.len(), 1);
}

// ---- generic search ----

#[tokio::test]
async fn field_search_returns_a_list_and_never_a_card() {
    let server = TestServer::spawn().await;

    let resolver = LookupResolver::new(server.client());
    let view = resolver
        .resolve(SearchMode::ByField(SearchField::Name), "Widget")
        .await
        .unwrap();
    assert_eq!(view.items.len(), 1);
    assert!(view.item.is_none());

    let mut screen = SearchScreen::new(server.client());
    screen.submit(SearchField::Name, "Widget").await;
    assert_eq!(screen.error_message(), "");
    assert_eq!(screen.results.len(), 1);
}

#[tokio::test]
async fn field_search_with_no_matches_is_an_empty_success() {
    let server = TestServer::spawn().await;
    let mut screen = SearchScreen::new(server.client());

    screen.submit(SearchField::Name, "Nothing").await;

    assert_eq!(screen.error_message(), "");
    assert!(screen.results.is_empty());
}

// ---- create / update / delete / list ----

#[tokio::test]
async fn create_item_reports_success() {
    let server = TestServer::spawn().await;
    let mut screen = CreateItemScreen::new(server.client());

    let item = NewInventoryItem {
        category_id: 1,
        supplier_id: 7,
        name: "Widget".to_string(),
        description: Some("A widget".to_string()),
        quantity: 4,
        price: 2.5,
    };
    screen.submit(&item).await;

    assert_eq!(screen.success_message, messages::ITEM_CREATED);
    assert_eq!(screen.error_message(), "");
}

#[tokio::test]
async fn create_item_server_error_reports_the_fixed_failure() {
    let server = TestServer::spawn().await;
    let mut screen = CreateItemScreen::new(server.client());

    let item = NewInventoryItem {
        category_id: 1,
        supplier_id: 7,
        name: "explode".to_string(),
        description: None,
        quantity: 4,
        price: 2.5,
    };
    screen.submit(&item).await;

    assert_eq!(screen.error_message(), messages::ITEM_CREATE_FAILED);
    assert_eq!(screen.success_message, "");
}

#[tokio::test]
async fn update_round_trip_loads_edits_and_puts() {
    let server = TestServer::spawn().await;
    let mut screen = UpdateItemsScreen::new(server.client());

    screen.load().await;
    assert_eq!(screen.error_message(), "");
    assert_eq!(screen.items.len(), 2);

    let edited = screen.edited("abc123id", Some(9), Some(3.25)).unwrap();
    screen.update(&edited).await;

    assert_eq!(screen.success_message, messages::ITEM_UPDATED);
}

#[tokio::test]
async fn update_failure_reports_the_fixed_failure() {
    let server = TestServer::spawn().await;
    let mut screen = UpdateItemsScreen::new(server.client());

    screen.load().await;
    let mut edited = screen.edited("def456id", Some(1), None).unwrap();
    edited.id = "unknown".to_string();
    screen.update(&edited).await;

    assert_eq!(screen.error_message(), messages::ITEM_UPDATE_FAILED);
}

#[tokio::test]
async fn delete_uses_the_server_message_on_success() {
    let server = TestServer::spawn().await;
    let mut screen = DeleteItemScreen::new(server.client());

    screen.submit("ok").await;

    assert_eq!(
        screen.success_message,
        "Inventory item deleted successfully."
    );
    assert_eq!(screen.error_message(), "");
}

#[tokio::test]
async fn delete_falls_back_when_the_server_message_is_empty() {
    let server = TestServer::spawn().await;
    let mut screen = DeleteItemScreen::new(server.client());

    screen.submit("silent").await;

    assert_eq!(screen.success_message, messages::ITEM_DELETED);
}

#[tokio::test]
async fn delete_of_a_missing_item_reports_not_found() {
    let server = TestServer::spawn().await;
    let mut screen = DeleteItemScreen::new(server.client());

    screen.submit("gone").await;

    assert_eq!(screen.error_message(), messages::ITEM_NOT_FOUND);
    assert_eq!(screen.success_message, "");
}

#[tokio::test]
async fn list_items_loads_everything() {
    let server = TestServer::spawn().await;
    let mut screen = ListItemsScreen::new(server.client());

    screen.load().await;

    assert_eq!(screen.error_message(), "");
    assert_eq!(screen.items.len(), 2);
    assert_eq!(screen.items[0].name, "Widget");
}

// ---- suppliers ----

#[tokio::test]
async fn suppliers_can_be_created_and_listed() {
    let server = TestServer::spawn().await;

    let mut create = CreateSupplierScreen::new(server.client());
    create
        .submit(&NewSupplier {
            supplier_id: 100,
            supplier_name: "Tech Supplier".to_string(),
            contact_information: "133-456-7890".to_string(),
            address: "123 Apple Ave".to_string(),
        })
        .await;
    assert_eq!(create.success_message, messages::SUPPLIER_CREATED);

    let mut list = ListSuppliersScreen::new(server.client());
    list.load().await;
    assert_eq!(list.error_message(), "");
    assert_eq!(list.suppliers.len(), 1);
    assert_eq!(list.suppliers[0].supplier_name, "Tech Supplier");
}

#[tokio::test]
async fn supplier_create_failure_reports_the_fixed_failure() {
    let server = TestServer::spawn().await;
    let mut screen = CreateSupplierScreen::new(server.client());

    screen
        .submit(&NewSupplier {
            supplier_id: 100,
            supplier_name: "explode".to_string(),
            contact_information: "133-456-7890".to_string(),
            address: "123 Apple Ave".to_string(),
        })
        .await;

    assert_eq!(screen.error_message(), messages::SUPPLIER_CREATE_FAILED);
}

// ---- connectivity ----

#[tokio::test]
async fn server_message_comes_from_the_api_root() {
    let server = TestServer::spawn().await;
    let message = server.client().server_message().await.unwrap();
    assert_eq!(message, "Inventory API running");
}
