use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use super::domain::CategoryName;
use super::store::CatalogStore;

/// Router builder exposing the read-only catalog surface.
///
/// Every list endpoint answers with the full ordered value set as a JSON
/// string array; the root path only acknowledges that the service is up.
pub fn catalog_router(store: Arc<CatalogStore>) -> Router {
    Router::new()
        .route("/", get(acknowledge))
        .route(CategoryName::Currency.route(), get(currencies))
        .route(CategoryName::OperationType.route(), get(operation_types))
        .route(CategoryName::Country.route(), get(countries))
        .route(CategoryName::State.route(), get(states))
        .route(CategoryName::City.route(), get(cities))
        .with_state(store)
}

async fn acknowledge() -> Json<serde_json::Value> {
    Json(json!({ "message": "parameter catalog is up and serving reference data" }))
}

fn listing(store: &CatalogStore, name: CategoryName) -> Json<Vec<String>> {
    Json(store.values(name).to_vec())
}

async fn currencies(State(store): State<Arc<CatalogStore>>) -> Json<Vec<String>> {
    listing(&store, CategoryName::Currency)
}

async fn operation_types(State(store): State<Arc<CatalogStore>>) -> Json<Vec<String>> {
    listing(&store, CategoryName::OperationType)
}

async fn countries(State(store): State<Arc<CatalogStore>>) -> Json<Vec<String>> {
    listing(&store, CategoryName::Country)
}

async fn states(State(store): State<Arc<CatalogStore>>) -> Json<Vec<String>> {
    listing(&store, CategoryName::State)
}

async fn cities(State(store): State<Arc<CatalogStore>>) -> Json<Vec<String>> {
    listing(&store, CategoryName::City)
}
