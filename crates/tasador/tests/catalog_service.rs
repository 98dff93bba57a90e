//! Integration specifications for the catalog HTTP surface.
//!
//! Every scenario drives the public router the way a live client would, so
//! the published paths, payload shapes, and ordering guarantees are pinned at
//! the HTTP boundary rather than against internal structs.

mod common {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use tasador::catalog::{catalog_router, CatalogStore};

    pub(super) fn router() -> Router {
        catalog_router(Arc::new(CatalogStore::standard()))
    }

    pub(super) async fn get_json(router: &Router, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("request");

        let response = router
            .clone()
            .oneshot(request)
            .await
            .expect("router dispatch");

        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).expect("json")
        };

        (status, payload)
    }

    pub(super) async fn get_list(router: &Router, path: &str) -> Vec<String> {
        let (status, payload) = get_json(router, path).await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
        serde_json::from_value(payload).expect("string array")
    }
}

mod surface {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    #[tokio::test]
    async fn root_acknowledges_without_serving_data() {
        let router = router();
        let (status, payload) = get_json(&router, "/").await;

        assert_eq!(status, StatusCode::OK);
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .expect("message field");
        assert!(!message.is_empty());
        assert!(payload.as_array().is_none());
    }

    #[tokio::test]
    async fn every_category_endpoint_lists_its_values() {
        let router = router();

        assert_eq!(get_list(&router, "/currencies").await, ["USD", "$"]);
        assert_eq!(
            get_list(&router, "/operationtypes").await,
            ["Venta", "En Pozo"]
        );
        assert_eq!(get_list(&router, "/countries").await, ["Argentina"]);
        assert_eq!(get_list(&router, "/states").await, ["Capital Federal"]);

        let cities = get_list(&router, "/cities").await;
        assert_eq!(cities.len(), 57);
        assert!(cities.contains(&"Palermo".to_string()));
    }

    #[tokio::test]
    async fn repeated_calls_preserve_ordering() {
        let router = router();
        let first = get_list(&router, "/cities").await;
        let second = get_list(&router, "/cities").await;

        assert_eq!(first, second);
        assert_eq!(first[0], "Belgrano");
    }

    #[tokio::test]
    async fn values_are_duplicate_free() {
        let router = router();
        for path in ["/currencies", "/operationtypes", "/countries", "/states", "/cities"] {
            let values = get_list(&router, path).await;
            let mut deduped = values.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), values.len(), "duplicates under {path}");
        }
    }

    #[tokio::test]
    async fn unpublished_paths_are_not_found() {
        let router = router();
        let (status, _) = get_json(&router, "/neighborhoods").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
