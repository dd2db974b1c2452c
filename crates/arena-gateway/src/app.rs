use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_fighter_handler, delete_fighter_handler, edit_fighter_handler, get_fighter_handler,
    health_handler, list_fighters_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/fighter",
                get(list_fighters_handler)
                    .post(create_fighter_handler)
                    .put(edit_fighter_handler),
            )
            .route(
                "/fighter/{name}",
                get(get_fighter_handler).delete(delete_fighter_handler),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_roster::{RosterService, SeqGenerator};
    use arena_storage::InMemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let repository = RosterService::builder()
            .store(Arc::new(InMemoryStore::new()))
            .generator(Arc::new(SeqGenerator::with_prefix("ft")))
            .build();
        App::router(AppState::new(Arc::new(repository)))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    // "隆" and "肯" percent-encoded as UTF-8.
    const RYU_PATH: &str = "/fighter/%E9%9A%86";
    const KEN_PATH: &str = "/fighter/%E8%82%AF";

    #[tokio::test]
    async fn health() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn list_starts_empty() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, "/fighter", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [], "code": 0, "msg": "" }));
    }

    #[tokio::test]
    async fn create_then_list_and_find() {
        let router = test_router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "name": "隆", "skill": ["波动拳"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);
        assert_eq!(body["msg"], "");
        assert_eq!(body["data"]["id"], "ft000000");
        assert_eq!(body["data"]["name"], "隆");
        assert_eq!(body["data"]["skill"], json!(["波动拳"]));
        assert!(body["data"].get("updated_at").is_none());

        let (_, listed) = send(&router, Method::GET, "/fighter", None).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 1);
        assert_eq!(listed["data"][0]["name"], "隆");

        let (status, found) = send(&router, Method::GET, RYU_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["data"], body["data"]);
    }

    #[tokio::test]
    async fn duplicate_create_is_conflict() {
        let router = test_router();
        let payload = json!({ "name": "隆", "skill": ["波动拳"] });
        send(&router, Method::POST, "/fighter", Some(payload)).await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "name": "隆", "skill": ["升龙拳"] })),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], 409);
        assert!(body.get("data").is_none());

        let (_, listed) = send(&router, Method::GET, "/fighter", None).await;
        assert_eq!(listed["data"][0]["skill"], json!(["波动拳"]));
    }

    #[tokio::test]
    async fn invalid_create_is_bad_request() {
        let router = test_router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "name": "Ken", "skill": ["Hadoken", "kick-"] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["msg"].as_str().unwrap().starts_with("skill[1]"));
    }

    #[tokio::test]
    async fn missing_name_is_bad_request() {
        let router = test_router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "skill": ["Hadoken"] })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["msg"].as_str().unwrap().starts_with("name"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let router = test_router();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/fighter")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported_media_type() {
        let router = test_router();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/fighter")
            .body(Body::from(r#"{"name":"Ken","skill":[]}"#))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 415);

        let (_, listed) = send(&router, Method::GET, "/fighter", None).await;
        assert_eq!(listed["data"], json!([]));
    }

    #[tokio::test]
    async fn find_missing_is_not_found() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, KEN_PATH, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn edit_replaces_skills() {
        let router = test_router();
        let (_, created) = send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "name": "肯", "skill": ["波动拳"] })),
        )
        .await;

        let (status, body) = send(
            &router,
            Method::PUT,
            "/fighter",
            Some(json!({ "name": "肯", "skill": ["升龙拳", "旋风腿"] })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], created["data"]["id"]);
        assert_eq!(body["data"]["created_at"], created["data"]["created_at"]);
        assert_eq!(body["data"]["skill"], json!(["升龙拳", "旋风腿"]));
        assert!(body["data"]["updated_at"].is_string());
    }

    #[tokio::test]
    async fn edit_missing_is_not_found() {
        let router = test_router();

        let (status, _) = send(
            &router,
            Method::PUT,
            "/fighter",
            Some(json!({ "name": "肯", "skill": ["升龙拳"] })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_then_find() {
        let router = test_router();
        send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "name": "肯", "skill": ["升龙拳"] })),
        )
        .await;

        let (status, body) = send(&router, Method::DELETE, KEN_PATH, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "肯");

        let (status, _) = send(&router, Method::GET, KEN_PATH, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::DELETE, KEN_PATH, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn path_names_are_decoded() {
        let router = test_router();
        send(
            &router,
            Method::POST,
            "/fighter",
            Some(json!({ "name": "Chun Li", "skill": [] })),
        )
        .await;

        let (status, body) = send(&router, Method::GET, "/fighter/Chun%20Li", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "Chun Li");
    }
}
