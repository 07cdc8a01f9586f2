//! HTTP router

use crate::handlers;
use crate::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/recipes", get(handlers::recipes::list))
        .route(
            "/grocerylist/:user_id",
            get(handlers::grocery_lists::get).post(handlers::grocery_lists::create),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::storage::Database;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn test_state(strict_validation: bool) -> AppState {
        let db = Database::in_memory().await.unwrap();
        db.initialize_schema().await.unwrap();
        AppState {
            db: Arc::new(db),
            strict_validation,
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_recipes_empty() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(&app, get_request("/recipes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_seeded_recipes() {
        let state = test_state(false).await;
        seed::run(&state.db).await.unwrap();
        let app = create_app(state);

        let (status, body) = send(&app, get_request("/recipes")).await;
        assert_eq!(status, StatusCode::OK);

        let recipes = body.as_array().unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0]["name"], "Pasta");
        assert_eq!(recipes[0]["ingredients"], "Pasta, Tomato Sauce, Cheese");
        assert!(recipes[0]["id"].is_i64());
        assert_eq!(recipes[1]["name"], "Salad");
        assert_eq!(
            recipes[1]["ingredients"],
            "Lettuce, Tomato, Cucumber, Olive Oil"
        );
    }

    #[tokio::test]
    async fn test_grocery_list_not_found() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(&app, get_request("/grocerylist/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Grocery list not found" }));
    }

    #[tokio::test]
    async fn test_create_then_get_grocery_list() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(
            &app,
            post_json("/grocerylist/1", json!({ "items": "Milk, Eggs, Bread" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Grocery list created" }));

        let (status, body) = send(&app, get_request("/grocerylist/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "items": "Milk, Eggs, Bread" }));

        // Lists are per user
        let (_, body) = send(&app, get_request("/grocerylist/2")).await;
        assert_eq!(body, json!({ "message": "Grocery list not found" }));
    }

    #[tokio::test]
    async fn test_duplicate_posts_read_back_first_list() {
        let app = create_app(test_state(false).await);

        send(&app, post_json("/grocerylist/5", json!({ "items": "Apples" }))).await;
        send(&app, post_json("/grocerylist/5", json!({ "items": "Pears" }))).await;

        for _ in 0..3 {
            let (_, body) = send(&app, get_request("/grocerylist/5")).await;
            assert_eq!(body, json!({ "items": "Apples" }));
        }
    }

    #[tokio::test]
    async fn test_create_without_items_is_accepted() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(&app, post_json("/grocerylist/3", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Grocery list created" }));

        let (_, body) = send(&app, get_request("/grocerylist/3")).await;
        assert_eq!(body, json!({ "items": null }));
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_missing_items() {
        let state = test_state(true).await;
        seed::run(&state.db).await.unwrap();
        let app = create_app(state);

        let (status, body) = send(&app, post_json("/grocerylist/1", json!({}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body, json!({ "message": "items is required" }));

        let (_, body) = send(&app, get_request("/grocerylist/1")).await;
        assert_eq!(body, json!({ "message": "Grocery list not found" }));
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unknown_user() {
        let state = test_state(true).await;
        seed::run(&state.db).await.unwrap();
        let app = create_app(state);

        let (status, body) = send(
            &app,
            post_json("/grocerylist/99", json!({ "items": "Milk" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "User not found" }));

        let (status, _) = send(
            &app,
            post_json("/grocerylist/1", json!({ "items": "Milk" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        // No schema: every query fails
        let db = Database::in_memory().await.unwrap();
        let app = create_app(AppState {
            db: Arc::new(db),
            strict_validation: false,
        });

        let (status, body) = send(&app, get_request("/recipes")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Internal server error" }));

        let (status, _) = send(&app, post_json("/grocerylist/1", json!({ "items": "Milk" }))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(&app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_user_id_beyond_u32_range() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(&app, get_request("/grocerylist/4294967296")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Grocery list not found" }));

        let (status, _) = send(
            &app,
            post_json("/grocerylist/4294967296", json!({ "items": "Rice" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, get_request("/grocerylist/4294967296")).await;
        assert_eq!(body, json!({ "items": "Rice" }));

        // Only the large id owns the list
        let (_, body) = send(&app, get_request("/grocerylist/0")).await;
        assert_eq!(body, json!({ "message": "Grocery list not found" }));
    }

    #[tokio::test]
    async fn test_negative_user_id_is_rejected() {
        let app = create_app(test_state(false).await);

        let (status, body) = send(&app, get_request("/grocerylist/-1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "user_id must be a non-negative integer" })
        );

        let (status, _) = send(&app, post_json("/grocerylist/-1", json!({ "items": "Milk" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_user_id_is_rejected() {
        let app = create_app(test_state(false).await);

        let response = app
            .oneshot(get_request("/grocerylist/abc"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
