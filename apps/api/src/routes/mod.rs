pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::recommendation::handlers as recommendation;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/recommendations",
            post(recommendation::handle_recommendations),
        )
        .route("/api/categories", get(catalog::handle_categories))
        .route(
            "/api/sample-gifts/:category",
            get(catalog::handle_sample_gifts),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Turns a handler panic into a 500 carrying the panic message.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };
    AppError::Internal(anyhow::anyhow!(message)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::taxonomy::GiftTaxonomy;
    use crate::llm_client::{CompletionClient, LlmError};

    /// Counts calls; replies with `reply` or faults when it is `None`.
    struct CountingClient {
        calls: AtomicUsize,
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl CompletionClient for CountingClient {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply
                .map(str::to_string)
                .ok_or(LlmError::MissingApiKey)
        }
    }

    fn app(reply: Option<&'static str>) -> (Router, Arc<CountingClient>) {
        let llm = Arc::new(CountingClient {
            calls: AtomicUsize::new(0),
            reply,
        });
        let state = AppState {
            llm: llm.clone(),
            taxonomy: Arc::new(GiftTaxonomy::builtin()),
        };
        (build_router(state), llm)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/recommendations")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_interests_rejected_without_api_call() {
        let (app, llm) = app(Some("[]"));
        let (status, body) = send(
            app,
            post_json(json!({"recipient_info": "Mom", "budget": 50, "interests": ""})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Recipient info and interests are required");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_positive_budget_rejected() {
        let (app, llm) = app(None);
        let (status, body) = send(
            app,
            post_json(json!({"recipient_info": "Mom", "budget": 0, "interests": "tea"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Budget must be positive");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let (app, _) = app(None);
        let request = Request::builder()
            .method("POST")
            .uri("/api/recommendations")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_api_fault_serves_keyword_fallback() {
        let (app, llm) = app(None);
        let (status, body) = send(
            app,
            post_json(json!({
                "recipient_info": "My roommate",
                "budget": 60,
                "occasion": "Graduation",
                "interests": "books reading"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_found"], 5);
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 5);
        assert_eq!(body["recommendations"][0]["name"], "Books");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_model_json_passed_through() {
        let (app, _) = app(Some(r#"[{"name": "Pour-over Kit", "price_range": "$45"}]"#));
        let (status, body) = send(
            app,
            post_json(json!({"recipient_info": "Barista friend", "interests": "coffee"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_found"], 1);
        assert_eq!(
            body["recommendations"][0],
            json!({"name": "Pour-over Kit", "price_range": "$45"})
        );
    }

    #[tokio::test]
    async fn test_categories_lists_taxonomy_and_relationships() {
        let (app, _) = app(None);
        let (status, body) = send(app, get_request("/api/categories")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["categories"],
            json!(["tech", "fashion", "home", "hobbies", "wellness", "food"])
        );
        assert_eq!(body["relationships"][0], "Partner");
    }

    #[tokio::test]
    async fn test_sample_gifts_known_category() {
        let (app, _) = app(None);
        let (status, body) = send(app, get_request("/api/sample-gifts/wellness")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "wellness");
        assert_eq!(body["gifts"][2], "Yoga Mat");
    }

    #[tokio::test]
    async fn test_sample_gifts_unknown_category_is_404() {
        let (app, _) = app(None);
        let (status, body) = send(app, get_request("/api/sample-gifts/toys")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Category not found");
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app(None);
        let (status, body) = send(app, get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_panic_becomes_500_with_message() {
        let response = handle_panic(Box::new("taxonomy lookup failed"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "taxonomy lookup failed");
    }
}
