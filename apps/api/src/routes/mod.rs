pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler).post(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::generation::generator::tests::FakeGenerator;
    use crate::llm_client::TextGenerator;

    fn app_with(generator: Option<Arc<dyn TextGenerator>>) -> Router {
        build_router(AppState { generator })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_generate(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_answers_get_and_post() {
        for method in ["GET", "POST"] {
            let request = Request::builder()
                .method(method)
                .uri("/")
                .body(Body::empty())
                .unwrap();
            let (status, body) = send(app_with(None), request).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Backend");
        }
    }

    #[tokio::test]
    async fn test_health_reports_missing_credentials() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app_with(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["gemini_configured"], false);
    }

    #[tokio::test]
    async fn test_health_reports_configured_provider() {
        let fake: Arc<dyn TextGenerator> = Arc::new(FakeGenerator::replying("unused"));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (_, body) = send(app_with(Some(fake)), request).await;
        assert_eq!(body["gemini_configured"], true);
    }

    #[tokio::test]
    async fn test_generate_returns_code_and_explanation() {
        let fake = Arc::new(FakeGenerator::replying(
            "CODE:\n```python\nprint(max([3, 1, 2]))\n```\nEXPLANATION:\nFinds the max.",
        ));
        let (status, body) = send(
            app_with(Some(fake.clone() as Arc<dyn TextGenerator>)),
            post_generate(json!({ "prompt": "find max in list", "existing_code": "" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "print(max([3, 1, 2]))");
        assert_eq!(body["explanation"], "Finds the max.");
        assert!(fake.last_prompt().unwrap().contains("find max in list"));
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_prompt() {
        let fake = Arc::new(FakeGenerator::replying("unused"));
        let (status, body) = send(
            app_with(Some(fake.clone() as Arc<dyn TextGenerator>)),
            post_generate(json!({ "prompt": "   " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(fake.last_prompt().is_none());
    }

    #[tokio::test]
    async fn test_blank_prompt_is_rejected_even_without_provider() {
        let (status, _) = send(app_with(None), post_generate(json!({ "prompt": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_generate_without_provider_is_server_error() {
        let (status, body) = send(
            app_with(None),
            post_generate(json!({ "prompt": "reverse a string" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_surfaces_provider_message() {
        let fake: Arc<dyn TextGenerator> =
            Arc::new(FakeGenerator::failing(400, "API key not valid."));
        let (status, body) = send(
            app_with(Some(fake)),
            post_generate(json!({ "prompt": "sort a list" })),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "PROVIDER_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("API key not valid."));
    }

    #[tokio::test]
    async fn test_missing_prompt_field_uses_error_body() {
        let (status, body) = send(
            app_with(None),
            post_generate(json!({ "existing_code": "x = 1" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("prompt"));
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"prompt\": "))
            .unwrap();
        let (status, body) = send(app_with(None), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_error_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .body(Body::from(json!({ "prompt": "sort a list" }).to_string()))
            .unwrap();
        let (status, body) = send(app_with(None), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
