pub mod health;
pub mod render;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Request bodies are capped before parsing; the document-level size limit
/// in validation is stricter, this is the transport backstop.
const MAX_BODY_BYTES: usize = 100 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/render", post(render::handle_render))
        .route("/api/v1/preview", get(render::handle_preview))
        .route("/api/v1/sample", get(render::handle_sample))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bytes::Bytes;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::compiler::{CompileBackend, CompileError, CompileJob};
    use crate::config::Config;
    use crate::models::resume::ResumeDocument;
    use crate::state::AppState;

    use super::build_router;

    /// Stub backend: returns fixed bytes, or fails when the flag is set.
    struct StubCompiler {
        fail: bool,
    }

    #[async_trait]
    impl CompileBackend for StubCompiler {
        async fn compile(&self, job: CompileJob) -> Result<Bytes, CompileError> {
            if self.fail {
                Err(CompileError::new("stub diagnostic"))
            } else {
                assert!(!job.source.is_empty());
                Ok(Bytes::from_static(b"%PDF-1.7 stub"))
            }
        }
    }

    fn test_config() -> Config {
        Config {
            latex_compiler_url: "http://unused.invalid".to_string(),
            typst_compiler_url: "http://unused.invalid".to_string(),
            render_cache_capacity: 4,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    fn app(fail: bool) -> axum::Router {
        let state = AppState::new(test_config(), Arc::new(StubCompiler { fail }));
        build_router(state)
    }

    fn render_request(doc: &ResumeDocument) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/render")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(doc).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(false)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_render_returns_pdf() {
        let response = app(false)
            .oneshot(render_request(&ResumeDocument::sample()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/pdf"
        );
        assert_eq!(response.headers()["cache-control"], "no-store");
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"%PDF-1.7 stub"));
    }

    #[tokio::test]
    async fn test_render_validation_failure_collects_errors() {
        let mut doc = ResumeDocument::sample();
        doc.header.name = String::new();
        doc.education.clear();
        let response = app(false).oneshot(render_request(&doc)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let details = json["error"]["details"].as_array().unwrap();
        assert!(details.len() >= 2);
    }

    #[tokio::test]
    async fn test_render_source_header_skips_compilation() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/render")
            .header("content-type", "application/json")
            .header("x-return-source", "true")
            .body(Body::from(
                serde_json::to_vec(&ResumeDocument::sample()).unwrap(),
            ))
            .unwrap();
        // Compilation would fail; the source path must never reach it.
        let response = app(true).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("\\documentclass"));
        assert!(text.contains("Jane Doe"));
    }

    #[tokio::test]
    async fn test_render_typst_flavor_selected_by_query() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/render?template=typst")
            .header("content-type", "application/json")
            .header("x-return-source", "true")
            .body(Body::from(
                serde_json::to_vec(&ResumeDocument::sample()).unwrap(),
            ))
            .unwrap();
        let response = app(false).oneshot(request).await.unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("#set page"));
    }

    #[tokio::test]
    async fn test_compile_failure_reports_diagnostic_and_excerpt() {
        let response = app(true)
            .oneshot(render_request(&ResumeDocument::sample()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "COMPILE_ERROR");
        assert_eq!(json["error"]["message"], "stub diagnostic");
        assert!(json["error"]["source"]
            .as_str()
            .unwrap()
            .contains("\\documentclass"));
    }

    #[tokio::test]
    async fn test_preview_reflects_last_successful_render() {
        let app = app(false);
        let before = app
            .clone()
            .oneshot(Request::get("/api/v1/preview").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(before.status(), StatusCode::NOT_FOUND);

        app.clone()
            .oneshot(render_request(&ResumeDocument::sample()))
            .await
            .unwrap();

        let after = app
            .oneshot(Request::get("/api/v1/preview").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(after.status(), StatusCode::OK);
        assert_eq!(after.headers()["content-type"], "application/pdf");
    }

    #[tokio::test]
    async fn test_sample_is_valid_input_for_render() {
        let app = app(false);
        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/sample").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let doc: ResumeDocument = serde_json::from_slice(&body).unwrap();

        let rendered = app.oneshot(render_request(&doc)).await.unwrap();
        assert_eq!(rendered.status(), StatusCode::OK);
    }
}
