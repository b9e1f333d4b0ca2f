use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::cache::render_cache_key;
use crate::compiler::CompileJob;
use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::models::validate::validate;
use crate::render::{render_markup, TemplateFlavor};
use crate::state::AppState;

/// Leading slice of the generated source returned with compile failures.
const SOURCE_EXCERPT_LEN: usize = 2_000;

#[derive(Deserialize)]
pub struct RenderQuery {
    #[serde(default)]
    pub template: TemplateFlavor,
}

/// POST /api/v1/render?template=latex|typst
///
/// Validates the document, renders markup, and compiles it to PDF through
/// the external backend. With the `x-return-source: true` header the markup
/// source is returned as text instead, skipping compilation.
pub async fn handle_render(
    State(state): State<AppState>,
    Query(query): Query<RenderQuery>,
    headers: HeaderMap,
    Json(doc): Json<ResumeDocument>,
) -> Result<Response, AppError> {
    let errors = validate(&doc);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let flavor = query.template;
    let source = render_markup(&doc, flavor);

    let wants_source = headers
        .get("x-return-source")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));
    if wants_source {
        return Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            source,
        )
            .into_response());
    }

    // Every compile attempt gets a generation token; only the latest issued
    // request may publish the preview.
    let token = state.preview.lock().await.begin();

    let key = render_cache_key(flavor, &source);
    if let Some(pdf) = state.cache.lock().await.get(key) {
        tracing::debug!(key, "render cache hit");
        state.preview.lock().await.publish(token, pdf.clone());
        return Ok(pdf_response(pdf));
    }

    let job = CompileJob {
        flavor,
        source: source.clone(),
    };
    let pdf = state.compiler.compile(job).await.map_err(|e| {
        let source_excerpt = source.chars().take(SOURCE_EXCERPT_LEN).collect();
        AppError::Compile {
            diagnostic: e.diagnostic,
            source_excerpt,
        }
    })?;

    state.cache.lock().await.insert(key, pdf.clone());
    let published = state.preview.lock().await.publish(token, pdf.clone());
    tracing::info!(
        flavor = flavor.as_str(),
        bytes = pdf.len(),
        published,
        "compiled resume"
    );

    Ok(pdf_response(pdf))
}

/// GET /api/v1/preview — the latest authoritative compiled PDF.
pub async fn handle_preview(State(state): State<AppState>) -> Result<Response, AppError> {
    let pdf = state
        .preview
        .lock()
        .await
        .latest()
        .ok_or_else(|| AppError::NotFound("No preview has been rendered yet".to_string()))?;
    Ok(pdf_response(pdf))
}

/// GET /api/v1/sample — starter document for a fresh editor session.
pub async fn handle_sample() -> Json<ResumeDocument> {
    Json(ResumeDocument::sample())
}

fn pdf_response(pdf: bytes::Bytes) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CACHE_CONTROL, "no-store"),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"resume.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response()
}
