//! HTTP compilation backends. LaTeX jobs go to a LaTeX-on-HTTP style
//! service as a JSON build request; Typst jobs are posted as plain source
//! text. Everything that goes wrong — transport failures, non-2xx statuses,
//! unexpected content types — folds into the same opaque diagnostic.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;

use crate::render::TemplateFlavor;

use super::{CompileBackend, CompileError, CompileJob};

/// Diagnostics from the service are truncated to keep error responses small.
const MAX_DIAGNOSTIC_LEN: usize = 500;

pub struct RemoteCompiler {
    client: reqwest::Client,
    latex_endpoint: String,
    typst_endpoint: String,
}

impl RemoteCompiler {
    pub fn new(latex_endpoint: String, typst_endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            latex_endpoint,
            typst_endpoint,
        }
    }

    async fn compile_latex(&self, source: String) -> Result<Bytes, CompileError> {
        let body = json!({
            "compiler": "pdflatex",
            "resources": [
                {
                    "main": true,
                    "content": source,
                }
            ],
        });
        let response = self
            .client
            .post(&self.latex_endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompileError::new(format!("compilation service unreachable: {e}")))?;
        Self::read_pdf(response).await
    }

    async fn compile_typst(&self, source: String) -> Result<Bytes, CompileError> {
        let response = self
            .client
            .post(&self.typst_endpoint)
            .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(source)
            .send()
            .await
            .map_err(|e| CompileError::new(format!("compilation service unreachable: {e}")))?;
        Self::read_pdf(response).await
    }

    async fn read_pdf(response: reqwest::Response) -> Result<Bytes, CompileError> {
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CompileError::new(format!(
                "compilation failed ({status}): {}",
                truncate(&text)
            )));
        }
        if !content_type.contains("application/pdf") {
            let text = response.text().await.unwrap_or_default();
            return Err(CompileError::new(format!(
                "unexpected response: {}",
                truncate(&text)
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| CompileError::new(format!("failed to read pdf body: {e}")))
    }
}

#[async_trait]
impl CompileBackend for RemoteCompiler {
    async fn compile(&self, job: CompileJob) -> Result<Bytes, CompileError> {
        tracing::debug!(
            flavor = job.flavor.as_str(),
            source_len = job.source.len(),
            "dispatching compile job"
        );
        match job.flavor {
            TemplateFlavor::Latex => self.compile_latex(job.source).await,
            TemplateFlavor::Typst => self.compile_typst(job.source).await,
        }
    }
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_DIAGNOSTIC_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn test_truncate_caps_length() {
        let long = "x".repeat(2_000);
        assert_eq!(truncate(&long).len(), MAX_DIAGNOSTIC_LEN);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "é".repeat(600);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_DIAGNOSTIC_LEN);
    }
}
