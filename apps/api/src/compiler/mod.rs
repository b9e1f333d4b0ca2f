//! External compilation boundary. The typesetting engine is a black box:
//! markup source in, PDF bytes out, or an opaque diagnostic on failure. The
//! core never parses or retries diagnostics; retry policy belongs to the
//! caller.

pub mod remote;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::render::TemplateFlavor;

pub use remote::RemoteCompiler;

/// One compilation request.
#[derive(Debug, Clone)]
pub struct CompileJob {
    pub flavor: TemplateFlavor,
    pub source: String,
}

/// Opaque compiler failure. The diagnostic is surfaced verbatim (truncated
/// upstream), never interpreted.
#[derive(Debug, Error)]
#[error("{diagnostic}")]
pub struct CompileError {
    pub diagnostic: String,
}

impl CompileError {
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostic: diagnostic.into(),
        }
    }
}

#[async_trait]
pub trait CompileBackend: Send + Sync {
    async fn compile(&self, job: CompileJob) -> Result<Bytes, CompileError>;
}
