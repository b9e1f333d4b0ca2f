use anyhow::{Context, Result};

use crate::cache::DEFAULT_CACHE_CAPACITY;

/// Application configuration loaded from environment variables. The compiler
/// endpoints are the only external collaborators, so everything has a
/// default and the service starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// LaTeX-on-HTTP build endpoint (YtoTech-compatible).
    pub latex_compiler_url: String,
    /// Typst compile endpoint accepting plain source text.
    pub typst_compiler_url: String,
    pub render_cache_capacity: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            latex_compiler_url: env_or(
                "LATEX_COMPILER_URL",
                "https://latex.ytotech.com/builds/sync",
            ),
            typst_compiler_url: env_or("TYPST_COMPILER_URL", "http://localhost:8090/compile"),
            render_cache_capacity: std::env::var("RENDER_CACHE_CAPACITY")
                .map(|v| {
                    v.parse::<usize>()
                        .context("RENDER_CACHE_CAPACITY must be a number")
                })
                .unwrap_or(Ok(DEFAULT_CACHE_CAPACITY))?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
