//! The generation boundary the benchmark pipeline runs against.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::BenchError;

/// Outcome of a single generation call.
///
/// Transport failures are encoded here rather than raised: a failed call is
/// a recorded benchmark observation, not an error that stops the run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Whether a response was obtained within the timeout.
    pub success: bool,
    /// Wall-clock time of the request, measured even on failure.
    pub latency: Duration,
    /// The model's raw text output, present only on success.
    pub text: Option<String>,
    /// Transport or server error message, present only on failure.
    pub error: Option<String>,
}

impl GenerationResult {
    /// A successful generation with the model's raw output.
    pub fn ok(text: impl Into<String>, latency: Duration) -> Self {
        Self {
            success: true,
            latency,
            text: Some(text.into()),
            error: None,
        }
    }

    /// A failed generation carrying the error message.
    pub fn failed(error: impl Into<String>, latency: Duration) -> Self {
        Self {
            success: false,
            latency,
            text: None,
            error: Some(error.into()),
        }
    }
}

/// A source of model completions and model names.
///
/// The runner only ever talks to this trait, so tests inject scripted
/// implementations instead of a live server.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Sends a single prompt to a model, one attempt, bounded by the
    /// provider's request timeout. Never returns an error: failures are
    /// captured inside the [`GenerationResult`].
    async fn generate(&self, model: &str, prompt: &str) -> GenerationResult;

    /// Lists the models the server exposes, in server order.
    async fn list_models(&self) -> Result<Vec<String>, BenchError>;
}
