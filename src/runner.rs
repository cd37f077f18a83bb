//! Sequential benchmark orchestration and per-model aggregation.

use std::io::Write;
use std::time::Duration;

use crate::error::BenchError;
use crate::evaluator::check_correctness;
use crate::generation::GenerationProvider;
use crate::parser::parse_json_response;
use crate::report::Transcript;
use crate::suite::{test_cases, Category, TestCase};

/// Aggregated outcome for one model across the full test battery.
///
/// Built by folding [`ModelStats::record`] over the registry's cases; each
/// call consumes the previous value so a finished stats entry is never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct ModelStats {
    /// Identifier of the benchmarked model.
    pub model: String,
    /// Verdict of the logic test.
    pub logic_pass: bool,
    /// Verdict of the math test.
    pub math_pass: bool,
    /// Verdict of the coding test.
    pub code_pass: bool,
    /// Latency samples from successful generation calls, in battery order.
    pub latencies: Vec<Duration>,
}

impl ModelStats {
    /// An empty stats entry: every category failed, no samples.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            logic_pass: false,
            math_pass: false,
            code_pass: false,
            latencies: Vec::new(),
        }
    }

    /// Records one test outcome. Failed generation calls pass `None` for the
    /// latency and can never mark a category as passed.
    pub fn record(mut self, category: Category, passed: bool, latency: Option<Duration>) -> Self {
        match category {
            Category::Logic => self.logic_pass = passed,
            Category::Math => self.math_pass = passed,
            Category::Coding => self.code_pass = passed,
        }
        if let Some(latency) = latency {
            self.latencies.push(latency);
        }
        self
    }

    /// Verdict for a single category.
    pub fn passed(&self, category: Category) -> bool {
        match category {
            Category::Logic => self.logic_pass,
            Category::Math => self.math_pass,
            Category::Coding => self.code_pass,
        }
    }

    /// Arithmetic mean of the collected latency samples, zero when every
    /// generation call failed.
    pub fn avg_latency(&self) -> Duration {
        if self.latencies.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.latencies.iter().sum();
        total / self.latencies.len() as u32
    }

    /// Number of passed categories, 0 to 3.
    pub fn score(&self) -> u8 {
        u8::from(self.logic_pass) + u8::from(self.math_pass) + u8::from(self.code_pass)
    }
}

/// Progress sink injected into the runner.
///
/// Replaces a process-wide logger at the pipeline boundary: the runner
/// reports through this trait and the caller decides where events go.
pub trait Reporter: Send + Sync {
    fn run_started(&self, model_count: usize) {
        let _ = model_count;
    }
    fn model_started(&self, model: &str) {
        let _ = model;
    }
    fn case_started(&self, case: &TestCase) {
        let _ = case;
    }
    fn case_finished(&self, case: &TestCase, passed: bool, latency: Duration) {
        let _ = (case, passed, latency);
    }
    fn generation_failed(&self, case: &TestCase, error: &str) {
        let _ = (case, error);
    }
}

/// Reporter that forwards progress to the `log` facade.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn run_started(&self, model_count: usize) {
        log::info!("Starting benchmark on {model_count} models");
    }

    fn model_started(&self, model: &str) {
        log::info!("Testing model: {model}");
    }

    fn case_started(&self, case: &TestCase) {
        log::info!("  Running {} test...", case.category);
    }

    fn case_finished(&self, case: &TestCase, passed: bool, latency: Duration) {
        log::info!(
            "    {} pass: {passed} | latency: {:.2}s",
            case.category,
            latency.as_secs_f64()
        );
    }

    fn generation_failed(&self, case: &TestCase, error: &str) {
        log::error!("    {} generation failed: {error}", case.category);
    }
}

/// Drives the full benchmark: models x test cases, strictly sequential.
pub struct BenchRunner<'a> {
    provider: &'a dyn GenerationProvider,
    reporter: &'a dyn Reporter,
}

impl<'a> BenchRunner<'a> {
    pub fn new(provider: &'a dyn GenerationProvider, reporter: &'a dyn Reporter) -> Self {
        Self { provider, reporter }
    }

    /// Runs the battery against every model in order, writing raw responses
    /// to the transcript as they arrive. Generation failures are recorded
    /// and the run continues; only transcript I/O errors abort.
    pub async fn run<W: Write>(
        &self,
        models: &[String],
        transcript: &mut Transcript<W>,
    ) -> Result<Vec<ModelStats>, BenchError> {
        self.reporter.run_started(models.len());

        let mut results = Vec::with_capacity(models.len());
        for model in models {
            results.push(self.run_model(model, transcript).await?);
        }
        Ok(results)
    }

    async fn run_model<W: Write>(
        &self,
        model: &str,
        transcript: &mut Transcript<W>,
    ) -> Result<ModelStats, BenchError> {
        self.reporter.model_started(model);
        transcript.model_header(model)?;

        let mut stats = ModelStats::new(model);
        for case in test_cases() {
            self.reporter.case_started(case);

            let result = self.provider.generate(model, case.prompt).await;
            transcript.record(case, &result)?;

            if result.success {
                let raw = result.text.as_deref().unwrap_or_default();
                let parsed = parse_json_response(raw);
                let passed = check_correctness(case, parsed.as_ref(), raw);
                self.reporter.case_finished(case, passed, result.latency);
                stats = stats.record(case.category, passed, Some(result.latency));
            } else {
                let error = result.error.as_deref().unwrap_or("unknown error");
                self.reporter.generation_failed(case, error);
                stats = stats.record(case.category, false, None);
            }
        }
        Ok(stats)
    }
}
