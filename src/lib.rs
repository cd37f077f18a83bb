//! # llm-bench
//!
//! A small benchmark harness for locally hosted language models behind an
//! Ollama-compatible inference server. Each model receives a fixed battery
//! of three prompts (logic, math, coding); raw responses and latencies are
//! recorded, a lenient keyword heuristic decides pass/fail per category,
//! and the run produces a full-response transcript plus a CSV summary.
//!
//! The evaluation pipeline (registry, parser, evaluator, runner) only talks
//! to the [`generation::GenerationProvider`] trait, so any backend or test
//! double can be plugged in at that seam.

pub mod backends;
pub mod error;
pub mod evaluator;
pub mod generation;
pub mod parser;
pub mod report;
pub mod runner;
pub mod suite;

pub use backends::ollama::Ollama;
pub use error::BenchError;
pub use evaluator::check_correctness;
pub use generation::{GenerationProvider, GenerationResult};
pub use parser::parse_json_response;
pub use report::{write_summary, Transcript};
pub use runner::{BenchRunner, LogReporter, ModelStats, Reporter};
pub use suite::{test_cases, Category, TestCase};
