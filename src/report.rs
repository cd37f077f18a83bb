//! Run artifacts: the raw-response transcript and the CSV summary.

use std::io::{self, Write};

use crate::generation::GenerationResult;
use crate::runner::ModelStats;
use crate::suite::TestCase;

const MODEL_BANNER_WIDTH: usize = 80;
const TEST_SEPARATOR_WIDTH: usize = 40;

/// Plain-text log of every raw response or error, per model and test case.
pub struct Transcript<W: Write> {
    inner: W,
}

impl<W: Write> Transcript<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the banner opening a model's section.
    pub fn model_header(&mut self, model: &str) -> io::Result<()> {
        let banner = "=".repeat(MODEL_BANNER_WIDTH);
        write!(self.inner, "\n{banner}\nMODEL: {model}\n{banner}\n")
    }

    /// Writes one test entry: the raw response on success, an `[ERROR]` line
    /// on failure, followed by a separator.
    pub fn record(&mut self, case: &TestCase, result: &GenerationResult) -> io::Result<()> {
        write!(self.inner, "\n--- TEST: {} ({}) ---\n", case.category, case.id)?;
        if result.success {
            writeln!(self.inner, "{}", result.text.as_deref().unwrap_or_default())?;
        } else {
            writeln!(
                self.inner,
                "[ERROR] {}",
                result.error.as_deref().unwrap_or("unknown error")
            )?;
        }
        writeln!(self.inner, "{}", "-".repeat(TEST_SEPARATOR_WIDTH))
    }

    /// Consumes the transcript, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Writes the per-model summary table as CSV, one row per model.
pub fn write_summary<W: Write>(mut out: W, results: &[ModelStats]) -> io::Result<()> {
    writeln!(out, "Model,Avg Latency,Logic,Math,Coding,Total Score (/3)")?;
    for stats in results {
        writeln!(
            out,
            "{},{:.2}s,{},{},{},{}",
            stats.model,
            stats.avg_latency().as_secs_f64(),
            pass_fail(stats.logic_pass),
            pass_fail(stats.math_pass),
            pass_fail(stats.code_pass),
            stats.score()
        )?;
    }
    Ok(())
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::test_cases;
    use std::time::Duration;

    fn rendered<F: FnOnce(&mut Transcript<Vec<u8>>)>(write: F) -> String {
        let mut transcript = Transcript::new(Vec::new());
        write(&mut transcript);
        String::from_utf8(transcript.into_inner()).expect("utf8 transcript")
    }

    #[test]
    fn transcript_banner_frames_the_model_name() {
        let text = rendered(|t| t.model_header("llama3:latest").expect("header"));
        assert!(text.contains(&format!("\n{}\nMODEL: llama3:latest\n", "=".repeat(80))));
    }

    #[test]
    fn transcript_records_raw_response() {
        let case = &test_cases()[0];
        let result = GenerationResult::ok("raw model output", Duration::from_secs(1));
        let text = rendered(|t| t.record(case, &result).expect("record"));
        assert!(text.contains("--- TEST: LOGIC (test_logic_ad_hominem) ---"));
        assert!(text.contains("raw model output\n"));
        assert!(text.contains(&"-".repeat(40)));
    }

    #[test]
    fn transcript_records_error_entry() {
        let case = &test_cases()[1];
        let result = GenerationResult::failed("connection refused", Duration::ZERO);
        let text = rendered(|t| t.record(case, &result).expect("record"));
        assert!(text.contains("--- TEST: MATH (test_math_bayes_theorem) ---"));
        assert!(text.contains("[ERROR] connection refused\n"));
    }

    #[test]
    fn summary_formats_latency_flags_and_score() {
        let stats = ModelStats::new("phi3:mini")
            .record(crate::suite::Category::Logic, true, Some(Duration::from_millis(1500)))
            .record(crate::suite::Category::Math, false, Some(Duration::from_millis(2500)))
            .record(crate::suite::Category::Coding, true, Some(Duration::from_millis(2000)));

        let mut buf = Vec::new();
        write_summary(&mut buf, &[stats]).expect("summary");
        let text = String::from_utf8(buf).expect("utf8 summary");

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Model,Avg Latency,Logic,Math,Coding,Total Score (/3)")
        );
        assert_eq!(lines.next(), Some("phi3:mini,2.00s,PASS,FAIL,PASS,2"));
    }

    #[test]
    fn artifacts_land_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("full_responses.txt");

        let file = std::fs::File::create(&path).expect("create transcript");
        let mut transcript = Transcript::new(file);
        transcript.model_header("llama3").expect("header");
        let result = GenerationResult::ok("output", Duration::from_secs(1));
        transcript.record(&test_cases()[2], &result).expect("record");
        drop(transcript);

        let content = std::fs::read_to_string(&path).expect("read transcript");
        assert!(content.contains("MODEL: llama3"));
        assert!(content.contains("--- TEST: CODING (test_code_max_path_sum) ---"));
    }

    #[test]
    fn summary_renders_zero_latency_for_all_failed_model() {
        let stats = ModelStats::new("dead-model");
        let mut buf = Vec::new();
        write_summary(&mut buf, &[stats]).expect("summary");
        let text = String::from_utf8(buf).expect("utf8 summary");
        assert!(text.contains("dead-model,0.00s,FAIL,FAIL,FAIL,0"));
    }
}
