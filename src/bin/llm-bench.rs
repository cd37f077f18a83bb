use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::Parser;

use llm_bench::{
    write_summary, BenchError, BenchRunner, GenerationProvider, LogReporter, Ollama, Transcript,
};

/// Command line arguments for the benchmark harness
#[derive(Parser)]
#[clap(
    name = "llm-bench",
    about = "Benchmark local LLMs on logic, math and coding prompts"
)]
struct CliArgs {
    /// Ollama server URL
    #[arg(long, default_value = "http://localhost:11434")]
    url: String,

    /// Comma-separated list of models to test (skips discovery)
    #[arg(long)]
    models: Option<String>,

    /// Limit the number of discovered models to test
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Output directory for run artifacts
    #[arg(long, default_value = "runs_complex")]
    outdir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 300)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let ollama = Ollama::new(Some(args.url.clone()), Some(args.timeout));

    let models = select_models(&args, &ollama).await?;

    let run_dir = args
        .outdir
        .join(format!("bench_complex_{}", Local::now().format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("creating run directory {}", run_dir.display()))?;

    let transcript_path = run_dir.join("full_responses.txt");
    let summary_path = run_dir.join("benchmark_summary.csv");
    log::info!("Saving full responses to: {}", transcript_path.display());

    let transcript_file = File::create(&transcript_path)
        .with_context(|| format!("creating {}", transcript_path.display()))?;
    let mut transcript = Transcript::new(BufWriter::new(transcript_file));

    let runner = BenchRunner::new(&ollama, &LogReporter);
    let results = runner.run(&models, &mut transcript).await?;

    let summary_file = File::create(&summary_path)
        .with_context(|| format!("creating {}", summary_path.display()))?;
    write_summary(BufWriter::new(summary_file), &results)?;

    log::info!("Benchmark complete. Results saved to {}", run_dir.display());
    Ok(())
}

/// Resolves the models to test: an explicit `--models` list wins, otherwise
/// the server is asked and the list is capped at `--limit`. An empty result
/// either way is fatal.
async fn select_models(args: &CliArgs, ollama: &Ollama) -> anyhow::Result<Vec<String>> {
    if let Some(list) = &args.models {
        let models: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        if models.is_empty() {
            anyhow::bail!("--models was given but contains no model names");
        }
        return Ok(models);
    }

    let mut models = ollama
        .list_models()
        .await
        .context("discovering models from the server")?;
    if models.is_empty() {
        return Err(BenchError::NoModels)
            .with_context(|| format!("discovery on {} returned nothing", ollama.base_url()));
    }
    models.truncate(args.limit);
    Ok(models)
}
