use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Resume Sifter - Extract raw text, contact fields, and labeled sections from resume files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the resume file (.pdf, .docx, .doc, or plain text)
    file_path: PathBuf,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics and traces go to stderr; stdout carries only the record.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.file_path.exists() {
        anyhow::bail!("File not found: {}", cli.file_path.display());
    }

    // Resolve configuration: env vars > defaults
    let tool_timeout_secs: u64 = std::env::var("CVSIFT_TOOL_TIMEOUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let color = ColorMode(!cli.no_color);
    let pipeline = cvsift_ingest::ResumePipeline::new()
        .with_tool_timeout(Duration::from_secs(tool_timeout_secs));

    let mut stderr = std::io::stderr();
    let mut sink = |event: cvsift_core::DiagnosticEvent| {
        let _ = output::print_diagnostic(&mut stderr, &event, color);
        let _ = stderr.flush();
    };

    // Extraction problems surface inside the record, never as a process
    // failure; a non-zero exit is reserved for bad invocations.
    let record = pipeline.run(&cli.file_path, &mut sink);

    let json = serde_json::to_string(&record)?;
    writeln!(std::io::stdout(), "{}", json)?;

    Ok(())
}
