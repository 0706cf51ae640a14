use std::io::Write;

use cvsift_core::{AttemptOutcome, DiagnosticEvent};
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print one fallback-chain diagnostic event.
pub fn print_diagnostic(
    w: &mut dyn Write,
    event: &DiagnosticEvent,
    color: ColorMode,
) -> std::io::Result<()> {
    match event {
        DiagnosticEvent::BackendStarted { backend, available } => {
            if *available {
                writeln!(w, "Trying {}...", backend)?;
            } else if color.enabled() {
                writeln!(
                    w,
                    "Trying {}... {}",
                    backend,
                    "(probe reports unavailable)".dimmed()
                )?;
            } else {
                writeln!(w, "Trying {}... (probe reports unavailable)", backend)?;
            }
        }
        DiagnosticEvent::BackendFinished(attempt) => match &attempt.outcome {
            AttemptOutcome::Success(text) => {
                let chars = text.chars().count();
                if color.enabled() {
                    writeln!(
                        w,
                        "{} {} ({} chars)",
                        "Extracted with".green(),
                        attempt.backend,
                        chars
                    )?;
                } else {
                    writeln!(w, "Extracted with {} ({} chars)", attempt.backend, chars)?;
                }
            }
            AttemptOutcome::Empty => {
                writeln!(w, "{}: produced no text", attempt.backend)?;
            }
            AttemptOutcome::Failed(reason) => {
                if color.enabled() {
                    writeln!(w, "{} {}: {}", "WARNING:".yellow(), attempt.backend, reason)?;
                } else {
                    writeln!(w, "WARNING: {}: {}", attempt.backend, reason)?;
                }
            }
        },
        DiagnosticEvent::ChainExhausted { attempts } => {
            let msg = format!("No backend produced text ({} attempted)", attempts);
            if color.enabled() {
                writeln!(w, "{}", msg.red())?;
            } else {
                writeln!(w, "{}", msg)?;
            }
        }
    }
    Ok(())
}
