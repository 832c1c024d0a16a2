//! Verify command handler module.
//!
//! Re-evaluates every record of a JSON-lines fixture file and compares the
//! category, high card and kicker with what the file recorded. Blank lines
//! are skipped. Failures are collected with their line number so one run
//! reports all of them.

use crate::error::{BatchValidationError, CliError};
use crate::ui;
use holdem_engine::fixtures::FixtureRecord;
use holdem_engine::hand::Strategy;
use std::io::Write;
use tracing::warn;

/// The `usize` context is the 1-based line number in the input file.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command.
///
/// Prints `Verified: N records` when every record matches. Otherwise each
/// failure is written to `err` and the command fails.
pub fn handle_verify_command(
    input: &str,
    strategy: Strategy,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = std::fs::read_to_string(input)?;
    let mut errors: Vec<VerifyError> = Vec::new();
    let mut checked = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        checked += 1;
        if let Err(message) = check_line(line, strategy) {
            warn!(line = idx + 1, %message, "fixture mismatch");
            errors.push(VerifyError {
                item_context: idx + 1,
                message,
            });
        }
    }

    if errors.is_empty() {
        writeln!(out, "Verified: {} records", checked)?;
        return Ok(());
    }
    for e in &errors {
        ui::display_warning(err, &format!("line {}", e))?;
    }
    Err(CliError::InvalidInput(format!(
        "{} of {} records failed verification",
        errors.len(),
        checked
    )))
}

fn check_line(line: &str, strategy: Strategy) -> Result<(), String> {
    let record: FixtureRecord =
        serde_json::from_str(line).map_err(|e| format!("invalid record: {}", e))?;
    let (hole, board) = record.cards().map_err(|e| e.to_string())?;
    let result = strategy.evaluate(hole, board).map_err(|e| e.to_string())?;
    if record.matches(&result) {
        return Ok(());
    }
    Err(format!(
        "record {} says {} / {} / {}, evaluated {} / {} / {}",
        record.id,
        record.hand,
        record.high_card,
        record.kicker,
        result.category,
        result.high_card.name(),
        result.kicker.name()
    ))
}
