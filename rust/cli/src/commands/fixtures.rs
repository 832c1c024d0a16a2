//! Fixtures command handler: generate regression fixtures as JSON lines.

use crate::error::CliError;
use holdem_engine::deck::Deck;
use holdem_engine::fixtures::{generate, FixtureWriter};
use holdem_engine::hand::Strategy;
use std::io::Write;
use tracing::info;

/// Handle the fixtures command.
///
/// Evaluates `count` freshly shuffled hands from a deck seeded with `seed`
/// (random when `None`). Records go to `output` when given, otherwise one
/// JSON object per line on `out`.
pub fn handle_fixtures_command(
    count: u32,
    seed: Option<u64>,
    output: Option<&str>,
    strategy: Strategy,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if count == 0 {
        return Err(CliError::InvalidInput("count must be >= 1".into()));
    }
    let mut deck = match seed {
        Some(seed) => Deck::new_with_seed(seed),
        None => Deck::from_entropy(),
    };
    let base_seed = deck.seed();
    let records = generate(&mut deck, strategy, count);

    match output {
        Some(path) => {
            let mut writer = FixtureWriter::create(path)?;
            let mut written = 0u32;
            for record in records {
                writer.write(&record?)?;
                written += 1;
            }
            writeln!(out, "Wrote {} fixtures to {}", written, path)?;
        }
        None => {
            for record in records {
                let line = serde_json::to_string(&record?).map_err(std::io::Error::other)?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    info!(
        count,
        seed = base_seed,
        strategy = strategy.as_str(),
        "fixtures written"
    );
    Ok(())
}
