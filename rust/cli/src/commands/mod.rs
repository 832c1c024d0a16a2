//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers for that command only
//! - Output streams (`&mut dyn Write`) passed in by [`run`](crate::run)
//! - Errors propagated as `CliError`

use holdem_engine::cards::{parse_cards, Card};

use crate::error::CliError;

pub mod bench;
pub mod cfg;
pub mod deal;
pub mod eval;
pub mod fixtures;
pub mod showdown;
pub mod verify;

pub use bench::handle_bench_command;
pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use fixtures::handle_fixtures_command;
pub use showdown::handle_showdown_command;
pub use verify::handle_verify_command;

/// Parses exactly `N` cards from a command-line value such as `"As Ks"`.
pub(crate) fn parse_exact<const N: usize>(text: &str, what: &str) -> Result<[Card; N], CliError> {
    let cards = parse_cards(text)?;
    cards.try_into().map_err(|v: Vec<Card>| {
        CliError::InvalidInput(format!("{} needs {} cards, got {}", what, N, v.len()))
    })
}
