//! Deal command handler: play one seeded round at a table.
//!
//! Seats `players` players, picks the opening dealer, posts blinds, deals and
//! settles the showdown, then prints every hand and the payouts. The same
//! seed always prints the same round.

use crate::error::CliError;
use crate::formatters::{format_cards, format_payouts, format_result};
use holdem_engine::hand::Strategy;
use holdem_engine::table::{Table, TableConfig};
use std::io::Write;

/// Handle the deal command.
///
/// `seed: None` draws a fresh seed, which is printed so the round can be
/// replayed.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: usize,
    strategy: Strategy,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut table = Table::new(TableConfig {
        seed,
        strategy,
        ..TableConfig::default()
    });
    for seat in 0..players {
        table.sit(seat, &format!("Player {}", seat + 1))?;
    }
    table.start_round()?;
    table.deal()?;
    let outcome = table.showdown()?;

    writeln!(out, "Seed: {}", table.deck().seed())?;
    writeln!(out, "Strategy: {}", strategy.as_str())?;
    if let Some(dealer) = table.dealer() {
        writeln!(out, "Dealer: seat {}", dealer)?;
    }
    for entry in &outcome.results {
        let Some(player) = table.player(entry.seat) else {
            continue;
        };
        let hole = player.hole().map(|h| format_cards(&h)).unwrap_or_default();
        writeln!(
            out,
            "Seat {} {}: {} {}",
            entry.seat,
            player.name(),
            hole,
            format_result(&entry.result)
        )?;
    }
    if let Some(board) = table.board() {
        writeln!(out, "Board: {}", format_cards(&board))?;
    }
    writeln!(out, "Pot: {}", outcome.pot)?;
    let winners: Vec<String> = outcome.winners.iter().map(|s| format!("seat {}", s)).collect();
    writeln!(out, "Winners: {}", winners.join(", "))?;
    writeln!(out, "Payouts: {}", format_payouts(&outcome.payouts))?;
    Ok(())
}
