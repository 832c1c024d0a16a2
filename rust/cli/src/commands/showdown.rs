//! Showdown command: rank several players' hole cards against one board.

use std::collections::HashSet;
use std::io::Write;

use holdem_engine::cards::Card;
use holdem_engine::hand::{EvaluationResult, Strategy, BOARD_SIZE, HOLE_SIZE};
use holdem_engine::showdown::determine_winners;

use crate::commands::parse_exact;
use crate::error::CliError;
use crate::formatters::{format_cards, format_result};

/// Handle the showdown command.
///
/// Players are numbered in the order their `--hole` flags were given.
///
/// # Errors
///
/// `CliError::InvalidInput` when fewer than two players are given or a card
/// appears in more than one hand.
pub fn handle_showdown_command(
    board: &str,
    holes: &[String],
    strategy: Strategy,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if holes.len() < 2 {
        return Err(CliError::InvalidInput(
            "showdown needs at least two --hole values".into(),
        ));
    }
    let board: [Card; BOARD_SIZE] = parse_exact(board, "board")?;
    let holes = holes
        .iter()
        .map(|h| parse_exact::<HOLE_SIZE>(h, "hole"))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_distinct(&board, &holes)?;

    let results = holes
        .iter()
        .map(|hole| strategy.evaluate(*hole, board))
        .collect::<Result<Vec<EvaluationResult>, _>>()?;
    let winners = determine_winners(&results);

    writeln!(out, "Board: {}", format_cards(&board))?;
    for (i, (hole, result)) in holes.iter().zip(&results).enumerate() {
        writeln!(
            out,
            "Player {}: {} {}",
            i + 1,
            format_cards(hole),
            format_result(result)
        )?;
    }
    let names: Vec<String> = winners.iter().map(|i| format!("Player {}", i + 1)).collect();
    writeln!(out, "Winners: {}", names.join(", "))?;
    Ok(())
}

fn ensure_distinct(board: &[Card], holes: &[[Card; HOLE_SIZE]]) -> Result<(), CliError> {
    let mut seen = HashSet::new();
    for card in board.iter().chain(holes.iter().flatten()) {
        if !seen.insert(card.id()) {
            return Err(CliError::InvalidInput(format!(
                "{} is dealt more than once",
                card.name()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_best_hand_wins() {
        let mut out = Vec::new();
        handle_showdown_command(
            "Qs Js Ts 2c 3d",
            &holes(&["As Ks", "2d 2h", "9c 8c"]),
            Strategy::Anchored,
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Royal Flush"));
        assert!(output.ends_with("Winners: Player 1\n"));
    }

    #[test]
    fn test_identical_strength_splits() {
        let mut out = Vec::new();
        handle_showdown_command(
            "2c 7d 9h Jc 4s",
            &holes(&["Ah Kh", "Ad Kd"]),
            Strategy::Anchored,
            &mut out,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Winners: Player 1, Player 2"));
    }

    #[test]
    fn test_shared_card_between_hands_is_rejected() {
        let mut out = Vec::new();
        let err = handle_showdown_command(
            "Qs Js Ts 2c 3d",
            &holes(&["As Ks", "As 9d"]),
            Strategy::Anchored,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_single_player_is_rejected() {
        let mut out = Vec::new();
        let err = handle_showdown_command(
            "Qs Js Ts 2c 3d",
            &holes(&["As Ks"]),
            Strategy::Exhaustive,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
