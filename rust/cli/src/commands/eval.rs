//! Eval command: classify two hole cards against a five-card board.

use crate::commands::parse_exact;
use crate::error::CliError;
use crate::formatters::format_cards;
use holdem_engine::hand::{Strategy, BOARD_SIZE, HOLE_SIZE};
use std::io::Write;

/// Handle the eval command.
///
/// Prints the parsed cards, the strategy and the resulting category, high
/// card and kicker.
///
/// # Errors
///
/// `CliError::InvalidInput` for a wrong card count, `CliError::Engine` for
/// an unknown card name or a card given twice.
pub fn handle_eval_command(
    hole: &str,
    board: &str,
    strategy: Strategy,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole: [_; HOLE_SIZE] = parse_exact(hole, "hole")?;
    let board: [_; BOARD_SIZE] = parse_exact(board, "board")?;
    let result = strategy.evaluate(hole, board)?;

    writeln!(out, "Hole: {}", format_cards(&hole))?;
    writeln!(out, "Board: {}", format_cards(&board))?;
    writeln!(out, "Strategy: {}", strategy.as_str())?;
    writeln!(out, "Hand: {}", result.category)?;
    writeln!(out, "High card: {}", result.high_card.name())?;
    writeln!(out, "Kicker: {}", result.kicker.name())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(hole: &str, board: &str, strategy: Strategy) -> Result<String, CliError> {
        let mut out = Vec::new();
        handle_eval_command(hole, board, strategy, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_eval_reports_category_and_ranks() {
        let output = eval("5c 5d", "5h 5s 2c 3d 4h", Strategy::Anchored).unwrap();
        assert!(output.contains("Hand: Four of a Kind"));
        assert!(output.contains("High card: Five"));
        assert!(output.contains("Strategy: anchored"));
    }

    #[test]
    fn test_strategies_disagree_on_high_card() {
        let board = "7c Ah 6h Kc 4c";
        let anchored = eval("Js 5h", board, Strategy::Anchored).unwrap();
        let exhaustive = eval("Js 5h", board, Strategy::Exhaustive).unwrap();
        assert!(anchored.contains("Hand: No Pair"));
        assert!(anchored.contains("High card: Jack"));
        assert!(anchored.contains("Kicker: Five"));
        assert!(exhaustive.contains("Hand: No Pair"));
        assert!(exhaustive.contains("High card: Ace"));
        assert!(exhaustive.contains("Kicker: King"));
    }

    #[test]
    fn test_eval_output_format() {
        let output = eval("As Ks", "Qs Js Ts 2c 3d", Strategy::Anchored).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Hole: ["));
        assert!(lines[1].starts_with("Board: ["));
        assert_eq!(lines[3], "Hand: Royal Flush");
        assert_eq!(lines[4], "High card: Ace");
        assert_eq!(lines[5], "Kicker: King");
    }

    #[test]
    fn test_eval_rejects_duplicates_and_counts() {
        assert!(matches!(
            eval("As Ks", "As Js Ts 2c 3d", Strategy::Anchored),
            Err(CliError::Engine(_))
        ));
        assert!(matches!(
            eval("As Ks Qs", "Js Ts 2c 3d 4h", Strategy::Anchored),
            Err(CliError::InvalidInput(_))
        ));
    }
}
