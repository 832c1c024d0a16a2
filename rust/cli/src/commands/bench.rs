//! Bench command handler: time both evaluation strategies.
//!
//! Each strategy evaluates the same 200 seven-card hands, dealt from a deck
//! seeded with 1 and reshuffled before every hand.

use crate::error::CliError;
use holdem_engine::deck::Deck;
use holdem_engine::hand::{Strategy, HAND_SIZE};
use std::io::Write;

const ITERATIONS: usize = 200;

pub fn handle_bench_command(out: &mut dyn Write) -> Result<(), CliError> {
    for strategy in [Strategy::Anchored, Strategy::Exhaustive] {
        let mut deck = Deck::new_with_seed(1);
        let start = std::time::Instant::now();
        let mut cnt = 0usize;
        for _ in 0..ITERATIONS {
            deck.shuffle();
            let ids = deck.deal(HAND_SIZE)?;
            strategy.evaluate_ids([ids[0], ids[1]], [ids[2], ids[3], ids[4], ids[5], ids[6]])?;
            cnt += 1;
        }
        let dur = start.elapsed();
        writeln!(
            out,
            "Benchmark ({}): {} iters in {:?}",
            strategy.as_str(),
            cnt,
            dur
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bench_command_output_format() {
        let mut out = Vec::new();
        handle_bench_command(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Benchmark (anchored): 200 iters in "));
        assert!(lines[1].starts_with("Benchmark (exhaustive): 200 iters in "));
    }
}
