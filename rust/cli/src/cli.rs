//! Command-line argument definitions.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use holdem_engine::hand::Strategy;

#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Texas Hold'em hand evaluation engine")]
pub struct HoldemCli {
    /// Log more detail to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one round at a seeded table and show every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_parser = clap::value_parser!(u16).range(2..=10))]
        players: Option<u16>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Evaluate two hole cards against a five-card board
    Eval {
        /// Two cards, e.g. "As Ks"
        #[arg(long)]
        hole: String,
        /// Five cards, e.g. "Qs Js Ts 2c 3d"
        #[arg(long)]
        board: String,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Rank several players' hole cards against one board
    Showdown {
        #[arg(long)]
        board: String,
        /// Hole cards of one player; repeat once per player
        #[arg(long = "hole", required = true, num_args = 1)]
        holes: Vec<String>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Generate regression fixtures as JSON lines
    Fixtures {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Re-evaluate a fixture file and report mismatches
    Verify {
        #[arg(long)]
        input: String,
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Time both evaluation strategies on seeded hands
    Bench,
    /// Print the resolved configuration with value sources
    Cfg,
}

/// Evaluation strategy selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Own-card anchored scans (matches historical fixtures)
    Anchored,
    /// Best of all 21 five-card subsets
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Anchored => Strategy::Anchored,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}
