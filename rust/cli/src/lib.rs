//! # holdem CLI Library
//!
//! Command-line front end for the `holdem-engine` crate: deal seeded rounds,
//! evaluate hands, rank showdowns and generate or verify regression fixtures.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["holdem", "eval", "--hole", "As Ks", "--board", "Qs Js Ts 2c 3d"];
//! let code = holdem_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Play one seeded round to showdown
//! - `eval`: Evaluate two hole cards against a board
//! - `showdown`: Rank several hole card pairs against one board
//! - `fixtures`: Generate JSON-lines regression fixtures
//! - `verify`: Re-evaluate a fixture file
//! - `bench`: Time both evaluation strategies
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_fixtures_command, handle_showdown_command, handle_verify_command,
};
use holdem_engine::hand::Strategy;

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &[
    "deal", "eval", "showdown", "fixtures", "verify", "bench", "cfg",
];

/// Parses `args` and runs one subcommand.
///
/// Settings come from defaults, the file named by `HOLDEM_CONFIG` and
/// `HOLDEM_*` variables; command-line flags win over all of them.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for any error (bad arguments, invalid
/// configuration, invalid cards, failed verification, I/O).
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = match HoldemCli::try_parse_from(&argv) {
        Ok(parsed) => parsed,
        Err(e) => return report_parse_error(e, out, err),
    };

    logging::init_logging(parsed.verbose);

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    let cfg = &resolved.config;
    let pick = |flag: Option<cli::StrategyArg>| flag.map(Strategy::from).unwrap_or(cfg.strategy);

    let outcome = match parsed.cmd {
        Commands::Deal {
            seed,
            players,
            strategy,
        } => handle_deal_command(
            seed.or(cfg.seed),
            players.map(usize::from).unwrap_or(cfg.players),
            pick(strategy),
            out,
        ),
        Commands::Eval {
            hole,
            board,
            strategy,
        } => handle_eval_command(&hole, &board, pick(strategy), out),
        Commands::Showdown {
            board,
            holes,
            strategy,
        } => handle_showdown_command(&board, &holes, pick(strategy), out),
        Commands::Fixtures {
            count,
            seed,
            output,
            strategy,
        } => handle_fixtures_command(
            count.unwrap_or(cfg.fixtures),
            seed.or(cfg.seed),
            output.as_deref(),
            pick(strategy),
            out,
        ),
        Commands::Verify { input, strategy } => {
            handle_verify_command(&input, pick(strategy), out, err)
        }
        Commands::Bench => handle_bench_command(out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match outcome {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(&e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "holdem: Texas Hold'em hand evaluation")?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}
