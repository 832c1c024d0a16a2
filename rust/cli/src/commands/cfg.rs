//! Configuration command handler.
//!
//! Prints the resolved settings with the source of each value (default,
//! file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "fixtures": {
//!     "source": "default",
//!     "value": 1000
//!   },
//!   "players": {
//!     "source": "env",
//!     "value": 6
//!   },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "fixtures": {
            "value": config.fixtures,
            "source": sources.fixtures,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
