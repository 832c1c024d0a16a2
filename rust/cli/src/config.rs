//! Layered CLI settings: defaults, then an optional TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line
//! flags are applied on top by each command.

use serde::{Deserialize, Serialize};
use std::fs;

use holdem_engine::hand::Strategy;
use holdem_engine::table::{MAX_PLAYERS, MIN_PLAYERS};

pub const CONFIG_VAR: &str = "HOLDEM_CONFIG";
pub const SEED_VAR: &str = "HOLDEM_SEED";
pub const STRATEGY_VAR: &str = "HOLDEM_STRATEGY";
pub const PLAYERS_VAR: &str = "HOLDEM_PLAYERS";
pub const FIXTURES_VAR: &str = "HOLDEM_FIXTURES";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub strategy: Strategy,
    pub players: usize,
    pub fixtures: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            strategy: Strategy::Anchored,
            players: 2,
            fixtures: 1000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub strategy: ValueSource,
    pub players: ValueSource,
    pub fixtures: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            strategy: ValueSource::Default,
            players: ValueSource::Default,
            fixtures: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Resolves settings reading variables through `lookup`. Empty values count
/// as unset.
pub fn load_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Some(path) = var(CONFIG_VAR) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.fixtures {
            cfg.fixtures = v;
            sources.fixtures = ValueSource::File;
        }
    }

    if let Some(seed) = var(SEED_VAR) {
        cfg.seed = Some(
            seed.trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {}", seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(strategy) = var(STRATEGY_VAR) {
        cfg.strategy = strategy.parse().map_err(ConfigError::Invalid)?;
        sources.strategy = ValueSource::Env;
    }
    if let Some(players) = var(PLAYERS_VAR) {
        cfg.players = players
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid players: {}", players)))?;
        sources.players = ValueSource::Env;
    }
    if let Some(count) = var(FIXTURES_VAR) {
        cfg.fixtures = count
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid fixtures: {}", count)))?;
        sources.fixtures = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategy: Option<Strategy>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    fixtures: Option<u32>,
}

pub fn validate_players(players: usize) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
        return Err(ConfigError::Invalid(format!(
            "players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    Ok(())
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_players(cfg.players)?;
    if cfg.fixtures == 0 {
        return Err(ConfigError::Invalid(
            "fixtures must be >=1".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let resolved = load_from(env(&[])).unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
        assert_eq!(resolved.sources.strategy, ValueSource::Default);
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdem.toml");
        fs::write(&path, "seed = 7\nstrategy = \"exhaustive\"\nplayers = 4\n").unwrap();
        let path_str = path.to_string_lossy().to_string();

        let resolved = load_from(env(&[(CONFIG_VAR, path_str.as_str()), (SEED_VAR, "99")])).unwrap();
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.seed, ValueSource::Env);
        assert_eq!(resolved.config.strategy, Strategy::Exhaustive);
        assert_eq!(resolved.sources.strategy, ValueSource::File);
        assert_eq!(resolved.config.players, 4);
        assert_eq!(resolved.sources.players, ValueSource::File);
        assert_eq!(resolved.sources.fixtures, ValueSource::Default);
    }

    #[test]
    fn empty_values_are_ignored() {
        let resolved = load_from(env(&[(SEED_VAR, ""), (STRATEGY_VAR, "  ")])).unwrap();
        assert_eq!(resolved.config.seed, None);
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(load_from(env(&[(SEED_VAR, "abc")])).is_err());
        assert!(load_from(env(&[(STRATEGY_VAR, "random")])).is_err());
        assert!(load_from(env(&[(PLAYERS_VAR, "1")])).is_err());
        assert!(load_from(env(&[(PLAYERS_VAR, "11")])).is_err());
        assert!(load_from(env(&[(FIXTURES_VAR, "0")])).is_err());
        assert!(load_from(env(&[(CONFIG_VAR, "/nonexistent/holdem.toml")])).is_err());
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "level = 3\n").unwrap();
        let path_str = path.to_string_lossy().to_string();
        let err = load_from(env(&[(CONFIG_VAR, path_str.as_str())])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
