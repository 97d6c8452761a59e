//! Runtime configuration for the console game.
//!
//! Starts from [`Config::default`], then the environment gets a say, then the command line.

use crate::{Error, Result};

/// The log filter used if nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "tenzies=info";

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Config {
    /// Seed for the dice, for reproducible games. `None` means seed from entropy.
    pub seed: Option<u64>,
    /// An `EnvFilter` directive string for the log.
    pub log_filter: String,
    /// Whether to color held dice.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.into(),
            color: true,
        }
    }
}

fn parse_seed(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("seed {:?}: {}", raw, e)))
}

impl Config {
    /// Load from the process environment and command line.
    pub fn load(args: impl IntoIterator<Item = String>) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())?.with_args(args)
    }

    /// Apply environment overrides, reading variables through `lookup`:
    ///
    /// - `TENZIES_SEED`: seed for the dice
    /// - `TENZIES_LOG`, or failing that `RUST_LOG`: log filter
    /// - `NO_COLOR`: if set to anything non-empty, turns color off
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = lookup("TENZIES_SEED") {
            config.seed = Some(parse_seed(&v)?);
        }
        if let Some(v) = lookup("TENZIES_LOG").or_else(|| lookup("RUST_LOG")) {
            config.log_filter = v;
        }
        if lookup("NO_COLOR").map_or(false, |v| !v.is_empty()) {
            config.color = false;
        }
        Ok(config)
    }

    /// Apply command-line overrides. Expects the arguments *without* the binary name.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let v = args.next().ok_or("--seed needs a value")?;
                    self.seed = Some(parse_seed(&v)?);
                }
                "--log" => {
                    self.log_filter = args.next().ok_or("--log needs a filter")?;
                }
                "--no-color" => self.color = false,
                other => {
                    if let Some(v) = other.strip_prefix("--seed=") {
                        self.seed = Some(parse_seed(v)?);
                    } else if let Some(v) = other.strip_prefix("--log=") {
                        self.log_filter = v.into();
                    } else {
                        return Err(Error::Config(format!("unknown argument {:?}", other)));
                    }
                }
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_env_is_default() {
        assert_eq!(Config::from_lookup(env(&[])).unwrap(), Config::default());
    }

    #[test]
    fn env_overrides() {
        let config = Config::from_lookup(env(&[
            ("TENZIES_SEED", " 1234 "),
            ("RUST_LOG", "debug"),
            ("NO_COLOR", "1"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_filter, "debug");
        assert!(!config.color);
    }

    #[test]
    fn tenzies_log_beats_rust_log() {
        let config =
            Config::from_lookup(env(&[("RUST_LOG", "warn"), ("TENZIES_LOG", "tenzies=trace")]))
                .unwrap();
        assert_eq!(config.log_filter, "tenzies=trace");
    }

    #[test]
    fn empty_no_color_is_ignored() {
        assert!(Config::from_lookup(env(&[("NO_COLOR", "")])).unwrap().color);
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(matches!(
            Config::from_lookup(env(&[("TENZIES_SEED", "lucky")])),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::default().with_args(args(&["--seed", "-3"])),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn args_beat_env() {
        let config = Config::from_lookup(env(&[("TENZIES_SEED", "1")]))
            .unwrap()
            .with_args(args(&["--seed", "99", "--no-color", "--log=off"]))
            .unwrap();
        assert_eq!(config.seed, Some(99));
        assert!(!config.color);
        assert_eq!(config.log_filter, "off");

        let config = Config::default().with_args(args(&["--seed=5"])).unwrap();
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn bad_args_are_rejected() {
        assert!(matches!(
            Config::default().with_args(args(&["--seed"])),
            Err(Error::Bare(_))
        ));
        assert!(matches!(
            Config::default().with_args(args(&["--turbo"])),
            Err(Error::Config(_))
        ));
    }
}
