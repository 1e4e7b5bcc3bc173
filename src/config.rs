use std::env;
use std::str::FromStr;

use log::warn;

use crate::blockchain::MINE_RATE_MS;
use crate::wallet::Replay;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Node settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub mine_rate_ms: i64,
    pub balance_replay: Replay,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mine_rate_ms: MINE_RATE_MS,
            balance_replay: Replay::Full,
        }
    }
}

impl Settings {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Unparseable values fall back to
    /// defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            mine_rate_ms: parse_or("MINE_RATE_MS", lookup("MINE_RATE_MS"), defaults.mine_rate_ms),
            balance_replay: parse_or(
                "BALANCE_REPLAY",
                lookup("BALANCE_REPLAY"),
                defaults.balance_replay,
            ),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("CONFIG - invalid {key}={value:?}, using {default:?}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::Settings;
    use crate::blockchain::MINE_RATE_MS;
    use crate::wallet::Replay;

    fn from_map(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = from_map(&[]);
        assert_eq!(s, Settings::default());
        assert_eq!(s.port, 8080);
        assert_eq!(s.mine_rate_ms, MINE_RATE_MS);
    }

    #[test]
    fn reads_values() {
        let s = from_map(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("MINE_RATE_MS", "250"),
            ("BALANCE_REPLAY", "since_last_spend"),
        ]);
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 3000);
        assert_eq!(s.mine_rate_ms, 250);
        assert_eq!(s.balance_replay, Replay::SinceLastSpend);
    }

    #[test]
    fn invalid_values_fall_back() {
        let s = from_map(&[("PORT", "eighty"), ("BALANCE_REPLAY", "sometimes")]);
        assert_eq!(s.port, 8080);
        assert_eq!(s.balance_replay, Replay::Full);
    }
}
