use std::{fmt, str::FromStr};

use log::debug;

use super::{CoinConfig, ConfigError, Network};

/// Coins shipped with the crate. All share one schema; each is backed by an
/// embedded definition file.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Coin {
    Aeon,
    Monero,
    Loki,
}

impl Coin {
    pub fn all() -> &'static [Coin] {
        &[Coin::Aeon, Coin::Monero, Coin::Loki]
    }

    /// Definition file contents in TOML.
    pub fn definition(&self) -> &'static str {
        match self {
            Coin::Aeon => include_str!("../../coins/aeon.toml"),
            Coin::Monero => include_str!("../../coins/monero.toml"),
            Coin::Loki => include_str!("../../coins/loki.toml"),
        }
    }

    /// Builds the validated configuration of this coin for `network`.
    pub fn load(&self, network: Network) -> Result<CoinConfig, ConfigError> {
        debug!("loading bundled {} configuration for {}", self, network);

        Ok(CoinConfig::from_toml_str(self.definition())?.with_network(network))
    }

    /// Prefers a user file at the coin's default config path and falls back
    /// to the bundled definition when none exists.
    #[cfg(feature = "appdata")]
    pub fn load_or_bundled(&self, network: Network) -> Result<CoinConfig, ConfigError> {
        match crate::coinutil::app_data::default_config_path(*self) {
            Some(path) if path.is_file() => {
                log::info!("using {} configuration override at '{}'", self, path.display());
                Ok(CoinConfig::from_toml_file(&path)?.with_network(network))
            }

            Some(path) => {
                log::warn!(
                    "no configuration found at '{}', using bundled {} definition",
                    path.display(),
                    self
                );
                self.load(network)
            }

            None => self.load(network),
        }
    }
}

impl FromStr for Coin {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aeon" => Ok(Coin::Aeon),
            "monero" | "xmr" => Ok(Coin::Monero),
            "loki" => Ok(Coin::Loki),
            _ => Err(ConfigError::UnknownCoin(s.to_string())),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Coin::Aeon => f.write_str("aeon"),
            Coin::Monero => f.write_str("monero"),
            Coin::Loki => f.write_str("loki"),
        }
    }
}
