use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Network a wallet front-end runs against. Exactly one is active at a time.
#[derive(Copy, Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Stagenet,
}

impl Network {
    /// Every network, in declaration order.
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Stagenet];

    /// Resolves the legacy pair of independent flags into a single network.
    /// Both flags set at once is rejected.
    pub fn from_flags(testnet: bool, stagenet: bool) -> Result<Self, ConfigError> {
        match (testnet, stagenet) {
            (false, false) => Ok(Network::Mainnet),
            (true, false) => Ok(Network::Testnet),
            (false, true) => Ok(Network::Stagenet),
            (true, true) => Err(ConfigError::ConflictingNetworkFlags),
        }
    }

    pub fn is_mainnet(&self) -> bool {
        *self == Network::Mainnet
    }

    pub fn is_testnet(&self) -> bool {
        *self == Network::Testnet
    }

    pub fn is_stagenet(&self) -> bool {
        *self == Network::Stagenet
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "stagenet" => Ok(Network::Stagenet),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
            Network::Stagenet => f.write_str("stagenet"),
        }
    }
}
