use serde::{Deserialize, Serialize};

use super::{ConfigError, Network};

/// Address prefixes distinguishing the encodings used on one network.
#[derive(Copy, Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AddressPrefixes {
    pub address: u64,
    pub integrated: u64,
    pub subaddress: u64,
}

impl AddressPrefixes {
    pub const fn new(address: u64, integrated: u64, subaddress: u64) -> Self {
        AddressPrefixes {
            address,
            integrated,
            subaddress,
        }
    }

    /// Returns true if no two prefixes of the triplet are equal.
    pub fn is_distinct(&self) -> bool {
        self.address != self.integrated
            && self.address != self.subaddress
            && self.integrated != self.subaddress
    }

    pub(crate) fn validate(&self, network: Network) -> Result<(), ConfigError> {
        if !self.is_distinct() {
            return Err(ConfigError::DuplicatePrefix { network });
        }

        Ok(())
    }
}

/// One prefix triplet per network.
#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NetworkPrefixes {
    pub mainnet: AddressPrefixes,
    pub testnet: AddressPrefixes,
    pub stagenet: AddressPrefixes,
}

impl NetworkPrefixes {
    pub fn for_network(&self, network: Network) -> &AddressPrefixes {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
            Network::Stagenet => &self.stagenet,
        }
    }

    /// Checks distinctness within every network. Prefixes may repeat across
    /// networks.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for network in Network::ALL {
            self.for_network(network).validate(network)?;
        }

        Ok(())
    }
}
