use std::{fs, path::Path, str::FromStr, time::Duration};

use log::{debug, warn};

use super::{
    constants::MAX_UNIT_PLACES, AddressPrefixes, ConfigError, Network, NetworkPrefixes,
    RawCoinConfig,
};
use crate::coinutil::amount::Amount;

/// Keys of the source record, in record order. Every key resolves through
/// [`CoinConfig::get`].
pub const KEYS: [&str; 28] = [
    "testnet",
    "stagenet",
    "coinUnitPlaces",
    "txMinConfirms",
    "txCoinbaseMinConfirms",
    "coinSymbol",
    "openAliasPrefix",
    "coinName",
    "coinUriPrefix",
    "addressPrefix",
    "integratedAddressPrefix",
    "subAddressPrefix",
    "addressPrefixTestnet",
    "integratedAddressPrefixTestnet",
    "subAddressPrefixTestnet",
    "addressPrefixStagenet",
    "integratedAddressPrefixStagenet",
    "subAddressPrefixStagenet",
    "feePerKB",
    "dustThreshold",
    "txChargeRatio",
    "defaultMixin",
    "txChargeAddress",
    "idleTimeout",
    "idleWarningDuration",
    "maxBlockNumber",
    "avgBlockTime",
    "debugMode",
];

/// Value returned by the keyed accessor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigValue<'a> {
    Bool(bool),
    Integer(u64),
    Float(f64),
    Text(&'a str),
    BigInt(&'a Amount),
}

/// Validated coin parameters for one network. Built once, never mutated;
/// share it by reference.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinConfig {
    network: Network,
    display_unit_places: u32,
    min_confirmations: u64,
    coinbase_min_confirmations: u64,
    symbol: String,
    name: String,
    uri_prefix: String,
    alias_prefix: String,
    prefixes: NetworkPrefixes,
    fee_per_kb: Amount,
    dust_threshold: Amount,
    charge_ratio: f64,
    charge_address: Option<String>,
    default_mixin: u64,
    idle_timeout_seconds: u64,
    idle_warning_seconds: u64,
    max_block_number: u64,
    avg_block_time_seconds: u64,
    debug_mode: bool,
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, ConfigError> {
    u64::try_from(value).map_err(|_| ConfigError::Negative { field, value })
}

fn positive(field: &'static str, value: i64) -> Result<u64, ConfigError> {
    match non_negative(field, value)? {
        0 => Err(ConfigError::NotPositive { field }),
        v => Ok(v),
    }
}

fn non_empty(field: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty { field });
    }

    Ok(value)
}

fn big_int(field: &'static str, value: &str) -> Result<Amount, ConfigError> {
    Amount::from_str(value).map_err(|e| {
        debug!("{} failed to parse, error: {}", field, e);
        ConfigError::BigInt {
            field,
            value: value.to_string(),
        }
    })
}

impl TryFrom<RawCoinConfig> for CoinConfig {
    type Error = ConfigError;

    fn try_from(raw: RawCoinConfig) -> Result<Self, Self::Error> {
        let network = Network::from_flags(raw.testnet, raw.stagenet)?;

        let places = non_negative("coinUnitPlaces", raw.coin_unit_places)?;
        if places > MAX_UNIT_PLACES as u64 {
            return Err(ConfigError::OutOfRange {
                field: "coinUnitPlaces",
                value: raw.coin_unit_places,
            });
        }

        let min_confirmations = positive("txMinConfirms", raw.tx_min_confirms)?;
        let coinbase_min_confirmations =
            positive("txCoinbaseMinConfirms", raw.tx_coinbase_min_confirms)?;
        if coinbase_min_confirmations < min_confirmations {
            warn!(
                "txCoinbaseMinConfirms ({}) is below txMinConfirms ({})",
                coinbase_min_confirmations, min_confirmations
            );
        }

        let prefixes = NetworkPrefixes {
            mainnet: AddressPrefixes::new(
                non_negative("addressPrefix", raw.address_prefix)?,
                non_negative("integratedAddressPrefix", raw.integrated_address_prefix)?,
                non_negative("subAddressPrefix", raw.sub_address_prefix)?,
            ),
            testnet: AddressPrefixes::new(
                non_negative("addressPrefixTestnet", raw.address_prefix_testnet)?,
                non_negative(
                    "integratedAddressPrefixTestnet",
                    raw.integrated_address_prefix_testnet,
                )?,
                non_negative("subAddressPrefixTestnet", raw.sub_address_prefix_testnet)?,
            ),
            stagenet: AddressPrefixes::new(
                non_negative("addressPrefixStagenet", raw.address_prefix_stagenet)?,
                non_negative(
                    "integratedAddressPrefixStagenet",
                    raw.integrated_address_prefix_stagenet,
                )?,
                non_negative("subAddressPrefixStagenet", raw.sub_address_prefix_stagenet)?,
            ),
        };
        prefixes.validate()?;

        let fee_per_kb = big_int("feePerKB", &raw.fee_per_kb)?;
        let dust_threshold = big_int("dustThreshold", &raw.dust_threshold)?;

        if !raw.tx_charge_ratio.is_finite() || !(0.0..=1.0).contains(&raw.tx_charge_ratio) {
            return Err(ConfigError::ChargeRatio(raw.tx_charge_ratio));
        }

        let idle_timeout_seconds = positive("idleTimeout", raw.idle_timeout)?;
        let idle_warning_seconds = positive("idleWarningDuration", raw.idle_warning_duration)?;
        if idle_warning_seconds > idle_timeout_seconds {
            return Err(ConfigError::IdleWarningExceedsTimeout {
                warning: idle_warning_seconds,
                timeout: idle_timeout_seconds,
            });
        }

        // Kept as written. Empty means no charge.
        let charge_address = if raw.tx_charge_address.is_empty() {
            None
        } else if raw.tx_charge_address.trim() != raw.tx_charge_address {
            return Err(ConfigError::Whitespace {
                field: "txChargeAddress",
            });
        } else {
            Some(raw.tx_charge_address)
        };

        Ok(CoinConfig {
            network,
            display_unit_places: places as u32,
            min_confirmations,
            coinbase_min_confirmations,
            symbol: non_empty("coinSymbol", raw.coin_symbol)?,
            name: non_empty("coinName", raw.coin_name)?,
            uri_prefix: non_empty("coinUriPrefix", raw.coin_uri_prefix)?,
            alias_prefix: non_empty("openAliasPrefix", raw.open_alias_prefix)?,
            prefixes,
            fee_per_kb,
            dust_threshold,
            charge_ratio: raw.tx_charge_ratio,
            charge_address,
            default_mixin: non_negative("defaultMixin", raw.default_mixin)?,
            idle_timeout_seconds,
            idle_warning_seconds,
            max_block_number: positive("maxBlockNumber", raw.max_block_number)?,
            avg_block_time_seconds: positive("avgBlockTime", raw.avg_block_time)?,
            debug_mode: raw.debug_mode,
        })
    }
}

impl CoinConfig {
    /// Decodes and validates a definition in TOML form.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw = RawCoinConfig::from_toml_str(s)?;
        Self::try_from(raw)
    }

    /// Reads, decodes and validates a definition file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("loading coin configuration from '{}'", path.display());

        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Returns the same parameters resolved for another network.
    pub fn with_network(&self, network: Network) -> Self {
        CoinConfig {
            network,
            ..self.clone()
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn display_unit_places(&self) -> u32 {
        self.display_unit_places
    }

    pub fn min_confirmations(&self) -> u64 {
        self.min_confirmations
    }

    pub fn coinbase_min_confirmations(&self) -> u64 {
        self.coinbase_min_confirmations
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri_prefix(&self) -> &str {
        &self.uri_prefix
    }

    pub fn alias_prefix(&self) -> &str {
        &self.alias_prefix
    }

    /// Prefixes of the active network.
    pub fn address_prefixes(&self) -> &AddressPrefixes {
        self.prefixes.for_network(self.network)
    }

    pub fn network_prefixes(&self) -> &NetworkPrefixes {
        &self.prefixes
    }

    pub fn fee_per_kb(&self) -> &Amount {
        &self.fee_per_kb
    }

    pub fn dust_threshold(&self) -> &Amount {
        &self.dust_threshold
    }

    pub fn charge_ratio(&self) -> f64 {
        self.charge_ratio
    }

    pub fn charge_address(&self) -> Option<&str> {
        self.charge_address.as_deref()
    }

    pub fn default_mixin(&self) -> u64 {
        self.default_mixin
    }

    pub fn idle_timeout_seconds(&self) -> u64 {
        self.idle_timeout_seconds
    }

    pub fn idle_warning_seconds(&self) -> u64 {
        self.idle_warning_seconds
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_seconds)
    }

    pub fn idle_warning(&self) -> Duration {
        Duration::from_secs(self.idle_warning_seconds)
    }

    pub fn max_block_number(&self) -> u64 {
        self.max_block_number
    }

    pub fn avg_block_time_seconds(&self) -> u64 {
        self.avg_block_time_seconds
    }

    pub fn avg_block_time(&self) -> Duration {
        Duration::from_secs(self.avg_block_time_seconds)
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Expected wall time until an output gathers `confirmations` blocks.
    pub fn confirmations_eta(&self, confirmations: u64) -> Duration {
        Duration::from_secs(self.avg_block_time_seconds.saturating_mul(confirmations))
    }

    /// Returns true once an output has matured, coinbase outputs using the
    /// longer unlock window.
    pub fn is_spendable(&self, confirmations: u64, coinbase: bool) -> bool {
        let required = if coinbase {
            self.coinbase_min_confirmations
        } else {
            self.min_confirmations
        };

        confirmations >= required
    }

    /// Formats atoms in coin units, e.g. `0.002 AEON`.
    pub fn format_amount(&self, amount: &Amount) -> String {
        format!("{} {}", amount.format(self.display_unit_places), self.symbol)
    }

    /// Looks a value up by its source record key.
    pub fn get(&self, key: &str) -> Result<ConfigValue<'_>, ConfigError> {
        let p = &self.prefixes;

        let value = match key {
            "testnet" => ConfigValue::Bool(self.network.is_testnet()),
            "stagenet" => ConfigValue::Bool(self.network.is_stagenet()),
            "coinUnitPlaces" => ConfigValue::Integer(self.display_unit_places as u64),
            "txMinConfirms" => ConfigValue::Integer(self.min_confirmations),
            "txCoinbaseMinConfirms" => ConfigValue::Integer(self.coinbase_min_confirmations),
            "coinSymbol" => ConfigValue::Text(&self.symbol),
            "openAliasPrefix" => ConfigValue::Text(&self.alias_prefix),
            "coinName" => ConfigValue::Text(&self.name),
            "coinUriPrefix" => ConfigValue::Text(&self.uri_prefix),
            "addressPrefix" => ConfigValue::Integer(p.mainnet.address),
            "integratedAddressPrefix" => ConfigValue::Integer(p.mainnet.integrated),
            "subAddressPrefix" => ConfigValue::Integer(p.mainnet.subaddress),
            "addressPrefixTestnet" => ConfigValue::Integer(p.testnet.address),
            "integratedAddressPrefixTestnet" => ConfigValue::Integer(p.testnet.integrated),
            "subAddressPrefixTestnet" => ConfigValue::Integer(p.testnet.subaddress),
            "addressPrefixStagenet" => ConfigValue::Integer(p.stagenet.address),
            "integratedAddressPrefixStagenet" => ConfigValue::Integer(p.stagenet.integrated),
            "subAddressPrefixStagenet" => ConfigValue::Integer(p.stagenet.subaddress),
            "feePerKB" => ConfigValue::BigInt(&self.fee_per_kb),
            "dustThreshold" => ConfigValue::BigInt(&self.dust_threshold),
            "txChargeRatio" => ConfigValue::Float(self.charge_ratio),
            "defaultMixin" => ConfigValue::Integer(self.default_mixin),
            "txChargeAddress" => ConfigValue::Text(self.charge_address().unwrap_or("")),
            "idleTimeout" => ConfigValue::Integer(self.idle_timeout_seconds),
            "idleWarningDuration" => ConfigValue::Integer(self.idle_warning_seconds),
            "maxBlockNumber" => ConfigValue::Integer(self.max_block_number),
            "avgBlockTime" => ConfigValue::Integer(self.avg_block_time_seconds),
            "debugMode" => ConfigValue::Bool(self.debug_mode),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };

        Ok(value)
    }
}
