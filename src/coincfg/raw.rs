use serde::{Deserialize, Serialize};

/// Coin parameter record as it appears in a definition file, before any
/// validation. Integers are signed so that a negative value surfaces as a
/// configuration error naming the field instead of a decode failure.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawCoinConfig {
    #[serde(default)]
    pub testnet: bool,
    #[serde(default)]
    pub stagenet: bool,

    pub coin_unit_places: i64,
    pub tx_min_confirms: i64,
    pub tx_coinbase_min_confirms: i64,

    pub coin_symbol: String,
    pub open_alias_prefix: String,
    pub coin_name: String,
    pub coin_uri_prefix: String,

    pub address_prefix: i64,
    pub integrated_address_prefix: i64,
    pub sub_address_prefix: i64,
    pub address_prefix_testnet: i64,
    pub integrated_address_prefix_testnet: i64,
    pub sub_address_prefix_testnet: i64,
    pub address_prefix_stagenet: i64,
    pub integrated_address_prefix_stagenet: i64,
    pub sub_address_prefix_stagenet: i64,

    // Decimal strings, the values outgrow 64 bits.
    #[serde(rename = "feePerKB")]
    pub fee_per_kb: String,
    pub dust_threshold: String,

    pub tx_charge_ratio: f64,
    pub default_mixin: i64,
    #[serde(default)]
    pub tx_charge_address: String,

    pub idle_timeout: i64,
    pub idle_warning_duration: i64,
    pub max_block_number: i64,
    pub avg_block_time: i64,

    #[serde(default)]
    pub debug_mode: bool,
}

impl RawCoinConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
