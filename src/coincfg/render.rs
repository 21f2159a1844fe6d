//! Renders a configuration as the `config.js` snippet served to the wallet
//! front-end.

use super::{config::KEYS, CoinConfig, ConfigError, ConfigValue};

fn js_literal(value: &ConfigValue<'_>) -> String {
    match *value {
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Integer(n) => n.to_string(),
        ConfigValue::Float(f) => serde_json::Value::from(f).to_string(),
        ConfigValue::Text(s) => serde_json::Value::from(s).to_string(),
        ConfigValue::BigInt(amount) => format!("new JSBigInt('{}')", amount),
    }
}

/// Returns `var config = {...};` with one entry per record key. The network
/// flags reflect the configuration's active network.
pub fn js_config(config: &CoinConfig) -> Result<String, ConfigError> {
    let entries = KEYS
        .iter()
        .map(|key| {
            config
                .get(key)
                .map(|value| format!("    {}: {}", key, js_literal(&value)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("var config = {{\n{}\n}};\n", entries.join(",\n")))
}
