use std::collections::BTreeMap;

use super::{ConfigError, PartialConfig, PartialOptions, KNOWN_OPTIONS};

/// Split a TOML table into typed options and unrecognized entries.
pub fn table_to_options(table: toml::Table) -> Result<PartialOptions, ConfigError> {
    let mut known = toml::Table::new();
    let mut unknown = BTreeMap::new();

    for (name, value) in table {
        if KNOWN_OPTIONS.contains(&name.as_str()) {
            known.insert(name, value);
        } else {
            unknown.insert(name, value);
        }
    }

    let config: PartialConfig = toml::Value::Table(known).try_into()?;
    Ok(PartialOptions { config, unknown })
}

/// Parse calendar options from TOML text.
pub fn parse_options(content: &str) -> Result<PartialOptions, ConfigError> {
    let table: toml::Table = content.parse()?;
    table_to_options(table)
}
