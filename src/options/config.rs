//! The raw config file shape as deserialized from TOML. Validation and
//! merging with the args happens in the parent module, not here.

use serde::Deserialize;

use super::StringOrNum;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub flags: Option<FlagConfig>,
    pub thresholds: Option<ThresholdConfig>,
    pub actions: Option<ActionConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct FlagConfig {
    pub(crate) rate: Option<StringOrNum>,
    pub(crate) history_size: Option<u64>,
    pub(crate) notifications: Option<bool>,
    pub(crate) sound: Option<bool>,
    pub(crate) auto_hibernate: Option<bool>,
    pub(crate) auto_power_saver: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct ThresholdConfig {
    pub(crate) critical: Option<u64>,
    pub(crate) full: Option<u64>,
    pub(crate) hibernate: Option<u64>,
    pub(crate) power_saver: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct ActionConfig {
    pub(crate) custom_command: Option<String>,
    pub(crate) hibernate_command: Option<String>,
    pub(crate) power_saver_command: Option<String>,
}
