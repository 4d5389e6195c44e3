//! How batwatch is configured: the config file and the runtime flags, merged
//! and validated into a [`MonitorSettings`].

pub mod args;
pub mod config;

use serde::Deserialize;

use crate::{
    actions::ActionSettings,
    constants::{
        DEFAULT_CRITICAL_PERCENT, DEFAULT_FULL_PERCENT, DEFAULT_HIBERNATE_COMMAND,
        DEFAULT_HIBERNATE_PERCENT, DEFAULT_HISTORY_CAPACITY, DEFAULT_POLL_RATE_IN_MILLISECONDS,
        DEFAULT_POWER_SAVER_COMMAND, DEFAULT_POWER_SAVER_PERCENT,
        MINIMUM_POLL_RATE_IN_MILLISECONDS,
    },
    sampler::Thresholds,
    utils::error::{self, MonitorError},
};
use config::Config;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}

/// The final runtime settings, built from the defaults, the config file, and
/// the args (in increasing order of precedence).
#[derive(Clone, Debug)]
pub struct MonitorSettings {
    pub poll_rate_in_milliseconds: u64,
    pub history_capacity: usize,
    pub thresholds: Thresholds,
    pub actions: ActionSettings,
}

pub fn build_settings(
    matches: &clap::ArgMatches, config: &Config,
) -> error::Result<MonitorSettings> {
    let thresholds = get_thresholds(matches, config)?;

    Ok(MonitorSettings {
        poll_rate_in_milliseconds: get_poll_rate_in_milliseconds(matches, config)?,
        history_capacity: get_history_capacity(matches, config)?,
        thresholds,
        actions: get_action_settings(config, thresholds)?,
    })
}

fn get_poll_rate_in_milliseconds(
    matches: &clap::ArgMatches, config: &Config,
) -> error::Result<u64> {
    let poll_rate = if let Some(rate) = matches.get_one::<String>("rate") {
        try_parse_ms(rate)?
    } else if let Some(rate) = config.flags.as_ref().and_then(|flags| flags.rate.as_ref()) {
        match rate {
            StringOrNum::String(rate) => try_parse_ms(rate)?,
            StringOrNum::Num(rate) => *rate,
        }
    } else {
        DEFAULT_POLL_RATE_IN_MILLISECONDS
    };

    if poll_rate < MINIMUM_POLL_RATE_IN_MILLISECONDS {
        Err(MonitorError::ConfigError(format!(
            "set your poll rate to be at least {MINIMUM_POLL_RATE_IN_MILLISECONDS} milliseconds."
        )))
    } else {
        Ok(poll_rate)
    }
}

/// Parse a string as either a raw millisecond value or a human duration.
fn try_parse_ms(text: &str) -> error::Result<u64> {
    if let Ok(milliseconds) = text.parse::<u64>() {
        Ok(milliseconds)
    } else if let Ok(duration) = humantime::parse_duration(text) {
        Ok(duration.as_millis() as u64)
    } else {
        Err(MonitorError::ConfigError(
            "make sure your poll rate is a valid number or human duration.".to_string(),
        ))
    }
}

fn get_thresholds(matches: &clap::ArgMatches, config: &Config) -> error::Result<Thresholds> {
    let thresholds = config.thresholds.clone().unwrap_or_default();

    let critical = if let Some(critical) = matches.get_one::<String>("critical") {
        critical.parse::<u64>()?
    } else if let Some(critical) = thresholds.critical {
        critical
    } else {
        u64::from(DEFAULT_CRITICAL_PERCENT)
    };
    if !(1..=99).contains(&critical) {
        return Err(MonitorError::ConfigError(
            "set your critical threshold between 1% and 99%.".to_string(),
        ));
    }

    let full = if let Some(full) = matches.get_one::<String>("full") {
        full.parse::<u64>()?
    } else if let Some(full) = thresholds.full {
        full
    } else {
        u64::from(DEFAULT_FULL_PERCENT)
    };
    if !(50..=100).contains(&full) {
        return Err(MonitorError::ConfigError(
            "set your full threshold between 50% and 100%.".to_string(),
        ));
    }

    Ok(Thresholds {
        critical_percent: critical as u8,
        full_percent: full as u8,
    })
}

fn get_history_capacity(matches: &clap::ArgMatches, config: &Config) -> error::Result<usize> {
    let history_size = if let Some(history_size) = matches.get_one::<String>("history_size") {
        history_size.parse::<u64>()?
    } else if let Some(history_size) = config
        .flags
        .as_ref()
        .and_then(|flags| flags.history_size)
    {
        history_size
    } else {
        DEFAULT_HISTORY_CAPACITY as u64
    };

    if history_size == 0 {
        Err(MonitorError::ConfigError(
            "set your history size to be at least 1 sample.".to_string(),
        ))
    } else {
        Ok(history_size as usize)
    }
}

fn get_action_settings(config: &Config, thresholds: Thresholds) -> error::Result<ActionSettings> {
    let flags = config.flags.clone().unwrap_or_default();
    let threshold_config = config.thresholds.clone().unwrap_or_default();
    let commands = config.actions.clone().unwrap_or_default();

    // Only enforce the hibernate/critical ordering for an explicitly set
    // hibernate threshold; a low critical threshold alone must not trip an
    // error about a setting the user never touched. The built-in default is
    // clamped to the critical threshold instead.
    let hibernate = match threshold_config.hibernate {
        Some(hibernate) => {
            if hibernate > u64::from(thresholds.critical_percent) {
                return Err(MonitorError::ConfigError(
                    "set your hibernate threshold to be at most the critical threshold."
                        .to_string(),
                ));
            }
            hibernate
        }
        None => u64::from(DEFAULT_HIBERNATE_PERCENT).min(u64::from(thresholds.critical_percent)),
    };

    let power_saver = threshold_config
        .power_saver
        .unwrap_or(u64::from(DEFAULT_POWER_SAVER_PERCENT));
    if !(1..=100).contains(&power_saver) {
        return Err(MonitorError::ConfigError(
            "set your power saver threshold between 1% and 100%.".to_string(),
        ));
    }

    Ok(ActionSettings {
        notifications: flags.notifications.unwrap_or(true),
        sound: flags.sound.unwrap_or(true),
        custom_command: commands
            .custom_command
            .filter(|command| !command.trim().is_empty()),
        auto_hibernate: flags.auto_hibernate.unwrap_or(false),
        hibernate_percent: hibernate as u8,
        auto_power_saver: flags.auto_power_saver.unwrap_or(false),
        power_saver_percent: power_saver as u8,
        hibernate_command: commands
            .hibernate_command
            .unwrap_or_else(|| DEFAULT_HIBERNATE_COMMAND.to_string()),
        power_saver_command: commands
            .power_saver_command
            .unwrap_or_else(|| DEFAULT_POWER_SAVER_COMMAND.to_string()),
    })
}
