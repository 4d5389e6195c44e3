//! Defaults shared between the config file, the args, and the settings code.

pub const DEFAULT_POLL_RATE_IN_MILLISECONDS: u64 = 5000;
pub const MINIMUM_POLL_RATE_IN_MILLISECONDS: u64 = 1000;

pub const DEFAULT_HISTORY_CAPACITY: usize = 60;

pub const DEFAULT_CRITICAL_PERCENT: u8 = 15;
pub const DEFAULT_FULL_PERCENT: u8 = 95;
pub const DEFAULT_HIBERNATE_PERCENT: u8 = 5;
pub const DEFAULT_POWER_SAVER_PERCENT: u8 = 20;

pub const DEFAULT_CONFIG_FILE_PATH: &str = "batwatch/batwatch.toml";
pub const DEFAULT_LOG_FILE_PATH: &str = "batwatch/batwatch.log";

cfg_if::cfg_if! {
    if #[cfg(target_os = "windows")] {
        pub const DEFAULT_HIBERNATE_COMMAND: &str = "shutdown /h";
        pub const DEFAULT_POWER_SAVER_COMMAND: &str =
            "powercfg /setactive a1841308-3541-4fab-bc81-f71556f20b4a";
    } else if #[cfg(target_os = "macos")] {
        pub const DEFAULT_HIBERNATE_COMMAND: &str = "pmset sleepnow";
        pub const DEFAULT_POWER_SAVER_COMMAND: &str = "pmset -b lowpowermode 1";
    } else {
        pub const DEFAULT_HIBERNATE_COMMAND: &str = "systemctl hibernate";
        pub const DEFAULT_POWER_SAVER_COMMAND: &str = "powerprofilesctl set power-saver";
    }
}

/// The default config file, written out the first time batwatch runs if no
/// config file exists yet. Everything is commented out; uncommenting a line
/// overrides the built-in default.
pub const CONFIG_TEXT: &str = r##"# This is a default config file for batwatch. All of the settings are commented
# out by default; if you wish to change them, uncomment and modify the setting.

#[flags]
# How often the battery is polled, in milliseconds or a human time (e.g. "5s").
#rate = 5000
# How many percent samples of history to retain.
#history_size = 60
# Whether threshold alerts produce a notification line.
#notifications = true
# Whether threshold alerts ring the terminal bell.
#sound = true
# Whether to run the hibernate command once the hibernate threshold is crossed.
#auto_hibernate = false
# Whether to run the power-saver command when a critical alert fires.
#auto_power_saver = false

#[thresholds]
# Alert when discharging at or below this percent. Must be between 1 and 99.
#critical = 15
# Alert when charging at or above this percent. Must be between 50 and 100.
#full = 95
# Hibernate (if auto_hibernate is set) at or below this percent. Must not
# exceed the critical threshold.
#hibernate = 5
# Switch to power-saver (if auto_power_saver is set) at or below this percent.
#power_saver = 20

#[actions]
# A shell command to run when a critical alert fires.
#custom_command = ""
# The shell command used to hibernate the machine.
#hibernate_command = "systemctl hibernate"
# The shell command used to switch to a power-saver profile.
#power_saver_command = "powerprofilesctl set power-saver"
"##;
