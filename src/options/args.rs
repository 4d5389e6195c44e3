//! Argument parsing via clap. Validation of the values themselves happens in
//! the options code, where CLI and config file are merged.

use clap::{crate_version, Arg, ArgAction, ArgMatches, Command};

const TEMPLATE: &str = "\
{name} {version}

{about}

{usage-heading} {usage}

{all-args}";

const USAGE: &str = "batwatch [OPTIONS]";

pub fn get_matches() -> ArgMatches {
    build_app().get_matches()
}

pub fn build_app() -> Command {
    let config_location = Arg::new("config_location")
        .short('C')
        .long("config_location")
        .action(ArgAction::Set)
        .value_name("CONFIG PATH")
        .help("Sets the location of the config file.")
        .long_help(
            "Sets the location of the config file. Expects a config file in the TOML format. \
            If it doesn't exist, one is created.",
        );

    let rate = Arg::new("rate")
        .short('r')
        .long("rate")
        .action(ArgAction::Set)
        .value_name("TIME")
        .help("Sets how often the battery is polled.")
        .long_help(
            "Sets how often the battery is polled. Takes a number in milliseconds or a human \
            duration (e.g. 5s). The minimum is 1000ms, and defaults to 5000ms.",
        );

    let critical = Arg::new("critical")
        .long("critical")
        .action(ArgAction::Set)
        .value_name("PERCENT")
        .help("Sets the critical battery threshold.")
        .long_help(
            "Sets the percent at or below which a critical alert fires while discharging. \
            Must be between 1 and 99, and defaults to 15.",
        );

    let full = Arg::new("full")
        .long("full")
        .action(ArgAction::Set)
        .value_name("PERCENT")
        .help("Sets the full battery threshold.")
        .long_help(
            "Sets the percent at or above which a full-charge alert fires while charging. \
            Must be between 50 and 100, and defaults to 95.",
        );

    let history_size = Arg::new("history_size")
        .long("history_size")
        .action(ArgAction::Set)
        .value_name("COUNT")
        .help("Sets how many percent samples of history to retain.")
        .long_help(
            "Sets how many percent samples of history to retain; the oldest sample is evicted \
            once the history is full. Must be at least 1, and defaults to 60.",
        );

    let debug = Arg::new("debug")
        .long("debug")
        .action(ArgAction::SetTrue)
        .help("Enables debug logging.");

    Command::new("batwatch")
        .version(crate_version!())
        .about(
            "batwatch is a headless battery monitor. It polls the battery on a fixed cadence, \
            keeps a bounded percent history, and fires edge-triggered alerts (and any \
            configured actions) when thresholds are crossed.",
        )
        .override_usage(USAGE)
        .help_template(TEMPLATE)
        .args([config_location, rate, critical, full, history_size, debug])
}
