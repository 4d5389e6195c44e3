use std::process::Command;

const BATWATCH_EXE_PATH: &str = env!("CARGO_BIN_EXE_batwatch");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

/// Returns the [`Command`] of a binary invocation of batwatch.
pub fn batwatch_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(BATWATCH_EXE_PATH);
    cmd.args(args);
    cmd
}

/// Returns the [`Command`] of a binary invocation of batwatch with the
/// default, empty config file, so tests never read or create a real user
/// config.
pub fn no_cfg_batwatch_command(args: &[&str]) -> Command {
    let mut cmd = batwatch_command(&DEFAULT_CFG);
    cmd.args(args);
    cmd
}
