//! A headless battery monitor: polls battery state on a fixed cadence, keeps
//! a bounded percent history, and fires edge-triggered threshold alerts that
//! are mapped to user-configured actions.

pub mod utils {
    pub mod error;
    pub mod logging;
}
pub mod actions;
pub mod collection;
pub mod constants;
pub mod event;
pub mod options;
pub mod sampler;

use std::{
    fs,
    io::Write,
    path::PathBuf,
    sync::{mpsc::Sender, Arc, Condvar, Mutex},
    thread,
    time::Duration,
};

use constants::{CONFIG_TEXT, DEFAULT_CONFIG_FILE_PATH, DEFAULT_LOG_FILE_PATH};
use event::BatwatchEvent;
use utils::error;

/// Resolve the config file path: the explicitly-given location if there is
/// one, otherwise the platform config directory. On non-Windows systems an
/// existing `~/.config` copy wins over the XDG location, to not break setups
/// that predate the XDG lookup.
pub fn read_config(config_location: Option<&str>) -> error::Result<Option<PathBuf>> {
    let config_path = if let Some(conf_loc) = config_location {
        Some(PathBuf::from(conf_loc))
    } else if cfg!(target_os = "windows") {
        if let Some(config_path) = dirs::config_dir() {
            let mut path = config_path;
            path.push(DEFAULT_CONFIG_FILE_PATH);
            Some(path)
        } else {
            None
        }
    } else if let Some(home_path) = dirs::home_dir() {
        let mut path = home_path;
        path.push(".config/");
        path.push(DEFAULT_CONFIG_FILE_PATH);
        if path.exists() {
            // If it already exists, use the old one.
            Some(path)
        } else {
            // If it does not, use the new one!
            if let Some(config_path) = dirs::config_dir() {
                let mut path = config_path;
                path.push(DEFAULT_CONFIG_FILE_PATH);
                Some(path)
            } else {
                None
            }
        }
    } else {
        None
    };

    Ok(config_path)
}

/// Parse the config file at `config_path`, creating it (and its parent
/// directories) with the default template if it doesn't exist yet.
pub fn create_or_get_config(
    config_path: &Option<PathBuf>,
) -> error::Result<options::config::Config> {
    if let Some(path) = config_path {
        if let Ok(config_string) = fs::read_to_string(path) {
            // We found a config file!
            Ok(toml_edit::de::from_str(config_string.as_str())?)
        } else {
            // Config file DNE...
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }
            fs::File::create(path)?.write_all(CONFIG_TEXT.as_bytes())?;
            Ok(options::config::Config::default())
        }
    } else {
        // Don't write, the config path was somehow None...
        Ok(options::config::Config::default())
    }
}

/// Where the log file goes when the platform has a config directory.
pub fn default_log_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(DEFAULT_LOG_FILE_PATH);
        path
    })
}

/// Spawn the collection thread. It polls the battery once per
/// `poll_rate_in_milliseconds` and sends each reading to the main thread,
/// until either the termination lock flips to true (the condvar cuts the
/// inter-poll wait short) or the receiving side hangs up.
pub fn create_collection_thread(
    sender: Sender<BatwatchEvent>, termination_ctrl_lock: Arc<Mutex<bool>>,
    termination_ctrl_cvar: Arc<Condvar>, poll_rate_in_milliseconds: u64,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut source = collection::BatterySource::default();

        loop {
            // Check once at the very top...
            if let Ok(is_terminated) = termination_ctrl_lock.try_lock() {
                // We don't block here.
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }

            let reading = source.poll();

            // Yet another check to bail if needed...
            if let Ok(is_terminated) = termination_ctrl_lock.try_lock() {
                // We don't block here.
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }

            if sender
                .send(BatwatchEvent::Update(Box::from(reading)))
                .is_err()
            {
                break;
            }

            if let Ok((is_terminated, _wait_timeout_result)) = termination_ctrl_cvar.wait_timeout(
                termination_ctrl_lock.lock().unwrap(),
                Duration::from_millis(poll_rate_in_milliseconds),
            ) {
                if *is_terminated {
                    drop(is_terminated);
                    break;
                }
            }
        }
    })
}
