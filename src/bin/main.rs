//! The batwatch binary: wires the collection thread, the sampling engine,
//! and the action dispatch together.

use std::{
    sync::{mpsc, Arc, Condvar, Mutex},
    time::Instant,
};

use anyhow::{Context, Result};
use log::{info, warn};

use batwatch::{
    actions, create_collection_thread, create_or_get_config, default_log_file_path,
    event::BatwatchEvent,
    options::{self, MonitorSettings},
    read_config,
    sampler::{Sampler, SamplerEvent},
    utils::logging,
};

fn main() -> Result<()> {
    let matches = options::args::get_matches();

    let config_path = read_config(matches.get_one::<String>("config_location").map(|s| s.as_str()))
        .context("Unable to access the given config file location.")?;
    let config = create_or_get_config(&config_path)
        .context("Unable to properly parse or create the config file.")?;
    let settings = options::build_settings(&matches, &config)
        .context("Found an issue while building the settings.")?;

    let min_level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init_logger(min_level, default_log_file_path().as_deref())
        .context("Unable to set up logging.")?;

    info!(
        "batwatch started; polling every {} ms (critical <= {}%, full >= {}%).",
        settings.poll_rate_in_milliseconds,
        settings.thresholds.critical_percent,
        settings.thresholds.full_percent
    );

    run(&settings)
}

fn run(settings: &MonitorSettings) -> Result<()> {
    let mut sampler = Sampler::new(settings.thresholds, settings.history_capacity);

    // Create termination mutex and cvar. The collection thread waits on the
    // cvar between polls, so flipping the lock and notifying wakes it
    // immediately on shutdown.
    #[allow(clippy::mutex_atomic)]
    let thread_termination_lock = Arc::new(Mutex::new(false));
    let thread_termination_cvar = Arc::new(Condvar::new());

    let (sender, receiver) = mpsc::channel();

    let _collection_thread = create_collection_thread(
        sender.clone(),
        thread_termination_lock.clone(),
        thread_termination_cvar.clone(),
        settings.poll_rate_in_milliseconds,
    );

    // Ctrl-C (and SIGTERM, via the termination feature) turns into a
    // terminate event for the main loop.
    {
        let sender = sender.clone();
        ctrlc::set_handler(move || {
            let _ = sender.send(BatwatchEvent::Terminate);
        })
        .context("Unable to set up the termination handler.")?;
    }

    while let Ok(received) = receiver.recv() {
        match received {
            BatwatchEvent::Update(reading) => {
                let events = sampler.on_sample(&reading, Instant::now());

                for event in &events {
                    log_event(event);
                    let decided = actions::actions_for(event, &settings.actions);
                    actions::dispatch(&decided, &settings.actions);
                }
            }
            BatwatchEvent::Terminate => {
                break;
            }
        }
    }

    // Stop the collection thread and wake it if it's mid-wait.
    if let Ok(mut is_terminated) = thread_termination_lock.lock() {
        *is_terminated = true;
    }
    thread_termination_cvar.notify_all();

    info!("batwatch terminated.");

    Ok(())
}

fn log_event(event: &SamplerEvent) {
    match event {
        SamplerEvent::Processed {
            percent,
            is_charging,
            rate_per_hour,
            history,
        } => {
            info!(
                "{percent}% ({}), rate {rate_per_hour:+.1} %/h, history {} points",
                if *is_charging { "charging" } else { "on battery" },
                history.len()
            );
        }
        SamplerEvent::Critical {
            percent,
            seconds_remaining,
        } => {
            warn!(
                "Critical battery: {percent}%, {} left.",
                actions::format_time_estimate(*seconds_remaining)
            );
        }
        SamplerEvent::FullCharge { percent } => {
            info!("Battery full: {percent}%.");
        }
        SamplerEvent::NoBattery => {
            warn!("No battery detected.");
        }
    }
}
