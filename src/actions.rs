//! Maps alert events to the actions the user configured.
//!
//! Deciding what to do is pure and lives in [`actions_for`]; actually doing
//! it lives in [`dispatch`]. Shell commands are spawned fire-and-forget so a
//! slow or hung hook can never stall the next poll, and every failure is
//! logged and swallowed here rather than propagated into the sampling loop.

use std::io::Write;
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::sampler::SamplerEvent;

/// A single thing to do in response to an alert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Surface a message to the user. batwatch is headless, so this is a log
    /// line; a notification daemon can be hooked up via `custom_command`.
    Notify {
        title: &'static str,
        body: String,
    },
    /// Ring the terminal bell.
    Beep,
    /// Run the user's custom shell command.
    RunCommand(String),
    /// Run the configured power-saver command.
    PowerSaver,
    /// Run the configured hibernate command.
    Hibernate,
}

/// The user's action-related settings, assembled by the options code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSettings {
    pub notifications: bool,
    pub sound: bool,
    pub custom_command: Option<String>,
    pub auto_hibernate: bool,
    pub hibernate_percent: u8,
    pub auto_power_saver: bool,
    pub power_saver_percent: u8,
    pub hibernate_command: String,
    pub power_saver_command: String,
}

/// Decide which actions an event warrants. Returns an empty list for
/// informational events.
pub fn actions_for(event: &SamplerEvent, settings: &ActionSettings) -> Vec<Action> {
    match event {
        SamplerEvent::Critical {
            percent,
            seconds_remaining,
        } => {
            let mut actions = Vec::new();

            if settings.notifications {
                actions.push(Action::Notify {
                    title: "Battery critical",
                    body: format!(
                        "Level {percent}%. {} remaining.",
                        format_time_estimate(*seconds_remaining)
                    ),
                });
            }
            if settings.sound {
                actions.push(Action::Beep);
            }
            if let Some(command) = &settings.custom_command {
                actions.push(Action::RunCommand(command.clone()));
            }
            if settings.auto_power_saver && *percent <= settings.power_saver_percent {
                actions.push(Action::PowerSaver);
            }
            if settings.auto_hibernate && *percent <= settings.hibernate_percent {
                actions.push(Action::Hibernate);
            }

            actions
        }
        SamplerEvent::FullCharge { percent } => {
            let mut actions = Vec::new();

            if settings.notifications {
                actions.push(Action::Notify {
                    title: "Battery full",
                    body: format!("Level {percent}%. Unplug to preserve battery health."),
                });
            }
            if settings.sound {
                actions.push(Action::Beep);
            }

            actions
        }
        SamplerEvent::Processed { .. } | SamplerEvent::NoBattery => Vec::new(),
    }
}

/// Carry out a batch of decided actions.
pub fn dispatch(actions: &[Action], settings: &ActionSettings) {
    for action in actions {
        match action {
            Action::Notify { title, body } => {
                info!("Notification: {title} - {body}");
            }
            Action::Beep => {
                let mut stdout = std::io::stdout();
                let _ = stdout.write_all(b"\x07");
                let _ = stdout.flush();
            }
            Action::RunCommand(command) => spawn_shell("custom command", command),
            Action::PowerSaver => spawn_shell("power-saver command", &settings.power_saver_command),
            Action::Hibernate => spawn_shell("hibernate command", &settings.hibernate_command),
        }
    }
}

/// Render a "time remaining" estimate the way the alert bodies want it.
pub fn format_time_estimate(seconds: Option<u32>) -> String {
    match seconds {
        None => "unknown time".to_string(),
        Some(seconds) => {
            let hours = seconds / 3600;
            let minutes = (seconds % 3600) / 60;
            if hours > 0 {
                format!("{hours}h {minutes}m")
            } else {
                format!("{minutes} min")
            }
        }
    }
}

/// Spawn `command` through the platform shell without waiting on it.
fn spawn_shell(what: &str, command: &str) {
    if command.is_empty() {
        warn!("Skipping {what}: no command is configured.");
        return;
    }

    cfg_if::cfg_if! {
        if #[cfg(target_os = "windows")] {
            let result = Command::new("cmd")
                .args(["/C", command])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
        } else {
            let result = Command::new("sh")
                .args(["-c", command])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
        }
    }

    match result {
        Ok(_) => info!("Launched {what}: '{command}'"),
        Err(err) => warn!("Failed to launch {what} '{command}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ActionSettings {
        ActionSettings {
            notifications: true,
            sound: true,
            custom_command: None,
            auto_hibernate: false,
            hibernate_percent: 5,
            auto_power_saver: false,
            power_saver_percent: 20,
            hibernate_command: "true".to_string(),
            power_saver_command: "true".to_string(),
        }
    }

    #[test]
    fn critical_notifies_and_beeps() {
        let actions = actions_for(
            &SamplerEvent::Critical {
                percent: 12,
                seconds_remaining: Some(5400),
            },
            &settings(),
        );

        assert_eq!(
            actions,
            vec![
                Action::Notify {
                    title: "Battery critical",
                    body: "Level 12%. 1h 30m remaining.".to_string(),
                },
                Action::Beep,
            ]
        );
    }

    #[test]
    fn toggles_silence_notification_and_sound() {
        let mut settings = settings();
        settings.notifications = false;
        settings.sound = false;

        let actions = actions_for(
            &SamplerEvent::Critical {
                percent: 12,
                seconds_remaining: None,
            },
            &settings,
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn custom_command_runs_on_critical_only() {
        let mut settings = settings();
        settings.custom_command = Some("notify-send low".to_string());

        let critical = actions_for(
            &SamplerEvent::Critical {
                percent: 12,
                seconds_remaining: None,
            },
            &settings,
        );
        assert!(critical.contains(&Action::RunCommand("notify-send low".to_string())));

        let full = actions_for(&SamplerEvent::FullCharge { percent: 96 }, &settings);
        assert!(!full.iter().any(|a| matches!(a, Action::RunCommand(_))));
    }

    #[test]
    fn hibernate_requires_its_own_threshold() {
        let mut settings = settings();
        settings.auto_hibernate = true;
        settings.hibernate_percent = 5;

        // Critical at 12% is above the hibernate threshold, so no hibernate
        // yet.
        let actions = actions_for(
            &SamplerEvent::Critical {
                percent: 12,
                seconds_remaining: None,
            },
            &settings,
        );
        assert!(!actions.contains(&Action::Hibernate));

        let actions = actions_for(
            &SamplerEvent::Critical {
                percent: 4,
                seconds_remaining: None,
            },
            &settings,
        );
        assert!(actions.contains(&Action::Hibernate));
    }

    #[test]
    fn power_saver_respects_its_threshold() {
        let mut settings = settings();
        settings.auto_power_saver = true;
        settings.power_saver_percent = 20;

        let actions = actions_for(
            &SamplerEvent::Critical {
                percent: 12,
                seconds_remaining: None,
            },
            &settings,
        );
        assert!(actions.contains(&Action::PowerSaver));
    }

    #[test]
    fn informational_events_have_no_actions() {
        let settings = settings();

        assert!(actions_for(&SamplerEvent::NoBattery, &settings).is_empty());
        assert!(actions_for(
            &SamplerEvent::Processed {
                percent: 50,
                is_charging: false,
                rate_per_hour: -4.2,
                history: vec![51, 50],
            },
            &settings
        )
        .is_empty());
    }

    #[test]
    fn time_estimates_render_like_the_status_line() {
        assert_eq!(format_time_estimate(None), "unknown time");
        assert_eq!(format_time_estimate(Some(45 * 60)), "45 min");
        assert_eq!(format_time_estimate(Some(3 * 3600 + 20 * 60)), "3h 20m");
    }
}
