//! Battery state collection, via the starship_battery crate.
//!
//! Covers battery usage for:
//! - Linux 2.6.39+
//! - MacOS 10.10+
//! - iOS
//! - Windows 7+
//! - FreeBSD
//! - DragonFlyBSD
//!
//! For more information, refer to the [starship_battery](https://github.com/starship/rust-battery) repo/docs.

use starship_battery::{
    Battery, Manager, State,
    units::{ratio::percent, time::second},
};

use crate::sampler::BatteryReading;

/// A wrapper around the starship_battery data source. The manager and the
/// battery handle are initialized lazily - a machine can gain a battery after
/// startup (e.g. hotplug), and a failed refresh drops the handle so the next
/// poll picks the battery list up again.
#[derive(Debug, Default)]
pub struct BatterySource {
    manager: Option<Manager>,
    battery: Option<Battery>,
}

impl BatterySource {
    /// Take one reading from the first battery the OS reports. Any failure
    /// along the way produces the "no battery" sentinel; the engine treats
    /// that as an absent battery rather than an error.
    pub fn poll(&mut self) -> BatteryReading {
        if self.manager.is_none() {
            self.manager = Manager::new().ok();
        }
        let Some(manager) = &self.manager else {
            return BatteryReading::absent();
        };

        if self.battery.is_none() {
            self.battery = manager
                .batteries()
                .ok()
                .and_then(|mut batteries| batteries.find_map(Result::ok));
        }
        let Some(battery) = &mut self.battery else {
            return BatteryReading::absent();
        };

        if manager.refresh(battery).is_err() {
            // The battery may have been removed; rebuild the handle next poll.
            self.battery = None;
            return BatteryReading::absent();
        }

        let charge_percent = f64::from(battery.state_of_charge().get::<percent>());
        let state = battery.state();

        BatteryReading::new(
            charge_percent.round().clamp(0.0, 100.0) as u8,
            matches!(state, State::Charging | State::Full),
            match state {
                State::Charging => battery
                    .time_to_full()
                    .map(|time| f64::from(time.get::<second>()) as u32),
                State::Discharging => battery
                    .time_to_empty()
                    .map(|time| f64::from(time.get::<second>()) as u32),
                _ => None,
            },
        )
    }
}
