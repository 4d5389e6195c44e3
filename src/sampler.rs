//! The sampling/alerting engine.
//!
//! [`Sampler`] consumes one [`BatteryReading`] per poll, maintains a bounded
//! history of percent values, computes the charge/discharge rate, and checks
//! the configured thresholds. Threshold alerts are edge-triggered: an alert
//! fires once when its condition goes from false to true, stays silent while
//! the condition holds, and re-arms silently once the condition is observed
//! false again (e.g. the charger is plugged in).
//!
//! The engine performs no I/O and never reads a clock; timestamps come from
//! the caller and must be monotonically non-decreasing.

use std::{collections::VecDeque, time::Instant};

/// A single snapshot of battery state, produced once per poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatteryReading {
    /// Charge percent, 0 to 100.
    pub percent: u8,
    /// Whether the battery is charging (or full while on AC).
    pub is_charging: bool,
    /// Estimated seconds to empty (discharging) or to full (charging), if
    /// the OS reports one.
    pub seconds_remaining: Option<u32>,
    /// Whether a battery is present at all. `false` is the "no battery"
    /// sentinel; the other fields are meaningless in that case.
    pub present: bool,
}

impl BatteryReading {
    pub fn new(percent: u8, is_charging: bool, seconds_remaining: Option<u32>) -> Self {
        BatteryReading {
            percent,
            is_charging,
            seconds_remaining,
            present: true,
        }
    }

    /// The sentinel reading for a system with no (visible) battery.
    pub fn absent() -> Self {
        BatteryReading {
            percent: 0,
            is_charging: false,
            seconds_remaining: None,
            present: false,
        }
    }
}

/// The alert thresholds the engine evaluates against. Replaced atomically by
/// [`Sampler::update_config`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// Alert when discharging at or below this percent. 1 to 99.
    pub critical_percent: u8,
    /// Alert when charging at or above this percent. 50 to 100.
    pub full_percent: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            critical_percent: crate::constants::DEFAULT_CRITICAL_PERCENT,
            full_percent: crate::constants::DEFAULT_FULL_PERCENT,
        }
    }
}

/// What the engine reports back to the caller after a sample.
#[derive(Clone, Debug, PartialEq)]
pub enum SamplerEvent {
    /// Emitted for every processed reading, alert or not. Carries what a
    /// presentation layer needs to render the current state.
    Processed {
        percent: u8,
        is_charging: bool,
        /// Percent change per hour since the previous reading; 0.0 when
        /// there is no prior reading or no time has elapsed.
        rate_per_hour: f64,
        /// The retained history, oldest first.
        history: Vec<u8>,
    },
    /// The battery dropped to or below the critical threshold while
    /// discharging. Fires once per crossing.
    Critical {
        percent: u8,
        seconds_remaining: Option<u32>,
    },
    /// The battery reached the full threshold while charging. Fires once per
    /// crossing.
    FullCharge { percent: u8 },
    /// No battery was visible this poll.
    NoBattery,
}

/// The engine itself. Constructed once at startup and fed by a single
/// collection thread; it is never invoked concurrently with itself.
#[derive(Debug)]
pub struct Sampler {
    thresholds: Thresholds,
    history: VecDeque<u8>,
    history_capacity: usize,
    last_percent: Option<u8>,
    last_sampled: Option<Instant>,
    critical_alerted: bool,
    full_alerted: bool,
}

impl Sampler {
    pub fn new(thresholds: Thresholds, history_capacity: usize) -> Self {
        let history_capacity = history_capacity.max(1);

        Sampler {
            thresholds,
            history: VecDeque::with_capacity(history_capacity),
            history_capacity,
            last_percent: None,
            last_sampled: None,
            critical_alerted: false,
            full_alerted: false,
        }
    }

    /// Replace the thresholds atomically. An alert latch that is already set
    /// is deliberately left alone; only a subsequent sample that evaluates
    /// the condition false re-arms it. This avoids firing a duplicate alert
    /// right after a settings change.
    pub fn update_config(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    /// Process one reading taken at `now`, returning the events it produced.
    ///
    /// Alert events precede the trailing [`SamplerEvent::Processed`] event.
    /// For an absent battery only [`SamplerEvent::NoBattery`] is returned.
    pub fn on_sample(&mut self, reading: &BatteryReading, now: Instant) -> Vec<SamplerEvent> {
        if !reading.present {
            // Wipe the history, both latches, and the previous
            // percent/timestamp so a resumed reading starts from scratch
            // instead of computing a rate against stale data.
            self.history.clear();
            self.critical_alerted = false;
            self.full_alerted = false;
            self.last_percent = None;
            self.last_sampled = None;

            return vec![SamplerEvent::NoBattery];
        }

        // The caller is expected to clamp, but clamp here too; the engine is
        // total over its input domain.
        let percent = reading.percent.min(100);

        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(percent);

        let rate_per_hour = match (self.last_percent, self.last_sampled) {
            (Some(last_percent), Some(last_sampled)) => {
                let elapsed = now.saturating_duration_since(last_sampled);
                if elapsed.is_zero() {
                    0.0
                } else {
                    let hours = elapsed.as_secs_f64() / 3600.0;
                    (f64::from(percent) - f64::from(last_percent)) / hours
                }
            }
            _ => 0.0,
        };

        let mut events = Vec::with_capacity(2);

        let is_critical = percent <= self.thresholds.critical_percent && !reading.is_charging;
        if is_critical && !self.critical_alerted {
            events.push(SamplerEvent::Critical {
                percent,
                seconds_remaining: reading.seconds_remaining,
            });
        }
        self.critical_alerted = is_critical;

        let is_full = reading.is_charging && percent >= self.thresholds.full_percent;
        if is_full && !self.full_alerted {
            events.push(SamplerEvent::FullCharge { percent });
        }
        self.full_alerted = is_full;

        events.push(SamplerEvent::Processed {
            percent,
            is_charging: reading.is_charging,
            rate_per_hour,
            history: self.history.iter().copied().collect(),
        });

        self.last_percent = Some(percent);
        self.last_sampled = Some(now);

        events
    }
}
