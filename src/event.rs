//! Events passed between batwatch's threads.

use crate::sampler::BatteryReading;

/// Events sent to the main thread.
#[derive(Debug)]
pub enum BatwatchEvent {
    /// A fresh reading from the collection thread.
    Update(Box<BatteryReading>),
    /// Shut down cleanly (e.g. Ctrl-C).
    Terminate,
}
