//! Unified error type for keyscan.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (feature `defmt`) for efficient on-target logging.

/// Setup / usage errors reported by the button registry.
///
/// Every variant is detected before or at `start()`; steady-state scanning
/// has no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Registration
    /// The registry already holds its fixed maximum number of buttons.
    CapacityExceeded,

    /// `hold_cycle_period_ms` is non-zero but shorter than one scan interval.
    InvalidHoldCyclePeriod,

    // Lifecycle
    /// `start()` was already called, or registration attempted after it.
    AlreadyStarted,

    /// `stop()` called on a registry that is not scanning.
    NotStarted,

    // Timing
    /// Durations are not multiples of the scan interval, or the down
    /// threshold is not strictly below the hold threshold.
    InvalidThresholdConfiguration,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Error::CapacityExceeded => "button registry is full",
            Error::InvalidHoldCyclePeriod => "hold cycle period shorter than scan interval",
            Error::AlreadyStarted => "button scan already started",
            Error::NotStarted => "button scan not started",
            Error::InvalidThresholdConfiguration => "invalid button threshold configuration",
        };
        f.write_str(msg)
    }
}
