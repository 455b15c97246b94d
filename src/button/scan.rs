//! Threshold timing and the per-button state machine.

use super::ButtonEvent;
use crate::error::Error;

/// Scan interval and gesture thresholds, expressed in scan ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanTiming {
    interval_ms: u32,
    down_ticks: u32,
    hold_ticks: u32,
}

impl ScanTiming {
    /// Validate millisecond durations and convert them to tick counts.
    ///
    /// Both durations must be non-zero multiples of `interval_ms` and the
    /// down duration must be strictly shorter than the hold duration.
    pub fn new(interval_ms: u32, down_ms: u32, hold_ms: u32) -> Result<Self, Error> {
        if interval_ms == 0
            || down_ms == 0
            || down_ms % interval_ms != 0
            || hold_ms % interval_ms != 0
            || down_ms >= hold_ms
        {
            return Err(Error::InvalidThresholdConfiguration);
        }

        Ok(Self {
            interval_ms,
            down_ticks: down_ms / interval_ms,
            hold_ticks: hold_ms / interval_ms,
        })
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn down_ticks(&self) -> u32 {
        self.down_ticks
    }

    pub fn hold_ticks(&self) -> u32 {
        self.hold_ticks
    }

    /// Ticks between `HoldCyclic` dispatches, 0 when re-firing is disabled.
    ///
    /// A non-zero period shorter than one tick would truncate to zero and is
    /// rejected.
    pub fn cycle_ticks(&self, hold_cycle_period_ms: u32) -> Result<u32, Error> {
        if hold_cycle_period_ms != 0 && hold_cycle_period_ms < self.interval_ms {
            return Err(Error::InvalidHoldCyclePeriod);
        }
        Ok(hold_cycle_period_ms / self.interval_ms)
    }
}

/// Transient sampling state of one button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    pub(super) sample_count: u32,
    pub(super) event: ButtonEvent,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            sample_count: 0,
            event: ButtonEvent::None,
        }
    }

    /// Consecutive pressed ticks since the last release.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Last classified gesture.
    pub fn event(&self) -> ButtonEvent {
        self.event
    }

    /// Advance one scan tick.
    ///
    /// Returns the event to dispatch, if this tick produced one.
    pub fn advance(
        &mut self,
        pressed: bool,
        cycle_ticks: u32,
        timing: &ScanTiming,
    ) -> Option<ButtonEvent> {
        let previous = self.sample_count;

        if pressed {
            self.sample_count = self.sample_count.saturating_add(1);
            let count = self.sample_count;

            if count == timing.down_ticks {
                self.event = ButtonEvent::PressDown;
                Some(ButtonEvent::PressDown)
            } else if count == timing.hold_ticks {
                self.event = ButtonEvent::Hold;
                Some(ButtonEvent::Hold)
            } else if count > timing.hold_ticks {
                self.event = ButtonEvent::HoldCyclic;
                // `count != previous` stops re-firing once the counter saturates.
                let due = cycle_ticks != 0
                    && count != previous
                    && (count - timing.hold_ticks) % cycle_ticks == 0;
                due.then_some(ButtonEvent::HoldCyclic)
            } else {
                if count < timing.down_ticks {
                    self.event = ButtonEvent::None;
                }
                None
            }
        } else {
            self.sample_count = 0;

            if previous >= timing.hold_ticks {
                self.event = ButtonEvent::HoldUp;
                Some(ButtonEvent::HoldUp)
            } else if previous >= timing.down_ticks {
                self.event = ButtonEvent::ClickUp;
                Some(ButtonEvent::ClickUp)
            } else {
                // Shorter than the down threshold: bounce or idle.
                None
            }
        }
    }
}
