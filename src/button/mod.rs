//! Polled push-button gesture detection.
//!
//! A [`ButtonRegistry`] owns a fixed set of buttons. Once started, a
//! periodic timer calls [`ButtonRegistry::scan`]; each tick reads every pin,
//! advances a per-button consecutive-press counter and turns threshold
//! crossings into [`ButtonEvent`]s for that button's [`ButtonHandler`].
//!
//! ## Collaborators
//!
//! - [`PinIo`]: configures pins as pulled inputs and reads their level.
//! - [`ScanScheduler`]: arms the recurring scan tick.
//! - [`ButtonHandler`]: application code receiving gestures.
//!
//! Handlers run synchronously on the scanning context. A handler that
//! blocks delays the remaining handlers of that tick and the next tick.

mod registry;
mod scan;


pub use registry::{ButtonRegistry, ScanSummary};
pub use scan::{ButtonState, ScanTiming};

/// Logic level of a digital line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

/// Input configuration applied to a button pin at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    InputPullUp,
    InputPullDown,
}

impl PinMode {
    /// Pull that holds the line at the idle level: pull-up for
    /// active-low buttons, pull-down for active-high ones.
    pub fn for_active_level(active_level: Level) -> Self {
        match active_level {
            Level::Low => PinMode::InputPullUp,
            Level::High => PinMode::InputPullDown,
        }
    }
}

/// Gesture classified by the scan engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Idle, or pressed but still inside the debounce window.
    #[default]
    None,
    /// Down threshold reached. Fires once per press.
    PressDown,
    /// Hold threshold reached. Fires once per press.
    Hold,
    /// Still held past the hold threshold; dispatched every hold cycle.
    HoldCyclic,
    /// Released after `PressDown` but before `Hold`.
    ClickUp,
    /// Released after `Hold`.
    HoldUp,
}

/// Static configuration of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig<P> {
    /// Pin identifier, passed through to [`PinIo`].
    pub pin: P,
    /// Level the pin reads while the button is pressed.
    pub active_level: Level,
    /// Re-fire period of `HoldCyclic` (ms). 0 disables re-firing.
    pub hold_cycle_period_ms: u32,
}

impl<P> ButtonConfig<P> {
    pub const fn new(pin: P, active_level: Level, hold_cycle_period_ms: u32) -> Self {
        Self {
            pin,
            active_level,
            hold_cycle_period_ms,
        }
    }
}

/// Handle returned by [`ButtonRegistry::register`]; also the scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub(crate) usize);

impl ButtonId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Digital pin access used by the registry.
pub trait PinIo {
    type Pin;

    /// Configure `pin` as an input with the given pull.
    fn configure(&mut self, pin: &Self::Pin, mode: PinMode);

    /// Instantaneous level of `pin`. Must have no side effects.
    fn read(&self, pin: &Self::Pin) -> Level;
}

/// Timer facility that runs the scan periodically.
pub trait ScanScheduler {
    type Handle: ScanHandle;

    /// Arm a recurring tick every `interval_ms`. Ticks never overlap.
    fn schedule_periodic(&mut self, interval_ms: u32) -> Self::Handle;
}

/// A recurring schedule created by a [`ScanScheduler`].
pub trait ScanHandle {
    /// Tear the schedule down. No tick fires afterwards.
    fn cancel(self);
}

/// Why a handler could not act on an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandlerError {
    /// Downstream consumer cannot take more work right now.
    Busy,
    /// Handler failed for any other reason.
    Failed,
}

/// Receives gestures for one button.
///
/// Called synchronously from [`ButtonRegistry::scan`]. Must not re-enter
/// the registry it was called from.
pub trait ButtonHandler<P> {
    fn on_event(&mut self, button: &ButtonConfig<P>, event: ButtonEvent)
        -> Result<(), HandlerError>;
}

impl<P, F> ButtonHandler<P> for F
where
    F: FnMut(&ButtonConfig<P>, ButtonEvent),
{
    fn on_event(
        &mut self,
        button: &ButtonConfig<P>,
        event: ButtonEvent,
    ) -> Result<(), HandlerError> {
        self(button, event);
        Ok(())
    }
}
