//! Fixed-capacity button registry and the scan entry point.

use super::{
    ButtonConfig, ButtonEvent, ButtonHandler, ButtonId, ButtonState, PinIo, PinMode, ScanHandle,
    ScanScheduler, ScanTiming,
};
use crate::error::Error;
use heapless::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Registering,
    Scanning,
    Stopped,
}

struct Slot<P, H> {
    config: ButtonConfig<P>,
    state: ButtonState,
    cycle_ticks: u32,
    handler: Option<H>,
    pending: Option<ButtonEvent>,
}

/// Outcome of one [`ButtonRegistry::scan`] tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanSummary {
    /// Events produced this tick, with or without a handler.
    pub events: usize,
    /// Events handed to a handler.
    pub dispatched: usize,
    /// Handlers that returned an error.
    pub faults: usize,
}

/// Owns up to `N` buttons, their pin access and their handlers.
///
/// Lifecycle: `register`* → `start` → `scan`* → optional `stop`. The
/// registry cannot be restarted.
pub struct ButtonRegistry<IO: PinIo, H, const N: usize> {
    io: IO,
    timing: ScanTiming,
    slots: Vec<Slot<IO::Pin, H>, N>,
    lifecycle: Lifecycle,
}

impl<IO, H, const N: usize> ButtonRegistry<IO, H, N>
where
    IO: PinIo,
    H: ButtonHandler<IO::Pin>,
{
    /// Create an empty registry. `timing` is already validated.
    pub fn new(io: IO, timing: ScanTiming) -> Self {
        Self {
            io,
            timing,
            slots: Vec::new(),
            lifecycle: Lifecycle::Registering,
        }
    }

    /// Add a button and configure its pin as a pulled input.
    ///
    /// On error nothing is changed: the pin is left untouched and the
    /// registry keeps its previous contents.
    pub fn register(
        &mut self,
        config: ButtonConfig<IO::Pin>,
        handler: Option<H>,
    ) -> Result<ButtonId, Error> {
        if self.lifecycle != Lifecycle::Registering {
            return Err(Error::AlreadyStarted);
        }
        if self.slots.is_full() {
            return Err(Error::CapacityExceeded);
        }
        let cycle_ticks = self.timing.cycle_ticks(config.hold_cycle_period_ms)?;

        self.io
            .configure(&config.pin, PinMode::for_active_level(config.active_level));

        let id = ButtonId(self.slots.len());
        self.slots
            .push(Slot {
                config,
                state: ButtonState::new(),
                cycle_ticks,
                handler,
                pending: None,
            })
            .map_err(|_| Error::CapacityExceeded)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Button {}: registered (active {}, cycle {} ticks)",
            id.0,
            self.slots[id.0].config.active_level,
            cycle_ticks
        );

        Ok(id)
    }

    /// Close registration and arm the recurring scan tick.
    ///
    /// The returned handle belongs to whoever drives the ticks; pass it back
    /// to [`stop`](Self::stop) to tear the schedule down.
    pub fn start<S: ScanScheduler>(&mut self, scheduler: &mut S) -> Result<S::Handle, Error> {
        if self.lifecycle != Lifecycle::Registering {
            return Err(Error::AlreadyStarted);
        }

        let handle = scheduler.schedule_periodic(self.timing.interval_ms());
        self.lifecycle = Lifecycle::Scanning;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Button scan started: {} buttons every {} ms",
            self.slots.len(),
            self.timing.interval_ms()
        );

        Ok(handle)
    }

    /// Cancel the recurring scan.
    ///
    /// Takes `&mut self`, so no tick can be running while the schedule is
    /// torn down. Later `scan` calls do nothing.
    pub fn stop<T: ScanHandle>(&mut self, handle: T) -> Result<(), Error> {
        if self.lifecycle != Lifecycle::Scanning {
            return Err(Error::NotStarted);
        }
        handle.cancel();
        self.lifecycle = Lifecycle::Stopped;

        #[cfg(feature = "defmt")]
        defmt::info!("Button scan stopped");

        Ok(())
    }

    /// One scan tick.
    ///
    /// Every button is classified first, in registration order; handlers
    /// run afterwards in the same order. A failing handler is logged and
    /// counted, and the remaining handlers still run.
    pub fn scan(&mut self) -> ScanSummary {
        let mut summary = ScanSummary::default();
        if self.lifecycle != Lifecycle::Scanning {
            return summary;
        }

        let timing = self.timing;
        for slot in self.slots.iter_mut() {
            let pressed = self.io.read(&slot.config.pin) == slot.config.active_level;
            slot.pending = slot.state.advance(pressed, slot.cycle_ticks, &timing);
        }

        for (_index, slot) in self.slots.iter_mut().enumerate() {
            let Some(event) = slot.pending.take() else {
                continue;
            };
            summary.events += 1;

            #[cfg(feature = "defmt")]
            defmt::debug!("Button {}: {}", _index, event);

            let Some(handler) = slot.handler.as_mut() else {
                continue;
            };
            summary.dispatched += 1;

            if let Err(_err) = handler.on_event(&slot.config, event) {
                summary.faults += 1;

                #[cfg(feature = "defmt")]
                defmt::warn!("Button {}: handler failed on {}: {}", _index, event, _err);
            }
        }

        summary
    }

    /// Current sampling state of a registered button.
    pub fn state(&self, id: ButtonId) -> Option<ButtonState> {
        self.slots.get(id.0).map(|slot| slot.state)
    }

    pub fn config(&self, id: ButtonId) -> Option<&ButtonConfig<IO::Pin>> {
        self.slots.get(id.0).map(|slot| &slot.config)
    }

    pub fn handler(&self, id: ButtonId) -> Option<&H> {
        self.slots.get(id.0).and_then(|slot| slot.handler.as_ref())
    }

    pub fn timing(&self) -> &ScanTiming {
        &self.timing
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn is_scanning(&self) -> bool {
        self.lifecycle == Lifecycle::Scanning
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Mutable pin access, e.g. for a simulated pin bank.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }
}
