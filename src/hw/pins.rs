//! GPIO pin bank for the key inputs.
//!
//! Pins are handed over unconfigured at startup and addressed by slot
//! index. Registration turns a slot into a pulled `Input`.

use defmt::warn;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use keyscan::{Level, PinIo, PinMode};

pub struct NrfPinBank<const N: usize> {
    unclaimed: [Option<AnyPin>; N],
    inputs: [Option<Input<'static>>; N],
}

impl<const N: usize> NrfPinBank<N> {
    pub fn new(pins: [AnyPin; N]) -> Self {
        Self {
            unclaimed: pins.map(Some),
            inputs: core::array::from_fn(|_| None),
        }
    }
}

impl<const N: usize> PinIo for NrfPinBank<N> {
    type Pin = usize;

    fn configure(&mut self, slot: &usize, mode: PinMode) {
        let pull = match mode {
            PinMode::InputPullUp => Pull::Up,
            PinMode::InputPullDown => Pull::Down,
        };

        match self.unclaimed.get_mut(*slot).and_then(Option::take) {
            Some(pin) => self.inputs[*slot] = Some(Input::new(pin, pull)),
            None => warn!("Pins: slot {} missing or already configured", slot),
        }
    }

    fn read(&self, slot: &usize) -> Level {
        match self.inputs.get(*slot).and_then(Option::as_ref) {
            Some(input) if input.is_high() => Level::High,
            Some(_) => Level::Low,
            // Never registered, so never scanned.
            None => Level::High,
        }
    }
}
