//! Status LED (active-low).

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};

pub struct StatusLed {
    pin: Output<'static>,
}

impl StatusLed {
    /// Take the pin and start with the LED off.
    pub fn new(pin: AnyPin) -> Self {
        Self {
            pin: Output::new(pin, Level::High, OutputDrive::Standard),
        }
    }

    pub fn on(&mut self) {
        self.pin.set_low();
    }

    pub fn off(&mut self) {
        self.pin.set_high();
    }

    pub fn set(&mut self, lit: bool) {
        if lit {
            self.on();
        } else {
            self.off();
        }
    }
}
