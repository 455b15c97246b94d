//! nRF52840 glue for the button scan engine.
//!
//! - **Pins**: GPIO inputs behind [`keyscan::PinIo`]
//! - **Ticker**: embassy `Ticker` behind [`keyscan::ScanScheduler`]
//! - **LED**: status indicator (active-low on the DK)

pub mod led;
pub mod pins;
pub mod ticker;
