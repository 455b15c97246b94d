//! Host-testable library interface for keyscan.
//!
//! Everything here is pure logic: the button scan engine and the key
//! mapping. Hardware access is injected through the traits in [`button`].
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and pulls in the nRF52840 glue behind the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod config;
pub mod error;
pub mod key_logic;

pub use button::{
    ButtonConfig, ButtonEvent, ButtonHandler, ButtonId, ButtonRegistry, ButtonState,
    HandlerError, Level, PinIo, PinMode, ScanHandle, ScanScheduler, ScanSummary, ScanTiming,
};
pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
