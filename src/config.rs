//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and player
//! constants live here so they can be tuned in one place.

use crate::button::Level;

// Button scanning

/// Period of one scan tick (ms). Every other button duration must be a
/// multiple of this.
pub const SCAN_INTERVAL_MS: u32 = 10;

/// Consecutive pressed time before a press counts as intentional (ms).
pub const BUTTON_DOWN_MS: u32 = 50;

/// Consecutive pressed time at which a press becomes a hold (ms).
pub const BUTTON_HOLD_MS: u32 = 700;

/// Maximum number of buttons the registry can manage.
pub const MAX_BUTTONS: usize = 8;

const _: () = assert!(SCAN_INTERVAL_MS > 0);
const _: () = assert!(BUTTON_DOWN_MS >= SCAN_INTERVAL_MS && BUTTON_DOWN_MS % SCAN_INTERVAL_MS == 0);
const _: () = assert!(BUTTON_HOLD_MS % SCAN_INTERVAL_MS == 0);
const _: () = assert!(BUTTON_DOWN_MS < BUTTON_HOLD_MS);

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Key PLAY   → P0.11
//   Key LAST   → P0.12
//   Key NEXT   → P0.24
//   Status LED → P0.13

/// Number of physical keys wired on the board.
pub const KEY_COUNT: usize = 3;

/// Level a key reads while pressed (switches to ground, internal pull-up).
pub const KEY_PRESS_LEVEL: Level = Level::Low;

/// Repeat period of the volume keys while held (ms).
pub const KEY_HOLD_CYCLE_MS: u32 = 100;

const _: () = assert!(KEY_COUNT <= MAX_BUTTONS);
const _: () = assert!(KEY_HOLD_CYCLE_MS == 0 || KEY_HOLD_CYCLE_MS >= SCAN_INTERVAL_MS);

// Player

/// Lowest volume the keys can step down to.
pub const VOLUME_MIN: u8 = 1;

/// Highest volume the keys can step up to.
pub const VOLUME_MAX: u8 = 99;

/// Volume at power-up.
pub const DEFAULT_VOLUME: u8 = 3;

/// Depth of the key → transport action queue.
pub const ACTION_QUEUE_DEPTH: usize = 8;
