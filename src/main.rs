//! keyscan - three-key player remote on nRF52840.
//!
//! Architecture (all async on Embassy executor):
//!
//! ```text
//!  ┌───────────┐  10 ms tick  ┌──────────────┐  KeyAction   ┌───────────────┐
//!  │  Ticker   │ ───────────► │  scan_task   │ ───────────► │ transport_task│──► LED
//!  └───────────┘              │ (registry +  │   channel    │ (play / vol)  │
//!                             │  handlers)   │              └───────────────┘
//!                             └──────────────┘
//! ```
//!
//! Keys (active-low, internal pull-up):
//!   - PLAY: click toggles playback
//!   - LAST: click = previous song, hold = volume down every 100 ms
//!   - NEXT: click = next song,     hold = volume up every 100 ms

#![no_std]
#![no_main]

mod hw;
mod keys;

use defmt::{debug, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use hw::led::StatusLed;
use hw::pins::NrfPinBank;
use hw::ticker::{ScanTicker, TickerScheduler};
use keys::KeyHandler;
use keyscan::config::{
    ACTION_QUEUE_DEPTH, BUTTON_DOWN_MS, BUTTON_HOLD_MS, DEFAULT_VOLUME, KEY_COUNT,
    KEY_HOLD_CYCLE_MS, KEY_PRESS_LEVEL, MAX_BUTTONS, SCAN_INTERVAL_MS,
};
use keyscan::key_logic::{KeyAction, KeyRole, TransportState};
use keyscan::{ButtonConfig, ButtonRegistry, ScanTiming};

type KeyRegistry = ButtonRegistry<NrfPinBank<KEY_COUNT>, KeyHandler, MAX_BUTTONS>;

/// Key handlers → transport task.
static KEY_ACTIONS: Channel<CriticalSectionRawMutex, KeyAction, ACTION_QUEUE_DEPTH> =
    Channel::new();

static REGISTRY: StaticCell<KeyRegistry> = StaticCell::new();

/// Slot order in the pin bank matches this table.
const KEYS: [KeyRole; KEY_COUNT] = [KeyRole::Play, KeyRole::Last, KeyRole::Next];

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("keyscan starting");

    let timing = match ScanTiming::new(SCAN_INTERVAL_MS, BUTTON_DOWN_MS, BUTTON_HOLD_MS) {
        Ok(timing) => timing,
        Err(e) => defmt::panic!("Scan timing rejected: {}", e),
    };

    let pins = NrfPinBank::new([p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade()]);
    let registry = REGISTRY.init(ButtonRegistry::new(pins, timing));

    for (slot, role) in KEYS.into_iter().enumerate() {
        let config = ButtonConfig::new(slot, KEY_PRESS_LEVEL, KEY_HOLD_CYCLE_MS);
        let handler = KeyHandler::new(role, KEY_ACTIONS.sender());
        if let Err(e) = registry.register(config, Some(handler)) {
            defmt::panic!("Key {} registration failed: {}", role, e);
        }
    }

    // Registration is closed from here on.
    let ticker = match registry.start(&mut TickerScheduler) {
        Ok(ticker) => ticker,
        Err(e) => defmt::panic!("Key scan failed to start: {}", e),
    };

    let led = StatusLed::new(p.P0_13.degrade());

    unwrap!(spawner.spawn(transport_task(KEY_ACTIONS.receiver(), led)));
    unwrap!(spawner.spawn(scan_task(registry, ticker)));

    info!("keyscan ready - {} keys", KEY_COUNT);
}

/// Runs one registry scan per tick. Handlers execute inline here.
#[embassy_executor::task]
async fn scan_task(registry: &'static mut KeyRegistry, mut ticker: ScanTicker) -> ! {
    loop {
        ticker.next().await;
        let summary = registry.scan();
        if summary.faults > 0 {
            debug!("Scan: {} of {} handlers faulted", summary.faults, summary.dispatched);
        }
    }
}

/// Applies key actions to the transport state and mirrors playback on the LED.
#[embassy_executor::task]
async fn transport_task(
    actions: Receiver<'static, CriticalSectionRawMutex, KeyAction, ACTION_QUEUE_DEPTH>,
    mut led: StatusLed,
) -> ! {
    let mut transport = TransportState::new(DEFAULT_VOLUME);

    loop {
        let action = actions.receive().await;
        match transport.apply(action) {
            Some(command) => info!("Player: {} (volume {})", command, transport.volume),
            None => debug!("Player: {} ignored at volume {}", action, transport.volume),
        }
        led.set(transport.running);
    }
}
