//! Integration tests for keyscan host-testable logic.
//!
//! Drives the full key → transport path: simulated pins, the button
//! registry, key mapping and transport state.

use std::cell::RefCell;
use std::rc::Rc;

use keyscan::config::{
    BUTTON_DOWN_MS, BUTTON_HOLD_MS, DEFAULT_VOLUME, KEY_HOLD_CYCLE_MS, KEY_PRESS_LEVEL,
    MAX_BUTTONS, SCAN_INTERVAL_MS,
};
use keyscan::key_logic::{action_for, KeyRole, PlayerCommand, TransportState};
use keyscan::{
    ButtonConfig, ButtonEvent, ButtonHandler, ButtonRegistry, HandlerError, Level, PinIo,
    PinMode, ScanHandle, ScanScheduler, ScanTiming,
};

struct Board {
    levels: [Level; 3],
}

impl PinIo for Board {
    type Pin = usize;

    fn configure(&mut self, _pin: &usize, mode: PinMode) {
        assert_eq!(mode, PinMode::InputPullUp);
    }

    fn read(&self, pin: &usize) -> Level {
        self.levels[*pin]
    }
}

struct Tick;

impl ScanScheduler for Tick {
    type Handle = Tick;

    fn schedule_periodic(&mut self, interval_ms: u32) -> Tick {
        assert_eq!(interval_ms, SCAN_INTERVAL_MS);
        Tick
    }
}

impl ScanHandle for Tick {
    fn cancel(self) {}
}

#[derive(Default)]
struct Player {
    state: Option<TransportState>,
    commands: Vec<PlayerCommand>,
}

struct Key {
    role: KeyRole,
    player: Rc<RefCell<Player>>,
}

impl ButtonHandler<usize> for Key {
    fn on_event(
        &mut self,
        _button: &ButtonConfig<usize>,
        event: ButtonEvent,
    ) -> Result<(), HandlerError> {
        let Some(action) = action_for(self.role, event) else {
            return Ok(());
        };
        let mut guard = self.player.borrow_mut();
        let player = &mut *guard;
        let state = player
            .state
            .get_or_insert(TransportState::new(DEFAULT_VOLUME));
        if let Some(command) = state.apply(action) {
            player.commands.push(command);
        }
        Ok(())
    }
}

const PLAY: usize = 0;
const LAST: usize = 1;
const NEXT: usize = 2;

fn board() -> (ButtonRegistry<Board, Key, MAX_BUTTONS>, Rc<RefCell<Player>>) {
    let timing = ScanTiming::new(SCAN_INTERVAL_MS, BUTTON_DOWN_MS, BUTTON_HOLD_MS).unwrap();
    let mut registry = ButtonRegistry::new(
        Board {
            levels: [Level::High; 3],
        },
        timing,
    );
    let player = Rc::new(RefCell::new(Player::default()));
    for (pin, role) in [(PLAY, KeyRole::Play), (LAST, KeyRole::Last), (NEXT, KeyRole::Next)] {
        let key = Key {
            role,
            player: player.clone(),
        };
        registry
            .register(
                ButtonConfig::new(pin, KEY_PRESS_LEVEL, KEY_HOLD_CYCLE_MS),
                Some(key),
            )
            .unwrap();
    }
    registry.start(&mut Tick).unwrap();
    (registry, player)
}

fn press_ms(registry: &mut ButtonRegistry<Board, Key, MAX_BUTTONS>, pin: usize, ms: u32) {
    registry.io_mut().levels[pin] = KEY_PRESS_LEVEL;
    for _ in 0..ms / SCAN_INTERVAL_MS {
        registry.scan();
    }
    registry.io_mut().levels[pin] = Level::High;
    registry.scan();
}

#[test]
fn click_play_toggles_playback() {
    let (mut registry, player) = board();

    press_ms(&mut registry, PLAY, 100);
    press_ms(&mut registry, PLAY, 100);

    assert_eq!(
        player.borrow().commands,
        [PlayerCommand::Play, PlayerCommand::Stop]
    );
}

#[test]
fn click_side_keys_navigate() {
    let (mut registry, player) = board();

    press_ms(&mut registry, NEXT, 200);
    press_ms(&mut registry, LAST, 200);

    assert_eq!(
        player.borrow().commands,
        [PlayerCommand::Next, PlayerCommand::Previous]
    );
}

#[test]
fn holding_next_raises_volume_every_cycle() {
    let (mut registry, player) = board();

    // 700 ms reaches the hold, then 5 full 100 ms cycles.
    press_ms(&mut registry, NEXT, BUTTON_HOLD_MS + 5 * KEY_HOLD_CYCLE_MS);

    let expected: Vec<PlayerCommand> = (1..=5)
        .map(|step| PlayerCommand::SetVolume(DEFAULT_VOLUME + step))
        .collect();
    assert_eq!(player.borrow().commands, expected);
}

#[test]
fn holding_last_stops_at_minimum_volume() {
    let (mut registry, player) = board();

    press_ms(&mut registry, LAST, BUTTON_HOLD_MS + 10 * KEY_HOLD_CYCLE_MS);

    // DEFAULT_VOLUME = 3: two steps down, then clamped.
    assert_eq!(
        player.borrow().commands,
        [PlayerCommand::SetVolume(2), PlayerCommand::SetVolume(1)]
    );
}

#[test]
fn bounce_shorter_than_debounce_is_ignored() {
    let (mut registry, player) = board();

    press_ms(&mut registry, PLAY, BUTTON_DOWN_MS - SCAN_INTERVAL_MS);

    assert!(player.borrow().commands.is_empty());
    assert!(player.borrow().state.is_none());
}

#[test]
fn simultaneous_keys_are_classified_independently() {
    let (mut registry, player) = board();

    registry.io_mut().levels = [Level::Low; 3];
    for _ in 0..10 {
        registry.scan();
    }
    registry.io_mut().levels = [Level::High; 3];
    let summary = registry.scan();

    assert_eq!(summary.events, 3);
    assert_eq!(
        player.borrow().commands,
        [
            PlayerCommand::Play,
            PlayerCommand::Previous,
            PlayerCommand::Next
        ]
    );
}
