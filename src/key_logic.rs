//! Key gestures → player transport actions.
//!
//! Three keys drive a song player: PLAY toggles playback, LAST / NEXT
//! change song on a click and step the volume while held.

use crate::button::ButtonEvent;
use crate::config::{VOLUME_MAX, VOLUME_MIN};

/// What a physical key is wired to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyRole {
    Play,
    Last,
    Next,
}

/// User intent decoded from a key gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    TogglePlayback,
    Previous,
    Next,
    VolumeDown,
    VolumeUp,
}

/// Command handed to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlayerCommand {
    Play,
    Stop,
    Previous,
    Next,
    SetVolume(u8),
}

/// Map a gesture on a key to an action. Clicks navigate, cyclic holds
/// adjust volume; everything else is ignored.
pub fn action_for(role: KeyRole, event: ButtonEvent) -> Option<KeyAction> {
    match (event, role) {
        (ButtonEvent::ClickUp, KeyRole::Play) => Some(KeyAction::TogglePlayback),
        (ButtonEvent::ClickUp, KeyRole::Last) => Some(KeyAction::Previous),
        (ButtonEvent::ClickUp, KeyRole::Next) => Some(KeyAction::Next),
        (ButtonEvent::HoldCyclic, KeyRole::Last) => Some(KeyAction::VolumeDown),
        (ButtonEvent::HoldCyclic, KeyRole::Next) => Some(KeyAction::VolumeUp),
        _ => None,
    }
}

/// Player state as seen from the keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransportState {
    pub running: bool,
    pub volume: u8,
}

impl TransportState {
    pub const fn new(volume: u8) -> Self {
        Self {
            running: false,
            volume,
        }
    }

    /// Apply an action and return the command to issue, if any.
    ///
    /// Volume steps stop at `VOLUME_MIN` / `VOLUME_MAX`.
    pub fn apply(&mut self, action: KeyAction) -> Option<PlayerCommand> {
        match action {
            KeyAction::TogglePlayback => {
                self.running = !self.running;
                Some(if self.running {
                    PlayerCommand::Play
                } else {
                    PlayerCommand::Stop
                })
            }
            KeyAction::Previous => Some(PlayerCommand::Previous),
            KeyAction::Next => Some(PlayerCommand::Next),
            KeyAction::VolumeDown => {
                if self.volume > VOLUME_MIN {
                    self.volume -= 1;
                    Some(PlayerCommand::SetVolume(self.volume))
                } else {
                    None
                }
            }
            KeyAction::VolumeUp => {
                if self.volume < VOLUME_MAX {
                    self.volume += 1;
                    Some(PlayerCommand::SetVolume(self.volume))
                } else {
                    None
                }
            }
        }
    }
}
