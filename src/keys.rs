//! Key handlers - turn button gestures into transport actions.
//!
//! Each key gets its own [`KeyHandler`] with a fixed [`KeyRole`]. Handlers
//! run inside the scan tick, so they never wait: a full queue is reported
//! as `Busy` and the action is dropped.

use keyscan::config::ACTION_QUEUE_DEPTH;
use defmt::debug;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use keyscan::key_logic::{action_for, KeyAction, KeyRole};
use keyscan::{ButtonConfig, ButtonEvent, ButtonHandler, HandlerError};

pub type ActionSender = Sender<'static, CriticalSectionRawMutex, KeyAction, ACTION_QUEUE_DEPTH>;

pub struct KeyHandler {
    role: KeyRole,
    tx: ActionSender,
}

impl KeyHandler {
    pub fn new(role: KeyRole, tx: ActionSender) -> Self {
        Self { role, tx }
    }
}

impl ButtonHandler<usize> for KeyHandler {
    fn on_event(
        &mut self,
        _button: &ButtonConfig<usize>,
        event: ButtonEvent,
    ) -> Result<(), HandlerError> {
        let Some(action) = action_for(self.role, event) else {
            return Ok(());
        };

        debug!("Key {}: {} -> {}", self.role, event, action);
        self.tx.try_send(action).map_err(|_| HandlerError::Busy)
    }
}
