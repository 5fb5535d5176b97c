//! Press-and-hold repetition driven by an external millisecond clock.
//!
//! The controller never calls anything itself. [`RepeatController::press`]
//! hands back the action to fire immediately and arms the initial delay;
//! [`RepeatController::poll`] hands back one due repetition per call. Because
//! firings only happen inside those calls, nothing can fire after
//! [`RepeatController::stop`] returns.

use log::debug;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RepeatConfig {
    pub initial_delay_ms: u64,
    pub interval_ms: u64,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 500,
            interval_ms: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepeatPhase {
    Idle,
    Pressed,
    Repeating,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RepeatState<T> {
    Idle,
    Pressed { action: T, fire_at_ms: u64 },
    Repeating { action: T, next_fire_ms: u64 },
}

#[derive(Clone, Debug)]
pub struct RepeatController<T> {
    config: RepeatConfig,
    state: RepeatState<T>,
}

impl<T: Copy + core::fmt::Debug> RepeatController<T> {
    pub fn new(mut config: RepeatConfig) -> Self {
        config.interval_ms = config.interval_ms.max(1);
        Self {
            config,
            state: RepeatState::Idle,
        }
    }

    pub fn config(&self) -> RepeatConfig {
        self.config
    }

    pub fn phase(&self) -> RepeatPhase {
        match self.state {
            RepeatState::Idle => RepeatPhase::Idle,
            RepeatState::Pressed { .. } => RepeatPhase::Pressed,
            RepeatState::Repeating { .. } => RepeatPhase::Repeating,
        }
    }

    pub fn active_action(&self) -> Option<T> {
        match self.state {
            RepeatState::Idle => None,
            RepeatState::Pressed { action, .. } | RepeatState::Repeating { action, .. } => {
                Some(action)
            }
        }
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        match self.state {
            RepeatState::Idle => None,
            RepeatState::Pressed { fire_at_ms, .. } => Some(fire_at_ms),
            RepeatState::Repeating { next_fire_ms, .. } => Some(next_fire_ms),
        }
    }

    /// Starts holding `action` and returns it for the immediate firing. Any
    /// repeat already in progress is replaced.
    pub fn press(&mut self, action: T, now_ms: u64) -> T {
        if let Some(previous) = self.active_action() {
            debug!("repeat: {:?} replaced by {:?}", previous, action);
        }
        self.state = RepeatState::Pressed {
            action,
            fire_at_ms: now_ms.saturating_add(self.config.initial_delay_ms),
        };
        action
    }

    /// Returns the held action if a firing is due at `now_ms`. Call until it
    /// returns `None` to catch up after a late tick.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.state {
            RepeatState::Pressed { action, fire_at_ms } if now_ms >= fire_at_ms => {
                debug!("repeat: {:?} repeating from {}ms", action, fire_at_ms);
                self.state = RepeatState::Repeating {
                    action,
                    next_fire_ms: fire_at_ms.saturating_add(self.config.interval_ms),
                };
                Some(action)
            }
            RepeatState::Repeating {
                action,
                next_fire_ms,
            } if now_ms >= next_fire_ms => {
                self.state = RepeatState::Repeating {
                    action,
                    next_fire_ms: next_fire_ms.saturating_add(self.config.interval_ms),
                };
                Some(action)
            }
            _ => None,
        }
    }

    /// Cancels the hold. Idempotent; returns whether a hold was active.
    pub fn stop(&mut self) -> bool {
        let Some(action) = self.active_action() else {
            return false;
        };
        debug!("repeat: {:?} stopped", action);
        self.state = RepeatState::Idle;
        true
    }
}
