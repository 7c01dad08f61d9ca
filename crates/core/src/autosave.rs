//! Autosave controller for the section editor.
//!
//! Persists in-progress edits without explicit user action. Two timers
//! feed a single serialized save path:
//!
//! - a **debounce** timer restarted on every data change, firing once
//!   the data has been stable for the quiet period;
//! - an **interval** timer acting as a safety net against rapid
//!   back-to-back edits that keep resetting the debounce. It only saves
//!   when there are unsaved changes.
//!
//! A manual `save_now` bypasses both timers and cancels any pending
//! debounce so a duplicate save does not fire right after.
//!
//! Saves execute inline in the controller's `select!` loop, so at most
//! one save is ever in flight; triggers arriving mid-save coalesce
//! through the dirty flag. A failed save parks the controller in the
//! `Error` state and keeps the changes dirty -- there is no automatic
//! retry, the next trigger is the retry path.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use futures::future::BoxFuture;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::types::Timestamp;

/// Default quiet period before a change-triggered save.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// Default period of the unconditional safety-net timer.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

/// Why a save attempt did not persist.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    /// The caller's validation rejected the data; nothing was written.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The backend write failed. Message surfaced verbatim.
    #[error("{0}")]
    Backend(String),
}

/// Controller lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved,
    Error,
}

/// Snapshot of the controller's observable state, published through a
/// watch channel on every transition.
#[derive(Debug, Clone)]
pub struct SaveState {
    pub status: SaveStatus,
    /// Updated only on successful saves.
    pub last_saved_at: Option<Timestamp>,
    /// Retained for display until the next successful save.
    pub last_error: Option<String>,
}

impl SaveState {
    fn initial() -> Self {
        Self {
            status: SaveStatus::Idle,
            last_saved_at: None,
            last_error: None,
        }
    }
}

/// Timer configuration.
#[derive(Debug, Clone)]
pub struct AutosaveConfig {
    pub debounce: Duration,
    pub interval: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            interval: DEFAULT_INTERVAL,
        }
    }
}

type SaveFn = Box<dyn Fn() -> BoxFuture<'static, Result<(), SaveError>> + Send + Sync>;

enum Trigger {
    Change,
    SaveNow,
}

/// Handle to a spawned autosave controller. Dropping the handle cancels
/// pending timers; an already in-flight save runs to completion.
pub struct AutosaveHandle {
    trigger_tx: mpsc::UnboundedSender<Trigger>,
    state_rx: watch::Receiver<SaveState>,
    cancel: CancellationToken,
}

impl AutosaveHandle {
    /// Record a data change: marks the state dirty and restarts the
    /// debounce timer.
    pub fn notify_change(&self) {
        let _ = self.trigger_tx.send(Trigger::Change);
    }

    /// Save immediately, bypassing both timers. Cancels any pending
    /// debounce so a duplicate save does not follow.
    pub fn save_now(&self) {
        let _ = self.trigger_tx.send(Trigger::SaveNow);
    }

    /// Current state snapshot.
    pub fn state(&self) -> SaveState {
        self.state_rx.borrow().clone()
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.state_rx.clone()
    }

    /// Cancel pending timers and stop the controller task.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for AutosaveHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawned task owning the timers and the serialized save path.
pub struct AutosaveController {
    config: AutosaveConfig,
    save_fn: SaveFn,
    trigger_rx: mpsc::UnboundedReceiver<Trigger>,
    state_tx: watch::Sender<SaveState>,
    cancel: CancellationToken,
    dirty: bool,
}

impl AutosaveController {
    /// Spawn a controller for one form section and return its handle.
    ///
    /// `save_fn` is expected to run validation before the write and
    /// return [`SaveError::Validation`] when it fails, so invalid data
    /// is never persisted.
    pub fn spawn<F, Fut>(config: AutosaveConfig, save_fn: F) -> AutosaveHandle
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SaveError>> + Send + 'static,
    {
        let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SaveState::initial());
        let cancel = CancellationToken::new();

        let controller = AutosaveController {
            config,
            save_fn: Box::new(move || Box::pin(save_fn())),
            trigger_rx,
            state_tx,
            cancel: cancel.clone(),
            dirty: false,
        };
        tokio::spawn(controller.run());

        AutosaveHandle {
            trigger_tx,
            state_rx,
            cancel,
        }
    }

    async fn run(mut self) {
        let mut debounce_deadline: Option<Instant> = None;

        // First tick is one full period out, not immediate.
        let mut interval = interval_at(
            Instant::now() + self.config.interval,
            self.config.interval,
        );
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::debug!("autosave controller stopping");
                    break;
                }
                trigger = self.trigger_rx.recv() => match trigger {
                    Some(Trigger::Change) => {
                        self.dirty = true;
                        debounce_deadline = Some(Instant::now() + self.config.debounce);
                    }
                    Some(Trigger::SaveNow) => {
                        debounce_deadline = None;
                        self.save().await;
                    }
                    None => break,
                },
                _ = tokio::time::sleep_until(debounce_deadline.unwrap_or_else(Instant::now)),
                        if debounce_deadline.is_some() => {
                    debounce_deadline = None;
                    self.save().await;
                }
                _ = interval.tick() => {
                    if self.dirty {
                        debounce_deadline = None;
                        self.save().await;
                    }
                }
            }
        }
    }

    /// Run one save. Executes inline in the loop, which is what
    /// serializes saves against the same section.
    async fn save(&mut self) {
        self.dirty = false;
        self.state_tx
            .send_modify(|s| s.status = SaveStatus::Saving);

        match (self.save_fn)().await {
            Ok(()) => {
                self.state_tx.send_modify(|s| {
                    s.status = SaveStatus::Saved;
                    s.last_saved_at = Some(Utc::now());
                    s.last_error = None;
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "autosave failed");
                // Changes remain unsaved; the next trigger retries.
                self.dirty = true;
                self.state_tx.send_modify(|s| {
                    s.status = SaveStatus::Error;
                    s.last_error = Some(e.to_string());
                });
            }
        }
    }
}
