//! Deferred action restarted whenever a watched key changes.
//!
//! Driven by the frame loop: the caller feeds elapsed time through
//! [`KeyedTimer::tick`] and gets the key back once the delay ran out.

use std::time::Duration;

use tracing::debug;

/// Identifies one launched task. Every launch gets a fresh handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct PendingTask<K> {
    handle: TaskHandle,
    key: K,
    remaining: Duration,
}

#[derive(Debug)]
pub struct KeyedTimer<K> {
    delay: Duration,
    launched_key: Option<K>,
    pending: Option<PendingTask<K>>,
    next_handle: u64,
}

impl<K: Copy + PartialEq + std::fmt::Debug> KeyedTimer<K> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            launched_key: None,
            pending: None,
            next_handle: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Launches a task for `key` unless the last launch already used it.
    ///
    /// A task still waiting on an older key is cancelled first. Returns true
    /// when a new task was launched.
    pub fn rekey(&mut self, key: K) -> bool {
        // Same key as the last launch: leave it running (or finished)
        if self.launched_key == Some(key) {
            return false;
        }
        // New key: the old wait never completes
        self.cancel();

        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        debug!(?key, ?handle, delay_ms = self.delay.as_millis() as u64, "timer launched");

        self.pending = Some(PendingTask {
            handle,
            key,
            remaining: self.delay,
        });
        self.launched_key = Some(key);
        true
    }

    /// Drops the pending task, if any. Its continuation never runs.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            debug!(key = ?task.key, handle = ?task.handle, "timer cancelled");
        }
    }

    /// Advances the pending task by `dt` and returns its key if it fired.
    pub fn tick(&mut self, dt: Duration) -> Option<K> {
        let task = self.pending.as_mut()?;
        task.remaining = task.remaining.saturating_sub(dt);
        if !task.remaining.is_zero() {
            return None;
        }
        // Overshoot is dropped; the next launch starts a full delay
        self.pending.take().map(|task| task.key)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&self) -> Option<TaskHandle> {
        self.pending.as_ref().map(|task| task.handle)
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.pending.as_ref().map(|task| task.remaining)
    }
}
