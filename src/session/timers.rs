//! Scheduled tasks on a virtual clock.
//!
//! The session never touches a real timer. It schedules tasks on a
//! `TimerQueue` and the host advances the clock (from a UI timer, a game
//! loop, or a test). Cancelling a task before it fires removes it; a
//! notification replaces its predecessor by cancelling the pending clear.
//!
//! ```
//! use std::time::Duration;
//! use set_engine::session::{TimerQueue, TimerTask};
//!
//! let mut timers = TimerQueue::new();
//! let first = timers.schedule(Duration::from_millis(100), TimerTask::ClearStatus);
//! timers.cancel(first);
//! timers.schedule(Duration::from_millis(100), TimerTask::ClearStatus);
//!
//! let until = timers.now() + Duration::from_millis(150);
//! let mut fired = 0;
//! while timers.pop_due(until).is_some() {
//!     fired += 1;
//! }
//! assert_eq!(fired, 1);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle of a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// Work a timer performs when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerTask {
    /// Blank the status line.
    ClearStatus,
    /// Advance the elapsed-time counter.
    Tick,
}

#[derive(Clone, Debug)]
struct Scheduled {
    id: TimerId,
    due: Duration,
    task: TimerTask,
}

/// Pending tasks ordered by due time, then by scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    /// Cancel a pending task. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    /// Drop every pending task.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest task due at or before `until`,
    /// moving the clock to its due time.
    ///
    /// Tasks scheduled by the caller between calls are considered too, so
    /// a repeating task can reschedule itself inside a single advance.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, TimerTask)> {
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= until)
            .min_by_key(|(_, s)| (s.due, s.id.0))?;
        let scheduled = self.pending.remove(pos);
        self.now = self.now.max(scheduled.due);
        Some((scheduled.id, scheduled.task))
    }

    /// Move the clock forward to `until` without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
