// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot timers keyed by task id.
//!
//! ## Semantics
//!
//! - [`TimerQueue::schedule`] returns a fresh [`TaskId`]; ids are never reused.
//! - [`TimerQueue::cancel`] drops a task that has not fired yet.
//! - [`TimerQueue::pop_due`] yields due tasks earliest deadline first; equal deadlines fire
//!   in scheduling order.

use alloc::vec::Vec;
use core::time::Duration;

/// Handle of a scheduled task.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct Scheduled<T> {
    id: TaskId,
    deadline: Duration,
    task: T,
}

/// Pending one-shot tasks.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    next: u64,
    tasks: Vec<Scheduled<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            next: 0,
            tasks: Vec::new(),
        }
    }

    /// Schedule `task` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Duration, task: T) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        self.tasks.push(Scheduled { id, deadline, task });
        id
    }

    /// Cancel a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|s| s.id != id);
        self.tasks.len() != before
    }

    /// Returns `true` if `id` has neither fired nor been cancelled.
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|s| s.id == id)
    }

    /// Remove and return the earliest task due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TaskId, T)> {
        let (idx, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, s)| s.deadline <= now)
            .min_by_key(|(_, s)| (s.deadline, s.id))?;
        let s = self.tasks.remove(idx);
        Some((s.id, s.task))
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.iter().map(|s| s.deadline).min()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
