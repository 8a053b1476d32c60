// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ghost-click filter: record synthetic taps and judge later clicks against them.
//!
//! ## Usage
//!
//! 1) When a tap handler consumes a touch, call [`GhostClickFilter::record_synthetic`] with the
//!    tap point. The returned [`ClickVerdict::Suppress`] tells the caller to cancel the tap's own
//!    default action and propagation.
//! 2) Route every real `click` through [`GhostClickFilter::on_click`] in the capture phase.
//!    Cancel the click when the verdict is [`ClickVerdict::Suppress`].
//! 3) Call [`GhostClickFilter::expire`] from the host's timer tick so records age out even when
//!    no click arrives.
//!
//! ## Expiry
//!
//! Each record carries its own deadline (`recorded_at + window`), but records are evicted
//! strictly oldest-first. One expiry pass removes records from the front while the front
//! record's deadline has passed, so a record never leaves before every record that came
//! before it. With monotonic time this is the same as per-record expiry; if a host feeds a
//! timestamp that goes backwards, the newer record waits behind the older one.

use alloc::collections::VecDeque;
use core::time::Duration;

use kurbo::Point;

use crate::config::FilterConfig;

/// Outcome of judging an input event against the live records.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ClickVerdict {
    /// Let the event run its default action and propagate.
    Allow,
    /// Cancel the event's default action and stop its propagation.
    Suppress,
}

impl ClickVerdict {
    /// Returns `true` for [`ClickVerdict::Allow`].
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Record {
    at: Point,
    expires: Duration,
}

/// Tracks recent synthetic taps and suppresses real clicks that land near them.
///
/// The list is append-only and pruned by time, never by count.
#[derive(Clone, Debug, Default)]
pub struct GhostClickFilter {
    config: FilterConfig,
    records: VecDeque<Record>,
}

impl GhostClickFilter {
    /// Create a filter with [`FilterConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter with explicit tuning.
    pub fn with_config(config: FilterConfig) -> Self {
        Self {
            config,
            records: VecDeque::new(),
        }
    }

    /// Current tuning.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Record a tap that a custom handler consumed.
    ///
    /// The record suppresses nearby clicks until `now + window`. Always returns
    /// [`ClickVerdict::Suppress`]: the originating tap has no further default action.
    pub fn record_synthetic(&mut self, at: Point, now: Duration) -> ClickVerdict {
        let expires = now.saturating_add(self.config.window);
        self.records.push_back(Record { at, expires });
        tracing::trace!(x = at.x, y = at.y, live = self.records.len(), "ghost click armed");
        ClickVerdict::Suppress
    }

    /// Returns `false` if `at` lies inside the suppression box of any live record.
    ///
    /// This does not age records; see [`GhostClickFilter::on_click`] for the time-aware check.
    pub fn should_allow(&self, at: Point) -> bool {
        let r = self.config.radius;
        !self
            .records
            .iter()
            .any(|rec| (at.x - rec.at.x).abs() < r && (at.y - rec.at.y).abs() < r)
    }

    /// Expire due records, then judge a real click at `at`.
    pub fn on_click(&mut self, at: Point, now: Duration) -> ClickVerdict {
        self.expire(now);
        if self.should_allow(at) {
            ClickVerdict::Allow
        } else {
            tracing::trace!(x = at.x, y = at.y, "ghost click suppressed");
            ClickVerdict::Suppress
        }
    }

    /// Evict records whose deadline has passed, oldest first. Returns how many were evicted.
    pub fn expire(&mut self, now: Duration) -> usize {
        let mut evicted = 0;
        while let Some(front) = self.records.front()
            && front.expires <= now
        {
            self.records.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Deadline of the oldest live record, if any.
    ///
    /// Hosts that drive the filter from a timer can sleep until this instant.
    pub fn next_expiry(&self) -> Option<Duration> {
        self.records.front().map(|r| r.expires)
    }

    /// Points of the live records, oldest first.
    pub fn live_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.records.iter().map(|r| r.at)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are live.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
