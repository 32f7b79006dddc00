/*
  Rookery, a UCI-compatible chess engine.
  Copyright (C) 2024 The Rookery Authors (see AUTHORS.md file)

  Rookery is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Rookery is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The conditions under which a search gives up and returns its best move
//! so far.

use std::{
    sync::{atomic::AtomicBool, Arc},
    time::{Duration, Instant},
};

/// How deep, how long, and how wide a search is allowed to go.
///
/// Unlike a multi-threaded search engine's limit type, this one needs no
/// interior mutability on its bounds: the search is single-threaded, so
/// `max_depth`/`time_ms`/`node_limit` are read-only for the life of a call
/// to [`crate::search::search_root`]. `stop_flag` is the one field an
/// embedder may still flip from outside mid-search (e.g. in response to a
/// UCI `stop` command on another thread), so it alone needs atomics.
#[derive(Clone)]
pub struct SearchLimits {
    /// The deepest ply the root iterative-deepening loop will start.
    /// Depths already in progress are always finished.
    pub max_depth: u32,
    /// A wall-clock budget for the whole search, in milliseconds. `None`
    /// means no time limit.
    pub time_ms: Option<u64>,
    /// A cap on the total number of nodes visited. `None` means no cap.
    pub node_limit: Option<u64>,
    /// Set by the caller to request the search stop as soon as it notices.
    pub stop_flag: Arc<AtomicBool>,
}

/// The root iterative-deepening loop stops after this depth unless told
/// otherwise.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

impl SearchLimits {
    #[must_use]
    /// A limit with the default max depth and no time or node bound.
    pub fn new() -> SearchLimits {
        SearchLimits {
            max_depth: DEFAULT_MAX_DEPTH,
            time_ms: None,
            node_limit: None,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> SearchLimits {
        SearchLimits::new()
    }
}

/// Tracks wall-clock and node-count progress against a [`SearchLimits`]
/// during a single search call.
pub struct LimitTracker<'a> {
    limits: &'a SearchLimits,
    start: Instant,
    nodes: u64,
}

impl<'a> LimitTracker<'a> {
    #[must_use]
    pub fn start(limits: &'a SearchLimits) -> LimitTracker<'a> {
        limits
            .stop_flag
            .store(false, std::sync::atomic::Ordering::Relaxed);
        LimitTracker {
            limits,
            start: Instant::now(),
            nodes: 0,
        }
    }

    #[inline]
    /// Record that one more node has been visited.
    pub fn count_node(&mut self) {
        self.nodes += 1;
    }

    #[must_use]
    /// The total number of nodes counted so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[must_use]
    /// Has any stop condition (the cooperative flag, the time budget, or
    /// the node cap) been met?
    pub fn should_stop(&self) -> bool {
        if self.limits.stop_flag.load(std::sync::atomic::Ordering::Relaxed) {
            return true;
        }
        if let Some(cap) = self.limits.node_limit {
            if self.nodes >= cap {
                return true;
            }
        }
        if let Some(ms) = self.limits.time_ms {
            if self.start.elapsed() >= Duration::from_millis(ms) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn default_limit_never_stops_quickly() {
        let limits = SearchLimits::new();
        let tracker = LimitTracker::start(&limits);
        assert!(!tracker.should_stop());
    }

    #[test]
    fn node_limit_triggers_stop() {
        let mut limits = SearchLimits::new();
        limits.node_limit = Some(3);
        let mut tracker = LimitTracker::start(&limits);
        for _ in 0..3 {
            tracker.count_node();
        }
        assert!(tracker.should_stop());
    }

    #[test]
    fn stop_flag_triggers_stop() {
        let limits = SearchLimits::new();
        let tracker = LimitTracker::start(&limits);
        limits.stop_flag.store(true, Ordering::Relaxed);
        assert!(tracker.should_stop());
    }
}
