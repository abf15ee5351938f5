//! Single-slot store for the most recently resolved path
//!
//! The rendering step runs as a separate request from the query that
//! computed the path, so the winning path is handed over through this
//! explicit cache instead of a side file on disk. One slot for the
//! whole process, last write wins, not keyed by requester.

use std::sync::{Arc, PoisonError, RwLock};

use crate::routing::PathResult;

/// Thread-safe single-slot cache of the last computed path.
///
/// The slot holds an `Arc` that is swapped as a whole under the lock,
/// so a concurrent reader observes either the previous value or the new
/// one, never a partially written path.
#[derive(Debug, Default)]
pub struct PathCache {
    slot: RwLock<Option<Arc<PathResult>>>,
}

impl PathCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `result`, discarding any previously held path.
    pub fn store(&self, result: PathResult) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::new(result));
    }

    /// Snapshot of the most recently stored path, if any.
    #[must_use]
    pub fn retrieve(&self) -> Option<Arc<PathResult>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::routing::PathResult;

    fn path(source: u32, destination: u32) -> PathResult {
        PathResult {
            path: vec![source, destination],
            distance: 1.0,
            source,
        }
    }

    #[test]
    fn starts_empty() {
        assert!(PathCache::new().retrieve().is_none());
    }

    #[test]
    fn last_write_wins() {
        let cache = PathCache::new();
        cache.store(path(150, 1));
        cache.store(path(450, 2));
        assert_eq!(cache.retrieve().unwrap().source, 450);
    }

    #[test]
    fn concurrent_readers_see_a_whole_path() {
        let cache = Arc::new(PathCache::new());
        let a = path(150, 1);
        let b = path(450, 2);

        let mut handles = Vec::new();
        for stored in [a.clone(), b.clone()] {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    cache.store(stored.clone());
                }
            }));
        }
        for _ in 0..2 {
            let cache = Arc::clone(&cache);
            let (a, b) = (a.clone(), b.clone());
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    // Either empty (before any store) or exactly one of
                    // the two stored paths; nothing in between.
                    match cache.retrieve() {
                        None => {}
                        Some(seen) => assert!(*seen == a || *seen == b),
                    }
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
