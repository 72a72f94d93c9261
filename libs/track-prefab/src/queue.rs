//! Ordered, front-consumed queue of prefab records.
//!
//! The queue is loaded once per run; consumption state is never persisted.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::PrefabError;
use crate::prefab::Prefab;

/// An ordered list of prefabs consumed from the front.
///
/// # Examples
/// ```
/// use track_prefab::PrefabQueue;
///
/// let json = r#"[{"type": "straight", "elevation": 0, "tilt_start": 0,
///                 "tilt_end": 0, "slope_start": 0, "slope_end": 0}]"#;
/// let mut queue = PrefabQueue::from_json(json).unwrap();
/// assert!(queue.has_prefab());
/// queue.next_prefab();
/// assert!(!queue.has_prefab());
/// ```
#[derive(Debug, Clone)]
pub struct PrefabQueue {
    prefabs: VecDeque<Prefab>,
}

impl PrefabQueue {
    /// Loads the queue from a JSON file on disk.
    ///
    /// Fails on unreadable files, non-array input, and malformed elements.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PrefabError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses the queue from JSON text.
    ///
    /// Elements are validated one by one so a malformed record reports its
    /// position in the array.
    pub fn from_json(text: &str) -> Result<Self, PrefabError> {
        let elements: Vec<Value> = serde_json::from_str(text)?;

        let mut prefabs = VecDeque::with_capacity(elements.len());
        for (index, element) in elements.into_iter().enumerate() {
            let prefab: Prefab = serde_json::from_value(element)
                .map_err(|source| PrefabError::Malformed { index, source })?;
            if prefab.is_missing_directions() {
                return Err(PrefabError::IncompleteCurve { index });
            }
            prefabs.push_back(prefab);
        }
        Ok(Self { prefabs })
    }

    /// Removes and returns the next prefab, front first.
    pub fn next_prefab(&mut self) -> Option<Prefab> {
        self.prefabs.pop_front()
    }

    /// Returns true while prefabs remain.
    pub fn has_prefab(&self) -> bool {
        !self.prefabs.is_empty()
    }

    /// Number of prefabs still queued.
    pub fn len(&self) -> usize {
        self.prefabs.len()
    }

    /// Returns true when no prefabs remain.
    pub fn is_empty(&self) -> bool {
        self.prefabs.is_empty()
    }
}
