use crate::models::TopicKey;
use std::collections::HashMap;

/// Per-topic completion flags. All false at startup; a flag flips true when
/// the user confirms quiz completion and stays true for the process lifetime.
#[derive(Debug, Clone)]
pub struct Progress {
    completed: HashMap<TopicKey, bool>,
}

impl Progress {
    pub fn new() -> Self {
        Progress {
            completed: TopicKey::ALL.iter().map(|k| (*k, false)).collect(),
        }
    }

    /// Idempotent: marking twice leaves the flag true.
    pub fn mark_complete(&mut self, topic: TopicKey) {
        self.completed.insert(topic, true);
    }

    pub fn is_complete(&self, topic: TopicKey) -> bool {
        self.completed.get(&topic).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        TopicKey::ALL.iter().filter(|k| self.is_complete(**k)).count()
    }

    pub fn badge_label(&self, topic: TopicKey) -> &'static str {
        if self.is_complete(topic) {
            "Completed ✓"
        } else {
            "Not Started"
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Progress::new()
    }
}
