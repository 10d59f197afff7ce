//! Learner progress records.

use std::collections::BTreeMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Badge;

/// Durable per-learner state.
///
/// Mutated only through a successful commit; see `progress::commit_completion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Unit key to completion flag. A missing key means not completed.
    pub completions: BTreeMap<String, bool>,

    /// The unit the learner is working on.
    pub current_unit: String,

    pub xp: u64,
    pub streak: u32,

    /// Earned badges in award order, each at most once.
    pub badges: Vec<Badge>,

    pub last_completed_at: Option<Timestamp>,
}

impl ProgressRecord {
    /// A freshly enrolled learner positioned on `first_unit`.
    pub fn new(first_unit: &str) -> Self {
        Self {
            completions: BTreeMap::new(),
            current_unit: first_unit.to_string(),
            xp: 0,
            streak: 0,
            badges: Vec::new(),
            last_completed_at: None,
        }
    }

    pub fn is_completed(&self, key: &str) -> bool {
        self.completions.get(key).copied().unwrap_or(false)
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badges.contains(&badge)
    }
}

/// Per-unit status, derived from a progress record on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitStatus {
    Locked,
    Unlocked,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_empty() {
        let record = ProgressRecord::new("html-intro");
        assert_eq!(record.current_unit, "html-intro");
        assert_eq!(record.xp, 0);
        assert_eq!(record.streak, 0);
        assert!(record.badges.is_empty());
        assert!(record.last_completed_at.is_none());
        assert!(record.completions.is_empty());
    }

    #[test]
    fn false_entries_do_not_count_as_completed() {
        let mut record = ProgressRecord::new("a");
        record.completions.insert("a".into(), true);
        record.completions.insert("b".into(), false);

        assert!(record.is_completed("a"));
        assert!(!record.is_completed("b"));
        assert!(!record.is_completed("c"));
    }

    #[test]
    fn round_trips_through_json() {
        let mut record = ProgressRecord::new("a");
        record.completions.insert("a".into(), true);
        record.badges.push(Badge::CssStylist);
        record.last_completed_at = Some(Timestamp::new(1_700_000_000, 0).unwrap());

        let json = serde_json::to_string(&record).unwrap();
        let back: ProgressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
