//! Progression and gamification: turning a pass into updated learner state.
//!
//! Everything here is a pure function of a progress record, the catalog,
//! and a clock reading. [`commit_completion`] never touches the record it is
//! given; it returns the next record for the caller to persist. Unit status
//! is derived on every read, never stored.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::certificate;
use crate::model::{Badge, Lesson, Outcome, ProgressRecord, UnitStatus};

const MILLIS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Experience awarded per completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Rewards {
    /// Awarded for every completion.
    pub base_xp: u64,

    /// Added when the most recent run before the commit passed.
    pub bonus_xp: u64,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            base_xp: 50,
            bonus_xp: 25,
        }
    }
}

/// Errors that stop a commit before any state is computed.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("unit {0} has not passed validation")]
    NotPassed(String),

    #[error("catalog integrity error: unit {0} is not in the catalog")]
    UnknownUnit(String),
}

pub type Result<T> = core::result::Result<T, ProgressError>;

/// The next record plus what changed, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub record: ProgressRecord,
    pub xp_gained: u64,
    pub bonus_applied: bool,
    pub new_badges: Vec<Badge>,
    /// The unit that follows, or `None` when the terminal unit was completed.
    pub next_unit: Option<&'static str>,
}

/// Status of `key` for this learner.
///
/// Completed beats current; anything else is locked.
pub fn status(record: &ProgressRecord, key: &str) -> UnitStatus {
    if record.is_completed(key) {
        UnitStatus::Completed
    } else if record.current_unit == key {
        UnitStatus::Unlocked
    } else {
        UnitStatus::Locked
    }
}

/// Whole days between two instants, ignoring direction.
pub fn days_between(a: Timestamp, b: Timestamp) -> u64 {
    let millis = (b.as_millisecond() - a.as_millisecond()).unsigned_abs();
    millis / MILLIS_PER_DAY
}

/// Streak after a completion at `now`.
///
/// First completion starts at 1. One day since the last completion extends
/// the streak, more than one resets it to 1, and the same day leaves it as is.
pub fn next_streak(streak: u32, last: Option<Timestamp>, now: Timestamp) -> u32 {
    let Some(last) = last else {
        return 1;
    };
    match days_between(last, now) {
        0 => streak,
        1 => streak.saturating_add(1),
        _ => 1,
    }
}

/// Computes the record that results from completing `key` at `now`.
///
/// `latest` is the most recent run outcome for this unit in the session, on
/// the current buffers, or `None` if it has not been run. Gated units need
/// `Some(Pass)`; ungated units may commit without a run. A `Fail` never
/// commits. The bonus is applied only when `latest` is a pass.
pub fn commit_completion(
    catalog: &Catalog,
    record: &ProgressRecord,
    key: &str,
    latest: Option<&Outcome>,
    now: Timestamp,
    rewards: Rewards,
) -> Result<Completion> {
    let lesson = catalog
        .get(key)
        .map_err(|_| ProgressError::UnknownUnit(key.to_string()))?;

    let passed = latest.is_some_and(Outcome::is_pass);
    let gated = lesson.validator.is_some();
    if matches!(latest, Some(Outcome::Fail { .. })) || (gated && !passed) {
        return Err(ProgressError::NotPassed(key.to_string()));
    }

    let mut next = record.clone();
    next.completions.insert(lesson.key.to_string(), true);

    let xp_gained = rewards.base_xp + if passed { rewards.bonus_xp } else { 0 };
    next.xp = next.xp.saturating_add(xp_gained);

    next.streak = next_streak(record.streak, record.last_completed_at, now);

    let new_badges = award_badges(catalog, &mut next);

    if let Some(successor) = lesson.next {
        next.current_unit = successor.to_string();
    }

    next.last_completed_at = Some(now);

    info!(
        unit = lesson.key,
        xp = next.xp,
        streak = next.streak,
        bonus = passed,
        "completion computed"
    );

    Ok(Completion {
        record: next,
        xp_gained,
        bonus_applied: passed,
        new_badges,
        next_unit: lesson.next,
    })
}

/// Adds the badge of every fully completed track not already held.
///
/// Returns the badges added by this call.
fn award_badges(catalog: &Catalog, record: &mut ProgressRecord) -> Vec<Badge> {
    let mut added = Vec::new();
    for (track, units) in catalog.by_track() {
        let badge = track.badge();
        if record.has_badge(badge) {
            continue;
        }
        if units.iter().all(|l| record.is_completed(l.key)) {
            debug!(%track, %badge, "track complete");
            record.badges.push(badge);
            added.push(badge);
        }
    }
    added
}

/// The unit to resume: the record's current unit, or the first unit when
/// that key is not in the catalog.
pub fn resume_target<'a>(catalog: &'a Catalog, record: &ProgressRecord) -> &'a Lesson {
    catalog
        .get(&record.current_unit)
        .unwrap_or_else(|_| catalog.first())
}

/// Number of catalog units this learner has completed.
pub fn completed_count(catalog: &Catalog, record: &ProgressRecord) -> usize {
    catalog
        .iter()
        .filter(|l| record.is_completed(l.key))
        .count()
}

/// Dashboard view of a learner's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
    /// Rounded to the nearest whole percent.
    pub percent: usize,
    pub xp: u64,
    pub streak: u32,
    pub badges: Vec<Badge>,
    pub resume: &'static str,
    pub certificate_eligible: bool,
}

pub fn summarize(catalog: &Catalog, record: &ProgressRecord) -> Summary {
    let completed = completed_count(catalog, record);
    let total = catalog.count();
    Summary {
        completed,
        total,
        percent: (completed * 200 + total) / (2 * total),
        xp: record.xp,
        streak: record.streak,
        badges: record.badges.clone(),
        resume: resume_target(catalog, record).key,
        certificate_eligible: certificate::is_eligible(catalog, record),
    }
}
