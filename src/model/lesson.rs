//! Lesson units: authored curriculum nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Buffers, Track};

/// What a validator returns: `Ok(())` on success, or a short reason the learner can act on.
pub type Verdict = Result<(), String>;

/// A pure predicate over the three buffers.
///
/// Must not perform I/O and must give the same verdict for the same input.
pub type Validator = fn(&Buffers) -> Verdict;

/// Difficulty tier shown alongside the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        })
    }
}

/// Starting contents of the buffers when a unit is opened.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitialCode {
    pub markup: &'static str,
    pub style: &'static str,
    pub script: &'static str,
}

impl InitialCode {
    pub fn to_buffers(self) -> Buffers {
        Buffers {
            markup: self.markup.to_string(),
            style: self.style.to_string(),
            script: self.script.to_string(),
        }
    }
}

/// One node of the curriculum chain. Defined once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Lesson {
    /// Stable key, unique across the catalog.
    pub key: &'static str,
    pub track: Track,
    pub tier: Tier,
    pub title: &'static str,
    pub description: &'static str,
    /// Instructional body, markdown.
    pub content: &'static str,
    pub initial: InitialCode,
    /// `None` means the unit has no gate.
    pub validator: Option<Validator>,
    /// Key of the successor, or `None` for the terminal unit.
    pub next: Option<&'static str>,
}
