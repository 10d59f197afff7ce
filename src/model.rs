//! Core data model for Codetrail.
//!
//! These types describe the curriculum and the learner:
//! tracks, lesson units, code buffers, validation outcomes, and progress records.

mod buffers;
mod lesson;
mod outcome;
mod progress;
mod track;

pub use buffers::{Buffers, Field};
pub use lesson::{InitialCode, Lesson, Tier, Validator, Verdict};
pub use outcome::Outcome;
pub use progress::{ProgressRecord, UnitStatus};
pub use track::{Badge, Track};
