//! Validator runner: grading buffers against a unit's validator.

use std::panic;

use tracing::{debug, warn};

use crate::model::{Buffers, Lesson, Outcome};

/// Reason given when a validator blows up instead of returning a verdict.
pub const VALIDATOR_ERROR: &str =
    "Validator error: your code could not be checked. Run it again or adjust your code.";

/// Grades `buffers` against `lesson`'s validator.
///
/// A unit without a validator always passes. A panicking validator is
/// reported as a failure, never propagated.
pub fn run(lesson: &Lesson, buffers: &Buffers) -> Outcome {
    let Some(validator) = lesson.validator else {
        debug!(unit = lesson.key, "no validator, passing");
        return Outcome::Pass;
    };

    let outcome = match panic::catch_unwind(|| validator(buffers)) {
        Ok(Ok(())) => Outcome::Pass,
        Ok(Err(reason)) => Outcome::fail(reason),
        Err(_) => {
            warn!(unit = lesson.key, "validator panicked");
            Outcome::fail(VALIDATOR_ERROR)
        }
    };

    debug!(unit = lesson.key, pass = outcome.is_pass(), "validator ran");
    outcome
}
