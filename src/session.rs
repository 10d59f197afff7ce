//! Learner session: the explicit context every engine call goes through.
//!
//! A session owns one learner's in-memory progress record, the workspace of
//! the unit currently open, and the outcome of the latest run. The record is
//! loaded once when the session starts and only replaced after a commit has
//! been saved.

use jiff::Timestamp;
use tracing::{Span, debug, info, info_span, warn};
use uuid::Uuid;

use crate::catalog::{Catalog, CatalogError};
use crate::model::{Field, Lesson, Outcome, ProgressRecord, UnitStatus};
use crate::progress::{self, Completion, ProgressError, Rewards, Summary};
use crate::render::{self, RenderHost};
use crate::storage::{ProgressStore, StorageError};
use crate::validate;
use crate::workspace::Workspace;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no unit is open")]
    NoActiveUnit,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("progress was not saved: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = core::result::Result<T, SessionError>;

/// Outcome of a run, tied to the exact buffers it graded.
#[derive(Debug, Clone)]
struct LatestRun {
    digest: String,
    outcome: Outcome,
}

pub struct Session<'c> {
    id: Uuid,
    catalog: &'c Catalog,
    learner: String,
    record: ProgressRecord,
    rewards: Rewards,
    workspace: Option<Workspace>,
    latest: Option<LatestRun>,
    span: Span,
}

impl<'c> Session<'c> {
    /// Starts a session over an already loaded record.
    pub fn new(
        catalog: &'c Catalog,
        learner: impl Into<String>,
        record: ProgressRecord,
        rewards: Rewards,
    ) -> Self {
        let id = Uuid::new_v4();
        let learner = learner.into();
        let span = info_span!("session", %id, learner = %learner);
        if !catalog.contains(&record.current_unit) {
            warn!(
                parent: &span,
                unit = %record.current_unit,
                "current unit not in catalog, resuming at first unit"
            );
        }
        debug!(parent: &span, "session started");
        Self {
            id,
            catalog,
            learner,
            record,
            rewards,
            workspace: None,
            latest: None,
            span,
        }
    }

    /// Starts a session by loading the learner's record from `store`.
    pub fn load(
        catalog: &'c Catalog,
        store: &impl ProgressStore,
        learner: &str,
        rewards: Rewards,
    ) -> Result<Self> {
        let record = store.load_progress(learner)?;
        Ok(Self::new(catalog, learner, record, rewards))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn learner(&self) -> &str {
        &self.learner
    }

    /// The last record known to be saved.
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        self.workspace.as_ref()
    }

    pub fn status(&self, key: &str) -> UnitStatus {
        progress::status(&self.record, key)
    }

    pub fn summary(&self) -> Summary {
        progress::summarize(self.catalog, &self.record)
    }

    /// Opens `key`, discarding any open workspace and its latest outcome.
    pub fn open(&mut self, key: &str) -> Result<&'c Lesson> {
        let _entered = self.span.clone().entered();
        let lesson = self.catalog.get(key)?;
        self.workspace = Some(Workspace::open(lesson));
        self.latest = None;
        debug!(unit = lesson.key, status = ?self.status(lesson.key), "unit opened");
        Ok(lesson)
    }

    /// Opens the unit the learner should continue with.
    pub fn resume(&mut self) -> Result<&'c Lesson> {
        let key = progress::resume_target(self.catalog, &self.record).key;
        self.open(key)
    }

    /// Replaces one buffer of the open unit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        let workspace = self.workspace.as_mut().ok_or(SessionError::NoActiveUnit)?;
        workspace.edit(field, value);
        Ok(())
    }

    /// Outcome of the latest run, if the buffers have not changed since.
    pub fn latest_outcome(&self) -> Option<&Outcome> {
        let workspace = self.workspace.as_ref()?;
        let latest = self.latest.as_ref()?;
        (latest.digest == workspace.snapshot().digest()).then_some(&latest.outcome)
    }

    /// Renders the open unit's buffers to `host`, then grades them.
    pub fn run(&mut self, host: &dyn RenderHost) -> Result<Outcome> {
        let _entered = self.span.clone().entered();
        let workspace = self.workspace.as_ref().ok_or(SessionError::NoActiveUnit)?;
        let lesson = self.catalog.get(workspace.unit())?;
        let buffers = workspace.snapshot();

        host.mount(&render::render(buffers));
        let outcome = validate::run(lesson, buffers);

        info!(unit = lesson.key, pass = outcome.is_pass(), "run");
        self.latest = Some(LatestRun {
            digest: buffers.digest(),
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    /// Completes the open unit and saves the result.
    ///
    /// The session's record changes only if the save succeeds. On failure the
    /// previous record stays in place and the same commit can be retried.
    pub fn commit(&mut self, store: &impl ProgressStore, now: Timestamp) -> Result<Completion> {
        let _entered = self.span.clone().entered();
        let unit = self
            .workspace
            .as_ref()
            .ok_or(SessionError::NoActiveUnit)?
            .unit();

        let completion = progress::commit_completion(
            self.catalog,
            &self.record,
            unit,
            self.latest_outcome(),
            now,
            self.rewards,
        )?;

        if let Err(e) = store.save_progress(&self.learner, &completion.record) {
            warn!(unit, error = %e, "save failed, commit not applied");
            return Err(e.into());
        }

        info!(
            unit,
            xp_gained = completion.xp_gained,
            badges = completion.new_badges.len(),
            "commit saved"
        );
        self.record = completion.record.clone();
        self.latest = None;
        Ok(completion)
    }
}
