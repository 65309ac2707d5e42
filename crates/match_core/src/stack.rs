use crate::gesture::SwipeDirection;
use crate::job::{Job, JobId};

/// Generation counter for batches; stamps timers and submissions.
pub type BatchId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackPhase {
    #[default]
    Loading,
    Active,
    Exhausted,
}

/// A decision the stack wants submitted to the decision sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRequest {
    pub batch: BatchId,
    pub job_id: JobId,
    pub interested: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Settlement did not belong to the current card; nothing moved.
    Stale,
    /// Cursor moved; `exhausted` is true the first time the end is reached.
    Moved { exhausted: bool },
}

/// Cursor over one externally ranked batch of jobs.
///
/// Invariants: `cursor <= jobs.len()`, the cursor never moves backwards
/// within a batch, and at most one decision is in flight.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwipeStack {
    jobs: Vec<Job>,
    cursor: usize,
    batch: BatchId,
    decision_in_flight: bool,
    exhausted_signaled: bool,
    phase: StackPhase,
}

impl SwipeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the batch and rewinds the cursor. Returns true if the new
    /// batch is already exhausted (empty), which counts as an exhaustion event.
    pub fn initialize(&mut self, jobs: Vec<Job>) -> bool {
        self.jobs = jobs;
        self.cursor = 0;
        self.batch += 1;
        self.decision_in_flight = false;
        self.exhausted_signaled = false;
        if self.jobs.is_empty() {
            self.phase = StackPhase::Exhausted;
            self.exhausted_signaled = true;
            true
        } else {
            self.phase = StackPhase::Active;
            false
        }
    }

    /// Enters `Loading` until [`SwipeStack::initialize`] or [`SwipeStack::refresh_failed`].
    pub fn begin_refresh(&mut self) {
        self.phase = StackPhase::Loading;
    }

    /// The fetch failed: keep whatever batch was there.
    pub fn refresh_failed(&mut self) {
        self.phase = if self.is_exhausted() {
            StackPhase::Exhausted
        } else {
            StackPhase::Active
        };
    }

    pub fn phase(&self) -> StackPhase {
        self.phase
    }

    pub fn batch(&self) -> BatchId {
        self.batch
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.jobs.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.jobs.len()
    }

    pub fn decision_in_flight(&self) -> bool {
        self.decision_in_flight
    }

    pub fn current_job(&self) -> Option<&Job> {
        self.jobs.get(self.cursor)
    }

    /// Look-ahead for pre-rendering only.
    pub fn next_job(&self) -> Option<&Job> {
        self.jobs.get(self.cursor + 1)
    }

    /// Starts a submission for the current card, unless one is already pending.
    pub fn on_decision(&mut self, direction: SwipeDirection) -> Option<DecisionRequest> {
        if self.decision_in_flight {
            return None;
        }
        let job = self.jobs.get(self.cursor)?;
        self.decision_in_flight = true;
        Some(DecisionRequest {
            batch: self.batch,
            job_id: job.id.clone(),
            interested: direction.is_interested(),
        })
    }

    /// Finishes the in-flight submission, successful or not, and advances.
    pub fn complete_decision(&mut self, batch: BatchId, job_id: &JobId) -> Advance {
        let is_current = batch == self.batch
            && self.decision_in_flight
            && self.current_job().is_some_and(|job| &job.id == job_id);
        if !is_current {
            return Advance::Stale;
        }

        self.decision_in_flight = false;
        self.cursor += 1;
        if self.is_exhausted() && !self.exhausted_signaled {
            self.exhausted_signaled = true;
            if self.phase != StackPhase::Loading {
                self.phase = StackPhase::Exhausted;
            }
            return Advance::Moved { exhausted: true };
        }
        Advance::Moved { exhausted: false }
    }
}
