use crate::{
    AccessibilityPreferences, BatchId, CardAction, Job, JobId, PointerEvent, PreferenceChange,
};

/// How the decision sink answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Recorded { status: String, created: bool },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Initial load, or the empty state's "get more" action.
    RefreshRequested,
    /// The job source delivered a new ranked batch.
    JobsLoaded(Vec<Job>),
    /// The job source failed; the host decides how to present it.
    JobsFailed(String),
    /// Pointer input over the top card.
    Pointer(PointerEvent),
    /// Skip / express-interest button.
    CardAction(CardAction),
    /// Exit animation delay for a committed card has elapsed.
    ExitElapsed { batch: BatchId, job_id: JobId },
    /// The decision sink finished, successfully or not.
    DecisionSettled {
        batch: BatchId,
        job_id: JobId,
        outcome: SubmissionOutcome,
    },
    /// Preferences read from the injected store at start-up.
    PreferencesLoaded(AccessibilityPreferences),
    /// User toggled a single preference.
    PreferenceChanged(PreferenceChange),
    /// User restored the default preferences.
    PreferencesReset,
    /// The hosting view went away; late timers and settlements must be inert.
    Detached,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
