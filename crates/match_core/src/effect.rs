use std::time::Duration;

use crate::{AccessibilityPreferences, BatchId, JobId, SwipeDirection};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchJobs {
        radius_miles: f64,
        limit: u32,
    },
    /// Deliver [`crate::Msg::ExitElapsed`] after `delay`.
    ScheduleExit {
        batch: BatchId,
        job_id: JobId,
        direction: SwipeDirection,
        delay: Duration,
    },
    /// Deliver [`crate::Msg::DecisionSettled`] once the sink answers.
    SubmitDecision {
        batch: BatchId,
        job_id: JobId,
        interested: bool,
    },
    /// The batch ran out; fired once per exhaustion.
    NotifyExhausted,
    PersistPreferences(AccessibilityPreferences),
    /// Pending exit timers are no longer wanted.
    CancelTimers,
}
