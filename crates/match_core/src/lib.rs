//! Volunteer-match core: pure swipe state machines and view-model helpers.
mod effect;
pub mod geo;
mod gesture;
mod job;
mod msg;
mod preferences;
mod stack;
mod state;
pub mod tiers;
mod update;
mod view_model;

pub use effect::Effect;
pub use gesture::{
    CardAction, CardTransform, GestureMachine, GestureOutcome, PointerEvent, SwipeDirection,
    EXIT_DELAY, EXIT_OFFSET, EXIT_ROTATION, ROTATION_FACTOR, SWIPE_THRESHOLD,
};
pub use job::{format_distance, format_shift_time, Job, JobId, JobStatus};
pub use msg::{Msg, SubmissionOutcome};
pub use preferences::{AccessibilityPreferences, ColorBlindMode, PreferenceChange};
pub use stack::{Advance, BatchId, DecisionRequest, StackPhase, SwipeStack};
pub use state::{AppState, FetchParams, DEFAULT_JOB_LIMIT, DEFAULT_RADIUS_MILES};
pub use update::update;
pub use view_model::{AppViewModel, CardView};
