use crate::gesture::GestureMachine;
use crate::view_model::{AppViewModel, CardView};
use crate::{AccessibilityPreferences, SwipeStack};

/// Search radius requested from the job source unless configured otherwise.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;
/// Batch size requested from the job source unless configured otherwise.
pub const DEFAULT_JOB_LIMIT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchParams {
    pub radius_miles: f64,
    pub limit: u32,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            radius_miles: DEFAULT_RADIUS_MILES,
            limit: DEFAULT_JOB_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    stack: SwipeStack,
    gesture: GestureMachine,
    fetch: FetchParams,
    fetch_pending: bool,
    fetch_error: Option<String>,
    submission_error: Option<String>,
    last_status: Option<String>,
    preferences: AccessibilityPreferences,
    detached: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_params(fetch: FetchParams) -> Self {
        Self {
            fetch,
            ..Self::default()
        }
    }

    pub fn stack(&self) -> &SwipeStack {
        &self.stack
    }

    pub fn preferences(&self) -> &AccessibilityPreferences {
        &self.preferences
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn view(&self) -> AppViewModel {
        let active_card = self.stack.current_job().map(|job| CardView {
            job: job.clone(),
            transform: self.gesture.transform(),
            interactive: true,
        });
        let preview_card = self.stack.next_job().map(|job| {
            let preview = GestureMachine::preview();
            CardView {
                job: job.clone(),
                transform: preview.transform(),
                interactive: preview.is_interactive(),
            }
        });

        AppViewModel {
            phase: self.stack.phase(),
            loading: self.fetch_pending,
            remaining: self.stack.remaining(),
            active_card,
            preview_card,
            fetch_error: self.fetch_error.clone(),
            submission_error: self.submission_error.clone(),
            last_status: self.last_status.clone(),
            preferences: self.preferences,
            document_classes: self.preferences.document_classes(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn stack_mut(&mut self) -> &mut SwipeStack {
        &mut self.stack
    }

    pub(crate) fn gesture(&self) -> &GestureMachine {
        &self.gesture
    }

    pub(crate) fn gesture_mut(&mut self) -> &mut GestureMachine {
        &mut self.gesture
    }

    pub(crate) fn reset_gesture(&mut self) {
        self.gesture = GestureMachine::interactive();
    }

    pub(crate) fn fetch_params(&self) -> FetchParams {
        self.fetch
    }

    pub(crate) fn fetch_pending(&self) -> bool {
        self.fetch_pending
    }

    pub(crate) fn set_fetch_pending(&mut self, pending: bool) {
        self.fetch_pending = pending;
    }

    pub(crate) fn set_fetch_error(&mut self, error: Option<String>) {
        self.fetch_error = error;
    }

    pub(crate) fn record_submission(&mut self, status: Option<String>, error: Option<String>) {
        self.last_status = status;
        self.submission_error = error;
    }

    pub(crate) fn preferences_mut(&mut self) -> &mut AccessibilityPreferences {
        &mut self.preferences
    }

    pub(crate) fn detach(&mut self) {
        self.detached = true;
    }
}
