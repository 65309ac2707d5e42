use crate::{AccessibilityPreferences, CardTransform, Job, StackPhase};

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub job: Job,
    pub transform: CardTransform,
    /// Only the top card accepts input; the preview beneath never does.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub phase: StackPhase,
    pub loading: bool,
    pub remaining: usize,
    pub active_card: Option<CardView>,
    pub preview_card: Option<CardView>,
    pub fetch_error: Option<String>,
    pub submission_error: Option<String>,
    pub last_status: Option<String>,
    pub preferences: AccessibilityPreferences,
    pub document_classes: Vec<&'static str>,
    pub dirty: bool,
}

impl AppViewModel {
    /// The "all caught up" screen: nothing left and nothing loading.
    pub fn is_empty_state(&self) -> bool {
        self.phase == StackPhase::Exhausted && !self.loading
    }
}
