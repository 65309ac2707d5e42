use crate::gesture::{CardTransform, GestureOutcome, EXIT_DELAY};
use crate::{
    AccessibilityPreferences, Advance, AppState, BatchId, Effect, JobId, Msg, SubmissionOutcome,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // A torn-down view still receives late timers and settlements; drop them.
    if state.is_detached() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::RefreshRequested => {
            if state.fetch_pending() {
                return (state, Vec::new());
            }
            state.stack_mut().begin_refresh();
            state.set_fetch_pending(true);
            state.set_fetch_error(None);
            state.mark_dirty();
            let params = state.fetch_params();
            vec![Effect::FetchJobs {
                radius_miles: params.radius_miles,
                limit: params.limit,
            }]
        }
        Msg::JobsLoaded(jobs) => {
            state.set_fetch_pending(false);
            let exhausted = state.stack_mut().initialize(jobs);
            state.reset_gesture();
            state.mark_dirty();
            if exhausted {
                vec![Effect::NotifyExhausted]
            } else {
                Vec::new()
            }
        }
        Msg::JobsFailed(reason) => {
            state.set_fetch_pending(false);
            state.stack_mut().refresh_failed();
            state.set_fetch_error(Some(reason));
            state.mark_dirty();
            Vec::new()
        }
        Msg::Pointer(event) => {
            if state.stack().current_job().is_none() {
                return (state, Vec::new());
            }
            let before = state.gesture().transform();
            let outcome = state.gesture_mut().pointer(event);
            gesture_effects(&mut state, before, outcome)
        }
        Msg::CardAction(action) => {
            if state.stack().current_job().is_none() {
                return (state, Vec::new());
            }
            let before = state.gesture().transform();
            let outcome = state.gesture_mut().action(action);
            gesture_effects(&mut state, before, outcome)
        }
        Msg::ExitElapsed { batch, job_id } => {
            if !is_current_card(&state, batch, &job_id) {
                return (state, Vec::new());
            }
            let Some(direction) = state.gesture_mut().exit_elapsed() else {
                return (state, Vec::new());
            };
            match state.stack_mut().on_decision(direction) {
                Some(request) => vec![Effect::SubmitDecision {
                    batch: request.batch,
                    job_id: request.job_id,
                    interested: request.interested,
                }],
                None => Vec::new(),
            }
        }
        Msg::DecisionSettled {
            batch,
            job_id,
            outcome,
        } => match state.stack_mut().complete_decision(batch, &job_id) {
            Advance::Stale => Vec::new(),
            Advance::Moved { exhausted } => {
                match outcome {
                    SubmissionOutcome::Recorded { status, .. } => {
                        state.record_submission(Some(status), None)
                    }
                    SubmissionOutcome::Failed { reason } => {
                        state.record_submission(None, Some(reason))
                    }
                }
                state.reset_gesture();
                state.mark_dirty();
                if exhausted {
                    vec![Effect::NotifyExhausted]
                } else {
                    Vec::new()
                }
            }
        },
        Msg::PreferencesLoaded(preferences) => {
            *state.preferences_mut() = preferences;
            state.mark_dirty();
            Vec::new()
        }
        Msg::PreferenceChanged(change) => {
            if state.preferences_mut().apply(change) {
                state.mark_dirty();
                vec![Effect::PersistPreferences(*state.preferences())]
            } else {
                Vec::new()
            }
        }
        Msg::PreferencesReset => {
            let defaults = AccessibilityPreferences::default();
            if *state.preferences() == defaults {
                Vec::new()
            } else {
                *state.preferences_mut() = defaults;
                state.mark_dirty();
                vec![Effect::PersistPreferences(defaults)]
            }
        }
        Msg::Detached => {
            state.detach();
            vec![Effect::CancelTimers]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn gesture_effects(
    state: &mut AppState,
    before: CardTransform,
    outcome: Option<GestureOutcome>,
) -> Vec<Effect> {
    // Moves change the transform without producing an outcome.
    if state.gesture().transform() != before {
        state.mark_dirty();
    }
    match outcome {
        Some(GestureOutcome::Committed(direction)) => {
            let stack = state.stack();
            let Some(job) = stack.current_job() else {
                return Vec::new();
            };
            vec![Effect::ScheduleExit {
                batch: stack.batch(),
                job_id: job.id.clone(),
                direction,
                delay: EXIT_DELAY,
            }]
        }
        Some(GestureOutcome::Reverted) | None => Vec::new(),
    }
}

fn is_current_card(state: &AppState, batch: BatchId, job_id: &JobId) -> bool {
    let stack = state.stack();
    stack.batch() == batch && stack.current_job().is_some_and(|job| &job.id == job_id)
}
