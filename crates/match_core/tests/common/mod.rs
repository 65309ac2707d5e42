#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Once;

use chrono::{TimeZone, Utc};
use match_core::{
    update, AppState, Effect, Job, JobId, JobStatus, Msg, PointerEvent, SubmissionOutcome,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(match_logging::initialize_for_tests);
}

pub fn job(id: &str) -> Job {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap();
    Job {
        id: JobId::new(id),
        title: format!("Job {id}"),
        short_description: "Help out for an afternoon.".to_string(),
        description: "Sort donations and pack boxes.".to_string(),
        skill_tags: BTreeSet::from(["Organization".to_string()]),
        location_label: Some("East Lansing".to_string()),
        distance: Some(1.2),
        shift_start: start,
        shift_end: start + chrono::Duration::hours(3),
        is_urgent: false,
        score: 80.0,
        poster_username: "poster".to_string(),
        status: JobStatus::Open,
    }
}

pub fn loaded(ids: &[&str]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::RefreshRequested);
    let (state, _) = update(state, Msg::JobsLoaded(ids.iter().map(|id| job(id)).collect()));
    state
}

/// Drags the top card horizontally by `dx` and releases it.
pub fn drag(state: AppState, dx: f64) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::Pointer(PointerEvent::Down { x: 200.0, y: 300.0 }));
    let (state, _) = update(
        state,
        Msg::Pointer(PointerEvent::Move {
            x: 200.0 + dx,
            y: 310.0,
        }),
    );
    update(state, Msg::Pointer(PointerEvent::Up))
}

/// Runs a scheduled exit and returns the resulting effects.
pub fn elapse(state: AppState, effects: &[Effect]) -> (AppState, Vec<Effect>) {
    let (batch, job_id) = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleExit { batch, job_id, .. } => Some((*batch, job_id.clone())),
            _ => None,
        })
        .expect("schedule exit effect");
    update(state, Msg::ExitElapsed { batch, job_id })
}

pub fn recorded() -> SubmissionOutcome {
    SubmissionOutcome::Recorded {
        status: "You expressed interest".to_string(),
        created: true,
    }
}

/// Settles the single submission among `effects`.
pub fn settle(
    state: AppState,
    effects: &[Effect],
    outcome: SubmissionOutcome,
) -> (AppState, Vec<Effect>) {
    let (batch, job_id) = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SubmitDecision { batch, job_id, .. } => Some((*batch, job_id.clone())),
            _ => None,
        })
        .expect("submit decision effect");
    update(
        state,
        Msg::DecisionSettled {
            batch,
            job_id,
            outcome,
        },
    )
}
