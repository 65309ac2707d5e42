use std::sync::Arc;

use anyhow::Context;
use match_core::{Effect, Msg, SubmissionOutcome};
use match_engine::{
    load_or_default, EngineConfig, EngineEvent, EngineHandle, PreferenceStore,
    RonPreferenceStore,
};
use match_logging::{match_debug, match_error, match_info, match_warn};

/// Turns core effects into engine commands and engine events back into
/// core messages.
pub struct EffectRunner {
    engine: EngineHandle,
    store: Arc<dyn PreferenceStore>,
}

impl EffectRunner {
    pub fn new(config: &EngineConfig) -> anyhow::Result<Self> {
        let (source, sink) = config
            .build_services()
            .context("building matching services")?;
        let engine = EngineHandle::new(source, sink).context("starting engine runtime")?;
        let store = Arc::new(RonPreferenceStore::new(config.state_dir.clone()));
        Ok(Self::with_parts(engine, store))
    }

    pub fn with_parts(engine: EngineHandle, store: Arc<dyn PreferenceStore>) -> Self {
        Self { engine, store }
    }

    pub fn load_preferences(&self) -> Msg {
        Msg::PreferencesLoaded(load_or_default(self.store.as_ref()))
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs {
                    radius_miles,
                    limit,
                } => {
                    match_info!("FetchJobs radius_miles={} limit={}", radius_miles, limit);
                    self.engine.fetch_jobs(radius_miles, limit);
                }
                Effect::ScheduleExit {
                    batch,
                    job_id,
                    direction,
                    delay,
                } => {
                    match_debug!("ScheduleExit job={} direction={:?}", job_id, direction);
                    self.engine.schedule_exit(batch, job_id, delay);
                }
                Effect::SubmitDecision {
                    batch,
                    job_id,
                    interested,
                } => {
                    match_info!("SubmitDecision job={} interested={}", job_id, interested);
                    self.engine.submit_decision(batch, job_id, interested);
                }
                Effect::NotifyExhausted => {
                    match_info!("Batch exhausted");
                }
                Effect::PersistPreferences(preferences) => {
                    if let Err(err) = self.store.save(&preferences) {
                        match_error!("Failed to save accessibility preferences: {}", err);
                    }
                }
                Effect::CancelTimers => self.engine.detach(),
            }
        }
    }

    /// Everything the engine has finished since the last poll.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::JobsFetched(Ok(jobs)) => {
            match_info!("Fetched {} jobs", jobs.len());
            Msg::JobsLoaded(jobs)
        }
        EngineEvent::JobsFetched(Err(err)) => {
            match_warn!("Job fetch failed: {}", err);
            Msg::JobsFailed(err.to_string())
        }
        EngineEvent::ExitElapsed { batch, job_id } => Msg::ExitElapsed { batch, job_id },
        EngineEvent::DecisionSettled {
            batch,
            job_id,
            result,
        } => {
            let outcome = match result {
                Ok(receipt) => SubmissionOutcome::Recorded {
                    status: receipt.status,
                    created: receipt.created,
                },
                Err(err) => {
                    match_warn!("Decision for job {} failed: {}", job_id, err);
                    SubmissionOutcome::Failed {
                        reason: err.to_string(),
                    }
                }
            };
            Msg::DecisionSettled {
                batch,
                job_id,
                outcome,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use match_core::JobId;
    use match_engine::{ClientError, ClientFailure, DecisionReceipt};

    use super::*;

    #[test]
    fn failures_become_data() {
        let msg = event_to_msg(EngineEvent::JobsFetched(Err(ClientError::new(
            ClientFailure::Timeout,
            "slow",
        ))));
        assert_eq!(msg, Msg::JobsFailed("timeout: slow".to_string()));

        let msg = event_to_msg(EngineEvent::DecisionSettled {
            batch: 3,
            job_id: JobId::new("7"),
            result: Err(ClientError::new(ClientFailure::HttpStatus(502), "bad gateway")),
        });
        assert_eq!(
            msg,
            Msg::DecisionSettled {
                batch: 3,
                job_id: JobId::new("7"),
                outcome: SubmissionOutcome::Failed {
                    reason: "http status 502: bad gateway".to_string(),
                },
            }
        );
    }

    #[test]
    fn receipts_carry_status() {
        let msg = event_to_msg(EngineEvent::DecisionSettled {
            batch: 1,
            job_id: JobId::new("1"),
            result: Ok(DecisionReceipt {
                status: "You passed".to_string(),
                created: true,
            }),
        });
        assert!(matches!(
            msg,
            Msg::DecisionSettled {
                outcome: SubmissionOutcome::Recorded { created: true, .. },
                ..
            }
        ));
    }
}
