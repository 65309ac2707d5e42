use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use match_core::{BatchId, JobId};
use match_logging::{match_debug, match_warn};
use tokio_util::sync::CancellationToken;

use crate::{DecisionSink, EngineEvent, JobSource};

enum EngineCommand {
    FetchJobs {
        radius_miles: f64,
        limit: u32,
    },
    SubmitDecision {
        batch: BatchId,
        job_id: JobId,
        interested: bool,
    },
    ScheduleExit {
        batch: BatchId,
        job_id: JobId,
        delay: Duration,
    },
}

struct Services {
    source: Arc<dyn JobSource>,
    sink: Arc<dyn DecisionSink>,
}

/// Runs job fetches, decision submissions and exit timers on a background
/// tokio runtime. Results come back as [`EngineEvent`]s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    alive: CancellationToken,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn JobSource>, sink: Arc<dyn DecisionSink>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let alive = CancellationToken::new();
        let services = Arc::new(Services { source, sink });

        let token = alive.clone();
        thread::Builder::new()
            .name("match-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let services = services.clone();
                    let event_tx = event_tx.clone();
                    let token = token.clone();
                    runtime.spawn(async move {
                        handle_command(&services, command, event_tx, token).await;
                    });
                }
                // Sender dropped: let in-flight work finish without blocking forever.
                runtime.shutdown_timeout(Duration::from_secs(1));
            })?;

        Ok(Self {
            cmd_tx,
            event_rx,
            alive,
        })
    }

    pub fn fetch_jobs(&self, radius_miles: f64, limit: u32) {
        self.send(EngineCommand::FetchJobs {
            radius_miles,
            limit,
        });
    }

    pub fn submit_decision(&self, batch: BatchId, job_id: JobId, interested: bool) {
        self.send(EngineCommand::SubmitDecision {
            batch,
            job_id,
            interested,
        });
    }

    pub fn schedule_exit(&self, batch: BatchId, job_id: JobId, delay: Duration) {
        self.send(EngineCommand::ScheduleExit {
            batch,
            job_id,
            delay,
        });
    }

    /// The owning view is gone: pending exit timers will never report.
    pub fn detach(&self) {
        self.alive.cancel();
    }

    pub fn is_detached(&self) -> bool {
        self.alive.is_cancelled()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            match_warn!("Engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    services: &Services,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    alive: CancellationToken,
) {
    let event = match command {
        EngineCommand::FetchJobs {
            radius_miles,
            limit,
        } => {
            let result = services.source.get_jobs(radius_miles, limit).await;
            EngineEvent::JobsFetched(result)
        }
        EngineCommand::SubmitDecision {
            batch,
            job_id,
            interested,
        } => {
            let result = services.sink.submit_decision(&job_id, interested).await;
            EngineEvent::DecisionSettled {
                batch,
                job_id,
                result,
            }
        }
        EngineCommand::ScheduleExit {
            batch,
            job_id,
            delay,
        } => {
            tokio::select! {
                _ = alive.cancelled() => {
                    match_debug!("Exit timer for job {} dropped after detach", job_id);
                    return;
                }
                _ = tokio::time::sleep(delay) => EngineEvent::ExitElapsed { batch, job_id },
            }
        }
    };
    let _ = event_tx.send(event);
}
