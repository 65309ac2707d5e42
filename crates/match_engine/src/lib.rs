//! Volunteer-match engine: job source and decision sink clients, timers,
//! configuration and preference persistence.
mod client;
mod config;
mod engine;
mod mock;
mod persist;
mod preferences;
mod types;

pub use client::{ClientSettings, DecisionSink, JobSource, ReqwestMatchingClient};
pub use config::{ConfigError, EngineConfig};
pub use engine::EngineHandle;
pub use mock::{mock_jobs, FallbackJobSource, MockMatchingClient};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use preferences::{
    load_or_default, MemoryPreferenceStore, PreferenceStore, RonPreferenceStore,
    PREFERENCES_FILENAME,
};
pub use types::{ClientError, ClientFailure, DecisionReceipt, EngineEvent};
