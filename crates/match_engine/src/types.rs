use std::fmt;

use match_core::{BatchId, Job, JobId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The decision sink's acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionReceipt {
    pub status: String,
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    JobsFetched(Result<Vec<Job>, ClientError>),
    DecisionSettled {
        batch: BatchId,
        job_id: JobId,
        result: Result<DecisionReceipt, ClientError>,
    },
    ExitElapsed {
        batch: BatchId,
        job_id: JobId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: ClientFailure,
    pub message: String,
}

impl ClientError {
    pub fn new(kind: ClientFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFailure {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for ClientFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientFailure::InvalidUrl => write!(f, "invalid url"),
            ClientFailure::HttpStatus(code) => write!(f, "http status {code}"),
            ClientFailure::Timeout => write!(f, "timeout"),
            ClientFailure::Decode => write!(f, "undecodable response"),
            ClientFailure::Network => write!(f, "network error"),
        }
    }
}
