use std::time::Duration;

use match_core::{Job, JobId};
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use url::Url;

use crate::{ClientError, ClientFailure, DecisionReceipt};

/// Supplies ranked candidate jobs. Ranking happens upstream.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    async fn get_jobs(&self, radius_miles: f64, limit: u32) -> Result<Vec<Job>, ClientError>;
}

/// Records one binary decision per job.
#[async_trait::async_trait]
pub trait DecisionSink: Send + Sync {
    async fn submit_decision(
        &self,
        job_id: &JobId,
        interested: bool,
    ) -> Result<DecisionReceipt, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub api_token: Option<String>,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            api_token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize)]
struct InterestPayload<'a> {
    job_id: &'a JobId,
    interested: bool,
}

/// HTTP job source and decision sink for the matching API.
#[derive(Debug, Clone)]
pub struct ReqwestMatchingClient {
    base: Url,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl ReqwestMatchingClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let mut base = Url::parse(settings.base_url.trim())
            .map_err(|err| ClientError::new(ClientFailure::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::new(
                ClientFailure::InvalidUrl,
                format!("{} cannot be a base url", settings.base_url),
            ));
        }
        // Relative joins replace the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::new(ClientFailure::Network, err.to_string()))?;

        Ok(Self {
            base,
            api_token: settings.api_token,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path)
            .map_err(|err| ClientError::new(ClientFailure::InvalidUrl, err.to_string()))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }
}

#[async_trait::async_trait]
impl JobSource for ReqwestMatchingClient {
    async fn get_jobs(&self, radius_miles: f64, limit: u32) -> Result<Vec<Job>, ClientError> {
        let mut url = self.endpoint("matching/jobs")?;
        url.query_pairs_mut()
            .append_pair("radius", &radius_miles.to_string())
            .append_pair("limit", &limit.to_string());

        let response = self
            .authorize(self.client.get(url))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        response.json::<Vec<Job>>().await.map_err(map_reqwest_error)
    }
}

#[async_trait::async_trait]
impl DecisionSink for ReqwestMatchingClient {
    async fn submit_decision(
        &self,
        job_id: &JobId,
        interested: bool,
    ) -> Result<DecisionReceipt, ClientError> {
        let url = self.endpoint("matching/interest")?;
        let payload = InterestPayload { job_id, interested };

        let response = self
            .authorize(self.client.post(url))
            .json(&payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let response = ensure_success(response)?;
        response
            .json::<DecisionReceipt>()
            .await
            .map_err(map_reqwest_error)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::new(
            ClientFailure::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(ClientFailure::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ClientError::new(ClientFailure::Decode, err.to_string());
    }
    ClientError::new(ClientFailure::Network, err.to_string())
}
