use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use match_core::{Job, JobId, JobStatus};
use match_logging::match_warn;

use crate::{ClientError, DecisionReceipt, DecisionSink, JobSource};

/// In-memory matching backend for development without a server.
#[derive(Debug, Clone)]
pub struct MockMatchingClient {
    jobs: Vec<Job>,
    fetch_latency: Duration,
    decision_latency: Duration,
}

impl MockMatchingClient {
    /// Built-in jobs with latency that resembles a real backend.
    pub fn new() -> Self {
        Self {
            jobs: mock_jobs(Utc::now()),
            fetch_latency: Duration::from_millis(500),
            decision_latency: Duration::from_millis(300),
        }
    }

    /// Built-in jobs, answered immediately.
    pub fn instant() -> Self {
        Self::new().with_latency(Duration::ZERO, Duration::ZERO)
    }

    pub fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_latency(mut self, fetch: Duration, decision: Duration) -> Self {
        self.fetch_latency = fetch;
        self.decision_latency = decision;
        self
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

impl Default for MockMatchingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl JobSource for MockMatchingClient {
    async fn get_jobs(&self, _radius_miles: f64, limit: u32) -> Result<Vec<Job>, ClientError> {
        if !self.fetch_latency.is_zero() {
            tokio::time::sleep(self.fetch_latency).await;
        }
        Ok(self.jobs.iter().take(limit as usize).cloned().collect())
    }
}

#[async_trait::async_trait]
impl DecisionSink for MockMatchingClient {
    async fn submit_decision(
        &self,
        _job_id: &JobId,
        interested: bool,
    ) -> Result<DecisionReceipt, ClientError> {
        if !self.decision_latency.is_zero() {
            tokio::time::sleep(self.decision_latency).await;
        }
        let status = if interested {
            "You expressed interest"
        } else {
            "You passed"
        };
        Ok(DecisionReceipt {
            status: status.to_string(),
            created: true,
        })
    }
}

/// Serves a fixed fallback batch whenever the wrapped source fails.
pub struct FallbackJobSource<S> {
    inner: S,
    fallback: Vec<Job>,
}

impl<S: JobSource> FallbackJobSource<S> {
    pub fn new(inner: S, fallback: Vec<Job>) -> Self {
        Self { inner, fallback }
    }
}

#[async_trait::async_trait]
impl<S: JobSource> JobSource for FallbackJobSource<S> {
    async fn get_jobs(&self, radius_miles: f64, limit: u32) -> Result<Vec<Job>, ClientError> {
        match self.inner.get_jobs(radius_miles, limit).await {
            Ok(jobs) => Ok(jobs),
            Err(err) => {
                match_warn!("Failed to fetch jobs, using fallback batch: {}", err);
                Ok(self.fallback.clone())
            }
        }
    }
}

struct Seed {
    id: &'static str,
    title: &'static str,
    short_description: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    starts_in_hours: i64,
    length_hours: i64,
    is_urgent: bool,
    distance: f64,
    score: f64,
    poster: &'static str,
}

const SEEDS: [Seed; 5] = [
    Seed {
        id: "1",
        title: "Food Bank Volunteer",
        short_description: "Help sort and distribute food to families in need.",
        description: "Join our team at the Community Food Bank to help sort donations and prepare food packages for distribution. No experience required - just a willingness to help!",
        tags: &["Organization", "Teamwork", "Physical Activity"],
        starts_in_hours: 2,
        length_hours: 3,
        is_urgent: true,
        distance: 1.2,
        score: 85.0,
        poster: "foodbank_admin",
    },
    Seed {
        id: "2",
        title: "Animal Shelter Helper",
        short_description: "Spend time with shelter animals - walking dogs and socializing cats.",
        description: "Help our furry friends at Happy Paws Shelter! Walk dogs, play with cats, and help with feeding. Must love animals and be comfortable around them.",
        tags: &["Animal Care", "Patience", "Compassion"],
        starts_in_hours: 5,
        length_hours: 3,
        is_urgent: true,
        distance: 2.5,
        score: 78.0,
        poster: "happypaws",
    },
    Seed {
        id: "3",
        title: "Youth Tutor",
        short_description: "Help middle school students with homework and study skills.",
        description: "Volunteer as a tutor at the Youth Education Center. Help students with math, reading, and science. Background check required.",
        tags: &["Teaching", "Patience", "Communication", "Math"],
        starts_in_hours: 48,
        length_hours: 2,
        is_urgent: false,
        distance: 3.8,
        score: 72.0,
        poster: "youth_center",
    },
    Seed {
        id: "4",
        title: "Beach Cleanup",
        short_description: "Join us for a morning beach cleanup event.",
        description: "Help keep our beaches clean! We provide all supplies including gloves and bags. Great way to help the environment and meet fellow volunteers.",
        tags: &["Environmental", "Physical Activity", "Teamwork"],
        starts_in_hours: 1,
        length_hours: 2,
        is_urgent: true,
        distance: 0.8,
        score: 90.0,
        poster: "ocean_conservation",
    },
    Seed {
        id: "5",
        title: "Senior Center Companion",
        short_description: "Visit with elderly residents, play games, or simply chat.",
        description: "Brighten the day of seniors at Golden Years Center. Play board games, read together, or just have a friendly conversation. Your presence makes a difference!",
        tags: &["Empathy", "Communication", "Patience"],
        starts_in_hours: 20,
        length_hours: 2,
        is_urgent: true,
        distance: 1.5,
        score: 82.0,
        poster: "golden_years",
    },
];

/// The built-in development batch, with shifts relative to `now`.
pub fn mock_jobs(now: DateTime<Utc>) -> Vec<Job> {
    SEEDS
        .iter()
        .map(|seed| {
            let shift_start = now + chrono::Duration::hours(seed.starts_in_hours);
            Job {
                id: JobId::new(seed.id),
                title: seed.title.to_string(),
                short_description: seed.short_description.to_string(),
                description: seed.description.to_string(),
                skill_tags: seed.tags.iter().map(|tag| tag.to_string()).collect::<BTreeSet<_>>(),
                location_label: None,
                distance: Some(seed.distance),
                shift_start,
                shift_end: shift_start + chrono::Duration::hours(seed.length_hours),
                is_urgent: seed.is_urgent,
                score: seed.score,
                poster_username: seed.poster.to_string(),
                status: JobStatus::Open,
            }
        })
        .collect()
}
