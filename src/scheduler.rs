//! Recurring job scheduling.
//!
//! Each job runs on its own worker with its own timer and lifetime deadline.
//! The first invocation fires immediately; later ones on every tick. A slow
//! invocation delays the next tick but never skips it, and ticks are never
//! queued. Invocations of the same job never overlap. A failed invocation is
//! logged and escalated through the [`FailureReporter`]; nothing a job does
//! can take the scheduler loop down.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::error::{Error, Result};

/// A job's `(totalLifetime, tickInterval)` pair.
#[derive(Debug, Clone, Copy)]
pub struct JobCadence {
    pub lifetime: Duration,
    pub tick: Duration,
}

/// A recurring unit of work.
#[async_trait]
pub trait Job: Send + Sync {
    fn name(&self) -> &'static str;

    fn cadence(&self) -> JobCadence;

    /// One invocation. Responsible for its own recovery; errors returned here
    /// are reported and the loop continues.
    async fn run(&self) -> Result<()>;
}

/// Sink for failed job invocations.
#[async_trait]
pub trait FailureReporter: Send + Sync {
    async fn report(&self, job: &str, error: &Error);
}

/// Spawn one worker per job and wait for every lifetime to expire.
pub async fn run_jobs(jobs: Vec<Arc<dyn Job>>, reporter: Arc<dyn FailureReporter>) {
    let workers = jobs
        .into_iter()
        .map(|job| tokio::spawn(run_job(job, Arc::clone(&reporter))))
        .collect::<Vec<_>>();

    join_all(workers).await;
}

async fn run_job(job: Arc<dyn Job>, reporter: Arc<dyn FailureReporter>) {
    let cadence = job.cadence();
    let deadline = Instant::now() + cadence.lifetime;

    // The first tick completes immediately; Delay keeps a slow invocation
    // from bursting queued ticks afterwards.
    let mut ticker = interval(cadence.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let lifetime = sleep_until(deadline);
    tokio::pin!(lifetime);

    info!(job = job.name(), tick = ?cadence.tick, "job started");

    loop {
        tokio::select! {
            _ = &mut lifetime => {
                info!(job = job.name(), "job done");
                return;
            }
            _ = ticker.tick() => {
                if let Err(e) = job.run().await {
                    error!(job = job.name(), error = %e, "job invocation failed");
                    reporter.report(job.name(), &e).await;
                }
            }
        }
    }
}
