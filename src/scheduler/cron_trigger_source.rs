use crate::scheduler::{TickCallback, TriggerSource};
use anyhow::{anyhow, bail};
use async_trait::async_trait;
use croner::Cron;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::debug;
use uuid::Uuid;

/// Scheduler and job created for the registered callback.
struct CronRegistration {
    scheduler: JobScheduler,
    job_id: Uuid,
}

/// Trigger source that ticks according to a cron schedule (with seconds, in UTC).
pub struct CronTriggerSource {
    schedule: String,
    registration: Mutex<Option<CronRegistration>>,
}

impl CronTriggerSource {
    /// Creates a trigger source for the specified cron schedule.
    pub fn new(schedule: &str) -> anyhow::Result<Self> {
        Cron::new(schedule)
            .with_seconds_required()
            .parse()
            .map_err(|err| anyhow!("Cannot parse cron schedule `{schedule}`: {err:?}"))?;

        Ok(Self {
            schedule: schedule.to_string(),
            registration: Mutex::new(None),
        })
    }
}

#[async_trait]
impl TriggerSource for CronTriggerSource {
    async fn on_tick(&self, callback: TickCallback) -> anyhow::Result<()> {
        let mut registration = self.registration.lock().await;
        if registration.is_some() {
            bail!("Cron trigger (`{}`) already has a callback.", self.schedule);
        }

        let scheduler = JobScheduler::new().await?;
        let job_id = scheduler
            .add(Job::new_async(self.schedule.as_str(), move |_, _| {
                callback()
            })?)
            .await?;
        scheduler.start().await?;

        debug!(job.id = %job_id, "Registered cron trigger (`{}`).", self.schedule);
        *registration = Some(CronRegistration { scheduler, job_id });

        Ok(())
    }

    async fn cancel(&self) -> anyhow::Result<()> {
        let Some(CronRegistration {
            mut scheduler,
            job_id,
        }) = self.registration.lock().await.take()
        else {
            return Ok(());
        };

        scheduler.remove(&job_id).await?;
        scheduler.shutdown().await?;
        debug!(job.id = %job_id, "Cancelled cron trigger (`{}`).", self.schedule);

        Ok(())
    }

    async fn next_tick(&self) -> anyhow::Result<Option<OffsetDateTime>> {
        let mut registration = self.registration.lock().await;
        let Some(CronRegistration { scheduler, job_id }) = registration.as_mut() else {
            return Ok(None);
        };

        Ok(scheduler
            .next_tick_for_job(*job_id)
            .await?
            .map(|next_tick| OffsetDateTime::from_unix_timestamp(next_tick.timestamp()))
            .transpose()?)
    }
}
