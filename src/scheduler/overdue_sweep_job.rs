use crate::{
    config::Config,
    database::Database,
    scheduler::{
        CronTriggerSource, OverdueSweep, OverdueSweepState, SweepReport, TickCallback,
        TriggerSource,
    },
    tasks::SystemClock,
};
use futures::FutureExt;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tracing::info;

/// The job periodically marks tasks that are past their due date as overdue. The job is created
/// stopped and must be explicitly started.
pub struct OverdueSweepJob {
    sweep: Arc<OverdueSweep>,
    trigger_source: Box<dyn TriggerSource>,
    /// Indicates whether the sweep is registered with the trigger source.
    is_scheduled: Mutex<bool>,
}

impl OverdueSweepJob {
    /// Creates a new stopped job.
    pub fn new(sweep: OverdueSweep, trigger_source: Box<dyn TriggerSource>) -> Self {
        Self {
            sweep: Arc::new(sweep),
            trigger_source,
            is_scheduled: Mutex::new(false),
        }
    }

    /// Creates a new stopped job that sweeps tasks stored in the database according to the
    /// configured schedule.
    pub fn create(config: &Config, database: Database) -> anyhow::Result<Self> {
        Ok(Self::new(
            OverdueSweep::new(
                Arc::new(database),
                Arc::new(SystemClock),
                config.tasks.overdue_sweep_concurrency,
            ),
            Box::new(CronTriggerSource::new(&config.scheduler.overdue_sweep)?),
        ))
    }

    /// Schedules the job. Does nothing if the job is already scheduled.
    pub async fn start(&self) -> anyhow::Result<()> {
        let mut is_scheduled = self.is_scheduled.lock().await;
        if *is_scheduled {
            return Ok(());
        }

        let sweep = self.sweep.clone();
        let on_tick: TickCallback = Arc::new(move || {
            let sweep = sweep.clone();
            async move { sweep.run_scheduled().await }.boxed()
        });
        self.trigger_source.on_tick(on_tick).await?;
        *is_scheduled = true;

        info!("Overdue sweep job started.");
        Ok(())
    }

    /// Cancels future ticks of the job, the in-flight cycle (if any) runs to completion. Does
    /// nothing if the job is already stopped.
    pub async fn stop(&self) -> anyhow::Result<()> {
        let mut is_scheduled = self.is_scheduled.lock().await;
        if !*is_scheduled {
            return Ok(());
        }

        self.trigger_source.cancel().await?;
        *is_scheduled = false;

        info!("Overdue sweep job stopped.");
        Ok(())
    }

    /// Waits for the in-flight cycle (if any) to finish. Used after `stop` to make sure no cycle is
    /// interrupted on shutdown.
    pub async fn wait_for_in_flight_cycle(&self) {
        if self.sweep.is_running() {
            info!("Waiting for the in-flight overdue sweep cycle to finish.");
        }

        self.sweep.wait_for_in_flight_cycle().await;
    }

    /// Runs a single sweep cycle right away, regardless of the job state.
    pub async fn run_once(&self) -> anyhow::Result<SweepReport> {
        info!("Manually triggering overdue tasks sweep.");
        self.sweep.run().await
    }

    /// Returns the current state of the job.
    pub async fn state(&self) -> OverdueSweepState {
        if !*self.is_scheduled.lock().await {
            OverdueSweepState::Stopped
        } else if self.sweep.is_running() {
            OverdueSweepState::Running
        } else {
            OverdueSweepState::Idle
        }
    }

    /// Returns the time left till the next scheduled cycle, if the job is scheduled.
    pub async fn time_till_next_tick(&self) -> anyhow::Result<Option<Duration>> {
        if !*self.is_scheduled.lock().await {
            return Ok(None);
        }

        let Some(next_tick) = self.trigger_source.next_tick().await? else {
            return Ok(None);
        };

        Ok(Duration::try_from(next_tick - self.sweep.clock.now()?).ok())
    }
}
