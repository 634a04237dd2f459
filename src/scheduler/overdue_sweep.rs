use crate::{
    scheduler::{SweepFailure, SweepReport},
    tasks::{Clock, TaskRepository},
};
use amc_monitor_types::tasks::TaskStatus;
use anyhow::Context;
use futures::{stream, StreamExt};
use std::{sync::Arc, time::Instant};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Promotes tasks that are past their due date to `Overdue`.
pub struct OverdueSweep {
    repository: Arc<dyn TaskRepository>,
    pub(super) clock: Arc<dyn Clock>,
    /// Maximum number of tasks updated concurrently within a cycle.
    concurrency: usize,
    /// Held for the whole duration of a cycle, cycles never overlap.
    pub(super) cycle_lock: Mutex<()>,
}

impl OverdueSweep {
    /// Creates a new sweep over the specified repository and clock.
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        clock: Arc<dyn Clock>,
        concurrency: usize,
    ) -> Self {
        Self {
            repository,
            clock,
            concurrency: concurrency.max(1),
            cycle_lock: Mutex::new(()),
        }
    }

    /// Indicates whether a sweep cycle is currently in progress.
    pub fn is_running(&self) -> bool {
        self.cycle_lock.try_lock().is_err()
    }

    /// Waits for the in-flight cycle to finish, returns right away if there is none.
    pub async fn wait_for_in_flight_cycle(&self) {
        let _cycle = self.cycle_lock.lock().await;
    }

    /// Runs a sweep cycle, waiting for the in-flight cycle to finish first, if any.
    pub async fn run(&self) -> anyhow::Result<SweepReport> {
        let _cycle = self.cycle_lock.lock().await;
        self.sweep().await
    }

    /// Runs a sweep cycle on a scheduled tick. The tick is skipped if the previous cycle is still
    /// in progress. Errors are logged and never propagated to the trigger source.
    pub async fn run_scheduled(&self) {
        let Ok(_cycle) = self.cycle_lock.try_lock() else {
            warn!("Previous overdue sweep cycle is still in progress, skipping tick.");
            return;
        };

        let execute_start = Instant::now();
        if let Err(err) = self.sweep().await {
            error!(
                "Failed to sweep overdue tasks ({} elapsed): {err:?}",
                humantime::format_duration(execute_start.elapsed())
            );
        }
    }

    async fn sweep(&self) -> anyhow::Result<SweepReport> {
        let execute_start = Instant::now();
        let now = self.clock.now()?;
        let candidates = self
            .repository
            .find_overdue(now)
            .await
            .context("Failed to retrieve overdue tasks.")?;
        if candidates.is_empty() {
            info!("No overdue tasks found.");
            return Ok(SweepReport::default());
        }

        info!("Found {} overdue tasks.", candidates.len());

        let mut report = SweepReport {
            candidates: candidates.len(),
            ..Default::default()
        };

        // Every task is updated on its own, a failed update never affects the rest.
        let results = stream::iter(candidates)
            .map(|task| async move {
                let result = self.repository.mark_overdue(&task, now).await;
                (task.id, result)
            })
            .buffer_unordered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        for (task_id, result) in results {
            match result {
                Ok(task) if task.status == TaskStatus::Overdue && task.updated_at == now => {
                    report.transitioned.push(task_id);
                }
                Ok(task) => {
                    info!(
                        task.id = %task_id,
                        task.status = %task.status,
                        "Task changed concurrently, leaving it intact."
                    );
                    report.unchanged.push(task_id);
                }
                Err(err) => {
                    error!(task.id = %task_id, "Failed to mark task as overdue: {err:?}");
                    report.failed.push(SweepFailure {
                        task_id,
                        error: format!("{err:#}"),
                    });
                }
            }
        }

        report.transitioned.sort();
        report.unchanged.sort();
        report.failed.sort_by_key(|failure| failure.task_id);

        info!(
            "Marked {} tasks as overdue ({} elapsed).",
            report.transitioned.len(),
            humantime::format_duration(execute_start.elapsed())
        );
        if !report.failed.is_empty() {
            warn!(
                "Failed to mark {} tasks as overdue, they will be retried during the next cycle.",
                report.failed.len()
            );
        }

        Ok(report)
    }
}
