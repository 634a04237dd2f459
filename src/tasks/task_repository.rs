use crate::database::Database;
use amc_monitor_types::tasks::Task;
use async_trait::async_trait;
use time::OffsetDateTime;

/// Store operations the overdue sweep relies on.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task with due date strictly before `now` that is neither completed nor
    /// overdue yet. The order of the returned tasks is unspecified.
    async fn find_overdue(&self, now: OffsetDateTime) -> anyhow::Result<Vec<Task>>;

    /// Marks the task as overdue and refreshes its `updated_at`. If the stored task is already
    /// completed or overdue, nothing is written and the stored task is returned unchanged.
    async fn mark_overdue(&self, task: &Task, now: OffsetDateTime) -> anyhow::Result<Task>;
}

#[async_trait]
impl TaskRepository for Database {
    async fn find_overdue(&self, now: OffsetDateTime) -> anyhow::Result<Vec<Task>> {
        self.get_overdue_tasks(now).await
    }

    async fn mark_overdue(&self, task: &Task, now: OffsetDateTime) -> anyhow::Result<Task> {
        self.mark_task_overdue(task.id, now).await
    }
}
