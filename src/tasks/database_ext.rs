mod raw_task;

use crate::{database::Database, tasks::database_ext::raw_task::RawTask};
use amc_monitor_types::tasks::Task;
use anyhow::bail;
use sqlx::{query, query_as};
use time::OffsetDateTime;
use uuid::Uuid;

/// Extends primary database with the tasks-related methods.
impl Database {
    /// Retrieves task from the database using ID.
    pub async fn get_task(&self, id: Uuid) -> anyhow::Result<Option<Task>> {
        query_as::<_, RawTask>(r#"SELECT * FROM tasks WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    /// Inserts a new task to the database.
    pub async fn insert_task(&self, task: &Task) -> anyhow::Result<()> {
        task.validate()?;

        let raw_task = RawTask::from(task);
        query(
            r#"
INSERT INTO tasks (id, title, description, due_date, status, priority, assigned_to, created_by, completed_at, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(raw_task.id)
        .bind(raw_task.title)
        .bind(raw_task.description)
        .bind(raw_task.due_date)
        .bind(raw_task.status)
        .bind(raw_task.priority)
        .bind(raw_task.assigned_to)
        .bind(raw_task.created_by)
        .bind(raw_task.completed_at)
        .bind(raw_task.created_at)
        .bind(raw_task.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves all tasks that are due strictly before the specified date and can still be
    /// marked as overdue.
    pub async fn get_overdue_tasks(&self, due_before: OffsetDateTime) -> anyhow::Result<Vec<Task>> {
        query_as::<_, RawTask>(
            r#"SELECT * FROM tasks WHERE due_date < $1 AND status NOT IN ('completed', 'overdue')"#,
        )
        .bind(due_before)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Task::try_from)
        .collect()
    }

    /// Marks task as overdue if it's still pending or in progress. Otherwise, the task is left
    /// intact and its current state is returned.
    pub async fn mark_task_overdue(&self, id: Uuid, now: OffsetDateTime) -> anyhow::Result<Task> {
        let updated_task = query_as::<_, RawTask>(
            r#"
UPDATE tasks SET status = 'overdue', updated_at = $2
WHERE id = $1 AND status IN ('pending', 'in_progress')
RETURNING *
            "#,
        )
        .bind(id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(raw_task) = updated_task {
            return Task::try_from(raw_task);
        }

        match self.get_task(id).await? {
            Some(task) => Ok(task),
            None => bail!("Task ({id}) doesn't exist."),
        }
    }
}
