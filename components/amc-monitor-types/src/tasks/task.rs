use crate::tasks::{TaskError, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Maintenance task tracked by the portal.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task id (UUIDv7).
    pub id: Uuid,
    /// Short, non-empty title of the task.
    pub title: String,
    /// Optional free-form description of the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Date and time when the task is due.
    #[serde(with = "time::serde::timestamp")]
    pub due_date: OffsetDateTime,
    /// Current status of the task.
    pub status: TaskStatus,
    /// Priority of the task.
    pub priority: TaskPriority,
    /// ID of the user the task is assigned to.
    pub assigned_to: Uuid,
    /// ID of the user that created the task.
    pub created_by: Uuid,
    /// Date and time when the task was completed, set only on transition into `Completed`.
    #[serde(
        with = "time::serde::timestamp::option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub completed_at: Option<OffsetDateTime>,
    /// Date and time when the task was created.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    /// Date and time when the task was last updated.
    #[serde(with = "time::serde::timestamp")]
    pub updated_at: OffsetDateTime,
}

impl Task {
    /// Checks that the task can be persisted.
    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        Ok(())
    }

    /// Indicates whether the task is past its due date at `now` and can still be marked as
    /// overdue. A task due exactly at `now` isn't overdue yet.
    pub fn is_overdue_at(&self, now: OffsetDateTime) -> bool {
        self.due_date < now && self.status.can_become_overdue()
    }

    /// Transitions task to the specified status. `completed_at` is set only when the task enters
    /// `Completed`, and `updated_at` is refreshed only if the status actually changes.
    pub fn with_status(self, status: TaskStatus, now: OffsetDateTime) -> Self {
        if self.status == status {
            return self;
        }

        Self {
            completed_at: if status == TaskStatus::Completed {
                Some(now)
            } else {
                self.completed_at
            },
            status,
            updated_at: now,
            ..self
        }
    }
}
