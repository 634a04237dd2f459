mod task;
mod task_error;
mod task_priority;
mod task_status;

pub use self::{
    task::Task, task_error::TaskError, task_priority::TaskPriority, task_status::TaskStatus,
};

#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use crate::tasks::{Task, TaskPriority, TaskStatus};
    use time::OffsetDateTime;
    use uuid::Uuid;

    /// Builds tasks for tests, `Pending` with `Medium` priority by default.
    pub struct MockTaskBuilder {
        task: Task,
    }

    impl MockTaskBuilder {
        pub fn create(id: Uuid, title: &str, due_date: OffsetDateTime) -> Self {
            Self {
                task: Task {
                    id,
                    title: title.to_string(),
                    description: None,
                    due_date,
                    status: TaskStatus::Pending,
                    priority: TaskPriority::Medium,
                    assigned_to: Uuid::nil(),
                    created_by: Uuid::nil(),
                    completed_at: None,
                    created_at: due_date,
                    updated_at: due_date,
                },
            }
        }

        pub fn with_status(mut self, status: TaskStatus) -> Self {
            self.task.status = status;
            self
        }

        pub fn build(self) -> Task {
            self.task
        }
    }
}
