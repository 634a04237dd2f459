use amc_monitor_types::tasks::Task;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone)]
pub(super) struct RawTask {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub due_date: OffsetDateTime,
    pub status: String,
    pub priority: String,
    pub assigned_to: Uuid,
    pub created_by: Uuid,
    pub completed_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl TryFrom<RawTask> for Task {
    type Error = anyhow::Error;

    fn try_from(raw_task: RawTask) -> Result<Self, Self::Error> {
        Ok(Task {
            id: raw_task.id,
            title: raw_task.title,
            description: raw_task.description,
            due_date: raw_task.due_date,
            status: raw_task.status.parse()?,
            priority: raw_task.priority.parse()?,
            assigned_to: raw_task.assigned_to,
            created_by: raw_task.created_by,
            completed_at: raw_task.completed_at,
            created_at: raw_task.created_at,
            updated_at: raw_task.updated_at,
        })
    }
}

impl From<&Task> for RawTask {
    fn from(task: &Task) -> Self {
        RawTask {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            status: task.status.as_str().to_string(),
            priority: task.priority.as_str().to_string(),
            assigned_to: task.assigned_to,
            created_by: task.created_by,
            completed_at: task.completed_at,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawTask;
    use amc_monitor_types::tasks::{Task, TaskPriority, TaskStatus};
    use insta::assert_debug_snapshot;
    use time::macros::datetime;
    use uuid::uuid;

    fn raw_task(status: &str, priority: &str) -> RawTask {
        RawTask {
            id: uuid!("00000000-0000-0000-0000-000000000001"),
            title: "Replace HVAC filters".to_string(),
            description: Some("Building B, floor 3".to_string()),
            due_date: datetime!(2000-01-01 10:00 UTC),
            status: status.to_string(),
            priority: priority.to_string(),
            assigned_to: uuid!("00000000-0000-0000-0000-000000000002"),
            created_by: uuid!("00000000-0000-0000-0000-000000000003"),
            completed_at: Some(datetime!(2000-01-01 09:00 UTC)),
            created_at: datetime!(1999-12-01 10:00 UTC),
            updated_at: datetime!(2000-01-01 09:00 UTC),
        }
    }

    #[test]
    fn can_convert_to_task() -> anyhow::Result<()> {
        assert_eq!(
            Task::try_from(raw_task("completed", "high"))?,
            Task {
                id: uuid!("00000000-0000-0000-0000-000000000001"),
                title: "Replace HVAC filters".to_string(),
                description: Some("Building B, floor 3".to_string()),
                due_date: datetime!(2000-01-01 10:00 UTC),
                status: TaskStatus::Completed,
                priority: TaskPriority::High,
                assigned_to: uuid!("00000000-0000-0000-0000-000000000002"),
                created_by: uuid!("00000000-0000-0000-0000-000000000003"),
                completed_at: Some(datetime!(2000-01-01 09:00 UTC)),
                created_at: datetime!(1999-12-01 10:00 UTC),
                updated_at: datetime!(2000-01-01 09:00 UTC),
            }
        );

        Ok(())
    }

    #[test]
    fn can_convert_to_raw_task() -> anyhow::Result<()> {
        let raw = raw_task("in_progress", "low");
        assert_eq!(RawTask::from(&Task::try_from(raw.clone())?), raw);

        Ok(())
    }

    #[test]
    fn fails_to_convert_unknown_values() {
        assert_debug_snapshot!(Task::try_from(raw_task("archived", "high")).map_err(|err| err.to_string()), @r###"
        Err(
            "Unknown task status: archived",
        )
        "###);
        assert_debug_snapshot!(Task::try_from(raw_task("pending", "urgent")).map_err(|err| err.to_string()), @r###"
        Err(
            "Unknown task priority: urgent",
        )
        "###);
    }
}
