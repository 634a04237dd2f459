use amc_monitor_types::tasks::{Task, TaskPriority, TaskStatus};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Builds a set of demo maintenance tasks relative to `now`: two of them are past due and should
/// be picked up by the next overdue sweep, the rest should be left intact.
pub fn demo_tasks(now: OffsetDateTime, owner: Uuid) -> Vec<Task> {
    let task = |title: &str, due_in: Duration, status: TaskStatus, priority: TaskPriority| {
        let created_at = now - Duration::days(14);
        Task {
            id: Uuid::now_v7(),
            title: title.to_string(),
            description: None,
            due_date: now + due_in,
            status: TaskStatus::Pending,
            priority,
            assigned_to: owner,
            created_by: owner,
            completed_at: None,
            created_at,
            updated_at: created_at,
        }
        .with_status(status, now + due_in - Duration::hours(2))
    };

    vec![
        task(
            "Quarterly generator inspection",
            -Duration::days(1),
            TaskStatus::Pending,
            TaskPriority::High,
        ),
        task(
            "Renew fire suppression service contract",
            -Duration::days(7),
            TaskStatus::InProgress,
            TaskPriority::Medium,
        ),
        task(
            "Replace HVAC filters",
            -Duration::days(1),
            TaskStatus::Completed,
            TaskPriority::Low,
        ),
        task(
            "Elevator safety certification",
            Duration::days(1),
            TaskStatus::Pending,
            TaskPriority::High,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::demo_tasks;
    use amc_monitor_types::tasks::TaskStatus;
    use time::macros::datetime;
    use uuid::uuid;

    #[test]
    fn builds_demo_tasks() -> anyhow::Result<()> {
        let now = datetime!(2000-01-10 00:00 UTC);
        let owner = uuid!("00000000-0000-0000-0000-000000000001");
        let tasks = demo_tasks(now, owner);

        assert_eq!(tasks.len(), 4);
        for task in &tasks {
            task.validate()?;
            assert_eq!(task.assigned_to, owner);
            assert_eq!(task.created_by, owner);
        }

        let overdue_titles = tasks
            .iter()
            .filter(|task| task.is_overdue_at(now))
            .map(|task| task.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            overdue_titles,
            vec![
                "Quarterly generator inspection",
                "Renew fire suppression service contract"
            ]
        );

        let completed = &tasks[2];
        assert_eq!(completed.status, TaskStatus::Completed);
        assert_eq!(completed.completed_at, Some(datetime!(2000-01-08 22:00 UTC)));

        Ok(())
    }
}
