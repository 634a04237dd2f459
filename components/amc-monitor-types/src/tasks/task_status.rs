use crate::tasks::TaskError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Status of the maintenance task.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// Returns the string representation of the status used in the database and in the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Indicates whether the status should never be overwritten by the overdue sweep.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Overdue)
    }

    /// Indicates whether a task with this status can transition to `Overdue`.
    pub fn can_become_overdue(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            unknown => Err(TaskError::UnknownStatus(unknown.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStatus;
    use insta::assert_json_snapshot;

    #[test]
    fn properly_determines_terminal_statuses() {
        assert!(!TaskStatus::Pending.is_terminal());
        assert!(!TaskStatus::InProgress.is_terminal());
        assert!(TaskStatus::Completed.is_terminal());
        assert!(TaskStatus::Overdue.is_terminal());

        assert!(TaskStatus::Pending.can_become_overdue());
        assert!(TaskStatus::InProgress.can_become_overdue());
        assert!(!TaskStatus::Completed.can_become_overdue());
        assert!(!TaskStatus::Overdue.can_become_overdue());
    }

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(TaskStatus::InProgress, @r###""in_progress""###);
        assert_json_snapshot!(TaskStatus::Overdue, @r###""overdue""###);
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);

        Ok(())
    }

    #[test]
    fn parses_from_string() -> anyhow::Result<()> {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Overdue,
        ] {
            assert_eq!(status.as_str().parse::<TaskStatus>()?, status);
            assert_eq!(
                serde_json::from_str::<TaskStatus>(&format!("\"{status}\""))?,
                status
            );
        }

        assert_eq!(
            "done".parse::<TaskStatus>().unwrap_err().to_string(),
            "Unknown task status: done"
        );

        Ok(())
    }
}
