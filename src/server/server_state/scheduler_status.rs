use crate::scheduler::OverdueSweepState;
use serde::Serialize;
use serde_with::{serde_as, skip_serializing_none, DurationMilliSeconds};
use std::time::Duration;
use utoipa::ToSchema;

/// Scheduler status.
#[serde_as]
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerStatus {
    /// State of the overdue sweep job.
    pub overdue_sweep: OverdueSweepState,
    /// Indicates when the next overdue sweep will run. If the job isn't scheduled, this field is
    /// `None`.
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    #[schema(value_type = Option<u64>)]
    pub time_till_next_sweep: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use crate::{scheduler::OverdueSweepState, server::SchedulerStatus};
    use insta::assert_json_snapshot;
    use std::time::Duration;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(SchedulerStatus {
            overdue_sweep: OverdueSweepState::Idle,
            time_till_next_sweep: Some(Duration::from_secs(10)),
        }, @r###"
        {
          "overdueSweep": "idle",
          "timeTillNextSweep": 10000
        }
        "###);

        assert_json_snapshot!(SchedulerStatus {
            overdue_sweep: OverdueSweepState::Stopped,
            time_till_next_sweep: None,
        }, @r###"
        {
          "overdueSweep": "stopped"
        }
        "###);

        Ok(())
    }
}
