use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a single overdue sweep cycle.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SweepReport {
    /// Number of tasks found past their due date.
    pub candidates: usize,
    /// IDs of the tasks that were marked as overdue.
    pub transitioned: Vec<Uuid>,
    /// IDs of the tasks that changed concurrently (e.g. were completed) and were left intact.
    pub unchanged: Vec<Uuid>,
    /// Tasks that couldn't be updated, they will be picked up by the next cycle.
    pub failed: Vec<SweepFailure>,
}

/// Task that couldn't be marked as overdue.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SweepFailure {
    /// ID of the task that was left in its previous state.
    pub task_id: Uuid,
    /// Description of the error, including its causes.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::{SweepFailure, SweepReport};
    use insta::assert_json_snapshot;
    use uuid::uuid;

    #[test]
    fn serialization() -> anyhow::Result<()> {
        assert_json_snapshot!(SweepReport::default(), @r###"
        {
          "candidates": 0,
          "transitioned": [],
          "unchanged": [],
          "failed": []
        }
        "###);

        assert_json_snapshot!(SweepReport {
            candidates: 3,
            transitioned: vec![uuid!("00000000-0000-0000-0000-000000000001")],
            unchanged: vec![uuid!("00000000-0000-0000-0000-000000000002")],
            failed: vec![SweepFailure {
                task_id: uuid!("00000000-0000-0000-0000-000000000003"),
                error: "Store is unreachable.".to_string(),
            }],
        }, @r###"
        {
          "candidates": 3,
          "transitioned": [
            "00000000-0000-0000-0000-000000000001"
          ],
          "unchanged": [
            "00000000-0000-0000-0000-000000000002"
          ],
          "failed": [
            {
              "taskId": "00000000-0000-0000-0000-000000000003",
              "error": "Store is unreachable."
            }
          ]
        }
        "###);

        Ok(())
    }
}
