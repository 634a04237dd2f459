mod cron_trigger_source;
mod overdue_sweep;
mod overdue_sweep_job;
mod overdue_sweep_state;
mod sweep_report;
mod trigger_source;

pub use self::{
    cron_trigger_source::CronTriggerSource,
    overdue_sweep::OverdueSweep,
    overdue_sweep_job::OverdueSweepJob,
    overdue_sweep_state::OverdueSweepState,
    sweep_report::{SweepFailure, SweepReport},
    trigger_source::{TickCallback, TriggerSource},
};

#[cfg(test)]
pub mod tests {
    use crate::scheduler::{TickCallback, TriggerSource};
    use anyhow::bail;
    use async_trait::async_trait;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };
    use time::OffsetDateTime;

    #[derive(Default)]
    struct MockTriggerSourceState {
        callback: Mutex<Option<TickCallback>>,
        next_tick: Option<OffsetDateTime>,
        cancellations: AtomicUsize,
    }

    /// Trigger source that ticks only when asked to. Clones share the same state.
    #[derive(Clone, Default)]
    pub struct MockTriggerSource {
        state: Arc<MockTriggerSourceState>,
    }

    impl MockTriggerSource {
        pub fn with_next_tick(next_tick: OffsetDateTime) -> Self {
            Self {
                state: Arc::new(MockTriggerSourceState {
                    next_tick: Some(next_tick),
                    ..Default::default()
                }),
            }
        }

        /// Invokes the registered callback, if any, and waits for it to complete.
        pub async fn tick(&self) {
            let callback = self.state.callback.lock().unwrap().clone();
            if let Some(callback) = callback {
                callback().await;
            }
        }

        /// Number of currently registered callbacks.
        pub fn registrations(&self) -> usize {
            usize::from(self.state.callback.lock().unwrap().is_some())
        }

        pub fn cancellations(&self) -> usize {
            self.state.cancellations.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TriggerSource for MockTriggerSource {
        async fn on_tick(&self, callback: TickCallback) -> anyhow::Result<()> {
            let mut registered_callback = self.state.callback.lock().unwrap();
            if registered_callback.is_some() {
                bail!("Callback is already registered.");
            }

            *registered_callback = Some(callback);
            Ok(())
        }

        async fn cancel(&self) -> anyhow::Result<()> {
            if self.state.callback.lock().unwrap().take().is_some() {
                self.state.cancellations.fetch_add(1, Ordering::SeqCst);
            }

            Ok(())
        }

        async fn next_tick(&self) -> anyhow::Result<Option<OffsetDateTime>> {
            Ok(self
                .state
                .callback
                .lock()
                .unwrap()
                .as_ref()
                .and(self.state.next_tick))
        }
    }
}
