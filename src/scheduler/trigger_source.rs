use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;
use time::OffsetDateTime;

/// Callback invoked on every tick of the trigger source.
pub type TickCallback = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Source of recurring ticks that drive a scheduled job.
#[async_trait]
pub trait TriggerSource: Send + Sync {
    /// Registers a callback to be invoked on every tick. Only one callback can be registered at a
    /// time.
    async fn on_tick(&self, callback: TickCallback) -> anyhow::Result<()>;

    /// Cancels registered callback, if any. In-flight callbacks aren't interrupted.
    async fn cancel(&self) -> anyhow::Result<()>;

    /// Returns the time of the next tick, if a callback is registered.
    async fn next_tick(&self) -> anyhow::Result<Option<OffsetDateTime>>;
}
