//! Periodic carousel advancement.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, trace};

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(4000);

/// Shortest accepted autoplay period.
pub const MIN_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(250);

/// One autoplay timer expiry.
///
/// `generation` identifies the mount that started the timer, so a tick still
/// queued after its timer was cancelled can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTick {
    /// Mount generation of the timer that fired.
    pub generation: u64,
}

/// Running autoplay timer. The timer task is aborted when this is dropped.
#[derive(Debug)]
pub struct Autoplay {
    generation: u64,
    period: Duration,
    handle: JoinHandle<()>,
}

impl Autoplay {
    /// Spawns a timer that sends an [`AutoplayTick`] into `tx` every `period`.
    ///
    /// The first tick fires one full period after the call. The timer keeps
    /// its own cadence: manual navigation in between does not reset it.
    /// Periods shorter than [`MIN_AUTOPLAY_INTERVAL`] are raised to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<M>(period: Duration, generation: u64, tx: mpsc::UnboundedSender<M>) -> Self
    where
        M: From<AutoplayTick> + Send + 'static,
    {
        let period = period.max(MIN_AUTOPLAY_INTERVAL);

        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                trace!(generation, "Autoplay tick");
                if tx.send(AutoplayTick { generation }.into()).is_err() {
                    debug!(generation, "Autoplay receiver closed");
                    break;
                }
            }
        });

        debug!(generation, period_ms = period.as_millis(), "Autoplay started");

        Self {
            generation,
            period,
            handle,
        }
    }

    /// Mount generation this timer reports.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Effective period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(generation = self.generation, "Autoplay stopped");
    }
}
