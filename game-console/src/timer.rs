use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// A fired countdown step, stamped with the generation it was scheduled
/// under. Ticks whose generation no longer matches the timer are stale and
/// must be dropped on receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub generation: u64,
}

/// One-shot countdown scheduler. At most one tick task is ever pending:
/// scheduling aborts the previous task and bumps the generation, so a task
/// that slips through the abort is rejected by the generation check instead.
/// Dropping the timer aborts whatever is in flight.
pub struct TurnTimer {
    interval: Duration,
    generation: u64,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<TimerTick>,
}

impl TurnTimer {
    pub fn new(interval: Duration) -> (Self, mpsc::UnboundedReceiver<TimerTick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                interval,
                generation: 0,
                task: None,
                tx,
            },
            rx,
        )
    }

    /// Schedules the next tick, cancelling any pending one.
    pub fn schedule(&mut self) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let interval = self.interval;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            // receiver gone means the app is shutting down
            let _ = tx.send(TimerTick { generation });
        }));
    }

    /// Stops the countdown. Any tick already in the channel is invalidated
    /// by the generation bump.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Cancelled pending timer tick (generation {})", self.generation);
        }
        self.generation += 1;
    }

    /// Whether a received tick was scheduled by the latest `schedule` call.
    pub fn is_current(&self, tick: TimerTick) -> bool {
        self.task.is_some() && tick.generation == self.generation
    }
}

impl Drop for TurnTimer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: Duration = Duration::from_millis(5);

    #[tokio::test]
    async fn test_scheduled_tick_fires_with_current_generation() {
        let (mut timer, mut rx) = TurnTimer::new(FAST);
        timer.schedule();

        let tick = rx.recv().await.unwrap();
        assert!(timer.is_current(tick));
    }

    #[tokio::test]
    async fn test_rescheduling_invalidates_the_previous_generation() {
        let (mut timer, mut rx) = TurnTimer::new(FAST);
        timer.schedule();
        let first = rx.recv().await.unwrap();
        assert!(timer.is_current(first));

        timer.schedule();
        assert!(!timer.is_current(first));

        let second = rx.recv().await.unwrap();
        assert!(timer.is_current(second));
    }

    #[tokio::test]
    async fn test_cancelled_timer_never_delivers_a_live_tick() {
        let (mut timer, mut rx) = TurnTimer::new(FAST);
        timer.schedule();
        timer.cancel();

        // even if the abort raced the sleep, the tick must be stale
        tokio::time::sleep(FAST * 4).await;
        if let Ok(tick) = rx.try_recv() {
            assert!(!timer.is_current(tick));
        }
    }

    #[tokio::test]
    async fn test_only_one_tick_is_pending_at_a_time() {
        let (mut timer, mut rx) = TurnTimer::new(FAST);
        timer.schedule();
        timer.schedule();
        timer.schedule();

        let tick = rx.recv().await.unwrap();
        assert!(timer.is_current(tick));

        // the superseded tasks were aborted; nothing else arrives
        tokio::time::sleep(FAST * 4).await;
        while let Ok(stale) = rx.try_recv() {
            assert!(!timer.is_current(stale));
        }
    }
}
