use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use quiz_core::model::TICK_INTERVAL;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// One second of the per-question countdown elapsed.
    Tick,
    /// The answer feedback delay elapsed.
    FeedbackElapsed,
}

/// Event emitted by a `QuizTimer` task.
///
/// `epoch` identifies the arming that produced it; events from an earlier
/// arming are stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub epoch: u64,
    pub kind: TimerKind,
}

pub type TimerEvents = mpsc::UnboundedReceiver<TimerEvent>;

/// Sending half shared by every timer of a session. Epochs are unique across it.
#[derive(Clone, Debug)]
pub struct TimerSink {
    events: mpsc::UnboundedSender<TimerEvent>,
    epochs: Arc<AtomicU64>,
}

impl TimerSink {
    fn next_epoch(&self) -> u64 {
        self.epochs.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[must_use]
pub fn timer_channel() -> (TimerSink, TimerEvents) {
    let (events, receiver) = mpsc::unbounded_channel();
    (
        TimerSink {
            events,
            epochs: Arc::new(AtomicU64::new(0)),
        },
        receiver,
    )
}

/// Cancellable handle over the single countdown or feedback task of an attempt.
///
/// Arming a new task always aborts the previous one. Dropping the handle aborts
/// whatever is still running.
#[derive(Debug)]
pub struct QuizTimer {
    sink: TimerSink,
    epoch: Option<u64>,
    task: Option<JoinHandle<()>>,
}

impl QuizTimer {
    #[must_use]
    pub fn new(sink: TimerSink) -> Self {
        Self {
            sink,
            epoch: None,
            task: None,
        }
    }

    /// Emit a `Tick` every second until cancelled or re-armed.
    pub fn start_countdown(&mut self) {
        let epoch = self.rearm();
        let events = self.sink.events.clone();
        self.task = Some(tokio::spawn(async move {
            let mut interval =
                tokio::time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let event = TimerEvent {
                    epoch,
                    kind: TimerKind::Tick,
                };
                if events.send(event).is_err() {
                    break;
                }
            }
        }));
    }

    /// Emit a single `FeedbackElapsed` after `delay`.
    pub fn schedule_feedback(&mut self, delay: Duration) {
        let epoch = self.rearm();
        let events = self.sink.events.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(TimerEvent {
                epoch,
                kind: TimerKind::FeedbackElapsed,
            });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.epoch = None;
    }

    #[must_use]
    pub fn is_current(&self, event: &TimerEvent) -> bool {
        self.epoch == Some(event.epoch)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.epoch.is_some()
    }

    fn rearm(&mut self) -> u64 {
        self.cancel();
        let epoch = self.sink.next_epoch();
        self.epoch = Some(epoch);
        epoch
    }
}

impl Drop for QuizTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_ticks_every_second() {
        let (sink, mut events) = timer_channel();
        let mut timer = QuizTimer::new(sink);
        timer.start_countdown();

        tokio::time::sleep(Duration::from_millis(3500)).await;
        let mut ticks = 0;
        while let Ok(event) = events.try_recv() {
            assert!(timer.is_current(&event));
            assert_eq!(event.kind, TimerKind::Tick);
            ticks += 1;
        }
        assert_eq!(ticks, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_events() {
        let (sink, mut events) = timer_channel();
        let mut timer = QuizTimer::new(sink);
        timer.start_countdown();
        timer.cancel();
        assert!(!timer.is_armed());

        tokio::time::sleep(Duration::from_secs(5)).await;
        settle().await;
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_invalidates_old_epoch() {
        let (sink, mut events) = timer_channel();
        let mut timer = QuizTimer::new(sink);
        timer.start_countdown();
        tokio::time::sleep(Duration::from_millis(1100)).await;
        let stale = events.recv().await.unwrap();

        timer.schedule_feedback(Duration::from_millis(1500));
        assert!(!timer.is_current(&stale));

        let fired = events.recv().await.unwrap();
        assert_eq!(fired.kind, TimerKind::FeedbackElapsed);
        assert!(timer.is_current(&fired));
    }

    #[tokio::test(start_paused = true)]
    async fn drop_aborts_running_task() {
        let (sink, mut events) = timer_channel();
        {
            let mut timer = QuizTimer::new(sink.clone());
            timer.schedule_feedback(Duration::from_secs(1));
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
        settle().await;
        assert!(matches!(events.try_recv(), Err(TryRecvError::Empty)));
    }
}
