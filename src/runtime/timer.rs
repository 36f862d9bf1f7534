//! Timer Actor: Dedicated thread for delayed event delivery.
//!
//! Panes ask for follow-ups by returning
//! [`Action::Schedule`](crate::widget::Action::Schedule); the program hands
//! each request to this actor, which sends the event back into the main
//! channel once its delay has elapsed. Requests are fire-and-forget.

use crate::error::{Error, Result};
use crate::input::Event;
use crossbeam_channel::{unbounded, RecvTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

const THREAD_NAME: &str = "panestack-timer";

/// Longest sleep between shutdown checks while nothing is due.
const IDLE_WAIT: Duration = Duration::from_millis(50);

/// A pending delivery.
#[derive(Debug)]
struct Pending {
    due: Instant,
    event: Event,
}

/// Timer actor that delivers scheduled events.
#[derive(Debug)]
pub struct TimerActor {
    /// Handle to the timer thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Schedule requests.
    requests: Sender<Pending>,
}

impl TimerActor {
    /// Spawn the timer thread. Due events are sent on `sender`.
    pub fn spawn(sender: Sender<Event>) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let (requests, request_rx) = unbounded::<Pending>();

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                let mut pending: Vec<Pending> = Vec::new();
                while !shutdown_clone.load(Ordering::Relaxed) {
                    let now = Instant::now();
                    if !deliver_due(&mut pending, now, &sender) {
                        break;
                    }
                    let wait = pending
                        .iter()
                        .map(|p| p.due.saturating_duration_since(now))
                        .min()
                        .map_or(IDLE_WAIT, |d| d.min(IDLE_WAIT));
                    match request_rx.recv_timeout(wait) {
                        Ok(request) => pending.push(request),
                        Err(RecvTimeoutError::Timeout) => {}
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("timer thread exiting");
            })
            .map_err(|source| Error::Spawn {
                name: THREAD_NAME.to_string(),
                source,
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
            requests,
        })
    }

    /// Deliver `event` after `delay`.
    pub fn schedule(&self, delay: Duration, event: Event) -> Result<()> {
        trace!(?delay, ?event, "schedule");
        self.requests
            .send(Pending {
                due: Instant::now() + delay,
                event,
            })
            .map_err(|_| Error::Disconnected)
    }

    /// Signal the timer thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the timer thread to finish. Undelivered events are dropped.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TimerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Send every event due at `now`, earliest first. Returns `false` once the
/// receiver is gone.
fn deliver_due(pending: &mut Vec<Pending>, now: Instant, sender: &Sender<Event>) -> bool {
    let (mut due, rest): (Vec<Pending>, Vec<Pending>) = pending.drain(..).partition(|p| p.due <= now);
    *pending = rest;
    due.sort_by_key(|p| p.due);
    due.into_iter().all(|p| sender.send(p.event).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::TimerEvent;
    use crossbeam_channel::bounded;

    fn tick(tag: u64) -> Event {
        Event::Timer(TimerEvent { target: 1, tag })
    }

    #[test]
    fn test_delivers_after_delay() {
        let (tx, rx) = bounded(8);
        let timer = TimerActor::spawn(tx).unwrap();
        let start = Instant::now();
        timer.schedule(Duration::from_millis(20), tick(1)).unwrap();

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(event, tick(1));
        assert!(start.elapsed() >= Duration::from_millis(20));
        timer.join();
    }

    #[test]
    fn test_earliest_first() {
        let (tx, rx) = bounded(8);
        let timer = TimerActor::spawn(tx).unwrap();
        timer.schedule(Duration::from_millis(150), tick(2)).unwrap();
        timer.schedule(Duration::from_millis(10), tick(1)).unwrap();

        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), tick(1));
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), tick(2));
        timer.join();
    }

    #[test]
    fn test_join_drops_pending() {
        let (tx, rx) = bounded(8);
        let timer = TimerActor::spawn(tx).unwrap();
        timer.schedule(Duration::from_secs(60), tick(1)).unwrap();
        timer.join();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_join_after_receiver_dropped_on_full_channel() {
        let (tx, rx) = bounded(1);
        let timer = TimerActor::spawn(tx).unwrap();
        for tag in 0..4 {
            timer.schedule(Duration::ZERO, tick(tag)).unwrap();
        }
        // First event fills the channel; the thread then blocks sending the next.
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), tick(0));
        thread::sleep(Duration::from_millis(100));

        drop(rx);
        timer.join();
    }

    #[test]
    fn test_deliver_due_orders_by_deadline() {
        let (tx, rx) = bounded(8);
        let now = Instant::now();
        let mut pending = vec![
            Pending { due: now, event: tick(2) },
            Pending { due: now + Duration::from_secs(5), event: tick(3) },
            Pending { due: now - Duration::from_millis(5), event: tick(1) },
        ];
        assert!(deliver_due(&mut pending, now, &tx));
        assert_eq!(pending.len(), 1);
        assert_eq!(rx.try_recv().unwrap(), tick(1));
        assert_eq!(rx.try_recv().unwrap(), tick(2));
        assert!(rx.try_recv().is_err());
    }
}
