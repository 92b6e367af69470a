//! Fixed-interval poller
//!
//! Repeats a user-supplied probe at a fixed wall-clock interval until
//! stopped. The probe decides termination by returning
//! [`Outcome::Terminal`]; owners cancel with [`Poller::stop`]. Probes never
//! overlap: the next firing is scheduled only after the current probe has
//! settled, and the first probe fires one full interval after arming.

use std::future::Future;
use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

use crate::error::PollerError;

/// Result of a single probe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// No terminal information yet; probe again after the interval.
    Pending,
    /// The watched condition was observed. The poller disarms itself and
    /// delivers the payload to the completion channel.
    Terminal(T),
}

/// Repeats a probe at a fixed interval until stopped.
///
/// A poller is armed by [`start`](Poller::start) and disarmed either by the
/// probe reporting [`Outcome::Terminal`] or by [`stop`](Poller::stop). A
/// disarmed poller can be started again; an armed one cannot.
#[derive(Debug)]
pub struct Poller {
    interval: Duration,
    cycle: Option<Cycle>,
}

/// State of one armed cycle. The armed flag doubles as the wakeup channel:
/// publishing `false` cancels the pending timer.
#[derive(Debug)]
struct Cycle {
    armed: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl Poller {
    /// Creates a disarmed poller.
    ///
    /// # Errors
    /// [`PollerError::InvalidInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self, PollerError> {
        if interval.is_zero() {
            return Err(PollerError::InvalidInterval);
        }
        Ok(Self {
            interval,
            cycle: None,
        })
    }

    /// Whether a cycle is currently armed.
    pub fn is_armed(&self) -> bool {
        self.cycle.as_ref().is_some_and(|c| *c.armed.borrow())
    }

    /// Arms the poller and schedules the first probe one interval out.
    ///
    /// The probe is invoked sequentially: each firing is scheduled only
    /// after the previous probe has settled. Returns a receiver that
    /// resolves with the terminal payload; if the poller is stopped before
    /// a terminal outcome, the receiver yields an error instead.
    ///
    /// # Errors
    /// [`PollerError::AlreadyArmed`] if a cycle is already armed.
    pub fn start<P, F, T>(&mut self, mut probe: P) -> Result<oneshot::Receiver<T>, PollerError>
    where
        P: FnMut() -> F + Send + 'static,
        F: Future<Output = Outcome<T>> + Send + 'static,
        T: Send + 'static,
    {
        if self.is_armed() {
            return Err(PollerError::AlreadyArmed);
        }
        // A previous, already-disarmed cycle may still be draining. It holds
        // its own channel and cannot observe the new one.
        if let Some(old) = self.cycle.take() {
            old.task.abort();
        }

        let (armed, mut armed_rx) = watch::channel(true);
        let disarm = armed.clone();
        let interval = self.interval;
        let (done, completion) = oneshot::channel();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = time::sleep(interval) => {}
                    // stop() cancels the pending timer instead of letting it
                    // run out
                    _ = armed_rx.changed() => {}
                }
                if !*armed_rx.borrow() {
                    break;
                }

                let outcome = probe().await;

                if !*armed_rx.borrow() {
                    // stop() raced the in-flight probe; its result is
                    // discarded, terminal or not
                    break;
                }
                if let Outcome::Terminal(payload) = outcome {
                    disarm.send_replace(false);
                    let _ = done.send(payload);
                    break;
                }
            }
            debug!("poll cycle ended");
        });

        self.cycle = Some(Cycle { armed, task });
        Ok(completion)
    }

    /// Disarms the poller and cancels any pending timer.
    ///
    /// Idempotent: stopping a disarmed poller has no effect. Once `stop`
    /// returns, no further probe fires, and the result of a probe that was
    /// already in flight is discarded.
    pub fn stop(&self) {
        if let Some(cycle) = &self.cycle {
            cycle.armed.send_if_modified(|armed| {
                let was_armed = *armed;
                *armed = false;
                was_armed
            });
        }
    }
}

impl Drop for Poller {
    // The owner going away must not leave a timer behind.
    fn drop(&mut self) {
        if let Some(cycle) = &self.cycle {
            cycle.task.abort();
        }
    }
}
