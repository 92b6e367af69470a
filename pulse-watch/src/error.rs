//! Error types for the refresh watcher

use thiserror::Error;

use pulse_client::ClientError;

/// Errors raised by [`Poller`](crate::poller::Poller) lifecycle operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PollerError {
    /// `start()` was called while a cycle is already armed
    #[error("poller is already armed")]
    AlreadyArmed,

    /// The configured probe interval is zero
    #[error("poll interval must be greater than zero")]
    InvalidInterval,
}

/// Errors raised by a [`RefreshMonitor`](crate::monitor::RefreshMonitor) cycle
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The refresh trigger request failed; no polling was started
    #[error("refresh trigger failed: {0}")]
    Trigger(#[from] ClientError),

    /// The poller could not be armed
    #[error(transparent)]
    Poller(#[from] PollerError),

    /// The watch was stopped before a terminal status was observed
    #[error("refresh watch was stopped before completion")]
    Interrupted,
}
