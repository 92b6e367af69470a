//! Pulse Watch
//!
//! The refresh-watching core of pulse:
//! - [`Poller`]: repeats a probe at a fixed interval until stopped
//! - [`RefreshMonitor`]: couples the one-shot refresh trigger with a
//!   polling cycle and reports completion through a single-resolution
//!   channel
//!
//! The poller owns all lifecycle state for a cycle: an armed flag, the
//! pending timer, and the guarantee that probes never overlap. Stopping is
//! idempotent and safe against a probe that is still in flight.

pub mod error;
pub mod monitor;
pub mod poller;

// Re-export commonly used types
pub use error::{MonitorError, PollerError};
pub use monitor::{DEFAULT_POLL_INTERVAL, RefreshApi, RefreshMonitor, RefreshWatch};
pub use poller::{Outcome, Poller};
