//! Refresh monitor
//!
//! Couples the one-shot refresh trigger with a polling cycle that watches
//! for its completion. Each [`launch`](RefreshMonitor::launch) runs one
//! independent trigger-then-poll cycle with its own poller; completion is
//! reported through a channel that resolves at most once.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{oneshot, watch};
use tracing::{debug, warn};

use crate::error::MonitorError;
use crate::poller::{Outcome, Poller};
use pulse_client::{ClientError, DashboardClient};
use pulse_core::domain::status::UpdateStatus;

/// Probe interval used when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Remote operations a refresh cycle drives.
///
/// Implemented by [`DashboardClient`]; tests substitute scripted fakes.
#[async_trait]
pub trait RefreshApi: Send + Sync {
    /// Kick off the server-side refresh job.
    async fn trigger_refresh(&self) -> Result<(), ClientError>;

    /// Fetch the refresh job's current status.
    async fn update_status(&self) -> Result<UpdateStatus, ClientError>;
}

#[async_trait]
impl RefreshApi for DashboardClient {
    async fn trigger_refresh(&self) -> Result<(), ClientError> {
        DashboardClient::trigger_refresh(self).await
    }

    async fn update_status(&self) -> Result<UpdateStatus, ClientError> {
        DashboardClient::update_status(self).await
    }
}

/// Orchestrates trigger-then-poll refresh cycles.
pub struct RefreshMonitor {
    api: Arc<dyn RefreshApi>,
    interval: Duration,
}

impl RefreshMonitor {
    /// Creates a monitor polling at [`DEFAULT_POLL_INTERVAL`].
    pub fn new(api: Arc<dyn RefreshApi>) -> Self {
        Self {
            api,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Overrides the probe interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Triggers a refresh and arms a poller watching for its completion.
    ///
    /// The returned [`RefreshWatch`] exposes the loading flag, the
    /// completion channel, and cancellation. The status probe treats any
    /// response other than the complete sentinel as pending, and a failed
    /// probe the same way; a transient error never aborts the watch.
    ///
    /// # Errors
    /// [`MonitorError::Trigger`] if the trigger request fails. No poller is
    /// constructed in that case.
    pub async fn launch(&self) -> Result<RefreshWatch, MonitorError> {
        let (loading, loading_rx) = watch::channel(true);

        debug!("triggering remote refresh");
        if let Err(e) = self.api.trigger_refresh().await {
            loading.send_replace(false);
            return Err(MonitorError::Trigger(e));
        }

        let mut poller = Poller::new(self.interval)?;
        let api = Arc::clone(&self.api);
        let completion = poller.start(move || {
            let api = Arc::clone(&api);
            let loading = loading.clone();
            async move {
                match api.update_status().await {
                    Ok(status) if status.is_complete() => {
                        loading.send_replace(false);
                        Outcome::Terminal(status)
                    }
                    Ok(status) => {
                        debug!(status = status.status, "refresh still running");
                        Outcome::Pending
                    }
                    Err(e) => {
                        // A transient probe failure must not abort a
                        // long-running watch; try again next interval.
                        warn!("status probe failed: {e}");
                        Outcome::Pending
                    }
                }
            }
        })?;

        Ok(RefreshWatch {
            poller,
            completion,
            loading: loading_rx,
        })
    }
}

/// One live trigger-then-poll cycle.
///
/// Dropping the watch tears the cycle down; [`stop`](RefreshWatch::stop) is
/// the explicit cancellation path for callers that keep the watch around.
#[derive(Debug)]
pub struct RefreshWatch {
    poller: Poller,
    completion: oneshot::Receiver<UpdateStatus>,
    loading: watch::Receiver<bool>,
}

impl RefreshWatch {
    /// Whether the cycle is still in flight.
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Channel view of the loading flag, for callers that await changes
    /// instead of sampling.
    pub fn loading(&self) -> watch::Receiver<bool> {
        self.loading.clone()
    }

    /// Stops the underlying poller. Idempotent; the completion channel then
    /// reports an interruption instead of a payload.
    pub fn stop(&self) {
        self.poller.stop();
    }

    /// Waits for the terminal status.
    ///
    /// Resolves at most once per cycle.
    ///
    /// # Errors
    /// [`MonitorError::Interrupted`] if the watch was stopped before a
    /// terminal status was observed.
    pub async fn wait(self) -> Result<UpdateStatus, MonitorError> {
        let Self {
            poller, completion, ..
        } = self;
        let result = completion.await.map_err(|_| MonitorError::Interrupted);
        drop(poller);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time;

    const TICK: Duration = Duration::from_millis(3000);

    fn running() -> UpdateStatus {
        UpdateStatus {
            status: 0,
            refresh_enable: false,
            last_update_time: None,
        }
    }

    fn complete() -> UpdateStatus {
        UpdateStatus {
            status: 1,
            refresh_enable: true,
            last_update_time: None,
        }
    }

    /// Scripted API: pops one canned status result per probe, then reports
    /// "running" forever.
    struct ScriptedApi {
        trigger_ok: bool,
        triggers: AtomicUsize,
        probes: AtomicUsize,
        statuses: Mutex<VecDeque<Result<UpdateStatus, ClientError>>>,
    }

    impl ScriptedApi {
        fn new(
            trigger_ok: bool,
            statuses: Vec<Result<UpdateStatus, ClientError>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                trigger_ok,
                triggers: AtomicUsize::new(0),
                probes: AtomicUsize::new(0),
                statuses: Mutex::new(statuses.into()),
            })
        }
    }

    #[async_trait]
    impl RefreshApi for ScriptedApi {
        async fn trigger_refresh(&self) -> Result<(), ClientError> {
            self.triggers.fetch_add(1, Ordering::SeqCst);
            if self.trigger_ok {
                Ok(())
            } else {
                Err(ClientError::api_error(500, "refresh rejected"))
            }
        }

        async fn update_status(&self) -> Result<UpdateStatus, ClientError> {
            self.probes.fetch_add(1, Ordering::SeqCst);
            self.statuses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(running()))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completes_on_the_sentinel_status() {
        let api = ScriptedApi::new(true, vec![Ok(running()), Ok(running()), Ok(complete())]);
        let monitor = RefreshMonitor::new(api.clone());

        let watch = monitor.launch().await.unwrap();
        assert!(watch.is_loading());
        let loading = watch.loading();

        let start = time::Instant::now();
        let status = watch.wait().await.unwrap();

        assert!(status.is_complete());
        assert_eq!(start.elapsed(), TICK * 3);
        assert_eq!(api.probes.load(Ordering::SeqCst), 3);
        assert!(!*loading.borrow());
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_failure_aborts_before_polling() {
        let api = ScriptedApi::new(false, vec![]);
        let monitor = RefreshMonitor::new(api.clone());

        let err = monitor.launch().await.unwrap_err();
        assert!(matches!(err, MonitorError::Trigger(_)));
        assert_eq!(api.triggers.load(Ordering::SeqCst), 1);

        // no poller was constructed, so no probe ever fires
        time::sleep(TICK * 10).await;
        assert_eq!(api.probes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn probe_failure_is_tolerated() {
        let api = ScriptedApi::new(
            true,
            vec![
                Err(ClientError::api_error(502, "bad gateway")),
                Ok(running()),
                Ok(complete()),
            ],
        );
        let monitor = RefreshMonitor::new(api.clone());

        let watch = monitor.launch().await.unwrap();
        let start = time::Instant::now();
        let status = watch.wait().await.unwrap();

        // the failed probe on tick 1 did not stop the cycle
        assert!(status.is_complete());
        assert_eq!(start.elapsed(), TICK * 3);
        assert_eq!(api.probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn external_stop_interrupts_the_watch() {
        let api = ScriptedApi::new(true, vec![]);
        let monitor = RefreshMonitor::new(api.clone());

        let watch = monitor.launch().await.unwrap();
        time::sleep(TICK + TICK / 2).await;
        watch.stop();

        let probes_at_stop = api.probes.load(Ordering::SeqCst);
        assert_eq!(probes_at_stop, 1);

        time::sleep(TICK * 5).await;
        assert_eq!(api.probes.load(Ordering::SeqCst), probes_at_stop);

        let err = watch.wait().await.unwrap_err();
        assert!(matches!(err, MonitorError::Interrupted));
    }

    #[tokio::test(start_paused = true)]
    async fn custom_interval_is_respected() {
        let api = ScriptedApi::new(true, vec![Ok(complete())]);
        let monitor = RefreshMonitor::new(api.clone()).with_interval(Duration::from_millis(500));

        let watch = monitor.launch().await.unwrap();
        let start = time::Instant::now();
        watch.wait().await.unwrap();

        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn zero_interval_is_rejected_at_launch() {
        let api = ScriptedApi::new(true, vec![]);
        let monitor = RefreshMonitor::new(api).with_interval(Duration::ZERO);

        let err = monitor.launch().await.unwrap_err();
        assert!(matches!(
            err,
            MonitorError::Poller(crate::error::PollerError::InvalidInterval)
        ));
    }
}
