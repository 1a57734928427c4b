//! Background reclamation of abandoned OTP entries.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::config::OtpServiceConfig;
use super::store::OtpStore;

/// Periodic sweep of the OTP store
///
/// Runs on a fixed interval and removes entries older than the code
/// lifetime. Verification does its own age check, so the sweeper only
/// reclaims memory for challenges nobody came back for.
pub struct OtpSweeper {
    store: Arc<OtpStore>,
    config: OtpServiceConfig,
    interval: Duration,
}

impl OtpSweeper {
    pub fn new(store: Arc<OtpStore>, config: OtpServiceConfig, interval: Duration) -> Self {
        Self {
            store,
            config,
            interval,
        }
    }

    /// Run a single sweep cycle; returns the number of entries reclaimed
    pub fn run_sweep(&self) -> usize {
        let removed = self.store.sweep(chrono::Utc::now(), self.config.ttl());
        if removed > 0 {
            debug!(removed, event = "otp_sweep", "Reclaimed stale OTP entries");
        }
        removed
    }

    /// Spawn the sweep loop on the runtime
    ///
    /// The returned handle is held by the caller and aborted at shutdown.
    pub fn start(self) -> JoinHandle<()> {
        info!(
            interval_seconds = self.interval.as_secs(),
            "OTP sweeper started"
        );
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // the first tick fires immediately; skip it so a fresh boot
            // does not log a no-op sweep
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.run_sweep();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::otp_challenge::OtpChallenge;

    #[tokio::test]
    async fn run_sweep_reports_reclaim_count() {
        let store = Arc::new(OtpStore::new());
        let mut stale = OtpChallenge::new();
        stale.issued_at = chrono::Utc::now() - chrono::Duration::minutes(10);
        store.put("stale@x.com", stale, None);
        store.put("fresh@x.com", OtpChallenge::new(), None);

        let sweeper = OtpSweeper::new(
            Arc::clone(&store),
            OtpServiceConfig::default(),
            Duration::from_secs(300),
        );
        assert_eq!(sweeper.run_sweep(), 1);
        assert!(store.contains("fresh@x.com"));
        assert!(!store.contains("stale@x.com"));
    }

    #[tokio::test]
    async fn started_sweeper_can_be_aborted() {
        let store = Arc::new(OtpStore::new());
        let sweeper = OtpSweeper::new(
            store,
            OtpServiceConfig::default(),
            Duration::from_secs(300),
        );
        let handle = sweeper.start();
        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());
    }
}
