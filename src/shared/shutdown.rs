//! Graceful shutdown handling
//!
//! One latch shared by the HTTP server and the cache sweeper. It flips once,
//! on SIGINT/SIGTERM (Ctrl+C off unix) or when `main` finishes serving.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

/// Cloneable one-shot latch. Late subscribers still observe a past trigger.
#[derive(Clone)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn trigger(&self) {
        let flipped = self.tx.send_if_modified(|stopped| !std::mem::replace(stopped, true));
        if flipped {
            info!("Shutdown requested");
        }
    }

    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so this only returns once the flag is set.
        let _ = rx.wait_for(|stopped| *stopped).await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
async fn os_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            warn!("SIGTERM handler unavailable: {}", e);
            return std::future::pending().await;
        }
    };
    tokio::select! {
        _ = term.recv() => info!("SIGTERM received"),
        res = tokio::signal::ctrl_c() => match res {
            Ok(()) => info!("SIGINT received"),
            Err(e) => {
                warn!("SIGINT handler unavailable: {}", e);
                term.recv().await;
                info!("SIGTERM received");
            }
        },
    }
}

#[cfg(not(unix))]
async fn os_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received"),
        Err(e) => {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Owns the process-wide signal and bounds the final cleanup.
pub struct ShutdownCoordinator {
    signal: ShutdownSignal,
    grace: Duration,
}

impl ShutdownCoordinator {
    pub fn new(grace_secs: u64) -> Self {
        Self {
            signal: ShutdownSignal::new(),
            grace: Duration::from_secs(grace_secs),
        }
    }

    pub fn signal(&self) -> ShutdownSignal {
        self.signal.clone()
    }

    pub fn start_signal_listener(&self) {
        let signal = self.signal.clone();
        tokio::spawn(async move {
            os_signal().await;
            signal.trigger();
        });
    }

    /// Returns `false` when `cleanup` outlived the grace period.
    pub async fn run_cleanup<F, Fut>(&self, cleanup: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        let secs = self.grace.as_secs();
        info!(grace_secs = secs, "Running shutdown cleanup");
        let done = tokio::time::timeout(self.grace, cleanup()).await.is_ok();
        if done {
            info!("Shutdown cleanup finished");
        } else {
            warn!(grace_secs = secs, "Shutdown cleanup abandoned after grace period");
        }
        done
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new(30)
    }
}
