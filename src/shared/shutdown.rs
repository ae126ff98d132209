//! Graceful shutdown handling
//!
//! One [`ShutdownSignal`] is shared by the HTTP server, the OS signal
//! listener and [`crate::server::ServerHandle`]. It is a latch: once
//! triggered it stays triggered, and late waiters resolve immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{error, info};

#[derive(Clone)]
pub struct ShutdownSignal {
    latch: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (latch, _) = watch::channel(false);
        Self {
            latch: Arc::new(latch),
        }
    }

    pub fn is_triggered(&self) -> bool {
        *self.latch.borrow()
    }

    pub fn trigger(&self) {
        let first = self.latch.send_if_modified(|fired| !std::mem::replace(fired, true));
        if first {
            info!("🛑 Shutdown signal triggered");
        }
    }

    pub async fn wait(&self) {
        let mut rx = self.latch.subscribe();
        // the sender lives in `self`, so `wait_for` cannot fail while we hold it
        let _ = rx.wait_for(|fired| *fired).await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves on SIGTERM or SIGINT with the signal name; `None` if the
/// handlers cannot be installed.
#[cfg(unix)]
async fn os_signal() -> Option<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| error!("Failed to install SIGTERM handler: {}", e))
        .ok()?;
    tokio::select! {
        _ = sigterm.recv() => Some("SIGTERM"),
        result = tokio::signal::ctrl_c() => result
            .map_err(|e| error!("Failed to install Ctrl+C handler: {}", e))
            .ok()
            .map(|_| "SIGINT"),
    }
}

#[cfg(not(unix))]
async fn os_signal() -> Option<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| error!("Failed to install Ctrl+C handler: {}", e))
        .ok()
        .map(|_| "Ctrl+C")
}

/// Owns the process-wide signal plus the drain timeout.
pub struct ShutdownCoordinator {
    signal: ShutdownSignal,
    timeout: Duration,
}

impl ShutdownCoordinator {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            signal: ShutdownSignal::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn signal(&self) -> ShutdownSignal {
        self.signal.clone()
    }

    /// How long in-flight requests may run after the trigger.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Spawns a task that triggers the signal on SIGTERM/SIGINT.
    pub fn start_signal_listener(&self) {
        let signal = self.signal.clone();
        tokio::spawn(async move {
            if let Some(name) = os_signal().await {
                info!("📡 Received {}", name);
                signal.trigger();
            }
        });
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn waiters_are_released_by_trigger() {
        let signal = ShutdownSignal::new();
        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let s = signal.clone();
                tokio::spawn(async move { s.wait().await })
            })
            .collect();

        assert!(!signal.is_triggered());
        signal.trigger();
        for waiter in waiters {
            tokio::time::timeout(Duration::from_secs(1), waiter)
                .await
                .unwrap()
                .unwrap();
        }
    }

    #[tokio::test]
    async fn late_waiter_resolves_immediately() {
        let signal = ShutdownSignal::new();
        signal.trigger();
        signal.trigger();
        assert!(signal.is_triggered());
        tokio::time::timeout(Duration::from_millis(100), signal.wait())
            .await
            .unwrap();
    }

    #[test]
    fn coordinator_exposes_drain_timeout() {
        let coordinator = ShutdownCoordinator::new(5);
        assert_eq!(coordinator.timeout(), Duration::from_secs(5));
        assert!(!coordinator.signal().is_triggered());
    }
}
