//! Graceful shutdown signalling.

use tokio::sync::watch;

/// Handle used to request graceful shutdown.
///
/// Wraps a watch channel holding a single flag; watchers resolve once the
/// flag flips. Triggering more than once is harmless.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// A watcher that resolves once shutdown is requested.
    pub fn watcher(&self) -> ShutdownWatcher {
        ShutdownWatcher {
            rx: self.tx.subscribe(),
        }
    }

    /// Request shutdown of everything holding a watcher.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side of [`Shutdown`].
pub struct ShutdownWatcher {
    rx: watch::Receiver<bool>,
}

impl ShutdownWatcher {
    /// Wait until shutdown is requested.
    ///
    /// Also resolves when the [`Shutdown`] handle is dropped, so losing
    /// the handle stops the tasks watching it rather than leaking them.
    pub async fn triggered(mut self) {
        let _ = self.rx.wait_for(|stop| *stop).await;
    }
}
