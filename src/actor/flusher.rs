//! Flusher Actor: Dedicated thread for periodic buffer flushing.
//!
//! The actor wakes on a regular tick, invokes the flush callback it was
//! given, and terminates after one final flush when its stop signal is
//! delivered. Stopping consumes the actor, so a second stop is
//! unrepresentable.

use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use std::io;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::warn;

/// Background flush actor.
///
/// A tick-driven flush has no caller to report to, so its errors are
/// logged at `warn` and dropped. The flush callback is expected to keep
/// unwritten bytes pending on failure, so the error resurfaces on the
/// next explicit flush.
pub struct FlusherActor {
    /// Handle to the flusher thread.
    handle: Option<JoinHandle<()>>,
    /// One-shot stop signal.
    stop_tx: Sender<()>,
}

impl FlusherActor {
    /// Spawn a flusher that invokes `flush` every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the flusher thread.
    pub fn spawn<F>(interval: Duration, flush: F) -> Self
    where
        F: FnMut() -> io::Result<()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(1);

        let handle = thread::Builder::new()
            .name("lineflow-flusher".to_string())
            .spawn(move || {
                Self::run_loop(&stop_rx, interval, flush);
            })
            .expect("failed to spawn flusher thread");

        Self {
            handle: Some(handle),
            stop_tx,
        }
    }

    /// Deliver the stop signal and wait for the final flush.
    ///
    /// Consuming `self` means there is no handle left to signal through
    /// a second time.
    pub fn stop(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        // The Option guard keeps drop-after-stop from signaling twice.
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_tx.try_send(());
            let _ = handle.join();
        }
    }

    /// Main flusher loop: tick-or-stop select.
    fn run_loop<F>(stop_rx: &Receiver<()>, interval: Duration, mut flush: F)
    where
        F: FnMut() -> io::Result<()>,
    {
        let ticker = tick(interval);

        loop {
            select! {
                recv(ticker) -> _ => {
                    if let Err(e) = flush() {
                        warn!("periodic flush failed: {e}");
                    }
                }
                // A disconnect (actor handle dropped without stop) counts
                // as the stop signal too.
                recv(stop_rx) -> _ => {
                    if let Err(e) = flush() {
                        warn!("final flush failed: {e}");
                    }
                    return;
                }
            }
        }
    }
}

impl Drop for FlusherActor {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_flusher_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let flusher = FlusherActor::spawn(Duration::from_millis(10), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        thread::sleep(Duration::from_millis(100));
        flusher.stop();
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[test]
    fn test_stop_runs_final_flush() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        // Interval far beyond the test duration: only the stop branch
        // can invoke the callback.
        let flusher = FlusherActor::spawn(Duration::from_secs(3600), move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        flusher.stop();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_flush_errors_are_dropped() {
        let flusher = FlusherActor::spawn(Duration::from_millis(5), || {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
        });

        // The loop must survive failing flushes until stopped.
        thread::sleep(Duration::from_millis(50));
        flusher.stop();
    }

    #[test]
    fn test_drop_stops_thread() {
        let flusher = FlusherActor::spawn(Duration::from_millis(10), || Ok(()));
        drop(flusher);
    }
}
