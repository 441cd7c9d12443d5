//! Recurring callbacks as scoped resources
//!
//! A `Ticker` owns a thread that dispatches an action once per period.
//! Dropping the ticker stops the thread and joins it, so no action is
//! dispatched after the drop returns.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use std::sync::atomic::{AtomicBool, Ordering};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Shortest period a ticker runs at
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running recurring callback
#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    active: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn a ticker calling `make_action` every `period` and dispatching
    /// the result. The first action fires one period after spawning.
    /// Periods shorter than one millisecond are raised to it.
    pub fn spawn<F>(
        name: &'static str,
        period: Duration,
        dispatcher: Dispatcher,
        make_action: F,
    ) -> io::Result<Self>
    where
        F: Fn() -> Action + Send + 'static,
    {
        if period < MIN_PERIOD {
            log::warn!("Ticker {}: period {:?} raised to {:?}", name, period, MIN_PERIOD);
        }
        let period = period.max(MIN_PERIOD);

        let active = Arc::new(AtomicBool::new(true));
        let thread_active = Arc::clone(&active);

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                let mut next_tick = Instant::now() + period;

                while thread_active.load(Ordering::Acquire) {
                    let now = Instant::now();
                    if now < next_tick {
                        // Woken early by unpark on drop, or spuriously
                        thread::park_timeout(next_tick - now);
                        continue;
                    }

                    dispatcher.dispatch(make_action());
                    next_tick += period;
                    // Skip missed ticks instead of bursting to catch up
                    if next_tick < Instant::now() {
                        next_tick = Instant::now() + period;
                    }
                }

                log::debug!("Ticker {}: thread terminating", name);
            })?;

        log::debug!("Ticker {}: started with period {:?}", name, period);

        Ok(Self {
            name,
            active,
            handle: Some(handle),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.active.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            if handle.join().is_err() {
                log::error!("Ticker {}: thread panicked", self.name);
            }
        }
        log::debug!("Ticker {}: stopped", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;
    use std::sync::mpsc;

    #[test]
    fn test_ticker_dispatches_repeatedly() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn("test", Duration::from_millis(5), Dispatcher::new(tx), || {
            Action::Global(GlobalAction::SecondElapsed)
        })
        .unwrap();

        for _ in 0..3 {
            let action = rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert!(matches!(action, Action::Global(GlobalAction::SecondElapsed)));
        }
        drop(ticker);
    }

    #[test]
    fn test_no_dispatch_after_drop() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn("test", Duration::from_millis(2), Dispatcher::new(tx), || {
            Action::Global(GlobalAction::SecondElapsed)
        })
        .unwrap();
        rx.recv_timeout(Duration::from_secs(2)).unwrap();

        drop(ticker);
        // Everything sent before the join is already queued
        while rx.try_recv().is_ok() {}

        thread::sleep(Duration::from_millis(20));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_drop_does_not_wait_for_long_period() {
        let (tx, _rx) = mpsc::channel();
        let ticker = Ticker::spawn("slow", Duration::from_secs(60), Dispatcher::new(tx), || {
            Action::Global(GlobalAction::SecondElapsed)
        })
        .unwrap();

        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_thread_carries_ticker_name() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn("named", Duration::from_millis(2), Dispatcher::new(tx), || {
            let name = thread::current().name().map(str::to_string);
            assert_eq!(name.as_deref(), Some("named"));
            Action::Global(GlobalAction::SecondElapsed)
        })
        .unwrap();

        rx.recv_timeout(Duration::from_secs(2)).unwrap();
        drop(ticker);
    }

    #[test]
    fn test_zero_period_is_throttled() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn("zero", Duration::ZERO, Dispatcher::new(tx), || {
            Action::Global(GlobalAction::SecondElapsed)
        })
        .unwrap();

        thread::sleep(Duration::from_millis(50));
        drop(ticker);

        // At most one action per millisecond, with slack for scheduling
        let queued = rx.try_iter().count();
        assert!(queued <= 60, "queued {} actions in 50ms", queued);
    }
}
