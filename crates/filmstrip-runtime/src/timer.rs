#![forbid(unsafe_code)]

//! Single pending auto-advance tick.
//!
//! The carousel holds at most one live timer at any moment. Restarting the
//! scheduler cancels the previous pending tick before arming the next one,
//! and dropping the scheduler cancels unconditionally. A tick that has
//! already fired into the channel cannot be revoked; it carries the
//! generation that armed it, and the dispatch loop discards ticks whose
//! generation is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::program::Input;

/// Signal a pending tick watches while it waits out its interval.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    /// Create a signal/trigger pair.
    pub(crate) fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        (signal, StopTrigger { inner })
    }

    /// Whether the signal has been triggered.
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Block until the signal fires or `duration` elapses.
    ///
    /// Returns `true` if stopped, `false` on timeout. Loops against the
    /// deadline so a spurious condvar wakeup cannot cut the wait short.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let deadline = Instant::now() + duration;
        let mut stopped = lock.lock().unwrap();
        loop {
            if *stopped {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = cvar.wait_timeout(stopped, deadline - now).unwrap();
            stopped = guard;
        }
    }
}

/// Runtime-side handle that cancels a pending tick.
pub(crate) struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    pub(crate) fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        *stopped = true;
        cvar.notify_all();
    }
}

/// Counters instrumenting timer scheduling and cancellation.
///
/// Shared across clones; tests use these to verify that exactly one timer
/// is armed after a state change and none survive teardown.
#[derive(Clone, Default)]
pub struct TimerStats {
    inner: Arc<TimerCounters>,
}

#[derive(Default)]
struct TimerCounters {
    scheduled: AtomicU64,
    cancelled: AtomicU64,
    fired: AtomicU64,
}

impl TimerStats {
    /// Number of ticks ever armed.
    pub fn scheduled(&self) -> u64 {
        self.inner.scheduled.load(Ordering::SeqCst)
    }

    /// Number of pending ticks torn down before the handle was released.
    pub fn cancelled(&self) -> u64 {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Number of ticks that fired and sent a message.
    pub fn fired(&self) -> u64 {
        self.inner.fired.load(Ordering::SeqCst)
    }

    fn record_scheduled(&self) {
        self.inner.scheduled.fetch_add(1, Ordering::SeqCst);
    }

    fn record_cancelled(&self) {
        self.inner.cancelled.fetch_add(1, Ordering::SeqCst);
    }

    fn record_fired(&self) {
        self.inner.fired.fetch_add(1, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for TimerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerStats")
            .field("scheduled", &self.scheduled())
            .field("cancelled", &self.cancelled())
            .field("fired", &self.fired())
            .finish()
    }
}

/// A tick that has been armed but has not yet fired or been cancelled.
struct PendingTick {
    trigger: StopTrigger,
    thread: Option<JoinHandle<()>>,
}

impl PendingTick {
    /// Stop the wait and join the background thread.
    fn cancel(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PendingTick {
    fn drop(&mut self) {
        // Signal without joining; drop must not block the dispatch loop.
        self.trigger.stop();
    }
}

/// Owns the carousel's one cancellable resource: the pending auto-advance
/// tick. `restart` is cancel-then-schedule as a single step, which is what
/// makes manual navigation reset the auto-advance clock.
pub struct TickScheduler<M> {
    sender: mpsc::Sender<Input<M>>,
    pending: Option<PendingTick>,
    generation: u64,
    stats: TimerStats,
}

impl<M> TickScheduler<M>
where
    M: Send + 'static,
{
    /// Create a scheduler that delivers ticks through `sender`.
    pub fn new(sender: mpsc::Sender<Input<M>>) -> Self {
        Self {
            sender,
            pending: None,
            generation: 0,
            stats: TimerStats::default(),
        }
    }

    /// Cancel any pending tick and arm a new one for `interval` from now.
    ///
    /// The new tick carries a fresh generation, so a previously fired tick
    /// still sitting in the channel no longer matches [`generation`] and
    /// gets discarded at dispatch.
    ///
    /// [`generation`]: Self::generation
    pub fn restart(&mut self, interval: Duration) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;

        let (signal, trigger) = StopSignal::new();
        let sender = self.sender.clone();
        let stats = self.stats.clone();
        let thread = thread::spawn(move || {
            if !signal.wait_timeout(interval) {
                stats.record_fired();
                // Receiver gone means the program already shut down.
                let _ = sender.send(Input::Tick { generation });
            }
        });

        self.pending = Some(PendingTick {
            trigger,
            thread: Some(thread),
        });
        self.stats.record_scheduled();
        tracing::debug!(?interval, generation, "auto-advance tick armed");
    }

    /// Cancel the pending tick, if any.
    ///
    /// Also bumps the generation: a tick that fired before the cancel was
    /// requested is stale too.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.generation += 1;
            pending.cancel();
            self.stats.record_cancelled();
            tracing::debug!("auto-advance tick cancelled");
        }
    }

    /// The current tick generation.
    ///
    /// Bumped on every restart and cancel; a fired tick whose stamp no
    /// longer matches must not reach the model.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick handle is currently held.
    ///
    /// The handle is held until the next `restart` or `cancel`, even after
    /// the tick has fired; the deterministic accounting lives in
    /// [`TimerStats`] and the simulator.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// A handle onto the shared scheduling counters.
    pub fn stats(&self) -> TimerStats {
        self.stats.clone()
    }
}

impl<M> Drop for TickScheduler<M> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
            self.stats.record_cancelled();
        }
    }
}
