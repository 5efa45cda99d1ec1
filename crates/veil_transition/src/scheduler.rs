//! Tick scheduler
//!
//! Manages one-shot fixed-delay timers. Time is pushed into the scheduler:
//! either deterministically via [`TickScheduler::advance`] (tests, embedded
//! event loops) or from wall-clock time via [`TickScheduler::tick`], which an
//! optional background thread calls at a fixed cadence.
//!
//! Timers are registered through a [`SchedulerHandle`], a weak handle that
//! safely no-ops once the scheduler is gone. Callbacks are always invoked
//! after the internal lock has been released, so a firing timer may schedule
//! or cancel other timers.

use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a pending one-shot timer
    pub struct TimerId;
}

/// One-shot timer callback
type TimerCallback = Box<dyn FnOnce() + Send>;

/// Callback for waking up the owning event loop after timers have fired
///
/// Invoked from the background thread whenever a tick fired at least one
/// timer, so the main thread can re-render.
pub type WakeCallback = Arc<dyn Fn() + Send + Sync>;

struct TimerEntry {
    remaining: Duration,
    callback: TimerCallback,
}

struct SchedulerInner {
    timers: SlotMap<TimerId, TimerEntry>,
    last_tick: Instant,
}

/// The timer scheduler backing all phase clocks
///
/// Typically one per application. Clocks hold a [`SchedulerHandle`] and never
/// the scheduler itself.
///
/// # Background Thread Mode
///
/// The scheduler can run on its own background thread via
/// [`TickScheduler::start_background`], which keeps transitions completing
/// even when the owning event loop is idle.
pub struct TickScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    stop_flag: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
    wake_callback: Option<WakeCallback>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timers: SlotMap::with_key(),
                last_tick: Instant::now(),
            })),
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
            wake_callback: None,
        }
    }

    /// Set a wake callback invoked after a background tick fires timers
    pub fn set_wake_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.wake_callback = Some(Arc::new(callback));
    }

    /// Get a weak handle for registering timers
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Register a one-shot timer
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> TimerId
    where
        F: FnOnce() + Send + 'static,
    {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.timers.insert(TimerEntry {
            remaining: delay,
            callback: Box::new(callback),
        });
        tracing::trace!(?id, ?delay, "timer scheduled");
        id
    }

    /// Cancel a pending timer
    ///
    /// Idempotent; canceling a fired or unknown timer is a no-op.
    pub fn cancel(&self, id: TimerId) {
        if self.inner.lock().unwrap().timers.remove(id).is_some() {
            tracing::trace!(?id, "timer canceled");
        }
    }

    /// Advance virtual time, firing every timer that comes due
    ///
    /// Due timers fire in deadline order, after the lock is released. A
    /// zero-delay timer fires on the first advance of any amount, including
    /// `advance(Duration::ZERO)`.
    pub fn advance(&self, dt: Duration) {
        let due = {
            let mut inner = self.inner.lock().unwrap();
            let mut due_ids: Vec<(Duration, TimerId)> = inner
                .timers
                .iter()
                .filter(|(_, entry)| entry.remaining <= dt)
                .map(|(id, entry)| (entry.remaining, id))
                .collect();
            due_ids.sort_by_key(|(remaining, _)| *remaining);

            let fired: Vec<TimerCallback> = due_ids
                .iter()
                .filter_map(|(_, id)| inner.timers.remove(*id))
                .map(|entry| entry.callback)
                .collect();

            for (_, entry) in inner.timers.iter_mut() {
                entry.remaining = entry.remaining.saturating_sub(dt);
            }
            fired
        };

        // Callbacks run unlocked; they may schedule or cancel freely.
        for callback in due {
            callback();
        }
    }

    /// Advance by the wall-clock time elapsed since the previous tick
    pub fn tick(&self) {
        let dt = {
            let mut inner = self.inner.lock().unwrap();
            let now = Instant::now();
            let dt = now - inner.last_tick;
            inner.last_tick = now;
            dt
        };
        self.advance(dt);
    }

    /// Number of timers still pending
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().timers.len()
    }

    /// Start ticking on a background thread
    ///
    /// The thread ticks at 120Hz until [`TickScheduler::stop_background`] or
    /// drop. If a wake callback is set it is invoked after every tick that
    /// fired at least one timer.
    pub fn start_background(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);
        let wake_callback = self.wake_callback.clone();

        // Time spent before the thread existed must not count as elapsed.
        inner.lock().unwrap().last_tick = Instant::now();

        self.thread_handle = Some(thread::spawn(move || {
            let frame_duration = Duration::from_micros(1_000_000 / 120);

            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();

                let due = {
                    let mut guard = inner.lock().unwrap();
                    let now = Instant::now();
                    let dt = now - guard.last_tick;
                    guard.last_tick = now;

                    let mut due_ids: Vec<(Duration, TimerId)> = guard
                        .timers
                        .iter()
                        .filter(|(_, entry)| entry.remaining <= dt)
                        .map(|(id, entry)| (entry.remaining, id))
                        .collect();
                    due_ids.sort_by_key(|(remaining, _)| *remaining);

                    let fired: Vec<TimerCallback> = due_ids
                        .iter()
                        .filter_map(|(_, id)| guard.timers.remove(*id))
                        .map(|entry| entry.callback)
                        .collect();

                    for (_, entry) in guard.timers.iter_mut() {
                        entry.remaining = entry.remaining.saturating_sub(dt);
                    }
                    fired
                };

                let fired_any = !due.is_empty();
                for callback in due {
                    callback();
                }

                if fired_any {
                    if let Some(ref callback) = wake_callback {
                        callback();
                    }
                }

                let elapsed = start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        }));
    }

    /// Stop the background thread
    pub fn stop_background(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        self.stop_flag.store(false, Ordering::Relaxed);
    }

    /// Check if the background thread is running
    pub fn is_background_running(&self) -> bool {
        self.thread_handle.is_some()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickScheduler {
    fn drop(&mut self) {
        self.stop_background();
    }
}

/// A weak handle to the tick scheduler
///
/// Passed to clocks that need to register timers. It does not keep the
/// scheduler alive; every operation no-ops once the scheduler is dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a one-shot timer
    ///
    /// Returns `None` if the scheduler has been dropped, in which case the
    /// timer would never have fired anyway.
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> Option<TimerId>
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            guard.timers.insert(TimerEntry {
                remaining: delay,
                callback: Box::new(callback),
            })
        })
    }

    /// Cancel a pending timer (idempotent)
    pub fn cancel(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().timers.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
