//! Phase clock
//!
//! Decides when an in-flight phase is complete by racing two optional
//! completion sources: a fixed fallback timer and the element's external
//! end-of-transition signal. Whichever fires first wins; the loser is
//! canceled, and completion is reported exactly once per arm.
//!
//! A signal alone is unsafe (it may never arrive: element scrolled out of
//! view, zero-duration styling, coalesced events) and a timer alone may
//! finish before the real transition does, so racing both with first-wins is
//! the default policy. With neither source configured the clock resolves
//! immediately rather than letting a phase hang.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::notifier::{SubscriptionId, TransitionEndNotifier};
use crate::scheduler::{SchedulerHandle, TimerId};

/// Completion callback invoked when the armed phase is done
pub type ClockCallback = Arc<dyn Fn() + Send + Sync>;

/// Outcome of arming the clock
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Armed {
    /// At least one completion source is registered; the callback fires later
    Pending,
    /// No source was configured; the caller must complete synchronously
    Immediate,
}

struct ClockState {
    /// Bumped on every cancel; a completion from an older generation is stale
    generation: u64,
    /// Latched once per arm so the losing source stays silent
    resolved: bool,
    timer: Option<TimerId>,
    subscription: Option<SubscriptionId>,
}

/// Races a fallback timer against an external end-of-transition signal
///
/// Owns at most one pending timer and at most one subscription at a time;
/// arming implicitly cancels whatever was armed before, so two phases can
/// never have live clocks on the same instance.
pub struct PhaseClock {
    scheduler: SchedulerHandle,
    notifier: Option<TransitionEndNotifier>,
    state: Arc<Mutex<ClockState>>,
}

/// Shared completion path for both sources
///
/// `fire` resolves the race: the first caller latches the state, releases
/// the losing source, and reports completion; every later caller (the losing
/// source, duplicate signals, anything stale) returns without effect.
#[derive(Clone)]
struct Completion {
    state: Arc<Mutex<ClockState>>,
    scheduler: SchedulerHandle,
    notifier: Option<TransitionEndNotifier>,
    generation: u64,
    on_complete: ClockCallback,
}

impl Completion {
    fn fire(&self) {
        let (timer, subscription) = {
            let mut state = self.state.lock().unwrap();
            if state.generation != self.generation || state.resolved {
                tracing::trace!(
                    generation = self.generation,
                    "stale or duplicate clock completion discarded"
                );
                return;
            }
            state.resolved = true;
            (state.timer.take(), state.subscription.take())
        };

        // Release the losing source before reporting. Canceling the source
        // that just fired is a harmless no-op.
        if let Some(id) = timer {
            self.scheduler.cancel(id);
        }
        if let (Some(id), Some(notifier)) = (subscription, &self.notifier) {
            notifier.unsubscribe(id);
        }

        (self.on_complete)();
    }
}

impl PhaseClock {
    /// Create a clock over a timer source and an optional per-element signal
    pub fn new(scheduler: SchedulerHandle, notifier: Option<TransitionEndNotifier>) -> Self {
        Self {
            scheduler,
            notifier,
            state: Arc::new(Mutex::new(ClockState {
                generation: 0,
                resolved: true,
                timer: None,
                subscription: None,
            })),
        }
    }

    /// Arm the clock for a new phase
    ///
    /// Cancels any previous arm, then registers the configured sources. If
    /// neither a timeout nor a usable external signal is available the clock
    /// cannot fire later, and the caller must treat the phase as complete
    /// right away ([`Armed::Immediate`]).
    pub fn arm(
        &self,
        timeout: Option<Duration>,
        use_external_signal: bool,
        on_complete: ClockCallback,
    ) -> Armed {
        self.cancel();

        let mut state = self.state.lock().unwrap();
        state.resolved = false;
        let completion = Completion {
            state: Arc::clone(&self.state),
            scheduler: self.scheduler.clone(),
            notifier: self.notifier.clone(),
            generation: state.generation,
            on_complete,
        };

        if use_external_signal {
            if let Some(notifier) = &self.notifier {
                let completion = completion.clone();
                state.subscription = Some(notifier.subscribe(move || completion.fire()));
            }
        }
        if let Some(delay) = timeout {
            // A dead scheduler means the timer would never fire; treat the
            // source as unconfigured instead of hanging the phase.
            let completion = completion.clone();
            state.timer = self.scheduler.schedule(delay, move || completion.fire());
        }

        if state.timer.is_none() && state.subscription.is_none() {
            state.resolved = true;
            tracing::trace!("clock armed with no sources, resolving immediately");
            Armed::Immediate
        } else {
            tracing::trace!(
                has_timer = state.timer.is_some(),
                has_signal = state.subscription.is_some(),
                "clock armed"
            );
            Armed::Pending
        }
    }

    /// Cancel whatever is armed without reporting completion
    ///
    /// Releases both the timer and the subscription, and invalidates any
    /// completion already in flight. Idempotent, and safe to call on a
    /// resolved or never-armed clock.
    pub fn cancel(&self) {
        let (timer, subscription) = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.resolved = true;
            (state.timer.take(), state.subscription.take())
        };

        if let Some(id) = timer {
            self.scheduler.cancel(id);
        }
        if let (Some(id), Some(notifier)) = (subscription, &self.notifier) {
            notifier.unsubscribe(id);
        }
    }

    /// Whether an armed phase is still waiting on a completion source
    pub fn is_pending(&self) -> bool {
        let state = self.state.lock().unwrap();
        !state.resolved && (state.timer.is_some() || state.subscription.is_some())
    }
}

impl Drop for PhaseClock {
    fn drop(&mut self) {
        self.cancel();
    }
}
