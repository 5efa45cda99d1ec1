//! Lifecycle callback record and dispatcher
//!
//! Callers register up to six hooks, one per transition point. The record is
//! a fixed ordered set of optional slots rather than a generic event emitter:
//! the fixed shape is what lets the dispatcher enforce ordering and
//! at-most-once delivery by construction.
//!
//! Hook pairs mirror the phase lifecycle: `before_*` fires as the transition
//! is accepted, `during_*` immediately after the phase has changed, and
//! `after_*` when the phase's clock completes. An interrupted phase never
//! fires its `after_*` hook.

use std::sync::Arc;

use crate::phase::Phase;

/// A registered lifecycle hook
///
/// Hooks receive the phase that was just established. They are always invoked
/// outside the controller's locks, so a hook may synchronously submit a new
/// visibility request.
pub type TransitionHook = Arc<dyn Fn(Phase) + Send + Sync>;

/// The six transition points a caller can hook
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hook {
    BeforeEnter,
    DuringEnter,
    AfterEnter,
    BeforeExit,
    DuringExit,
    AfterExit,
}

impl Hook {
    fn bit(self) -> u8 {
        match self {
            Hook::BeforeEnter => 1 << 0,
            Hook::DuringEnter => 1 << 1,
            Hook::AfterEnter => 1 << 2,
            Hook::BeforeExit => 1 << 3,
            Hook::DuringExit => 1 << 4,
            Hook::AfterExit => 1 << 5,
        }
    }
}

/// The six optional hook slots, in firing order
///
/// Absent slots are no-ops. Built with chained setters:
///
/// ```rust
/// use veil_core::TransitionCallbacks;
///
/// let callbacks = TransitionCallbacks::new()
///     .on_before_enter(|_| println!("showing"))
///     .on_after_exit(|_| println!("hidden"));
/// ```
#[derive(Clone, Default)]
pub struct TransitionCallbacks {
    before_enter: Option<TransitionHook>,
    during_enter: Option<TransitionHook>,
    after_enter: Option<TransitionHook>,
    before_exit: Option<TransitionHook>,
    during_exit: Option<TransitionHook>,
    after_exit: Option<TransitionHook>,
}

impl TransitionCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired before the element starts to show
    pub fn on_before_enter<F: Fn(Phase) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.before_enter = Some(Arc::new(f));
        self
    }

    /// Fired once the show transition is in flight
    pub fn on_during_enter<F: Fn(Phase) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.during_enter = Some(Arc::new(f));
        self
    }

    /// Fired after the element has fully shown
    pub fn on_after_enter<F: Fn(Phase) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.after_enter = Some(Arc::new(f));
        self
    }

    /// Fired before the element starts to hide
    pub fn on_before_exit<F: Fn(Phase) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.before_exit = Some(Arc::new(f));
        self
    }

    /// Fired once the hide transition is in flight
    pub fn on_during_exit<F: Fn(Phase) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.during_exit = Some(Arc::new(f));
        self
    }

    /// Fired after the element has fully hidden
    pub fn on_after_exit<F: Fn(Phase) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.after_exit = Some(Arc::new(f));
        self
    }

    fn slot(&self, hook: Hook) -> Option<&TransitionHook> {
        match hook {
            Hook::BeforeEnter => self.before_enter.as_ref(),
            Hook::DuringEnter => self.during_enter.as_ref(),
            Hook::AfterEnter => self.after_enter.as_ref(),
            Hook::BeforeExit => self.before_exit.as_ref(),
            Hook::DuringExit => self.during_exit.as_ref(),
            Hook::AfterExit => self.after_exit.as_ref(),
        }
    }
}

/// Enforces at-most-once hook delivery per phase cycle
///
/// A "cycle" starts each time a transition request is accepted; the fired
/// mask resets and each hook may be claimed once until the next cycle.
/// `claim` hands back the hook for the caller to invoke (outside any lock)
/// rather than invoking it itself.
#[derive(Clone, Default)]
pub struct CallbackDispatcher {
    callbacks: TransitionCallbacks,
    fired: u8,
}

impl CallbackDispatcher {
    pub fn new(callbacks: TransitionCallbacks) -> Self {
        Self { callbacks, fired: 0 }
    }

    /// Start a new phase cycle, allowing each hook to fire once more
    pub fn begin_cycle(&mut self) {
        self.fired = 0;
    }

    /// Claim a hook for firing
    ///
    /// Returns the hook on first claim in the current cycle, `None` if the
    /// hook already fired this cycle or no handler is registered. Claiming
    /// marks the hook fired either way, so duplicate completion signals for
    /// the same cycle stay silent.
    pub fn claim(&mut self, hook: Hook) -> Option<TransitionHook> {
        let bit = hook.bit();
        if self.fired & bit != 0 {
            tracing::trace!(?hook, "hook already fired this cycle, ignoring");
            return None;
        }
        self.fired |= bit;
        self.callbacks.slot(hook).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, TransitionCallbacks) {
        let log: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));
        let callbacks = TransitionCallbacks::new()
            .on_before_enter({
                let log = log.clone();
                move |_| log.lock().unwrap().push("before_enter")
            })
            .on_after_enter({
                let log = log.clone();
                move |_| log.lock().unwrap().push("after_enter")
            });
        (log, callbacks)
    }

    #[test]
    fn test_claim_at_most_once_per_cycle() {
        let (log, callbacks) = recorder();
        let mut dispatcher = CallbackDispatcher::new(callbacks);

        dispatcher.begin_cycle();
        if let Some(hook) = dispatcher.claim(Hook::AfterEnter) {
            hook(Phase::Entered);
        }
        // Second completion in the same cycle is silent.
        assert!(dispatcher.claim(Hook::AfterEnter).is_none());
        assert_eq!(*log.lock().unwrap(), vec!["after_enter"]);
    }

    #[test]
    fn test_new_cycle_resets() {
        let (log, callbacks) = recorder();
        let mut dispatcher = CallbackDispatcher::new(callbacks);

        dispatcher.begin_cycle();
        dispatcher.claim(Hook::BeforeEnter).unwrap()(Phase::Entering);
        dispatcher.begin_cycle();
        dispatcher.claim(Hook::BeforeEnter).unwrap()(Phase::Entering);
        assert_eq!(*log.lock().unwrap(), vec!["before_enter", "before_enter"]);
    }

    #[test]
    fn test_unregistered_slot_is_noop_but_still_marked() {
        let (_, callbacks) = recorder();
        let mut dispatcher = CallbackDispatcher::new(callbacks);

        dispatcher.begin_cycle();
        // No during_enter handler registered.
        assert!(dispatcher.claim(Hook::DuringEnter).is_none());
        // Still counts as fired for this cycle.
        assert!(dispatcher.claim(Hook::DuringEnter).is_none());
    }
}
