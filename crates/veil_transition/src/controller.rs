//! Transition controller
//!
//! The visibility state machine of one togglable element. Owns the current
//! [`Phase`], one [`PhaseClock`], and the caller's lifecycle hooks, and is
//! the only thing that mutates any of them.
//!
//! The machine is event-driven and never blocks: [`TransitionController::submit`]
//! applies a visibility request synchronously, and clock completions advance
//! the phase when they report back. A request that reverses direction while a
//! phase is in flight cancels that phase's clock without firing its "after"
//! hook and immediately starts the opposite transition.
//!
//! Hooks always run outside the controller's locks, so a hook may submit a
//! new request reentrantly; when it does, the rest of the interrupted
//! transition's hook batch and clock are abandoned (the reentrant request has
//! already superseded them).

use std::sync::{Arc, Mutex};

use veil_core::{
    element_present, CallbackDispatcher, Hook, Phase, TransitionCallbacks, TransitionConfig,
    TransitionHook,
};

use crate::clock::{Armed, ClockCallback, PhaseClock};
use crate::notifier::TransitionEndNotifier;
use crate::scheduler::SchedulerHandle;

struct ControllerState {
    phase: Phase,
    dispatcher: CallbackDispatcher,
    /// Bumped on every accepted request; a clock armed under an older cycle
    /// can only ever resolve that cycle's phase, never a later one.
    cycle: u64,
}

struct ControllerShared {
    config: TransitionConfig,
    use_external_signal: bool,
    clock: PhaseClock,
    state: Mutex<ControllerState>,
}

/// A transition plan computed under the state lock, executed outside it
struct Plan {
    cycle: u64,
    phase: Phase,
    hooks: Vec<TransitionHook>,
}

impl ControllerShared {
    /// Clock completion for the given cycle
    fn complete(self: &Arc<Self>, cycle: u64) {
        let (phase, hook) = {
            let mut state = self.state.lock().unwrap();
            if state.cycle != cycle {
                tracing::trace!(cycle, current = state.cycle, "stale completion ignored");
                return;
            }
            let (next, slot) = match state.phase {
                Phase::Entering => (Phase::Entered, Hook::AfterEnter),
                Phase::Exiting => {
                    let next = if self.config.unmounts_on_exit() {
                        Phase::Unmounted
                    } else {
                        Phase::Exited
                    };
                    (next, Hook::AfterExit)
                }
                // A completion can only ever belong to an in-flight phase;
                // anything else is a designed no-op.
                _ => return,
            };
            tracing::debug!(from = ?state.phase, to = ?next, cycle, "transition complete");
            state.phase = next;
            (next, state.dispatcher.claim(slot))
        };

        if let Some(hook) = hook {
            hook(phase);
        }
    }
}

/// Transition-driven visibility controller for one element instance
///
/// Created by the owning component (see `veil_cn::offcanvas`); destroyed when
/// that component is torn down. Dropping the controller cancels whatever is
/// armed, so no timer or signal subscription outlives it.
pub struct TransitionController {
    shared: Arc<ControllerShared>,
}

impl TransitionController {
    /// Create a controller for an element with the given initial visibility
    ///
    /// The initial phase is `Unmounted` when `mount_on_enter` is set and the
    /// element starts hidden, and otherwise the stable phase matching the
    /// initial visibility. An initially shown element only animates its first
    /// entry when `appear` is set; without it the element is simply present,
    /// with no hooks fired.
    pub fn new(
        config: TransitionConfig,
        callbacks: TransitionCallbacks,
        scheduler: SchedulerHandle,
        notifier: Option<TransitionEndNotifier>,
        initially_visible: bool,
    ) -> Self {
        let appear = config.appears();
        let initial = if initially_visible {
            if appear {
                Phase::Exited
            } else {
                Phase::Entered
            }
        } else if config.mounts_on_enter() {
            Phase::Unmounted
        } else {
            Phase::Exited
        };

        let controller = Self {
            shared: Arc::new(ControllerShared {
                use_external_signal: notifier.is_some(),
                clock: PhaseClock::new(scheduler, notifier),
                config,
                state: Mutex::new(ControllerState {
                    phase: initial,
                    dispatcher: CallbackDispatcher::new(callbacks),
                    cycle: 0,
                }),
            }),
        };
        tracing::debug!(phase = ?initial, "controller created");

        if initially_visible && appear {
            controller.submit(true);
        }
        controller
    }

    /// Apply a visibility request
    ///
    /// Requests are applied immediately, in arrival order, with no queueing;
    /// a request that reverses an in-flight phase interrupts it. Requests
    /// matching the current direction are idempotent (no phase change, no
    /// hooks). A show from any hidden phase, `Unmounted` included, always
    /// runs the full enter transition; `appear` is a construction-time
    /// concern and never suppresses a requested transition.
    pub fn submit(&self, target_visible: bool) {
        let shared = &self.shared;
        let plan = {
            let mut state = shared.state.lock().unwrap();
            match (state.phase, target_visible) {
                // Already at (or heading to) the requested end state.
                (Phase::Entering | Phase::Entered, true) => None,
                (Phase::Exiting | Phase::Exited | Phase::Unmounted, false) => None,
                (Phase::Unmounted | Phase::Exited | Phase::Exiting, true) => Some(
                    Self::begin_transition(&mut state, Phase::Entering),
                ),
                (Phase::Entering | Phase::Entered, false) => Some(
                    Self::begin_transition(&mut state, Phase::Exiting),
                ),
            }
        };

        let Some(plan) = plan else { return };

        // Interrupt policy: the superseded clock is canceled before any hook
        // runs, so it can never resolve the new phase.
        shared.clock.cancel();

        for hook in plan.hooks {
            if self.current_cycle() != plan.cycle {
                return; // superseded by a reentrant request from a hook
            }
            hook(plan.phase);
        }
        if self.current_cycle() != plan.cycle {
            return;
        }

        let on_complete: ClockCallback = {
            let weak = Arc::downgrade(shared);
            let cycle = plan.cycle;
            Arc::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.complete(cycle);
                }
            })
        };
        let armed = shared.clock.arm(
            shared.config.timeout_duration(),
            shared.use_external_signal,
            on_complete,
        );
        if armed == Armed::Immediate {
            shared.complete(plan.cycle);
        }
    }

    /// Start a transition under the state lock, claiming its leading hooks
    fn begin_transition(state: &mut ControllerState, next: Phase) -> Plan {
        let from = state.phase;
        state.phase = next;
        state.cycle += 1;
        state.dispatcher.begin_cycle();

        let leading = if next == Phase::Entering {
            [Hook::BeforeEnter, Hook::DuringEnter]
        } else {
            [Hook::BeforeExit, Hook::DuringExit]
        };
        let hooks = leading
            .into_iter()
            .filter_map(|slot| state.dispatcher.claim(slot))
            .collect();

        tracing::debug!(?from, to = ?next, cycle = state.cycle, "transition started");
        Plan {
            cycle: state.cycle,
            phase: next,
            hooks,
        }
    }

    fn current_cycle(&self) -> u64 {
        self.shared.state.lock().unwrap().cycle
    }

    /// The current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.shared.state.lock().unwrap().phase
    }

    /// Whether the element currently exists in output (mount policy applied)
    pub fn is_present(&self) -> bool {
        element_present(self.phase(), &self.shared.config)
    }

    /// Whether a show or hide transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.phase().is_transitioning()
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.shared.config
    }
}
