//! Veil Transition Engine
//!
//! Drives a togglable element through its show/hide lifecycle:
//!
//! - **TickScheduler**: fixed-delay timer registry, ticked manually or from
//!   an optional background thread
//! - **TransitionEndNotifier**: per-element "transition finished" signal
//!   source, fed by whatever platform layer observes the real animation
//! - **PhaseClock**: races one timer against one external signal, first
//!   wins, the loser is canceled, completion fires exactly once per arm
//! - **TransitionController**: the visibility state machine that owns the
//!   phase, the clock, and the lifecycle callbacks of one element instance
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use veil_core::{Phase, TransitionCallbacks, TransitionConfig};
//! use veil_transition::{TickScheduler, TransitionController};
//!
//! let scheduler = TickScheduler::new();
//! let config = TransitionConfig::new().timeout(Duration::from_millis(150));
//! let controller = TransitionController::new(
//!     config,
//!     TransitionCallbacks::new(),
//!     scheduler.handle(),
//!     None,
//!     false,
//! );
//!
//! controller.submit(true);
//! assert_eq!(controller.phase(), Phase::Entering);
//!
//! scheduler.advance(Duration::from_millis(150));
//! assert_eq!(controller.phase(), Phase::Entered);
//! ```

pub mod clock;
pub mod controller;
pub mod notifier;
pub mod scheduler;

pub use clock::{Armed, PhaseClock};
pub use controller::TransitionController;
pub use notifier::{SubscriptionId, TransitionEndNotifier};
pub use scheduler::{SchedulerHandle, TickScheduler, TimerId, WakeCallback};
