//! Veil Core Primitives
//!
//! This crate provides the timing-free foundations for the Veil component
//! toolkit:
//!
//! - **Phases**: the five-state visibility lifecycle of a togglable element
//! - **Config**: validated transition configuration (mount/unmount policy,
//!   appear-on-mount, timeout)
//! - **Callbacks**: the six-slot lifecycle hook record and its at-most-once
//!   dispatcher
//! - **Mount policy**: the pure decision of whether an element exists in
//!   output at all
//!
//! Nothing in this crate owns a timer or a thread. The actual transition
//! driving lives in `veil_transition`, which consumes these types.
//!
//! # Example
//!
//! ```rust
//! use veil_core::{element_present, Phase, TransitionConfig};
//!
//! let config = TransitionConfig::new()
//!     .mount_on_enter(true)
//!     .unmount_on_exit(true);
//!
//! // Before the first show the element does not exist in output.
//! assert!(!element_present(Phase::Unmounted, &config));
//! assert!(element_present(Phase::Entering, &config));
//! ```

pub mod callbacks;
pub mod config;
pub mod mount;
pub mod phase;

pub use callbacks::{CallbackDispatcher, Hook, TransitionCallbacks, TransitionHook};
pub use config::{ConfigError, TransitionConfig};
pub use mount::element_present;
pub use phase::Phase;
