//! Transition configuration
//!
//! Builder-style configuration for a transition controller. Validation
//! happens here, at configuration time; the controller itself never rejects
//! input at runtime.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use veil_core::TransitionConfig;
//!
//! let config = TransitionConfig::new()
//!     .mount_on_enter(true)
//!     .unmount_on_exit(true)
//!     .timeout(Duration::from_millis(300));
//! ```

use std::time::Duration;

/// Configuration error raised by validating setters
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A timeout below zero milliseconds was supplied
    #[error("transition timeout must not be negative (got {0}ms)")]
    NegativeTimeout(i64),
}

/// Configuration flags for a transition controller
///
/// Defaults match the untuned component: always mounted, never unmounted,
/// no appear-on-mount animation, no fallback timeout.
#[derive(Clone, Debug, Default)]
pub struct TransitionConfig {
    mount_on_enter: bool,
    unmount_on_exit: bool,
    appear: bool,
    timeout: Option<Duration>,
}

impl TransitionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until the first show request to mount the element
    pub fn mount_on_enter(mut self, enabled: bool) -> Self {
        self.mount_on_enter = enabled;
        self
    }

    /// Unmount the element once it has fully hidden
    pub fn unmount_on_exit(mut self, enabled: bool) -> Self {
        self.unmount_on_exit = enabled;
        self
    }

    /// Animate the very first entry if the element starts shown
    pub fn appear(mut self, enabled: bool) -> Self {
        self.appear = enabled;
        self
    }

    /// Fallback duration after which an in-flight phase completes, even if
    /// the external end-of-transition signal never arrives
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validating millisecond variant of [`TransitionConfig::timeout`]
    ///
    /// Rejects negative values; callers passing durations through untyped
    /// layers should prefer this over converting themselves.
    pub fn timeout_ms(mut self, ms: i64) -> Result<Self, ConfigError> {
        if ms < 0 {
            return Err(ConfigError::NegativeTimeout(ms));
        }
        self.timeout = Some(Duration::from_millis(ms as u64));
        Ok(self)
    }

    pub fn mounts_on_enter(&self) -> bool {
        self.mount_on_enter
    }

    pub fn unmounts_on_exit(&self) -> bool {
        self.unmount_on_exit
    }

    pub fn appears(&self) -> bool {
        self.appear
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }
}
