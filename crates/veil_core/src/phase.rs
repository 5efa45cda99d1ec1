//! Visibility lifecycle phases
//!
//! A togglable element is always in exactly one of five phases. The two
//! stable hidden phases (`Unmounted`, `Exited`) are the only ones in which
//! the element may be absent from output; the three remaining phases always
//! imply the element is present.

/// Lifecycle phase of a togglable element
///
/// Transitions between phases are driven by `veil_transition`'s controller:
/// `Unmounted`/`Exited → Entering → Entered` on show, and
/// `Entered → Exiting → Exited` (or `Unmounted`) on hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Element does not exist in output yet (mount-on-enter before first show)
    Unmounted,
    /// Element is fully hidden but may still exist in output
    Exited,
    /// Show transition is in flight
    Entering,
    /// Element is fully shown
    Entered,
    /// Hide transition is in flight
    Exiting,
}

impl Phase {
    /// Whether a transition is currently in flight
    pub fn is_transitioning(self) -> bool {
        matches!(self, Phase::Entering | Phase::Exiting)
    }

    /// Whether this is a stable phase (no clock may be armed)
    pub fn is_stable(self) -> bool {
        !self.is_transitioning()
    }

    /// Whether the element is logically visible (shown or becoming shown)
    pub fn is_visible(self) -> bool {
        matches!(self, Phase::Entering | Phase::Entered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitioning_phases() {
        assert!(Phase::Entering.is_transitioning());
        assert!(Phase::Exiting.is_transitioning());
        assert!(!Phase::Entered.is_transitioning());
        assert!(!Phase::Exited.is_transitioning());
        assert!(!Phase::Unmounted.is_transitioning());
    }

    #[test]
    fn test_visible_phases() {
        assert!(Phase::Entering.is_visible());
        assert!(Phase::Entered.is_visible());
        assert!(!Phase::Exiting.is_visible());
        assert!(!Phase::Exited.is_visible());
        assert!(!Phase::Unmounted.is_visible());
    }
}
