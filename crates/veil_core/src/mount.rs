//! Mount policy
//!
//! The pure decision of whether the controlled element exists in output at
//! all, as a function of the current phase and the two policy flags. The
//! controller mutates phases; this module only reads them.

use crate::config::TransitionConfig;
use crate::phase::Phase;

/// Whether the element should be present in output
///
/// Without either policy flag the element always exists and the phase only
/// affects styling. With `mount_on_enter` the element is absent until the
/// first show request (phase `Unmounted`). With `unmount_on_exit` the element
/// is absent once it has fully hidden after having been shown; an element
/// that starts at `Exited` and was never shown stays present.
pub fn element_present(phase: Phase, config: &TransitionConfig) -> bool {
    match phase {
        Phase::Unmounted => false,
        // With mount_on_enter, a hidden element that was never shown sits at
        // Unmounted, so Exited implies the element has been shown at least
        // once and unmount_on_exit applies. Without mount_on_enter, Exited
        // may simply mean "never shown" and the element stays in output.
        Phase::Exited => !(config.unmounts_on_exit() && config.mounts_on_enter()),
        Phase::Entering | Phase::Entered | Phase::Exiting => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_present_without_flags() {
        let config = TransitionConfig::new();
        for phase in [
            Phase::Exited,
            Phase::Entering,
            Phase::Entered,
            Phase::Exiting,
        ] {
            assert!(element_present(phase, &config), "{phase:?}");
        }
    }

    #[test]
    fn test_unmounted_is_always_absent() {
        let config = TransitionConfig::new();
        assert!(!element_present(Phase::Unmounted, &config));
    }

    #[test]
    fn test_exited_with_unmount_on_exit_only_stays_present() {
        // Never shown: the controller keeps the element at Exited, and it
        // remains (invisibly) in output.
        let config = TransitionConfig::new().unmount_on_exit(true);
        assert!(element_present(Phase::Exited, &config));
    }

    #[test]
    fn test_exited_with_both_flags_is_absent() {
        let config = TransitionConfig::new()
            .mount_on_enter(true)
            .unmount_on_exit(true);
        assert!(!element_present(Phase::Exited, &config));
    }
}
