//! Offcanvas panel component
//!
//! A sliding side panel driven by a [`TransitionController`]. The component
//! owns the controller; callers flip visibility with [`Offcanvas::set_visible`]
//! and ask for render instructions with [`Offcanvas::render`], which returns
//! `None` while the mount policy keeps the panel out of the tree.
//!
//! Class decoration follows the controller's phase: the panel carries
//! `{prefix}-toggling` while a transition is in flight and `show` from the
//! moment an entry starts until the next exit starts.
//!
//! # Example
//!
//! ```rust
//! use veil_cn::prelude::*;
//! use veil_transition::TickScheduler;
//!
//! let scheduler = TickScheduler::new();
//! let panel = cn::offcanvas()
//!     .mount_on_enter(true)
//!     .build(scheduler.handle());
//!
//! assert!(panel.render(ElementNode::new("div")).is_none());
//! panel.set_visible(true);
//! ```

use std::time::Duration;

use veil_core::{Phase, TransitionCallbacks, TransitionConfig};
use veil_theme::{resolve_prefix, PrefixToken};
use veil_transition::{SchedulerHandle, TransitionController, TransitionEndNotifier};

use crate::components::element::ElementNode;

/// Builder for [`Offcanvas`]
pub struct OffcanvasBuilder {
    prefix: Option<String>,
    class: Vec<String>,
    config: TransitionConfig,
    callbacks: TransitionCallbacks,
    notifier: Option<TransitionEndNotifier>,
    visible: bool,
}

impl OffcanvasBuilder {
    pub fn new() -> Self {
        Self {
            prefix: None,
            class: Vec::new(),
            config: TransitionConfig::new(),
            callbacks: TransitionCallbacks::new(),
            notifier: None,
            visible: false,
        }
    }

    /// Override the theme-resolved class-name prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add caller class names, merged into the rendered panel
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    /// Defer mounting until the first show
    pub fn mount_on_enter(mut self, mount: bool) -> Self {
        self.config = self.config.mount_on_enter(mount);
        self
    }

    /// Unmount the panel once an exit completes
    pub fn unmount_on_exit(mut self, unmount: bool) -> Self {
        self.config = self.config.unmount_on_exit(unmount);
        self
    }

    /// Animate the first entry of an initially visible panel
    pub fn appear(mut self, appear: bool) -> Self {
        self.config = self.config.appear(appear);
        self
    }

    /// Fallback timeout for a transition phase
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Lifecycle hooks forwarded to the controller
    pub fn callbacks(mut self, callbacks: TransitionCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// External end signal; when set, transitions race the signal against the
    /// timeout instead of waiting on the timeout alone
    pub fn notifier(mut self, notifier: TransitionEndNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Start shown rather than hidden
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Build the panel, wiring its controller to the given scheduler
    pub fn build(self, scheduler: SchedulerHandle) -> Offcanvas {
        let prefix = resolve_prefix(self.prefix.as_deref(), PrefixToken::Offcanvas);
        let controller = TransitionController::new(
            self.config,
            self.callbacks,
            scheduler,
            self.notifier,
            self.visible,
        );
        Offcanvas {
            prefix,
            class: self.class,
            controller,
        }
    }
}

impl Default for OffcanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Sliding panel with transition-managed visibility
pub struct Offcanvas {
    prefix: String,
    class: Vec<String>,
    controller: TransitionController,
}

impl Offcanvas {
    /// Request a visibility change
    pub fn set_visible(&self, visible: bool) {
        tracing::debug!(visible, phase = ?self.controller.phase(), "offcanvas visibility request");
        self.controller.submit(visible);
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    /// Whether the panel is currently in the tree
    pub fn is_present(&self) -> bool {
        self.controller.is_present()
    }

    /// Decorate `content` as the panel for the current phase
    ///
    /// Returns `None` when the mount policy keeps the panel out of the tree.
    pub fn render(&self, mut content: ElementNode) -> Option<ElementNode> {
        if !self.controller.is_present() {
            return None;
        }
        let phase = self.controller.phase();

        for class in &self.class {
            content.classes_mut().add(class);
        }
        content.classes_mut().add(&self.prefix);
        content
            .classes_mut()
            .add_if(phase.is_transitioning(), &format!("{}-toggling", self.prefix));
        content.classes_mut().add_if(
            matches!(phase, Phase::Entering | Phase::Entered),
            "show",
        );
        Some(content)
    }
}

/// Create an offcanvas panel builder
pub fn offcanvas() -> OffcanvasBuilder {
    OffcanvasBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use veil_transition::TickScheduler;

    fn classes(panel: &Offcanvas) -> String {
        panel
            .render(ElementNode::new("div"))
            .map(|node| node.classes().to_attr())
            .unwrap_or_default()
    }

    #[test]
    fn test_hidden_panel_renders_without_show() {
        let scheduler = TickScheduler::new();
        let panel = offcanvas().build(scheduler.handle());
        assert_eq!(panel.phase(), Phase::Exited);
        assert_eq!(classes(&panel), "offcanvas");
    }

    #[test]
    fn test_mount_on_enter_starts_absent() {
        let scheduler = TickScheduler::new();
        let panel = offcanvas().mount_on_enter(true).build(scheduler.handle());
        assert!(panel.render(ElementNode::new("div")).is_none());
    }

    #[test]
    fn test_class_matrix_across_a_show_hide_cycle() {
        let scheduler = TickScheduler::new();
        let panel = offcanvas()
            .class("text-bg-dark")
            .timeout(Duration::from_millis(300))
            .build(scheduler.handle());

        panel.set_visible(true);
        assert_eq!(panel.phase(), Phase::Entering);
        assert_eq!(classes(&panel), "text-bg-dark offcanvas offcanvas-toggling show");

        scheduler.advance(Duration::from_millis(300));
        assert_eq!(panel.phase(), Phase::Entered);
        assert_eq!(classes(&panel), "text-bg-dark offcanvas show");

        panel.set_visible(false);
        assert_eq!(panel.phase(), Phase::Exiting);
        assert_eq!(classes(&panel), "text-bg-dark offcanvas offcanvas-toggling");

        scheduler.advance(Duration::from_millis(300));
        assert_eq!(panel.phase(), Phase::Exited);
        assert_eq!(classes(&panel), "text-bg-dark offcanvas");
    }

    #[test]
    fn test_unmount_on_exit_removes_panel_after_hide() {
        let scheduler = TickScheduler::new();
        let panel = offcanvas()
            .mount_on_enter(true)
            .unmount_on_exit(true)
            .timeout(Duration::from_millis(100))
            .build(scheduler.handle());

        panel.set_visible(true);
        assert!(panel.is_present());
        scheduler.advance(Duration::from_millis(100));

        panel.set_visible(false);
        scheduler.advance(Duration::from_millis(100));
        assert_eq!(panel.phase(), Phase::Unmounted);
        assert!(panel.render(ElementNode::new("div")).is_none());

        // Showing again animates back in rather than snapping to Entered.
        panel.set_visible(true);
        assert_eq!(panel.phase(), Phase::Entering);
        assert_eq!(classes(&panel), "offcanvas offcanvas-toggling show");
    }

    #[test]
    fn test_prefix_override_flows_into_toggling_class() {
        let scheduler = TickScheduler::new();
        let panel = offcanvas()
            .prefix("drawer")
            .timeout(Duration::from_millis(50))
            .build(scheduler.handle());

        panel.set_visible(true);
        assert_eq!(classes(&panel), "drawer drawer-toggling show");
    }

    #[test]
    fn test_initially_visible_panel_is_shown_without_animation() {
        let scheduler = TickScheduler::new();
        let panel = offcanvas().visible(true).build(scheduler.handle());
        assert_eq!(panel.phase(), Phase::Entered);
        assert_eq!(classes(&panel), "offcanvas show");
    }
}
