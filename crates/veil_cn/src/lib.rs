//! # Veil Component Library (veil_cn)
//!
//! Themed, accessible components built over the Veil transition engine.
//!
//! ## Philosophy
//!
//! Components here are declarative composition: merge caller classes with the
//! theme-resolved prefix, associate labels with their controls, and emit
//! [`ElementNode`] render instructions for whatever presentation layer turns
//! them into real output. The one stateful component, the offcanvas panel,
//! delegates all of its timing to `veil_transition` and only maps phases to
//! classes and presence.
//!
//! - **Primitives**: `veil_core` provides phases, config, and mount policy
//! - **Timing**: `veil_transition` drives show/hide lifecycles
//! - **Theme**: `veil_theme` resolves per-component class-name prefixes
//! - **Components**: `veil_cn` composes the above into styled building blocks
//!
//! ## Example
//!
//! ```rust
//! use veil_cn::prelude::*;
//!
//! let node = cn::toolbar()
//!     .aria_label("Editing tools")
//!     .child(ElementNode::new("button").text("Bold"))
//!     .build();
//!
//! assert_eq!(node.attr("role"), Some("toolbar"));
//! assert!(node.classes().contains("btn-toolbar"));
//! ```

pub mod components;

pub use components::*;

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::floating_label::floating_label;
    pub use crate::components::form_group::form_group;
    pub use crate::components::offcanvas::offcanvas;
    pub use crate::components::toolbar::toolbar;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::element::{ClassList, ElementNode};
    pub use crate::components::floating_label::{floating_label, FloatingLabel};
    pub use crate::components::form_group::{form_group, FormGroup};
    pub use crate::components::offcanvas::{offcanvas, Offcanvas, OffcanvasBuilder};
    pub use crate::components::toolbar::{toolbar, Toolbar};
    // Re-export commonly needed theme and core types
    pub use veil_core::{Phase, TransitionCallbacks, TransitionConfig};
    pub use veil_theme::{PrefixToken, ThemeState};
}
