//! Button toolbar component
//!
//! Groups related buttons (or button groups) under a single `toolbar` role.
//! The default role is generally correct; an `aria-label` or
//! `aria-labelledby` is recommended alongside it.
//!
//! # Example
//!
//! ```rust
//! use veil_cn::prelude::*;
//!
//! let node = cn::toolbar()
//!     .aria_label("Formatting")
//!     .child(ElementNode::new("button").text("Bold"))
//!     .build();
//! assert!(node.classes().contains("btn-toolbar"));
//! ```

use veil_theme::{resolve_prefix, PrefixToken};

use crate::components::element::ElementNode;

/// Styled button toolbar
pub struct Toolbar {
    prefix: Option<String>,
    class: Vec<String>,
    role: String,
    aria_label: Option<String>,
    aria_labelledby: Option<String>,
    children: Vec<ElementNode>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self {
            prefix: None,
            class: Vec::new(),
            role: "toolbar".to_string(),
            aria_label: None,
            aria_labelledby: None,
            children: Vec::new(),
        }
    }

    /// Override the theme-resolved class-name prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add caller class names
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    /// Override the ARIA role
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set an accessible name for the toolbar
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Reference an external element as the toolbar's label
    pub fn aria_labelledby(mut self, id: impl Into<String>) -> Self {
        self.aria_labelledby = Some(id.into());
        self
    }

    /// Append a child node
    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Produce the render instructions
    pub fn build(self) -> ElementNode {
        let prefix = resolve_prefix(self.prefix.as_deref(), PrefixToken::ButtonToolbar);

        let mut node = ElementNode::new("div");
        for class in &self.class {
            node.classes_mut().add(class);
        }
        node.classes_mut().add(&prefix);
        node.set_attr("role", &self.role);
        if let Some(label) = &self.aria_label {
            node.set_attr("aria-label", label);
        }
        if let Some(id) = &self.aria_labelledby {
            node.set_attr("aria-labelledby", id);
        }

        self.children
            .into_iter()
            .fold(node, |node, child| node.child(child))
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a button toolbar
pub fn toolbar() -> Toolbar {
    Toolbar::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        let node = toolbar().build();
        assert_eq!(node.tag(), "div");
        assert_eq!(node.attr("role"), Some("toolbar"));
        assert_eq!(node.classes().to_attr(), "btn-toolbar");
    }

    #[test]
    fn test_caller_classes_come_first() {
        let node = toolbar().class("mb-3").build();
        assert_eq!(node.classes().to_attr(), "mb-3 btn-toolbar");
    }

    #[test]
    fn test_role_override_and_aria() {
        let node = toolbar()
            .role("group")
            .aria_label("Pagination tools")
            .build();
        assert_eq!(node.attr("role"), Some("group"));
        assert_eq!(node.attr("aria-label"), Some("Pagination tools"));
    }

    #[test]
    fn test_explicit_prefix() {
        let node = toolbar().prefix("tools").build();
        assert_eq!(node.classes().to_attr(), "tools");
    }
}
