//! Floating label component
//!
//! A form group whose label floats over the control. Structurally it is the
//! same wrapper as [`FormGroup`](crate::components::form_group::FormGroup)
//! with the `form-floating` prefix: the control comes first, the label after,
//! and the two stay associated through the control id. The id is optional;
//! without one the control and label render with no `id`/`for` pair.

use veil_theme::{resolve_prefix, PrefixToken};

use crate::components::element::ElementNode;

/// Form group variant with an overlaid label
pub struct FloatingLabel {
    prefix: Option<String>,
    class: Vec<String>,
    control_id: Option<String>,
    control: Option<ElementNode>,
    label: String,
}

impl FloatingLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            prefix: None,
            class: Vec::new(),
            control_id: None,
            control: None,
            label: label.into(),
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

    /// Set the id shared by the control and the label's `for` attribute
    pub fn control_id(mut self, id: impl Into<String>) -> Self {
        self.control_id = Some(id.into());
        self
    }

    /// Set the control node the label floats over
    pub fn control(mut self, control: ElementNode) -> Self {
        self.control = Some(control);
        self
    }

    /// Produce the render instructions
    pub fn build(self) -> ElementNode {
        let prefix = resolve_prefix(self.prefix.as_deref(), PrefixToken::FormFloating);

        let mut node = ElementNode::new("div");
        for class in &self.class {
            node.classes_mut().add(class);
        }
        node.classes_mut().add(&prefix);

        if let Some(mut control) = self.control {
            if let Some(id) = &self.control_id {
                control.set_attr("id", id);
            }
            node = node.child(control);
        }
        let mut label = ElementNode::new("label").text(self.label);
        if let Some(id) = &self.control_id {
            label.set_attr("for", id);
        }
        node.child(label)
    }
}

/// Create a floating label wrapper around a form control
pub fn floating_label(label: impl Into<String>) -> FloatingLabel {
    FloatingLabel::new(label)
}
