//! Form group component
//!
//! Associates a form control with its label by a shared id: the control
//! receives `id`, the label (if any) receives `for`. The wrapper carries the
//! theme-resolved `form-group` class so downstream styling can target it.

use veil_theme::{resolve_prefix, PrefixToken};

use crate::components::element::ElementNode;

/// Labeled form control wrapper
pub struct FormGroup {
    prefix: Option<String>,
    class: Vec<String>,
    control_id: String,
    control: Option<ElementNode>,
    label: Option<String>,
}

impl FormGroup {
    pub fn new(control_id: impl Into<String>) -> Self {
        Self {
            prefix: None,
            class: Vec::new(),
            control_id: control_id.into(),
            control: None,
            label: None,
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

    /// Set the control node. Its `id` is stamped from the group's control id.
    pub fn control(mut self, mut control: ElementNode) -> Self {
        control.set_attr("id", &self.control_id);
        self.control = Some(control);
        self
    }

    /// Set the label text. The label node is rendered after the control with
    /// its `for` attribute pointing at the control.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn control_id(&self) -> &str {
        &self.control_id
    }

    /// Produce the render instructions
    pub fn build(self) -> ElementNode {
        let prefix = resolve_prefix(self.prefix.as_deref(), PrefixToken::FormGroup);

        let mut node = ElementNode::new("div");
        for class in &self.class {
            node.classes_mut().add(class);
        }
        node.classes_mut().add(&prefix);

        if let Some(control) = self.control {
            node = node.child(control);
        }
        if let Some(label) = self.label {
            let label_node = ElementNode::new("label")
                .attribute("for", &self.control_id)
                .text(label);
            node = node.child(label_node);
        }
        node
    }
}

/// Create a form group keyed by the control's id
pub fn form_group(control_id: impl Into<String>) -> FormGroup {
    FormGroup::new(control_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_gets_id_and_label_gets_for() {
        let node = form_group("email")
            .control(ElementNode::new("input"))
            .label("Email address")
            .build();

        assert_eq!(node.classes().to_attr(), "form-group");
        let control = &node.children()[0];
        assert_eq!(control.tag(), "input");
        assert_eq!(control.attr("id"), Some("email"));
        let label = &node.children()[1];
        assert_eq!(label.tag(), "label");
        assert_eq!(label.attr("for"), Some("email"));
        assert_eq!(label.node_text(), Some("Email address"));
    }

    #[test]
    fn test_control_precedes_label() {
        let node = form_group("name")
            .label("Name")
            .control(ElementNode::new("input"))
            .build();
        assert_eq!(node.children()[0].tag(), "input");
        assert_eq!(node.children()[1].tag(), "label");
    }

    #[test]
    fn test_caller_classes_and_prefix_override() {
        let node = form_group("q").class("mb-2").prefix("field").build();
        assert_eq!(node.classes().to_attr(), "mb-2 field");
    }
}
