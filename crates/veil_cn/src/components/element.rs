//! Render instructions
//!
//! Components emit [`ElementNode`] trees rather than touching any concrete
//! visual tree; a presentation layer (DOM, TUI, test assertions) consumes
//! them. [`ClassList`] carries the merged class names with caller classes
//! first, computed ones after, duplicates dropped.

use smallvec::SmallVec;

/// Order-preserving, duplicate-free class-name list
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: SmallVec<[String; 4]>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add class names, splitting on whitespace
    ///
    /// Empty fragments and names already present are dropped.
    pub fn add(&mut self, classes: impl AsRef<str>) {
        for class in classes.as_ref().split_whitespace() {
            if !self.classes.iter().any(|existing| existing == class) {
                self.classes.push(class.to_string());
            }
        }
    }

    /// Add class names only when the condition holds
    pub fn add_if(&mut self, condition: bool, classes: impl AsRef<str>) {
        if condition {
            self.add(classes);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// The space-joined attribute value
    pub fn to_attr(&self) -> String {
        self.classes.join(" ")
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_attr())
    }
}

/// One node of component output
///
/// A tag, a class list, a flat attribute set, optional text content, and
/// child nodes. Attribute order is insertion order; setting an attribute
/// twice overwrites in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    classes: ClassList,
    attrs: SmallVec<[(String, String); 4]>,
    text: Option<String>,
    children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add class names (builder form)
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes.add(classes);
        self
    }

    /// Set an attribute (builder form)
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set text content (builder form)
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child node (builder form)
    pub fn child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn node_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[ElementNode] {
        &self.children
    }
}
