//! The placeholder element a widget attaches to.

/// A textarea-like element rendered by the adapter.
///
/// The host places it in its UI tree and marks it attached; a widget then
/// hides it and takes over its area. On teardown the widget writes its
/// content back into the placeholder and shows it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    name: String,
    default_value: String,
    autofocus: bool,
    attached: bool,
    hidden: bool,
}

impl Placeholder {
    /// Create a detached placeholder with the given form name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the initial content (builder pattern).
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the autofocus attribute (builder pattern).
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Mark the placeholder as placed in a live tree (builder pattern).
    pub fn attached(mut self) -> Self {
        self.attached = true;
        self
    }

    /// The form field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The content the element holds.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Replace the content the element holds.
    pub fn set_default_value(&mut self, value: impl Into<String>) {
        self.default_value = value.into();
    }

    /// Whether the element asks for focus when shown.
    pub fn autofocus(&self) -> bool {
        self.autofocus
    }

    /// The autocomplete attribute. Always `"off"`.
    pub fn autocomplete(&self) -> &'static str {
        "off"
    }

    /// Whether the element is placed in a live tree.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Place or remove the element from the live tree.
    pub fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    /// Whether a widget currently covers the element.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide the element behind a widget.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Show the element again after its widget was removed.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Returns true if a widget may attach to this element.
    pub fn is_mountable(&self) -> bool {
        self.attached && !self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_placeholder_is_not_mountable() {
        let placeholder = Placeholder::new("code");
        assert!(!placeholder.is_mountable());
        assert_eq!(placeholder.autocomplete(), "off");

        let placeholder = placeholder.attached();
        assert!(placeholder.is_mountable());
    }

    #[test]
    fn test_hidden_placeholder_is_not_mountable() {
        let mut placeholder = Placeholder::new("code").with_default_value("x").attached();
        placeholder.hide();
        assert!(!placeholder.is_mountable());
        placeholder.show();
        assert!(placeholder.is_mountable());
        assert_eq!(placeholder.default_value(), "x");
    }
}
