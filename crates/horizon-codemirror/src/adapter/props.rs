//! Component properties and callbacks.

use std::fmt;
use std::sync::Arc;

use crate::options::{EditorOptions, OptionValue};
use crate::widget::{CursorActivity, EditorChange, FocusEvent, ScrollInfo};

/// Called with the new content and the change that produced it.
pub type ChangeCallback = Arc<dyn Fn(&str, &EditorChange) + Send + Sync>;
/// Called when the cursor or selection moves.
pub type CursorActivityCallback = Arc<dyn Fn(&CursorActivity) + Send + Sync>;
/// Called with the new focus state and the event that changed it.
pub type FocusChangeCallback = Arc<dyn Fn(bool, &FocusEvent) + Send + Sync>;
/// Called with the scroll geometry after the widget scrolled.
pub type ScrollCallback = Arc<dyn Fn(&ScrollInfo) + Send + Sync>;

/// The optional caller callbacks.
#[derive(Clone, Default)]
pub struct Callbacks {
    /// Content-change callback. Not called for programmatic value sets.
    pub on_change: Option<ChangeCallback>,
    /// Cursor-activity callback.
    pub on_cursor_activity: Option<CursorActivityCallback>,
    /// Focus-change callback.
    pub on_focus_change: Option<FocusChangeCallback>,
    /// Scroll callback.
    pub on_scroll: Option<ScrollCallback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_cursor_activity", &self.on_cursor_activity.is_some())
            .field("on_focus_change", &self.on_focus_change.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .finish()
    }
}

/// Properties of a [`CodeMirror`](super::CodeMirror) component.
///
/// # Example
///
/// ```
/// use horizon_codemirror::adapter::CodeMirrorProps;
/// use horizon_codemirror::options::names;
///
/// let props = CodeMirrorProps::new()
///     .with_name("query")
///     .with_value("SELECT 1;")
///     .with_option(names::MODE, "sql")
///     .with_preserve_scroll_position(true)
///     .on_change(|value, _change| println!("query is now {value}"));
///
/// assert_eq!(props.effective_name(), "query");
/// assert_eq!(props.initial_content(), "SELECT 1;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeMirrorProps {
    /// Controlled content. `None` leaves the widget uncontrolled.
    pub value: Option<String>,
    /// Content used on mount; wins over `value` when non-empty.
    pub default_value: String,
    /// Form name of the placeholder.
    pub name: String,
    /// Fallback form name used when `name` is empty.
    pub path: String,
    /// Configuration passed to the widget verbatim.
    pub options: EditorOptions,
    /// Keep the scroll offset across controlled value updates.
    pub preserve_scroll_position: bool,
    /// Focus the widget once mounted.
    pub auto_focus: bool,
    /// Extra class for the container.
    pub class_name: Option<String>,
    /// Caller callbacks.
    pub callbacks: Callbacks,
}

impl CodeMirrorProps {
    /// Create props with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controlled value (builder pattern).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the mount-time content (builder pattern).
    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Set the form name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the fallback form name (builder pattern).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Replace all options (builder pattern).
    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a single option (builder pattern).
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Set whether scroll offsets survive value updates (builder pattern).
    ///
    /// The saved offset is restored as far as the new content allows; a
    /// shorter value leaves the widget scrolled to its new maximum.
    pub fn with_preserve_scroll_position(mut self, preserve: bool) -> Self {
        self.preserve_scroll_position = preserve;
        self
    }

    /// Set whether the widget takes focus on mount (builder pattern).
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Set the extra container class (builder pattern).
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the content-change callback.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &EditorChange) + Send + Sync + 'static,
    {
        self.callbacks.on_change = Some(Arc::new(f));
        self
    }

    /// Set the cursor-activity callback.
    pub fn on_cursor_activity<F>(mut self, f: F) -> Self
    where
        F: Fn(&CursorActivity) + Send + Sync + 'static,
    {
        self.callbacks.on_cursor_activity = Some(Arc::new(f));
        self
    }

    /// Set the focus-change callback.
    pub fn on_focus_change<F>(mut self, f: F) -> Self
    where
        F: Fn(bool, &FocusEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_focus_change = Some(Arc::new(f));
        self
    }

    /// Set the scroll callback.
    pub fn on_scroll<F>(mut self, f: F) -> Self
    where
        F: Fn(&ScrollInfo) + Send + Sync + 'static,
    {
        self.callbacks.on_scroll = Some(Arc::new(f));
        self
    }

    /// The placeholder's form name: `name`, or `path` when `name` is empty.
    pub fn effective_name(&self) -> &str {
        if self.name.is_empty() {
            &self.path
        } else {
            &self.name
        }
    }

    /// The content set on mount: `default_value`, else `value`, else empty.
    pub fn initial_content(&self) -> &str {
        if !self.default_value.is_empty() {
            &self.default_value
        } else {
            self.value.as_deref().unwrap_or("")
        }
    }

    /// Whether the widget should take focus on mount, by prop or option.
    pub fn wants_focus(&self) -> bool {
        self.auto_focus || self.options.is_enabled(crate::options::names::AUTOFOCUS)
    }
}
