//! The imperative surface of an embeddable editing widget.
//!
//! # Key Types
//!
//! - [`EditorWidget`] - What the adapter calls on a live widget
//! - [`EditorSignals`] - The five events every widget publishes
//! - [`WidgetFactory`] - Constructs a widget over a placeholder

use horizon_codemirror_core::{Result, Signal};

use super::events::{ChangeEvent, CursorActivity, FocusEvent, ScrollInfo, Selection};
use super::placeholder::Placeholder;
use crate::options::{EditorOptions, OptionValue};

/// The events a widget publishes.
///
/// Widgets emit these synchronously from inside the call that caused them,
/// including `set_value`, `scroll_to` and `focus`.
#[derive(Debug, Default)]
pub struct EditorSignals {
    /// Document content changed.
    pub changed: Signal<ChangeEvent>,
    /// Cursor moved or selection changed.
    pub cursor_activity: Signal<CursorActivity>,
    /// Widget gained keyboard focus.
    pub focused: Signal<FocusEvent>,
    /// Widget lost keyboard focus.
    pub blurred: Signal<FocusEvent>,
    /// Scroll position changed.
    pub scrolled: Signal<ScrollInfo>,
}

impl EditorSignals {
    /// Create a set of signals with no connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disconnect every slot from every signal.
    pub fn disconnect_all(&self) {
        self.changed.disconnect_all();
        self.cursor_activity.disconnect_all();
        self.focused.disconnect_all();
        self.blurred.disconnect_all();
        self.scrolled.disconnect_all();
    }

    /// Total number of connected slots across all signals.
    pub fn connection_count(&self) -> usize {
        self.changed.connection_count()
            + self.cursor_activity.connection_count()
            + self.focused.connection_count()
            + self.blurred.connection_count()
            + self.scrolled.connection_count()
    }
}

/// An embedded editing widget.
///
/// The adapter owns the widget exclusively between mount and unmount and is
/// the only caller of these methods besides the widget's own user input
/// handling.
pub trait EditorWidget {
    /// The full document content.
    fn value(&self) -> String;

    /// Replace the whole document.
    ///
    /// Implementations must report the resulting change with
    /// [`ChangeOrigin::SetValue`](super::ChangeOrigin::SetValue).
    fn set_value(&mut self, value: &str);

    /// The current value of an option, or `None` if the widget does not know it.
    fn option(&self, name: &str) -> Option<OptionValue>;

    /// Set a single option.
    fn set_option(&mut self, name: &str, value: OptionValue);

    /// Current scroll geometry.
    fn scroll_info(&self) -> ScrollInfo;

    /// Scroll to the given offsets, clamped to the scrollable range.
    fn scroll_to(&mut self, left: f32, top: f32);

    /// Give the widget keyboard focus.
    fn focus(&mut self);

    /// Whether the widget has keyboard focus.
    fn has_focus(&self) -> bool;

    /// The primary selection.
    fn selection(&self) -> Selection;

    /// The widget's event signals.
    fn signals(&self) -> &EditorSignals;

    /// Tear the widget down, restoring the placeholder with the final content.
    fn detach(self, placeholder: &mut Placeholder)
    where
        Self: Sized;
}

/// Constructs widgets over a placeholder.
///
/// Any `Fn(&mut Placeholder, &EditorOptions) -> Result<W>` closure is a
/// factory, which makes it easy to wrap or instrument another factory.
pub trait WidgetFactory {
    /// The widget type produced.
    type Widget: EditorWidget;

    /// Create a widget over `placeholder` configured with `options`.
    ///
    /// On success the widget has taken over the placeholder (typically by
    /// hiding it).
    fn create(&self, placeholder: &mut Placeholder, options: &EditorOptions) -> Result<Self::Widget>;
}

impl<W, F> WidgetFactory for F
where
    W: EditorWidget,
    F: Fn(&mut Placeholder, &EditorOptions) -> Result<W>,
{
    type Widget = W;

    fn create(&self, placeholder: &mut Placeholder, options: &EditorOptions) -> Result<W> {
        self(placeholder, options)
    }
}
