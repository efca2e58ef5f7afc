//! The embedded widget abstraction.
//!
//! The adapter talks to the editing widget only through [`EditorWidget`]
//! and learns about user activity only through [`EditorSignals`]. Any widget
//! exposing that surface can be embedded; [`TextAreaWidget`] is the bundled
//! in-memory implementation.
//!
//! # Key Types
//!
//! - [`EditorWidget`] / [`WidgetFactory`] - Imperative widget surface and constructor
//! - [`Placeholder`] - The element a widget attaches to
//! - [`ChangeEvent`], [`CursorActivity`], [`FocusEvent`], [`ScrollInfo`] - Event payloads

mod events;
mod placeholder;
mod textarea;
mod traits;

pub use events::{
    ChangeEvent, ChangeOrigin, CursorActivity, EditorChange, FocusEvent, FocusReason, Position,
    ScrollInfo, Selection,
};
pub use placeholder::Placeholder;
pub use textarea::{default_options, TextAreaFactory, TextAreaWidget, TextMetrics};
pub use traits::{EditorSignals, EditorWidget, WidgetFactory};
