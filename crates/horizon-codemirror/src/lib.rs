//! Horizon CodeMirror: embed a CodeMirror-style editing widget behind an
//! explicit component lifecycle.
//!
//! The editing itself (text buffer, rendering, undo, highlighting) belongs to
//! the widget. This crate only binds the widget to its host:
//!
//! - **Mount**: create the widget over a placeholder and load the initial content
//! - **Events**: forward change, cursor-activity, focus, blur and scroll
//!   events to optional callbacks
//! - **Update**: push a changed controlled value and each changed option
//!   into the widget, optionally keeping the scroll offset
//! - **Unmount**: drop the listeners and detach the widget
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use horizon_codemirror::prelude::*;
//!
//! let edits = Arc::new(Mutex::new(Vec::new()));
//! let sink = edits.clone();
//!
//! let props = CodeMirrorProps::new()
//!     .with_name("body")
//!     .with_value("Hello")
//!     .with_option(names::LINE_WRAPPING, true)
//!     .on_change(move |value, _| sink.lock().push(value.to_string()));
//!
//! let mut editor = CodeMirror::new(TextAreaFactory::default(), props);
//! let placeholder = editor.render().placeholder.attached();
//! editor.mount(placeholder).unwrap();
//!
//! // The user types; the change callback sees it.
//! let widget = editor.widget_mut().unwrap();
//! widget.set_cursor(widget.end_position());
//! widget.replace_selection("!");
//! assert_eq!(*edits.lock(), vec!["Hello!".to_string()]);
//! ```

pub mod adapter;
pub mod config;
pub mod options;
pub mod prelude;
pub mod widget;

pub use horizon_codemirror_core::{logging, Error, Result};
