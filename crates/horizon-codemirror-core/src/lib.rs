//! Core systems for Horizon CodeMirror.
//!
//! This crate provides the foundation the editor adapter is built on:
//!
//! - **Signal/Slot System**: Type-safe notification used by widgets to
//!   publish their native events and by the adapter to subscribe to them
//! - **Property System**: Interior-mutable values with change detection
//! - **Errors**: The error type for fallible entry points
//! - **Logging**: `tracing` targets and span names for log filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_codemirror_core::Signal;
//!
//! let value_changed = Signal::<String>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit("fn main() {}".to_string());
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use horizon_codemirror_core::{Property, Signal};
//!
//! struct FocusTracker {
//!     focused: Property<bool>,
//!     focus_changed: Signal<bool>,
//! }
//!
//! impl FocusTracker {
//!     fn set_focused(&self, focused: bool) {
//!         if self.focused.set(focused) {
//!             self.focus_changed.emit(focused);
//!         }
//!     }
//! }
//!
//! let tracker = FocusTracker {
//!     focused: Property::new(false),
//!     focus_changed: Signal::new(),
//! };
//! tracker.set_focused(true);
//! assert!(tracker.focused.get());
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{Error, Result};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
