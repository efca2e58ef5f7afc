//! The editor component.
//!
//! # Key Types
//!
//! - [`CodeMirror`] - Drives one widget through mount, update and unmount
//! - [`CodeMirrorProps`] - Declarative inputs, including callbacks
//! - [`Reconciliation`] - What an update pushed into the widget
//! - [`RenderOutput`] - Container class and placeholder to place

pub mod class_name;
mod component;
mod props;

pub use component::{CodeMirror, MountError, Reconciliation, RenderOutput};
pub use props::{
    Callbacks, ChangeCallback, CodeMirrorProps, CursorActivityCallback, FocusChangeCallback,
    ScrollCallback,
};
