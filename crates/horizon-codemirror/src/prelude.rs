//! Commonly used types, for glob import.

pub use crate::adapter::{CodeMirror, CodeMirrorProps, MountError, Reconciliation, RenderOutput};
pub use crate::config::AdapterConfig;
pub use crate::options::{names, EditorOptions, OptionValue};
pub use crate::widget::{
    ChangeEvent, ChangeOrigin, CursorActivity, EditorChange, EditorWidget, FocusEvent,
    FocusReason, Placeholder, Position, ScrollInfo, Selection, TextAreaFactory, TextAreaWidget,
    WidgetFactory,
};
pub use horizon_codemirror_core::{Error, Result};
