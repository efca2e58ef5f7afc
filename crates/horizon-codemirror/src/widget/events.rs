//! Event types published by editing widgets.
//!
//! Widgets emit these through their [`EditorSignals`](super::EditorSignals);
//! the adapter forwards them to the caller's callbacks.

use std::fmt;
use std::str::FromStr;

/// A position in the document: zero-based line and character column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character offset within the line.
    pub ch: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

/// Where a document change came from.
///
/// The string forms match the origin tags CodeMirror uses (`+input`,
/// `setValue`, ...), so origins coming from a foreign widget can be parsed
/// with [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeOrigin {
    /// Typed by the user.
    Input,
    /// Pasted from the clipboard.
    Paste,
    /// Removed by a cut.
    Cut,
    /// Deleted with backspace/delete.
    Delete,
    /// Produced by undo.
    Undo,
    /// Produced by redo.
    Redo,
    /// Replaced programmatically through `set_value`.
    SetValue,
    /// Any other origin tag.
    Other(String),
}

impl ChangeOrigin {
    /// The origin tag string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Input => "+input",
            Self::Paste => "paste",
            Self::Cut => "cut",
            Self::Delete => "+delete",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::SetValue => "setValue",
            Self::Other(tag) => tag,
        }
    }

    /// Returns true for changes the adapter itself caused.
    pub fn is_programmatic(&self) -> bool {
        matches!(self, Self::SetValue)
    }
}

impl fmt::Display for ChangeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeOrigin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "+input" | "input" => Self::Input,
            "paste" => Self::Paste,
            "cut" => Self::Cut,
            "+delete" | "delete" => Self::Delete,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "setValue" => Self::SetValue,
            other => Self::Other(other.to_string()),
        })
    }
}

/// Description of a single document change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorChange {
    /// Start of the replaced range (before the change).
    pub from: Position,
    /// End of the replaced range (before the change).
    pub to: Position,
    /// Inserted text, split into lines.
    pub text: Vec<String>,
    /// Removed text, split into lines.
    pub removed: Vec<String>,
    /// Where the change came from.
    pub origin: ChangeOrigin,
}

/// A change together with the document content after it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Full document content after the change.
    pub value: String,
    /// The change itself.
    pub change: EditorChange,
}

/// A selection range. When `anchor == head` it is a plain cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Fixed end of the selection.
    pub anchor: Position,
    /// Moving end of the selection (the cursor).
    pub head: Position,
}

impl Selection {
    /// A collapsed selection at `pos`.
    pub const fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The earlier end.
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The later end.
    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }
}

/// Emitted when the cursor moves or the selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorActivity {
    /// The primary selection after the activity.
    pub selection: Selection,
}

impl CursorActivity {
    /// The cursor position.
    pub fn cursor(&self) -> Position {
        self.selection.head
    }
}

/// Reason for a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus gained or lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    /// `true` for focus-in, `false` for focus-out.
    pub focused: bool,
    /// Why focus changed.
    pub reason: FocusReason,
}

impl FocusEvent {
    /// A focus-in event.
    pub fn gained(reason: FocusReason) -> Self {
        Self {
            focused: true,
            reason,
        }
    }

    /// A focus-out event.
    pub fn lost(reason: FocusReason) -> Self {
        Self {
            focused: false,
            reason,
        }
    }
}

/// Scroll geometry of the widget, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollInfo {
    /// Horizontal scroll offset.
    pub left: f32,
    /// Vertical scroll offset.
    pub top: f32,
    /// Total content width.
    pub width: f32,
    /// Total content height.
    pub height: f32,
    /// Visible viewport width.
    pub client_width: f32,
    /// Visible viewport height.
    pub client_height: f32,
}

impl ScrollInfo {
    /// Largest valid horizontal offset.
    pub fn max_left(&self) -> f32 {
        (self.width - self.client_width).max(0.0)
    }

    /// Largest valid vertical offset.
    pub fn max_top(&self) -> f32 {
        (self.height - self.client_height).max(0.0)
    }
}
