//! A reference in-memory editing widget.
//!
//! [`TextAreaWidget`] implements [`EditorWidget`] on top of a rope, with a
//! simple fixed-metrics scroll model. It lets the adapter run headless, for
//! example in tests and tooling, without an external editor behind it.
//!
//! # Example
//!
//! ```
//! use horizon_codemirror::widget::{EditorWidget, Placeholder, TextAreaFactory, WidgetFactory};
//! use horizon_codemirror::options::EditorOptions;
//!
//! let mut placeholder = Placeholder::new("notes").with_default_value("hello").attached();
//! let mut widget = TextAreaFactory::default()
//!     .create(&mut placeholder, &EditorOptions::new())
//!     .unwrap();
//!
//! assert_eq!(widget.value(), "hello");
//! widget.set_cursor(widget.end_position());
//! widget.replace_selection(", world");
//! assert_eq!(widget.value(), "hello, world");
//! ```

use ropey::{Rope, RopeSlice};

use horizon_codemirror_core::Result;
use horizon_codemirror_core::logging::targets;

use super::events::{
    ChangeEvent, ChangeOrigin, CursorActivity, EditorChange, FocusEvent, FocusReason, Position,
    ScrollInfo, Selection,
};
use super::placeholder::Placeholder;
use super::traits::{EditorSignals, EditorWidget, WidgetFactory};
use crate::options::{names, EditorOptions, OptionValue};

/// Default viewport width in pixels.
pub const DEFAULT_CLIENT_WIDTH: f32 = 400.0;
/// Default viewport height in pixels.
pub const DEFAULT_CLIENT_HEIGHT: f32 = 300.0;
/// Default line height in pixels.
pub const DEFAULT_LINE_HEIGHT: f32 = 16.0;
/// Default character advance in pixels.
pub const DEFAULT_CHAR_WIDTH: f32 = 8.0;

/// Fixed layout metrics for [`TextAreaWidget`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Visible viewport width.
    pub client_width: f32,
    /// Visible viewport height.
    pub client_height: f32,
    /// Height of one line.
    pub line_height: f32,
    /// Advance of one character.
    pub char_width: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            client_width: DEFAULT_CLIENT_WIDTH,
            client_height: DEFAULT_CLIENT_HEIGHT,
            line_height: DEFAULT_LINE_HEIGHT,
            char_width: DEFAULT_CHAR_WIDTH,
        }
    }
}

/// The options every [`TextAreaWidget`] starts with.
pub fn default_options() -> EditorOptions {
    EditorOptions::new()
        .with(names::MODE, OptionValue::Null)
        .with(names::THEME, "default")
        .with(names::LINE_NUMBERS, false)
        .with(names::READ_ONLY, false)
        .with(names::TAB_SIZE, 4)
        .with(names::INDENT_UNIT, 2)
        .with(names::LINE_WRAPPING, false)
        .with(names::AUTOFOCUS, false)
}

/// A rope-backed editing widget.
#[derive(Debug)]
pub struct TextAreaWidget {
    rope: Rope,
    options: EditorOptions,
    selection: Selection,
    scroll_left: f32,
    scroll_top: f32,
    metrics: TextMetrics,
    focused: bool,
    signals: EditorSignals,
}

impl TextAreaWidget {
    /// Create a widget holding `text`, configured with `options` on top of
    /// [`default_options`].
    pub fn new(text: &str, options: &EditorOptions, metrics: TextMetrics) -> Self {
        let mut merged = default_options();
        merged.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));

        Self {
            rope: Rope::from_str(text),
            options: merged,
            selection: Selection::default(),
            scroll_left: 0.0,
            scroll_top: 0.0,
            metrics,
            focused: false,
            signals: EditorSignals::new(),
        }
    }

    /// Number of lines. An empty document has one line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The text of a line without its line break.
    pub fn line(&self, line: usize) -> Option<String> {
        (line < self.rope.len_lines()).then(|| without_line_break(self.rope.line(line)).to_string())
    }

    /// The layout metrics.
    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    /// Whether user edits are currently rejected.
    pub fn is_read_only(&self) -> bool {
        self.options.is_enabled(names::READ_ONLY)
    }

    /// The position just past the last character.
    pub fn end_position(&self) -> Position {
        let last = self.rope.len_lines() - 1;
        Position::new(last, self.line_len(last))
    }

    /// Clamp a position into the document.
    pub fn clip_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.rope.len_lines() - 1);
        Position::new(line, pos.ch.min(self.line_len(line)))
    }

    /// Replace the text between `from` and `to`.
    ///
    /// Returns `false` when the edit was rejected because the widget is
    /// read-only. Programmatic origins bypass the read-only check.
    pub fn replace_range(
        &mut self,
        text: &str,
        from: Position,
        to: Position,
        origin: ChangeOrigin,
    ) -> bool {
        if self.is_read_only() && !origin.is_programmatic() {
            tracing::trace!(target: targets::EVENTS, %origin, "read-only widget rejected edit");
            return false;
        }

        let (from, to) = {
            let a = self.clip_position(from);
            let b = self.clip_position(to);
            (a.min(b), a.max(b))
        };
        let start = self.char_index(from);
        let end = self.char_index(to);
        let removed = self.rope.slice(start..end).to_string();

        self.rope.remove(start..end);
        self.rope.insert(start, text);

        let cursor = self.position_of(start + text.chars().count());
        self.selection = Selection::cursor(cursor);

        let change = EditorChange {
            from,
            to,
            text: split_lines(text),
            removed: split_lines(&removed),
            origin,
        };
        self.signals.changed.emit(ChangeEvent {
            value: self.rope.to_string(),
            change,
        });
        self.emit_cursor_activity();
        self.clamp_scroll();
        true
    }

    /// Replace the selection with `text`, as if typed.
    pub fn replace_selection(&mut self, text: &str) -> bool {
        let Selection { anchor, head } = self.selection;
        self.replace_range(text, anchor, head, ChangeOrigin::Input)
    }

    /// Move the selection.
    pub fn set_selection(&mut self, anchor: Position, head: Position) {
        let selection = Selection {
            anchor: self.clip_position(anchor),
            head: self.clip_position(head),
        };
        if selection != self.selection {
            self.selection = selection;
            self.emit_cursor_activity();
        }
    }

    /// Move the cursor, collapsing the selection.
    pub fn set_cursor(&mut self, pos: Position) {
        self.set_selection(pos, pos);
    }

    /// Give the widget focus for a specific reason.
    pub fn focus_with_reason(&mut self, reason: FocusReason) {
        if !self.focused {
            self.focused = true;
            self.signals.focused.emit(FocusEvent::gained(reason));
        }
    }

    /// Take focus away from the widget.
    pub fn blur(&mut self) {
        self.blur_with_reason(FocusReason::Other);
    }

    /// Take focus away from the widget for a specific reason.
    pub fn blur_with_reason(&mut self, reason: FocusReason) {
        if self.focused {
            self.focused = false;
            self.signals.blurred.emit(FocusEvent::lost(reason));
        }
    }

    fn line_len(&self, line: usize) -> usize {
        without_line_break(self.rope.line(line)).len_chars()
    }

    fn char_index(&self, pos: Position) -> usize {
        self.rope.line_to_char(pos.line) + pos.ch
    }

    fn position_of(&self, char_idx: usize) -> Position {
        let line = self.rope.char_to_line(char_idx);
        Position::new(line, char_idx - self.rope.line_to_char(line))
    }

    fn longest_line(&self) -> usize {
        (0..self.rope.len_lines())
            .map(|line| self.line_len(line))
            .max()
            .unwrap_or(0)
    }

    fn emit_cursor_activity(&self) {
        self.signals.cursor_activity.emit(CursorActivity {
            selection: self.selection,
        });
    }

    /// Pull the scroll offsets back into range, notifying if they moved.
    fn clamp_scroll(&mut self) {
        let info = self.scroll_info();
        let left = self.scroll_left.clamp(0.0, info.max_left());
        let top = self.scroll_top.clamp(0.0, info.max_top());
        self.apply_scroll(left, top);
    }

    fn apply_scroll(&mut self, left: f32, top: f32) {
        if left != self.scroll_left || top != self.scroll_top {
            self.scroll_left = left;
            self.scroll_top = top;
            self.signals.scrolled.emit(self.scroll_info());
        }
    }
}

impl EditorWidget for TextAreaWidget {
    fn value(&self) -> String {
        self.rope.to_string()
    }

    fn set_value(&mut self, value: &str) {
        tracing::trace!(target: targets::EVENTS, len = value.len(), "text area set_value");
        let from = Position::default();
        let to = self.end_position();
        let removed = self.rope.to_string();

        self.rope = Rope::from_str(value);
        self.selection = Selection::default();

        self.signals.changed.emit(ChangeEvent {
            value: value.to_string(),
            change: EditorChange {
                from,
                to,
                text: split_lines(value),
                removed: split_lines(&removed),
                origin: ChangeOrigin::SetValue,
            },
        });
        self.emit_cursor_activity();
        self.apply_scroll(0.0, 0.0);
    }

    fn option(&self, name: &str) -> Option<OptionValue> {
        self.options.get(name).cloned()
    }

    fn set_option(&mut self, name: &str, value: OptionValue) {
        tracing::trace!(target: targets::EVENTS, name, ?value, "text area set_option");
        self.options.set(name, value);
        if name == names::LINE_WRAPPING {
            self.clamp_scroll();
        }
    }

    fn scroll_info(&self) -> ScrollInfo {
        let TextMetrics {
            client_width,
            client_height,
            line_height,
            char_width,
        } = self.metrics;

        let content_width = if self.options.is_enabled(names::LINE_WRAPPING) {
            client_width
        } else {
            self.longest_line() as f32 * char_width
        };
        let content_height = self.rope.len_lines() as f32 * line_height;

        ScrollInfo {
            left: self.scroll_left,
            top: self.scroll_top,
            width: content_width.max(client_width),
            height: content_height.max(client_height),
            client_width,
            client_height,
        }
    }

    fn scroll_to(&mut self, left: f32, top: f32) {
        let info = self.scroll_info();
        self.apply_scroll(left.clamp(0.0, info.max_left()), top.clamp(0.0, info.max_top()));
    }

    fn focus(&mut self) {
        self.focus_with_reason(FocusReason::Other);
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn signals(&self) -> &EditorSignals {
        &self.signals
    }

    fn detach(self, placeholder: &mut Placeholder) {
        self.signals.disconnect_all();
        placeholder.set_default_value(self.rope.to_string());
        placeholder.show();
    }
}

/// Creates [`TextAreaWidget`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextAreaFactory {
    metrics: TextMetrics,
}

impl TextAreaFactory {
    /// Create a factory producing widgets with the given metrics.
    pub fn new(metrics: TextMetrics) -> Self {
        Self { metrics }
    }
}

impl WidgetFactory for TextAreaFactory {
    type Widget = TextAreaWidget;

    fn create(&self, placeholder: &mut Placeholder, options: &EditorOptions) -> Result<TextAreaWidget> {
        let widget = TextAreaWidget::new(placeholder.default_value(), options, self.metrics);
        placeholder.hide();
        Ok(widget)
    }
}

/// Length in chars of the line break ending `line`, if any.
///
/// Recognises the same breaks ropey splits lines on: `\r\n`, `\n`, `\r`,
/// VT, FF, NEL, and the Unicode line and paragraph separators.
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len > 1 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => 1,
        _ => 0,
    }
}

fn without_line_break(line: RopeSlice<'_>) -> RopeSlice<'_> {
    line.slice(..line.len_chars() - line_break_len(line))
}

/// Split `text` into lines the way the widget's positions count them.
fn split_lines(text: &str) -> Vec<String> {
    Rope::from_str(text)
        .lines()
        .map(|line| without_line_break(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn widget(text: &str) -> TextAreaWidget {
        TextAreaWidget::new(text, &EditorOptions::new(), TextMetrics::default())
    }

    fn numbered_lines(count: usize) -> String {
        (0..count).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_lines_and_end_position() {
        let w = widget("fn main() {\r\n}\n");
        assert_eq!(w.line_count(), 3);
        assert_eq!(w.line(0).as_deref(), Some("fn main() {"));
        assert_eq!(w.line(2).as_deref(), Some(""));
        assert_eq!(w.line(3), None);
        assert_eq!(w.end_position(), Position::new(2, 0));
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let mut w = widget("ab\rcd");
        assert_eq!(w.line_count(), 2);
        assert_eq!(w.line(0).as_deref(), Some("ab"));
        assert_eq!(w.end_position(), Position::new(1, 2));
        assert_eq!(w.clip_position(Position::new(0, 99)), Position::new(0, 2));

        w.set_cursor(Position::new(0, 99));
        assert!(w.replace_selection("X"));
        assert_eq!(w.value(), "abX\rcd");
        assert_eq!(w.selection(), Selection::cursor(Position::new(0, 3)));
    }

    #[test]
    fn test_unicode_line_separator_ends_a_line() {
        let mut w = widget("ab\u{2028}cd");
        assert_eq!(w.line(0).as_deref(), Some("ab"));
        assert_eq!(w.line(1).as_deref(), Some("cd"));
        assert_eq!(w.end_position(), Position::new(1, 2));
        assert_eq!(w.clip_position(Position::new(0, 99)), Position::new(0, 2));

        w.set_cursor(Position::new(0, 99));
        assert!(w.replace_selection("X"));
        assert_eq!(w.value(), "abX\u{2028}cd");
    }

    #[test]
    fn test_change_lines_split_on_every_break() {
        let mut w = widget("one\r\ntwo\u{2029}three");
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        w.signals().changed.connect(move |e| events_clone.lock().push(e.change.clone()));

        w.replace_range("x\ry", Position::new(0, 1), Position::new(2, 2), ChangeOrigin::Paste);

        let events = events.lock();
        assert_eq!(events[0].removed, vec!["ne", "two", "th"]);
        assert_eq!(events[0].text, vec!["x", "y"]);
        assert_eq!(w.value(), "ox\ryree");
    }

    #[test]
    fn test_replace_range_reports_change() {
        let mut w = widget("hello world");
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        w.signals().changed.connect(move |e| events_clone.lock().push(e.clone()));

        assert!(w.replace_range("there", Position::new(0, 6), Position::new(0, 11), ChangeOrigin::Input));

        assert_eq!(w.value(), "hello there");
        assert_eq!(w.selection(), Selection::cursor(Position::new(0, 11)));
        let events = events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value, "hello there");
        assert_eq!(events[0].change.removed, vec!["world".to_string()]);
        assert_eq!(events[0].change.origin, ChangeOrigin::Input);
    }

    #[test]
    fn test_read_only_rejects_user_edits_only() {
        let options = EditorOptions::new().with(names::READ_ONLY, true);
        let mut w = TextAreaWidget::new("locked", &options, TextMetrics::default());

        assert!(!w.replace_selection("x"));
        assert_eq!(w.value(), "locked");

        w.set_value("replaced");
        assert_eq!(w.value(), "replaced");
    }

    #[test]
    fn test_set_value_resets_scroll_and_selection() {
        let mut w = widget(&numbered_lines(100));
        w.scroll_to(0.0, 480.0);
        w.set_cursor(Position::new(40, 2));
        assert_eq!(w.scroll_info().top, 480.0);

        w.set_value(&numbered_lines(120));

        assert_eq!(w.scroll_info().top, 0.0);
        assert_eq!(w.selection(), Selection::default());
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut w = widget(&numbered_lines(30));
        // 30 lines * 16px = 480px content, 300px viewport.
        w.scroll_to(-10.0, 10_000.0);
        let info = w.scroll_info();
        assert_eq!(info.left, 0.0);
        assert_eq!(info.top, 180.0);
    }

    #[test]
    fn test_scroll_emits_only_on_movement() {
        let mut w = widget(&numbered_lines(50));
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        w.signals().scrolled.connect(move |_| *count_clone.lock() += 1);

        w.scroll_to(0.0, 100.0);
        w.scroll_to(0.0, 100.0);
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_focus_and_blur_emit_once() {
        let mut w = widget("");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_focus = seen.clone();
        let seen_blur = seen.clone();
        w.signals().focused.connect(move |e| seen_focus.lock().push(e.focused));
        w.signals().blurred.connect(move |e| seen_blur.lock().push(e.focused));

        w.focus();
        w.focus();
        w.blur();
        w.blur();

        assert_eq!(*seen.lock(), vec![true, false]);
        assert!(!w.has_focus());
    }

    #[test]
    fn test_options_merge_over_defaults() {
        let options = EditorOptions::new().with(names::TAB_SIZE, 2).with("foldGutter", true);
        let w = TextAreaWidget::new("", &options, TextMetrics::default());

        assert_eq!(w.option(names::TAB_SIZE), Some(OptionValue::Integer(2)));
        assert_eq!(w.option(names::THEME), Some(OptionValue::from("default")));
        assert_eq!(w.option("foldGutter"), Some(OptionValue::Bool(true)));
        assert_eq!(w.option("unknown"), None);
    }

    #[test]
    fn test_detach_restores_placeholder() {
        let mut placeholder = Placeholder::new("code").with_default_value("a").attached();
        let mut w = TextAreaFactory::default()
            .create(&mut placeholder, &EditorOptions::new())
            .unwrap();
        assert!(placeholder.is_hidden());

        w.replace_selection("b");
        w.detach(&mut placeholder);

        assert!(!placeholder.is_hidden());
        assert_eq!(placeholder.default_value(), "ba");
    }
}
