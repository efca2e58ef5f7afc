//! The `CodeMirror` component.
//!
//! A component drives one embedded widget through three explicit lifecycle
//! calls:
//!
//! 1. [`mount`](CodeMirror::mount) creates the widget over a placeholder,
//!    registers the five event listeners and loads the initial content.
//! 2. [`update`](CodeMirror::update) takes new props and pushes only what
//!    differs from the widget's state: the controlled value, then each
//!    changed option.
//! 3. [`unmount`](CodeMirror::unmount) drops the listeners, detaches the
//!    widget and hands the placeholder back.
//!
//! Every operation is a silent no-op while no widget is mounted.
//!
//! # Example
//!
//! ```
//! use horizon_codemirror::adapter::{CodeMirror, CodeMirrorProps};
//! use horizon_codemirror::options::names;
//! use horizon_codemirror::widget::TextAreaFactory;
//!
//! let props = CodeMirrorProps::new()
//!     .with_name("snippet")
//!     .with_value("let x = 1;")
//!     .with_option(names::MODE, "rust");
//!
//! let mut editor = CodeMirror::new(TextAreaFactory::default(), props.clone());
//! let placeholder = editor.render().placeholder.attached();
//! editor.mount(placeholder).unwrap();
//! assert_eq!(editor.value().as_deref(), Some("let x = 1;"));
//!
//! let report = editor.update(props.with_value("let x = 2;"));
//! assert!(report.value_updated);
//!
//! let restored = editor.unmount().unwrap();
//! assert_eq!(restored.default_value(), "let x = 2;");
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use horizon_codemirror_core::logging::targets;
use horizon_codemirror_core::{ConnectionId, Error, Property};

use super::class_name::editor_class_name;
use super::props::{Callbacks, CodeMirrorProps};
use crate::widget::{
    ChangeEvent, CursorActivity, EditorSignals, EditorWidget, FocusEvent, Placeholder, ScrollInfo,
    WidgetFactory,
};

/// What a render produces: the container class and the placeholder to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Class of the wrapping container.
    pub class_name: String,
    /// The element the widget will attach to, not yet attached.
    pub placeholder: Placeholder,
}

/// What an [`update`](CodeMirror::update) pushed into the widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Whether the controlled value was written.
    pub value_updated: bool,
    /// Names of the options that were written, in name order.
    pub options_updated: Vec<String>,
}

impl Reconciliation {
    /// Returns true if nothing was called on the widget.
    pub fn is_empty(&self) -> bool {
        !self.value_updated && self.options_updated.is_empty()
    }
}

/// A failed mount, carrying the placeholder back to the caller.
#[derive(Debug, thiserror::Error)]
#[error("mount failed: {source}")]
pub struct MountError {
    source: Error,
    placeholder: Placeholder,
}

impl MountError {
    fn new(source: Error, placeholder: Placeholder) -> Self {
        Self {
            source,
            placeholder,
        }
    }

    /// Why the mount was skipped.
    pub fn error(&self) -> &Error {
        &self.source
    }

    /// The placeholder that was passed to the mount.
    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// Take the placeholder back, for example to retry the mount.
    pub fn into_placeholder(self) -> Placeholder {
        self.placeholder
    }

    /// Split into the cause and the placeholder.
    pub fn into_parts(self) -> (Error, Placeholder) {
        (self.source, self.placeholder)
    }
}

impl From<MountError> for Error {
    fn from(err: MountError) -> Self {
        err.source
    }
}

/// State shared between the component and its widget listeners.
///
/// Listeners only hold an `Arc` to this, never to the widget, so they can
/// run from inside any widget call.
#[derive(Debug)]
struct EventBridge {
    callbacks: RwLock<Callbacks>,
    focused: Property<bool>,
    live: AtomicBool,
}

impl EventBridge {
    fn new(callbacks: Callbacks) -> Self {
        Self {
            callbacks: RwLock::new(callbacks),
            focused: Property::new(false),
            live: AtomicBool::new(true),
        }
    }

    fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn close(&self) {
        self.live.store(false, Ordering::Release);
        self.focused.set_silent(false);
    }

    fn set_callbacks(&self, callbacks: Callbacks) {
        *self.callbacks.write() = callbacks;
    }

    fn forward_change(&self, event: &ChangeEvent) {
        if !self.is_live() {
            return;
        }
        if event.change.origin.is_programmatic() {
            tracing::trace!(target: targets::EVENTS, "ignoring programmatic change");
            return;
        }
        // Clone out of the lock so a callback may replace the callbacks.
        let callback = self.callbacks.read().on_change.clone();
        if let Some(callback) = callback {
            callback(&event.value, &event.change);
        }
    }

    fn forward_cursor_activity(&self, activity: &CursorActivity) {
        if !self.is_live() {
            return;
        }
        let callback = self.callbacks.read().on_cursor_activity.clone();
        if let Some(callback) = callback {
            callback(activity);
        }
    }

    fn forward_focus(&self, event: &FocusEvent) {
        if !self.is_live() {
            return;
        }
        self.focused.set(event.focused);
        tracing::debug!(target: targets::EVENTS, focused = event.focused, reason = ?event.reason, "focus changed");
        let callback = self.callbacks.read().on_focus_change.clone();
        if let Some(callback) = callback {
            callback(event.focused, event);
        }
    }

    fn forward_scroll(&self, info: &ScrollInfo) {
        if !self.is_live() {
            return;
        }
        let callback = self.callbacks.read().on_scroll.clone();
        if let Some(callback) = callback {
            callback(info);
        }
    }
}

/// Connection IDs of the five listeners, one per widget signal.
#[derive(Debug, Clone, Copy)]
struct Listeners {
    changed: ConnectionId,
    cursor_activity: ConnectionId,
    focused: ConnectionId,
    blurred: ConnectionId,
    scrolled: ConnectionId,
}

impl Listeners {
    fn connect(signals: &EditorSignals, bridge: &Arc<EventBridge>) -> Self {
        let b = bridge.clone();
        let changed = signals.changed.connect(move |event| b.forward_change(event));
        let b = bridge.clone();
        let cursor_activity = signals
            .cursor_activity
            .connect(move |activity| b.forward_cursor_activity(activity));
        let b = bridge.clone();
        let focused = signals.focused.connect(move |event| b.forward_focus(event));
        let b = bridge.clone();
        let blurred = signals.blurred.connect(move |event| b.forward_focus(event));
        let b = bridge.clone();
        let scrolled = signals.scrolled.connect(move |info| b.forward_scroll(info));

        Self {
            changed,
            cursor_activity,
            focused,
            blurred,
            scrolled,
        }
    }

    fn disconnect(self, signals: &EditorSignals) {
        signals.changed.disconnect(self.changed);
        signals.cursor_activity.disconnect(self.cursor_activity);
        signals.focused.disconnect(self.focused);
        signals.blurred.disconnect(self.blurred);
        signals.scrolled.disconnect(self.scrolled);
    }
}

/// The live parts of a mounted component.
struct Mounted<W> {
    widget: W,
    bridge: Arc<EventBridge>,
    listeners: Listeners,
}

/// An editor component embedding a widget produced by `F`.
pub struct CodeMirror<F: WidgetFactory> {
    factory: F,
    props: CodeMirrorProps,
    placeholder: Option<Placeholder>,
    mounted: Option<Mounted<F::Widget>>,
}

impl<F: WidgetFactory> CodeMirror<F> {
    /// Create an unmounted component.
    pub fn new(factory: F, props: CodeMirrorProps) -> Self {
        Self {
            factory,
            props,
            placeholder: None,
            mounted: None,
        }
    }

    /// Describe the container and placeholder for the current props.
    pub fn render(&self) -> RenderOutput {
        let content = self
            .props
            .value
            .as_deref()
            .unwrap_or(&self.props.default_value);
        RenderOutput {
            class_name: self.class_name(),
            placeholder: Placeholder::new(self.props.effective_name())
                .with_default_value(content)
                .with_autofocus(self.props.auto_focus),
        }
    }

    /// The container class for the current focus state.
    pub fn class_name(&self) -> String {
        editor_class_name(self.is_focused(), self.props.class_name.as_deref())
    }

    /// Attach a widget to `placeholder`.
    ///
    /// When a widget is already mounted, the placeholder is not mountable, or
    /// the factory fails, the component is left unchanged and the placeholder
    /// is handed back.
    pub fn mount(&mut self, placeholder: Placeholder) -> std::result::Result<(), Placeholder> {
        self.try_mount(placeholder).map_err(|err| {
            tracing::debug!(target: targets::LIFECYCLE, error = %err.error(), "mount skipped");
            err.into_placeholder()
        })
    }

    /// Attach a widget to `placeholder`, reporting why mounting was skipped.
    #[tracing::instrument(
        skip_all,
        name = "horizon_codemirror::mount",
        target = "horizon_codemirror::lifecycle",
        level = "debug"
    )]
    pub fn try_mount(&mut self, mut placeholder: Placeholder) -> std::result::Result<(), MountError> {
        if self.mounted.is_some() {
            return Err(MountError::new(Error::AlreadyMounted, placeholder));
        }
        if !placeholder.is_mountable() {
            let error = Error::placeholder_detached(placeholder.name());
            return Err(MountError::new(error, placeholder));
        }

        let mut widget = match self.factory.create(&mut placeholder, &self.props.options) {
            Ok(widget) => widget,
            Err(error) => return Err(MountError::new(error, placeholder)),
        };
        let bridge = Arc::new(EventBridge::new(self.props.callbacks.clone()));
        let listeners = Listeners::connect(widget.signals(), &bridge);

        widget.set_value(self.props.initial_content());
        if self.props.wants_focus() {
            widget.focus();
        }

        tracing::debug!(
            target: targets::LIFECYCLE,
            name = placeholder.name(),
            options = self.props.options.len(),
            "widget mounted"
        );
        self.placeholder = Some(placeholder);
        self.mounted = Some(Mounted {
            widget,
            bridge,
            listeners,
        });
        Ok(())
    }

    /// Replace the props and reconcile the widget with them.
    #[tracing::instrument(
        skip_all,
        name = "horizon_codemirror::update",
        target = "horizon_codemirror::reconcile",
        level = "debug"
    )]
    pub fn update(&mut self, props: CodeMirrorProps) -> Reconciliation {
        self.props = props;
        let Some(mounted) = self.mounted.as_mut() else {
            tracing::debug!(target: targets::RECONCILE, "no widget mounted, skipping reconcile");
            return Reconciliation::default();
        };
        mounted.bridge.set_callbacks(self.props.callbacks.clone());

        let widget = &mut mounted.widget;
        let mut report = Reconciliation::default();

        if let Some(value) = self.props.value.as_deref() {
            if widget.value() != value {
                if self.props.preserve_scroll_position {
                    let previous = widget.scroll_info();
                    widget.set_value(value);
                    widget.scroll_to(previous.left, previous.top);
                } else {
                    widget.set_value(value);
                }
                tracing::trace!(target: targets::RECONCILE, len = value.len(), "value pushed");
                report.value_updated = true;
            }
        }

        let changed = self.props.options.changed_against(|name| widget.option(name));
        for (name, value) in changed {
            tracing::trace!(target: targets::RECONCILE, name, ?value, "option pushed");
            widget.set_option(name, value.clone());
            report.options_updated.push(name.to_string());
        }

        if report.is_empty() {
            tracing::trace!(target: targets::RECONCILE, "widget already up to date");
        }
        report
    }

    /// Detach the widget and return the restored placeholder.
    ///
    /// Listeners are removed before the widget is torn down, so no callback
    /// fires from teardown or afterwards. Returns `None` if nothing was mounted.
    #[tracing::instrument(
        skip_all,
        name = "horizon_codemirror::unmount",
        target = "horizon_codemirror::lifecycle",
        level = "debug"
    )]
    pub fn unmount(&mut self) -> Option<Placeholder> {
        let Some(Mounted {
            widget,
            bridge,
            listeners,
        }) = self.mounted.take()
        else {
            tracing::debug!(target: targets::LIFECYCLE, "no widget mounted, skipping unmount");
            return None;
        };

        listeners.disconnect(widget.signals());
        bridge.close();

        let mut placeholder = self.placeholder.take()?;
        widget.detach(&mut placeholder);
        tracing::debug!(target: targets::LIFECYCLE, name = placeholder.name(), "widget unmounted");
        Some(placeholder)
    }

    /// Whether a widget is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Whether the widget reported focus most recently.
    pub fn is_focused(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|mounted| mounted.bridge.focused.get())
    }

    /// The widget content, if mounted.
    pub fn value(&self) -> Option<String> {
        self.widget().map(EditorWidget::value)
    }

    /// The placeholder the widget is attached to, if mounted.
    pub fn placeholder(&self) -> Option<&Placeholder> {
        self.placeholder.as_ref()
    }

    /// The current props.
    pub fn props(&self) -> &CodeMirrorProps {
        &self.props
    }

    /// The mounted widget.
    pub fn widget(&self) -> Option<&F::Widget> {
        self.mounted.as_ref().map(|mounted| &mounted.widget)
    }

    /// The mounted widget, mutably. Use this to drive user-level input.
    pub fn widget_mut(&mut self) -> Option<&mut F::Widget> {
        self.mounted.as_mut().map(|mounted| &mut mounted.widget)
    }

    /// The widget factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: WidgetFactory> Drop for CodeMirror<F> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<F: WidgetFactory> std::fmt::Debug for CodeMirror<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeMirror")
            .field("props", &self.props)
            .field("placeholder", &self.placeholder)
            .field("mounted", &self.is_mounted())
            .field("focused", &self.is_focused())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_codemirror_core::Result;
    use crate::options::names;
    use crate::widget::{ChangeOrigin, Position, TextAreaFactory};
    use parking_lot::Mutex;

    fn mounted(props: CodeMirrorProps) -> CodeMirror<TextAreaFactory> {
        let mut editor = CodeMirror::new(TextAreaFactory::default(), props);
        let placeholder = editor.render().placeholder.attached();
        editor.mount(placeholder).unwrap();
        editor
    }

    #[test]
    fn test_render_describes_placeholder() {
        let editor = CodeMirror::new(
            TextAreaFactory::default(),
            CodeMirrorProps::new()
                .with_path("notes.md")
                .with_value("# Notes")
                .with_auto_focus(true)
                .with_class_name("markdown"),
        );
        let output = editor.render();

        assert_eq!(output.class_name, "CodeMirrorAdapter markdown");
        assert_eq!(output.placeholder.name(), "notes.md");
        assert_eq!(output.placeholder.default_value(), "# Notes");
        assert!(output.placeholder.autofocus());
        assert!(!output.placeholder.is_attached());
    }

    #[test]
    fn test_mount_rejects_detached_placeholder() {
        let mut editor = CodeMirror::new(TextAreaFactory::default(), CodeMirrorProps::new());
        let err = editor.try_mount(Placeholder::new("x")).unwrap_err();
        assert!(matches!(err.error(), Error::PlaceholderDetached { .. }));
        assert!(!editor.is_mounted());

        // The same element mounts once it is attached.
        let placeholder = err.into_placeholder().attached();
        assert!(editor.mount(placeholder).is_ok());
    }

    #[test]
    fn test_mount_twice_is_rejected() {
        let mut editor = mounted(CodeMirrorProps::new().with_value("a"));
        let err = editor
            .try_mount(Placeholder::new("other").attached())
            .unwrap_err();
        assert!(matches!(err.error(), Error::AlreadyMounted));
        assert_eq!(err.placeholder().name(), "other");
        assert_eq!(editor.value().as_deref(), Some("a"));
    }

    #[test]
    fn test_factory_error_leaves_component_unmounted() {
        let failing = |_: &mut Placeholder, _: &crate::options::EditorOptions| -> Result<crate::widget::TextAreaWidget> {
            Err(Error::widget_creation("backend unavailable"))
        };
        let mut editor = CodeMirror::new(failing, CodeMirrorProps::new());

        let returned = editor
            .mount(Placeholder::new("x").with_default_value("kept").attached())
            .unwrap_err();
        assert_eq!(returned.default_value(), "kept");
        assert!(returned.is_mountable());
        assert!(!editor.is_mounted());
        assert!(editor.unmount().is_none());
    }

    #[test]
    fn test_focus_flag_tracks_widget_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        let mut editor = mounted(
            CodeMirrorProps::new()
                .with_class_name("x")
                .on_focus_change(move |focused, _| seen_clone.lock().push(focused)),
        );
        assert!(!editor.is_focused());

        editor.widget_mut().unwrap().focus();
        assert!(editor.is_focused());
        assert_eq!(editor.class_name(), "CodeMirrorAdapter CodeMirrorAdapter--focused x");

        editor.widget_mut().unwrap().blur();
        assert!(!editor.is_focused());
        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_auto_focus_focuses_on_mount() {
        let editor = mounted(CodeMirrorProps::new().with_auto_focus(true));
        assert!(editor.is_focused());
        assert!(editor.widget().unwrap().has_focus());
    }

    #[test]
    fn test_updated_callbacks_are_used_by_live_listeners() {
        let first = Arc::new(Mutex::new(0));
        let second = Arc::new(Mutex::new(0));

        let first_clone = first.clone();
        let mut editor = mounted(
            CodeMirrorProps::new().on_change(move |_, _| *first_clone.lock() += 1),
        );

        let second_clone = second.clone();
        let report = editor.update(
            CodeMirrorProps::new().on_change(move |_, _| *second_clone.lock() += 1),
        );
        assert!(report.is_empty());

        editor.widget_mut().unwrap().replace_selection("x");
        assert_eq!(*first.lock(), 0);
        assert_eq!(*second.lock(), 1);
    }

    #[test]
    fn test_option_update_pushes_only_changed_options() {
        let mut editor = mounted(
            CodeMirrorProps::new()
                .with_option(names::MODE, "rust")
                .with_option(names::TAB_SIZE, 4),
        );

        let report = editor.update(
            CodeMirrorProps::new()
                .with_option(names::MODE, "rust")
                .with_option(names::TAB_SIZE, 2),
        );

        assert!(!report.value_updated);
        assert_eq!(report.options_updated, vec![names::TAB_SIZE.to_string()]);
        assert_eq!(
            editor.widget().unwrap().option(names::TAB_SIZE),
            Some(crate::options::OptionValue::Integer(2))
        );
    }

    #[test]
    fn test_uncontrolled_component_keeps_user_edits() {
        let mut editor = mounted(CodeMirrorProps::new().with_default_value("draft"));
        let widget = editor.widget_mut().unwrap();
        widget.set_cursor(widget.end_position());
        widget.replace_range("!", Position::new(0, 5), Position::new(0, 5), ChangeOrigin::Input);

        let report = editor.update(CodeMirrorProps::new().with_default_value("draft"));
        assert!(report.is_empty());
        assert_eq!(editor.value().as_deref(), Some("draft!"));
    }

    #[test]
    fn test_update_while_unmounted_is_noop() {
        let mut editor = CodeMirror::new(TextAreaFactory::default(), CodeMirrorProps::new());
        let report = editor.update(CodeMirrorProps::new().with_value("ignored"));
        assert!(report.is_empty());
        assert_eq!(editor.props().value.as_deref(), Some("ignored"));
        assert_eq!(editor.value(), None);
    }

    #[test]
    fn test_unmount_clears_focus() {
        let mut editor = mounted(CodeMirrorProps::new().with_auto_focus(true));
        assert!(editor.is_focused());

        let placeholder = editor.unmount().unwrap();
        assert!(!editor.is_focused());
        assert!(placeholder.is_mountable());
        assert!(editor.unmount().is_none());
    }
}
