//! A controlled editor driven by a text-area widget.
//!
//! Run with `RUST_LOG=horizon_codemirror=debug` to see lifecycle tracing.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use horizon_codemirror::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Application state the editor is bound to.
    let state = Arc::new(Mutex::new(String::from("fn main() {}\n")));

    let sink = state.clone();
    let props = CodeMirrorProps::new()
        .with_name("main.rs")
        .with_value(state.lock().clone())
        .with_option(names::MODE, "rust")
        .with_option(names::LINE_NUMBERS, true)
        .with_preserve_scroll_position(true)
        .on_change(move |value, change| {
            println!("edit from {} at {}", change.origin, change.from);
            *sink.lock() = value.to_string();
        })
        .on_focus_change(|focused, _| println!("focused: {focused}"));

    let mut editor = CodeMirror::new(TextAreaFactory::default(), props.clone());
    let placeholder = editor.render().placeholder.attached();
    editor.try_mount(placeholder)?;
    println!("class: {}", editor.class_name());

    if let Some(widget) = editor.widget_mut() {
        widget.focus();
        widget.set_cursor(widget.end_position());
        widget.replace_selection("// typed by the user\n");
    }
    println!("state after typing: {:?}", state.lock());

    // Re-render with the state as the controlled value; the widget is in sync.
    let report = editor.update(props.with_value(state.lock().clone()));
    println!("re-render changed anything: {}", !report.is_empty());

    if let Some(placeholder) = editor.unmount() {
        println!("placeholder keeps: {:?}", placeholder.default_value());
    }
    Ok(())
}
