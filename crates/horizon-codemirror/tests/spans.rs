//! Lifecycle and signal spans carry the names published in `logging::span_names`.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::Registry;

use horizon_codemirror::logging::span_names;
use horizon_codemirror::prelude::*;

/// Records the name of every span opened.
#[derive(Clone, Default)]
struct SpanRecorder {
    names: Arc<Mutex<Vec<&'static str>>>,
}

impl<S: Subscriber> Layer<S> for SpanRecorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.names.lock().push(attrs.metadata().name());
    }
}

#[test]
fn lifecycle_and_signal_spans_use_published_names() {
    let recorder = SpanRecorder::default();
    let subscriber = Registry::default().with(recorder.clone());

    tracing::subscriber::with_default(subscriber, || {
        let props = CodeMirrorProps::new().with_value("one");
        let mut editor = CodeMirror::new(TextAreaFactory::default(), props.clone());
        let placeholder = editor.render().placeholder.attached();
        editor.mount(placeholder).unwrap();
        editor.update(props.with_value("two"));
        editor.unmount();
    });

    let names = recorder.names.lock();
    for expected in [
        span_names::MOUNT,
        span_names::UPDATE,
        span_names::UNMOUNT,
        span_names::SIGNAL,
    ] {
        assert!(names.contains(&expected), "missing span {expected}: {names:?}");
    }
}
