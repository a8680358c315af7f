//! crates/steadylog/src/tracing_bridge.rs
//! Bridge between the tracing crate and the console emitter.
//!
//! [`SteadyLayer`] is a tracing-subscriber layer that renders every event it
//! sees through [`emit`](crate::emit), so crates instrumented with `tracing`
//! share the threshold, colors and line layout of `log_*!` call sites.
//!
//! - `TRACE` and `DEBUG` map to [`Severity::Debug`]
//! - `INFO` maps to [`Severity::Info`]
//! - `WARN` maps to [`Severity::Warning`]
//! - `ERROR` maps to [`Severity::Error`]
//!
//! The event target stands in for the module name and the callsite's file and
//! line become the location annotation.
//!
//! ```rust,ignore
//! steadylog::init_tracing();
//! tracing::warn!(target: "tracker", "announce failed: {}", reason);
//! ```

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::emitter::emit;
use crate::level::Severity;
use crate::state::enabled;

/// A tracing layer that writes events as console log lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct SteadyLayer {
    _private: (),
}

impl SteadyLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG | Level::TRACE => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for SteadyLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());
        if !enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.unwrap_or_default();

        emit(
            severity,
            metadata.file().unwrap_or("<unknown>"),
            metadata.line().unwrap_or(0),
            Some(metadata.target()),
            format_args!("{message}{}", visitor.fields),
        );
    }
}

/// Collects the `message` field and appends the rest as ` key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            use fmt::Write as _;
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            use fmt::Write as _;
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Installs a global tracing subscriber that routes events through
/// [`SteadyLayer`].
///
/// Also latches the process-wide logger state if nothing has yet. Panics if
/// another global subscriber is already installed, as
/// `tracing_subscriber::util::SubscriberInitExt::init` does.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    crate::state::init_logging();

    tracing_subscriber::registry().with(SteadyLayer::new()).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_level_to_severity() {
        assert_eq!(SteadyLayer::level_to_severity(&Level::ERROR), Severity::Error);
        assert_eq!(SteadyLayer::level_to_severity(&Level::WARN), Severity::Warning);
        assert_eq!(SteadyLayer::level_to_severity(&Level::INFO), Severity::Info);
        assert_eq!(SteadyLayer::level_to_severity(&Level::DEBUG), Severity::Debug);
        assert_eq!(SteadyLayer::level_to_severity(&Level::TRACE), Severity::Debug);
    }

    type Captured = Arc<Mutex<Vec<(Option<String>, String)>>>;

    struct Capture(Captured);

    impl<S: Subscriber> Layer<S> for Capture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor::default();
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((visitor.message, visitor.fields));
        }
    }

    #[test]
    fn visitor_separates_message_from_fields() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&captured)));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(peer = 42, "handshake done");
            tracing::warn!(reason = "timeout");
        });

        let events = captured.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0.as_deref(), Some("handshake done"));
        assert_eq!(events[0].1, " peer=42");
        assert_eq!(events[1].0, None);
        assert_eq!(events[1].1, " reason=timeout");
    }
}
