use std::fmt;
use std::sync::{Arc, Mutex};

use failure_rail::config::DEFAULT_MESSAGE;
use failure_rail::tracing_ext::{log_failure, TraceResultExt};
use failure_rail::{info, message, new, Failure, StringCode};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

const A: StringCode = StringCode::new("A");

type Fields = Vec<(String, String)>;

/// Subscriber keeping the fields of every event.
#[derive(Clone, Default)]
struct Capture {
    events: Arc<Mutex<Vec<(Level, Fields)>>>,
}

struct FieldVisitor<'a>(&'a mut Fields);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.push((field.name().to_owned(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_owned(), format!("{value:?}")));
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut fields = Fields::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push((*event.metadata().level(), fields));
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn capture(f: impl FnOnce()) -> Vec<(Level, Fields)> {
    let subscriber = Capture::default();
    let events = Arc::clone(&subscriber.events);
    tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap();
    events.clone()
}

fn field<'a>(fields: &'a Fields, name: &str) -> Vec<&'a str> {
    fields.iter().filter(|(key, _)| key == name).map(|(_, value)| value.as_str()).collect()
}

#[test]
fn log_failure_emits_one_field_per_attribute() {
    let err = new(A, (message("user msg"), info!("id" => 7)));
    let events = capture(|| log_failure(&err));

    assert_eq!(events.len(), 1);
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::ERROR);

    let names: Vec<_> = fields.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(names, ["message", "code", "info", "error"]);
    assert_eq!(field(fields, "message"), ["user msg"]);
    assert_eq!(field(fields, "code"), ["A"]);
    assert_eq!(field(fields, "info"), [r#"[{"id": "7"}]"#]);
    assert_eq!(field(fields, "error"), [err.to_string().as_str()]);
}

#[test]
fn log_failure_falls_back_for_foreign_errors() {
    let events = capture(|| log_failure(&std::io::Error::other("eof")));
    let (_, fields) = &events[0];

    assert_eq!(field(fields, "message"), [DEFAULT_MESSAGE]);
    assert_eq!(field(fields, "code"), ["unknown"]);
    assert_eq!(field(fields, "error"), ["eof"]);
}

#[test]
fn trace_err_logs_errors_and_returns_them_unchanged() {
    let mut traced = None;
    let events = capture(|| {
        let result: Result<u32, Failure> = Err(new(A, ()));
        traced = Some(result.trace_err());
    });

    assert_eq!(events.len(), 1);
    assert!(traced.is_some_and(|result| result.is_err_and(|err| err.is(&[&A]))));
}

#[test]
fn trace_err_passes_ok_through_silently() {
    let mut traced = None;
    let events = capture(|| {
        let result: Result<u32, std::io::Error> = Ok(3);
        traced = Some(result.trace_err());
    });

    assert!(events.is_empty());
    assert_eq!(traced.and_then(Result::ok), Some(3));
}
