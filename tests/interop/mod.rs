use core::fmt;
use std::error::Error;
use std::io;

use failure_rail::{
    call_stack_of, cause_of, chain, code_of, info_list_of, info, is, message, message_of, new,
    wrap, Failure, LinkKind, StringCode,
};

const NOT_FOUND: StringCode = StringCode::new("not_found");

/// Application error that keeps a failure as its source.
#[derive(Debug)]
struct ServiceError {
    source: Failure,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("service failed")
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn failures_are_found_behind_foreign_errors() {
    let inner = new(NOT_FOUND, (message("No such user."), info!("id" => 3)));
    let outer = ServiceError { source: inner };

    assert!(is(&outer, &[&NOT_FOUND]));
    assert_eq!(message_of(&outer), "No such user.");
    assert_eq!(info_list_of(&outer).len(), 1);
    assert!(call_stack_of(&outer).is_some());
}

#[test]
fn chain_alternates_between_native_and_foreign_links() {
    let inner = wrap(io::Error::other("socket closed"), ());
    let service = ServiceError { source: inner };
    let outer = wrap(service, (message("retry later"),));

    let kinds: Vec<_> = chain(&outer).map(|link| link.kind()).collect();
    assert_eq!(
        kinds,
        [
            LinkKind::CallStack,
            LinkKind::Message,
            LinkKind::Foreign,
            LinkKind::CallStack,
            LinkKind::Foreign,
        ]
    );

    let cause = cause_of(&outer);
    assert!(cause.downcast_ref::<io::Error>().is_some());
}

#[test]
fn foreign_display_ends_the_line() {
    let service = ServiceError { source: new(NOT_FOUND, ()) };
    let err = failure_rail::custom(service, (message("outer"),));

    assert_eq!(err.to_string(), "outer: service failed");
    assert!(is(&err, &[&NOT_FOUND]));
}

#[test]
fn failure_source_exposes_the_next_link() {
    let err = wrap(io::Error::other("eof"), ());

    let source = err.source().unwrap();
    assert!(source.downcast_ref::<io::Error>().is_some());
    assert!(source.source().is_none());
}

#[test]
fn boxed_errors_are_adapted_once() {
    let boxed: failure_rail::BoxError = Box::new(new(NOT_FOUND, ()));
    let err = Failure::from_boxed(boxed);

    assert_eq!(code_of(&err).unwrap(), NOT_FOUND);
    assert!(err.iter().all(|link| link.kind() != LinkKind::Foreign));
}
