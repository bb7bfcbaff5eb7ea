use failure_rail::config::{config, DEFAULT_MESSAGE};
use failure_rail::{
    call_stack_of, cause_of, code_of, code_or_unknown, find_message, info_list_of, message,
    message_of, new, translate, with_info, wrap, Failure, Info, StringCode, UNKNOWN,
};
use std::io;

const A: StringCode = StringCode::new("A");

#[test]
fn code_or_unknown_falls_back_to_the_configured_code() {
    let plain = io::Error::other("plain");

    assert_eq!(code_or_unknown(&plain), UNKNOWN);
    assert_eq!(code_or_unknown(&plain), config().unknown_code);
    assert_eq!(code_or_unknown(&new(A, ())), A);
}

#[test]
fn message_of_plain_errors_is_the_default() {
    let plain = io::Error::other("plain");

    assert_eq!(find_message(&plain), None);
    assert_eq!(message_of(&plain), DEFAULT_MESSAGE);
}

#[test]
fn root_text_is_not_a_message() {
    let err = Failure::msg("root text");

    assert_eq!(find_message(&err), None);
    assert_eq!(err.to_string(), "root text");
}

#[test]
fn cause_of_native_chain_is_its_root() {
    let err = wrap(translate(new(A, ()), StringCode::new("B"), ()), ());
    let cause = cause_of(&err);

    let root = cause.downcast_ref::<Failure>().unwrap();
    assert!(root.underlying().is_none());
    assert_eq!(root.to_string(), "A");
}

#[test]
fn cause_of_plain_error_is_itself() {
    let plain = io::Error::other("plain");
    let cause = cause_of(&plain);

    assert_eq!(cause.to_string(), "plain");
    assert!(cause.downcast_ref::<io::Error>().is_some());
}

#[test]
fn cause_of_wrapped_foreign_error_is_the_foreign_error() {
    let err = wrap(io::Error::new(io::ErrorKind::NotFound, "gone"), (message("m"),));
    let cause = err.cause();

    let io_err = cause.downcast_ref::<io::Error>().unwrap();
    assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn plain_errors_have_no_info_or_stack() {
    let plain = io::Error::other("plain");

    assert!(info_list_of(&plain).is_empty());
    assert!(call_stack_of(&plain).is_none());
    assert!(code_of(&plain).is_none());
}

#[test]
fn info_without_stack_when_built_with_custom() {
    let err = failure_rail::custom(
        Failure::msg("x"),
        (with_info(Info::new().with("a", 1)), with_info(Info::new().with("a", 2))),
    );

    let infos = info_list_of(&err);
    assert_eq!(infos.iter().map(|info| info.get::<i32>("a").copied()).collect::<Vec<_>>(), [
        Some(1),
        Some(2)
    ]);
    assert!(call_stack_of(&err).is_none());
}
