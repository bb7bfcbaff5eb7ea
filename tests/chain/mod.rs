use failure_rail::{
    call_stack_of, code_of, custom, info_list_of, is, is_uncoded, mark_unexpected, message,
    message_of, new, translate, unexpected, with_code, with_info, wrap, Code, Failure, Info,
    LinkKind, ResultExt, StringCode,
};
use std::io;

const A: StringCode = StringCode::new("A");
const B: StringCode = StringCode::new("B");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CustomCode(&'static str);

impl Code for CustomCode {
    fn error_code(&self) -> &str {
        self.0
    }
}

#[test]
fn is_follows_the_effective_code() {
    let err_a = new(A, ());
    let err_b = translate(err_a.clone(), B, ());
    let err_c = wrap(err_b.clone(), ());

    assert!(is(&err_a, &[&A]));
    assert!(is(&err_b, &[&B]));
    assert!(is(&err_c, &[&B]));

    assert!(is(&err_a, &[&A, &B]));
    assert!(is(&err_b, &[&A, &B]));
    assert!(is(&err_c, &[&A, &B]));

    assert!(!is(&err_a, &[&B]));
    assert!(!is(&err_b, &[&A]));
    assert!(!is(&err_c, &[&A]));
}

#[test]
fn is_without_error_or_candidates() {
    let ok: Result<(), Failure> = Ok(());
    assert!(!ok.is(&[&A, &B]));
    assert!(ok.is_uncoded());

    let eof = io::Error::from(io::ErrorKind::UnexpectedEof);
    assert!(!is(&eof, &[&A, &B]));
    assert!(is_uncoded(&eof));

    assert!(!is(&new(A, ()), &[]));
}

#[test]
fn codes_of_different_types_never_match() {
    const C: CustomCode = CustomCode("A");

    let err = new(C, ());
    assert!(is(&err, &[&C]));
    assert!(!is(&err, &[&A]));
    assert!(!is(&new(A, ()), &[&C]));
}

#[test]
fn first_wrapper_is_outermost() {
    let err = custom(Failure::msg("foo"), (message("aaa"), message("bbb")));
    assert_eq!(err.to_string(), "aaa: bbb: foo");
}

#[test]
fn mark_unexpected_hides_previous_codes() {
    let err = mark_unexpected(translate(new(A, ()), B, ()), ());
    assert!(code_of(&err).is_none());
    assert!(is_uncoded(&err));
    assert!(!is(&err, &[&A, &B]));

    let recoded = mark_unexpected(new(A, ()), (with_code(B),));
    assert_eq!(code_of(&recoded).unwrap(), B);

    let translated = translate(mark_unexpected(new(A, ()), ()), B, ());
    assert_eq!(code_of(&translated).unwrap(), B);
}

#[test]
fn unexpected_has_no_code() {
    let err = unexpected("disk on fire", ());

    assert!(is_uncoded(&err));
    assert!(err.to_string().ends_with("disk on fire"));
    assert_eq!(message_of(&err), failure_rail::config::DEFAULT_MESSAGE);
}

#[test]
fn call_stack_of_returns_the_deepest_stack() {
    let (inner, inner_line) = (new(A, ()), line!());
    let outer = wrap(wrap(inner, ()), ());

    let stack = call_stack_of(&outer).unwrap();
    assert_eq!(stack.caller().line(), inner_line);
}

#[test]
fn result_wrapping_records_the_call_site() {
    let result: Result<(), io::Error> = Err(io::Error::other("boom"));
    let (wrapped, line) = (result.wrap(()), line!());

    let err = wrapped.unwrap_err();
    assert_eq!(err.call_stack().unwrap().caller().line(), line);
    assert_eq!(err.call_stack().unwrap().caller().file(), file!());
}

#[test]
fn info_maps_are_listed_outermost_first_without_merging() {
    let inner = new(A, (with_info(Info::new().with("key", "inner")),));
    let outer = wrap(inner, (with_info(Info::new().with("key", "outer")),));

    let infos = info_list_of(&outer);
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].get::<&str>("key"), Some(&"outer"));
    assert_eq!(infos[1].get::<&str>("key"), Some(&"inner"));
}

#[test]
fn outermost_message_wins() {
    let inner = new(A, (message("inner"),));
    assert_eq!(message_of(&inner), "inner");

    let outer = wrap(inner, (message("outer"),));
    assert_eq!(message_of(&outer), "outer");

    let empty = wrap(outer, (message(""),));
    assert_eq!(message_of(&empty), "outer");
}

#[test]
fn wrap_keeps_the_original_chain() {
    let inner = new(A, (message("m"),));
    let outer = wrap(inner.clone(), ());

    assert_eq!(outer.underlying().map(|link| link.ptr_eq(&inner)), Some(true));
    assert_eq!(inner.message(), "m");
}

#[test]
fn accessors_are_idempotent() {
    let err = wrap(new(A, (message("m"), with_info(Info::new().with("k", 1)))), ());

    assert_eq!(code_of(&err), code_of(&err));
    assert_eq!(message_of(&err), message_of(&err));
    assert_eq!(info_list_of(&err).len(), info_list_of(&err).len());
    assert_eq!(err.to_string(), err.to_string());
}

#[test]
fn constructor_link_layout() {
    let kinds = |err: &Failure| err.iter().map(|link| link.kind()).collect::<Vec<_>>();

    assert_eq!(kinds(&new(A, ())), [LinkKind::CallStack, LinkKind::Code]);
    assert_eq!(
        kinds(&mark_unexpected(Failure::msg("x"), ())),
        [LinkKind::CallStack, LinkKind::WithoutCode, LinkKind::Root]
    );
    assert_eq!(
        kinds(&wrap(io::Error::other("x"), (message("m"),))),
        [LinkKind::CallStack, LinkKind::Message, LinkKind::Foreign]
    );
}
