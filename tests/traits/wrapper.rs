use failure_rail::{
    code_of, custom, message, with_call_stack, with_code, without_code, wrapper_fn, Failure,
    LinkKind, StringCode, Wrapper, Wrappers,
};

const A: StringCode = StringCode::new("A");

/// Wrapper tagging every failure with a fixed message.
struct Tag(&'static str);

impl Wrapper for Tag {
    fn wrap_error(&self, err: Failure) -> Failure {
        err.with_message(self.0)
    }
}

#[test]
fn user_defined_wrappers() {
    let err = custom(Failure::msg("root"), (Tag("outer"), Tag("inner")));
    assert_eq!(err.to_string(), "outer: inner: root");
}

#[test]
fn empty_wrapper_list_returns_the_error() {
    let root = Failure::msg("root");
    let err = ().wrap_all(root.clone());

    assert!(err.ptr_eq(&root));
}

#[test]
fn code_order_decides_the_effective_code() {
    let err = custom(Failure::msg("x"), (with_code(A), without_code()));
    assert_eq!(code_of(&err).unwrap(), A);

    let err = custom(Failure::msg("x"), (without_code(), with_code(A)));
    assert!(code_of(&err).is_none());
}

#[test]
fn call_stack_wrapper_captures_where_it_was_built() {
    let (stack, line) = (with_call_stack(), line!());
    let err = custom(Failure::msg("x"), (stack,));

    assert_eq!(err.iter().next().map(|link| link.kind()), Some(LinkKind::CallStack));
    assert_eq!(err.call_stack().map(|s| s.caller().line()), Some(line));
}

#[test]
fn closures_as_wrappers() {
    let upper = wrapper_fn(|err: Failure| {
        let text = err.to_string().to_uppercase();
        err.with_message(text)
    });

    let err = custom(Failure::msg("quiet"), (upper,));
    assert_eq!(err.message(), "QUIET");
}

#[test]
fn twelve_wrappers_in_a_tuple() {
    let m = |text: &'static str| message(text);
    let err = custom(
        Failure::msg("r"),
        (m("1"), m("2"), m("3"), m("4"), m("5"), m("6"), m("7"), m("8"), m("9"), m("10"), m("11"), m("12")),
    );

    assert_eq!(err.to_string(), "1: 2: 3: 4: 5: 6: 7: 8: 9: 10: 11: 12: r");
}
