use failure_rail::{AnyCode, Code, StringCode, UNKNOWN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CustomCode(&'static str);

impl Code for CustomCode {
    fn error_code(&self) -> &str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpCode {
    NotFound,
    Conflict,
}

impl Code for HttpCode {
    fn error_code(&self) -> &str {
        match self {
            HttpCode::NotFound => "not_found",
            HttpCode::Conflict => "conflict",
        }
    }
}

#[test]
fn identifiers() {
    assert_eq!(StringCode::new("123").error_code(), "123");
    assert_eq!(CustomCode("123").error_code(), "123");
    assert_eq!(HttpCode::Conflict.error_code(), "conflict");
}

#[test]
fn equality_needs_same_type_and_identifier() {
    assert_eq!(AnyCode::new(StringCode::new("123")), StringCode::new("123"));
    assert_eq!(AnyCode::new(CustomCode("123")), CustomCode("123"));
    assert_ne!(AnyCode::new(StringCode::new("123")), AnyCode::new(CustomCode("123")));
    assert_ne!(AnyCode::new(HttpCode::NotFound), AnyCode::new(HttpCode::Conflict));
}

#[test]
fn enum_codes_match_by_variant() {
    let code = AnyCode::from(HttpCode::NotFound);

    assert!(code.matches(&HttpCode::NotFound));
    assert!(!code.matches(&StringCode::new("not_found")));
    assert!(code.is::<HttpCode>());
}

#[test]
fn unknown_code() {
    assert_eq!(UNKNOWN.error_code(), "unknown");
    assert_eq!(UNKNOWN.to_string(), "unknown");
}

#[test]
fn string_code_conversions() {
    let borrowed: StringCode = "a".into();
    let owned: StringCode = String::from("a").into();

    assert_eq!(borrowed, owned);
    assert_eq!(owned.as_str(), "a");
}
