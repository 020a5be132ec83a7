use tristate_rail::definition::{Definition, ErrorDefinition};
use tristate_rail::traits::{OptionExt, ResultExt};
use tristate_rail::Outcome;

const IO: Definition = Definition::new(500, "I/O failure");

#[test]
fn option_into_outcome() {
    assert_eq!(Some(1).into_outcome(), Outcome::success(1));
    assert!(None::<u8>.into_outcome().is_empty());
}

#[test]
fn option_or_failure() {
    assert_eq!(Some(1).or_failure(IO.as_context()), Outcome::success(1));
    let failed = None::<u8>.or_failure_with(|| IO.because("missing"));
    assert_eq!(failed.failure_value().unwrap().reason(), Some("missing"));
}

#[test]
fn result_ctx_attaches_the_error_as_cause() {
    let out = Err::<u8, _>(std::io::Error::other("eof")).ctx(IO.because("reading"));
    let ctx = out.failure_value().unwrap();
    assert_eq!(ctx.reason(), Some("reading"));
    assert_eq!(ctx.cause().map(ToString::to_string).as_deref(), Some("eof"));
}

#[test]
fn result_ctx_keeps_business_errors() {
    let upstream = IO.because("upstream");
    let out = Err::<u8, _>(upstream.clone().into_exception()).ctx(IO.because("ignored"));
    assert_eq!(out, Outcome::Failure(upstream));
}

#[test]
fn result_ok_becomes_success() {
    assert_eq!(Ok::<_, std::io::Error>(3).ctx(IO.as_context()), Outcome::success(3));
}
