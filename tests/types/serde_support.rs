use tristate_rail::definition::{Definition, ErrorCode, ErrorDefinition};
use tristate_rail::{Cause, ErrorContext, Outcome};

#[test]
fn context_serializes_only_present_fields() {
    let ctx = Definition::new(400, "Bad Input").because("missing");
    let json = serde_json::to_value(&ctx).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "code": 400, "message": "Bad Input", "reason": "missing" })
    );
}

#[test]
fn cause_is_serialized_as_text() {
    let ctx = ErrorContext::new().with_cause(std::io::Error::other("disk"));
    let json = serde_json::to_string(&ctx).unwrap();
    assert_eq!(json, r#"{"cause":"disk"}"#);

    let back: ErrorContext = serde_json::from_str(&json).unwrap();
    assert_eq!(back.cause(), Some(&Cause::msg("disk")));
}

#[test]
fn text_codes_stay_untagged() {
    let code: ErrorCode = serde_json::from_str(r#""E-7""#).unwrap();
    assert_eq!(code, ErrorCode::from("E-7"));
    let code: ErrorCode = serde_json::from_str("12").unwrap();
    assert_eq!(code.as_int(), Some(12));
}

#[test]
fn outcome_variants_serialize_externally_tagged() {
    let ok = serde_json::to_value(Outcome::success(3)).unwrap();
    assert_eq!(ok, serde_json::json!({ "Success": 3 }));

    let empty = serde_json::to_value(Outcome::<u8>::Empty).unwrap();
    assert_eq!(empty, serde_json::json!("Empty"));

    let failed: Outcome<u8> = Outcome::failure(Definition::new(1, "one").as_context());
    let json = serde_json::to_string(&failed).unwrap();
    let back: Outcome<u8> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, failed);
}

#[test]
fn blank_failure_deserializes_as_construction_error() {
    let back: Outcome<u8> = serde_json::from_str(r#"{"Failure":{}}"#).unwrap();
    assert_eq!(back, Outcome::failure(ErrorContext::new()));
    let ctx = back.failure_value().unwrap();
    assert_eq!(ctx.code(), Some(&ErrorCode::Int(9001)));
    assert_eq!(ctx.reason(), Some("The cause of the error was not indicated"));

    let empty: Outcome<u8> = serde_json::from_str(r#""Empty""#).unwrap();
    assert!(empty.is_empty());
}
