use std::borrow::Cow;
use tristate_rail::definition::{Definition, ErrorCode, ErrorDefinition, StdError};
use tristate_rail::{error_catalog, rail_args, Cause, ErrorContext};

error_catalog! {
    /// Catalog used across these tests.
    pub enum ShopError {
        /// Numeric code.
        OutOfStock => (409, "Item is out of stock"),
        Coupon => ("SHOP-COUPON", "Coupon rejected"),
    }
}

struct Dynamic {
    id: u32,
}

impl ErrorDefinition for Dynamic {
    fn code(&self) -> ErrorCode {
        ErrorCode::Text(Cow::Owned(format!("DYN-{}", self.id)))
    }

    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed("dynamic definition")
    }
}

#[test]
fn catalog_variants_expose_code_and_message() {
    assert_eq!(ShopError::OutOfStock.code(), ErrorCode::Int(409));
    assert_eq!(ShopError::OutOfStock.message(), "Item is out of stock");
    assert_eq!(ShopError::Coupon.code(), ErrorCode::from("SHOP-COUPON"));
}

#[test]
fn as_context_copies_code_and_message_only() {
    let ctx = ShopError::Coupon.as_context();
    assert_eq!(ctx.code().map(ToString::to_string).as_deref(), Some("SHOP-COUPON"));
    assert_eq!(ctx.message(), Some("Coupon rejected"));
    assert_eq!(ctx.reason(), None);
    assert!(ctx.cause().is_none());
}

#[test]
fn because_sets_reason() {
    let ctx = ShopError::OutOfStock.because("sku 12");
    assert_eq!(ctx.reason(), Some("sku 12"));
}

#[test]
fn because_of_formats_and_extracts_cause() {
    let ctx = ShopError::OutOfStock.because_of("sku {} in {}", &rail_args![12, "berlin", Cause::msg("db")]);
    assert_eq!(ctx.reason(), Some("sku 12 in berlin"));
    assert_eq!(ctx.cause(), Some(&Cause::msg("db")));
}

#[test]
fn to_error_renders_the_definition() {
    let err = ShopError::OutOfStock.to_error();
    assert_eq!(err.code().and_then(ErrorCode::as_int), Some(409));
    assert!(err.to_string().contains(">>> Item is out of stock"));
}

#[test]
fn custom_implementations_work_through_dyn() {
    let def: &dyn ErrorDefinition = &Dynamic { id: 3 };
    let ctx = ErrorContext::of(def);
    assert_eq!(ctx.code(), Some(&ErrorCode::from("DYN-3".to_string())));
    assert_eq!(def.as_context(), ctx);
}

#[test]
fn const_definitions() {
    const TEXT: Definition = Definition::text("T-1", "text coded");
    const NUM: Definition = Definition::new(-1, "negative");
    assert_eq!(TEXT.code().as_int(), None);
    assert_eq!(NUM.code().as_int(), Some(-1));
}

#[test]
fn missing_definition_becomes_construction_error() {
    let ctx = ErrorContext::of_optional(None);
    assert_eq!(ctx.code(), Some(&StdError::ResultCreation.code()));
    assert!(ctx.reason().is_some());

    let ctx = ErrorContext::of_optional(Some(&ShopError::Coupon));
    assert_eq!(ctx.message(), Some("Coupon rejected"));
}

#[test]
fn std_catalog_is_stable() {
    let expected = [
        (StdError::InternalServerError, 9999),
        (StdError::ResultCreation, 9001),
        (StdError::ResultContent, 9002),
        (StdError::ResultInvoke, 9003),
        (StdError::ResultMap, 9004),
        (StdError::NullResult, 9005),
    ];
    for (definition, code) in expected {
        assert_eq!(definition.code().as_int(), Some(code), "{:?}", definition);
    }
}
