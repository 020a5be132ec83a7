use std::fmt;
use tristate_rail::format::{
    count_anchors, format, format_with_cause, ArgArray, FormatArg, FAILED_DISPLAY,
};
use tristate_rail::{rail_args, Cause};

#[test]
fn substitutes_anchors_in_order() {
    assert_eq!(format("Hi {}.", &rail_args!["there"]).message(), "Hi there.");
    assert_eq!(format("{}-{}-{}", &rail_args![1, 'b', 3.5]).message(), "1-b-3.5");
}

#[test]
fn escaped_anchor_is_literal_and_consumes_nothing() {
    let out = format("Set \\{} is not equal to {}.", &rail_args!["1,2"]);
    assert_eq!(out.message(), "Set {} is not equal to 1,2.");
}

#[test]
fn double_escape_keeps_one_backslash_and_substitutes() {
    let out = format("File name is C:\\\\{}.", &rail_args!["file.zip"]);
    assert_eq!(out.message(), "File name is C:\\file.zip.");
}

#[test]
fn pattern_without_arguments_is_returned_unchanged() {
    assert_eq!(format("a {} b \\{}", &rail_args![]).message(), "a {} b \\{}");
}

#[test]
fn surplus_anchors_are_left_in_place() {
    assert_eq!(format("{} and {}", &rail_args!["x"]).message(), "x and {}");
}

#[test]
fn surplus_arguments_are_ignored() {
    assert_eq!(format("only {}", &rail_args![1, 2, 3]).message(), "only 1");
}

#[test]
fn null_renders_as_null() {
    let absent: Option<&'static str> = None;
    assert_eq!(format("value={}", &rail_args![absent]).message(), "value=null");
    assert_eq!(format("{}", &[FormatArg::Null]).message(), "null");
}

#[test]
fn arrays_render_recursively() {
    let nested = vec![FormatArg::from(vec![1, 2]), FormatArg::from("x")];
    let out = format("{}", &rail_args![nested]);
    assert_eq!(out.message(), "[[1, 2], x]");
    assert_eq!(format("{}", &rail_args![[true, false]]).message(), "[true, false]");
    assert_eq!(format("{}", &rail_args![Vec::<u8>::new()]).message(), "[]");
}

#[test]
fn self_containing_array_renders_ellipsis() {
    let array = ArgArray::new();
    array.push("a");
    array.push(array.clone());
    array.push("b");
    assert_eq!(format("{}", &rail_args![array]).message(), "[a, [...], b]");
}

#[test]
fn sibling_repeats_are_expanded() {
    let shared: ArgArray = vec![1, 2].into_iter().collect();
    let outer: ArgArray = [FormatArg::from(shared.clone()), FormatArg::from(shared)]
        .into_iter()
        .collect();
    assert_eq!(format("{}", &rail_args![outer]).message(), "[[1, 2], [1, 2]]");
}

#[test]
fn indirect_cycle_is_cut_at_the_repeat() {
    let a = ArgArray::new();
    let b = ArgArray::new();
    a.push(1);
    a.push(b.clone());
    b.push(2);
    b.push(a.clone());
    assert_eq!(format("{}", &rail_args![a]).message(), "[1, [2, [...]]]");
}

struct Broken;

impl fmt::Display for Broken {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        Err(fmt::Error)
    }
}

#[test]
fn failing_display_is_isolated() {
    let out = format("{} then {}", &[FormatArg::display(Broken), FormatArg::from("ok")]);
    assert_eq!(out.message(), format!("{} then ok", FAILED_DISPLAY));
}

struct Panicking;

impl fmt::Display for Panicking {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("display exploded")
    }
}

#[test]
fn panicking_display_is_isolated() {
    let args = [FormatArg::from("a"), FormatArg::display(Panicking), FormatArg::from("c")];
    let out = format("{}, {}, {}", &args);
    assert_eq!(out.message(), format!("a, {}, c", FAILED_DISPLAY));

    let array: ArgArray = [FormatArg::display(Panicking)].into_iter().collect();
    let nested = format("{}", &[FormatArg::from(array)]);
    assert_eq!(nested.message(), format!("[{}]", FAILED_DISPLAY));
}

#[test]
fn trailing_fault_becomes_cause_when_unused() {
    let io = std::io::Error::other("disk gone");
    let out = format("write {} failed", &[FormatArg::from("a.log"), FormatArg::fault(io)]);
    assert_eq!(out.message(), "write a.log failed");
    assert_eq!(out.cause().map(ToString::to_string).as_deref(), Some("disk gone"));
}

#[test]
fn trailing_fault_consumed_by_anchor_stays_an_argument() {
    let out = format("failed: {}", &rail_args![Cause::msg("boom")]);
    assert_eq!(out.message(), "failed: boom");
    assert!(out.cause().is_none());
}

#[test]
fn fault_alone_with_no_anchor_is_extracted() {
    let out = format("plain", &rail_args![Cause::msg("boom")]);
    assert_eq!(out.message(), "plain");
    assert!(out.cause().is_some());
}

#[test]
fn explicit_cause_is_passed_through() {
    let out = format_with_cause("{}!", &rail_args!["hey"], Some(Cause::msg("why")));
    let (message, cause) = out.into_parts();
    assert_eq!(message, "hey!");
    assert_eq!(cause, Some(Cause::msg("why")));
}

#[test]
fn count_anchors_skips_escaped_ones() {
    assert_eq!(count_anchors("no anchors"), 0);
    assert_eq!(count_anchors("{}{}"), 2);
    assert_eq!(count_anchors("\\{} {}"), 1);
    assert_eq!(count_anchors("\\\\{}"), 1);
}

#[test]
fn formatting_is_safe_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || format("t{}", &rail_args![i]).message().to_owned()))
        .collect();
    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs, ["t0", "t1", "t2", "t3"]);
}
