//! End-to-end checks of the three rewriters through real expansion.

use expandium::{logged, stringify, take_time};

#[logged("request")]
fn request(path: String, completion: impl FnOnce(String)) {
    completion(path);
}

#[logged("combine")]
fn combine(count: i64, label: String, completion: impl FnOnce(i64)) {
    completion(count + label.len() as i64);
}

#[logged("plain")]
fn plain(value: i64) -> i64 {
    value * 2
}

#[take_time("[test] ")]
fn accumulate(limit: u64) -> u64 {
    let mut total = 0;
    for value in 0..limit {
        total += value;
    }
    total
}

#[take_time("[test] ")]
fn record(events: &mut Vec<&'static str>) {
    events.push("first");
    events.push("second");
}

#[test]
fn stringify_captures_value_and_source() {
    let a = 17;
    let b = 25;
    let (value, code) = stringify!(a + b);
    assert_eq!(value, 42);
    assert_eq!(code, "a + b");
}

#[test]
fn stringify_captures_parenthesized_expressions() {
    let a = 6;
    let b = 8;
    let (value, code) = stringify!(a * (b - 1));
    assert_eq!(value, 42);
    assert_eq!(code, "a * (b - 1)");
}

#[tokio::test]
async fn bridged_request_returns_the_callback_argument() {
    let body = request("https://example.net".to_string()).await;
    assert_eq!(body, "https://example.net");
}

#[tokio::test]
async fn bridged_wrapper_forwards_parameters_in_order() {
    let value = combine(40, "xy".to_string()).await;
    assert_eq!(value, 42);
}

#[test]
fn combine_callback_form_matches_the_wrapper() {
    let mut seen = None;
    combine_with_callback(40, "xy".to_string(), |value| seen = Some(value));
    assert_eq!(seen, Some(42));
}

#[test]
fn callback_form_stays_reachable() {
    let mut seen = None;
    request_with_callback("kept".to_string(), |value| seen = Some(value));
    assert_eq!(seen.as_deref(), Some("kept"));
}

#[test]
fn non_callback_signature_is_untouched() {
    assert_eq!(plain(21), 42);
}

#[test]
fn timed_function_preserves_its_return_value() {
    assert_eq!(accumulate(5), 10);
    assert_eq!(accumulate(0), 0);
}

#[test]
fn timed_function_runs_body_side_effects_in_order() {
    let mut events = Vec::new();
    record(&mut events);
    assert_eq!(events, ["first", "second"]);
}
