//! Behavioural tests for the shared-utils crate.
//!
//! These tests exercise guard chains, UUID parsing, and optional lookups
//! against Gherkin scenarios.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use shared_utils::{Exception, ExceptionKind, Guard, Optional, Uuid};

/// Test world holding inputs and outcomes for each scenario.
#[derive(Default, ScenarioState)]
struct World {
    text_input: Slot<Option<String>>,
    guard_result: Slot<Result<(), Exception>>,
    uuid_text: Slot<String>,
    uuid_result: Slot<Result<Uuid, Exception>>,
    lookup: Slot<Optional<String>>,
    lookup_result: Slot<Result<String, Exception>>,
}

impl World {
    /// Extracts the guard failure, panicking when the guard passed.
    fn guard_failure(&self) -> Exception {
        self.guard_result
            .get()
            .expect("guard result should be set")
            .expect_err("guard should have failed")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the text input \"{text}\"")]
fn the_text_input(world: &World, text: String) {
    world.text_input.set(Some(text));
}

#[given("no text input")]
fn no_text_input(world: &World) {
    world.text_input.set(None);
}

#[given("the UUID text \"{text}\"")]
fn the_uuid_text(world: &World, text: String) {
    world.uuid_text.set(text);
}

#[given("an empty lookup result")]
fn an_empty_lookup_result(world: &World) {
    world.lookup.set(Optional::empty());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the input is guarded against null and whitespace")]
fn the_input_is_guarded(world: &World) {
    let input = world.text_input.get().expect("text input should be set");
    let result = Guard::check_named(&input, "input")
        .against_null_or_undefined()
        .and_then(Guard::against_whitespace)
        .map(|_| ());
    world.guard_result.set(result);
}

#[when("the UUID text is parsed")]
fn the_uuid_text_is_parsed(world: &World) {
    let text = world.uuid_text.get().expect("UUID text should be set");
    world.uuid_result.set(Uuid::parse(&text));
}

#[when("the lookup result is required")]
fn the_lookup_result_is_required(world: &World) {
    let lookup = world.lookup.get().expect("lookup should be set");
    world
        .lookup_result
        .set(lookup.get_or_throw("record not found"));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the guard passes")]
fn the_guard_passes(world: &World) {
    let result = world.guard_result.get().expect("guard result should be set");
    assert!(result.is_ok(), "Expected guard to pass: {result:?}");
}

#[then("the guard fails with an illegal argument")]
fn the_guard_fails_with_an_illegal_argument(world: &World) {
    assert_eq!(world.guard_failure().kind(), ExceptionKind::IllegalArgument);
}

#[then("the failure message contains \"{fragment}\"")]
fn the_failure_message_contains(world: &World, fragment: String) {
    let failure = world.guard_failure();
    assert!(
        failure.message().contains(&fragment),
        "Expected '{}' to contain '{fragment}'",
        failure.message()
    );
}

#[then("parsing succeeds")]
fn parsing_succeeds(world: &World) {
    let result = world.uuid_result.get().expect("UUID result should be set");
    assert!(result.is_ok(), "Expected parsing to succeed: {result:?}");
}

#[then("parsing fails with an illegal argument")]
fn parsing_fails_with_an_illegal_argument(world: &World) {
    let result = world.uuid_result.get().expect("UUID result should be set");
    match result {
        Err(err) if err.is(ExceptionKind::IllegalArgument) => {}
        other => panic!("Expected IllegalArgument, got: {other:?}"),
    }
}

#[then("the lookup fails with not found")]
fn the_lookup_fails_with_not_found(world: &World) {
    let result = world
        .lookup_result
        .get()
        .expect("lookup result should be set");
    match result {
        Err(err) if err.is(ExceptionKind::NotFound) => {}
        other => panic!("Expected NotFound, got: {other:?}"),
    }
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/shared_utils.feature",
    name = "Valid text passes a chained guard"
)]
fn valid_text_passes_a_chained_guard(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_utils.feature",
    name = "Blank text fails a chained guard"
)]
fn blank_text_fails_a_chained_guard(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_utils.feature",
    name = "Missing text fails a chained guard"
)]
fn missing_text_fails_a_chained_guard(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_utils.feature",
    name = "Canonical UUID parses successfully"
)]
fn canonical_uuid_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_utils.feature",
    name = "Truncated UUID fails parsing"
)]
fn truncated_uuid_fails_parsing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/shared_utils.feature",
    name = "Absent lookup result raises not found"
)]
fn absent_lookup_result_raises_not_found(world: World) {
    let _ = world;
}
