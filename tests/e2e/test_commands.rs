//! End-to-end command-stream tests through the public API.
//!
//! Each test feeds a whole script to a fresh session and compares the
//! response lines, the way the binary would be driven over stdin/stdout.

use hexroute::run_script;

fn lines(script: &str) -> Vec<String> {
    run_script(script).lines().map(str::to_owned).collect()
}

// ── Basic flows ──────────────────────────────────────────────────────────────

#[test]
fn test_init_then_corner_to_corner() {
    assert_eq!(lines("init 3 3\ntravel_cost 0 0 2 2"), vec!["OK", "3"]);
}

#[test]
fn test_single_cell_self_query() {
    assert_eq!(lines("init 1 1\ntravel_cost 0 0 0 0"), vec!["OK", "0"]);
}

#[test]
fn test_dead_end_forces_the_other_path() {
    let script = "init 2 2\n\
                  travel_cost 0 0 1 1\n\
                  change_cost 0 1 -1 1\n\
                  travel_cost 0 0 1 1";
    // (0,1) drops to exit cost 0 and stops forwarding, but the path through
    // (1,0) still costs 2.
    assert_eq!(lines(script), vec!["OK", "2", "OK", "2"]);
}

#[test]
fn test_air_route_round_trip() {
    let script = "init 2 2\n\
                  toggle_air_route 0 0 1 1\n\
                  travel_cost 0 0 1 1\n\
                  toggle_air_route 0 0 1 1\n\
                  travel_cost 0 0 1 1";
    assert_eq!(lines(script), vec!["OK", "OK", "1", "OK", "2"]);
}

#[test]
fn test_radial_rise_reroutes_around_center() {
    let script = "init 3 3\n\
                  change_cost 1 1 10 2\n\
                  travel_cost 0 0 2 2";
    // Center 11, ring 6; cheapest is around the ring: 1 + 6 + 6.
    assert_eq!(lines(script), vec!["OK", "OK", "13"]);
}

// ── Error reporting ──────────────────────────────────────────────────────────

#[test]
fn test_everything_fails_before_init() {
    let script = "change_cost 0 0 1 1\n\
                  toggle_air_route 0 0 1 1\n\
                  travel_cost 0 0 1 1";
    assert_eq!(lines(script), vec!["KO", "KO", "-1"]);
}

#[test]
fn test_out_of_range_parameters() {
    let script = "init 3 3\n\
                  change_cost 0 0 11 1\n\
                  change_cost 0 0 -11 1\n\
                  change_cost 0 0 5 0\n\
                  change_cost 5 5 1 1\n\
                  toggle_air_route 0 0 3 3";
    assert_eq!(lines(script), vec!["OK", "KO", "KO", "KO", "KO", "KO"]);
}

#[test]
fn test_malformed_argument_reinterpreted_as_command() {
    assert_eq!(lines("init ab 3"), vec!["KO", "KO", "KO"]);
}

#[test]
fn test_unknown_command_answers_ko() {
    assert_eq!(lines("teleport"), vec!["KO"]);
}

#[test]
fn test_travel_cost_swallows_bad_coordinates() {
    assert_eq!(
        lines("init 2 2\ntravel_cost 0 0 9 9\ntravel_cost -3 0 1 1"),
        vec!["OK", "-1", "-1"]
    );
}

// ── State across commands ────────────────────────────────────────────────────

#[test]
fn test_queries_see_each_mutation() {
    let script = "init 5 1\n\
                  travel_cost 0 0 4 0\n\
                  change_cost 2 0 10 1\n\
                  travel_cost 0 0 4 0\n\
                  change_cost 2 0 -10 1\n\
                  travel_cost 0 0 4 0";
    // A 1x5 strip: 4 exits of 1, then the middle exit rises to 11, then
    // drops back to 1.
    assert_eq!(lines(script), vec!["OK", "4", "OK", "14", "OK", "4"]);
}

#[test]
fn test_zero_delta_does_not_change_answers() {
    let script = "init 4 4\n\
                  travel_cost 0 0 3 3\n\
                  change_cost 1 1 0 2\n\
                  travel_cost 0 0 3 3";
    let out = lines(script);
    assert_eq!(out[0], "OK");
    assert_eq!(out[2], "OK");
    assert_eq!(out[1], out[3]);
}

#[test]
fn test_reinit_starts_from_scratch() {
    let script = "init 2 2\n\
                  change_cost 0 0 10 1\n\
                  toggle_air_route 0 0 1 1\n\
                  init 2 2\n\
                  travel_cost 0 0 1 1";
    assert_eq!(lines(script), vec!["OK", "OK", "OK", "OK", "2"]);
}

#[test]
fn test_failed_init_keeps_the_map() {
    let script = "init 2 2\ninit -1 5\ntravel_cost 0 0 1 0";
    assert_eq!(lines(script), vec!["OK", "KO", "1"]);
}

#[test]
fn test_sixth_route_fails_without_clobbering() {
    let script = "init 7 1\n\
                  toggle_air_route 0 0 1 0\n\
                  toggle_air_route 0 0 2 0\n\
                  toggle_air_route 0 0 3 0\n\
                  toggle_air_route 0 0 4 0\n\
                  toggle_air_route 0 0 5 0\n\
                  toggle_air_route 0 0 6 0\n\
                  travel_cost 0 0 5 0";
    // The sixth insertion fails; the existing route to (5,0) still works.
    assert_eq!(
        lines(script),
        vec!["OK", "OK", "OK", "OK", "OK", "OK", "KO", "1"]
    );
}

#[test]
fn test_unreachable_stays_unreachable_across_queries() {
    let script = "init 2 2\n\
                  change_cost 0 0 -1 1\n\
                  travel_cost 0 0 1 1\n\
                  travel_cost 0 0 1 1\n\
                  change_cost 0 0 1 1\n\
                  travel_cost 0 0 1 1";
    // The source becomes a sink, the unreachable answer is served twice
    // (second time from cache), then the repair is visible immediately.
    assert_eq!(lines(script), vec!["OK", "OK", "-1", "-1", "OK", "2"]);
}

#[test]
fn test_tokens_may_span_lines() {
    assert_eq!(lines("init\n3\n3\ntravel_cost 0 0\n2 2"), vec!["OK", "3"]);
}

#[test]
fn test_directed_shortcut_asymmetry() {
    let script = "init 5 1\n\
                  toggle_air_route 0 0 4 0\n\
                  travel_cost 0 0 4 0\n\
                  travel_cost 4 0 0 0";
    assert_eq!(lines(script), vec!["OK", "OK", "1", "4"]);
}
