// crates/hb_cli/tests/cli.rs
// End-to-end runs of the `hb` binary against a temp ledger.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn hb(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hb").unwrap();
    cmd.env_remove("RUST_LOG").arg("--state").arg(state);
    cmd
}

fn json_out(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.arg("--json").assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn init_then_rooms_shows_97() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");

    hb(&state).arg("init").assert().success().stdout(predicate::str::contains("Initialized 97 rooms"));
    assert!(state.exists());

    let v = json_out(hb(&state).arg("rooms"));
    assert_eq!(v["summary"]["total_rooms"], 97);
    assert_eq!(v["summary"]["available"], 97);
    assert_eq!(v["floors"].as_array().unwrap().len(), 10);
    assert_eq!(v["snapshot_sha256"].as_str().unwrap().len(), 64);
}

#[test]
fn booking_flow() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");

    hb(&state)
        .args(["book", "--guest", "Ada", "--rooms", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully booked 3 rooms for Ada. Total travel time: 2 minutes"))
        .stdout(predicate::str::contains("Rooms: 101, 102, 103"));

    let v = json_out(hb(&state).args(["book", "--guest", "Grace", "--rooms", "2"]));
    assert_eq!(v["booking_id"], 2);
    assert_eq!(v["room_numbers"], serde_json::json!([104, 105]));
    assert_eq!(v["strategy"], "same_floor");

    let list = json_out(hb(&state).arg("bookings"));
    let ids: Vec<u64> = list.as_array().unwrap().iter().map(|b| b["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 1]);

    hb(&state)
        .args(["cancel", "--booking", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Booking cancelled successfully"));

    let v = json_out(hb(&state).arg("rooms"));
    assert_eq!(v["summary"]["available"], 95);
    assert_eq!(v["summary"]["bookings"], 1);
}

#[test]
fn invalid_count_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    hb(&state)
        .args(["book", "--guest", "Ada", "--rooms", "6"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("valid number of rooms (1-5)"));
}

#[test]
fn unknown_booking_exits_5() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    hb(&state).arg("init").assert().success();
    hb(&state).args(["cancel", "--booking", "42"]).assert().code(5);
}

#[test]
fn full_hotel_exits_3() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    let params = dir.path().join("params.json");
    std::fs::write(&params, br#"{"occupancy_min_pct": 100, "occupancy_max_pct": 100}"#).unwrap();

    let v = json_out(hb(&state).arg("--params").arg(&params).args(["occupy", "--seed", "1"]));
    assert_eq!(v["occupied"], 97);
    assert_eq!(v["seed"], 1);

    hb(&state)
        .args(["book", "--guest", "Late", "--rooms", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not enough rooms available"));
}

#[test]
fn occupancy_is_reproducible_with_seed() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    hb(&a).args(["occupy", "--seed", "0x2a"]).assert().success();
    hb(&b).args(["occupy", "--seed", "42"]).assert().success();
    assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
}

#[test]
fn reset_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    hb(&state).args(["book", "--guest", "Ada", "--rooms", "5"]).assert().success();
    hb(&state)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("All bookings have been reset"));
    let v = json_out(hb(&state).arg("validate"));
    assert_eq!(v["pass"], true);
}

#[test]
fn corrupted_ledger_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    std::fs::write(
        &state,
        br#"{"rooms":[{"id":1,"floor":3,"number":311,"available":true}],"bookings":[],"next_booking_id":1}"#,
    )
    .unwrap();
    hb(&state)
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Room.PositionOutOfRange"));
}

#[test]
fn missing_params_file_exits_4() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    hb(&state).args(["--params", "nope.json", "occupy"]).assert().code(4);
}

#[test]
fn occupancy_over_bookings_still_validates() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("hotel.json");
    hb(&state).args(["book", "--guest", "Ada", "--rooms", "5"]).assert().success();
    hb(&state).args(["occupy", "--seed", "7"]).assert().success();
    let v = json_out(hb(&state).arg("validate"));
    assert_eq!(v["pass"], true);
    for issue in v["issues"].as_array().unwrap() {
        assert_eq!(issue["severity"], "warning");
    }
}
