mod common;

use common::*;

#[test]
fn test_json_check_event_stream() {
    let env = TestEnv::new();
    env.seed();

    let result = env.run(&["--json", "check"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let events = result.events();
    let first = &events[0];
    assert_eq!(first["event"], "start");
    assert_eq!(first["command"], "check");
    assert_eq!(first["group"], "ai");
    assert_eq!(first["semester"], "fa19");

    let meetings: Vec<_> = events.iter().filter(|e| e["event"] == "meeting").collect();
    assert_eq!(meetings.len(), 4);
    assert_eq!(meetings[0]["slug"], "2019-09-11-meeting00");
    assert_eq!(meetings[0]["date_source"], "scheduled");

    assert!(events.iter().any(|e| e["event"] == "warning"));

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["success"], true);
}

#[test]
fn test_json_touch_reports_each_directory() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);

    let result = env.run(&["--json", "touch"]);
    assert!(result.is_success(), "{}", result.combined_output());

    let events = result.events();
    let dirs: Vec<_> = events.iter().filter(|e| e["event"] == "directory").collect();
    assert_eq!(dirs.len(), 4);
    assert!(dirs.iter().all(|e| e["action"] == "create"));
    assert_eq!(dirs[1]["slug"], "2019-09-18-cnns");
}

#[test]
fn test_json_failed_check_completes_unsuccessfully() {
    let env = TestEnv::new();
    env.seed_with_syllabus(&NAMED_SYLLABUS.replace("filename: rl", "filename: ''"));

    let result = env.run(&["--json", "check"]);
    assert_eq!(result.exit_code, 1);

    let events = result.events();
    let failed = events.iter().find(|e| e["event"] == "entry_failed").unwrap();
    assert_eq!(failed["entry"], 4);
    assert_eq!(events.last().unwrap()["success"], false);
}

#[test]
fn test_json_error_event_for_missing_group() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "check"]);
    assert_eq!(result.exit_code, 1);

    let events = result.events();
    let last = events.last().unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["command"], "check");
    assert!(last["message"].as_str().unwrap().contains("no 'ai' group found"));
}

#[test]
fn test_json_output_has_no_color_codes() {
    let env = TestEnv::new();
    env.seed();

    let result = env.run(&["--json", "--color", "always", "schedule"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(!result.stdout.contains('\u{1b}'));
}
