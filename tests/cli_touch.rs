mod common;

use common::*;

#[test]
fn test_touch_creates_placeholder_directories() {
    let env = TestEnv::new();
    env.seed();

    let result = env.run(&["touch"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(
        env.meeting_dirs(),
        [
            "2019-09-11-meeting00",
            "2019-09-18-meeting01",
            "2019-09-25-meeting02",
            "2019-10-02-meeting03",
        ]
    );
    assert!(env.group_path("2019-09-11-meeting00/.metadata").is_file());
    assert!(result.stdout.contains("4 created"));
}

#[test]
fn test_touch_twice_changes_nothing() {
    let env = TestEnv::new();
    env.seed();
    assert!(env.run(&["touch"]).is_success());

    let again = env.run(&["touch"]);
    assert!(again.is_success(), "{}", again.combined_output());
    assert!(again.stdout.contains("4 unchanged"));
    assert!(!again.stdout.contains("created"));
    assert_eq!(env.meeting_dirs().len(), 4);
}

#[test]
fn test_touch_renames_after_naming_meetings() {
    let env = TestEnv::new();
    env.seed();
    assert!(env.run(&["touch"]).is_success());

    // Rename while keeping the ids that touch already tied to directories
    let syllabus = env
        .read_syllabus()
        .replace("title: meeting01", "title: Convolutional Networks")
        .replace("filename: meeting01", "filename: cnns");
    env.write_syllabus(&syllabus);

    let result = env.run(&["touch"]);
    assert!(result.is_success(), "{}", result.combined_output());
    let dirs = env.meeting_dirs();
    assert!(dirs.contains(&"2019-09-18-cnns".to_string()), "{dirs:?}");
    assert!(!dirs.contains(&"2019-09-18-meeting01".to_string()));
    assert_eq!(dirs.len(), 4);
    assert!(result.stdout.contains("1 renamed"));
}

#[test]
fn test_touch_keeps_directory_contents_across_renames() {
    let env = TestEnv::new();
    env.seed();
    assert!(env.run(&["touch"]).is_success());
    std::fs::write(env.group_path("2019-09-18-meeting01/notes.md"), "draft").unwrap();

    let syllabus = env.read_syllabus().replace("filename: meeting01", "filename: cnns");
    env.write_syllabus(&syllabus);
    assert!(env.run(&["touch"]).is_success());

    let notes = std::fs::read_to_string(env.group_path("2019-09-18-cnns/notes.md")).unwrap();
    assert_eq!(notes, "draft");
}

#[test]
fn test_touch_dry_run_writes_nothing() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);
    let before = env.read_syllabus();

    let result = env.run(&["touch", "--dry-run"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("4 to create"));
    assert!(env.meeting_dirs().is_empty());
    assert_eq!(env.read_syllabus(), before);
}

#[test]
fn test_touch_saves_minted_ids() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);
    assert!(!env.read_syllabus().contains("id:"));

    let result = env.run(&["touch"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.meeting_dirs(), NAMED_DIRS);
    assert_eq!(env.read_syllabus().matches("id:").count(), 4);
}

#[test]
fn test_touch_date_selection_limits_work() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);

    let result = env.run(&["touch", "--date", "2019-09-18"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.meeting_dirs(), ["2019-09-18-cnns"]);
}

#[test]
fn test_touch_name_selection_matches_filename() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);

    let result = env.run(&["touch", "--name", "rl"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(env.meeting_dirs(), ["2019-10-02-rl"]);
}

#[test]
fn test_touch_unmatched_selection_fails() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);

    let result = env.run(&["touch", "--date", "2020-01-01"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("no meeting matches --date 2020-01-01"), "{}", result.stderr);
    assert!(env.meeting_dirs().is_empty());
}

#[test]
fn test_touch_date_and_name_conflict() {
    let env = TestEnv::new();
    env.seed();

    let result = env.run(&["touch", "--date", "2019-09-11", "--name", "intro"]);
    assert!(!result.is_success());
    assert_eq!(result.exit_code, 2);
}

#[test]
fn test_touch_reports_unmarked_directory_in_the_way() {
    let env = TestEnv::new();
    env.seed_with_syllabus(NAMED_SYLLABUS);
    std::fs::create_dir_all(env.group_path("2019-09-18-cnns")).unwrap();

    let result = env.run(&["touch"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("1 conflicts"), "{}", result.stdout);
    assert!(env.group_path("2019-09-11-intro").is_dir());
    assert!(!env.group_path("2019-09-18-cnns/.metadata").exists());
}

#[test]
fn test_touch_leaves_orphans_in_place() {
    let env = TestEnv::new();
    env.seed();
    assert!(env.run(&["touch"]).is_success());

    // Drop the last meeting from the syllabus by hand
    let overhead = std::fs::read_to_string(env.group_path("overhead.yml")).unwrap();
    std::fs::write(
        env.group_path("overhead.yml"),
        overhead.replace("count: 4", "count: 3"),
    )
    .unwrap();
    let syllabus = env.read_syllabus();
    let cut = syllabus.rfind("- required:").unwrap();
    env.write_syllabus(&syllabus[..cut]);

    let result = env.run(&["touch"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("'2019-10-02-meeting03' matches no syllabus entry"));
    assert!(env.group_path("2019-10-02-meeting03").is_dir());
}
