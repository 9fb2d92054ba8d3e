//! A director plans a semester, names meetings as they go, reschedules one
//! and cancels another.

use crate::common::*;

#[test]
fn scenario_plan_name_reschedule_cancel() {
    let env = TestEnv::new();

    // Week 0: seed and create the placeholder directories
    env.seed();
    assert!(env.run(&["touch"]).is_success());
    assert_eq!(env.meeting_dirs().len(), 4);

    // Name the first two meetings; slides already live in the first one
    std::fs::write(env.group_path("2019-09-11-meeting00/meeting00.md"), "# Intro").unwrap();
    let syllabus = env
        .read_syllabus()
        .replace("title: meeting00", "title: Intro")
        .replace("filename: meeting00", "filename: intro")
        .replace("title: meeting01", "title: CNNs")
        .replace("filename: meeting01", "filename: cnns");
    env.write_syllabus(&syllabus);

    let touch = env.run(&["touch"]);
    assert!(touch.is_success(), "{}", touch.combined_output());
    assert_eq!(
        env.meeting_dirs(),
        [
            "2019-09-11-intro",
            "2019-09-18-cnns",
            "2019-09-25-meeting02",
            "2019-10-02-meeting03",
        ]
    );
    // files named after the old filename follow the rename
    assert!(env.group_path("2019-09-11-intro/intro.md").is_file());

    // Cancel the third meeting
    let remove = env.run(&["remove", "--date", "2019-09-25", "--yes"]);
    assert!(remove.is_success(), "{}", remove.combined_output());

    let touch = env.run(&["touch"]);
    assert!(touch.is_success(), "{}", touch.combined_output());
    assert_eq!(
        env.meeting_dirs(),
        ["2019-09-11-intro", "2019-09-18-cnns", "2019-09-25-meeting03"]
    );

    let check = env.run(&["check"]);
    assert!(check.is_success(), "{}", check.combined_output());
    assert!(check.stdout.contains("3 passed"));
}
