mod common;

use common::*;

#[test]
fn test_sort_dry_run_shows_diff_and_keeps_file() {
    let env = TestEnv::new();
    env.seed_with_syllabus(OUT_OF_ORDER_SYLLABUS);
    let before = env.read_syllabus();

    let result = env.run(&["sort", "--dry-run"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("--- a/syllabus.yml"));
    assert!(result.stdout.contains("+++ b/syllabus.yml"));
    assert!(result.stdout.contains("not written"));
    assert_eq!(env.read_syllabus(), before);
}

#[test]
fn test_sort_moves_late_meeting_to_the_end() {
    let env = TestEnv::new();
    env.seed_with_syllabus(OUT_OF_ORDER_SYLLABUS);

    let result = env.run(&["sort"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("Syllabus sorted"));

    let syllabus = env.read_syllabus();
    let order: Vec<usize> = ["cnns", "transformers", "rl", "intro"]
        .iter()
        .map(|name| syllabus.find(&format!("filename: {name}")).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{syllabus}");
    // dates come from the schedule again
    assert!(!syllabus.contains("2019-10-09"));

    assert!(env.run(&["check"]).is_success());
    assert!(env.run(&["touch"]).is_success());
    assert_eq!(
        env.meeting_dirs(),
        [
            "2019-09-11-cnns",
            "2019-09-18-transformers",
            "2019-09-25-rl",
            "2019-10-02-intro",
        ]
    );
}

#[test]
fn test_sort_of_sorted_syllabus_is_a_no_op() {
    let env = TestEnv::new();
    env.seed();
    let before = env.read_syllabus();

    let result = env.run(&["sort"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stdout.contains("already in date order"));
    assert_eq!(env.read_syllabus(), before);
}

#[test]
fn test_sort_refuses_shared_dates() {
    let env = TestEnv::new();
    env.seed_with_syllabus(&OUT_OF_ORDER_SYLLABUS.replace("2019-10-09", "2019-09-18"));
    let before = env.read_syllabus();

    let result = env.run(&["sort"]);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("unique dates"), "{}", result.stderr);
    assert_eq!(env.read_syllabus(), before);
}
