//! Reusable test content

/// Fall 2019 feed: classes Aug 26 - Dec 6, Labor Day, Veterans Day and
/// Thanksgiving Break Nov 27-29
pub const FALL_2019_FEED: &str = r#"{
  "terms": [{
    "events": [
      {"summary": "Classes Begin", "dtstart": "2019-08-26T00:00:00Z", "dtend": null},
      {"summary": "Labor Day - Campus Closed", "dtstart": "2019-09-02T00:00:00Z", "dtend": null},
      {"summary": "Veterans Day", "dtstart": "2019-11-11T00:00:00Z", "dtend": null},
      {"summary": "Thanksgiving Break", "dtstart": "2019-11-27T00:00:00Z", "dtend": "2019-11-29T00:00:00Z"},
      {"summary": "Classes End", "dtstart": "2019-12-06T00:00:00Z", "dtend": null}
    ]
  }]
}"#;

/// Four named meetings without ids, dates, or rooms
pub const NAMED_SYLLABUS: &str = r#"
- required:
    title: Intro to Machine Learning
    filename: intro
    instructors: [JaneDoe]
    abstract: What learning from data means.
- required:
    title: Convolutional Networks
    filename: cnns
    instructors: [JaneDoe]
    abstract: Seeing with filters.
- required:
    title: Transformers
    filename: transformers
    instructors: [JaneDoe]
    abstract: Attention is most of what you need.
- required:
    title: Reinforcement Learning
    filename: rl
    instructors: [JaneDoe]
    abstract: Learning from rewards.
"#;

/// [`NAMED_SYLLABUS`] with the intro moved to Oct 9
pub const OUT_OF_ORDER_SYLLABUS: &str = r#"
- required:
    title: Intro to Machine Learning
    filename: intro
    instructors: [JaneDoe]
    abstract: What learning from data means.
  optional:
    date: '2019-10-09'
- required:
    title: Convolutional Networks
    filename: cnns
    instructors: [JaneDoe]
    abstract: Seeing with filters.
- required:
    title: Transformers
    filename: transformers
    instructors: [JaneDoe]
    abstract: Attention is most of what you need.
- required:
    title: Reinforcement Learning
    filename: rl
    instructors: [JaneDoe]
    abstract: Learning from rewards.
"#;

/// Directories `touch` creates for [`NAMED_SYLLABUS`]
pub const NAMED_DIRS: [&str; 4] = [
    "2019-09-11-intro",
    "2019-09-18-cnns",
    "2019-09-25-transformers",
    "2019-10-02-rl",
];
