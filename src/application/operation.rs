//! The closed set of operations the tool performs

use std::fmt;

/// A top-level operation on one group/semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Seed,
    Check,
    Schedule,
    Sort,
    Touch,
    Export,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Seed,
        Operation::Check,
        Operation::Schedule,
        Operation::Sort,
        Operation::Touch,
        Operation::Export,
        Operation::Remove,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Seed => "seed",
            Operation::Check => "check",
            Operation::Schedule => "schedule",
            Operation::Sort => "sort",
            Operation::Touch => "touch",
            Operation::Export => "export",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
