//! Touch Use Case
//!
//! Materializes one directory per selected meeting:
//!
//! 1. Reconcile the syllabus and persist any minted ids
//! 2. Plan directory actions against what is on disk
//! 3. Apply renames in two phases through temporary names, then creates
//!
//! Directories whose marker matches no syllabus entry are reported as
//! orphans and left alone.

mod apply;
mod options;
mod result;
mod use_case;

pub use options::TouchOptions;
pub use result::{TouchOutcome, TouchResult, TouchStatus};
pub use use_case::TouchUseCase;
