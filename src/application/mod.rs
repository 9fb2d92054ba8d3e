//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SeedUseCase` - Creates a semester folder with a placeholder syllabus
//! - `CheckUseCase` - Reconciles the syllabus and reports per-entry results
//! - `ScheduleUseCase` - Lists the generated meeting dates
//! - `SortUseCase` - Reorders the syllabus by date and saves it
//! - `TouchUseCase` - Creates and renames meeting directories
//! - `ExportUseCase` - Builds the JSON manifest for publishers
//! - `RemoveUseCase` - Deletes one meeting and its directory
//! - `GroupPipeline` - Load group, calendar, schedule, and syllabus

pub mod check;
pub mod export;
pub mod operation;
pub mod pipeline;
pub mod remove;
pub mod schedule;
pub mod seed;
pub mod selection;
pub mod sort;
#[cfg(test)]
pub(crate) mod test_support;
pub mod touch;
pub mod workspace;

pub use check::{CheckReport, CheckUseCase};
pub use export::{ExportManifest, ExportResult, ExportUseCase, ExportedMeeting};
pub use operation::Operation;
pub use pipeline::{GroupPipeline, LoadedGroup};
pub use remove::{RemovalTarget, RemoveResult, RemoveUseCase};
pub use schedule::{ScheduleReport, ScheduleUseCase};
pub use seed::{SeedOptions, SeedResult, SeedUseCase};
pub use selection::MeetingSelector;
pub use sort::{SortOptions, SortResult, SortUseCase};
pub use touch::{TouchOptions, TouchOutcome, TouchResult, TouchStatus, TouchUseCase};
pub use workspace::{GroupWorkspace, OVERHEAD_FILE, SYLLABUS_FILE};
