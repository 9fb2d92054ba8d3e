//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod directory_manager;
mod reconciler;
mod schedule;

pub use directory_manager::{
    filename_of_slug, DirectoryAction, DirectoryConflict, DirectoryEntry, DirectoryPlan,
    MeetingDirectoryManager, PlannedDirectory,
};
pub use reconciler::{
    EntryError, EntryFailure, ReconcileError, ReconcileWarning, Reconciliation,
    SyllabusReconciler,
};
pub use schedule::{ScheduleError, ScheduleGenerator, ScheduleSlot};
