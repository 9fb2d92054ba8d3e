//! Domain Layer
//!
//! The core of autobot - scheduling and reconciliation without I/O.
//!
//! ## Structure
//!
//! - `entities/` - CalendarWindow, Group, MeetingDraft, Meeting
//! - `value_objects/` - Semester, MeetingId, MeetingDay, PersonId
//! - `services/` - ScheduleGenerator, SyllabusReconciler, MeetingDirectoryManager
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
