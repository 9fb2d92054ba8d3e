//! File System Implementations
//!
//! Atomic writes, the group lock, and the local MeetingDirectories adapter.

mod atomic;
mod local;
mod lock;

pub use atomic::write_atomic;
pub use local::{LocalMeetingDirectories, RENAME_TEMP_PREFIX};
pub use lock::{GroupLock, LOCK_FILE};
