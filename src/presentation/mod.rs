//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use autobot::presentation::factory;
//!
//! let use_case = factory::create_touch_use_case(&config);
//! let result = use_case.execute(&workspace, &options);
//! ```

pub mod cli;
pub mod factory;

pub use factory::{
    create_check_use_case, create_export_use_case, create_remove_use_case,
    create_schedule_use_case, create_seed_use_case, create_sort_use_case, create_touch_use_case,
};
