//! Per-command output

pub mod check;
pub mod remove;
pub mod schedule;
pub mod seed;
pub mod sort;
pub mod touch;
