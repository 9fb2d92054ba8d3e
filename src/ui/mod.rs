//! Terminal presentation for the `autobot` binary
//!
//! Primitives render single tokens, blocks and components compose them,
//! and views turn use case results into whole screens.

pub mod blocks;
pub mod components;
pub mod context;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
