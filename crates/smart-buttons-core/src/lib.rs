//! Smart Buttons Core
//!
//! Shared utilities for the smart-buttons crates: hashed collections, the
//! generational slot arena backing document nodes, logging and profiling setup,
//! and small geometry types.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
