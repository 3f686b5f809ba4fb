//! Common utilities for the blockstyle crates.
//!
//! This crate provides shared infrastructure used by the value transforms and
//! the panel controllers:
//! - **Warning System** - colored terminal output for unexpected style data

pub mod warning;
