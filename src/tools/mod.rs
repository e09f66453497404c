//! The tools module provides helpers that sit outside the compression core.
//!
//! The tools are:
//! - cli: Command line interface for rlzip.

pub mod cli;
