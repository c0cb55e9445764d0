//! Command-line front end for the taskboard engine
//!
//! Exposed as a library so integration tests can reach the argument model
//! and the renderers without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod render;
