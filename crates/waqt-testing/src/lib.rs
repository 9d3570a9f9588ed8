//! Testing infrastructure for waqt integration tests.
//!
//! - `TestWorld`: isolated data directory and config file plus a CLI runner
//! - `fixtures`: sample month files and generated timetables
//! - `assertions`: checks on the JSON timeline output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
