//! # schedule-cli
//!
//! Interactive lookup menu for class schedule CSV exports.
//!
//! This crate wraps a [`ScheduleStore`](schedule_loader::ScheduleStore)
//! loaded by the schedule-loader crate in the text menu of the `schedule`
//! binary.

#![warn(missing_docs)]

pub mod config;
pub mod menu;
pub mod render;

pub use config::{CliConfig, OutputFormat};
pub use menu::{run_menu, MenuChoice};
