//! # schedule-loader
//!
//! Parser and in-memory index for class schedule CSV exports.
//!
//! Each data line of an export is split with a small quote-aware comma
//! scanner, mapped onto a [`ScheduleItem`](schedule_types::ScheduleItem) and
//! stored under its `subject_catalog_section` key. Malformed lines are
//! reported in the [`LoadReport`] and skipped; they never abort a load.
//!
//! ## Features
//!
//! - `parallel` (default): Enables [`ScheduleStore::load_parallel`] via rayon.
//!
//! ## Usage
//!
//! ```rust
//! use schedule_loader::ScheduleStore;
//!
//! let text = "Subject,Catalog,Section,\n\
//!             CS,101,001,LEC,Reg,,3,45,50,,\"Smith, John\",,,,,,,,,,,,,,\n";
//!
//! let mut store = ScheduleStore::new();
//! let report = store.load(text.lines());
//! assert_eq!(report.loaded, 1);
//!
//! let found = store.find_by_instructor_last_name("Smith");
//! assert_eq!(found[0].key(), "CS_101_001");
//! ```

#![warn(missing_docs)]

pub mod item;
pub mod loader;
pub mod parser;
pub mod store;
pub mod types;

// Re-export schedule-types for convenience
pub use schedule_types;

pub use loader::{load_schedule_file, open_schedule};
pub use parser::{parse_line, tokenize, ScheduleParser, ScheduleRecord};
pub use store::ScheduleStore;
pub use types::{LoadConfig, LoadReport, ScheduleError, ScheduleResult, SCHEDULE_FIELD_COUNT};
