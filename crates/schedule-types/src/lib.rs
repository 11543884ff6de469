//! # schedule-types
//!
//! Type definitions for class schedule records.
//!
//! This crate provides the record type for one row of a class schedule
//! export, together with the composite key that identifies it.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use schedule_types::ScheduleItem;
//!
//! let item = ScheduleItem {
//!     subject: "CS".to_string(),
//!     catalog: "101".to_string(),
//!     section: "001".to_string(),
//!     component: "LEC".to_string(),
//!     session: "Reg".to_string(),
//!     units: 3,
//!     total_enrollment: 45,
//!     capacity_enrollment: 50,
//!     instructor: "Smith, John".to_string(),
//! };
//!
//! assert_eq!(item.key(), "CS_101_001");
//! assert_eq!(item.instructor_last_name(), "Smith");
//! ```

#![warn(missing_docs)]

mod item;

pub use item::{ScheduleItem, KEY_SEPARATOR};
