//! Schedule entry record mapping.
//!
//! Maps the fields of one export line onto a `ScheduleItem`.

use schedule_types::ScheduleItem;

use crate::parser::{parse, ScheduleRecord};
use crate::types::ScheduleResult;

/// Column positions in a schedule export line.
pub mod columns {
    /// Subject code.
    pub const SUBJECT: usize = 0;
    /// Catalog number.
    pub const CATALOG: usize = 1;
    /// Section number.
    pub const SECTION: usize = 2;
    /// Component type.
    pub const COMPONENT: usize = 3;
    /// Session code.
    pub const SESSION: usize = 4;
    /// Units.
    pub const UNITS: usize = 6;
    /// Total enrollment.
    pub const TOTAL_ENROLLMENT: usize = 7;
    /// Enrollment capacity.
    pub const CAPACITY_ENROLLMENT: usize = 8;
    /// Instructor name.
    pub const INSTRUCTOR: usize = 10;
}

impl ScheduleRecord for ScheduleItem {
    fn from_fields(fields: &[&str], line: usize) -> ScheduleResult<Self> {
        let field = |column: usize| fields.get(column).copied().unwrap_or("");

        Ok(ScheduleItem {
            subject: field(columns::SUBJECT).to_string(),
            catalog: field(columns::CATALOG).to_string(),
            section: field(columns::SECTION).to_string(),
            component: field(columns::COMPONENT).to_string(),
            session: field(columns::SESSION).to_string(),
            units: parse::count(field(columns::UNITS), line, columns::UNITS)?,
            total_enrollment: parse::count(
                field(columns::TOTAL_ENROLLMENT),
                line,
                columns::TOTAL_ENROLLMENT,
            )?,
            capacity_enrollment: parse::count(
                field(columns::CAPACITY_ENROLLMENT),
                line,
                columns::CAPACITY_ENROLLMENT,
            )?,
            instructor: field(columns::INSTRUCTOR).to_string(),
        })
    }
}
