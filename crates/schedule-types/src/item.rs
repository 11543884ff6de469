//! Class schedule entry type.
//!
//! This module provides the `ScheduleItem` struct representing one data row
//! of a class schedule export.

/// Separator placed between subject, catalog and section in a composite key.
pub const KEY_SEPARATOR: char = '_';

/// One entry of the class schedule.
///
/// Items are created while loading an export and are only handed out by
/// shared reference afterwards, so a loaded item never changes.
///
/// # Examples
///
/// ```
/// use schedule_types::ScheduleItem;
///
/// let item = ScheduleItem {
///     subject: "BIOL".to_string(),
///     catalog: "10".to_string(),
///     section: "01".to_string(),
///     component: "LEC".to_string(),
///     session: "Reg".to_string(),
///     units: 4,
///     total_enrollment: 28,
///     capacity_enrollment: 40,
///     instructor: "Madonna".to_string(),
/// };
///
/// assert_eq!(item.key(), "BIOL_10_01");
/// assert_eq!(item.instructor_last_name(), "Madonna");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleItem {
    /// Subject code (e.g., "CS").
    pub subject: String,
    /// Catalog number within the subject (e.g., "101", "2A").
    pub catalog: String,
    /// Section number (e.g., "001").
    pub section: String,
    /// Component type (e.g., "LEC", "LAB").
    pub component: String,
    /// Session code.
    pub session: String,
    /// Number of units.
    pub units: u32,
    /// Number of students currently enrolled.
    pub total_enrollment: u32,
    /// Enrollment capacity.
    pub capacity_enrollment: u32,
    /// Instructor as "Lastname, Firstname", or empty when unassigned.
    pub instructor: String,
}

impl ScheduleItem {
    /// Builds the composite key for a subject, catalog and section.
    ///
    /// The key is `subject_catalog_section`.
    pub fn make_key(subject: &str, catalog: &str, section: &str) -> String {
        let mut key = String::with_capacity(subject.len() + catalog.len() + section.len() + 2);
        key.push_str(subject);
        key.push(KEY_SEPARATOR);
        key.push_str(catalog);
        key.push(KEY_SEPARATOR);
        key.push_str(section);
        key
    }

    /// Returns the composite key identifying this item.
    pub fn key(&self) -> String {
        Self::make_key(&self.subject, &self.catalog, &self.section)
    }

    /// Returns the instructor's last name.
    ///
    /// This is the text before the first comma, or the whole instructor
    /// string when it contains no comma.
    pub fn instructor_last_name(&self) -> &str {
        match self.instructor.find(',') {
            Some(pos) => &self.instructor[..pos],
            None => &self.instructor,
        }
    }
}
