//! In-memory class schedule store.
//!
//! Holds parsed schedule entries keyed by their composite key
//! (`subject_catalog_section`) in key order, and answers lookups against
//! them. Apart from the exact key lookup, every query is a full scan.
//!
//! ```rust
//! use schedule_loader::ScheduleStore;
//!
//! let text = "Subject,Catalog,Section,\n\
//!             CS,101,001,LEC,Reg,,3,45,50,,Madonna,,,,,,,,,,,,,,,\n\
//!             CS,46A,002,LAB,Reg,,1,12,24,,Madonna,,,,,,,,,,,,,,,\n";
//!
//! let mut store = ScheduleStore::new();
//! store.load(text.lines());
//!
//! let keys: Vec<String> = store.find_by_subject("CS").iter().map(|item| item.key()).collect();
//! assert_eq!(keys, ["CS_101_001", "CS_46A_002"]);
//! ```

use std::collections::BTreeMap;
use std::io::BufRead;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use schedule_types::ScheduleItem;

use crate::parser::{parse_line, ScheduleParser};
use crate::types::{LoadConfig, LoadReport, ScheduleResult};

/// In-memory store for class schedule entries.
///
/// Entries are created while loading and only handed out by shared
/// reference. A later entry with the same key replaces the earlier one.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    /// Entries indexed by composite key.
    items: BTreeMap<String, ScheduleItem>,
}

impl ScheduleStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads entries from export lines using the default configuration.
    ///
    /// The first line is the header and is discarded. Malformed lines are
    /// logged, recorded in the report and skipped.
    pub fn load<I, S>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.load_with_config(lines, &LoadConfig::default())
    }

    /// Loads entries from export lines.
    pub fn load_with_config<I, S>(&mut self, lines: I, config: &LoadConfig) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let start = Instant::now();
        let mut report = LoadReport::default();
        let skip = usize::from(config.has_header);

        for (index, line) in lines.into_iter().enumerate().skip(skip) {
            report.lines_read += 1;
            self.absorb(parse_line(line.as_ref(), index + 1, config), &mut report);
        }

        self.finish(report, start)
    }

    /// Loads entries from an already-open reader.
    ///
    /// # Errors
    /// Returns an error if reading from the source fails. Entries parsed
    /// before the failure stay in the store.
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
        config: &LoadConfig,
    ) -> ScheduleResult<LoadReport> {
        let start = Instant::now();
        let mut report = LoadReport::default();
        let mut parser = ScheduleParser::<R, ScheduleItem>::from_reader(reader, config.clone())?;

        for result in parser.by_ref() {
            match result {
                Err(e) if !e.is_malformed_line() => return Err(e),
                parsed => self.absorb(parsed, &mut report),
            }
        }

        report.lines_read = parser.lines_read();
        Ok(self.finish(report, start))
    }

    /// Loads entries from export lines using parallel parsing.
    ///
    /// Lines are tokenized on the rayon pool, then inserted in input order,
    /// so duplicate keys resolve exactly as with [`ScheduleStore::load_with_config`].
    #[cfg(feature = "parallel")]
    pub fn load_parallel<S>(&mut self, lines: &[S], config: &LoadConfig) -> LoadReport
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let mut report = LoadReport::default();
        let skip = usize::from(config.has_header).min(lines.len());

        let parsed: Vec<ScheduleResult<ScheduleItem>> = lines[skip..]
            .par_iter()
            .enumerate()
            .map(|(offset, line)| parse_line(line.as_ref(), skip + offset + 1, config))
            .collect();

        report.lines_read = parsed.len();
        for result in parsed {
            self.absorb(result, &mut report);
        }

        self.finish(report, start)
    }

    /// Records one parsed line in the store or in the report.
    fn absorb(&mut self, parsed: ScheduleResult<ScheduleItem>, report: &mut LoadReport) {
        match parsed {
            Ok(item) => {
                report.loaded += 1;
                if let Some(previous) = self.insert(item) {
                    report.replaced += 1;
                    tracing::debug!("Replaced earlier entry {}", previous.key());
                }
            }
            Err(e) => {
                tracing::warn!("Skipping line: {}", e);
                report.errors.push(e);
            }
        }
    }

    fn finish(&self, mut report: LoadReport, start: Instant) -> LoadReport {
        report.parse_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Loaded {} of {} schedule lines ({} skipped, {} replaced) in {} ms",
            report.loaded,
            report.lines_read,
            report.error_count(),
            report.replaced,
            report.parse_time_ms
        );
        report
    }

    /// Inserts an entry under its key.
    ///
    /// Returns the entry it replaced, if any.
    pub fn insert(&mut self, item: ScheduleItem) -> Option<ScheduleItem> {
        self.items.insert(item.key(), item)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // QUERIES
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns all entries in key order.
    pub fn list_all(&self) -> Vec<&ScheduleItem> {
        self.items.values().collect()
    }

    /// Looks up the entry for a subject, catalog number and section.
    pub fn find_by_key(&self, subject: &str, catalog: &str, section: &str) -> Option<&ScheduleItem> {
        self.items
            .get(&ScheduleItem::make_key(subject, catalog, section))
    }

    /// Returns all entries with the given subject.
    ///
    /// Matching is exact and case-sensitive.
    pub fn find_by_subject(&self, subject: &str) -> Vec<&ScheduleItem> {
        self.filter(|item| item.subject == subject)
    }

    /// Returns all entries with the given subject and catalog number.
    pub fn find_by_subject_and_catalog(&self, subject: &str, catalog: &str) -> Vec<&ScheduleItem> {
        self.filter(|item| item.subject == subject && item.catalog == catalog)
    }

    /// Returns all entries whose instructor has the given last name.
    pub fn find_by_instructor_last_name(&self, last_name: &str) -> Vec<&ScheduleItem> {
        self.filter(|item| item.instructor_last_name() == last_name)
    }

    fn filter<F>(&self, predicate: F) -> Vec<&ScheduleItem>
    where
        F: Fn(&ScheduleItem) -> bool,
    {
        self.items.values().filter(|&item| predicate(item)).collect()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // STATISTICS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.items.values()
    }
}
