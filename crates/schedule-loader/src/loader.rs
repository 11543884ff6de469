//! Schedule export file loading utilities.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::store::ScheduleStore;
use crate::types::{LoadConfig, LoadReport, ScheduleError, ScheduleResult};

/// Opens a schedule export for reading.
///
/// # Errors
/// Returns [`ScheduleError::FileNotFound`] if the path does not exist, or an
/// I/O error if it cannot be opened.
pub fn open_schedule<P: AsRef<Path>>(path: P) -> ScheduleResult<BufReader<File>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ScheduleError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Opens a schedule export and loads it into a new store.
///
/// The file is closed once loading finishes, whether or not it succeeded.
pub fn load_schedule_file<P: AsRef<Path>>(
    path: P,
    config: &LoadConfig,
) -> ScheduleResult<(ScheduleStore, LoadReport)> {
    let reader = open_schedule(path)?;
    let mut store = ScheduleStore::new();
    let report = store.load_reader(reader, config)?;
    Ok((store, report))
}
