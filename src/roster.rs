//! Roster storage and CSV loading.
//!
//! The roster is the ordered list of participants eligible for a draw. Each CSV
//! row is `name, id[, ...]`; rows without a usable name and integer id are
//! skipped rather than failing the load.

use crate::error::LoadError;
use crate::types::{ParticipantId, RosterEntry};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Holds the currently loaded roster.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    entries: Vec<RosterEntry>,
}

impl RosterStore {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster directly from entries, bypassing parsing.
    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Replaces the roster with the contents of the CSV file at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a headerless CSV file
    ///
    /// # Returns
    ///
    /// The number of entries loaded, or a `LoadError` if the file cannot be opened
    /// or read. On error the previous roster is kept.
    pub fn load_from_path(&mut self, path: &Path) -> Result<usize, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.load_from_reader(file)?;
        info!("Loaded {} roster entries from {}", count, path.display());
        Ok(count)
    }

    /// Replaces the roster with the CSV rows read from `reader`.
    ///
    /// The new roster is only installed once the whole source has been read.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<usize, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        for record in csv_reader.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) if err.is_io_error() => return Err(LoadError::Read(err)),
                Err(err) => {
                    debug!("Skipping undecodable roster row: {}", err);
                    skipped += 1;
                    continue;
                }
            };
            match parse_row(record.iter()) {
                Some(entry) => entries.push(entry),
                None => {
                    debug!("Skipping roster row {:?}", record);
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            info!("Skipped {} malformed roster rows", skipped);
        }
        self.entries = entries;
        Ok(self.entries.len())
    }

    /// Number of participants in the roster.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the roster has no participants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The participant ids in roster order.
    pub fn id_pool(&self) -> Vec<ParticipantId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// The roster entries in load order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }
}

/// Builds an entry from the fields of one row, or `None` if the row is unusable.
fn parse_row<'a>(mut fields: impl Iterator<Item = &'a str>) -> Option<RosterEntry> {
    let name = fields.next()?.trim();
    let id_field = fields.next()?.trim();
    if name.is_empty() || id_field.is_empty() {
        return None;
    }
    let id = id_field.parse::<ParticipantId>().ok()?;
    Some(RosterEntry::new(name, id))
}
