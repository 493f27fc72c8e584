//! Row mapping between `StudyEntry` and the comma-separated table.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use study_core::model::{Domain, StudyEntry, StudyStatus};

use crate::repository::StorageError;

pub const HEADERS: [&str; 8] = [
    "Timestamp",
    "Date",
    "Domain",
    "Sub-Objective",
    "Duration (min)",
    "Confidence",
    "Status",
    "Notes",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Persisted shape of one row. Field order matches `HEADERS`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRow {
    #[serde(rename = "Timestamp")]
    timestamp: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Domain")]
    domain: String,
    #[serde(rename = "Sub-Objective")]
    sub_objective: Option<String>,
    #[serde(rename = "Duration (min)")]
    duration_minutes: u32,
    #[serde(rename = "Confidence")]
    confidence: Option<u8>,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Notes", default)]
    notes: String,
}

impl EntryRow {
    fn from_entry(entry: &StudyEntry) -> Self {
        Self {
            timestamp: entry
                .logged_at()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            date: entry.date().format(DATE_FORMAT).to_string(),
            domain: entry.domain().label().to_string(),
            sub_objective: entry.sub_objective().map(str::to_owned),
            duration_minutes: entry.duration_minutes(),
            confidence: entry.confidence().map(|c| c.value()),
            status: entry.status().label().to_string(),
            notes: entry.notes().to_string(),
        }
    }

    fn into_entry(self) -> Result<StudyEntry, StorageError> {
        let logged_at = DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|e| ser(format!("invalid timestamp {:?}: {e}", self.timestamp)))?
            .with_timezone(&Utc);
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|e| ser(format!("invalid date {:?}: {e}", self.date)))?;
        let domain = Domain::parse_label(&self.domain).map_err(ser)?;
        let status = self.status.parse::<StudyStatus>().map_err(ser)?;

        StudyEntry::from_persisted(
            logged_at,
            date,
            domain,
            self.sub_objective,
            self.duration_minutes,
            self.notes,
            self.confidence,
            status,
        )
        .map_err(ser)
    }
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Encode entries as CSV bytes, always starting with the header row.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if a row cannot be written.
pub fn encode(entries: &[StudyEntry]) -> Result<Vec<u8>, StorageError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADERS).map_err(ser)?;
    for entry in entries {
        writer.serialize(EntryRow::from_entry(entry)).map_err(ser)?;
    }
    writer.into_inner().map_err(ser)
}

/// Decode CSV bytes. Empty input decodes to an empty log.
///
/// Columns are matched by header name, so column order is not significant.
///
/// # Errors
///
/// Returns `StorageError::Serialization` naming the first malformed row.
pub fn decode(bytes: &[u8]) -> Result<Vec<StudyEntry>, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);

    let mut entries = Vec::new();
    for (index, record) in reader.deserialize::<EntryRow>().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let line = index + 2;
        let row = record.map_err(|e| ser(format!("row {line}: {e}")))?;
        let entry = row.into_entry().map_err(|e| match e {
            StorageError::Serialization(msg) => ser(format!("row {line}: {msg}")),
            other => other,
        })?;
        entries.push(entry);
    }
    Ok(entries)
}
