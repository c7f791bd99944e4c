use std::io::Read;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info};

use super::domain::ListType;
use super::registry::EligibilityRegistry;

/// Counters for one ingested batch. The shared `uploaded_at` stamp is the
/// timestamp every row in the batch was applied with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUploadSummary {
    pub list_type: ListType,
    pub total_rows: usize,
    pub processed_rows: usize,
    pub skipped_rows: usize,
    pub uploaded_at: NaiveDateTime,
}

/// Stream-level ingestion failures. Row-level problems never surface here;
/// they are counted as skipped so one bad row cannot abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("upload body is empty")]
    EmptyUpload,
    #[error("unable to read CSV stream: {0}")]
    Csv(#[from] csv::Error),
}

/// Ingest a two-column (`AccountID`, `Reason`) CSV batch, applying every
/// valid row to the registry with the shared upload timestamp.
///
/// Rows with an empty account id and rows that fail CSV decoding are counted
/// as skipped and leave the registry untouched.
pub fn ingest_list<R: Read>(
    registry: &EligibilityRegistry,
    list_type: ListType,
    uploaded_at: NaiveDateTime,
    reader: R,
) -> Result<ListUploadSummary, IngestError> {
    // Strict column counts: a row that does not match the two-column header
    // fails on its own and is counted as skipped below.
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Header row is consumed up front; an unreadable stream fails the whole
    // upload before any row touches the registry.
    csv_reader.headers()?;

    let mut total_rows = 0;
    let mut processed_rows = 0;
    let mut skipped_rows = 0;

    for row in csv_reader.records() {
        total_rows += 1;

        let record = match row {
            Ok(record) => record,
            Err(err) => {
                debug!(list = list_type.code(), %err, "skipping malformed row");
                skipped_rows += 1;
                continue;
            }
        };

        let account_id = record.get(0).map(str::trim).unwrap_or_default();
        if account_id.is_empty() {
            skipped_rows += 1;
            continue;
        }
        let reason = record.get(1).map(str::trim).unwrap_or_default();

        registry.apply(account_id, list_type, uploaded_at, reason);
        processed_rows += 1;
    }

    info!(
        list = list_type.code(),
        total_rows, processed_rows, skipped_rows, "list batch ingested"
    );

    Ok(ListUploadSummary {
        list_type,
        total_rows,
        processed_rows,
        skipped_rows,
        uploaded_at,
    })
}
