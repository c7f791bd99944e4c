use super::common::*;

use crate::screening::domain::{ListType, RecordStatus};
use crate::screening::ingest::{ingest_list, IngestError};

#[test]
fn ingests_rows_and_counts_skips() {
    let registry = registry();
    let csv = "AccountID,Reason\nACC-1,flagged activity\n,missing id\nACC-2,\n";

    let summary = ingest_list(&registry, ListType::Str, ts(2024, 1, 1), csv.as_bytes())
        .expect("batch ingests");

    assert_eq!(summary.total_rows, 3);
    assert_eq!(summary.processed_rows, 2);
    assert_eq!(summary.skipped_rows, 1);
    assert_eq!(summary.uploaded_at, ts(2024, 1, 1));

    let record = registry
        .account_snapshot("ACC-1")
        .remove(&ListType::Str)
        .expect("ACC-1 stored");
    assert_eq!(record.reason, "flagged activity");
    assert_eq!(record.status, RecordStatus::Active);

    // Empty reason is valid.
    let record = registry
        .account_snapshot("ACC-2")
        .remove(&ListType::Str)
        .expect("ACC-2 stored");
    assert_eq!(record.reason, "");
}

#[test]
fn whole_batch_shares_one_upload_timestamp() {
    let registry = registry();
    let csv = "AccountID,Reason\nACC-1,a\nACC-2,b\n";
    ingest_list(&registry, ListType::Cr, ts(2024, 6, 1), csv.as_bytes()).expect("batch ingests");

    for account in ["ACC-1", "ACC-2"] {
        let record = registry
            .account_snapshot(account)
            .remove(&ListType::Cr)
            .expect("stored");
        assert_eq!(record.listed_at, ts(2024, 6, 1));
    }
}

#[test]
fn malformed_row_is_skipped_without_aborting_the_batch() {
    let registry = registry();
    // Second row is missing the reason column entirely, third has one too many.
    let csv = "AccountID,Reason\nACC-1,fine\nACC-2\nACC-3,extra,columns\nACC-4,also fine\n";

    let summary = ingest_list(&registry, ListType::Fdm, ts(2024, 1, 1), csv.as_bytes())
        .expect("stream stays readable");

    assert_eq!(summary.total_rows, 4);
    assert_eq!(summary.processed_rows, 2);
    assert_eq!(summary.skipped_rows, 2);
    assert!(registry
        .account_snapshot("ACC-1")
        .contains_key(&ListType::Fdm));
    assert!(registry
        .account_snapshot("ACC-4")
        .contains_key(&ListType::Fdm));
    assert!(registry.account_snapshot("ACC-2").is_empty());
}

#[test]
fn header_only_upload_processes_nothing() {
    let registry = registry();
    let summary = ingest_list(
        &registry,
        ListType::Str,
        ts(2024, 1, 1),
        "AccountID,Reason\n".as_bytes(),
    )
    .expect("batch ingests");

    assert_eq!(summary.total_rows, 0);
    assert_eq!(summary.processed_rows, 0);
    assert_eq!(registry.statistics().total_accounts, 0);
}

#[test]
fn empty_upload_is_rejected_before_touching_the_registry() {
    let service = service();
    let result = service.upload_list(ListType::Str, b"");

    assert!(matches!(result, Err(IngestError::EmptyUpload)));
    assert_eq!(service.statistics().total_accounts, 0);
}
