use super::common::*;

use crate::screening::domain::ListType;

#[test]
fn flag_then_newer_delist_restores_eligibility() {
    let service = service();

    let summary = service
        .upload_list_at(
            ListType::Str,
            ts(2024, 1, 1),
            b"AccountID,Reason\nA1,flagged\n",
        )
        .expect("upload ingests");
    assert_eq!(summary.processed_rows, 1);

    let outcome = service.check("A1");
    assert!(!outcome.eligible);
    assert_eq!(outcome.account_id, "A1");
    assert_eq!(outcome.reasons.len(), 1);
    assert_eq!(outcome.reasons[0].list_type, ListType::Str);
    assert_eq!(outcome.reasons[0].reason, "flagged");
    assert_eq!(outcome.reasons[0].listed_at, ts(2024, 1, 1));

    service
        .upload_list_at(
            ListType::DelistStr,
            ts(2024, 2, 1),
            b"AccountID,Reason\nA1,cleared\n",
        )
        .expect("upload ingests");

    let outcome = service.check("A1");
    assert!(outcome.eligible);
    assert!(outcome.reasons.is_empty());
}

#[test]
fn delist_that_predates_the_flag_keeps_the_account_ineligible() {
    let service = service();

    service
        .upload_list_at(
            ListType::Fdm,
            ts(2024, 3, 1),
            b"AccountID,Reason\nA2,fraud flag\n",
        )
        .expect("upload ingests");
    service
        .upload_list_at(
            ListType::DelistFdm,
            ts(2024, 2, 1),
            b"AccountID,Reason\nA2,too early\n",
        )
        .expect("upload ingests");

    let outcome = service.check("A2");
    assert!(!outcome.eligible);
    assert_eq!(outcome.reasons.len(), 1);
    assert_eq!(outcome.reasons[0].list_type, ListType::Fdm);
    assert_eq!(outcome.reasons[0].reason, "fraud flag");
}

#[test]
fn unknown_account_checks_eligible() {
    let service = service();
    let outcome = service.check("NEVER-SEEN");

    assert!(outcome.eligible);
    assert!(outcome.reasons.is_empty());
    assert_eq!(outcome.account_id, "NEVER-SEEN");
}

#[test]
fn account_records_expose_delist_and_superseded_entries() {
    let service = service();
    service
        .upload_list_at(ListType::Str, ts(2024, 1, 1), b"AccountID,Reason\nA1,flagged\n")
        .expect("upload ingests");
    service
        .upload_list_at(
            ListType::DelistStr,
            ts(2024, 2, 1),
            b"AccountID,Reason\nA1,cleared\n",
        )
        .expect("upload ingests");

    let records = service.account_records("A1");
    assert_eq!(records.len(), 2);
    assert!(records.contains_key(&ListType::Str));
    assert!(records.contains_key(&ListType::DelistStr));
}

#[test]
fn clear_all_resets_the_service() {
    let service = service();
    service
        .upload_list_at(ListType::Cr, ts(2024, 1, 1), b"AccountID,Reason\nA1,report\n")
        .expect("upload ingests");
    assert_eq!(service.statistics().total_accounts, 1);

    service.clear_all();

    assert_eq!(service.statistics().total_accounts, 0);
    assert!(service.check("A1").eligible);
}
