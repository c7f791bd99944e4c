use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{AccountState, ListType, RecordStatus, BASE_LIST_ORDER};

/// One base category counting against an account, carrying the base record's
/// stored reason and timestamp (never the delist's).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IneligibilityReason {
    pub list_type: ListType,
    pub reason: String,
    pub listed_at: NaiveDateTime,
}

/// Verdict derived from an account snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub eligible: bool,
    pub message: String,
    pub reasons: Vec<IneligibilityReason>,
}

/// Derive the eligibility verdict from stored records.
///
/// A base category contributes a reason iff its record exists, is still
/// `Active`, and no strictly newer delist record is present. The superseded
/// flip is the primary deactivation path; the timestamp re-check covers a
/// base record stored after a newer delist had already been applied.
pub fn evaluate_account(records: &AccountState) -> EligibilityOutcome {
    if records.is_empty() {
        return EligibilityOutcome {
            eligible: true,
            message: "account is eligible for loan - no derogatory records found".to_string(),
            reasons: Vec::new(),
        };
    }

    let mut reasons = Vec::new();
    for base in BASE_LIST_ORDER {
        if let Some(reason) = ineligibility_reason(records, base) {
            reasons.push(reason);
        }
    }

    if reasons.is_empty() {
        EligibilityOutcome {
            eligible: true,
            message: "account is eligible for loan".to_string(),
            reasons,
        }
    } else {
        EligibilityOutcome {
            eligible: false,
            message: format!("account is ineligible due to {} reason(s)", reasons.len()),
            reasons,
        }
    }
}

fn ineligibility_reason(records: &AccountState, base: ListType) -> Option<IneligibilityReason> {
    let base_record = records.get(&base)?;
    if base_record.status != RecordStatus::Active {
        return None;
    }

    let delist_is_newer = base
        .delist_counterpart()
        .and_then(|delist| records.get(&delist))
        .is_some_and(|delist_record| delist_record.listed_at > base_record.listed_at);
    if delist_is_newer {
        return None;
    }

    Some(IneligibilityReason {
        list_type: base,
        reason: base_record.reason.clone(),
        listed_at: base_record.listed_at,
    })
}
