use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use super::domain::{AccountState, ListType};
use super::evaluation::{self, IneligibilityReason};
use super::ingest::{self, IngestError, ListUploadSummary};
use super::registry::{EligibilityRegistry, RegistryStatistics};

/// Facade composing the record registry, batch ingestion, and the
/// eligibility evaluator behind the surface the HTTP layer consumes.
pub struct EligibilityService {
    registry: Arc<EligibilityRegistry>,
}

impl Default for EligibilityService {
    fn default() -> Self {
        Self::new()
    }
}

impl EligibilityService {
    pub fn new() -> Self {
        Self::with_registry(Arc::new(EligibilityRegistry::new()))
    }

    pub fn with_registry(registry: Arc<EligibilityRegistry>) -> Self {
        Self { registry }
    }

    /// Ingest one uploaded list, stamping the batch with the current time.
    pub fn upload_list(
        &self,
        list_type: ListType,
        data: &[u8],
    ) -> Result<ListUploadSummary, IngestError> {
        self.upload_list_at(list_type, Local::now().naive_local(), data)
    }

    /// Ingest one uploaded list with an explicit shared upload timestamp.
    pub fn upload_list_at(
        &self,
        list_type: ListType,
        uploaded_at: NaiveDateTime,
        data: &[u8],
    ) -> Result<ListUploadSummary, IngestError> {
        if data.is_empty() {
            return Err(IngestError::EmptyUpload);
        }
        ingest::ingest_list(&self.registry, list_type, uploaded_at, data)
    }

    /// Evaluate an account against every base category.
    ///
    /// An account with no records at all is eligible; that is the common
    /// case, not an error.
    pub fn check(&self, account_id: &str) -> EligibilityCheckOutcome {
        let snapshot = self.registry.account_snapshot(account_id);
        let verdict = evaluation::evaluate_account(&snapshot);

        EligibilityCheckOutcome {
            account_id: account_id.to_string(),
            eligible: verdict.eligible,
            message: verdict.message,
            reasons: verdict.reasons,
            checked_at: Local::now().naive_local(),
        }
    }

    /// Full record snapshot for one account, including superseded base
    /// records and delist records.
    pub fn account_records(&self, account_id: &str) -> AccountState {
        self.registry.account_snapshot(account_id)
    }

    pub fn statistics(&self) -> RegistryStatistics {
        self.registry.statistics()
    }

    /// Administrative/test-only wipe of the whole registry.
    pub fn clear_all(&self) {
        self.registry.clear_all();
    }
}

/// Verdict for one account as returned to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityCheckOutcome {
    pub account_id: String,
    pub eligible: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<IneligibilityReason>,
    pub checked_at: NaiveDateTime,
}
