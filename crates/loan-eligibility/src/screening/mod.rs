//! Eligibility screening core: the list registry, add/delist conflict
//! resolution, batch ingestion, and the per-account eligibility evaluator.

pub mod domain;
pub mod evaluation;
pub mod ingest;
pub mod registry;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountState, ListRecord, ListType, RecordStatus, ALL_LIST_TYPES, BASE_LIST_ORDER, LIST_PAIRS,
};
pub use evaluation::{evaluate_account, EligibilityOutcome, IneligibilityReason};
pub use ingest::{ingest_list, IngestError, ListUploadSummary};
pub use registry::{EligibilityRegistry, RegistryStatistics};
pub use router::{eligibility_router, EligibilityCheckRequest, ListUploadResponse};
pub use service::{EligibilityCheckOutcome, EligibilityService};
