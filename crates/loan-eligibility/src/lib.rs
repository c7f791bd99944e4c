//! Loan eligibility screening service.
//!
//! Ineligibility lists (STR, CR, MULTIPLE_ACCOUNT, FDM, SST) and their paired
//! delist lists arrive as CSV batches; the [`screening`] module resolves
//! add/delist conflicts by strict upload-timestamp ordering and answers
//! per-account eligibility queries.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
