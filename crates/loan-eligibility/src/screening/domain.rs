use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The ten list variants: five ineligibility categories plus their paired
/// delist events. Enum order fixes the evaluation order of the base
/// categories and the serialization order of account snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListType {
    #[serde(rename = "STR")]
    Str,
    #[serde(rename = "CR")]
    Cr,
    #[serde(rename = "MULTIPLE_ACCOUNT")]
    MultipleAccount,
    #[serde(rename = "FDM")]
    Fdm,
    #[serde(rename = "SST")]
    Sst,
    #[serde(rename = "D_STR")]
    DelistStr,
    #[serde(rename = "D_CR")]
    DelistCr,
    #[serde(rename = "D_MULTIPLE_ACCOUNT")]
    DelistMultipleAccount,
    #[serde(rename = "D_FDM")]
    DelistFdm,
    #[serde(rename = "D_SST")]
    DelistSst,
}

/// Static pairing of each base category with its delist counterpart.
///
/// Lookups go through this table in both directions so a category can never
/// gain or lose its counterpart without the exhaustiveness tests noticing.
pub const LIST_PAIRS: [(ListType, ListType); 5] = [
    (ListType::Str, ListType::DelistStr),
    (ListType::Cr, ListType::DelistCr),
    (ListType::MultipleAccount, ListType::DelistMultipleAccount),
    (ListType::Fdm, ListType::DelistFdm),
    (ListType::Sst, ListType::DelistSst),
];

/// Evaluation order of the base categories.
pub const BASE_LIST_ORDER: [ListType; 5] = [
    ListType::Str,
    ListType::Cr,
    ListType::MultipleAccount,
    ListType::Fdm,
    ListType::Sst,
];

/// Every variant, base lists first.
pub const ALL_LIST_TYPES: [ListType; 10] = [
    ListType::Str,
    ListType::Cr,
    ListType::MultipleAccount,
    ListType::Fdm,
    ListType::Sst,
    ListType::DelistStr,
    ListType::DelistCr,
    ListType::DelistMultipleAccount,
    ListType::DelistFdm,
    ListType::DelistSst,
];

impl ListType {
    /// Wire code used in API payloads and statistics keys.
    pub fn code(&self) -> &'static str {
        match self {
            ListType::Str => "STR",
            ListType::Cr => "CR",
            ListType::MultipleAccount => "MULTIPLE_ACCOUNT",
            ListType::Fdm => "FDM",
            ListType::Sst => "SST",
            ListType::DelistStr => "D_STR",
            ListType::DelistCr => "D_CR",
            ListType::DelistMultipleAccount => "D_MULTIPLE_ACCOUNT",
            ListType::DelistFdm => "D_FDM",
            ListType::DelistSst => "D_SST",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ListType::Str => "Suspicious Activity",
            ListType::Cr => "Control Report",
            ListType::MultipleAccount => "Multiple Account Against ID",
            ListType::Fdm => "Fraudulent",
            ListType::Sst => "Special Support Recommendation",
            ListType::DelistStr => "Delist STR",
            ListType::DelistCr => "Delist CR",
            ListType::DelistMultipleAccount => "Delist Multiple Account",
            ListType::DelistFdm => "Delist FDM",
            ListType::DelistSst => "Delist SST",
        }
    }

    /// URL path segment for the upload endpoints.
    pub fn route_segment(&self) -> &'static str {
        match self {
            ListType::Str => "str",
            ListType::Cr => "cr",
            ListType::MultipleAccount => "multiple-account",
            ListType::Fdm => "fdm",
            ListType::Sst => "sst",
            ListType::DelistStr => "d-str",
            ListType::DelistCr => "d-cr",
            ListType::DelistMultipleAccount => "d-multiple-account",
            ListType::DelistFdm => "d-fdm",
            ListType::DelistSst => "d-sst",
        }
    }

    pub fn from_route_segment(segment: &str) -> Option<Self> {
        ALL_LIST_TYPES
            .into_iter()
            .find(|list_type| list_type.route_segment() == segment)
    }

    pub fn is_delist(&self) -> bool {
        LIST_PAIRS.iter().any(|(_, delist)| delist == self)
    }

    /// Delist counterpart for a base category; `None` for delist variants.
    pub fn delist_counterpart(&self) -> Option<Self> {
        LIST_PAIRS
            .iter()
            .find(|(base, _)| base == self)
            .map(|(_, delist)| *delist)
    }

    /// Base category reversed by a delist variant; `None` for base variants.
    pub fn base_counterpart(&self) -> Option<Self> {
        LIST_PAIRS
            .iter()
            .find(|(_, delist)| delist == self)
            .map(|(base, _)| *base)
    }
}

/// Whether a base record is still in force.
///
/// A record never flips back to `Active`; a strictly newer delist replaces it
/// with a `Superseded` copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Superseded,
}

/// Latest stored event for one (account, list type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRecord {
    pub account_id: String,
    pub list_type: ListType,
    pub listed_at: NaiveDateTime,
    pub reason: String,
    pub status: RecordStatus,
}

impl ListRecord {
    pub fn new(
        account_id: impl Into<String>,
        list_type: ListType,
        listed_at: NaiveDateTime,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            list_type,
            listed_at,
            reason: reason.into(),
            status: RecordStatus::Active,
        }
    }

    /// Copy of this record marked superseded; reason and timestamp untouched.
    pub fn superseded(&self) -> Self {
        Self {
            status: RecordStatus::Superseded,
            ..self.clone()
        }
    }
}

/// Per-account mapping from variant to its single latest record.
pub type AccountState = BTreeMap<ListType, ListRecord>;
