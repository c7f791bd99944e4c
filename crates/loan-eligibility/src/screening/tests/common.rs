use std::sync::Arc;

use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::screening::registry::EligibilityRegistry;
use crate::screening::service::EligibilityService;

pub(super) fn ts(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub(super) fn registry() -> EligibilityRegistry {
    EligibilityRegistry::new()
}

pub(super) fn service() -> Arc<EligibilityService> {
    Arc::new(EligibilityService::new())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
