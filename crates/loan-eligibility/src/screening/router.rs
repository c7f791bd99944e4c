use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::ListType;
use super::ingest::ListUploadSummary;
use super::service::EligibilityService;

/// Router builder exposing the loan-eligibility HTTP surface.
///
/// `DELETE /records` is an administrative/test hook; everything else mirrors
/// the upload and query operations of the screening core.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/loan-eligibility/upload/:list", post(upload_handler))
        .route(
            "/api/v1/loan-eligibility/check-eligibility",
            post(check_handler),
        )
        .route(
            "/api/v1/loan-eligibility/check-eligibility/:account_id",
            get(check_by_path_handler),
        )
        .route(
            "/api/v1/loan-eligibility/account/:account_id",
            get(account_records_handler),
        )
        .route(
            "/api/v1/loan-eligibility/statistics",
            get(statistics_handler),
        )
        .route("/api/v1/loan-eligibility/records", delete(clear_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct EligibilityCheckRequest {
    pub account_id: String,
}

/// Upload acknowledgement payload.
#[derive(Debug, Serialize)]
pub struct ListUploadResponse {
    pub list_type: ListType,
    pub success: bool,
    pub message: String,
    pub total_rows: usize,
    pub processed_rows: usize,
    pub skipped_rows: usize,
    pub uploaded_at: NaiveDateTime,
}

impl From<ListUploadSummary> for ListUploadResponse {
    fn from(summary: ListUploadSummary) -> Self {
        let message = format!(
            "successfully processed {} out of {} rows for {}",
            summary.processed_rows,
            summary.total_rows,
            summary.list_type.description()
        );

        Self {
            list_type: summary.list_type,
            success: true,
            message,
            total_rows: summary.total_rows,
            processed_rows: summary.processed_rows,
            skipped_rows: summary.skipped_rows,
            uploaded_at: summary.uploaded_at,
        }
    }
}

pub(crate) async fn upload_handler(
    State(service): State<Arc<EligibilityService>>,
    Path(list): Path<String>,
    body: Bytes,
) -> Response {
    let Some(list_type) = ListType::from_route_segment(&list) else {
        let payload = json!({ "error": format!("unknown list '{list}'") });
        return (StatusCode::NOT_FOUND, Json(payload)).into_response();
    };

    match service.upload_list(list_type, &body) {
        Ok(summary) => {
            let response = ListUploadResponse::from(summary);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            let payload = json!({
                "list_type": list_type.code(),
                "success": false,
                "error": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn check_handler(
    State(service): State<Arc<EligibilityService>>,
    Json(request): Json<EligibilityCheckRequest>,
) -> Response {
    check_account(&service, &request.account_id)
}

pub(crate) async fn check_by_path_handler(
    State(service): State<Arc<EligibilityService>>,
    Path(account_id): Path<String>,
) -> Response {
    check_account(&service, &account_id)
}

fn check_account(service: &EligibilityService, account_id: &str) -> Response {
    let account_id = account_id.trim();
    if account_id.is_empty() {
        let payload = json!({ "error": "account_id is required" });
        return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
    }

    let outcome = service.check(account_id);
    (StatusCode::OK, Json(outcome)).into_response()
}

pub(crate) async fn account_records_handler(
    State(service): State<Arc<EligibilityService>>,
    Path(account_id): Path<String>,
) -> Response {
    let records = service.account_records(account_id.trim());
    (StatusCode::OK, Json(records)).into_response()
}

pub(crate) async fn statistics_handler(
    State(service): State<Arc<EligibilityService>>,
) -> Response {
    (StatusCode::OK, Json(service.statistics())).into_response()
}

pub(crate) async fn clear_handler(State(service): State<Arc<EligibilityService>>) -> Response {
    service.clear_all();
    let payload = json!({ "status": "cleared" });
    (StatusCode::OK, Json(payload)).into_response()
}
