use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::commands::{AddCommandParser, CommandParser};
use crate::error::AppError;
use crate::service::ApplicantDirectory;
use crate::storage::ApplicantRecord;

/// Body of `POST /api/v1/applicants`: the text that follows `add` on a command line.
#[derive(Debug, Clone, Deserialize)]
pub struct AddApplicantRequest {
    pub command: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddApplicantResponse {
    pub feedback: String,
    pub applicant: ApplicantRecord,
}

/// Router exposing applicant intake and record validation.
pub fn applicant_router(directory: Arc<ApplicantDirectory>) -> Router {
    Router::new()
        .route(
            "/api/v1/applicants",
            post(add_handler).get(list_handler),
        )
        .route("/api/v1/applicants/validate", post(validate_handler))
        .with_state(directory)
}

pub(crate) async fn add_handler(
    State(directory): State<Arc<ApplicantDirectory>>,
    Json(request): Json<AddApplicantRequest>,
) -> Result<(StatusCode, Json<AddApplicantResponse>), AppError> {
    let command = AddCommandParser.parse(&request.command)?;
    // Saving touches the data file while the book is locked.
    let (result, applicant) =
        tokio::task::spawn_blocking(move || directory.add(&command)).await??;

    Ok((
        StatusCode::CREATED,
        Json(AddApplicantResponse {
            feedback: result.feedback().to_string(),
            applicant,
        }),
    ))
}

pub(crate) async fn list_handler(
    State(directory): State<Arc<ApplicantDirectory>>,
) -> Json<Vec<ApplicantRecord>> {
    Json(directory.records())
}

pub(crate) async fn validate_handler(
    Json(record): Json<ApplicantRecord>,
) -> Result<Json<ApplicantRecord>, AppError> {
    let applicant = record.to_applicant()?;
    Ok(Json(ApplicantRecord::from(&applicant)))
}
