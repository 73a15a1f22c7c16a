//! Analysis handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use coach_core::{analyze_with, Transaction};

/// Request body for an analysis run
#[derive(Debug, Deserialize)]
pub struct FinanceRequest {
    pub transactions: Vec<Transaction>,
}

/// POST /api/analyze-finances - Run the analysis pipeline
///
/// Malformed bodies are rejected with 400 before the pipeline runs.
pub async fn analyze_finances(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FinanceRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request(&format!("Invalid request: {}", rejection.body_text()))
    })?;

    let count = request.transactions.len();
    let record = analyze_with(&state.rules, request.transactions);

    tracing::info!(
        transactions = count,
        total_spent = record.total_spent,
        alerts = record.alerts.len(),
        "Analyzed finances"
    );

    Ok(Json(record.report()).into_response())
}
