//! API info, sample data, and rule handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use coach_core::{sample_transactions, RuleConfig, Transaction};

/// Response for the API root
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
}

/// Response wrapping a transaction list (same shape as the analysis request)
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

/// GET /api/ - API banner
pub async fn api_root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Personal Finance Coach API",
    })
}

/// GET /api/sample-transactions - Demo transactions for the web UI
pub async fn get_sample_transactions() -> Json<TransactionsResponse> {
    Json(TransactionsResponse {
        transactions: sample_transactions(),
    })
}

/// GET /api/rules - Thresholds and baseline budget in effect
pub async fn get_rules(State(state): State<Arc<AppState>>) -> Json<RuleConfig> {
    Json(state.rules)
}
