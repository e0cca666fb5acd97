//! Calculator HTTP handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use bilo_http::{ApiResult, ValidJson};

use crate::app_state::AppState;
use crate::calculator;
use crate::factors::FactorTable;
use crate::SERVICE;

#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub activity_type: String,
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub success: bool,
    pub calculation_id: String,
    pub co2_kg: f64,
    pub activity_type: String,
    pub service: &'static str,
}

/// `POST /calculate`
pub async fn calculate(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CalculationRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    let calc = calculator::calculate(state.factors(), &req.activity_type, req.value, &req.unit)?;

    tracing::info!(
        calculation_id = %calc.calculation_id,
        activity_type = %calc.activity_type,
        value = req.value,
        co2_kg = calc.co2_kg,
        "emission calculated"
    );

    Ok(Json(CalculationResponse {
        success: true,
        calculation_id: calc.calculation_id,
        co2_kg: calc.co2_kg,
        activity_type: calc.activity_type,
        service: SERVICE.name,
    }))
}

/// `GET /emission-factors`
pub async fn emission_factors(State(state): State<AppState>) -> Json<FactorTable> {
    Json(*state.factors())
}
