//! Request handlers.
//!
//! Handlers call the calculation core directly. It holds no state, so
//! concurrent requests need no shared application state or locking.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use wellsriley_core::calibration::{table_rows, CalibrationEntry};
use wellsriley_core::{ModelError, RiskBand, RiskRequest, RiskResult};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Offending input field, for input errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Request failure mapped to an HTTP response.
#[derive(Debug)]
pub enum ApiError {
    /// The calculation core rejected the scenario.
    Model(ModelError),
    /// The body could not be read as the expected JSON.
    Body(JsonRejection),
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        Self::Model(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Model(err) => {
                let status = match err {
                    ModelError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                    ModelError::DivisionByZero { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let body = ErrorResponse {
                    error: err.to_string(),
                    field: err.field().map(str::to_string),
                };
                (status, body)
            }
            Self::Body(rejection) => {
                // Data errors keep axum's 422, syntax errors its 400.
                let message = rejection.body_text();
                let body = ErrorResponse {
                    field: rejected_field(&message),
                    error: message,
                };
                (rejection.status(), body)
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Prefixes axum puts in front of the serde error text.
const REJECTION_PREFIXES: [&str; 2] = [
    "Failed to deserialize the JSON body into the target type: ",
    "Failed to parse the request body as JSON: ",
];

/// Extract the serde path (`total_persons`, `[2].length`) from a JSON
/// rejection message, if the error is tied to a field.
fn rejected_field(message: &str) -> Option<String> {
    let detail = REJECTION_PREFIXES
        .iter()
        .find_map(|prefix| message.strip_prefix(prefix))?;
    let (path, _) = detail.split_once(": ")?;
    if path.is_empty() || path == "." || path.contains(char::is_whitespace) {
        return None;
    }
    Some(path.to_string())
}

/// Successful risk calculation.
#[derive(Debug, Serialize, Deserialize)]
pub struct RiskResponse {
    /// Calculation result.
    pub result: RiskResult,
    /// Display band of the individual probability.
    pub band: RiskBand,
}

impl From<RiskResult> for RiskResponse {
    fn from(result: RiskResult) -> Self {
        Self {
            band: result.band(),
            result,
        }
    }
}

/// Compute the risk for one scenario.
///
/// Fields missing from the body take the intake-form defaults.
pub async fn compute_risk(
    payload: Result<Json<RiskRequest>, JsonRejection>,
) -> Result<Json<RiskResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "risk request body rejected");
        rejection
    })?;
    let result = request.evaluate().map_err(|e| {
        warn!(error = %e, "risk calculation rejected");
        e
    })?;
    debug!(
        probability = result.individual_probability_percent,
        secondary_cases = result.secondary_cases,
        "risk calculated"
    );
    Ok(Json(result.into()))
}

/// One entry of a batch response.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchItem {
    /// Position of the scenario in the request.
    pub index: usize,
    /// Result, when the scenario was valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<RiskResponse>,
    /// Error, when the scenario was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

/// Batch response.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    /// Per-scenario outcomes, in request order.
    pub items: Vec<BatchItem>,
    /// Number of scenarios computed.
    pub succeeded: usize,
    /// Number of scenarios rejected.
    pub failed: usize,
}

/// Compute several independent scenarios. One invalid scenario does not
/// fail the others.
pub async fn compute_risk_batch(
    payload: Result<Json<Vec<RiskRequest>>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(requests) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "batch request body rejected");
        rejection
    })?;
    let items: Vec<BatchItem> = requests
        .iter()
        .enumerate()
        .map(|(index, request)| match request.evaluate() {
            Ok(result) => BatchItem {
                index,
                response: Some(result.into()),
                error: None,
            },
            Err(e) => BatchItem {
                index,
                response: None,
                error: Some(ErrorResponse {
                    error: e.to_string(),
                    field: e.field().map(str::to_string),
                }),
            },
        })
        .collect();

    let failed = items.iter().filter(|item| item.error.is_some()).count();
    debug!(total = items.len(), failed, "batch calculated");

    Ok(Json(BatchResponse {
        succeeded: items.len() - failed,
        failed,
        items,
    }))
}

/// List the calibration tables.
pub async fn calibration() -> Json<Vec<CalibrationEntry>> {
    Json(table_rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_field_from_data_error() {
        let message = "Failed to deserialize the JSON body into the target type: \
                       total_persons: invalid type: floating point `2.5`, expected i64 at line 1 column 20";
        assert_eq!(rejected_field(message).as_deref(), Some("total_persons"));
    }

    #[test]
    fn test_rejected_field_keeps_batch_path() {
        let message = "Failed to deserialize the JSON body into the target type: \
                       [1].length: invalid type: string \"five\", expected f64 at line 1 column 22";
        assert_eq!(rejected_field(message).as_deref(), Some("[1].length"));
    }

    #[test]
    fn test_rejected_field_absent_at_root() {
        let message = "Failed to deserialize the JSON body into the target type: \
                       invalid type: integer `5`, expected struct RiskRequest at line 1 column 1";
        assert_eq!(rejected_field(message), None);
        assert_eq!(rejected_field("Expected request with `Content-Type: application/json`"), None);
    }
}
