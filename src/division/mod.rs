//! Division Module
//!
//! Core logic behind `POST /divide`. Takes the raw request body and either
//! produces a [`DivisionResponse`] or the [`ApiError`] describing the first
//! check that failed. Checks run in a fixed order and stop at the first failure:
//!
//! 1. body is a JSON object
//! 2. both `numerator` and `denominator` are present and non-null
//! 3. both coerce to finite numbers
//! 4. denominator is non-zero
//! 5. quotient is finite

mod coerce;


pub use coerce::{coerce_operand, coerce_raw};

use serde_json::value::RawValue;
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::models::{DivisionRequest, DivisionResponse};

/// Validates a raw `/divide` body and performs the division.
pub fn divide(body: &[u8]) -> Result<DivisionResponse> {
    let request = DivisionRequest::from_json(body).map_err(|e| {
        warn!("No JSON data provided in request: {}", e);
        ApiError::MalformedRequest
    })?;

    let (raw_numerator, raw_denominator) = request.operands().ok_or_else(|| {
        warn!(
            "Missing required fields in request: numerator={}, denominator={}",
            raw_text(request.numerator.as_deref()),
            raw_text(request.denominator.as_deref())
        );
        ApiError::MissingField
    })?;

    let (numerator, denominator) = match (coerce_raw(raw_numerator), coerce_raw(raw_denominator)) {
        (Some(n), Some(d)) => (n, d),
        _ => {
            warn!(
                "Invalid input type: numerator={}, denominator={}",
                raw_numerator.get(),
                raw_denominator.get()
            );
            return Err(ApiError::InvalidType);
        }
    };

    if denominator == 0.0 {
        warn!("Division by zero attempted: numerator={}", numerator);
        return Err(ApiError::DivisionByZero);
    }

    let result = numerator / denominator;
    if !result.is_finite() {
        warn!(
            "Division result out of range: {} / {} = {}",
            numerator, denominator, result
        );
        return Err(ApiError::ResultOutOfRange);
    }

    info!("Division operation: {} / {} = {}", numerator, denominator, result);

    Ok(DivisionResponse::new(result, numerator, denominator))
}

fn raw_text(raw: Option<&RawValue>) -> &str {
    raw.map_or("null", RawValue::get)
}
