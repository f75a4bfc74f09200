//! Request DTOs for the division API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::collections::HashMap;

use serde_json::value::RawValue;

/// Request body for the divide operation (POST /divide)
///
/// Both operands are kept as raw JSON text until coercion, so numbers,
/// numeric strings and out-of-range literals all reach the type check.
/// A JSON `null` is treated the same as a missing key.
#[derive(Debug, Clone)]
pub struct DivisionRequest {
    /// Dividend
    pub numerator: Option<Box<RawValue>>,
    /// Divisor
    pub denominator: Option<Box<RawValue>>,
}

impl DivisionRequest {
    /// Parses a request body.
    ///
    /// Fails if the body is not a JSON object. Unknown keys are ignored and
    /// a repeated key keeps its last value.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let mut fields: HashMap<String, Box<RawValue>> = serde_json::from_slice(body)?;

        Ok(Self {
            numerator: take_field(&mut fields, "numerator"),
            denominator: take_field(&mut fields, "denominator"),
        })
    }

    /// Returns both operands if present, None if either is missing.
    pub fn operands(&self) -> Option<(&RawValue, &RawValue)> {
        Some((self.numerator.as_deref()?, self.denominator.as_deref()?))
    }
}

fn take_field(fields: &mut HashMap<String, Box<RawValue>>, name: &str) -> Option<Box<RawValue>> {
    fields.remove(name).filter(|raw| raw.get().trim() != "null")
}
