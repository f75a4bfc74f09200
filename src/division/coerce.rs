//! Operand coercion
//!
//! Turns a JSON scalar into an `f64`. Accepted shapes:
//! - JSON numbers (integers or floats)
//! - strings holding a decimal float, surrounding whitespace ignored
//!
//! Everything else (booleans, arrays, objects, non-numeric strings) is
//! rejected, as is any value that ends up NaN or infinite.

use serde_json::{value::RawValue, Value};

/// Coerces an operand still in its raw JSON form.
///
/// Number literals outside the `f64` range fail to parse here and are
/// rejected like any other non-finite value.
pub fn coerce_raw(raw: &RawValue) -> Option<f64> {
    let value: Value = serde_json::from_str(raw.get()).ok()?;
    coerce_operand(&value)
}

/// Coerces a single operand, returning None if the value is not numeric.
pub fn coerce_operand(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then_some(number)
}
