// src/calculator.rs
use serde_json::Value;

use crate::errors::{CalcError, Result};
use crate::models::{CalculationRequest, CalculationResult};

/// Coerces a dynamically typed input into an `f64`, using NaN as the failure
/// sentinel. Numbers pass through; strings get a trimmed float parse;
/// everything else (null, bools, arrays, objects) is NaN. Never panics.
pub fn coerce_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Validates a calculation request and performs it.
///
/// Validation order is fixed: both operands must coerce to numbers before the
/// operation is even looked at, and a zero divisor is rejected before the
/// division runs.
pub fn evaluate(req: &CalculationRequest) -> Result<CalculationResult> {
    let a = coerce_number(&req.a);
    let b = coerce_number(&req.b);

    if a.is_nan() || b.is_nan() {
        return Err(CalcError::InvalidInput);
    }

    let op = req.op.as_str().unwrap_or_default();
    let result = match op {
        "add" => a + b,
        "sub" => a - b,
        "mul" => a * b,
        "div" => {
            if b == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            a / b
        }
        _ => return Err(CalcError::UnknownOperation),
    };

    Ok(CalculationResult {
        op: op.to_string(),
        a,
        b,
        result,
    })
}
