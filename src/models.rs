// src/models.rs
use serde::Serialize;
use serde_json::Value;

/// Incoming body for `POST /calculate`. The wire format is dynamically typed
/// end to end, so all three fields stay `Value` and validation happens
/// downstream; anything absent is `Null`.
#[derive(Debug, Clone)]
pub struct CalculationRequest {
    pub op: Value,
    pub a: Value,
    pub b: Value,
}

impl CalculationRequest {
    /// Pulls the three fields out of an arbitrary well-formed JSON body.
    /// Non-object bodies and missing fields yield `Null`, which fails
    /// numeric validation rather than being rejected at the parse layer.
    pub fn from_body(body: &Value) -> Self {
        Self {
            op: body.get("op").cloned().unwrap_or(Value::Null),
            a: body.get("a").cloned().unwrap_or(Value::Null),
            b: body.get("b").cloned().unwrap_or(Value::Null),
        }
    }
}

/// Successful calculation, echoing the operands in their coerced numeric form.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub op: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
