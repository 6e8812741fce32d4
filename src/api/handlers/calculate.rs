// src/api/handlers/calculate.rs
use actix_web::{HttpResponse, Result, web};
use serde_json::Value;

use crate::calculator;
use crate::models::{CalculationRequest, ErrorResponse};

/// `POST /calculate` — validate the operands, dispatch on the operation and
/// return the result. The body is taken as raw JSON so that mistyped fields
/// and non-object bodies still flow through validation and get the usual
/// `{"error": …}` shape. Every validation failure is a 400 with a single
/// `error` string; nothing here can fail server-side.
pub async fn calculate(body: web::Json<Value>) -> Result<HttpResponse> {
    let req = CalculationRequest::from_body(&body);
    match calculator::evaluate(&req) {
        Ok(outcome) => Ok(HttpResponse::Ok().json(outcome)),
        Err(e) => Ok(HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        })),
    }
}
