//! AWS Lambda handler for ROI calculations
//!
//! Accepts an automatic or manual ROI request as JSON and returns the yearly ROI
//! series. Routes by path suffix:
//! - `POST .../auto`   - growth-curve request
//! - `POST .../manual` - explicit year-by-year request
//!
//! Supports Lambda Function URLs for direct HTTP access.

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use card_roi::{AutomaticRoiInput, ManualRoiInput, RoiCalculator, RoiError, RoiRequest};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn response(status: i64, body: String) -> LambdaFunctionUrlResponse {
    LambdaFunctionUrlResponse {
        status_code: status,
        headers: Default::default(),
        body: Some(body),
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status: i64, message: String) -> LambdaFunctionUrlResponse {
    let body = serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| r#"{"error":"internal error"}"#.to_string());
    response(status, body)
}

fn engine_error_response(err: RoiError) -> LambdaFunctionUrlResponse {
    if err.is_invalid_input() {
        error_response(400, err.to_string())
    } else {
        warn!("ROI calculation failed: {}", err);
        error_response(500, err.to_string())
    }
}

/// Decode the body into the request shape selected by the path
fn parse_request(path: &str, body: &str) -> Result<RoiRequest, LambdaFunctionUrlResponse> {
    let path = path.trim_end_matches('/');
    if path.ends_with("/auto") {
        serde_json::from_str::<AutomaticRoiInput>(body)
            .map(RoiRequest::Automatic)
            .map_err(|e| error_response(400, format!("Invalid JSON: {}", e)))
    } else if path.ends_with("/manual") {
        serde_json::from_str::<ManualRoiInput>(body)
            .map(RoiRequest::Manual)
            .map_err(|e| error_response(400, format!("Invalid JSON: {}", e)))
    } else {
        Err(error_response(404, format!("Unknown route: {}", path)))
    }
}

fn handle(calculator: &RoiCalculator, method: &str, path: &str, body: &str) -> LambdaFunctionUrlResponse {
    if !method.eq_ignore_ascii_case("POST") {
        return error_response(405, format!("Method {} not allowed", method));
    }

    let request = match parse_request(path, body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match calculator.run(&request) {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => response(200, json),
            Err(e) => error_response(500, format!("Unable to encode result: {}", e)),
        },
        Err(e) => engine_error_response(e),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    if request.is_base64_encoded {
        return Ok(error_response(400, "Binary bodies are not supported".to_string()));
    }

    let method = request.request_context.http.method.unwrap_or_default();
    let path = request.raw_path.unwrap_or_default();
    let body = request.body.unwrap_or_default();

    let calculator = RoiCalculator::from_env();
    let response = handle(&calculator, &method, &path, &body);

    info!("{} {} -> {} in {:?}", method, path, response.status_code, start.elapsed());
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
