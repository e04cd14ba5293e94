//! AWS Lambda entry point
//!
//! POST a JSON `ComparisonRequest`; the response body is a `ComparisonResponse`
//! or `{ "error": ... }` with status 400.

use buy_vs_rent::service::{handle_json, ErrorResponse};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::Serialize;

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("cache-control", "no-store")
        .body(Body::from(serde_json::to_string(body)?))?;
    Ok(response)
}

async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    match handle_json(event.body().as_ref()) {
        Ok(response) => json_response(200, &response),
        Err(error) => {
            log::warn!("rejected request: {error}");
            json_response(400, &ErrorResponse { error })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(function_handler)).await
}
