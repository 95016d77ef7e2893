use axum::{body::Bytes, http::StatusCode};
use chrono::Local;
use tracing::debug;
use utoipa::OpenApi;

use super::{dto::SensorReading, errors::IngestError};
use crate::ingest;

pub const DATA_RECEIVED: &str = "Data received successfully";

/// Accept a batch of sensor readings and log each one.
///
/// The body is decoded as JSON regardless of `Content-Type`. Nothing is
/// logged unless the whole batch decodes.
#[utoipa::path(
    post,
    path = "/data",
    request_body(content = Vec<SensorReading>, content_type = "application/json"),
    responses(
        (status = 200, description = "Batch accepted", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not a JSON array of sensor readings", body = String, content_type = "text/plain"),
        (status = 413, description = "Body exceeds MAX_BODY_BYTES"),
    ),
    tag = "ingest"
)]
pub async fn receive_data(body: Bytes) -> Result<(StatusCode, &'static str), IngestError> {
    let readings = ingest::decode_batch(&body)?;
    let logged = ingest::record_batch(&readings, &Local::now());
    debug!(readings = logged, bytes = body.len(), "Sensor batch accepted");

    Ok((StatusCode::OK, DATA_RECEIVED))
}

// ---------------------------------------------------------------------------
// OpenAPI spec
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    paths(receive_data),
    components(schemas(SensorReading)),
    tags((name = "ingest", description = "Sensor reading ingestion")),
    info(
        title = "Sensor Ingest API",
        version = "0.1.0",
        description = "Accepts batches of sensor readings over HTTP and logs them"
    )
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
