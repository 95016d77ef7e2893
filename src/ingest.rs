use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone};
use tracing::info;

use crate::api::{dto::SensorReading, errors::IngestError};

/// Decode a request body into a batch of readings.
///
/// All-or-nothing: a single bad element rejects the whole batch.
pub fn decode_batch(body: &[u8]) -> Result<Vec<SensorReading>, IngestError> {
    Ok(serde_json::from_slice(body)?)
}

/// Emit one `INFO` event per reading, in batch order, all stamped with
/// `received_at`. Returns the number of events emitted.
pub fn record_batch<Tz>(readings: &[SensorReading], received_at: &DateTime<Tz>) -> usize
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let received_at = format_timestamp(received_at);

    for reading in readings {
        info!(
            sensor = %reading.sensor,
            temperature = reading.temperature,
            humidity = reading.humidity,
            luminosity = reading.luminosity,
            received_at = %received_at,
            "Received sensor reading"
        );
    }

    readings.len()
}

/// RFC 3339 at second precision, `Z` for UTC and a numeric offset otherwise.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
