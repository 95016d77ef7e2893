use anyhow::{Context, Result};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use tracing::debug;

/// POST `body` to the ingest endpoint at `url` exactly as given and return
/// the response status and text.
///
/// Any HTTP status is returned as `Ok`; only transport failures are errors.
pub async fn send_batch(http: &Client, url: &str, body: Vec<u8>) -> Result<(StatusCode, String)> {
    debug!(url = %url, bytes = body.len(), "Sending sensor batch");

    let resp = http
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .with_context(|| format!("POST {url} failed"))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .context("Failed to read ingest server response body")?;

    Ok((status, text))
}
