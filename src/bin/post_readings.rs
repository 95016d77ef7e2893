//! Sends one batch of sensor readings to a running ingest server and prints
//! the status code and response body.
//!
//! Usage:
//!   cargo run --bin post_readings -- --input batch.json
//!   cat batch.json | cargo run --bin post_readings -- --url http://host:8080/data
//!
//! Without `--url`, `INGEST_URL` is used, then `http://localhost:8080/data`.

use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use reqwest::Client;
use sensor_ingest::{cli::arg_value, client::send_batch, ingest::decode_batch};

const DEFAULT_URL: &str = "http://localhost:8080/data";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let args: Vec<String> = env::args().collect();
    let input = arg_value(&args, "--input").map(PathBuf::from);
    let url = arg_value(&args, "--url")
        .map(str::to_owned)
        .or_else(|| env::var("INGEST_URL").ok())
        .unwrap_or_else(|| DEFAULT_URL.to_owned());

    let body = match &input {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read batch from stdin")?;
            buf
        }
    };

    // Refuse to send what the server would reject anyway.
    let count = decode_batch(&body)
        .context("Input is not a JSON array of sensor readings")?
        .len();
    if count == 0 {
        eprintln!("No readings to send");
        return Ok(());
    }

    let (status, text) = send_batch(&Client::new(), &url, body).await?;

    println!("{}", status.as_u16());
    println!("{text}");

    if !status.is_success() {
        bail!("ingest server rejected {count} readings with {status}");
    }
    Ok(())
}
