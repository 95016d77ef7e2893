//! Writes the OpenAPI document for `POST /data`.
//!
//! Usage:
//!   cargo run --bin generate_openapi > openapi.json
//!   cargo run --bin generate_openapi -- --output openapi.json

use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use sensor_ingest::{api::handlers::ApiDoc, cli::arg_value};
use utoipa::OpenApi;

fn main() -> Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialise OpenAPI spec")?;

    let args: Vec<String> = env::args().collect();
    let output_path = arg_value(&args, "--output").map(PathBuf::from);

    match output_path {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("Error writing to {}", path.display()))?;
            eprintln!("OpenAPI spec written to {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(json.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
