pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod ingest;

#[cfg(test)]
pub(crate) mod test_support;
