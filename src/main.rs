/// country-info - Main Entry Point
///
/// Thin client over the restcountries.com API: fetches the country list once
/// and prints name, capital, and flag URL as a grid table. Failures are
/// logged to the configured file, never surfaced through the exit code.
mod client;
mod config;
mod errors;
mod logging;
mod models;
mod table;

use client::CountryClient;
use config::Config;

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    // Read configuration from environment
    let config = Config::from_env();

    if let Err(e) = logging::init(&config.log_path) {
        eprintln!("Failed to initialize logging: {e}");
    }

    CountryClient::new(config).render().await;
}
