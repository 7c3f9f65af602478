/// Country API client: one GET, one table.
use std::io::Write;

use tracing::{error, info};

use crate::config::Config;
use crate::errors::{FetchError, FetchResult};
use crate::models::{CountryRecord, DisplayRow};
use crate::table;

const TABLE_HEADERS: [&str; 3] = ["Country Name", "Capital", "Flag URL"];

/// Fetches the country list and renders it as a grid table.
pub struct CountryClient {
    config: Config,
    http: reqwest::Client,
}

impl CountryClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the country list. Soft-failure boundary: any transport error is
    /// logged with its kind and degraded to an empty list, so callers only
    /// observe missing data, never an error.
    pub async fn fetch(&self) -> Vec<CountryRecord> {
        match self.try_fetch().await {
            Ok(records) => records,
            Err(err) => {
                error!("{err}");
                Vec::new()
            }
        }
    }

    /// Single GET against the configured endpoint. Statuses
    /// >= 400 are failures. Success returns the JSON array unmodified.
    async fn try_fetch(&self) -> FetchResult<Vec<CountryRecord>> {
        info!("Fetching country data from API.");
        let response = self
            .http
            .get(&self.config.api_url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;
        let response = response
            .error_for_status()
            .map_err(FetchError::from_transport)?;
        let records = response
            .json::<Vec<CountryRecord>>()
            .await
            .map_err(FetchError::from_transport)?;
        info!("Successfully fetched country data.");
        Ok(records)
    }

    /// Fetch and print the country table to standard output. Never fails:
    /// an empty fetch logs an error and prints nothing.
    pub async fn render(&self) {
        let mut stdout = std::io::stdout();
        self.render_to(&mut stdout).await;
    }

    /// Render into an arbitrary writer. Writes at most once: exactly once
    /// when there is data, not at all when the fetch came back empty.
    pub async fn render_to<W: Write>(&self, out: &mut W) {
        let records = self.fetch().await;
        if records.is_empty() {
            error!("No data to display.");
            return;
        }

        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| DisplayRow::from_record(record).into_columns())
            .collect();
        let rendered = table::grid(&TABLE_HEADERS, &rows);
        if let Err(err) = writeln!(out, "{rendered}") {
            error!("An error occurred while displaying data: {err}");
        }
    }
}
