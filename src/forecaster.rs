//! The two forecast operations, independent of the MCP transport.

use chrono::NaiveDateTime;

use crate::aggregate::ForecastTable;
use crate::client::ForecastSource;
use crate::config::Config;
use crate::constants::{FORECAST_SLOTS, NUM_OF_ROWS};
use crate::error::ForecastError;
use crate::formatters::{join_blocks, render_current_snapshot, render_forecast_series};
use crate::issue_time::{resolve_issue_time, IssueTime};
use crate::models::parse_forecast_items;

/// Resolves the issue, fetches it through `S` and renders the reports.
///
/// Every call builds its own table; nothing is kept between calls.
#[derive(Clone)]
pub struct Forecaster<S> {
    source: S,
    config: Config,
}

impl<S: ForecastSource> Forecaster<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    /// Report for the next `FORECAST_SLOTS` slots at grid point (`nx`, `ny`)
    pub async fn forecast_series(
        &self,
        nx: i32,
        ny: i32,
        now: NaiveDateTime,
    ) -> Result<String, ForecastError> {
        let issue = resolve_issue_time(now);
        let table = self.fetch_table(nx, ny, &issue).await?;

        let blocks = render_forecast_series(&table, FORECAST_SLOTS);
        if blocks.is_empty() {
            return Err(ForecastError::EmptyDataset);
        }
        Ok(join_blocks(&blocks))
    }

    /// Earliest forecast slot at grid point (`nx`, `ny`), used as current weather
    pub async fn current_weather(
        &self,
        nx: i32,
        ny: i32,
        now: NaiveDateTime,
    ) -> Result<String, ForecastError> {
        let issue = resolve_issue_time(now);
        let table = self.fetch_table(nx, ny, &issue).await?;

        render_current_snapshot(&table, &issue)
    }

    async fn fetch_table(
        &self,
        nx: i32,
        ny: i32,
        issue: &IssueTime,
    ) -> Result<ForecastTable, ForecastError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ForecastError::MissingCredential)?;

        tracing::info!("Using forecast issued {} for grid {}, {}", issue, nx, ny);

        let query = [
            ("serviceKey", api_key.to_string()),
            ("numOfRows", NUM_OF_ROWS.to_string()),
            ("pageNo", "1".to_string()),
            ("dataType", "JSON".to_string()),
            ("base_date", issue.base_date()),
            ("base_time", issue.base_time()),
            ("nx", nx.to_string()),
            ("ny", ny.to_string()),
        ];

        let reply = self.source.fetch(&self.config.forecast_url, &query).await?;
        let items = parse_forecast_items(reply)?;
        if items.is_empty() {
            return Err(ForecastError::EmptyDataset);
        }

        let table = ForecastTable::aggregate(&items);
        tracing::debug!("Aggregated {} records into {} slots", items.len(), table.len());
        Ok(table)
    }
}
