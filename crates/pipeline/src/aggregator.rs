//! Aggregation run orchestration
//!
//! One run walks the configured feed URLs in order, skips sources already
//! covered today, accumulates everything else into a batch buffer, and only
//! then touches the store: one bulk append, one marker per contributing
//! source, one metadata replacement. A run happens once per process
//! lifetime, on its own task, after a short startup delay.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use forecourt_feeds::{StationFeed, normalize};
use forecourt_store::{NewFuelPriceRow, PriceStore};

use crate::error::Result;

/// Outcome of a completed aggregation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows appended by the bulk insert
    pub rows_appended: usize,
    /// Sources that contributed rows
    pub sources_fetched: usize,
}

/// Aggregation orchestrator
///
/// Generic over the feed implementation so tests can drive it with a canned
/// feed instead of the network.
pub struct Aggregator<F> {
    feed: F,
    store: Arc<PriceStore>,
    urls: Vec<String>,
}

impl<F: StationFeed> Aggregator<F> {
    /// Create a new aggregator over the configured feed URLs
    pub fn new(feed: F, store: Arc<PriceStore>, urls: Vec<String>) -> Self {
        Self { feed, store, urls }
    }

    /// The underlying feed
    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Run one aggregation pass for today's calendar date
    pub async fn run(&self) -> Result<RunSummary> {
        self.run_for_date(Local::now().date_naive()).await
    }

    /// Run one aggregation pass for a pinned date
    pub async fn run_for_date(&self, today: NaiveDate) -> Result<RunSummary> {
        let date = today.format("%Y-%m-%d").to_string();
        let prices = self.store.prices();

        let mut batch: Vec<NewFuelPriceRow> = Vec::new();
        let mut contributing: Vec<&str> = Vec::new();

        for url in &self.urls {
            if prices.has_fetched_today(url, &date).await? {
                info!(url = %url, "data already fetched today, skipping");
                continue;
            }

            // A failed fetch comes back empty and leaves no marker, so it
            // cannot block the remaining sources or the final append.
            let raw = self.feed.fetch_stations(url).await;
            if raw.is_empty() {
                continue;
            }

            let rows = normalize(raw, today);
            info!(url = %url, rows = rows.len(), "fetched and processed feed");
            batch.extend(rows);
            contributing.push(url);
        }

        if batch.is_empty() {
            debug!("no new data to insert");
            return Ok(RunSummary {
                rows_appended: 0,
                sources_fetched: 0,
            });
        }

        prices.append_rows(&batch).await?;
        for url in &contributing {
            prices.mark_fetched(url, &date).await?;
        }
        self.store
            .metadata()
            .replace(&Local::now().to_rfc3339())
            .await?;

        info!(
            rows = batch.len(),
            sources = contributing.len(),
            "aggregation run complete"
        );

        Ok(RunSummary {
            rows_appended: batch.len(),
            sources_fetched: contributing.len(),
        })
    }

    /// Spawn the run as a background task after a startup delay
    ///
    /// The task owns its error boundary: a failed run is logged and
    /// swallowed so it can never take the serving process down with it.
    pub fn spawn(self, startup_delay: Duration) -> JoinHandle<()>
    where
        F: 'static,
    {
        tokio::spawn(async move {
            tokio::time::sleep(startup_delay).await;

            match self.run().await {
                Ok(summary) => {
                    debug!(
                        rows = summary.rows_appended,
                        sources = summary.sources_fetched,
                        "background aggregation finished"
                    );
                }
                Err(e) => {
                    error!(error = %e, "background aggregation failed");
                }
            }
        })
    }
}
