//! Sales insights SDK for Rust.
//!
//! Loads a dataset of product sale records from a remote JSON source into
//! memory and answers month-scoped questions about it: a paged transaction
//! listing with free-text search, sale statistics, a price-range histogram,
//! a category breakdown, and a combined report of all four.
//!
//! # Quick start
//!
//! ```no_run
//! use sales_insights::SalesSdk;
//! use sales_insights::queries::PageRequest;
//!
//! let sdk = SalesSdk::builder().build().unwrap();
//! sdk.initialize().unwrap();
//!
//! let data = sdk.snapshot();
//! let stats = data.statistics().get(Some("march")).unwrap();
//! let page = data
//!     .transactions()
//!     .list(Some("march"), Some("shirt"), PageRequest::default())
//!     .unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod source;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncSalesSdk;
pub use error::{ReportPart, Result, SalesError};
pub use models::SaleRecord;
pub use source::DataSource;
pub use store::{Dataset, RecordStore};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use models::{CategoryCount, CombinedReport, PriceRangeCount, Statistics, TransactionPage};
use queries::PageRequest;

// ---------------------------------------------------------------------------
// SalesSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalesSdk`] instance.
///
/// Use [`SalesSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalesSdkBuilder::build) to create the SDK.
pub struct SalesSdkBuilder {
    source_url: String,
    snapshot_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for SalesSdkBuilder {
    fn default() -> Self {
        Self {
            source_url: config::DEFAULT_SOURCE_URL.to_string(),
            snapshot_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl SalesSdkBuilder {
    /// Set the URL the record payload is fetched from.
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Keep a copy of every successful fetch in `path`.
    ///
    /// Without a snapshot directory nothing is written to disk and offline
    /// mode has nothing to load.
    pub fn snapshot_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.snapshot_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use the platform cache directory for snapshots (e.g.
    /// `~/.cache/sales-insights` on Linux).
    pub fn default_snapshot_dir(mut self) -> Self {
        self.snapshot_dir = Some(config::default_snapshot_dir());
        self
    }

    /// Enable or disable offline mode.
    ///
    /// When offline, initialization reads the snapshot instead of the
    /// network. Defaults to `false`.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for the fetch.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK with an empty record collection.
    ///
    /// No data is fetched until [`SalesSdk::initialize`] is called.
    pub fn build(self) -> Result<SalesSdk> {
        let source = DataSource::new(
            self.source_url,
            self.snapshot_dir,
            self.offline,
            self.timeout,
        )?;
        Ok(SalesSdk {
            store: RecordStore::new(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// SalesSdk
// ---------------------------------------------------------------------------

/// The main entry point for the sales insights SDK.
///
/// Owns the [`RecordStore`] and the [`DataSource`] that fills it. Query
/// methods run against a snapshot of the store taken at call time.
pub struct SalesSdk {
    store: RecordStore,
    source: DataSource,
}

impl SalesSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SalesSdkBuilder {
        SalesSdkBuilder::default()
    }

    /// Fetch the dataset and replace the in-memory collection with it.
    ///
    /// Safe to call repeatedly; each successful call fully replaces the prior
    /// contents. On failure the previous collection is left untouched.
    /// Returns the number of records loaded.
    pub fn initialize(&self) -> Result<usize> {
        match self.source.fetch() {
            Ok(records) => {
                let count = self.store.replace(records);
                tracing::info!(records = count, "dataset initialized");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "dataset initialization failed; keeping previous data");
                Err(e)
            }
        }
    }

    /// Take a consistent snapshot of the current collection for querying.
    pub fn snapshot(&self) -> Dataset {
        self.store.snapshot()
    }

    // -- Query shortcuts ---------------------------------------------------

    /// One page of the month's transactions matching `search`.
    pub fn transactions(
        &self,
        month: Option<&str>,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<TransactionPage> {
        self.snapshot().transactions().list(month, search, page)
    }

    /// Sale statistics for `month`.
    pub fn statistics(&self, month: Option<&str>) -> Result<Statistics> {
        self.snapshot().statistics().get(month)
    }

    /// Price histogram for `month`.
    pub fn bar_chart(&self, month: Option<&str>) -> Result<Vec<PriceRangeCount>> {
        self.snapshot().bar_chart().get(month)
    }

    /// Category breakdown for `month`.
    pub fn pie_chart(&self, month: Option<&str>) -> Result<Vec<CategoryCount>> {
        self.snapshot().pie_chart().get(month)
    }

    /// All four month views in one report.
    pub fn combined(&self, month: Option<&str>) -> Result<CombinedReport> {
        self.snapshot().combined().get(month)
    }

    /// Return a reference to the underlying [`RecordStore`].
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Return a reference to the underlying [`DataSource`].
    pub fn source(&self) -> &DataSource {
        &self.source
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SalesSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SalesSdk(source={}, records={}, offline={})",
            self.source.url,
            self.store.len(),
            self.source.offline
        )
    }
}
