//! Async wrapper around [`SalesSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs SDK operations on the blocking thread pool via
//! [`tokio::task::spawn_blocking`]. Initialization performs a blocking HTTP
//! fetch; the queries themselves are in-memory and fast.
//!
//! # Example
//!
//! ```no_run
//! use sales_insights::AsyncSalesSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncSalesSdk::builder().build().await.unwrap();
//!     sdk.initialize().await.unwrap();
//!
//!     let report = sdk.combined(Some("june".into())).await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let stats = sdk.run(|s| s.statistics(Some("july"))).await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::config;
use crate::error::{Result, SalesError};
use crate::models::{CategoryCount, CombinedReport, PriceRangeCount, Statistics, TransactionPage};
use crate::queries::PageRequest;
use crate::SalesSdk;

// ---------------------------------------------------------------------------
// AsyncSalesSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSalesSdk`] instance.
pub struct AsyncSalesSdkBuilder {
    source_url: String,
    snapshot_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncSalesSdkBuilder {
    fn default() -> Self {
        Self {
            source_url: config::DEFAULT_SOURCE_URL.to_string(),
            snapshot_dir: None,
            offline: false,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl AsyncSalesSdkBuilder {
    /// Set the URL the record payload is fetched from.
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    /// Keep a copy of every successful fetch in `path`.
    pub fn snapshot_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.snapshot_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for the fetch.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool so
    /// it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncSalesSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SalesSdk::builder()
                .source_url(self.source_url)
                .offline(self.offline)
                .timeout(self.timeout);
            if let Some(dir) = self.snapshot_dir {
                builder = builder.snapshot_dir(dir);
            }
            let sdk = builder.build()?;
            Ok(AsyncSalesSdk {
                inner: Arc::new(sdk),
            })
        })
        .await
        .map_err(|e| SalesError::Internal(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSalesSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`SalesSdk`].
///
/// Cloning is cheap; all clones share one record store.
#[derive(Clone)]
pub struct AsyncSalesSdk {
    inner: Arc<SalesSdk>,
}

impl From<SalesSdk> for AsyncSalesSdk {
    fn from(sdk: SalesSdk) -> Self {
        Self {
            inner: Arc::new(sdk),
        }
    }
}

impl AsyncSalesSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSalesSdkBuilder {
        AsyncSalesSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&SalesSdk` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SalesSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(|e| SalesError::Internal(format!("Task join error: {e}")))?
    }

    /// Fetch the dataset and swap it in. See [`SalesSdk::initialize`].
    pub async fn initialize(&self) -> Result<usize> {
        self.run(|s| s.initialize()).await
    }

    pub async fn transactions(
        &self,
        month: Option<String>,
        search: Option<String>,
        page: PageRequest,
    ) -> Result<TransactionPage> {
        self.run(move |s| s.transactions(month.as_deref(), search.as_deref(), page))
            .await
    }

    pub async fn statistics(&self, month: Option<String>) -> Result<Statistics> {
        self.run(move |s| s.statistics(month.as_deref())).await
    }

    pub async fn bar_chart(&self, month: Option<String>) -> Result<Vec<PriceRangeCount>> {
        self.run(move |s| s.bar_chart(month.as_deref())).await
    }

    pub async fn pie_chart(&self, month: Option<String>) -> Result<Vec<CategoryCount>> {
        self.run(move |s| s.pie_chart(month.as_deref())).await
    }

    pub async fn combined(&self, month: Option<String>) -> Result<CombinedReport> {
        self.run(move |s| s.combined(month.as_deref())).await
    }

    /// Number of records currently loaded.
    pub fn len(&self) -> usize {
        self.inner.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.store().is_empty()
    }

    /// Return a reference to the wrapped [`SalesSdk`].
    pub fn inner(&self) -> &SalesSdk {
        &self.inner
    }
}
