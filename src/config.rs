use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Name of the on-disk copy of the last fetched payload.
pub const SNAPSHOT_FILE: &str = "product_transaction.json";

/// Gzip-compressed variant accepted when loading offline.
pub const SNAPSHOT_FILE_GZ: &str = "product_transaction.json.gz";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PER_PAGE: usize = 10;

pub fn default_snapshot_dir() -> PathBuf {
    if let Some(cache) = dirs::cache_dir() {
        cache.join("sales-insights")
    } else {
        PathBuf::from(".sales-insights-cache")
    }
}
