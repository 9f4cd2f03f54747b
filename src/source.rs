//! Remote fetch of the sale record payload, with an optional on-disk snapshot.
//!
//! The payload is a JSON array of records served over HTTP. When a snapshot
//! directory is configured, every successful fetch is also written there so a
//! later process can start in offline mode from the last good copy.

use std::fs;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::config;
use crate::error::{Result, SalesError};
use crate::models::SaleRecord;

/// Fetches sale records from the configured URL or from a local snapshot.
pub struct DataSource {
    /// URL of the JSON payload.
    pub url: String,
    /// Directory holding the snapshot copy, if snapshots are enabled.
    pub snapshot_dir: Option<PathBuf>,
    /// If true, never contact the network (load the snapshot only).
    pub offline: bool,
    timeout: Duration,
    client: OnceLock<Client>,
}

impl DataSource {
    /// Create a new data source. Nothing is fetched until [`fetch`](Self::fetch).
    pub fn new(
        url: impl Into<String>,
        snapshot_dir: Option<PathBuf>,
        offline: bool,
        timeout: Duration,
    ) -> Result<Self> {
        if let Some(dir) = &snapshot_dir {
            fs::create_dir_all(dir)?;
        }
        Ok(Self {
            url: url.into(),
            snapshot_dir,
            offline,
            timeout,
            client: OnceLock::new(),
        })
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| SalesError::DataSourceUnavailable(format!("HTTP client: {e}")))?;
        Ok(self.client.get_or_init(|| client))
    }

    /// Load the full record collection.
    ///
    /// Online, this downloads and parses the payload. Offline, it reads the
    /// snapshot instead. Every failure is reported as
    /// [`SalesError::DataSourceUnavailable`].
    pub fn fetch(&self) -> Result<Vec<SaleRecord>> {
        if self.offline {
            return self.load_snapshot();
        }

        let body = self.download()?;
        let records = parse_records(&body)
            .map_err(|e| SalesError::DataSourceUnavailable(format!("malformed payload: {e}")))?;

        if let Some(dir) = &self.snapshot_dir {
            if let Err(e) = write_snapshot(dir, &body) {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to write snapshot");
            }
        }

        Ok(records)
    }

    fn download(&self) -> Result<Vec<u8>> {
        tracing::info!(url = %self.url, "fetching sale records");

        let unavailable = |e: reqwest::Error| {
            let reason = if e.is_timeout() {
                format!("request to {} timed out", self.url)
            } else {
                format!("request to {} failed: {e}", self.url)
            };
            SalesError::DataSourceUnavailable(reason)
        };

        let resp = self
            .client()?
            .get(&self.url)
            .send()
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;
        let bytes = resp.bytes().map_err(unavailable)?;
        Ok(bytes.to_vec())
    }

    /// Read the snapshot from the snapshot directory (plain or `.gz`).
    pub fn load_snapshot(&self) -> Result<Vec<SaleRecord>> {
        let dir = self.snapshot_dir.as_deref().ok_or_else(|| {
            SalesError::DataSourceUnavailable(
                "offline mode is enabled but no snapshot directory is configured".into(),
            )
        })?;

        let path = snapshot_path(dir).ok_or_else(|| {
            SalesError::DataSourceUnavailable(format!(
                "no snapshot found in {} and offline mode is enabled",
                dir.display()
            ))
        })?;

        tracing::info!(path = %path.display(), "loading sale records from snapshot");
        read_snapshot(&path).map_err(|e| {
            SalesError::DataSourceUnavailable(format!(
                "snapshot {} is unreadable: {e}",
                path.display()
            ))
        })
    }
}

/// Parse a payload into records. The payload must be a JSON array.
pub fn parse_records(body: &[u8]) -> Result<Vec<SaleRecord>> {
    Ok(serde_json::from_slice(body)?)
}

fn snapshot_path(dir: &Path) -> Option<PathBuf> {
    [config::SNAPSHOT_FILE, config::SNAPSHOT_FILE_GZ]
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

fn read_snapshot(path: &Path) -> Result<Vec<SaleRecord>> {
    let file = fs::File::open(path)?;
    let mut contents = Vec::new();
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        GzDecoder::new(BufReader::new(file)).read_to_end(&mut contents)?;
    } else {
        BufReader::new(file).read_to_end(&mut contents)?;
    }
    parse_records(&contents)
}

/// Write the payload to a temp file and rename it into place, so an
/// interrupted write never leaves a truncated snapshot behind.
fn write_snapshot(dir: &Path, body: &[u8]) -> Result<()> {
    let dest = dir.join(config::SNAPSHOT_FILE);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(body)?;
    tmp.flush()?;
    tmp.persist(&dest).map_err(|e| SalesError::Io(e.error))?;
    tracing::debug!(path = %dest.display(), bytes = body.len(), "snapshot written");
    Ok(())
}
