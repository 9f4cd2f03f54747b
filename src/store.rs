//! In-memory record collection with whole-collection replacement.
//!
//! Readers take a [`Dataset`] snapshot (a shared handle) and query it without
//! holding any lock. A refresh builds the new collection off to the side and
//! swaps the handle in one step, so a reader sees either the old collection or
//! the new one, never a mix.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::models::SaleRecord;
use crate::queries::{
    BarChartQuery, CombinedQuery, PieChartQuery, StatisticsQuery, TransactionQuery,
};

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// An immutable, cheaply clonable view of the record collection.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<Vec<SaleRecord>>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<SaleRecord>> for Dataset {
    fn from(records: Vec<SaleRecord>) -> Self {
        Self::new(records)
    }
}

impl Deref for Dataset {
    type Target = [SaleRecord];

    fn deref(&self) -> &[SaleRecord] {
        &self.records[..]
    }
}

impl Dataset {
    pub fn new(records: Vec<SaleRecord>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records[..]
    }

    // -- Query accessors ---------------------------------------------------

    pub fn transactions(&self) -> TransactionQuery<'_> {
        TransactionQuery::new(&self.records)
    }

    pub fn statistics(&self) -> StatisticsQuery<'_> {
        StatisticsQuery::new(&self.records)
    }

    pub fn bar_chart(&self) -> BarChartQuery<'_> {
        BarChartQuery::new(&self.records)
    }

    pub fn pie_chart(&self) -> PieChartQuery<'_> {
        PieChartQuery::new(&self.records)
    }

    pub fn combined(&self) -> CombinedQuery<'_> {
        CombinedQuery::new(&self.records)
    }
}

// ---------------------------------------------------------------------------
// RecordStore
// ---------------------------------------------------------------------------

/// Owns the current record collection. Starts empty.
pub struct RecordStore {
    current: ArcSwap<Vec<SaleRecord>>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
        }
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("records", &self.current.load().len())
            .finish()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a consistent handle to the current collection.
    pub fn snapshot(&self) -> Dataset {
        Dataset {
            records: self.current.load_full(),
        }
    }

    /// Replace the whole collection. Returns the new record count.
    pub fn replace(&self, records: Vec<SaleRecord>) -> usize {
        let len = records.len();
        self.current.store(Arc::new(records));
        len
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
