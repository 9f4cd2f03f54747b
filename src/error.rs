use std::fmt;

/// The sub-view of a combined report that failed to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPart {
    Transactions,
    Statistics,
    BarChart,
    PieChart,
}

impl fmt::Display for ReportPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportPart::Transactions => "transactions",
            ReportPart::Statistics => "statistics",
            ReportPart::BarChart => "barChart",
            ReportPart::PieChart => "pieChart",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SalesError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Failed to compute {part}: {source}")]
    AggregationFailed {
        part: ReportPart,
        #[source]
        source: Box<SalesError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SalesError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            SalesError::MissingParameter(_) => "MISSING_PARAMETER",
            SalesError::DataSourceUnavailable(_) => "DATA_SOURCE_UNAVAILABLE",
            SalesError::AggregationFailed { .. } => "AGGREGATION_FAILED",
            SalesError::Io(_) | SalesError::Json(_) | SalesError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub(crate) fn in_part(self, part: ReportPart) -> Self {
        SalesError::AggregationFailed {
            part,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SalesError>;
