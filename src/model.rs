/// Core data types for the monthly precipitation chart service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic beyond formatting, no I/O, and no external
/// dependencies — only types.

// ---------------------------------------------------------------------------
// Month labels
// ---------------------------------------------------------------------------

/// Three-letter calendar month labels, in calendar order.
///
/// The single source of truth for both the aggregator's output order and
/// the chart's x-axis domain.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ---------------------------------------------------------------------------
// Aggregated value type
// ---------------------------------------------------------------------------

/// Total precipitation for one calendar month, in inches.
///
/// Produced by `analysis::monthly::monthly_totals` — exactly twelve per run,
/// one per calendar month, January through December, regardless of which
/// months appear in the input. A month with no contributing days carries a
/// total of exactly 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// One of `MONTH_LABELS`.
    pub month: &'static str,
    /// Sum of all non-missing daily values for this month. Never negative.
    pub precipitation: f64,
}

impl MonthlyTotal {
    /// Hover-tooltip text for this bar, e.g. `"Jan\n1.70 inches"`.
    pub fn tooltip(&self) -> String {
        format!("{}\n{:.2} inches", self.month, self.precipitation)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching or decoding Open-Meteo archive data.
#[derive(Debug, PartialEq)]
pub enum ArchiveError {
    /// Non-2xx HTTP response from the archive API.
    HttpError(u16),
    /// The request could not be sent or the body could not be read.
    RequestError(String),
    /// The response body could not be deserialized.
    ParseError(String),
}

impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::HttpError(code) => write!(f, "HTTP error: {}", code),
            ArchiveError::RequestError(msg) => write!(f, "Request error: {}", msg),
            ArchiveError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ArchiveError {}

/// Errors that can arise when aggregating daily values into monthly totals.
///
/// Both variants indicate malformed input, not missing observations —
/// missing observations are `None` entries and aggregate to 0.
#[derive(Debug, PartialEq)]
pub enum AggregateError {
    /// The date and value sequences have different lengths.
    ShapeMismatch { dates: usize, values: usize },
    /// A date entry does not start with a `YYYY-MM` shaped prefix.
    MalformedDate(String),
}

impl std::fmt::Display for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateError::ShapeMismatch { dates, values } => {
                write!(f, "Input shape mismatch: {} dates vs {} values", dates, values)
            }
            AggregateError::MalformedDate(date) => write!(f, "Malformed date: {:?}", date),
        }
    }
}

impl std::error::Error for AggregateError {}
