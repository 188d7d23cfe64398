// Errors raised while shaping query responses into chart data
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// A series does not line up with the shared label sequence
    #[error("series '{series}' has {actual} values but there are {expected} labels")]
    ShapeMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// Two series share a label, so they would collide as chart columns
    #[error("series label '{0}' appears more than once")]
    DuplicateSeries(String),

    #[error("sum of series values does not fit in 64 bits")]
    TotalOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown period '{0}', expected one of 年毎, 月毎, 日毎")]
    UnknownPeriod(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },

    #[error("department must not be empty")]
    EmptyDepartment,
}
