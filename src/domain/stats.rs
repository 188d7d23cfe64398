// Summary statistics over chart values
use super::error::AggregationError;
use super::series::SeriesInput;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: i64,
    /// Mean rounded half away from zero
    pub average: i64,
    pub max: i64,
    pub min: i64,
}

/// Aggregate every value of every series as one flat set.
///
/// An empty set yields all zeros. A total outside the `i64` range is an error.
pub fn compute_stats(series_list: &[SeriesInput<'_>]) -> Result<Stats, AggregationError> {
    let mut values = series_list.iter().flat_map(|s| s.data.iter().copied());

    let Some(first) = values.next() else {
        return Ok(Stats::default());
    };

    let (mut total, mut count, mut max, mut min) = (first, 1usize, first, first);
    for value in values {
        total = total
            .checked_add(value)
            .ok_or(AggregationError::TotalOverflow)?;
        count += 1;
        max = max.max(value);
        min = min.min(value);
    }

    let average = (total as f64 / count as f64).round() as i64;

    Ok(Stats {
        total,
        average,
        max,
        min,
    })
}
