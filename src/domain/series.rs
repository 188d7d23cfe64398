// Series domain models and row shaping for charts
use super::error::AggregationError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Column key used when a single series is turned into chart rows
pub const SINGLE_SERIES_LABEL: &str = "patients";

/// Single-series response, e.g. inpatients per ward
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabeledSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

impl LabeledSeries {
    pub fn as_series(&self) -> SeriesInput<'_> {
        SeriesInput::new(SINGLE_SERIES_LABEL, &self.values)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<i64>,
    #[serde(default)]
    pub border_color: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub fill: Option<bool>,
}

impl Dataset {
    pub fn style(&self) -> SeriesStyle {
        SeriesStyle {
            label: self.label.clone(),
            border_color: self.border_color.clone(),
            background_color: self.background_color.clone(),
            fill: self.fill,
        }
    }
}

/// Styling the backend attaches to a dataset, forwarded unchanged
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    pub label: String,
    pub border_color: Option<String>,
    pub background_color: Option<String>,
    pub fill: Option<bool>,
}

/// Multi-series response, e.g. outpatients per department over time
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MultiSeriesDataset {
    pub title: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl MultiSeriesDataset {
    pub fn series(&self) -> Vec<SeriesInput<'_>> {
        self.datasets
            .iter()
            .map(|d| SeriesInput::new(&d.label, &d.data))
            .collect()
    }

    pub fn styles(&self) -> Vec<SeriesStyle> {
        self.datasets.iter().map(Dataset::style).collect()
    }

    pub fn series_labels(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.label.as_str()).collect()
    }
}

/// Borrowed view of one named series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesInput<'a> {
    pub label: &'a str,
    pub data: &'a [i64],
}

impl<'a> SeriesInput<'a> {
    pub fn new(label: &'a str, data: &'a [i64]) -> Self {
        Self { label, data }
    }
}

/// One chart row: the category plus one value per series, in series order
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub category: String,
    pub values: Vec<(String, i64)>,
}

impl ChartRow {
    pub fn get(&self, series: &str) -> Option<i64> {
        self.values
            .iter()
            .find(|(label, _)| label == series)
            .map(|(_, value)| *value)
    }
}

impl Serialize for ChartRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("category", &self.category)?;
        for (label, value) in &self.values {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Pivot column-oriented series into one row per label.
///
/// Every series must have exactly one value per label and series labels must be
/// unique; otherwise nothing is produced.
pub fn to_chart_rows(
    labels: &[String],
    series_list: &[SeriesInput<'_>],
) -> Result<Vec<ChartRow>, AggregationError> {
    let mut seen = HashSet::with_capacity(series_list.len());
    for series in series_list {
        if !seen.insert(series.label) {
            return Err(AggregationError::DuplicateSeries(series.label.to_string()));
        }
        if series.data.len() != labels.len() {
            return Err(AggregationError::ShapeMismatch {
                series: series.label.to_string(),
                expected: labels.len(),
                actual: series.data.len(),
            });
        }
    }

    let rows = labels
        .iter()
        .enumerate()
        .map(|(index, label)| ChartRow {
            category: label.clone(),
            values: series_list
                .iter()
                .map(|s| (s.label.to_string(), s.data[index]))
                .collect(),
        })
        .collect();

    Ok(rows)
}
