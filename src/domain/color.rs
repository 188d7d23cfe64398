// Series color lookup
use serde::Serialize;
use std::collections::HashMap;

/// Fallback used for stacked (area) charts
pub const STACKED_DEFAULT_COLOR: &str = "#8b5cf6";
/// Fallback used for overlaid (line) charts
pub const OVERLAID_DEFAULT_COLOR: &str = "#ec4899";

/// Colors used when the department master supplies none
pub fn builtin_palette() -> HashMap<String, String> {
    [
        ("内科", "#ef4444"),
        ("小児科", "#3b82f6"),
        ("整形外科", "#f59e0b"),
        ("全科", "#8b5cf6"),
    ]
    .into_iter()
    .map(|(label, color)| (label.to_string(), color.to_string()))
    .collect()
}

/// Series label to display color, kept in the order the labels were requested
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ColorMap(Vec<SeriesColor>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesColor {
    pub label: String,
    pub color: String,
}

impl ColorMap {
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.color.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Give every requested label a color: the master's when it has a non-empty one,
/// `default_color` otherwise. Repeated labels are listed once.
pub fn build_color_map<'a, I>(
    series_labels: I,
    master_colors: &HashMap<String, String>,
    default_color: &str,
) -> ColorMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries: Vec<SeriesColor> = Vec::new();

    for label in series_labels {
        if entries.iter().any(|c| c.label == label) {
            continue;
        }
        let color = master_colors
            .get(label)
            .filter(|c| !c.trim().is_empty())
            .map(String::as_str)
            .unwrap_or(default_color);
        entries.push(SeriesColor {
            label: label.to_string(),
            color: color.to_string(),
        });
    }

    ColorMap(entries)
}
