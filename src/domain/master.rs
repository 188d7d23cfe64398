// Department master list domain model
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterEntry {
    pub id: String,
    pub name: String,
    pub seq: i32,
    pub is_display: bool,
    #[serde(default)]
    pub color: Option<String>,
}

/// Displayable entries in presentation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasterList {
    entries: Vec<MasterEntry>,
}

impl MasterList {
    pub fn new(entries: Vec<MasterEntry>) -> Self {
        let mut entries: Vec<MasterEntry> = entries.into_iter().filter(|e| e.is_display).collect();
        entries.sort_by(|a, b| a.seq.cmp(&b.seq).then_with(|| a.id.cmp(&b.id)));
        Self { entries }
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Name to color for entries that carry a non-blank one
    pub fn colors(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .filter_map(|e| {
                e.color
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(|c| (e.name.clone(), c.to_string()))
            })
            .collect()
    }
}
