//! Loading of metrics snapshot files. This is the CLI-side adapter
//! between the aggregated counts a data layer exports and the plain
//! value types the engine consumes.

use crate::error::{Result, ScoreError};
use crate::types::metrics::{CategoryNames, RawMetrics};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub count: u32,
    pub name: Option<String>,
}

/// On-disk snapshot format, one JSON document per business.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryEntry>,
    #[serde(default)]
    pub integrated_pairs: u32,
    #[serde(default)]
    pub tiers: BTreeMap<String, u32>,
    #[serde(default)]
    pub sop_count: u32,
    #[serde(default)]
    pub avg_sop_steps: f32,
    pub total_categories: u32,
    pub total_tools: u32,
}

impl Snapshot {
    pub fn metrics(&self) -> RawMetrics {
        RawMetrics {
            category_tools: self
                .categories
                .iter()
                .map(|(id, entry)| (id.clone(), entry.count))
                .collect(),
            integrated_pairs: self.integrated_pairs,
            tiers: self.tiers.clone(),
            sop_count: self.sop_count,
            avg_sop_steps: self.avg_sop_steps,
            total_categories: self.total_categories,
            total_tools: self.total_tools,
        }
    }

    /// Display names for categories that supplied one.
    pub fn category_names(&self) -> CategoryNames {
        self.categories
            .iter()
            .filter_map(|(id, entry)| {
                entry.name.as_ref().map(|name| (id.clone(), name.clone()))
            })
            .collect()
    }
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Err(ScoreError::SnapshotNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)
        .map_err(|e| ScoreError::SnapshotParse(format!("{}: {}", path.display(), e)))?;
    debug!(
        path = %path.display(),
        categories = snapshot.categories.len(),
        tools = snapshot.total_tools,
        "loaded snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "categories": {
            "finance": { "count": 3, "name": "Finance" },
            "hr": { "count": 0 }
        },
        "integrated_pairs": 4,
        "tiers": { "free": 2, "enterprise": 1 },
        "sop_count": 5,
        "avg_sop_steps": 6.0,
        "total_categories": 8,
        "total_tools": 10
    }"#;

    #[test]
    fn snapshot_parses_and_converts_to_metrics() {
        let snapshot: Snapshot = serde_json::from_str(SAMPLE).expect("snapshot should parse");
        let metrics = snapshot.metrics();
        assert_eq!(metrics.category_tools.get("finance"), Some(&3));
        assert_eq!(metrics.total_tools, 10);
        assert_eq!(metrics.tiers.get("enterprise"), Some(&1));

        let names = snapshot.category_names();
        assert_eq!(names.get("finance").map(String::as_str), Some("Finance"));
        assert!(!names.contains_key("hr"));
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"total_categories": 4, "total_tools": 0}"#)
                .expect("minimal snapshot should parse");
        assert!(snapshot.categories.is_empty());
        assert_eq!(snapshot.metrics().integrated_pairs, 0);
    }

    #[test]
    fn load_snapshot_reports_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_snapshot(&dir.path().join("absent.json"))
            .expect_err("load should fail");
        assert!(err.to_string().contains("snapshot file not found"));
    }

    #[test]
    fn load_snapshot_reports_malformed_json() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").expect("file should write");
        let err = load_snapshot(&path).expect_err("load should fail");
        assert!(err.to_string().contains("snapshot parse error"));
    }
}
