// file: src/exporter/json.rs
// description: json export of comparison and scan reports

use crate::error::Result;
use crate::models::{PairScore, ScanOutcome};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ScanReport<T: Serialize> {
    pub generated_at: String,
    pub kind: &'static str,
    pub shingle_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    pub results: T,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn export_pairs(
        &self,
        pairs: &[PairScore],
        shingle_size: usize,
        pretty: bool,
    ) -> Result<PathBuf> {
        let report = ScanReport {
            generated_at: Utc::now().to_rfc3339(),
            kind: "compare",
            shingle_size,
            threshold: None,
            results: pairs,
        };
        self.write("compare", &report, pretty)
    }

    pub fn export_outcome(
        &self,
        outcome: &ScanOutcome,
        shingle_size: usize,
        threshold: f64,
        pretty: bool,
    ) -> Result<PathBuf> {
        let report = ScanReport {
            generated_at: Utc::now().to_rfc3339(),
            kind: "check",
            shingle_size,
            threshold: Some(threshold),
            results: outcome,
        };
        self.write("check", &report, pretty)
    }

    fn write<T: Serialize>(&self, prefix: &str, report: &ScanReport<T>, pretty: bool) -> Result<PathBuf> {
        let file_name = format!("{}-{}.json", prefix, Utc::now().format("%Y%m%dT%H%M%S%.3f"));
        let path = self.output_dir.join(file_name);

        let json = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        fs::write(&path, json)?;

        info!("Report written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RankedMatch;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("reports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("reports").is_dir());
    }

    #[test]
    fn test_export_pairs() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let pairs = vec![PairScore::new("a".to_string(), "b".to_string(), 0.5)];

        let path = exporter.export_pairs(&pairs, 7, true).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(value["kind"], "compare");
        assert_eq!(value["shingle_size"], 7);
        assert!(value.get("threshold").is_none());
        assert_eq!(value["results"][0]["score"], 0.5);
    }

    #[test]
    fn test_export_outcome() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let outcome = ScanOutcome::Matches {
            checked: 2,
            skipped: 0,
            matches: vec![RankedMatch::new("https://a".to_string(), 0.3, "x".to_string())],
        };

        let path = exporter.export_outcome(&outcome, 7, 0.02, false).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(value["threshold"], 0.02);
        assert_eq!(value["results"]["status"], "matches");
        assert_eq!(value["results"]["matches"][0]["source"], "https://a");
    }
}
