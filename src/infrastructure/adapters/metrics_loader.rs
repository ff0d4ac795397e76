//! 지표 JSON 파일 로더 어댑터.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::CodeMetricsLoader;
use crate::domain::metrics::CodeMetrics;

pub struct JsonCodeMetricsLoader;

impl CodeMetricsLoader for JsonCodeMetricsLoader {
    fn load(&self, path: &Path) -> Result<CodeMetrics> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read metrics file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse metrics JSON in {}", path.display()))
    }
}
