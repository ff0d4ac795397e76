//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "PRMETRICS_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 파일이 하나도 없으면 기본값만으로 구성한다.
pub(crate) fn load_merged_config(paths: &[PathBuf]) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        debug!(path = %path.display(), "loaded config");
        loaded_paths.push(path.to_path_buf());
    }
    merged.validate()?;

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths.to_vec(),
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/prmetrics/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("prmetrics").join("config.json"));
    }

    paths.push(PathBuf::from(".prmetrics/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_in_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        let missing = dir.path().join("missing.json");
        fs::write(&low, r#"{"defaults": {"base_size": 100, "api_version": "6.0"}}"#).unwrap();
        fs::write(&high, r#"{"defaults": {"base_size": 400}}"#).unwrap();

        let loaded =
            load_merged_config(&[low.clone(), missing.clone(), high.clone()]).unwrap();

        assert_eq!(loaded.config.base_size(), 400);
        assert_eq!(loaded.config.api_version(), "6.0");
        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.searched_paths.len(), 3);
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();

        let err = load_merged_config(&[broken.clone()]).unwrap_err();

        assert!(format!("{err:#}").contains(&broken.display().to_string()));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn zero_base_size_fails_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"defaults": {"base_size": 0}}"#).unwrap();

        assert!(load_merged_config(&[path]).is_err());
    }
}
