//! 적용 설정 진단(inspection) 뷰 모델.

use std::collections::BTreeMap;

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_host_token;
use crate::application::config::{DefaultsConfig, HostConfig};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub defaults: DefaultsConfig,
    pub effective_defaults: EffectiveDefaults,
    pub hosts: BTreeMap<String, HostInspection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveDefaults {
    pub base_size: u64,
    pub system_author: String,
    pub thousands_separator: String,
    pub resources_path: Option<String>,
    pub api_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostInspection {
    pub token_source: Option<String>,
    pub token_resolved: bool,
    pub api_base: Option<String>,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let mut hosts = BTreeMap::new();
        for (host, cfg) in &loaded.config.hosts {
            hosts.insert(host.clone(), host_inspection(cfg));
        }

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            defaults: loaded.config.defaults.clone(),
            effective_defaults: EffectiveDefaults {
                base_size: loaded.config.base_size(),
                system_author: loaded.config.system_author(),
                thousands_separator: loaded.config.thousands_separator(),
                resources_path: loaded.config.defaults.resources_path.clone(),
                api_version: loaded.config.api_version(),
            },
            hosts,
        }
    }
}

fn host_inspection(cfg: &HostConfig) -> HostInspection {
    let resolved = resolve_host_token(Some(cfg));
    HostInspection {
        token_source: resolved.source,
        token_resolved: resolved.token.is_some(),
        api_base: cfg.api_base.clone(),
    }
}
