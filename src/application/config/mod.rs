//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use std::collections::HashMap;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::domain::policy::DEFAULT_SYSTEM_AUTHOR;

pub const DEFAULT_BASE_SIZE: u64 = 250;
pub const DEFAULT_THOUSANDS_SEPARATOR: &str = ",";
pub const DEFAULT_API_VERSION: &str = "7.1";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 전역 기본값
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// 호스트별 인증/엔드포인트 설정
    #[serde(default)]
    pub hosts: HashMap<String, HostConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// "작은 PR" 기준 제품 코드 라인 수
    pub base_size: Option<u64>,
    /// 시스템 작성자 표시 이름 접두어
    pub system_author: Option<String>,
    /// 천 단위 구분자
    pub thousands_separator: Option<String>,
    /// 지역화 문자열 override JSON 파일 경로
    pub resources_path: Option<String>,
    /// REST API 버전
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// 고정 토큰(민감정보: 권장하지 않음)
    pub token: Option<String>,
    /// 토큰을 읽을 환경변수 이름
    pub token_env: Option<String>,
    /// API base URL override(선택)
    pub api_base: Option<String>,
}

impl Config {
    pub fn base_size(&self) -> u64 {
        self.defaults.base_size.unwrap_or(DEFAULT_BASE_SIZE)
    }

    pub fn system_author(&self) -> String {
        self.defaults
            .system_author
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_AUTHOR.to_string())
    }

    pub fn thousands_separator(&self) -> String {
        self.defaults
            .thousands_separator
            .clone()
            .unwrap_or_else(|| DEFAULT_THOUSANDS_SEPARATOR.to_string())
    }

    pub fn api_version(&self) -> String {
        self.defaults
            .api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string())
    }

    pub fn host_config(&self, host: &str) -> Option<&HostConfig> {
        self.hosts.get(host)
    }

    /// 병합이 끝난 설정값의 범위를 확인한다.
    pub fn validate(&self) -> Result<()> {
        if self.defaults.base_size == Some(0) {
            bail!("defaults.base_size must be a positive integer");
        }
        Ok(())
    }

    /// 높은 우선순위 설정을 현재 설정 위에 덮어쓴다.
    pub fn merge_from(&mut self, other: Config) {
        self.defaults.merge_from(other.defaults);
        for (host, cfg) in other.hosts {
            self.hosts.entry(host).or_default().merge_from(cfg);
        }
    }
}

impl DefaultsConfig {
    pub fn merge_from(&mut self, other: DefaultsConfig) {
        if other.base_size.is_some() {
            self.base_size = other.base_size;
        }
        if other.system_author.is_some() {
            self.system_author = other.system_author;
        }
        if other.thousands_separator.is_some() {
            self.thousands_separator = other.thousands_separator;
        }
        if other.resources_path.is_some() {
            self.resources_path = other.resources_path;
        }
        if other.api_version.is_some() {
            self.api_version = other.api_version;
        }
    }
}

impl HostConfig {
    pub fn merge_from(&mut self, other: HostConfig) {
        if other.token.is_some() {
            self.token = other.token;
        }
        if other.token_env.is_some() {
            self.token_env = other.token_env;
        }
        if other.api_base.is_some() {
            self.api_base = other.api_base;
        }
    }
}
