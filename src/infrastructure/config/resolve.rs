//! 설정 값(token/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::HostConfig;

/// 파이프라인 에이전트가 노출하는 기본 액세스 토큰 환경변수.
pub const PIPELINE_TOKEN_ENV: &str = "SYSTEM_ACCESSTOKEN";

/// Host 토큰 해석 결과.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenResolution {
    pub token: Option<String>,
    pub source: Option<String>,
}

/// inline → token_env → `SYSTEM_ACCESSTOKEN` 순으로 토큰을 찾는다.
pub fn resolve_host_token(host_cfg: Option<&HostConfig>) -> TokenResolution {
    resolve_with(host_cfg, |name| env::var(name).ok())
}

fn resolve_with(
    host_cfg: Option<&HostConfig>,
    lookup: impl Fn(&str) -> Option<String>,
) -> TokenResolution {
    if let Some(token) = host_cfg
        .and_then(|cfg| cfg.token.as_deref())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return TokenResolution {
            token: Some(token.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let mut env_hint: Option<String> = None;
    if let Some(env_name) = host_cfg
        .and_then(|cfg| cfg.token_env.as_deref())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        match lookup(env_name).map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => {
                return TokenResolution {
                    token: Some(v),
                    source: Some(format!("env:{env_name}")),
                };
            }
            _ => env_hint = Some(format!("env:{env_name} (missing)")),
        }
    }

    match lookup(PIPELINE_TOKEN_ENV).map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => TokenResolution {
            token: Some(v),
            source: Some(format!("env:{PIPELINE_TOKEN_ENV}")),
        },
        _ => TokenResolution {
            token: None,
            source: env_hint,
        },
    }
}
