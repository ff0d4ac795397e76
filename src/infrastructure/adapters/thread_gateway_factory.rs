//! 스레드 게이트웨이 팩토리 포트 구현 어댑터.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::application::config::HostConfig;
use crate::application::ports::{ThreadGateway, ThreadGatewayFactory};
use crate::domain::target::PullRequestTarget;
use crate::infrastructure::config::resolve_host_token;
use crate::infrastructure::vcs;

pub struct ThreadGatewayFactoryAdapter;

impl ThreadGatewayFactory for ThreadGatewayFactoryAdapter {
    fn remote(
        &self,
        target: &PullRequestTarget,
        host_cfg: Option<&HostConfig>,
        api_version: &str,
    ) -> Result<Box<dyn ThreadGateway>> {
        let resolved = resolve_host_token(host_cfg);
        if resolved.token.is_none() {
            anyhow::bail!(
                "no access token for {}; set hosts.\"{}\".token_env or SYSTEM_ACCESSTOKEN",
                target.host(),
                target.host()
            );
        }
        debug!(host = target.host(), source = ?resolved.source, "resolved access token");

        Ok(vcs::build_remote_gateway(
            target,
            host_cfg,
            resolved.token,
            api_version,
        ))
    }

    fn from_file(&self, path: &Path) -> Box<dyn ThreadGateway> {
        Box::new(vcs::file::FileThreadGateway::new(path.to_path_buf()))
    }
}
