//! 코멘트 스레드 저장소 구현.
//! Azure Repos REST API와 로컬 JSON 파일을 같은 게이트웨이 포트로 묶는다.

pub mod azure_repos;
pub mod file;

use crate::application::config::HostConfig;
use crate::application::ports::ThreadGateway;
use crate::domain::target::PullRequestTarget;

pub fn build_remote_gateway(
    target: &PullRequestTarget,
    host_cfg: Option<&HostConfig>,
    token: Option<String>,
    api_version: &str,
) -> Box<dyn ThreadGateway> {
    let api_base = host_cfg.and_then(|h| h.api_base.clone());

    Box::new(azure_repos::AzureReposClient::new(
        target.clone(),
        token,
        api_base,
        api_version.to_string(),
    ))
}
