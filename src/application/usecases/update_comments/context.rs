//! 갱신 실행 컨텍스트(설정/게이트웨이/지표) 준비 단계.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::application::comments::Parameters;
use crate::application::config::Config;
use crate::application::ports::{NumberFormatter, TextResources, ThreadGateway};
use crate::application::usecases::update_comments::UpdateCommentsUseCase;
use crate::domain::metrics::CodeMetrics;
use crate::domain::run::RunOptions;
use crate::domain::target::PullRequestTarget;

/// 유스케이스 전 구간에서 공유되는 실행 상태.
pub(super) struct ExecutionContext {
    pub config: Config,
    pub gateway: Box<dyn ThreadGateway>,
    pub iteration: u64,
    pub code_metrics: CodeMetrics,
    pub parameters: Parameters,
    pub resources: Box<dyn TextResources>,
    pub formatter: Box<dyn NumberFormatter>,
}

/// 설정 로딩, 게이트웨이 생성, iteration/지표 확보까지 선행한다.
pub(super) async fn load_execution_context(
    use_case: &UpdateCommentsUseCase<'_>,
    options: &RunOptions,
) -> Result<ExecutionContext> {
    use_case.reporter.section("Load Config");
    let config = use_case
        .config_repo
        .load()
        .context("failed to load prmetrics config")?;

    if options.iteration == Some(0) || options.base_size == Some(0) {
        bail!("iteration and base size must be positive integers");
    }

    let gateway = match (&options.threads_file, &options.url) {
        (Some(path), _) => {
            use_case.reporter.kv("Threads", &path.display().to_string());
            use_case.gateway_factory.from_file(path)
        }
        (None, Some(url)) => {
            let target =
                PullRequestTarget::parse(url).context("failed to parse pull request URL")?;
            use_case.reporter.kv("Host", target.host());
            use_case.gateway_factory.remote(
                &target,
                config.host_config(target.host()),
                &config.api_version(),
            )?
        }
        (None, None) => bail!("either a pull request URL or --threads-file is required"),
    };

    let iteration = match options.iteration {
        Some(iteration) => iteration,
        None => {
            use_case.reporter.status("iteration", "fetching latest iteration");
            gateway.fetch_current_iteration().await?
        }
    };
    use_case.reporter.kv("Iteration", &iteration.to_string());

    let code_metrics = use_case.metrics_loader.load(&options.metrics_file)?;

    let parameters = Parameters {
        base_size: options.base_size.unwrap_or_else(|| config.base_size()),
    };
    let resources = use_case
        .localization
        .resources(config.defaults.resources_path.as_deref().map(Path::new))
        .context("failed to load text resources")?;
    let formatter = use_case
        .localization
        .formatter(&config.thousands_separator());

    Ok(ExecutionContext {
        config,
        gateway,
        iteration,
        code_metrics,
        parameters,
        resources,
        formatter,
    })
}
