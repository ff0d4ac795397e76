//! 메트릭 코멘트 갱신 전체 흐름 유스케이스.

mod context;
mod plan;
mod publish;

use anyhow::Result;
use tracing::info;

use crate::application::comments::PullRequestComments;
use crate::application::ports::{
    CodeMetricsLoader, ConfigRepository, LocalizationFactory, Reporter, ThreadGatewayFactory,
};
use crate::domain::run::RunOptions;

use context::load_execution_context;
use plan::plan_actions;
use publish::{apply_actions, print_plan};

pub use plan::CommentAction;

/// 기존 스레드 조회부터 코멘트 생성/수정, 무시 파일 표시까지 조율한다.
pub struct UpdateCommentsUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub gateway_factory: &'a dyn ThreadGatewayFactory,
    pub metrics_loader: &'a dyn CodeMetricsLoader,
    pub localization: &'a dyn LocalizationFactory,
    pub reporter: &'a dyn Reporter,
}

impl<'a> UpdateCommentsUseCase<'a> {
    /// 실행 진입점. 적용(또는 dry-run 출력)한 작업 목록을 돌려준다.
    pub async fn execute(&self, options: RunOptions) -> Result<Vec<CommentAction>> {
        self.reporter.section("Session");
        if let Some(url) = &options.url {
            self.reporter.kv("Target", url);
        }
        self.reporter.kv(
            "Mode",
            if options.dry_run { "dry-run" } else { "update" },
        );

        let ctx = load_execution_context(self, &options).await?;
        let system_author = ctx.config.system_author();
        let comments = PullRequestComments {
            gateway: ctx.gateway.as_ref(),
            code_metrics: &ctx.code_metrics,
            parameters: &ctx.parameters,
            resources: ctx.resources.as_ref(),
            formatter: ctx.formatter.as_ref(),
            system_author: &system_author,
        };

        let data = comments.get_comment_data(ctx.iteration).await?;
        let content = comments.get_metrics_comment(ctx.iteration);
        let status = comments.get_metrics_comment_status();
        let actions = plan_actions(&data, content, status);
        info!(
            is_present = data.is_present,
            actions = actions.len(),
            "planned comment actions"
        );

        if options.dry_run {
            print_plan(self.reporter, &actions);
        } else {
            apply_actions(
                ctx.gateway.as_ref(),
                self.reporter,
                &actions,
                &comments.ignored_comment(),
            )
            .await?;
            self.reporter.section("Done");
        }

        Ok(actions)
    }
}
