//! 계획된 작업을 출력(dry-run)하거나 게이트웨이에 적용하는 단계.

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::debug;

use crate::application::ports::{Reporter, ThreadGateway};
use crate::application::usecases::update_comments::plan::CommentAction;
use crate::domain::thread::{NewThread, NewThreadFile, ThreadStatus};

/// 작업 목록과 메트릭 코멘트 본문을 출력만 한다.
pub(super) fn print_plan(reporter: &dyn Reporter, actions: &[CommentAction]) {
    reporter.section("Dry Run: Planned Actions");
    if actions.is_empty() {
        reporter.status("dry-run", "metrics comment is up to date");
    }
    for action in actions {
        reporter.status("dry-run", &action.describe());
    }

    for action in actions {
        if let CommentAction::CreateMetricsThread { content, .. }
        | CommentAction::UpdateMetricsComment { content, .. } = action
        {
            reporter.section("Dry Run: Metrics Comment");
            reporter.raw(content);
        }
    }
}

/// 메트릭 작업은 순서대로, 무시 파일 스레드는 동시에 생성한다.
pub(super) async fn apply_actions(
    gateway: &dyn ThreadGateway,
    reporter: &dyn Reporter,
    actions: &[CommentAction],
    ignored_comment: &str,
) -> Result<()> {
    reporter.section("Update Threads");

    let (ignored, metrics): (Vec<&CommentAction>, Vec<&CommentAction>) =
        actions.iter().partition(|action| action.is_ignored_file());

    for action in metrics {
        match action {
            CommentAction::CreateMetricsThread { content, status } => {
                let thread_id = gateway
                    .create_thread(&NewThread {
                        content: content.clone(),
                        status: *status,
                        file: None,
                    })
                    .await?;
                reporter.status("created", &format!("metrics thread {thread_id}"));
            }
            CommentAction::UpdateMetricsComment {
                thread_id,
                comment_id,
                content,
            } => {
                gateway.update_comment(*thread_id, *comment_id, content).await?;
                reporter.status("updated", &format!("comment {comment_id} in thread {thread_id}"));
            }
            CommentAction::UpdateThreadStatus { thread_id, status } => {
                gateway.update_thread_status(*thread_id, *status).await?;
                reporter.status(
                    "updated",
                    &format!("thread {thread_id} status {}", status.as_str()),
                );
            }
            CommentAction::CreateIgnoredFileThread { .. } => {}
        }
    }

    let mut pending = FuturesUnordered::new();
    for action in ignored {
        let CommentAction::CreateIgnoredFileThread { path, lines_added } = action else {
            continue;
        };
        let thread = NewThread {
            content: ignored_comment.to_string(),
            status: ThreadStatus::Closed,
            file: Some(NewThreadFile {
                path: path.clone(),
                lines_added: *lines_added,
            }),
        };
        pending.push(async move {
            let result = gateway.create_thread(&thread).await;
            (path, result)
        });
    }

    let mut first_error = None;
    while let Some((path, result)) = pending.next().await {
        match result {
            Ok(thread_id) => {
                debug!(path = %path, thread_id, "created ignored file thread");
                reporter.status("created", &format!("ignored file thread for {path}"));
            }
            Err(err) => {
                reporter.status("error", &format!("{path}: {err:#}"));
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
