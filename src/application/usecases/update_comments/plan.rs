//! 매칭 결과로부터 스레드 변경 작업 목록을 계산한다.

use crate::domain::comment_data::PullRequestCommentsData;
use crate::domain::thread::{ThreadId, CommentId, ThreadStatus};

/// 게이트웨이에 적용할 단일 변경 작업.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAction {
    CreateMetricsThread {
        content: String,
        status: ThreadStatus,
    },
    UpdateMetricsComment {
        thread_id: ThreadId,
        comment_id: CommentId,
        content: String,
    },
    UpdateThreadStatus {
        thread_id: ThreadId,
        status: ThreadStatus,
    },
    /// 무시 파일 표시 스레드. 항상 닫힌 상태로 만든다.
    CreateIgnoredFileThread { path: String, lines_added: bool },
}

impl CommentAction {
    /// dry-run 출력용 한 줄 요약.
    pub fn describe(&self) -> String {
        match self {
            Self::CreateMetricsThread { status, .. } => {
                format!("create metrics thread ({})", status.as_str())
            }
            Self::UpdateMetricsComment {
                thread_id,
                comment_id,
                ..
            } => format!("update comment {comment_id} in thread {thread_id}"),
            Self::UpdateThreadStatus { thread_id, status } => {
                format!("set thread {thread_id} status to {}", status.as_str())
            }
            Self::CreateIgnoredFileThread { path, lines_added } => {
                let side = if *lines_added { "added" } else { "deleted" };
                format!("mark ignored file {path} ({side} lines)")
            }
        }
    }

    pub fn is_ignored_file(&self) -> bool {
        matches!(self, Self::CreateIgnoredFileThread { .. })
    }
}

pub(crate) fn plan_actions(
    data: &PullRequestCommentsData,
    content: String,
    status: ThreadStatus,
) -> Vec<CommentAction> {
    let mut actions = Vec::new();

    if !data.is_present {
        match data.existing_comment() {
            Some((thread_id, comment_id)) => {
                actions.push(CommentAction::UpdateMetricsComment {
                    thread_id,
                    comment_id,
                    content,
                });
                actions.push(CommentAction::UpdateThreadStatus { thread_id, status });
            }
            None => actions.push(CommentAction::CreateMetricsThread { content, status }),
        }
    }

    for path in &data.ignored_files_with_lines_added {
        actions.push(CommentAction::CreateIgnoredFileThread {
            path: path.clone(),
            lines_added: true,
        });
    }
    for path in &data.ignored_files_without_lines_added {
        actions.push(CommentAction::CreateIgnoredFileThread {
            path: path.clone(),
            lines_added: false,
        });
    }

    actions
}
