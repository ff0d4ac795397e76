//! 기존 코멘트 스레드 매칭 결과.

use serde::Serialize;

use crate::domain::thread::{CommentId, ThreadId};

/// 메트릭 코멘트 존재 여부와 아직 표시되지 않은 무시 파일 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestCommentsData {
    /// 요청한 iteration의 메트릭 코멘트가 이미 있는지 여부.
    pub is_present: bool,
    /// 가장 최근 메트릭 코멘트 id. iteration이 달라도 채워진다.
    pub comment_id: Option<CommentId>,
    pub thread_id: Option<ThreadId>,
    pub ignored_files_with_lines_added: Vec<String>,
    pub ignored_files_without_lines_added: Vec<String>,
}

impl PullRequestCommentsData {
    pub fn new(
        ignored_files_with_lines_added: Vec<String>,
        ignored_files_without_lines_added: Vec<String>,
    ) -> Self {
        Self {
            is_present: false,
            comment_id: None,
            thread_id: None,
            ignored_files_with_lines_added,
            ignored_files_without_lines_added,
        }
    }

    /// 업데이트할 기존 메트릭 코멘트 위치(스레드 id, 코멘트 id).
    pub fn existing_comment(&self) -> Option<(ThreadId, CommentId)> {
        self.thread_id.zip(self.comment_id)
    }
}
