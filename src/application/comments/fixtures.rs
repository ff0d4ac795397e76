//! 테스트 공용 픽스처.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::ThreadGateway;
use crate::domain::metrics::{CodeMetrics, Metrics};
use crate::domain::thread::{CommentId, CommentThread, NewThread, ThreadId, ThreadStatus};

pub const SYSTEM_AUTHOR: &str = "Project Collection Build Service (";
pub const IGNORED_MARKER: &str = "❗ **This file may not need to be reviewed.**";

pub fn threads(payload: Value) -> Vec<CommentThread> {
    serde_json::from_value(payload).expect("thread payload")
}

pub fn code_metrics() -> CodeMetrics {
    CodeMetrics {
        is_small: true,
        is_sufficiently_tested: Some(true),
        metrics: Metrics::new(1000, 1000, 1000),
        ignored_files_with_lines_added: Vec::new(),
        ignored_files_without_lines_added: Vec::new(),
    }
}

/// 고정된 스레드 목록만 돌려주는 게이트웨이.
pub struct StaticThreads(pub Vec<CommentThread>);

#[async_trait]
impl ThreadGateway for StaticThreads {
    async fn fetch_current_iteration(&self) -> Result<u64> {
        Ok(1)
    }

    async fn get_comment_threads(&self) -> Result<Vec<CommentThread>> {
        Ok(self.0.clone())
    }

    async fn create_thread(&self, _thread: &NewThread) -> Result<ThreadId> {
        anyhow::bail!("static threads are read-only")
    }

    async fn update_comment(
        &self,
        _thread_id: ThreadId,
        _comment_id: CommentId,
        _content: &str,
    ) -> Result<()> {
        anyhow::bail!("static threads are read-only")
    }

    async fn update_thread_status(&self, _thread_id: ThreadId, _status: ThreadStatus) -> Result<()> {
        anyhow::bail!("static threads are read-only")
    }
}
