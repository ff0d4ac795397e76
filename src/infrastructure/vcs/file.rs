//! 로컬 JSON 파일에서 스레드 목록을 읽는 게이트웨이.
//!
//! 오프라인 점검용이므로 쓰기 연산은 모두 실패한다.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use crate::application::ports::ThreadGateway;
use crate::domain::thread::{CommentId, CommentThread, NewThread, ThreadId, ThreadStatus};

pub struct FileThreadGateway {
    path: PathBuf,
}

impl FileThreadGateway {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ThreadGateway for FileThreadGateway {
    async fn fetch_current_iteration(&self) -> Result<u64> {
        bail!("threads file has no iteration; pass --iteration")
    }

    async fn get_comment_threads(&self) -> Result<Vec<CommentThread>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read threads file {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse threads JSON in {}", self.path.display()))
    }

    async fn create_thread(&self, _thread: &NewThread) -> Result<ThreadId> {
        bail!("threads file is read-only")
    }

    async fn update_comment(
        &self,
        _thread_id: ThreadId,
        _comment_id: CommentId,
        _content: &str,
    ) -> Result<()> {
        bail!("threads file is read-only")
    }

    async fn update_thread_status(&self, _thread_id: ThreadId, _status: ThreadStatus) -> Result<()> {
        bail!("threads file is read-only")
    }
}
