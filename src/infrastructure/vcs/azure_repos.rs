//! Azure Repos Pull Request 스레드 API 연동 구현.

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::application::ports::ThreadGateway;
use crate::domain::target::PullRequestTarget;
use crate::domain::thread::{
    CommentId, CommentThread, NewThread, NewThreadFile, ThreadId, ThreadStatus,
};

pub struct AzureReposClient {
    client: Client,
    target: PullRequestTarget,
    token: Option<String>,
    api_base: Option<String>,
    api_version: String,
}

impl AzureReposClient {
    pub fn new(
        target: PullRequestTarget,
        token: Option<String>,
        api_base: Option<String>,
        api_version: String,
    ) -> Self {
        Self {
            client: Client::new(),
            target,
            token,
            api_base,
            api_version,
        }
    }

    fn api_base(&self) -> String {
        // 설정이 없으면 URL에서 얻은 컬렉션 루트를 그대로 쓴다.
        match &self.api_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => self.target.collection_url.clone(),
        }
    }

    fn pull_request_endpoint(&self) -> String {
        format!(
            "{}/{}/_apis/git/repositories/{}/pullRequests/{}",
            self.api_base(),
            encode(&self.target.project),
            encode(&self.target.repository),
            self.target.pull_request_id
        )
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!(
            "{}/{}?api-version={}",
            self.pull_request_endpoint(),
            suffix,
            self.api_version
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let req = self
            .client
            .request(method, url)
            .header("User-Agent", "prmetrics")
            .header("Accept", "application/json");

        // PAT/파이프라인 토큰 모두 사용자 이름 없는 basic 인증으로 보낸다.
        match &self.token {
            Some(token) => req.basic_auth("", Some(token)),
            None => req,
        }
    }

    async fn read_json<T: DeserializeOwned>(resp: Response, action: &str) -> Result<T> {
        let status = resp.status();
        let body = resp
            .text()
            .await
            .with_context(|| format!("azure: failed to read {action} body"))?;

        if !status.is_success() {
            anyhow::bail!("azure: failed to {action} ({status}): {body}");
        }

        serde_json::from_str(&body).with_context(|| format!("azure: invalid {action} JSON"))
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    value: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct IterationResponse {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct CreatedThreadResponse {
    id: ThreadId,
}

pub(crate) fn thread_body(thread: &NewThread) -> Value {
    let mut body = json!({
        "comments": [{
            "parentCommentId": 0,
            "content": thread.content,
            "commentType": 1
        }],
        "status": thread.status.as_str(),
    });

    if let Some(file) = &thread.file {
        body["threadContext"] = file_context(file);
    }
    body
}

fn file_context(file: &NewThreadFile) -> Value {
    let position = json!({ "line": 1, "offset": 1 });
    let end = json!({ "line": 1, "offset": 2 });
    let path = format!("/{}", file.path.trim_start_matches('/'));

    // 추가 라인이 있으면 변경 후(right), 삭제만 있으면 변경 전(left)에 단다.
    if file.lines_added {
        json!({ "filePath": path, "rightFileStart": position, "rightFileEnd": end })
    } else {
        json!({ "filePath": path, "leftFileStart": position, "leftFileEnd": end })
    }
}

#[async_trait]
impl ThreadGateway for AzureReposClient {
    async fn fetch_current_iteration(&self) -> Result<u64> {
        let resp = self
            .request(Method::GET, self.endpoint("iterations"))
            .send()
            .await
            .context("azure: failed to fetch iterations")?;

        let list: ListResponse<IterationResponse> =
            Self::read_json(resp, "fetch iterations").await?;
        list.value
            .iter()
            .map(|it| it.id)
            .max()
            .context("azure: pull request has no iterations")
    }

    async fn get_comment_threads(&self) -> Result<Vec<CommentThread>> {
        let resp = self
            .request(Method::GET, self.endpoint("threads"))
            .send()
            .await
            .context("azure: failed to list threads")?;

        let list: ListResponse<CommentThread> = Self::read_json(resp, "list threads").await?;
        debug!(count = list.value.len(), "fetched comment threads");
        Ok(list.value)
    }

    async fn create_thread(&self, thread: &NewThread) -> Result<ThreadId> {
        let resp = self
            .request(Method::POST, self.endpoint("threads"))
            .json(&thread_body(thread))
            .send()
            .await
            .context("azure: failed to create thread")?;

        let created: CreatedThreadResponse = Self::read_json(resp, "create thread").await?;
        Ok(created.id)
    }

    async fn update_comment(
        &self,
        thread_id: ThreadId,
        comment_id: CommentId,
        content: &str,
    ) -> Result<()> {
        let url = self.endpoint(&format!("threads/{thread_id}/comments/{comment_id}"));
        let resp = self
            .request(Method::PATCH, url)
            .json(&json!({ "content": content }))
            .send()
            .await
            .context("azure: failed to update comment")?;

        let _: Value = Self::read_json(resp, "update comment").await?;
        Ok(())
    }

    async fn update_thread_status(&self, thread_id: ThreadId, status: ThreadStatus) -> Result<()> {
        let resp = self
            .request(Method::PATCH, self.endpoint(&format!("threads/{thread_id}")))
            .json(&json!({ "status": status.as_str() }))
            .send()
            .await
            .context("azure: failed to update thread status")?;

        let _: Value = Self::read_json(resp, "update thread status").await?;
        Ok(())
    }
}
