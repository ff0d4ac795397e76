//! 원격 API가 돌려주는 코멘트 스레드 원본 스키마.
//!
//! 모든 필드가 누락될 수 있으므로 `Option`으로만 표현하고,
//! 필수 여부 검증은 애플리케이션 계층의 스캐너가 담당한다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type ThreadId = u64;
pub type CommentId = u64;

/// 기대한 타입으로 읽히면 `Valid`, 아니면 원본 JSON 값을 그대로 보존한다.
/// 필드 하나의 타입이 어긋나도 목록 전체 디코딩은 실패하지 않는다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Loose<T> {
    Valid(T),
    Invalid(Value),
}

impl<T> Loose<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<T> From<T> for Loose<T> {
    fn from(value: T) -> Self {
        Self::Valid(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Loose<ThreadId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Loose<Vec<Loose<Comment>>>>,
    /// 파일 단위 스레드일 때만 존재한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_thread_context: Option<Loose<PullRequestThreadContext>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Loose<CommentId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Loose<Author>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Loose<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Loose<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestThreadContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_criteria: Option<Loose<TrackingCriteria>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingCriteria {
    /// 원본 표기는 앞에 공백 한 칸이 붙어 있다(`" path"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_file_path: Option<Loose<String>>,
}

/// 스레드 열림/닫힘 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    Active,
    Closed,
}

impl ThreadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

/// 새 스레드 생성 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub content: String,
    pub status: ThreadStatus,
    pub file: Option<NewThreadFile>,
}

/// 파일 단위 스레드를 만들 때의 위치 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThreadFile {
    pub path: String,
    /// false면 삭제/무변경 파일이므로 왼쪽(이전) 버전에 단다.
    pub lines_added: bool,
}
