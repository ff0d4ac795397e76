//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, HostConfig};
use crate::domain::metrics::{CodeMetrics, Metrics};
use crate::domain::target::PullRequestTarget;
use crate::domain::thread::{CommentId, CommentThread, NewThread, ThreadId, ThreadStatus};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// Pull Request 코멘트 스레드 연동 추상화 포트.
#[async_trait]
pub trait ThreadGateway: Send + Sync {
    async fn fetch_current_iteration(&self) -> Result<u64>;
    async fn get_comment_threads(&self) -> Result<Vec<CommentThread>>;
    async fn create_thread(&self, thread: &NewThread) -> Result<ThreadId>;
    async fn update_comment(
        &self,
        thread_id: ThreadId,
        comment_id: CommentId,
        content: &str,
    ) -> Result<()>;
    async fn update_thread_status(&self, thread_id: ThreadId, status: ThreadStatus) -> Result<()>;
}

/// 대상/설정에 맞는 스레드 게이트웨이를 생성하는 팩토리 포트.
pub trait ThreadGatewayFactory: Send + Sync {
    fn remote(
        &self,
        target: &PullRequestTarget,
        host_cfg: Option<&HostConfig>,
        api_version: &str,
    ) -> Result<Box<dyn ThreadGateway>>;
    fn from_file(&self, path: &Path) -> Box<dyn ThreadGateway>;
}

/// 외부 크기/커버리지 계산 결과 포트.
pub trait CodeMetricsSource: Send + Sync {
    fn is_small(&self) -> bool;
    fn is_sufficiently_tested(&self) -> Option<bool>;
    fn metrics(&self) -> Metrics;
    fn ignored_files_with_lines_added(&self) -> Vec<String>;
    fn ignored_files_without_lines_added(&self) -> Vec<String>;
}

impl CodeMetricsSource for CodeMetrics {
    fn is_small(&self) -> bool {
        self.is_small
    }

    fn is_sufficiently_tested(&self) -> Option<bool> {
        self.is_sufficiently_tested
    }

    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn ignored_files_with_lines_added(&self) -> Vec<String> {
        self.ignored_files_with_lines_added.clone()
    }

    fn ignored_files_without_lines_added(&self) -> Vec<String> {
        self.ignored_files_without_lines_added.clone()
    }
}

/// 실행 파라미터 포트.
pub trait ParametersSource: Send + Sync {
    fn base_size(&self) -> u64;
}

/// 지표 JSON 파일을 읽어오는 포트.
pub trait CodeMetricsLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<CodeMetrics>;
}

/// 지역화 문자열 조회 포트. `%s` 자리에 인자를 순서대로 넣는다.
pub trait TextResources: Send + Sync {
    fn loc(&self, key: &str, args: &[&str]) -> String;
}

/// 천 단위 구분 정수 포맷 포트.
pub trait NumberFormatter: Send + Sync {
    fn format(&self, value: u64) -> String;
    /// `format`의 역변환. 구분자 위치가 어긋나도 숫자만 읽으므로 호출자가 재검증한다.
    fn parse(&self, text: &str) -> Option<u64>;
}

/// 설정값으로 문자열 리소스/숫자 포맷터를 만드는 포트.
pub trait LocalizationFactory: Send + Sync {
    fn resources(&self, overrides: Option<&Path>) -> Result<Box<dyn TextResources>>;
    fn formatter(&self, thousands_separator: &str) -> Box<dyn NumberFormatter>;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
