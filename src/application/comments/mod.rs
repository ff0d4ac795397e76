//! Pull Request 메트릭 코멘트 코어.
//!
//! 기존 스레드에서 메트릭 코멘트/무시 파일 표시를 찾고,
//! 메트릭 코멘트 본문과 스레드 상태를 결정한다.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod keys;
mod matcher;
mod renderer;
mod scanner;
mod status;
mod title;

use anyhow::Result;
use tracing::trace;

use crate::application::ports::{
    CodeMetricsSource, NumberFormatter, ParametersSource, TextResources, ThreadGateway,
};
use crate::domain::comment_data::PullRequestCommentsData;
use crate::domain::thread::ThreadStatus;

use matcher::CommentMatcher;
use renderer::CommentRenderer;
use scanner::ThreadScanner;
use title::MetricsTitle;

/// 실행 파라미터 값 객체.
#[derive(Debug, Clone, Copy)]
pub struct Parameters {
    pub base_size: u64,
}

impl ParametersSource for Parameters {
    fn base_size(&self) -> u64 {
        self.base_size
    }
}

/// 메트릭 코멘트 관련 연산의 진입점.
pub struct PullRequestComments<'a> {
    pub gateway: &'a dyn ThreadGateway,
    pub code_metrics: &'a dyn CodeMetricsSource,
    pub parameters: &'a dyn ParametersSource,
    pub resources: &'a dyn TextResources,
    pub formatter: &'a dyn NumberFormatter,
    /// 시스템 작성자 표시 이름 접두어
    pub system_author: &'a str,
}

impl<'a> PullRequestComments<'a> {
    /// 파일 무시 표시 코멘트 본문.
    pub fn ignored_comment(&self) -> String {
        trace!("* PullRequestComments.ignored_comment");
        self.resources.loc(keys::FILE_IGNORED, &[])
    }

    /// 기존 스레드를 조회해 iteration에 대한 매칭 결과를 만든다.
    /// 검증 오류는 `CommentDataError` 그대로 전파된다.
    pub async fn get_comment_data(&self, iteration: u64) -> Result<PullRequestCommentsData> {
        trace!("* PullRequestComments.get_comment_data()");

        let threads = self.gateway.get_comment_threads().await?;
        let title = MetricsTitle::new(self.resources, self.formatter);
        let ignored_marker = self.ignored_comment();
        let matcher = CommentMatcher {
            scanner: ThreadScanner {
                system_author: self.system_author,
                title: &title,
                ignored_marker: &ignored_marker,
            },
        };

        let data = matcher.match_threads(
            iteration,
            &threads,
            self.code_metrics.ignored_files_with_lines_added(),
            self.code_metrics.ignored_files_without_lines_added(),
        )?;
        Ok(data)
    }

    /// 메트릭 코멘트 본문을 렌더링한다.
    pub fn get_metrics_comment(&self, iteration: u64) -> String {
        trace!("* PullRequestComments.get_metrics_comment()");

        let title = MetricsTitle::new(self.resources, self.formatter);
        let renderer = CommentRenderer {
            resources: self.resources,
            formatter: self.formatter,
            title: &title,
        };
        renderer.render(iteration, self.code_metrics, self.parameters.base_size())
    }

    /// 메트릭 스레드의 목표 상태.
    pub fn get_metrics_comment_status(&self) -> ThreadStatus {
        trace!("* PullRequestComments.get_metrics_comment_status()");
        status::metrics_comment_status(
            self.code_metrics.is_small(),
            self.code_metrics.is_sufficiently_tested(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::comments::fixtures::{
        IGNORED_MARKER, StaticThreads, SYSTEM_AUTHOR, code_metrics, threads,
    };
    use crate::domain::error::CommentDataError;
    use crate::domain::metrics::CodeMetrics;
    use crate::infrastructure::format::GroupedNumberFormatter;
    use crate::infrastructure::resources::EmbeddedResources;

    struct Harness {
        gateway: StaticThreads,
        code_metrics: CodeMetrics,
        parameters: Parameters,
        resources: EmbeddedResources,
        formatter: GroupedNumberFormatter,
    }

    impl Harness {
        fn new(payload: serde_json::Value) -> Self {
            Self {
                gateway: StaticThreads(threads(payload)),
                code_metrics: code_metrics(),
                parameters: Parameters { base_size: 250 },
                resources: EmbeddedResources::default(),
                formatter: GroupedNumberFormatter::default(),
            }
        }

        fn comments(&self) -> PullRequestComments<'_> {
            PullRequestComments {
                gateway: &self.gateway,
                code_metrics: &self.code_metrics,
                parameters: &self.parameters,
                resources: &self.resources,
                formatter: &self.formatter,
                system_author: SYSTEM_AUTHOR,
            }
        }
    }

    #[test]
    fn ignored_comment_is_marker_text() {
        let harness = Harness::new(json!([]));
        assert_eq!(harness.comments().ignored_comment(), IGNORED_MARKER);
    }

    #[tokio::test]
    async fn get_comment_data_uses_fetched_threads() {
        let mut harness = Harness::new(json!([
            {
                "comments": [{
                    "author": { "displayName": SYSTEM_AUTHOR },
                    "content": "# Metrics for iteration 1\n",
                    "id": 10
                }],
                "id": 20
            },
            {
                "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " file2.ts" } },
                "comments": [{ "author": { "displayName": SYSTEM_AUTHOR }, "content": IGNORED_MARKER }]
            }
        ]));
        harness.code_metrics.ignored_files_with_lines_added =
            vec!["file1.ts".to_string(), "file2.ts".to_string()];

        let data = harness.comments().get_comment_data(1).await.unwrap();

        assert!(data.is_present);
        assert_eq!(data.existing_comment(), Some((20, 10)));
        assert_eq!(data.ignored_files_with_lines_added, vec!["file1.ts"]);
    }

    #[tokio::test]
    async fn get_comment_data_without_metrics_thread_returns_no_ids() {
        let harness = Harness::new(json!([{
            "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " file.ts" } },
            "comments": [{
                "author": { "displayName": SYSTEM_AUTHOR },
                "content": "# Metrics for iteration 1",
                "id": 1
            }],
            "id": 1
        }]));

        let data = harness.comments().get_comment_data(1).await.unwrap();

        assert!(!data.is_present);
        assert_eq!(data.comment_id, None);
        assert_eq!(data.thread_id, None);
    }

    #[tokio::test]
    async fn get_comment_data_propagates_validation_error() {
        let harness = Harness::new(json!([{ "comments": [{ "author": {} }], "id": 1 }]));

        let err = harness.comments().get_comment_data(1).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<CommentDataError>(),
            Some(&CommentDataError::missing(
                "commentThread[0].comments[0].author.displayName"
            ))
        );
    }

    #[tokio::test]
    async fn get_comment_data_reports_wrong_typed_display_name() {
        let harness = Harness::new(json!([{
            "comments": [{ "author": { "displayName": 5 }, "content": "x", "id": 1 }],
            "id": 1
        }]));

        let err = harness.comments().get_comment_data(1).await.unwrap_err();

        assert_eq!(
            err.downcast_ref::<CommentDataError>(),
            Some(&CommentDataError::MissingField {
                path: "commentThread[0].comments[0].author.displayName".to_string(),
                value: "5".to_string(),
            })
        );
    }

    #[test]
    fn metrics_comment_uses_base_size_parameter() {
        let mut harness = Harness::new(json!([]));
        harness.code_metrics.is_small = false;
        harness.parameters = Parameters { base_size: 1000 };

        let body = harness.comments().get_metrics_comment(3);

        assert!(body.starts_with("# Metrics for iteration 3\n❌ **Try to keep pull requests smaller than 1,000 lines"));
    }

    #[test]
    fn metrics_comment_status_follows_code_metrics() {
        let mut harness = Harness::new(json!([]));
        assert_eq!(harness.comments().get_metrics_comment_status(), ThreadStatus::Closed);

        harness.code_metrics.is_sufficiently_tested = None;
        assert_eq!(harness.comments().get_metrics_comment_status(), ThreadStatus::Active);
    }
}
