//! 코멘트 스레드 검증/분류 단계.
//!
//! 느슨한 원본 스레드를 왼쪽→오른쪽, 바깥→안쪽 순서로 검사하고
//! 처음 만난 잘못된 필드에서 즉시 실패한다.

use tracing::trace;

use crate::application::comments::title::MetricsTitle;
use crate::domain::error::CommentDataError;
use crate::domain::policy::{first_line, is_system_author, normalize_file_path};
use crate::domain::thread::{
    Comment, CommentId, CommentThread, Loose, PullRequestThreadContext, ThreadId,
};

/// 검증을 통과한 스레드의 분류 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScannedThread {
    /// 스레드 안의 마지막 메트릭 제목 코멘트.
    Metrics {
        thread_id: ThreadId,
        comment_id: CommentId,
        iteration: u64,
    },
    /// 시스템 계정의 무시 표시가 유지되고 있는 파일 스레드.
    IgnoredFile { path: String },
    Unclassified,
}

pub(crate) struct ThreadScanner<'a> {
    pub system_author: &'a str,
    pub title: &'a MetricsTitle<'a>,
    pub ignored_marker: &'a str,
}

impl ThreadScanner<'_> {
    /// 모든 스레드를 입력 순서대로 분류한다.
    /// `is_candidate`가 false인 파일 스레드는 코멘트를 검사하지 않는다.
    pub fn scan(
        &self,
        threads: &[CommentThread],
        is_candidate: impl Fn(&str) -> bool,
    ) -> Result<Vec<ScannedThread>, CommentDataError> {
        threads
            .iter()
            .enumerate()
            .map(|(index, thread)| self.scan_thread(index, thread, &is_candidate))
            .collect()
    }

    fn scan_thread(
        &self,
        index: usize,
        thread: &CommentThread,
        is_candidate: &dyn Fn(&str) -> bool,
    ) -> Result<ScannedThread, CommentDataError> {
        let base = format!("commentThread[{index}]");
        match &thread.pull_request_thread_context {
            Some(context) => self.scan_file_thread(&base, thread, context, is_candidate),
            None => self.scan_metrics_thread(&base, thread),
        }
    }

    fn scan_metrics_thread(
        &self,
        base: &str,
        thread: &CommentThread,
    ) -> Result<ScannedThread, CommentDataError> {
        trace!("* PullRequestComments.get_metrics_comment_data()");

        let thread_id = *required(thread.id.as_ref(), || format!("{base}.id"))?;
        let comments = required_comments(base, thread)?;

        let mut matched = None;
        for (index, comment) in comments.iter().enumerate() {
            let comment_path = format!("{base}.comments[{index}]");
            let comment = required(Some(comment), || comment_path.clone())?;
            let display_name = author_name(&comment_path, comment)?;
            if !is_system_author(display_name, self.system_author) {
                continue;
            }

            let content = required(comment.content.as_ref(), || {
                format!("{comment_path}.content")
            })?;
            let Some(iteration) = self.title.parse(first_line(content)) else {
                continue;
            };

            let comment_id = *required(comment.id.as_ref(), || format!("{comment_path}.id"))?;
            matched = Some((comment_id, iteration));
        }

        Ok(match matched {
            Some((comment_id, iteration)) => ScannedThread::Metrics {
                thread_id,
                comment_id,
                iteration,
            },
            None => ScannedThread::Unclassified,
        })
    }

    fn scan_file_thread(
        &self,
        base: &str,
        thread: &CommentThread,
        context: &Loose<PullRequestThreadContext>,
        is_candidate: &dyn Fn(&str) -> bool,
    ) -> Result<ScannedThread, CommentDataError> {
        trace!("* PullRequestComments.get_ignored_comment_data()");

        let context = required(Some(context), || {
            format!("{base}.pullRequestThreadContext")
        })?;
        let criteria_path = format!("{base}.pullRequestThreadContext.trackingCriteria");
        let criteria = required(context.tracking_criteria.as_ref(), || criteria_path.clone())?;
        let path_field = format!("{criteria_path}.origFilePath");
        let raw_path = required(criteria.orig_file_path.as_ref(), || path_field.clone())?;

        let path = normalize_file_path(raw_path);
        if path.is_empty() {
            return Err(CommentDataError::invalid_length(path_field, raw_path));
        }
        if !is_candidate(path) {
            return Ok(ScannedThread::Unclassified);
        }

        // 마지막 코멘트가 다른 사람이면 무시 표시가 더 이상 유효하지 않다.
        let comments = required_comments(base, thread)?;
        let index = comments.len() - 1;
        let comment_path = format!("{base}.comments[{index}]");
        let last = required(Some(&comments[index]), || comment_path.clone())?;

        let display_name = author_name(&comment_path, last)?;
        if !is_system_author(display_name, self.system_author) {
            return Ok(ScannedThread::Unclassified);
        }

        let content = required(last.content.as_ref(), || format!("{comment_path}.content"))?;
        if content != self.ignored_marker {
            return Ok(ScannedThread::Unclassified);
        }

        Ok(ScannedThread::IgnoredFile {
            path: path.to_string(),
        })
    }
}

/// 없거나 `null`이면 `undefined`, 타입이 어긋나면 원본 값으로 실패한다.
fn required<'v, T>(
    value: Option<&'v Loose<T>>,
    path: impl FnOnce() -> String,
) -> Result<&'v T, CommentDataError> {
    match value {
        Some(Loose::Valid(value)) => Ok(value),
        Some(Loose::Invalid(raw)) => Err(CommentDataError::wrong_shape(path(), raw)),
        None => Err(CommentDataError::missing(path())),
    }
}

fn required_comments<'t>(
    base: &str,
    thread: &'t CommentThread,
) -> Result<&'t [Loose<Comment>], CommentDataError> {
    let comments = required(thread.comments.as_ref(), || format!("{base}.comments"))?;
    if comments.is_empty() {
        return Err(CommentDataError::missing(format!("{base}.comments[0]")));
    }
    Ok(comments)
}

fn author_name<'c>(comment_path: &str, comment: &'c Comment) -> Result<&'c str, CommentDataError> {
    let author = required(comment.author.as_ref(), || format!("{comment_path}.author"))?;
    required(author.display_name.as_ref(), || {
        format!("{comment_path}.author.displayName")
    })
    .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::application::comments::fixtures::{IGNORED_MARKER, SYSTEM_AUTHOR, threads};
    use crate::infrastructure::format::GroupedNumberFormatter;
    use crate::infrastructure::resources::EmbeddedResources;

    fn scan(payload: Value, candidates: &[&str]) -> Result<Vec<ScannedThread>, CommentDataError> {
        let resources = EmbeddedResources::default();
        let formatter = GroupedNumberFormatter::default();
        let title = MetricsTitle::new(&resources, &formatter);
        let scanner = ThreadScanner {
            system_author: SYSTEM_AUTHOR,
            title: &title,
            ignored_marker: IGNORED_MARKER,
        };
        scanner.scan(&threads(payload), |path| candidates.contains(&path))
    }

    #[test]
    fn classifies_metrics_thread_by_last_title_comment() {
        let scanned = scan(
            json!([{
                "comments": [
                    { "author": { "displayName": SYSTEM_AUTHOR }, "content": "# Metrics for iteration 1\n", "id": 1 },
                    { "author": { "displayName": "Reviewer" }, "content": "# Metrics for iteration 9", "id": 2 },
                    { "author": { "displayName": SYSTEM_AUTHOR }, "content": "# Metrics for iteration 2\n", "id": 3 }
                ],
                "id": 20
            }]),
            &[],
        )
        .unwrap();

        assert_eq!(
            scanned,
            vec![ScannedThread::Metrics {
                thread_id: 20,
                comment_id: 3,
                iteration: 2
            }]
        );
    }

    #[test]
    fn non_system_comment_may_omit_content() {
        let scanned = scan(
            json!([{ "comments": [{ "author": { "displayName": "Name" }, "id": 1 }], "id": 2 }]),
            &[],
        )
        .unwrap();
        assert_eq!(scanned, vec![ScannedThread::Unclassified]);
    }

    #[test]
    fn classifies_ignored_file_marker() {
        let scanned = scan(
            json!([{
                "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " file2.ts" } },
                "comments": [{ "author": { "displayName": SYSTEM_AUTHOR }, "content": IGNORED_MARKER }]
            }]),
            &["file2.ts"],
        )
        .unwrap();
        assert_eq!(
            scanned,
            vec![ScannedThread::IgnoredFile {
                path: "file2.ts".to_string()
            }]
        );
    }

    #[test]
    fn later_human_reply_invalidates_marker() {
        let scanned = scan(
            json!([{
                "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " file2.ts" } },
                "comments": [
                    { "author": { "displayName": SYSTEM_AUTHOR }, "content": IGNORED_MARKER },
                    { "author": { "displayName": "Reviewer" }, "content": "Please review this." }
                ]
            }]),
            &["file2.ts"],
        )
        .unwrap();
        assert_eq!(scanned, vec![ScannedThread::Unclassified]);
    }

    #[test]
    fn file_thread_is_never_a_metrics_thread() {
        let scanned = scan(
            json!([{
                "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " file.ts" } },
                "comments": [{ "author": { "displayName": SYSTEM_AUTHOR }, "content": "# Metrics for iteration 1", "id": 1 }],
                "id": 1
            }]),
            &["file.ts"],
        )
        .unwrap();
        assert_eq!(scanned, vec![ScannedThread::Unclassified]);
    }

    #[test]
    fn non_candidate_file_thread_skips_comment_validation() {
        let scanned = scan(
            json!([{ "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " other.ts" } } }]),
            &["file.ts"],
        )
        .unwrap();
        assert_eq!(scanned, vec![ScannedThread::Unclassified]);
    }

    #[test]
    fn whitespace_path_is_invalid_length() {
        let err = scan(
            json!([{ "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " " } } }]),
            &[],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CommentDataError::InvalidLength {
                path: "commentThread[0].pullRequestThreadContext.trackingCriteria.origFilePath"
                    .to_string(),
                value: " ".to_string(),
                length: 1,
            }
        );
    }

    #[test]
    fn stops_at_first_invalid_thread() {
        let err = scan(json!([{}, { "id": 1 }]), &[]).unwrap_err();
        assert_eq!(err.path(), "commentThread[0].id");
    }

    #[test]
    fn wrong_typed_fields_report_literal_value() {
        let cases = [
            (
                json!([{ "id": "abc", "comments": [] }]),
                "commentThread[0].id",
                "abc",
            ),
            (
                json!([{ "id": 1, "comments": { "0": {} } }]),
                "commentThread[0].comments",
                r#"{"0":{}}"#,
            ),
            (
                json!([{ "id": 1, "comments": [7] }]),
                "commentThread[0].comments[0]",
                "7",
            ),
            (
                json!([{ "id": 1, "comments": [{ "author": "someone" }] }]),
                "commentThread[0].comments[0].author",
                "someone",
            ),
            (
                json!([{ "id": 1, "comments": [{ "author": { "displayName": 5 } }] }]),
                "commentThread[0].comments[0].author.displayName",
                "5",
            ),
            (
                json!([{ "id": 1, "comments": [{ "author": { "displayName": SYSTEM_AUTHOR }, "content": false }] }]),
                "commentThread[0].comments[0].content",
                "false",
            ),
            (
                json!([{ "id": 1, "comments": [{ "author": { "displayName": SYSTEM_AUTHOR }, "content": "# Metrics for iteration 1", "id": -3 }] }]),
                "commentThread[0].comments[0].id",
                "-3",
            ),
            (
                json!([{ "pullRequestThreadContext": "file.ts" }]),
                "commentThread[0].pullRequestThreadContext",
                "file.ts",
            ),
            (
                json!([{ "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": 12 } } }]),
                "commentThread[0].pullRequestThreadContext.trackingCriteria.origFilePath",
                "12",
            ),
        ];

        for (payload, path, value) in cases {
            assert_eq!(
                scan(payload, &["file.ts"]).unwrap_err(),
                CommentDataError::MissingField {
                    path: path.to_string(),
                    value: value.to_string(),
                },
                "{path}"
            );
        }
    }

    #[test]
    fn null_comment_entry_reads_as_undefined() {
        let err = scan(json!([{ "id": 1, "comments": [null] }]), &[]).unwrap_err();
        assert_eq!(err, CommentDataError::missing("commentThread[0].comments[0]"));
    }

    #[test]
    fn trailing_whitespace_is_part_of_the_path() {
        let scanned = scan(
            json!([{
                "pullRequestThreadContext": { "trackingCriteria": { "origFilePath": " file.ts " } },
                "comments": [{ "author": { "displayName": SYSTEM_AUTHOR }, "content": IGNORED_MARKER }]
            }]),
            &["file.ts"],
        )
        .unwrap();
        assert_eq!(scanned, vec![ScannedThread::Unclassified]);
    }
}
