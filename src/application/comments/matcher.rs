//! 메트릭 코멘트/무시 파일 스레드 매칭 단계.

use crate::application::comments::scanner::{ScannedThread, ThreadScanner};
use crate::domain::comment_data::PullRequestCommentsData;
use crate::domain::error::CommentDataError;
use crate::domain::policy::remove_path;
use crate::domain::thread::CommentThread;

pub(crate) struct CommentMatcher<'a> {
    pub scanner: ThreadScanner<'a>,
}

impl CommentMatcher<'_> {
    /// 스레드를 한 번 순회해 매칭 결과를 만든다.
    /// 메트릭 스레드는 목록의 뒤쪽이 앞쪽을 덮어쓴다.
    pub fn match_threads(
        &self,
        iteration: u64,
        threads: &[CommentThread],
        ignored_files_with_lines_added: Vec<String>,
        ignored_files_without_lines_added: Vec<String>,
    ) -> Result<PullRequestCommentsData, CommentDataError> {
        let scanned = self.scanner.scan(threads, |path| {
            ignored_files_with_lines_added.iter().any(|p| p == path)
                || ignored_files_without_lines_added.iter().any(|p| p == path)
        })?;

        let mut data = PullRequestCommentsData::new(
            ignored_files_with_lines_added,
            ignored_files_without_lines_added,
        );

        for entry in scanned {
            match entry {
                ScannedThread::Metrics {
                    thread_id,
                    comment_id,
                    iteration: found,
                } => {
                    data.thread_id = Some(thread_id);
                    data.comment_id = Some(comment_id);
                    data.is_present = found == iteration;
                }
                ScannedThread::IgnoredFile { path } => {
                    if !remove_path(&mut data.ignored_files_with_lines_added, &path) {
                        remove_path(&mut data.ignored_files_without_lines_added, &path);
                    }
                }
                ScannedThread::Unclassified => {}
            }
        }

        Ok(data)
    }
}
