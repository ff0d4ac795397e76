//! 메트릭 코멘트 본문 렌더링 단계.

use tracing::trace;

use crate::application::comments::keys;
use crate::application::comments::title::MetricsTitle;
use crate::application::ports::{CodeMetricsSource, NumberFormatter, TextResources};

const EOL: &str = "\n";

pub(crate) struct CommentRenderer<'a> {
    pub resources: &'a dyn TextResources,
    pub formatter: &'a dyn NumberFormatter,
    pub title: &'a MetricsTitle<'a>,
}

impl CommentRenderer<'_> {
    /// 제목, 크기/테스트 상태, 라인 수 표, 푸터 순으로 본문을 만든다.
    pub fn render(
        &self,
        iteration: u64,
        code_metrics: &dyn CodeMetricsSource,
        base_size: u64,
    ) -> String {
        let mut out = String::new();
        out.push_str(&self.title.render(iteration));
        out.push_str(EOL);
        self.add_size_status(&mut out, code_metrics.is_small(), base_size);
        self.add_test_status(&mut out, code_metrics.is_sufficiently_tested());

        let metrics = code_metrics.metrics();
        out.push_str(&format!("||{}{EOL}", self.loc(keys::TABLE_LINES)));
        out.push_str(&format!("-|-:{EOL}"));
        self.add_metrics_row(&mut out, keys::TABLE_PRODUCT_CODE, metrics.product_code, false);
        self.add_metrics_row(&mut out, keys::TABLE_TEST_CODE, metrics.test_code, false);
        self.add_metrics_row(&mut out, keys::TABLE_SUBTOTAL, metrics.subtotal(), true);
        self.add_metrics_row(&mut out, keys::TABLE_IGNORED_CODE, metrics.ignored_code, false);
        self.add_metrics_row(&mut out, keys::TABLE_TOTAL, metrics.total(), true);

        out.push_str(EOL);
        out.push_str(&self.loc(keys::COMMENT_FOOTER));
        out
    }

    fn add_size_status(&self, out: &mut String, is_small: bool, base_size: u64) {
        trace!("* PullRequestComments.add_comment_size_status()");

        if is_small {
            out.push_str(&self.loc(keys::SMALL_PULL_REQUEST));
        } else {
            let formatted = self.formatter.format(base_size);
            out.push_str(&self.resources.loc(keys::LARGE_PULL_REQUEST, &[&formatted]));
        }
        out.push_str(EOL);
    }

    fn add_test_status(&self, out: &mut String, is_sufficiently_tested: Option<bool>) {
        trace!("* PullRequestComments.add_comment_test_status()");

        let key = match is_sufficiently_tested {
            Some(true) => keys::TESTS_SUFFICIENT,
            Some(false) => keys::TESTS_INSUFFICIENT,
            None => return,
        };
        out.push_str(&self.loc(key));
        out.push_str(EOL);
    }

    fn add_metrics_row(&self, out: &mut String, key: &str, value: u64, highlight: bool) {
        trace!("* PullRequestComments.add_comment_metrics()");

        let label = self.loc(key);
        let value = self.formatter.format(value);
        if highlight {
            out.push_str(&format!("**{label}**|**{value}**{EOL}"));
        } else {
            out.push_str(&format!("{label}|{value}{EOL}"));
        }
    }

    fn loc(&self, key: &str) -> String {
        self.resources.loc(key, &[])
    }
}
