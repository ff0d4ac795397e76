//! 메트릭 코멘트 제목 생성/해석.

use crate::application::comments::keys;
use crate::application::ports::{NumberFormatter, TextResources};

/// 템플릿 분리용 자리표시자. 실제 코멘트 본문에는 나타나지 않는다.
const PLACEHOLDER: &str = "\u{0}";

pub(crate) struct MetricsTitle<'a> {
    resources: &'a dyn TextResources,
    formatter: &'a dyn NumberFormatter,
}

impl<'a> MetricsTitle<'a> {
    pub fn new(resources: &'a dyn TextResources, formatter: &'a dyn NumberFormatter) -> Self {
        Self {
            resources,
            formatter,
        }
    }

    pub fn render(&self, iteration: u64) -> String {
        let formatted = self.formatter.format(iteration);
        self.resources.loc(keys::COMMENT_TITLE, &[&formatted])
    }

    /// 제목 줄에서 iteration을 읽는다.
    /// 다시 렌더링한 결과가 입력과 정확히 같을 때만 인정한다.
    pub fn parse(&self, line: &str) -> Option<u64> {
        let template = self.resources.loc(keys::COMMENT_TITLE, &[PLACEHOLDER]);
        let (prefix, suffix) = template.split_once(PLACEHOLDER)?;
        let number = line.strip_prefix(prefix)?.strip_suffix(suffix)?;
        let iteration = self.formatter.parse(number)?;
        (self.render(iteration) == line).then_some(iteration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::format::GroupedNumberFormatter;
    use crate::infrastructure::resources::EmbeddedResources;

    fn parse(line: &str) -> Option<u64> {
        let resources = EmbeddedResources::default();
        let formatter = GroupedNumberFormatter::default();
        MetricsTitle::new(&resources, &formatter).parse(line)
    }

    #[test]
    fn renders_grouped_iteration() {
        let resources = EmbeddedResources::default();
        let formatter = GroupedNumberFormatter::default();
        let title = MetricsTitle::new(&resources, &formatter);
        assert_eq!(title.render(1_000_000), "# Metrics for iteration 1,000,000");
    }

    #[test]
    fn parses_plain_and_grouped_iterations() {
        assert_eq!(parse("# Metrics for iteration 1"), Some(1));
        assert_eq!(parse("# Metrics for iteration 100"), Some(100));
        assert_eq!(parse("# Metrics for iteration 1,000,000"), Some(1_000_000));
    }

    #[test]
    fn rejects_lines_that_do_not_render_back() {
        assert_eq!(parse("# Metrics for iteration 1,00"), None);
        assert_eq!(parse("# Metrics for iteration 1000"), None);
        assert_eq!(parse("# Metrics for iteration one"), None);
        assert_eq!(parse("# Metrics for iteration 1 (draft)"), None);
        assert_eq!(parse("Metrics for iteration 1"), None);
        assert_eq!(parse(""), None);
    }
}
