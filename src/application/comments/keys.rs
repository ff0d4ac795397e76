//! 메트릭 코멘트가 사용하는 지역화 문자열 키.

pub const COMMENT_TITLE: &str = "comments.title";
pub const COMMENT_FOOTER: &str = "comments.footer";
pub const FILE_IGNORED: &str = "comments.fileIgnored";
pub const LARGE_PULL_REQUEST: &str = "comments.largePullRequest";
pub const SMALL_PULL_REQUEST: &str = "comments.smallPullRequest";
pub const TESTS_INSUFFICIENT: &str = "comments.testsInsufficient";
pub const TESTS_SUFFICIENT: &str = "comments.testsSufficient";
pub const TABLE_LINES: &str = "comments.table.lines";
pub const TABLE_PRODUCT_CODE: &str = "comments.table.productCode";
pub const TABLE_TEST_CODE: &str = "comments.table.testCode";
pub const TABLE_SUBTOTAL: &str = "comments.table.subtotal";
pub const TABLE_IGNORED_CODE: &str = "comments.table.ignoredCode";
pub const TABLE_TOTAL: &str = "comments.table.total";
