//! 코드 크기/테스트 지표 값 객체.

use serde::{Deserialize, Serialize};

/// 추가된 코드 라인 수 집계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub product_code: u64,
    pub test_code: u64,
    pub ignored_code: u64,
}

impl Metrics {
    pub fn new(product_code: u64, test_code: u64, ignored_code: u64) -> Self {
        Self {
            product_code,
            test_code,
            ignored_code,
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.product_code + self.test_code
    }

    pub fn total(&self) -> u64 {
        self.subtotal() + self.ignored_code
    }
}

/// 외부 크기 계산기가 만든 결과 스냅샷.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    pub is_small: bool,
    /// `None`이면 테스트 기준이 설정되지 않은 상태.
    #[serde(default)]
    pub is_sufficiently_tested: Option<bool>,
    pub metrics: Metrics,
    #[serde(default)]
    pub ignored_files_with_lines_added: Vec<String>,
    #[serde(default)]
    pub ignored_files_without_lines_added: Vec<String>,
}
