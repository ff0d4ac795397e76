//! 천 단위 구분 정수 포맷터.

use crate::application::ports::NumberFormatter;

/// 실행 환경 locale과 무관하게 고정 구분자로 세 자리씩 묶는다.
#[derive(Debug, Clone)]
pub struct GroupedNumberFormatter {
    separator: String,
}

impl Default for GroupedNumberFormatter {
    fn default() -> Self {
        Self::new(",")
    }
}

impl GroupedNumberFormatter {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl NumberFormatter for GroupedNumberFormatter {
    fn format(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * self.separator.len());
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                out.push_str(&self.separator);
            }
            out.push(digit);
        }
        out
    }

    fn parse(&self, text: &str) -> Option<u64> {
        let digits = if self.separator.is_empty() {
            text.to_string()
        } else {
            text.replace(self.separator.as_str(), "")
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}
