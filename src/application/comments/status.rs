//! 메트릭 스레드 상태 분류.

use crate::domain::thread::ThreadStatus;

/// 작고 충분히 테스트된 PR만 닫힌 상태로 둔다.
pub(crate) fn metrics_comment_status(
    is_small: bool,
    is_sufficiently_tested: Option<bool>,
) -> ThreadStatus {
    if is_small && is_sufficiently_tested == Some(true) {
        ThreadStatus::Closed
    } else {
        ThreadStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_only_when_small_and_tested() {
        assert_eq!(metrics_comment_status(true, Some(true)), ThreadStatus::Closed);
    }

    #[test]
    fn active_for_every_other_combination() {
        for (is_small, tested) in [
            (true, Some(false)),
            (true, None),
            (false, Some(true)),
            (false, Some(false)),
            (false, None),
        ] {
            assert_eq!(
                metrics_comment_status(is_small, tested),
                ThreadStatus::Active,
                "is_small={is_small} tested={tested:?}"
            );
        }
    }
}
