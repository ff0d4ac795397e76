//! `prmetrics config` 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 탐색 경로, 로드된 파일, 실제 적용값을 pretty JSON으로 돌려준다.
    pub fn execute(&self) -> Result<String> {
        self.config_repo
            .inspect_pretty_json()
            .context("failed to inspect prmetrics config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::Config;

    struct Broken;

    impl ConfigRepository for Broken {
        fn load(&self) -> Result<Config> {
            anyhow::bail!("unreadable")
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            anyhow::bail!("unreadable")
        }
    }

    #[test]
    fn wraps_repository_error() {
        let err = InspectConfigUseCase {
            config_repo: &Broken,
        }
        .execute()
        .unwrap_err();

        assert_eq!(format!("{err:#}"), "failed to inspect prmetrics config: unreadable");
    }
}
