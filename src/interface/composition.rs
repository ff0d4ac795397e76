//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::update_comments::UpdateCommentsUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, EmbeddedLocalization, JsonCodeMetricsLoader, JsonConfigRepository,
    ThreadGatewayFactoryAdapter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    gateway_factory: ThreadGatewayFactoryAdapter,
    metrics_loader: JsonCodeMetricsLoader,
    localization: EmbeddedLocalization,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            gateway_factory: ThreadGatewayFactoryAdapter,
            metrics_loader: JsonCodeMetricsLoader,
            localization: EmbeddedLocalization,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 코멘트 갱신 유스케이스를 생성한다.
    pub fn update_usecase(&self) -> UpdateCommentsUseCase<'_> {
        UpdateCommentsUseCase {
            config_repo: &self.config_repo,
            gateway_factory: &self.gateway_factory,
            metrics_loader: &self.metrics_loader,
            localization: &self.localization,
            reporter: &self.reporter,
        }
    }
}
