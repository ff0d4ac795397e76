//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod localization;
mod metrics_loader;
mod reporter;
mod thread_gateway_factory;

pub use config_repository::JsonConfigRepository;
pub use localization::EmbeddedLocalization;
pub use metrics_loader::JsonCodeMetricsLoader;
pub use reporter::ConsoleReporter;
pub use thread_gateway_factory::ThreadGatewayFactoryAdapter;
