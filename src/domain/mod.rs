//! Domain layer
//! 코멘트 스레드/지표 엔티티와 도메인 정책을 외부 의존성 없이 표현한다.

pub mod comment_data;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod run;
pub mod target;
pub mod thread;
