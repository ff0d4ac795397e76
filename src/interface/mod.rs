//! Interface layer
//! 명령행 입력과 의존성 조립을 담당한다.

pub mod cli;
pub mod composition;
