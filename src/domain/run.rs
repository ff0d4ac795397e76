//! 실행 옵션 값 객체.

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Azure Repos Pull Request URL
    pub url: Option<String>,
    /// 원격 API 대신 읽을 스레드 JSON 파일
    pub threads_file: Option<PathBuf>,
    /// 외부 크기 계산기가 만든 지표 JSON 파일
    pub metrics_file: PathBuf,
    pub iteration: Option<u64>,
    pub base_size: Option<u64>,
    pub dry_run: bool,
}
