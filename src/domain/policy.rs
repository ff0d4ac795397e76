//! 도메인 정책(시스템 작성자 판별, 제목 줄 추출, 파일 경로 정규화).

/// Azure Pipelines 빌드 서비스 계정의 표시 이름 접두어.
pub const DEFAULT_SYSTEM_AUTHOR: &str = "Project Collection Build Service (";

/// 표시 이름이 시스템(빌드 서비스) 계정인지 판별한다.
pub fn is_system_author(display_name: &str, system_author: &str) -> bool {
    display_name.starts_with(system_author)
}

/// 코멘트 본문의 첫 줄(줄바꿈 제외)을 반환한다.
pub fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or_default()
}

/// `" path"` 형태의 원본 경로에서 앞쪽 공백만 제거한다.
pub fn normalize_file_path(raw: &str) -> &str {
    raw.trim_start()
}

/// 정렬 순서를 유지한 채 후보 목록에서 경로를 제거한다.
pub fn remove_path(candidates: &mut Vec<String>, path: &str) -> bool {
    let before = candidates.len();
    candidates.retain(|candidate| candidate != path);
    candidates.len() != before
}
