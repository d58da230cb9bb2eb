//! 로그 레벨 매핑 모듈
//!
//! `java.util.logging` 레벨 이름을 Log4j2 레벨 이름으로 변환하는 고정 테이블입니다.

/// 레거시 레벨 → Log4j2 레벨 (순서 고정: 긴 이름이 먼저 와야 정규식 대안이 올바르게 매칭됨)
pub const LEVELS: [(&str, &str); 6] = [
    ("FINEST", "TRACE"),
    ("FINER", "DEBUG"),
    ("FINE", "INFO"),
    ("INFO", "INFO"),
    ("WARNING", "WARN"),
    ("SEVERE", "ERROR"),
];

/// 레거시 레벨 이름에 대응하는 Log4j2 레벨 이름 조회
///
/// 대소문자를 구분하지 않으며, 알 수 없는 이름이면 `None`을 반환합니다.
///
/// # Examples
/// ```
/// use jul2log4j::levels::canonical;
///
/// assert_eq!(canonical("WARNING"), Some("WARN"));
/// assert_eq!(canonical("fine"), Some("INFO"));
/// assert_eq!(canonical("verbose"), None);
/// ```
pub fn canonical(name: &str) -> Option<&'static str> {
    LEVELS
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
        .map(|(_, target)| *target)
}

/// 정규식용 레벨 대안 문자열 생성
///
/// 각 레벨을 원래 이름과 소문자 이름 순서로 나열합니다 (`FINEST|finest|FINER|...`).
pub fn pattern_alternation() -> String {
    LEVELS
        .iter()
        .flat_map(|(legacy, _)| [legacy.to_string(), legacy.to_lowercase()])
        .collect::<Vec<_>>()
        .join("|")
}
