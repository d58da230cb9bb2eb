//! 에러 타입 정의 모듈
//!
//! jul2log4j에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// jul2log4j에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum MigrateError {
    /// 대상 경로가 존재하지 않음
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// 소스 파일 읽기 실패
    #[error("failed to read {file}: {reason}")]
    ReadError { file: PathBuf, reason: String },

    /// 변환 결과 쓰기 실패
    #[error("failed to write {file}: {reason}")]
    WriteError { file: PathBuf, reason: String },

    /// 폴더 탐색 실패
    #[error("failed to walk {path}: {reason}")]
    WalkError { path: PathBuf, reason: String },

    /// 단일 파일 변환 실패 (원인 에러를 체인으로 보존)
    #[error("Script failed to transform «{file}»")]
    TransformFailed {
        file: String,
        #[source]
        source: Box<MigrateError>,
    },

    /// 치환 규칙 컴파일 실패
    #[error("invalid rewrite rule: {reason}")]
    InvalidRule { reason: String },

    /// 유효하지 않은 파일 이름 패턴
    #[error("invalid pattern: {pattern}")]
    InvalidPattern { pattern: String },

    /// 현재 작업 폴더 확인 실패
    #[error("cannot resolve working directory: {reason}")]
    WorkingDirectory { reason: String },

    /// 대화형 프롬프트 실패
    #[error("prompt failed: {reason}")]
    PromptError { reason: String },
}

/// jul2log4j 결과 타입 별칭
pub type Result<T> = std::result::Result<T, MigrateError>;
