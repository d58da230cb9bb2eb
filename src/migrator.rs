//! 파일 마이그레이션 모듈
//!
//! 개별 파일의 읽기, 변환, 덮어쓰기와 전체 파일의 병렬 실행을 담당합니다.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{MigrateError, Result};
use crate::stats::Statistics;
use crate::transformer::{RewriteCounts, Transformer};

/// 단일 파일 작업
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileJob {
    /// 대상 파일 경로
    pub path: PathBuf,
    /// 출력용 경로 (`.../<루트 기준 상대 경로>`)
    pub display: String,
}

impl FileJob {
    /// 루트 기준 표시 경로를 가진 작업 생성
    ///
    /// # Examples
    /// ```
    /// use jul2log4j::migrator::FileJob;
    /// use std::path::Path;
    ///
    /// let job = FileJob::new(Path::new("/src/com/A.java"), Path::new("/src"));
    /// assert_eq!(job.display, format!("...{}com/A.java", std::path::MAIN_SEPARATOR));
    /// ```
    pub fn new(path: &Path, root: &Path) -> Self {
        let relative = path
            .strip_prefix(root)
            .ok()
            .filter(|rel| !rel.as_os_str().is_empty())
            .or_else(|| path.file_name().map(Path::new))
            .unwrap_or(path);

        Self {
            path: path.to_path_buf(),
            display: format!("...{}{}", MAIN_SEPARATOR, relative.display()),
        }
    }
}

/// 파일 목록을 작업 목록으로 변환
pub fn jobs_for(files: &[PathBuf], root: &Path) -> Vec<FileJob> {
    files.iter().map(|path| FileJob::new(path, root)).collect()
}

/// 마이그레이션 옵션
#[derive(Debug, Clone, Default)]
pub struct MigrateOptions {
    /// 변환만 하고 파일은 쓰지 않음
    pub dry_run: bool,
    /// 파일별 상세 출력
    pub verbose: bool,
}

impl MigrateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// 상세 출력 설정
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// 파일 처리 결과
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub display: String,
    /// 원본 크기
    pub bytes_read: u64,
    /// 기록한 크기 (쓰지 않았으면 0)
    pub bytes_written: u64,
    /// 규칙별 치환 횟수
    pub counts: RewriteCounts,
    /// 내용 변경 여부
    pub changed: bool,
}

/// 단일 파일 마이그레이션
///
/// 실패하면 원인 에러를 `TransformFailed`로 감싸 파일 경로를 남깁니다.
/// 내용이 바뀌지 않았거나 드라이런이면 파일을 쓰지 않습니다.
pub fn migrate_file(
    job: &FileJob,
    transformer: &Transformer,
    options: &MigrateOptions,
) -> Result<FileReport> {
    migrate_file_internal(job, transformer, options).map_err(|e| MigrateError::TransformFailed {
        file: job.display.clone(),
        source: Box::new(e),
    })
}

fn migrate_file_internal(
    job: &FileJob,
    transformer: &Transformer,
    options: &MigrateOptions,
) -> Result<FileReport> {
    let content = fs::read_to_string(&job.path).map_err(|e| MigrateError::ReadError {
        file: job.path.clone(),
        reason: e.to_string(),
    })?;

    let outcome = transformer.transform(&content);
    let changed = outcome.content != content;

    let bytes_written = if changed && !options.dry_run {
        fs::write(&job.path, &outcome.content).map_err(|e| MigrateError::WriteError {
            file: job.path.clone(),
            reason: e.to_string(),
        })?;
        outcome.content.len() as u64
    } else {
        0
    };

    Ok(FileReport {
        path: job.path.clone(),
        display: job.display.clone(),
        bytes_read: content.len() as u64,
        bytes_written,
        counts: outcome.counts,
        changed,
    })
}

/// 모든 파일을 병렬로 마이그레이션
///
/// 하나라도 실패하면 첫 에러를 반환합니다. 이미 기록된 다른 파일은 되돌리지 않습니다.
/// `on_done`은 파일 하나가 끝날 때마다 작업 스레드에서 호출됩니다.
pub fn migrate_all<F>(
    jobs: Vec<FileJob>,
    transformer: &Transformer,
    options: &MigrateOptions,
    stats: &Statistics,
    on_done: F,
) -> Result<Vec<FileReport>>
where
    F: Fn(&FileReport) + Sync,
{
    jobs.into_par_iter()
        .map(|job| {
            let report = migrate_file(&job, transformer, options)?;

            stats.add_bytes_read(report.bytes_read);
            stats.add_bytes_written(report.bytes_written);
            stats.add_rewrites(&report.counts);
            if report.changed {
                stats.increment_changed();
            } else {
                stats.increment_unchanged();
            }

            on_done(&report);
            Ok(report)
        })
        .collect()
}
