//! 통계 및 유틸리티 모듈
//!
//! 마이그레이션 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use crate::transformer::RewriteCounts;

/// 마이그레이션 통계 구조체 (병렬 작업 간 공유)
#[derive(Debug, Default)]
pub struct Statistics {
    /// 총 파일 수
    pub total_files: usize,
    /// 내용이 바뀐 파일 수
    pub changed_count: AtomicUsize,
    /// 바뀐 내용이 없는 파일 수
    pub unchanged_count: AtomicUsize,
    /// 읽은 총 바이트
    pub total_bytes_read: AtomicU64,
    /// 쓴 총 바이트
    pub total_bytes_written: AtomicU64,
    /// 제거된 `Level` import 수
    pub level_imports: AtomicUsize,
    /// 교체된 `Logger` import 수
    pub logger_imports: AtomicUsize,
    /// 변환된 `getLogger` 호출 수
    pub factory_calls: AtomicUsize,
    /// 변환된 레벨 호출 수
    pub level_calls: AtomicUsize,
    start_time: Option<Instant>,
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// 변경된 파일 카운트 증가
    pub fn increment_changed(&self) {
        self.changed_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 변경 없는 파일 카운트 증가
    pub fn increment_unchanged(&self) {
        self.unchanged_count.fetch_add(1, Ordering::Relaxed);
    }

    /// 읽은 바이트 추가
    pub fn add_bytes_read(&self, bytes: u64) {
        self.total_bytes_read.fetch_add(bytes, Ordering::Relaxed);
    }

    /// 쓴 바이트 추가
    pub fn add_bytes_written(&self, bytes: u64) {
        self.total_bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    /// 규칙별 치환 횟수 누적
    pub fn add_rewrites(&self, counts: &RewriteCounts) {
        self.level_imports
            .fetch_add(counts.level_imports, Ordering::Relaxed);
        self.logger_imports
            .fetch_add(counts.logger_imports, Ordering::Relaxed);
        self.factory_calls
            .fetch_add(counts.factory_calls, Ordering::Relaxed);
        self.level_calls
            .fetch_add(counts.level_calls, Ordering::Relaxed);
    }

    pub fn get_changed_count(&self) -> usize {
        self.changed_count.load(Ordering::Relaxed)
    }

    pub fn get_unchanged_count(&self) -> usize {
        self.unchanged_count.load(Ordering::Relaxed)
    }

    /// 누적된 규칙별 치환 횟수 스냅샷
    pub fn rewrites(&self) -> RewriteCounts {
        RewriteCounts {
            level_imports: self.level_imports.load(Ordering::Relaxed),
            logger_imports: self.logger_imports.load(Ordering::Relaxed),
            factory_calls: self.factory_calls.load(Ordering::Relaxed),
            level_calls: self.level_calls.load(Ordering::Relaxed),
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// 마이그레이션 통계 요약 출력
    pub fn print_summary(&self, dry_run: bool) {
        let rewrites = self.rewrites();
        let bytes_read = self.total_bytes_read.load(Ordering::Relaxed);
        let bytes_written = self.total_bytes_written.load(Ordering::Relaxed);

        println!("\n{}", "═".repeat(50).bright_blue());
        if dry_run {
            println!("{}", " Migration summary (dry run)".bright_white().bold());
        } else {
            println!("{}", " Migration summary".bright_white().bold());
        }
        println!("{}", "═".repeat(50).bright_blue());

        println!("  Files scanned:        {}", self.total_files);
        println!(
            "  Files changed:        {}",
            self.get_changed_count().to_string().green()
        );
        println!(
            "  Files unchanged:      {}",
            self.get_unchanged_count().to_string().dimmed()
        );
        println!("  Level imports gone:   {}", rewrites.level_imports);
        println!("  Logger imports:       {}", rewrites.logger_imports);
        println!("  getLogger calls:      {}", rewrites.factory_calls);
        println!("  Level calls:          {}", rewrites.level_calls);
        println!("  Read:                 {}", format_bytes(bytes_read));
        println!("  Written:              {}", format_bytes(bytes_written));
        println!(
            "  Elapsed:              {}",
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use jul2log4j::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:03}s", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
