//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

/// jul2log4j CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "jul2log4j",
    author = "YourName <your@email.com>",
    version,
    about = "java.util.logging → Log4j2 migration - rewrites imports and logging calls in Java sources",
    long_about = r#"
java.util.logging → Log4j2 MIGRATION
====================================

Rewrites every *.java file under a directory (or a single file) in place:
  • drops `import java.util.logging.Level;`
  • swaps `import java.util.logging.Logger;` for the Log4j2 imports
  • Logger.getLogger(Foo.class.getName()) → LogManager.getLogger(Foo.class)
  • log.warning(...) / log.log(Level.WARNING, ...) → log.warn(...)

No backup is kept. Without PATH the directory is asked interactively.

Examples:
  jul2log4j ./src/main/java
  jul2log4j ./src --dry-run --verbose
  jul2log4j ./src --pattern "*Service.java" -j 4
"#
)]
pub struct Args {
    /// 변환할 폴더 또는 파일 (생략하면 프롬프트로 입력)
    pub path: Option<PathBuf>,

    /// 파일을 쓰지 않고 변환 결과만 집계
    #[arg(long)]
    pub dry_run: bool,

    /// 파일별 상세 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 병렬 처리 스레드 수 (기본값: CPU 코어 수)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "*Service.java")
    #[arg(short, long)]
    pub pattern: Option<String>,
}
