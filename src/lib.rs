//! jul2log4j - java.util.logging → Log4j2 마이그레이션 도구
//!
//! 폴더(또는 단일 파일) 아래의 Java 소스를 찾아 `java.util.logging` import와
//! 로깅 호출을 Log4j2 API 형태로 일괄 치환하고 제자리에 덮어씁니다.
//!
//! # 주요 기능
//!
//! - 🔍 **대상 선택**: 인자 또는 대화형 프롬프트로 경로 지정, 실행 전 확인
//! - ✏️ **정해진 순서의 4단계 치환**: import 제거/교체, `getLogger` 호출, 레벨 호출
//! - 🚀 **병렬 처리**: Rayon으로 파일별 작업을 동시에 실행하고 모두 끝날 때까지 대기
//! - 🧪 **드라이런 모드**: 파일을 쓰지 않고 치환 결과만 집계
//! - 📊 **통계**: 변경 파일 수, 규칙별 치환 횟수 출력
//!
//! # 예제
//!
//! ```bash
//! # 폴더 전체 변환
//! jul2log4j ./src/main/java
//!
//! # 쓰지 않고 미리 보기
//! jul2log4j ./src --dry-run --verbose
//! ```

pub mod cli;
pub mod error;
pub mod levels;
pub mod migrator;
pub mod selector;
pub mod stats;
pub mod transformer;

pub use cli::Args;
pub use error::{MigrateError, Result};
pub use migrator::{migrate_all, migrate_file, FileJob, FileReport, MigrateOptions};
pub use selector::{collect_targets, select_root, Prompter, SelectOptions, TerminalPrompter};
pub use stats::{format_bytes, Statistics};
pub use transformer::{RewriteCounts, TransformOutcome, Transformer};
