//! 소스 변환 모듈
//!
//! `java.util.logging` 사용 코드를 Log4j2 API로 바꾸는 네 가지 치환 규칙을 담당합니다.
//! 규칙은 항상 같은 순서로 적용되며, 각 규칙의 출력이 다음 규칙의 입력이 됩니다.

use regex::{Captures, Regex};

use crate::error::{MigrateError, Result};
use crate::levels;

const LEVEL_IMPORT: &str = r"import java\.util\.logging\.Level;\s*?\n";
const LOGGER_IMPORT: &str = r"import java\.util\.logging\.Logger;\s*?\n";
const LOGGER_FACTORY: &str = r"Logger\.getLogger\((\w+)[^;]+";

/// 교체될 Log4j2 import 두 줄
pub const LOG4J_IMPORTS: &str =
    "import org.apache.logging.log4j.LogManager;\nimport org.apache.logging.log4j.Logger;\n";

/// 규칙별 치환 횟수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteCounts {
    /// 제거된 `Level` import 수
    pub level_imports: usize,
    /// 교체된 `Logger` import 수
    pub logger_imports: usize,
    /// 변환된 `Logger.getLogger(...)` 호출 수
    pub factory_calls: usize,
    /// 실제로 바뀐 레벨 호출 수
    pub level_calls: usize,
}

impl RewriteCounts {
    /// 전체 치환 횟수
    pub fn total(&self) -> usize {
        self.level_imports + self.logger_imports + self.factory_calls + self.level_calls
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// 변환 결과
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    /// 변환된 소스 텍스트
    pub content: String,
    /// 규칙별 치환 횟수
    pub counts: RewriteCounts,
}

/// 컴파일된 치환 규칙 모음
///
/// 한 번 생성해서 모든 파일 작업이 공유합니다 (`Regex`는 `Sync`).
#[derive(Debug, Clone)]
pub struct Transformer {
    level_import: Regex,
    logger_import: Regex,
    logger_factory: Regex,
    level_call: Regex,
}

impl Transformer {
    /// 치환 규칙 컴파일
    pub fn new() -> Result<Self> {
        let level_call = format!(
            r"(\w+)\.(?:log\(Level\.)?({})[,(]",
            levels::pattern_alternation()
        );

        Ok(Self {
            level_import: compile(LEVEL_IMPORT)?,
            logger_import: compile(LOGGER_IMPORT)?,
            logger_factory: compile(LOGGER_FACTORY)?,
            level_call: compile(&level_call)?,
        })
    }

    /// 소스 텍스트에 네 규칙을 순서대로 적용
    ///
    /// 1. `import java.util.logging.Level;` 줄 제거
    /// 2. `import java.util.logging.Logger;` 줄을 Log4j2 import 두 줄로 교체
    /// 3. `Logger.getLogger(Foo...)` → `LogManager.getLogger(Foo.class)`
    ///    (괄호 뒤 첫 식별자만 남고 세미콜론 전까지 나머지는 버려짐)
    /// 4. `x.warning(` / `x.log(Level.WARNING,` → `x.warn(`
    ///
    /// # Examples
    /// ```
    /// use jul2log4j::transformer::Transformer;
    ///
    /// let transformer = Transformer::new().unwrap();
    /// let outcome = transformer.transform("log.severe(\"boom\");");
    /// assert_eq!(outcome.content, "log.error(\"boom\");");
    /// assert_eq!(outcome.counts.level_calls, 1);
    /// ```
    pub fn transform(&self, content: &str) -> TransformOutcome {
        let mut counts = RewriteCounts::default();

        counts.level_imports = self.level_import.find_iter(content).count();
        let content = self.level_import.replace_all(content, "");

        counts.logger_imports = self.logger_import.find_iter(&content).count();
        let content = self.logger_import.replace_all(&content, LOG4J_IMPORTS);

        counts.factory_calls = self.logger_factory.find_iter(&content).count();
        let content = self
            .logger_factory
            .replace_all(&content, "LogManager.getLogger(${1}.class)");

        // `log.info(` 같은 이미 같은 형태의 호출은 세지 않음
        let mut level_calls = 0;
        let content = self.level_call.replace_all(&content, |caps: &Captures| {
            let rewritten = format!("{}.{}(", &caps[1], target_method(&caps[2]));
            if rewritten != caps[0] {
                level_calls += 1;
            }
            rewritten
        });
        counts.level_calls = level_calls;

        TransformOutcome {
            content: content.into_owned(),
            counts,
        }
    }
}

/// 레거시 레벨 이름에 대응하는 Log4j2 메서드 이름 (소문자)
fn target_method(legacy: &str) -> String {
    levels::canonical(legacy)
        .unwrap_or(legacy)
        .to_lowercase()
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| MigrateError::InvalidRule {
        reason: e.to_string(),
    })
}
