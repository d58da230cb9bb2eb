//! 대상 선택 모듈
//!
//! 작업할 루트 경로를 인자 또는 대화형 프롬프트로 결정하고,
//! 변환할 `.java` 파일 목록을 수집합니다.

use colored::Colorize;
use dialoguer::{Confirm, Input};
use glob::Pattern;
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{MigrateError, Result};

/// 변환 대상 파일 확장자
pub const JAVA_EXTENSION: &str = "java";

/// 경로가 없을 때 표시하는 경고
pub const MISSING_PATH_WARNING: &str = "Le chemin spécifié est inexistant!";

/// 사용자 상호작용 추상화
///
/// 취소는 `Ok(None)`으로 표현합니다.
pub trait Prompter {
    /// 경로 입력 요청 (`initial`은 미리 채워질 값)
    fn input_path(&mut self, initial: &str) -> Result<Option<String>>;

    /// 예/아니오 확인 요청
    fn confirm(&mut self, message: &str) -> Result<Option<bool>>;

    /// 경고 메시지 표시
    fn warn(&mut self, message: &str);
}

/// dialoguer 기반 터미널 프롬프트
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input_path(&mut self, initial: &str) -> Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt("Spécifiez un répertoire ou fichier")
            .default(initial.to_string())
            .interact_text()
            .map(Some);

        cancel_on_interrupt(answer)
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact_opt();

        cancel_on_interrupt(answer)
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message.red());
    }
}

/// Ctrl-C로 중단된 프롬프트는 취소(`None`)로 취급
fn cancel_on_interrupt<T>(
    answer: std::result::Result<Option<T>, dialoguer::Error>,
) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(value),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(MigrateError::PromptError {
            reason: e.to_string(),
        }),
    }
}

/// 파일 수집 옵션
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// 최대 폴더 탐색 깊이 (None이면 무제한)
    pub max_depth: Option<usize>,
    /// 파일 이름 필터 (None이면 모든 `.java` 파일)
    pub pattern: Option<Pattern>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 최대 탐색 깊이 설정
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 파일 이름 글로브 필터 설정
    ///
    /// # Examples
    /// ```
    /// use jul2log4j::selector::SelectOptions;
    ///
    /// assert!(SelectOptions::new().with_pattern(Some("*Service.java")).is_ok());
    /// assert!(SelectOptions::new().with_pattern(Some("[broken")).is_err());
    /// ```
    pub fn with_pattern(mut self, pattern: Option<&str>) -> Result<Self> {
        self.pattern = match pattern {
            Some(p) => Some(Pattern::new(p).map_err(|_| MigrateError::InvalidPattern {
                pattern: p.to_string(),
            })?),
            None => None,
        };
        Ok(self)
    }

    fn accepts(&self, file_name: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|p| p.matches(file_name))
            .unwrap_or(true)
    }
}

/// 루트 경로 결정
///
/// 인자로 받은 경로가 존재하면 그대로 사용합니다. 그렇지 않으면 경로를 입력받고,
/// 존재하지 않으면 경고 후 다시 묻고, 존재하면 실행 여부를 확인합니다.
/// 확인을 거절하거나 취소하면 다시 입력을 받습니다.
///
/// # Returns
/// 선택된 절대 경로, 경로 입력을 취소하면 `None`
pub fn select_root<P: Prompter>(
    initial: Option<PathBuf>,
    prompter: &mut P,
) -> Result<Option<PathBuf>> {
    if let Some(path) = initial.as_deref() {
        if path.exists() {
            return resolve(path).map(Some);
        }
    }

    let mut current = initial;
    loop {
        let default = match &current {
            Some(path) => path.display().to_string(),
            None => current_dir()?.display().to_string(),
        };

        let Some(answer) = prompter.input_path(&default)? else {
            return Ok(None);
        };

        let path = resolve(Path::new(answer.trim()))?;
        current = Some(path.clone());

        if !path.exists() {
            prompter.warn(MISSING_PATH_WARNING);
            continue;
        }

        let message = format!(
            "Exécuter le script sur «{}» ?",
            target_display(&path).cyan()
        );
        if prompter.confirm(&message)? == Some(true) {
            return Ok(Some(path));
        }
    }
}

/// 확인 메시지에 표시할 대상 (폴더면 `<dir>/**/*.java`, 파일이면 파일 경로)
pub fn target_display(root: &Path) -> String {
    if root.is_dir() {
        root.join("**")
            .join(format!("*.{}", JAVA_EXTENSION))
            .display()
            .to_string()
    } else {
        root.display().to_string()
    }
}

/// 변환 대상 파일 수집
///
/// 폴더면 하위의 모든 `.java` 파일(경로 순 정렬), 파일이면 확장자와 무관하게 그 파일 하나입니다.
/// `.`으로 시작하는 파일과 폴더(`.git`, `.idea` 등)는 건너뜁니다.
pub fn collect_targets(root: &Path, options: &SelectOptions) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    if !root.is_dir() {
        return Err(MigrateError::PathNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let mut files = Vec::new();
    let entries = walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in entries {
        let entry = entry.map_err(|e| MigrateError::WalkError {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let is_java = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s == JAVA_EXTENSION)
            .unwrap_or(false);
        let accepted = entry
            .file_name()
            .to_str()
            .map(|s| options.accepts(s))
            .unwrap_or(false);

        if is_java && accepted {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// 이름이 `.`으로 시작하는 항목
fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

/// 상대 경로를 현재 작업 폴더 기준 절대 경로로 변환
fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(current_dir()?.join(path))
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| MigrateError::WorkingDirectory {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use tempfile::TempDir;

    /// 미리 정해진 응답을 돌려주는 프롬프트
    #[derive(Default)]
    struct ScriptedPrompter {
        inputs: VecDeque<Option<String>>,
        confirms: VecDeque<Option<bool>>,
        initials: Vec<String>,
        warnings: Vec<String>,
    }

    impl Prompter for ScriptedPrompter {
        fn input_path(&mut self, initial: &str) -> Result<Option<String>> {
            self.initials.push(initial.to_string());
            Ok(self.inputs.pop_front().flatten())
        }

        fn confirm(&mut self, _message: &str) -> Result<Option<bool>> {
            Ok(self.confirms.pop_front().flatten())
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "class A {}").unwrap();
        path
    }

    #[test]
    fn test_existing_argument_skips_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::default();

        let root = select_root(Some(temp_dir.path().to_path_buf()), &mut prompter).unwrap();

        assert_eq!(root, Some(temp_dir.path().to_path_buf()));
        assert!(prompter.initials.is_empty());
    }

    #[test]
    fn test_missing_path_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let mut prompter = ScriptedPrompter {
            inputs: VecDeque::from([
                Some(missing.display().to_string()),
                Some(temp_dir.path().display().to_string()),
            ]),
            confirms: VecDeque::from([Some(true)]),
            ..Default::default()
        };

        let root = select_root(Some(missing.clone()), &mut prompter).unwrap();

        assert_eq!(root, Some(temp_dir.path().to_path_buf()));
        assert_eq!(prompter.warnings, vec![MISSING_PATH_WARNING.to_string()]);
        // 두 번째 프롬프트는 직전 입력값으로 채워짐
        assert_eq!(prompter.initials[1], missing.display().to_string());
    }

    #[test]
    fn test_declined_confirmation_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().display().to_string();
        let mut prompter = ScriptedPrompter {
            inputs: VecDeque::from([Some(path.clone()), Some(path.clone()), Some(path)]),
            confirms: VecDeque::from([Some(false), None, Some(true)]),
            ..Default::default()
        };

        let root = select_root(None, &mut prompter).unwrap();

        assert_eq!(root, Some(temp_dir.path().to_path_buf()));
        assert_eq!(prompter.initials.len(), 3);
    }

    #[test]
    fn test_cancel_returns_none() {
        let mut prompter = ScriptedPrompter::default();
        prompter.inputs.push_back(None);

        let root = select_root(None, &mut prompter).unwrap();

        assert!(root.is_none());
        assert_eq!(
            prompter.initials,
            vec![env::current_dir().unwrap().display().to_string()]
        );
    }

    #[test]
    fn test_collect_targets_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let sub_dir = temp_dir.path().join("com").join("demo");
        fs::create_dir_all(&sub_dir).unwrap();

        let a = touch(temp_dir.path(), "App.java");
        let b = touch(&sub_dir, "Service.java");
        touch(&sub_dir, "notes.txt");
        touch(&sub_dir, "Legacy.JAVA");

        let files = collect_targets(temp_dir.path(), &SelectOptions::new()).unwrap();

        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_collect_targets_skips_hidden() {
        let temp_dir = TempDir::new().unwrap();
        let history = temp_dir.path().join(".history").join("com");
        fs::create_dir_all(&history).unwrap();

        let app = touch(temp_dir.path(), "App.java");
        touch(temp_dir.path(), ".Hidden.java");
        touch(&history, "Old.java");

        let files = collect_targets(temp_dir.path(), &SelectOptions::new()).unwrap();

        assert_eq!(files, vec![app]);
    }

    #[test]
    fn test_collect_targets_hidden_root_is_walked() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(".workspace");
        fs::create_dir(&root).unwrap();
        let app = touch(&root, "App.java");

        let files = collect_targets(&root, &SelectOptions::new()).unwrap();

        assert_eq!(files, vec![app]);
    }

    #[test]
    fn test_interrupted_prompt_is_cancel() {
        let interrupted: std::result::Result<Option<bool>, dialoguer::Error> = Err(
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::Interrupted, "read interrupted")),
        );
        assert_eq!(cancel_on_interrupt(interrupted).unwrap(), None);

        let answered: std::result::Result<Option<bool>, dialoguer::Error> = Ok(Some(true));
        assert_eq!(cancel_on_interrupt(answered).unwrap(), Some(true));

        let broken: std::result::Result<Option<bool>, dialoguer::Error> = Err(
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
        );
        assert!(matches!(
            cancel_on_interrupt(broken),
            Err(MigrateError::PromptError { .. })
        ));
    }

    #[test]
    fn test_cancelled_confirmation_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().display().to_string();
        let mut prompter = ScriptedPrompter {
            inputs: VecDeque::from([Some(path.clone()), None]),
            confirms: VecDeque::from([None]),
            ..Default::default()
        };

        let root = select_root(None, &mut prompter).unwrap();

        // 확인 취소 후 다시 경로를 묻고, 경로 입력 취소에서 종료
        assert!(root.is_none());
        assert_eq!(prompter.initials.len(), 2);
        assert_eq!(prompter.initials[1], path);
    }

    #[test]
    fn test_collect_targets_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = touch(temp_dir.path(), "snippet.txt");

        let files = collect_targets(&file, &SelectOptions::new()).unwrap();

        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_collect_targets_with_options() {
        let temp_dir = TempDir::new().unwrap();
        let sub_dir = temp_dir.path().join("deep");
        fs::create_dir(&sub_dir).unwrap();

        let root_service = touch(temp_dir.path(), "RootService.java");
        touch(temp_dir.path(), "Model.java");
        touch(&sub_dir, "DeepService.java");

        let options = SelectOptions::new()
            .with_max_depth(Some(1))
            .with_pattern(Some("*Service.java"))
            .unwrap();
        let files = collect_targets(temp_dir.path(), &options).unwrap();

        assert_eq!(files, vec![root_service]);
    }

    #[test]
    fn test_collect_targets_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let result = collect_targets(&temp_dir.path().join("missing"), &SelectOptions::new());
        assert!(matches!(result, Err(MigrateError::PathNotFound { .. })));
    }

    #[test]
    fn test_target_display() {
        let temp_dir = TempDir::new().unwrap();
        let file = touch(temp_dir.path(), "A.java");

        let dir_target = target_display(temp_dir.path());
        assert!(dir_target.ends_with(&format!("**{}*.java", std::path::MAIN_SEPARATOR)));
        assert_eq!(target_display(&file), file.display().to_string());
    }
}
