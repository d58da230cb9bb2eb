//! jul2log4j - java.util.logging → Log4j2 마이그레이션
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use jul2log4j::{
    cli::Args,
    migrator::{jobs_for, migrate_all, FileReport, MigrateOptions},
    selector::{collect_targets, select_root, target_display, SelectOptions, TerminalPrompter},
    stats::Statistics,
    transformer::Transformer,
};

/// 어떤 경로로 끝나든 종료 코드는 0 (에러는 stderr에만 출력)
fn main() {
    if let Err(err) = run() {
        print_error(&err);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // 스레드 풀 설정
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to initialize thread pool")?;
    }

    // 대상 경로 결정 (취소하면 정상 종료)
    let mut prompter = TerminalPrompter;
    let Some(root) = select_root(args.path.clone(), &mut prompter)? else {
        return Ok(());
    };

    print_header(&args, &root);

    let select_options = SelectOptions::new()
        .with_max_depth(args.max_depth)
        .with_pattern(args.pattern.as_deref())?;
    let files = collect_targets(&root, &select_options)
        .with_context(|| format!("failed to collect files under {}", root.display()))?;

    if files.is_empty() {
        println!("{}", "No Java file to transform.".yellow());
        return Ok(());
    }

    println!("{}", "Execution...".cyan());

    let transformer = Transformer::new()?;
    let options = MigrateOptions::new()
        .with_dry_run(args.dry_run)
        .with_verbose(args.verbose);
    let stats = Statistics::new(files.len());
    let pb = create_progress_bar(files.len());

    let result = migrate_all(
        jobs_for(&files, &root),
        &transformer,
        &options,
        &stats,
        |report| {
            if options.verbose {
                pb.println(format_report_line(report));
            }
            pb.inc(1);
        },
    );

    match result {
        Ok(_) => pb.finish_and_clear(),
        Err(e) => {
            pb.abandon();
            return Err(e.into());
        }
    }

    stats.print_summary(args.dry_run);
    println!("{}", "\nScript execution completed!".green());

    Ok(())
}

/// 헤더 출력
fn print_header(args: &Args, root: &Path) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " java.util.logging → Log4j2 MIGRATION".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  Target:    {}", target_display(root).cyan());

    if let Some(ref pattern) = args.pattern {
        println!("  Pattern:   {}", pattern);
    }

    if let Some(depth) = args.max_depth {
        println!("  Max depth: {}", depth);
    }

    if args.dry_run {
        println!("  {}", "Dry run (no file will be written)".yellow());
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// 파일별 상세 출력 한 줄
fn format_report_line(report: &FileReport) -> String {
    if report.changed {
        format!(
            "  File «{}» transformed! ({} rewrites)",
            report.display.cyan(),
            report.counts.total()
        )
    } else {
        format!("  File «{}» unchanged", report.display.dimmed())
    }
}

/// 에러와 원인 체인을 stderr로 출력
fn print_error(err: &anyhow::Error) {
    eprintln!("{}", err.to_string().red().bold());
    for cause in err.chain().skip(1) {
        eprintln!("{}{}", "  Caused by: ".magenta(), cause.to_string().red().bold());
    }
}
