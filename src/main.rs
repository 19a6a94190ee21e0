// ==========================================
// 学生成绩分析 - 命令行入口
// ==========================================

use anyhow::Context;
use clap::Parser;

use student_grades::cli::Cli;
use student_grades::i18n::t_with_args;
use student_grades::logging::{self, LogFormat};
use student_grades::{RunSummary, SeedOutcome};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    logging::init_with(cli.log_level.as_deref(), log_format);

    tracing::info!(version = student_grades::VERSION, "{}", student_grades::APP_NAME);

    let config = cli.into_config();
    tracing::debug!(?config, "配置已加载");

    let mut stdout = std::io::stdout().lock();
    let summary = student_grades::run(&config, &mut stdout)
        .with_context(|| format!("分析失败: {}", config.db_path.display()))?;

    print_summary(&summary);
    Ok(())
}

/// 运行摘要输出到 stderr
fn print_summary(summary: &RunSummary) {
    match summary.seed {
        SeedOutcome::Inserted { students, grades } => eprintln!(
            "{}",
            t_with_args(
                "run.seed_inserted",
                &[
                    ("students", students.to_string().as_str()),
                    ("grades", grades.to_string().as_str())
                ]
            )
        ),
        SeedOutcome::AlreadySeeded { students } => eprintln!(
            "{}",
            t_with_args("run.seed_skipped", &[("students", students.to_string().as_str())])
        ),
    }

    for path in &summary.exported_files {
        eprintln!(
            "{}",
            t_with_args("run.export_written", &[("path", path.display().to_string().as_str())])
        );
    }
    for path in &summary.chart_files {
        eprintln!(
            "{}",
            t_with_args("run.chart_written", &[("path", path.display().to_string().as_str())])
        );
    }
}
