// ==========================================
// 学生成绩分析 - 运行流程
// ==========================================
// 顺序: (重置) → 建库 → 写入示例数据 → 查询并输出 → (CSV 导出) → (图表)
// 每一步由 PerfGuard 记录耗时与 SQL 语句数
// ==========================================

use chrono::Local;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::state::AppState;
use crate::chart;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::export;
use crate::i18n;
use crate::perf::PerfGuard;
use crate::report::{build_report, ReportPrinter};
use crate::seed::SeedOutcome;

/// 运行结果摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// 重置时生成的备份文件
    pub backup_path: Option<PathBuf>,
    pub seed: SeedOutcome,
    pub exported_files: Vec<PathBuf>,
    pub chart_files: Vec<PathBuf>,
}

/// 执行一次完整分析，报告写入 `out`
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<RunSummary> {
    config.validate()?;
    i18n::set_locale(&config.locale);

    let backup_path = if config.reset {
        backup_and_reset_db(&config.db_path)?
    } else {
        None
    };

    let state = {
        let _perf = PerfGuard::new("db.open");
        AppState::open(&config.db_path)?
    };

    let seed = {
        let _perf = PerfGuard::new("seed");
        state.seed()?
    };

    let report = build_report(&state.report_repo, &config.report)?;
    {
        let _perf = PerfGuard::new("report.print");
        ReportPrinter::new(config.output_format).print(&report, out)?;
        out.flush()?;
    }

    let exported_files = match &config.export_dir {
        Some(dir) => {
            let _perf = PerfGuard::new("export.csv");
            let students = state.student_repo.list_all()?;
            let grades = state.grade_repo.list_all()?;
            export::export_csv(dir, &students, &grades, &report.student_grades)?
        }
        None => Vec::new(),
    };

    let chart_files = if config.render_charts {
        chart::render_all(&report, &config.chart_dir)?
    } else {
        Vec::new()
    };

    tracing::info!(
        exported = exported_files.len(),
        charts = chart_files.len(),
        "分析完成"
    );

    Ok(RunSummary {
        backup_path,
        seed,
        exported_files,
        chart_files,
    })
}

/// 备份并删除已有数据库文件
///
/// 备份文件名: `<db_path>.bak.<YYYYmmdd_HHMMSS>`；文件不存在时返回 None
pub fn backup_and_reset_db(db_path: &Path) -> AppResult<Option<PathBuf>> {
    if !db_path.exists() {
        return Ok(None);
    }

    let reset_err = |source: std::io::Error| AppError::Reset {
        path: db_path.display().to_string(),
        source,
    };

    let ts = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let mut backup = db_path.as_os_str().to_owned();
    backup.push(format!(".bak.{}", ts));
    let backup_path = PathBuf::from(backup);

    fs::copy(db_path, &backup_path).map_err(reset_err)?;
    fs::remove_file(db_path).map_err(reset_err)?;

    tracing::info!(
        from = %db_path.display(),
        to = %backup_path.display(),
        "已备份并删除旧数据库"
    );
    Ok(Some(backup_path))
}
