// ==========================================
// 学生成绩分析 - 核心库
// ==========================================
// 技术栈: Rust + SQLite (rusqlite) + plotters (SVG)
// 流程: 建表 → 写入示例数据 → 统计查询 → 输出 → 图表
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与结果行
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 数据库基础设施（连接初始化/PRAGMA/建表）
pub mod db;

// 示例数据
pub mod seed;

// 报告层 - 查询汇总与输出
pub mod report;

// 图表
pub mod chart;

// CSV 导出
pub mod export;

// 配置层
pub mod config;

// 命令行
pub mod cli;

// 应用层 - 流程编排
pub mod app;

// 统一错误
pub mod error;

// SQL 计数与慢查询
pub mod perf;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{run, AppState, RunSummary};
pub use config::{AppConfig, OutputFormat};
pub use domain::{
    Grade, NewGrade, NewStudent, Student, StudentAverage, StudentGrade, SubjectAverage,
    SubjectTopScorer,
};
pub use error::{AppError, AppResult};
pub use report::{build_report, AnalysisReport, ReportOptions};
pub use repository::{
    GradeReportRepository, GradeRepository, RepositoryError, RepositoryResult, StudentRepository,
};
pub use seed::SeedOutcome;

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "student-grades";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
