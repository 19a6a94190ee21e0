// ==========================================
// 学生成绩分析 - 运行配置
// ==========================================
// 默认值保持单脚本行为:
// - 数据库: 当前目录 student_grades.db
// - 图表: charts/
// - 输出: 文本
// ==========================================

use crate::i18n;
use crate::report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "STUDENT_GRADES_DB_PATH";

const DEFAULT_DB_FILE: &str = "student_grades.db";
const DEFAULT_CHART_DIR: &str = "charts";

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("配置项不能为空: {0}")]
    Empty(&'static str),

    #[error("不支持的语言: {0}（可选: en, zh-CN）")]
    UnsupportedLocale(String),
}

/// 运行配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub chart_dir: PathBuf,
    /// None = 不导出 CSV
    pub export_dir: Option<PathBuf>,
    pub render_charts: bool,
    /// 运行前备份并删除已有数据库文件
    pub reset: bool,
    pub output_format: OutputFormat,
    pub locale: String,
    pub report: ReportOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            export_dir: None,
            render_charts: true,
            reset: false,
            output_format: OutputFormat::Text,
            locale: "en".to_string(),
            report: ReportOptions::default(),
        }
    }
}

impl AppConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::Empty("db_path"));
        }
        if self.render_charts && self.chart_dir.as_os_str().is_empty() {
            return Err(ConfigError::Empty("chart_dir"));
        }
        if matches!(&self.export_dir, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(ConfigError::Empty("export_dir"));
        }
        if self.report.focus_subject.trim().is_empty() {
            return Err(ConfigError::Empty("focus_subject"));
        }
        if !i18n::is_supported_locale(&self.locale) {
            return Err(ConfigError::UnsupportedLocale(self.locale.clone()));
        }
        Ok(())
    }
}

/// 默认数据库路径
///
/// 允许通过环境变量 STUDENT_GRADES_DB_PATH 显式指定
pub fn default_db_path() -> PathBuf {
    match std::env::var(DB_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
        _ => PathBuf::from(DEFAULT_DB_FILE),
    }
}
