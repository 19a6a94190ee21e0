// ==========================================
// 学生成绩分析 - 配置层
// ==========================================
// 来源: 命令行参数 / 环境变量 (见 cli)
// ==========================================

pub mod app_config;

pub use app_config::{default_db_path, AppConfig, ConfigError, OutputFormat, DB_PATH_ENV};
