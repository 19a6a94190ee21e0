// ==========================================
// 学生成绩分析 - 统一错误类型
// ==========================================
// 各层错误 (thiserror) 汇总到 AppError，二进制入口再转 anyhow
// ==========================================

use crate::chart::ChartError;
use crate::config::ConfigError;
use crate::export::ExportError;
use crate::repository::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("数据库重置失败 ({path}): {source}")]
    Reset {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("报告输出失败: {0}")]
    Output(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
