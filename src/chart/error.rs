// ==========================================
// 学生成绩分析 - 图表错误类型
// ==========================================

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("图表无数据: {0}")]
    NoData(&'static str),

    #[error("图表输出目录不可用: {path}: {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("图表绘制失败: {0}")]
    Render(String),
}

// plotters 的绘制错误携带后端错误类型参数，统一转为文本
impl<E> From<DrawingAreaErrorKind<E>> for ChartError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
