// ==========================================
// 学生成绩分析 - 应用层
// ==========================================
// 职责: 串联 建库 → 写入 → 查询 → 输出 → 导出 → 图表
// ==========================================

pub mod runner;
pub mod state;

pub use runner::{backup_and_reset_db, run, RunSummary};
pub use state::AppState;
