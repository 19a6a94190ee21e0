// ==========================================
// 学生成绩分析 - 领域层
// ==========================================
// 职责: 实体定义 + 统计结果行
// 对齐: students / grades 表
// ==========================================

pub mod grade;
pub mod report_row;
pub mod student;

// 重导出核心实体
pub use grade::{Grade, NewGrade};
pub use report_row::{StudentAverage, StudentGrade, SubjectAverage, SubjectTopScorer};
pub use student::{NewStudent, Student};
