// ==========================================
// 学生成绩分析 - 统计结果行
// ==========================================
// 职责: 承载分析查询的结果行
// 输出: 元组风格单行文本 ('Alice', 'Johnson', 'Math', 95) / 表格 / JSON
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// 平均分格式化：最短往返表示，整数保留 `.0`（91.0 / 81.66666666666667）
pub fn format_avg(value: f64) -> String {
    format!("{:?}", value)
}

fn format_avg_cell(value: &f64) -> String {
    format_avg(*value)
}

// ==========================================
// StudentGrade - 学生 × 科目成绩 (students JOIN grades)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct StudentGrade {
    pub first_name: String,
    pub last_name: String,
    pub subject: String,
    pub grade: i64,
}

impl fmt::Display for StudentGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "('{}', '{}', '{}', {})",
            self.first_name, self.last_name, self.subject, self.grade
        )
    }
}

// ==========================================
// StudentAverage - 学生平均分
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct StudentAverage {
    #[tabled(skip)]
    pub student_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[tabled(display_with = "format_avg_cell")]
    pub avg_grade: f64,
}

impl fmt::Display for StudentAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "('{}', '{}', {})",
            self.first_name,
            self.last_name,
            format_avg(self.avg_grade)
        )
    }
}

// ==========================================
// SubjectAverage - 科目平均分
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct SubjectAverage {
    pub subject: String,
    #[tabled(display_with = "format_avg_cell")]
    pub avg_grade: f64,
}

impl fmt::Display for SubjectAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', {})", self.subject, format_avg(self.avg_grade))
    }
}

// ==========================================
// SubjectTopScorer - 单科最高分学生
// ==========================================
// 同分时每个并列学生各占一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct SubjectTopScorer {
    pub subject: String,
    pub first_name: String,
    pub last_name: String,
    pub grade: i64,
}

impl fmt::Display for SubjectTopScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "('{}', '{}', '{}', {})",
            self.subject, self.first_name, self.last_name, self.grade
        )
    }
}
