// ==========================================
// 学生成绩分析 - 成绩领域模型
// ==========================================
// 对齐: grades 表 (student_id 外键 -> students)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Grade - 单科成绩
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub grade_id: i64,   // 主键 (AUTOINCREMENT)
    pub student_id: i64, // 所属学生
    pub subject: String, // 科目
    pub grade: i64,      // 分数
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGrade {
    pub student_id: i64,
    pub subject: String,
    pub grade: i64,
}

impl NewGrade {
    pub fn new(student_id: i64, subject: &str, grade: i64) -> Self {
        Self {
            student_id,
            subject: subject.to_string(),
            grade,
        }
    }
}
