// ==========================================
// 学生成绩分析 - 学生领域模型
// ==========================================
// 对齐: students 表
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Student - 学生
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: i64,    // 主键 (AUTOINCREMENT)
    pub first_name: String, // 名
    pub last_name: String,  // 姓
}

// ==========================================
// NewStudent - 待插入学生 (无主键)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
}

impl NewStudent {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}
