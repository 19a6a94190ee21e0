// ==========================================
// 学生成绩分析 - 示例数据写入
// ==========================================
// 数据: 5 名学生 × 3 科成绩 (固定字面量)
// 约束: 经由仓储批量写入（每表单事务）；students 非空时跳过，避免重复运行产生重复数据
// ==========================================

use crate::domain::grade::NewGrade;
use crate::domain::student::NewStudent;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::{GradeRepository, StudentRepository};
use serde::Serialize;

/// 学生 (名, 姓)，按插入顺序
pub const SAMPLE_STUDENTS: [(&str, &str); 5] = [
    ("Alice", "Johnson"),
    ("Bob", "Smith"),
    ("Carol", "White"),
    ("David", "Brown"),
    ("Eve", "Davis"),
];

/// 成绩 (学生序号, 科目, 分数)
///
/// 学生序号从 1 开始，对应 SAMPLE_STUDENTS 的位置，写入时映射为实际 student_id
pub const SAMPLE_GRADES: [(usize, &str, i64); 15] = [
    (1, "Math", 95),
    (1, "English", 88),
    (1, "History", 90),
    (2, "Math", 82),
    (2, "English", 76),
    (2, "History", 85),
    (3, "Math", 91),
    (3, "English", 89),
    (3, "History", 93),
    (4, "Math", 77),
    (4, "English", 85),
    (4, "History", 83),
    (5, "Math", 89),
    (5, "English", 92),
    (5, "History", 87),
];

/// 写入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// 本次写入了数据
    Inserted { students: usize, grades: usize },
    /// 已有数据，未写入
    AlreadySeeded { students: i64 },
}

/// 写入示例数据
///
/// students 非空时跳过；学生序号按 insert_batch 返回的 student_id 映射
pub fn seed_sample_data(
    student_repo: &StudentRepository,
    grade_repo: &GradeRepository,
) -> RepositoryResult<SeedOutcome> {
    let existing = student_repo.count()?;
    if existing > 0 {
        tracing::info!(students = existing, "数据库已有学生数据，跳过示例数据写入");
        return Ok(SeedOutcome::AlreadySeeded { students: existing });
    }

    let students: Vec<NewStudent> = SAMPLE_STUDENTS
        .iter()
        .map(|(first_name, last_name)| NewStudent::new(first_name, last_name))
        .collect();
    let student_ids = student_repo.insert_batch(&students)?;

    let grades = SAMPLE_GRADES
        .iter()
        .map(|(ordinal, subject, grade)| {
            let student_id = student_ids.get(ordinal - 1).copied().ok_or_else(|| {
                RepositoryError::NotFound {
                    entity: "Student".to_string(),
                    id: format!("#{}", ordinal),
                }
            })?;
            Ok(NewGrade::new(student_id, subject, *grade))
        })
        .collect::<RepositoryResult<Vec<_>>>()?;
    let inserted = grade_repo.insert_batch(&grades)?;

    tracing::info!(students = student_ids.len(), grades = inserted, "示例数据已写入");
    Ok(SeedOutcome::Inserted {
        students: student_ids.len(),
        grades: inserted,
    })
}
