// ==========================================
// 学生成绩分析 - 统计查询仓储
// ==========================================
// 职责: 固定的分析查询 (JOIN / GROUP BY / AVG / MAX)
// 约束: 所有带输入的查询使用参数化
// 约束: 结果顺序确定 (显式 ORDER BY)
// ==========================================

use crate::domain::report_row::{StudentAverage, StudentGrade, SubjectAverage, SubjectTopScorer};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::sync::{Arc, Mutex, MutexGuard};

const STUDENT_AVERAGE_SQL: &str = r#"
SELECT students.student_id, students.first_name, students.last_name, AVG(grades.grade) AS avg_grade
FROM students
JOIN grades ON students.student_id = grades.student_id
GROUP BY students.student_id
"#;

/// 成绩统计仓储
pub struct GradeReportRepository {
    conn: Arc<Mutex<Connection>>,
}

impl GradeReportRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 查询 1: 全部学生姓名及各科成绩
    pub fn list_student_grades(&self) -> RepositoryResult<Vec<StudentGrade>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT students.first_name, students.last_name, grades.subject, grades.grade
            FROM students
            JOIN grades ON students.student_id = grades.student_id
            ORDER BY grades.grade_id
            "#,
        )?;
        let rows = stmt
            .query_map([], map_student_grade)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 查询 2: 每个学生的平均分（按 student_id 升序）
    pub fn average_per_student(&self) -> RepositoryResult<Vec<StudentAverage>> {
        let conn = self.get_conn()?;
        let sql = format!("{} ORDER BY students.student_id", STUDENT_AVERAGE_SQL);
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], map_student_average)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 查询 3: 平均分最高的学生
    ///
    /// 平均分相同时取 student_id 最小者；无成绩数据时返回 None
    pub fn top_student(&self) -> RepositoryResult<Option<StudentAverage>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "{} ORDER BY avg_grade DESC, students.student_id ASC LIMIT 1",
            STUDENT_AVERAGE_SQL
        );
        let top = conn.query_row(&sql, [], map_student_average).optional()?;
        Ok(top)
    }

    /// 查询 4: 指定科目的平均分（无匹配行时为 None）
    pub fn subject_average(&self, subject: &str) -> RepositoryResult<Option<f64>> {
        let conn = self.get_conn()?;
        let avg: Option<f64> = conn.query_row(
            "SELECT AVG(grade) AS avg_subject_grade FROM grades WHERE subject = ?1",
            params![subject],
            |row| row.get(0),
        )?;
        Ok(avg)
    }

    /// 查询 5: 任一科目分数高于阈值的学生
    pub fn grades_above(&self, threshold: i64) -> RepositoryResult<Vec<StudentGrade>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT students.first_name, students.last_name, grades.subject, grades.grade
            FROM students
            JOIN grades ON students.student_id = grades.student_id
            WHERE grades.grade > ?1
            ORDER BY grades.grade_id
            "#,
        )?;
        let rows = stmt
            .query_map(params![threshold], map_student_grade)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 各科目平均分（按科目名升序）
    pub fn average_per_subject(&self) -> RepositoryResult<Vec<SubjectAverage>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT subject, AVG(grade) AS avg_grade
            FROM grades
            GROUP BY subject
            ORDER BY subject
            "#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SubjectAverage {
                    subject: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    avg_grade: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// 各科目最高分学生（并列时返回多行）
    pub fn highest_per_subject(&self) -> RepositoryResult<Vec<SubjectTopScorer>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT grades.subject, students.first_name, students.last_name, grades.grade
            FROM grades
            JOIN students ON grades.student_id = students.student_id
            WHERE (grades.subject, grades.grade) IN (
                SELECT subject, MAX(grade)
                FROM grades
                GROUP BY subject
            )
            ORDER BY grades.subject, students.student_id
            "#,
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SubjectTopScorer {
                    subject: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    first_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    last_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    grade: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }
}

fn map_student_grade(row: &rusqlite::Row<'_>) -> SqliteResult<StudentGrade> {
    Ok(StudentGrade {
        first_name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
        last_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        subject: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        grade: row.get(3)?,
    })
}

fn map_student_average(row: &rusqlite::Row<'_>) -> SqliteResult<StudentAverage> {
    Ok(StudentAverage {
        student_id: row.get(0)?,
        first_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        last_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        avg_grade: row.get(3)?,
    })
}
