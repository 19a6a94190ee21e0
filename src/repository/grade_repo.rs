// ==========================================
// 学生成绩分析 - 成绩数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 约束: student_id 受外键约束 (PRAGMA foreign_keys = ON)
// ==========================================

use crate::domain::grade::{Grade, NewGrade};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex, MutexGuard};

/// 成绩仓储
/// 职责: 管理 grades 表的写入与读取
pub struct GradeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl GradeRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 批量插入（单事务）
    ///
    /// 任一行失败则整批回滚
    pub fn insert_batch(&self, grades: &[NewGrade]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        let mut inserted = 0;
        {
            let mut stmt = tx
                .prepare("INSERT INTO grades (student_id, subject, grade) VALUES (?1, ?2, ?3)")?;
            for grade in grades {
                inserted += stmt.execute(params![grade.student_id, grade.subject, grade.grade])?;
            }
        }
        tx.commit()?;
        Ok(inserted)
    }

    pub fn list_all(&self) -> RepositoryResult<Vec<Grade>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT grade_id, student_id, subject, grade FROM grades ORDER BY grade_id",
        )?;
        let grades = stmt
            .query_map([], map_grade)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(grades)
    }

    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let n = conn.query_row("SELECT COUNT(*) FROM grades", [], |row| row.get(0))?;
        Ok(n)
    }
}

fn map_grade(row: &rusqlite::Row<'_>) -> SqliteResult<Grade> {
    Ok(Grade {
        grade_id: row.get(0)?,
        student_id: row.get(1)?,
        subject: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        grade: row.get(3)?,
    })
}
