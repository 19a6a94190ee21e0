// ==========================================
// 学生成绩分析 - 学生数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::student::{NewStudent, Student};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// StudentRepository - 学生仓储
// ==========================================
/// 职责: 管理 students 表的写入与读取
pub struct StudentRepository {
    conn: Arc<Mutex<Connection>>,
}

impl StudentRepository {
    /// 从已有连接创建仓储实例
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 批量插入（单事务），按输入顺序返回 student_id
    pub fn insert_batch(&self, students: &[NewStudent]) -> RepositoryResult<Vec<i64>> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;
        let mut ids = Vec::with_capacity(students.len());
        {
            let mut stmt =
                tx.prepare("INSERT INTO students (first_name, last_name) VALUES (?1, ?2)")?;
            for student in students {
                stmt.execute(params![student.first_name, student.last_name])?;
                ids.push(tx.last_insert_rowid());
            }
        }
        tx.commit()?;
        Ok(ids)
    }

    /// 查询全部学生（按主键升序）
    pub fn list_all(&self) -> RepositoryResult<Vec<Student>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT student_id, first_name, last_name FROM students ORDER BY student_id",
        )?;
        let students = stmt
            .query_map([], map_student)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(students)
    }

    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let n = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(n)
    }
}

fn map_student(row: &rusqlite::Row<'_>) -> SqliteResult<Student> {
    Ok(Student {
        student_id: row.get(0)?,
        first_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        last_name: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}
