// ==========================================
// 学生成绩分析 - 应用状态
// ==========================================
// 职责: 持有共享连接与各仓储实例
// ==========================================

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::db;
use crate::perf;
use crate::repository::{
    GradeReportRepository, GradeRepository, RepositoryResult, StudentRepository,
};
use crate::seed::{self, SeedOutcome};

/// 应用状态
///
/// 所有仓储共享同一个连接
pub struct AppState {
    /// 数据库路径（内存库为 ":memory:"）
    pub db_path: PathBuf,

    pub student_repo: StudentRepository,
    pub grade_repo: GradeRepository,
    pub report_repo: GradeReportRepository,
}

impl AppState {
    /// 打开数据库文件并初始化 schema
    pub fn open(db_path: &Path) -> RepositoryResult<Self> {
        tracing::info!(path = %db_path.display(), "打开数据库");
        let conn = db::open_sqlite_connection(db_path)?;
        Self::from_connection(conn, db_path.to_path_buf())
    }

    /// 内存数据库（测试用）
    pub fn open_in_memory() -> RepositoryResult<Self> {
        let conn = db::open_in_memory()?;
        Self::from_connection(conn, PathBuf::from(":memory:"))
    }

    fn from_connection(mut conn: Connection, db_path: PathBuf) -> RepositoryResult<Self> {
        perf::install_sqlite_tracing(&mut conn);
        db::init_schema(&conn)?;
        db::check_schema_version(&conn)?;

        let conn = Arc::new(Mutex::new(conn));
        Ok(Self {
            db_path,
            student_repo: StudentRepository::new(conn.clone()),
            grade_repo: GradeRepository::new(conn.clone()),
            report_repo: GradeReportRepository::new(conn),
        })
    }

    /// 写入示例数据（已有数据时跳过）
    pub fn seed(&self) -> RepositoryResult<SeedOutcome> {
        seed::seed_sample_data(&self.student_repo, &self.grade_repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_and_seed() {
        let state = AppState::open_in_memory().unwrap();
        assert_eq!(state.student_repo.count().unwrap(), 0);

        state.seed().unwrap();
        assert_eq!(state.student_repo.count().unwrap(), 5);
        assert_eq!(state.grade_repo.count().unwrap(), 15);
        assert_eq!(state.report_repo.average_per_student().unwrap().len(), 5);
    }

    #[test]
    fn test_open_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.db");

        AppState::open(&path).unwrap().seed().unwrap();
        let reopened = AppState::open(&path).unwrap();
        assert_eq!(reopened.student_repo.count().unwrap(), 5);
        assert_eq!(reopened.db_path, path);
    }
}
