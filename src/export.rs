// ==========================================
// 学生成绩分析 - CSV 导出
// ==========================================
// 输出: students.csv / grades.csv / combined.csv (含表头)
// 工具: csv::Writer + serde
// ==========================================

use crate::domain::{Grade, Student, StudentGrade};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STUDENTS_FILE: &str = "students.csv";
pub const GRADES_FILE: &str = "grades.csv";
pub const COMBINED_FILE: &str = "combined.csv";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出目录不可用: {path}: {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 写入失败 ({path}): {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// 可导出为 CSV 的行类型
///
/// 表头显式写出，空表也保留表头行；列顺序与 serde 字段顺序一致
pub trait CsvRecord: Serialize {
    const HEADER: &'static [&'static str];
}

impl CsvRecord for Student {
    const HEADER: &'static [&'static str] = &["student_id", "first_name", "last_name"];
}

impl CsvRecord for Grade {
    const HEADER: &'static [&'static str] = &["grade_id", "student_id", "subject", "grade"];
}

impl CsvRecord for StudentGrade {
    const HEADER: &'static [&'static str] = &["first_name", "last_name", "subject", "grade"];
}

/// 写出三张表，返回文件路径
pub fn export_csv(
    dir: &Path,
    students: &[Student],
    grades: &[Grade],
    combined: &[StudentGrade],
) -> ExportResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::OutputDir {
        path: dir.display().to_string(),
        source,
    })?;

    let files = vec![
        write_records(&dir.join(STUDENTS_FILE), students)?,
        write_records(&dir.join(GRADES_FILE), grades)?,
        write_records(&dir.join(COMBINED_FILE), combined)?,
    ];
    Ok(files)
}

fn write_records<T: CsvRecord>(path: &Path, records: &[T]) -> ExportResult<PathBuf> {
    let csv_err = |source: csv::Error| ExportError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;
    writer.write_record(T::HEADER).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| csv_err(e.into()))?;

    tracing::debug!(path = %path.display(), rows = records.len(), "csv written");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_csv_writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let students = vec![Student {
            student_id: 1,
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
        }];
        let grades = vec![Grade {
            grade_id: 1,
            student_id: 1,
            subject: "Math".to_string(),
            grade: 95,
        }];
        let combined = vec![StudentGrade {
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            subject: "Math".to_string(),
            grade: 95,
        }];

        let files = export_csv(dir.path(), &students, &grades, &combined).unwrap();
        assert_eq!(files.len(), 3);

        let text = std::fs::read_to_string(dir.path().join(COMBINED_FILE)).unwrap();
        assert_eq!(text, "first_name,last_name,subject,grade\nAlice,Johnson,Math,95\n");

        let text = std::fs::read_to_string(dir.path().join(STUDENTS_FILE)).unwrap();
        assert_eq!(text, "student_id,first_name,last_name\n1,Alice,Johnson\n");

        let text = std::fs::read_to_string(dir.path().join(GRADES_FILE)).unwrap();
        assert_eq!(text, "grade_id,student_id,subject,grade\n1,1,Math,95\n");
    }

    #[test]
    fn test_export_csv_empty_tables_keep_headers() {
        let dir = tempfile::tempdir().unwrap();
        let students = vec![Student {
            student_id: 1,
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
        }];

        export_csv(dir.path(), &students, &[], &[]).unwrap();

        let text = std::fs::read_to_string(dir.path().join(GRADES_FILE)).unwrap();
        assert_eq!(text, "grade_id,student_id,subject,grade\n");
        let text = std::fs::read_to_string(dir.path().join(COMBINED_FILE)).unwrap();
        assert_eq!(text, "first_name,last_name,subject,grade\n");
    }
}
