// ==========================================
// 学生成绩分析 - 分析报告
// ==========================================
// 职责: 依次执行全部统计查询并汇总为 AnalysisReport
// 输出: 文本 (元组行 + 表格) / JSON，见 printer
// ==========================================

pub mod printer;

pub use printer::ReportPrinter;

use crate::domain::report_row::{StudentAverage, StudentGrade, SubjectAverage, SubjectTopScorer};
use crate::perf::PerfGuard;
use crate::repository::{GradeReportRepository, RepositoryResult};
use serde::{Deserialize, Serialize};

/// 报告参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// 单科平均分统计的科目
    pub focus_subject: String,
    /// 高分阈值（严格大于）
    pub high_score_threshold: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            focus_subject: "Math".to_string(),
            high_score_threshold: 90,
        }
    }
}

/// 分析报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub student_grades: Vec<StudentGrade>,
    pub student_averages: Vec<StudentAverage>,
    pub top_student: Option<StudentAverage>,
    pub focus_subject: String,
    pub focus_subject_average: Option<f64>,
    pub high_score_threshold: i64,
    pub high_scorers: Vec<StudentGrade>,
    pub subject_averages: Vec<SubjectAverage>,
    pub highest_per_subject: Vec<SubjectTopScorer>,
}

/// 执行全部查询（每个查询执行一次）
pub fn build_report(
    repo: &GradeReportRepository,
    options: &ReportOptions,
) -> RepositoryResult<AnalysisReport> {
    let _perf = PerfGuard::new("report.build");

    let report = AnalysisReport {
        student_grades: repo.list_student_grades()?,
        student_averages: repo.average_per_student()?,
        top_student: repo.top_student()?,
        focus_subject: options.focus_subject.clone(),
        focus_subject_average: repo.subject_average(&options.focus_subject)?,
        high_score_threshold: options.high_score_threshold,
        high_scorers: repo.grades_above(options.high_score_threshold)?,
        subject_averages: repo.average_per_subject()?,
        highest_per_subject: repo.highest_per_subject()?,
    };

    tracing::debug!(
        rows = report.student_grades.len(),
        students = report.student_averages.len(),
        subjects = report.subject_averages.len(),
        "report built"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;

    fn seeded_repo() -> GradeReportRepository {
        let state = AppState::open_in_memory().unwrap();
        state.seed().unwrap();
        state.report_repo
    }

    #[test]
    fn test_build_report_default_options() {
        let report = build_report(&seeded_repo(), &ReportOptions::default()).unwrap();

        assert_eq!(report.student_grades.len(), 15);
        assert_eq!(report.student_averages.len(), 5);
        assert_eq!(report.top_student.as_ref().unwrap().first_name, "Alice");
        assert_eq!(report.focus_subject, "Math");
        assert!((report.focus_subject_average.unwrap() - 86.8).abs() < 1e-9);
        assert_eq!(report.high_scorers.len(), 4);
        assert_eq!(report.subject_averages.len(), 3);
        assert_eq!(report.highest_per_subject.len(), 3);
    }

    #[test]
    fn test_build_report_custom_options() {
        let options = ReportOptions {
            focus_subject: "English".to_string(),
            high_score_threshold: 88,
        };
        let report = build_report(&seeded_repo(), &options).unwrap();

        assert!((report.focus_subject_average.unwrap() - 86.0).abs() < 1e-9);
        // 95, 90, 91, 89, 93, 89, 92 > 88
        assert_eq!(report.high_scorers.len(), 7);
    }
}
