// ==========================================
// 学生成绩分析 - 图表输出
// ==========================================
// 后端: plotters SVGBackend（写文件，无交互窗口）
// 图表:
// - 学生平均分折线图 (average_per_student.svg)
// - 科目平均分柱状图 (average_per_subject.svg)
// - 各科最高分分组柱状图 (highest_per_subject.svg)
// ==========================================

mod error;
mod student_average;
mod subject_average;
mod top_scorer;

pub use error::{ChartError, ChartResult};
pub use student_average::render_student_average_chart;
pub use subject_average::render_subject_average_chart;
pub use top_scorer::render_top_scorer_chart;

use crate::perf::PerfGuard;
use crate::report::AnalysisReport;
use std::path::{Path, PathBuf};

pub const STUDENT_AVERAGE_FILE: &str = "average_per_student.svg";
pub const SUBJECT_AVERAGE_FILE: &str = "average_per_subject.svg";
pub const TOP_SCORER_FILE: &str = "highest_per_subject.svg";

pub(crate) const FONT_FAMILY: &str = "sans-serif";

/// 输出全部图表，返回生成的文件路径
pub fn render_all(report: &AnalysisReport, dir: &Path) -> ChartResult<Vec<PathBuf>> {
    let _perf = PerfGuard::new("chart.render_all");

    std::fs::create_dir_all(dir).map_err(|source| ChartError::OutputDir {
        path: dir.display().to_string(),
        source,
    })?;

    let student_path = dir.join(STUDENT_AVERAGE_FILE);
    render_student_average_chart(&report.student_averages, &student_path)?;

    let subject_path = dir.join(SUBJECT_AVERAGE_FILE);
    render_subject_average_chart(&report.subject_averages, &subject_path)?;

    let top_path = dir.join(TOP_SCORER_FILE);
    render_top_scorer_chart(&report.highest_per_subject, &top_path)?;

    Ok(vec![student_path, subject_path, top_path])
}

/// 类别轴: 第 i 个类别位于 x = i，坐标范围 [-0.5, n - 0.5]
pub(crate) fn category_range(n: usize) -> std::ops::Range<f64> {
    -0.5..(n as f64 - 0.5)
}

/// 类别轴刻度文字，仅整数位置显示类别名
pub(crate) fn category_label(names: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

/// 分数轴上限: 至少 100
pub(crate) fn grade_axis_max(max_value: f64) -> f64 {
    (max_value * 1.05).max(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let names = vec!["English".to_string(), "History".to_string()];
        assert_eq!(category_label(&names, 0.0), "English");
        assert_eq!(category_label(&names, 1.0000000001), "History");
        assert_eq!(category_label(&names, 0.5), "");
        assert_eq!(category_label(&names, -1.0), "");
        assert_eq!(category_label(&names, 2.0), "");
    }

    #[test]
    fn test_category_range_centers_categories() {
        let r = category_range(3);
        assert_eq!(r.start, -0.5);
        assert_eq!(r.end, 2.5);
    }

    #[test]
    fn test_grade_axis_max() {
        assert_eq!(grade_axis_max(95.0), 100.0);
        assert!(grade_axis_max(120.0) > 120.0);
    }
}
