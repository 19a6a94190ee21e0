// ==========================================
// 学生成绩分析 - 报告输出
// ==========================================
// 文本: 5 个查询段落（元组行）+ 合并数据表 + 各科最高分表
// JSON: 整份报告 (serde_json pretty)
// ==========================================

use crate::config::OutputFormat;
use crate::domain::report_row::format_avg;
use crate::i18n::{t, t_with_args};
use crate::report::AnalysisReport;
use std::io::{self, Write};
use tabled::Table;

pub struct ReportPrinter {
    format: OutputFormat,
}

impl ReportPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn print<W: Write>(&self, report: &AnalysisReport, out: &mut W) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => write_text(report, out),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)
            }
        }
    }
}

fn write_text<W: Write>(report: &AnalysisReport, out: &mut W) -> io::Result<()> {
    // 1. 全部成绩
    writeln!(out, "{}", t("report.student_grades"))?;
    for row in &report.student_grades {
        writeln!(out, "{}", row)?;
    }

    // 2. 学生平均分
    writeln!(out)?;
    writeln!(out, "{}", t("report.student_averages"))?;
    for row in &report.student_averages {
        writeln!(out, "{}", row)?;
    }

    // 3. 平均分最高
    writeln!(out)?;
    match &report.top_student {
        Some(top) => writeln!(
            out,
            "{}",
            t_with_args("report.top_student", &[("row", top.to_string().as_str())])
        )?,
        None => writeln!(out, "{}", t("report.no_top_student"))?,
    }

    // 4. 单科平均分
    writeln!(out)?;
    let avg = report
        .focus_subject_average
        .map(format_avg)
        .unwrap_or_else(|| t("report.no_value"));
    writeln!(
        out,
        "{}",
        t_with_args(
            "report.subject_average",
            &[("subject", report.focus_subject.as_str()), ("avg", avg.as_str())]
        )
    )?;

    // 5. 高分学生
    writeln!(out)?;
    let threshold = report.high_score_threshold.to_string();
    writeln!(
        out,
        "{}",
        t_with_args("report.high_scorers", &[("threshold", threshold.as_str())])
    )?;
    for row in &report.high_scorers {
        writeln!(out, "{}", row)?;
    }

    // 合并数据
    writeln!(out)?;
    writeln!(out, "{}", t("report.combined"))?;
    writeln!(out, "{}", Table::new(&report.student_grades))?;

    // 各科最高分
    writeln!(out)?;
    writeln!(out, "{}", t("report.highest_per_subject"))?;
    writeln!(out, "{}", Table::new(&report.highest_per_subject))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{set_locale, tests::LOCALE_TEST_LOCK};
    use crate::report::{build_report, ReportOptions};
    use crate::app::AppState;

    fn render(report: &AnalysisReport, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        ReportPrinter::new(format).print(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn report_from(seeded: bool) -> AnalysisReport {
        let state = AppState::open_in_memory().unwrap();
        if seeded {
            state.seed().unwrap();
        }
        build_report(&state.report_repo, &ReportOptions::default()).unwrap()
    }

    #[test]
    fn test_text_output_sections() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("en");

        let text = render(&report_from(true), OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "All students' names and their grades:");
        assert_eq!(lines[1], "('Alice', 'Johnson', 'Math', 95)");
        assert!(text.contains("\nAverage grade for each student:\n('Alice', 'Johnson', 91.0)\n"));
        assert!(text.contains("('David', 'Brown', 81.66666666666667)"));
        assert!(text.contains("Student with the highest average grade: ('Alice', 'Johnson', 91.0)"));
        assert!(text.contains("Average grade for Math: 86.8"));
        assert!(text.contains(
            "Students who scored above 90 in any subject:\n('Alice', 'Johnson', 'Math', 95)\n"
        ));
        assert!(text.contains("Combined Data:"));
        assert!(text.contains("first_name"));
    }

    #[test]
    fn test_text_output_empty_database() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("en");

        let text = render(&report_from(false), OutputFormat::Text);
        assert!(text.contains("Student with the highest average grade: None"));
        assert!(text.contains("Average grade for Math: None"));
    }

    #[test]
    fn test_text_output_empty_database_zh_cn() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        set_locale("zh-CN");

        let text = render(&report_from(false), OutputFormat::Text);
        set_locale("en");

        assert!(text.contains("平均分最高的学生: 无"));
        assert!(text.contains("Math 科目平均分: 无"));
        assert!(!text.contains("None"));
    }

    #[test]
    fn test_json_output() {
        let text = render(&report_from(true), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["student_grades"].as_array().unwrap().len(), 15);
        assert_eq!(value["top_student"]["first_name"], "Alice");
        assert_eq!(value["focus_subject"], "Math");
        assert_eq!(value["highest_per_subject"][0]["subject"], "English");
    }
}
