// ==========================================
// 图表输出测试
// ==========================================


use std::fs;
use student_grades::chart::{
    render_all, render_student_average_chart, render_subject_average_chart,
    render_top_scorer_chart, ChartError,
};
use student_grades::{build_report, ReportOptions, SubjectTopScorer};

#[test]
fn test_render_all_from_seeded_report() {
    let repo = test_helpers::seeded_report_repo().unwrap();
    let report = build_report(&repo, &ReportOptions::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("charts");
    let files = render_all(&report, &out).unwrap();

    assert_eq!(files.len(), 3);
    for file in &files {
        let svg = fs::read_to_string(file).unwrap();
        assert!(svg.contains("<svg"));
    }

    // x 轴标签为学生名 / 科目名
    let students = fs::read_to_string(&files[0]).unwrap();
    assert!(students.contains("Carol"));
    let subjects = fs::read_to_string(&files[1]).unwrap();
    assert!(subjects.contains("History"));
    // 图例为学生名，标题 "Student" 与图表标题各出现一次
    let top = fs::read_to_string(&files[2]).unwrap();
    assert!(top.contains("Eve"));
    assert_eq!(top.matches("Student").count(), 2);
}

#[test]
fn test_empty_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.svg");

    assert!(matches!(
        render_student_average_chart(&[], &path),
        Err(ChartError::NoData(_))
    ));
    assert!(matches!(
        render_subject_average_chart(&[], &path),
        Err(ChartError::NoData(_))
    ));
    assert!(matches!(
        render_top_scorer_chart(&[], &path),
        Err(ChartError::NoData(_))
    ));
}

#[test]
fn test_top_scorer_chart_with_tie() {
    let rows = vec![
        SubjectTopScorer {
            subject: "Math".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            grade: 95,
        },
        SubjectTopScorer {
            subject: "Math".to_string(),
            first_name: "Carol".to_string(),
            last_name: "White".to_string(),
            grade: 95,
        },
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tie.svg");
    render_top_scorer_chart(&rows, &path).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Alice"));
    assert!(svg.contains("Carol"));
}
