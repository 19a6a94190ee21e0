// ==========================================
// 完整分析流程端到端测试
// ==========================================
// 测试目标: 建库 → 写入 → 查询输出 → CSV 导出 → 图表
// ==========================================


use std::fs;
use std::sync::Mutex;
use student_grades::chart::{STUDENT_AVERAGE_FILE, SUBJECT_AVERAGE_FILE, TOP_SCORER_FILE};
use student_grades::config::OutputFormat;
use student_grades::export::{COMBINED_FILE, GRADES_FILE, STUDENTS_FILE};
use student_grades::{logging, run, SeedOutcome};

// run() 会设置全局 locale，本文件内的用例串行执行
static RUN_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_full_run_text_output() {
    let _guard = RUN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    logging::init_test();

    let (dir, _db_path) = test_helpers::create_test_dir().unwrap();
    let config = test_helpers::test_config(dir.path());

    let mut out = Vec::new();
    let summary = run(&config, &mut out).expect("分析应该成功");
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        summary.seed,
        SeedOutcome::Inserted {
            students: 5,
            grades: 15
        }
    );

    let expected_head = "\
All students' names and their grades:
('Alice', 'Johnson', 'Math', 95)
('Alice', 'Johnson', 'English', 88)
('Alice', 'Johnson', 'History', 90)
('Bob', 'Smith', 'Math', 82)
('Bob', 'Smith', 'English', 76)
('Bob', 'Smith', 'History', 85)
('Carol', 'White', 'Math', 91)
('Carol', 'White', 'English', 89)
('Carol', 'White', 'History', 93)
('David', 'Brown', 'Math', 77)
('David', 'Brown', 'English', 85)
('David', 'Brown', 'History', 83)
('Eve', 'Davis', 'Math', 89)
('Eve', 'Davis', 'English', 92)
('Eve', 'Davis', 'History', 87)

Average grade for each student:
('Alice', 'Johnson', 91.0)
('Bob', 'Smith', 81.0)
('Carol', 'White', 91.0)
('David', 'Brown', 81.66666666666667)
('Eve', 'Davis', 89.33333333333333)

Student with the highest average grade: ('Alice', 'Johnson', 91.0)

Average grade for Math: 86.8

Students who scored above 90 in any subject:
('Alice', 'Johnson', 'Math', 95)
('Carol', 'White', 'Math', 91)
('Carol', 'White', 'History', 93)
('Eve', 'Davis', 'English', 92)
";
    assert!(
        text.starts_with(expected_head),
        "unexpected report:\n{}",
        text
    );

    // 图表
    assert_eq!(summary.chart_files.len(), 3);
    let charts = dir.path().join("charts");
    for (file, title) in [
        (STUDENT_AVERAGE_FILE, "Average Grades for Each Student"),
        (SUBJECT_AVERAGE_FILE, "Average Grade for Each Subject"),
        (TOP_SCORER_FILE, "Student with the Highest Grade in Each Subject"),
    ] {
        let svg = fs::read_to_string(charts.join(file)).unwrap();
        assert!(svg.contains("<svg"), "{} is not an svg", file);
        assert!(svg.contains(title), "{} is missing its title", file);
    }
}

#[test]
fn test_rerun_does_not_duplicate_rows() {
    let _guard = RUN_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let (dir, _db_path) = test_helpers::create_test_dir().unwrap();
    let mut config = test_helpers::test_config(dir.path());
    config.render_charts = false;
    config.output_format = OutputFormat::Json;

    run(&config, &mut Vec::new()).unwrap();
    let mut out = Vec::new();
    let summary = run(&config, &mut out).unwrap();

    assert_eq!(summary.seed, SeedOutcome::AlreadySeeded { students: 5 });
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["student_grades"].as_array().unwrap().len(), 15);
}

#[test]
fn test_reset_backs_up_and_reseeds() {
    let _guard = RUN_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let (dir, db_path) = test_helpers::create_test_dir().unwrap();
    let mut config = test_helpers::test_config(dir.path());
    config.render_charts = false;

    run(&config, &mut Vec::new()).unwrap();

    config.reset = true;
    let summary = run(&config, &mut Vec::new()).unwrap();

    let backup = summary.backup_path.expect("应生成备份文件");
    assert!(backup.exists());
    assert!(db_path.exists());
    assert_eq!(
        summary.seed,
        SeedOutcome::Inserted {
            students: 5,
            grades: 15
        }
    );
}

#[test]
fn test_csv_export() {
    let _guard = RUN_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let (dir, _db_path) = test_helpers::create_test_dir().unwrap();
    let mut config = test_helpers::test_config(dir.path());
    config.render_charts = false;
    config.export_dir = Some(dir.path().join("export"));

    let summary = run(&config, &mut Vec::new()).unwrap();
    assert_eq!(summary.exported_files.len(), 3);

    let export = dir.path().join("export");
    let students = fs::read_to_string(export.join(STUDENTS_FILE)).unwrap();
    assert_eq!(students.lines().count(), 6);
    assert_eq!(students.lines().nth(1), Some("1,Alice,Johnson"));

    let grades = fs::read_to_string(export.join(GRADES_FILE)).unwrap();
    assert_eq!(grades.lines().next(), Some("grade_id,student_id,subject,grade"));
    assert_eq!(grades.lines().count(), 16);

    let combined = fs::read_to_string(export.join(COMBINED_FILE)).unwrap();
    assert_eq!(combined.lines().last(), Some("Eve,Davis,History,87"));
}
