// ==========================================
// 各科最高分分组柱状图
// ==========================================
// 每个学生一种颜色；同一科目内按学生错开 (dodge)
// 只画水平网格线；图例首行为标题 "Student"
// ==========================================

use super::{category_label, category_range, grade_axis_max, ChartError, ChartResult, FONT_FAMILY};
use crate::domain::report_row::SubjectTopScorer;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (500, 500);
const GROUP_WIDTH: f64 = 0.8;
const LEGEND_TITLE: &str = "Student";

const PALETTE: [RGBColor; 6] = [
    RGBColor(76, 114, 176),
    RGBColor(221, 132, 82),
    RGBColor(85, 168, 104),
    RGBColor(196, 78, 82),
    RGBColor(129, 114, 179),
    RGBColor(147, 120, 96),
];

/// 按首次出现顺序去重
fn distinct_in_order<'a, I: Iterator<Item = &'a str>>(items: I) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.iter().any(|s| s == item) {
            out.push(item.to_string());
        }
    }
    out
}

pub fn render_top_scorer_chart(rows: &[SubjectTopScorer], path: &Path) -> ChartResult<()> {
    if rows.is_empty() {
        return Err(ChartError::NoData("highest_per_subject"));
    }

    let subjects = distinct_in_order(rows.iter().map(|r| r.subject.as_str()));
    let students = distinct_in_order(rows.iter().map(|r| r.first_name.as_str()));
    let slot_width = GROUP_WIDTH / students.len() as f64;
    let y_max = grade_axis_max(rows.iter().map(|r| r.grade as f64).fold(0.0, f64::max));

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Student with the Highest Grade in Each Subject", (FONT_FAMILY, 16))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(45)
        .build_cartesian_2d(category_range(subjects.len()), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(subjects.len() + 1)
        .x_label_formatter(&|x| category_label(&subjects, *x))
        .x_desc("Subject")
        .y_desc("Highest Grade")
        .draw()?;

    // 空序列只占一行图例，作为标题
    chart
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
        .label(LEGEND_TITLE)
        .legend(|(x, y)| EmptyElement::at((x, y)));

    for (slot, student) in students.iter().enumerate() {
        let color = PALETTE[slot % PALETTE.len()];
        let bars: Vec<Rectangle<(f64, f64)>> = rows
            .iter()
            .filter(|r| &r.first_name == student)
            .filter_map(|r| {
                let group = subjects.iter().position(|s| s == &r.subject)? as f64;
                let left = group - GROUP_WIDTH / 2.0 + slot as f64 * slot_width;
                Some(Rectangle::new(
                    [(left, 0.0), (left + slot_width, r.grade as f64)],
                    color.filled(),
                ))
            })
            .collect();

        chart
            .draw_series(bars)?
            .label(student.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    tracing::debug!(path = %path.display(), subjects = subjects.len(), "chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_in_order() {
        let got = distinct_in_order(["Math", "English", "Math", "History"].into_iter());
        assert_eq!(got, ["Math", "English", "History"]);
    }
}
