// ==========================================
// 学生平均分折线图
// ==========================================

use super::{category_label, category_range, ChartError, ChartResult, FONT_FAMILY};
use crate::domain::report_row::StudentAverage;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (800, 600);

/// 折线 + 圆点标记，x 轴为学生名
pub fn render_student_average_chart(rows: &[StudentAverage], path: &Path) -> ChartResult<()> {
    if rows.is_empty() {
        return Err(ChartError::NoData("average_per_student"));
    }

    let names: Vec<String> = rows.iter().map(|r| r.first_name.clone()).collect();
    let points: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.avg_grade))
        .collect();

    let (min, max) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let pad = ((max - min) * 0.1).max(1.0);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Grades for Each Student", (FONT_FAMILY, 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(category_range(rows.len()), (min - pad)..(max + pad))?;

    chart
        .configure_mesh()
        .x_labels(rows.len() + 1)
        .x_label_formatter(&|x| category_label(&names, *x))
        .x_desc("Student")
        .y_desc("Average Grade")
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 5, BLUE.filled())),
    )?;

    root.present()?;
    tracing::debug!(path = %path.display(), students = rows.len(), "chart written");
    Ok(())
}
