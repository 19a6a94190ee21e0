// ==========================================
// 科目平均分柱状图
// ==========================================

use super::{category_label, category_range, grade_axis_max, ChartError, ChartResult, FONT_FAMILY};
use crate::domain::report_row::SubjectAverage;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (300, 500);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const BAR_WIDTH: f64 = 0.8;

pub fn render_subject_average_chart(rows: &[SubjectAverage], path: &Path) -> ChartResult<()> {
    if rows.is_empty() {
        return Err(ChartError::NoData("average_per_subject"));
    }

    let names: Vec<String> = rows.iter().map(|r| r.subject.clone()).collect();
    let y_max = grade_axis_max(rows.iter().map(|r| r.avg_grade).fold(0.0, f64::max));

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Grade for Each Subject", (FONT_FAMILY, 14))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(45)
        .build_cartesian_2d(category_range(rows.len()), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(rows.len() + 1)
        .x_label_formatter(&|x| category_label(&names, *x))
        .x_desc("Subject")
        .y_desc("Average Grade")
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, r)| {
        let center = i as f64;
        Rectangle::new(
            [
                (center - BAR_WIDTH / 2.0, 0.0),
                (center + BAR_WIDTH / 2.0, r.avg_grade),
            ],
            ORANGE.filled(),
        )
    }))?;

    root.present()?;
    tracing::debug!(path = %path.display(), subjects = rows.len(), "chart written");
    Ok(())
}
