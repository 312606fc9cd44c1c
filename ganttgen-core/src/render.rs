//! Chart rendering
//!
//! Draws the flattened rows as a Gantt chart: one horizontal bar per
//! task, tinted full-width bands for group headers, a hatch overlay on
//! past-due bars, a dashed "today" marker, a per-group legend, and a
//! top-mounted date axis. Output goes to PNG and/or SVG files.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Duration, NaiveDate};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};

use crate::chart::{ChartConfig, Rgb};
use crate::schedule::{Row, ScheduleFile, TaskRow};
use crate::{Error, Result};

/// Requested output format(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raster output only
    Png,
    /// Vector output only
    Svg,
    /// Both raster and vector
    Both,
}

impl OutputFormat {
    /// File extensions written for this format choice.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            OutputFormat::Png => &["png"],
            OutputFormat::Svg => &["svg"],
            OutputFormat::Both => &["png", "svg"],
        }
    }
}

/// Render the chart for `rows` and write one file per requested format.
///
/// `today` determines the past-due treatment and the marker position;
/// `output` is the base filename, derived from the project name and
/// `today` when absent. Returns the paths written.
pub fn render_chart(
    file: &ScheduleFile,
    rows: &[Row],
    config: &ChartConfig,
    today: NaiveDate,
    output: Option<&str>,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    if !rows.iter().any(|r| matches!(r, Row::Task(_))) {
        return Err(no_tasks());
    }

    let n_rows = rows.len() as u32;
    let size = (config.width, (n_rows * config.row_height + 260).max(600));
    let base = output_base(output, &file.project.name, today);

    let mut written = Vec::new();
    for ext in format.extensions() {
        let path = PathBuf::from(format!("{base}.{ext}"));
        if *ext == "png" {
            let root = BitMapBackend::new(&path, size).into_drawing_area();
            draw(&root, file, rows, config, today)?;
            root.present().map_err(render_err)?;
        } else {
            let root = SVGBackend::new(&path, size).into_drawing_area();
            draw(&root, file, rows, config, today)?;
            root.present().map_err(render_err)?;
        }
        tracing::info!(path = %path.display(), "gantt chart saved");
        written.push(path);
    }

    Ok(written)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    file: &ScheduleFile,
    rows: &[Row],
    config: &ChartConfig,
    today: NaiveDate,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let tasks: Vec<&TaskRow> = rows
        .iter()
        .filter_map(|r| match r {
            Row::Task(t) => Some(t),
            Row::Group { .. } => None,
        })
        .collect();
    // render_chart rejects task-free schedules before we get here
    let earliest_start = tasks.iter().map(|t| t.start).min().ok_or_else(no_tasks)?;
    let latest_due = tasks.iter().map(|t| t.due).max().ok_or_else(no_tasks)?;

    let x_min_date = file
        .project
        .start
        .unwrap_or(earliest_start - Duration::days(5));
    // extra room on the right for end-date labels
    let x_max_date = latest_due + Duration::days(28);

    let mut title = file.project.name.clone();
    if let Some(subtitle) = &file.project.subtitle {
        title.push_str(" — ");
        title.push_str(subtitle);
    }
    let root = root
        .titled(
            &title,
            FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Bold),
        )
        .map_err(render_err)?;
    let root = root
        .titled(
            &format!("Generated {}", today.format("%B %d, %Y")),
            FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal)
                .color(&RGBColor(85, 85, 85)),
        )
        .map_err(render_err)?;

    let n = rows.len();
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 320)
        .set_label_area_size(LabelAreaPosition::Top, 50)
        .build_cartesian_2d(day(x_min_date)..day(x_max_date), -1.0..(n as f64))
        .map_err(render_err)?;

    // rows are drawn top-to-bottom: row i sits at y = n - 1 - i
    let row_y = |i: usize| (n - 1 - i) as f64;

    let y_formatter = |y: &f64| -> String {
        let pos = n as f64 - 1.0 - *y;
        let idx = pos.round();
        if idx < 0.0 || idx >= n as f64 || (pos - idx).abs() > 0.3 {
            return String::new();
        }
        match &rows[idx as usize] {
            Row::Group { label, .. } => format!("▸  {label}"),
            Row::Task(t) => t.label.clone(),
        }
    };
    let x_formatter = |x: &f64| day_label(*x);

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_labels(14)
        .x_label_formatter(&x_formatter)
        .y_labels(n + 1)
        .y_label_formatter(&y_formatter)
        .label_style(FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal))
        .draw()
        .map_err(render_err)?;

    let label_font = FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal);

    for (i, row) in rows.iter().enumerate() {
        let y = row_y(i);
        match row {
            Row::Group { color, .. } => {
                // full-width tinted band behind the group header
                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [
                            (day(x_min_date), y - 0.46),
                            (day(x_max_date), y + 0.46),
                        ],
                        rgb(*color).mix(0.12).filled(),
                    )))
                    .map_err(render_err)?;
            }
            Row::Task(t) => {
                let x_start = day(t.start);
                // zero-length tasks still get a visible one-day bar
                let width = (t.due - t.start).num_days().max(1) as f64;
                let x_end = x_start + width;
                let past = t.is_past_due(today);
                let alpha = if past { 0.40 } else { 0.85 };
                let color = rgb(t.color);

                chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(x_start, y - 0.31), (x_end, y + 0.31)],
                        color.mix(alpha).filled(),
                    )))
                    .map_err(render_err)?;

                if past {
                    draw_hatch(&mut chart, x_start, x_end, y, color)?;
                }

                let mut end_label = format!("{} {}", t.due.format("%b"), t.due.day());
                if let Some(assignee) = &t.assignee {
                    end_label.push_str("  ");
                    end_label.push_str(assignee);
                }
                chart
                    .draw_series(std::iter::once(Text::new(
                        end_label,
                        (day(t.due) + 0.8, y),
                        label_font
                            .color(&RGBColor(51, 51, 51))
                            .pos(Pos::new(HPos::Left, VPos::Center)),
                    )))
                    .map_err(render_err)?;
            }
        }
    }

    // today marker with its date pinned to the top of the chart
    let today_color = rgb(config.today_rgb()?);
    let x_today = day(today);
    chart
        .draw_series(std::iter::once(DashedPathElement::new(
            vec![(x_today, -1.0), (x_today, n as f64)],
            8,
            5,
            today_color.stroke_width(2),
        )))
        .map_err(render_err)?
        .label("Today")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], today_color.stroke_width(2))
        });
    chart
        .draw_series(std::iter::once(Text::new(
            today.format("%b %-d").to_string(),
            (x_today, n as f64 - 0.05),
            FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Bold)
                .color(&today_color)
                .pos(Pos::new(HPos::Center, VPos::Top)),
        )))
        .map_err(render_err)?;

    // legend entries: one patch per group, plus the past-due hatch key
    let palette = config.palette_colors()?;
    for (gi, group) in file.groups.iter().enumerate() {
        let color = rgb(palette[gi % palette.len()]);
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
            .map_err(render_err)?
            .label(&group.name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 18, y + 6)], color.mix(0.85).filled())
            });
    }
    chart
        .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())
        .map_err(render_err)?
        .label("Past due")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 6), (x + 18, y + 6)], RGBColor(136, 136, 136).mix(0.5))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(&WHITE.mix(0.92))
        .border_style(&BLACK.mix(0.3))
        .label_font(FontDesc::new(FontFamily::SansSerif, 13.0, FontStyle::Normal))
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Diagonal stripes across a past-due bar, one per day of width.
fn draw_hatch<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    x_start: f64,
    x_end: f64,
    y: f64,
    color: RGBColor,
) -> Result<()> {
    let stroke = color.mix(0.35).stroke_width(1);
    let mut x = x_start;
    while x < x_end {
        let x2 = (x + 0.8).min(x_end);
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, y - 0.31), (x2, y + 0.31)],
                stroke,
            )))
            .map_err(render_err)?;
        x += 1.0;
    }
    Ok(())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

/// Day-number x coordinate for a date.
fn day(d: NaiveDate) -> f64 {
    d.num_days_from_ce() as f64
}

/// Axis label for a day-number coordinate.
fn day_label(x: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%b %d").to_string())
        .unwrap_or_default()
}

/// Base output filename: `output` with any extension stripped, or
/// `<project>-<date>_Gantt` with spaces replaced by underscores.
fn output_base(output: Option<&str>, project_name: &str, today: NaiveDate) -> String {
    match output {
        Some(path) => Path::new(path).with_extension("").to_string_lossy().into_owned(),
        None => format!(
            "{}-{}_Gantt",
            project_name.replace(' ', "_"),
            today.format("%Y-%m-%d")
        ),
    }
}

fn render_err(e: impl std::fmt::Display) -> Error {
    Error::Render(e.to_string())
}

fn no_tasks() -> Error {
    Error::Validation("schedule contains no tasks".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(OutputFormat::Png.extensions(), ["png"]);
        assert_eq!(OutputFormat::Svg.extensions(), ["svg"]);
        assert_eq!(OutputFormat::Both.extensions(), ["png", "svg"]);
    }

    #[test]
    fn test_output_base_strips_extension() {
        let today = date(2025, 3, 1);
        assert_eq!(output_base(Some("chart.png"), "P", today), "chart");
        assert_eq!(output_base(Some("out/chart"), "P", today), "out/chart");
    }

    #[test]
    fn test_output_base_derived_from_project() {
        let today = date(2025, 3, 1);
        assert_eq!(
            output_base(None, "My Project", today),
            "My_Project-2025-03-01_Gantt"
        );
    }

    #[test]
    fn test_day_label_round_trips() {
        let d = date(2025, 1, 6);
        assert_eq!(day_label(day(d)), "Jan 06");
    }
}
