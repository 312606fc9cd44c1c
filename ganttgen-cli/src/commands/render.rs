//! Render command - read the schedule and write the chart image(s)

use std::path::PathBuf;

use chrono::Local;
use clap::{Args, ValueEnum};
use ganttgen_core::{build_rows, load_schedule, render_chart, ChartConfig, OutputFormat};

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// YAML task file
    #[arg(long, default_value = "tasks.yaml")]
    pub tasks: PathBuf,

    /// Output base filename (default: derived from project name and date)
    #[arg(long)]
    pub output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "png")]
    pub format: Format,
}

/// Image format choice for `--format`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// PNG raster image
    Png,
    /// SVG vector image
    Svg,
    /// Both PNG and SVG
    Both,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Png => OutputFormat::Png,
            Format::Svg => OutputFormat::Svg,
            Format::Both => OutputFormat::Both,
        }
    }
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            tasks: PathBuf::from("tasks.yaml"),
            output: None,
            format: Format::Png,
        }
    }
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self, verbose: bool, config: &ChartConfig) -> anyhow::Result<()> {
        if verbose {
            tracing::info!(
                tasks = %self.tasks.display(),
                format = ?self.format,
                "starting render"
            );
        }

        let file = load_schedule(&self.tasks)?;
        let rows = build_rows(&file, config)?;
        let today = Local::now().date_naive();

        let written = render_chart(
            &file,
            &rows,
            config,
            today,
            self.output.as_deref(),
            self.format.into(),
        )?;

        for path in written {
            println!("Gantt chart saved → {}", path.display());
        }

        Ok(())
    }
}
