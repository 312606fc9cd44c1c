//! Check command - resolve the schedule and print the rows

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use ganttgen_core::{build_rows, load_schedule, ChartConfig, Row};

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// YAML task file
    #[arg(long, default_value = "tasks.yaml")]
    pub tasks: PathBuf,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, verbose: bool, config: &ChartConfig) -> anyhow::Result<()> {
        let file = load_schedule(&self.tasks)?;
        let rows = build_rows(&file, config)?;
        let today = Local::now().date_naive();

        if verbose {
            tracing::info!(rows = rows.len(), "schedule resolved");
        }

        println!("{}", file.project.name);
        if let Some(subtitle) = &file.project.subtitle {
            println!("{subtitle}");
        }
        println!();

        let mut tasks = 0;
        let mut past_due = 0;
        for row in &rows {
            match row {
                Row::Group { label, .. } => println!("{label}"),
                Row::Task(task) => {
                    tasks += 1;
                    let assignee = task
                        .assignee
                        .as_deref()
                        .map(|a| format!("  [{a}]"))
                        .unwrap_or_default();
                    let flag = if task.is_past_due(today) {
                        past_due += 1;
                        "  PAST DUE"
                    } else {
                        ""
                    };
                    println!(
                        "  {:<12} {:<32} {} → {}{}{}",
                        task.id, task.label, task.start, task.due, assignee, flag
                    );
                }
            }
        }

        println!();
        println!("{} task(s), {} past due", tasks, past_due);

        Ok(())
    }
}
