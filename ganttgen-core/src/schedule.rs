//! Schedule model and row flattening
//!
//! The YAML task file deserializes into [`ScheduleFile`]; [`build_rows`]
//! flattens its groups and tasks into the ordered display rows the
//! renderer consumes. Row order mirrors declaration order exactly and
//! fixes the top-to-bottom chart layout.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_working_days, parse_workdays};
use crate::chart::{ChartConfig, Rgb};
use crate::duration::duration_to_working_days;
use crate::{Error, Result};

/// Top-level task file schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleFile {
    /// Project metadata
    pub project: Project,
    /// Task groups in display order
    pub groups: Vec<Group>,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name, used in the title and default output name
    pub name: String,
    /// Optional subtitle appended to the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Explicit left axis bound; defaults to the earliest task start
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Comma-separated workday abbreviations, e.g. "M,T,W,Th,F"
    #[serde(default)]
    pub workdays: Option<String>,
}

/// A named bucket of tasks sharing a display color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Group name, shown as a header row and legend entry
    pub name: String,
    /// Tasks in display order
    pub tasks: Vec<TaskSpec>,
}

/// A task as written in the YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Unique task identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Start date
    pub start: NaiveDate,
    /// Optional assignee, shown next to the due-date label
    #[serde(default)]
    pub assignee: Option<String>,
    /// Explicit due date; wins over `duration` when both are present
    #[serde(default)]
    pub due: Option<NaiveDate>,
    /// Duration string such as "3d" or "2w"; used when `due` is absent
    #[serde(default)]
    pub duration: Option<String>,
}

/// One display row of the chart, top-to-bottom in declaration order
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Group header band
    Group {
        /// Group name
        label: String,
        /// Group display color
        color: Rgb,
    },
    /// Resolved task bar
    Task(TaskRow),
}

/// A task with its dates resolved, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Task identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// Optional assignee
    pub assignee: Option<String>,
    /// Start date
    pub start: NaiveDate,
    /// Resolved due date
    pub due: NaiveDate,
    /// Group display color
    pub color: Rgb,
    /// Owning group name
    pub group: String,
}

impl TaskRow {
    /// Whether the bar gets the past-due treatment. A task due exactly
    /// today is not past due.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        self.due < today
    }
}

/// Load and parse a schedule YAML file.
pub fn load_schedule(path: &Path) -> Result<ScheduleFile> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Flatten groups and tasks into ordered display rows.
///
/// Each task must carry either a `due` date or a `duration`. A duration
/// is converted to working days and the start date advanced accordingly;
/// an explicit `due` wins when both are present. A task with neither is
/// a validation error.
pub fn build_rows(file: &ScheduleFile, config: &ChartConfig) -> Result<Vec<Row>> {
    let workday_str = file
        .project
        .workdays
        .as_deref()
        .unwrap_or(&config.workdays);
    let workdays = parse_workdays(workday_str)?;
    let days_per_week = workdays.len() as f64;
    let days_per_month = days_per_week / 7.0 * 30.44;

    let palette = config.palette_colors()?;
    let mut rows = Vec::new();

    for (gi, group) in file.groups.iter().enumerate() {
        let color = palette[gi % palette.len()];
        rows.push(Row::Group {
            label: group.name.clone(),
            color,
        });

        for task in &group.tasks {
            let due = match (task.due, task.duration.as_deref()) {
                (Some(due), _) => due,
                (None, Some(duration)) => {
                    let days = duration_to_working_days(
                        duration,
                        days_per_week,
                        days_per_month,
                        config.hours_per_day,
                    )?;
                    add_working_days(task.start, days, &workdays)
                }
                (None, None) => {
                    return Err(Error::Validation(format!(
                        "task {:?} has neither 'due' nor 'duration'",
                        task.id
                    )))
                }
            };

            tracing::debug!(task = %task.id, start = %task.start, due = %due, "resolved task");

            rows.push(Row::Task(TaskRow {
                id: task.id.clone(),
                label: task.name.clone(),
                assignee: task.assignee.clone(),
                start: task.start,
                due,
                color,
                group: group.name.clone(),
            }));
        }
    }

    Ok(rows)
}
