//! ganttgen core - Gantt chart generation from declarative schedules
//!
//! This crate parses a YAML project schedule, resolves task due dates
//! against a working-day calendar, flattens groups and tasks into ordered
//! display rows, and renders the result as a static chart image.

pub mod calendar;
pub mod chart;
pub mod duration;
pub mod error;
pub mod render;
pub mod schedule;

pub use chart::{ChartConfig, Config, Rgb};
pub use error::{Error, Result};
pub use render::{render_chart, OutputFormat};
pub use schedule::{build_rows, load_schedule, Group, Project, Row, ScheduleFile, TaskRow, TaskSpec};
