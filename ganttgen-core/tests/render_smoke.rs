//! End-to-end smoke test: YAML file in, chart file out.

use chrono::NaiveDate;
use ganttgen_core::{
    build_rows, load_schedule, render_chart, ChartConfig, Error, OutputFormat,
};

const TASKS_YAML: &str = r#"
project:
  name: Smoke Test
  subtitle: pipeline check
  start: 2025-01-01

groups:
  - name: Design
    tasks:
      - id: D1
        name: Wireframes
        start: 2025-01-06
        duration: 3d
      - id: D2
        name: Design review
        start: 2025-01-09
        due: 2025-01-10
  - name: Build
    tasks:
      - id: B1
        name: Implementation
        start: 2025-01-13
        duration: 2w
        assignee: Ada
"#;

#[test]
fn renders_svg_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let tasks_path = dir.path().join("tasks.yaml");
    std::fs::write(&tasks_path, TASKS_YAML).unwrap();

    let file = load_schedule(&tasks_path).unwrap();
    let config = ChartConfig::default();
    let rows = build_rows(&file, &config).unwrap();
    assert_eq!(rows.len(), 5);

    let today = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
    let base = dir.path().join("chart");
    let result = render_chart(
        &file,
        &rows,
        &config,
        today,
        Some(base.to_str().unwrap()),
        OutputFormat::Svg,
    );

    match result {
        Ok(paths) => {
            assert_eq!(paths.len(), 1);
            assert_eq!(paths[0], dir.path().join("chart.svg"));
            let svg = std::fs::read_to_string(&paths[0]).unwrap();
            assert!(svg.contains("<svg"));
        }
        Err(Error::Render(msg)) => {
            // Text layout needs a system font; headless images may have none.
            eprintln!("skipping render assertions: {msg}");
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_schedule_is_a_validation_error() {
    let yaml = r#"
project:
  name: Empty
groups:
  - name: Nothing here
    tasks: []
"#;
    let file: ganttgen_core::ScheduleFile = serde_yaml::from_str(yaml).unwrap();
    let config = ChartConfig::default();
    let rows = build_rows(&file, &config).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();

    let err = render_chart(&file, &rows, &config, today, Some("unused"), OutputFormat::Png)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
