//! Gantt charts

use super::DiagramBody;
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use std::fmt;
use std::io::Write;

/// Gantt chart options
///
/// Every setting is written as a header statement only when it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GanttConfig {
    /// Chart title
    pub title: Option<String>,
    /// Input date format, e.g. `YYYY-MM-DD`
    pub date_format: Option<String>,
    /// Axis label format, e.g. `%Y-%m-%d`
    pub axis_format: Option<String>,
    /// Axis tick interval, e.g. `1week`
    pub tick_interval: Option<String>,
    /// Days left out of durations, e.g. `weekends`
    pub excludes: Vec<String>,
    /// Today marker style, or `off`
    pub today_marker: Option<String>,
}

impl GanttConfig {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the date format
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Set the axis format
    pub fn with_axis_format(mut self, format: impl Into<String>) -> Self {
        self.axis_format = Some(format.into());
        self
    }

    /// Set the tick interval
    pub fn with_tick_interval(mut self, interval: impl Into<String>) -> Self {
        self.tick_interval = Some(interval.into());
        self
    }

    /// Add an excluded day or date
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.excludes.push(exclude.into());
        self
    }

    /// Set the today marker
    pub fn with_today_marker(mut self, marker: impl Into<String>) -> Self {
        self.today_marker = Some(marker.into());
        self
    }

    fn header(&self) -> Vec<String> {
        let settings = [
            ("title", &self.title),
            ("dateFormat", &self.date_format),
            ("axisFormat", &self.axis_format),
            ("tickInterval", &self.tick_interval),
            ("todayMarker", &self.today_marker),
        ];

        let mut header = vec!["gantt".to_string()];
        for (key, value) in settings {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                header.push(format!("    {} {}", key, value));
            }
        }
        header.extend(self.excludes.iter().map(|e| format!("    excludes {}", e)));
        header
    }
}

/// Progress tag of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Currently in progress
    Active,
    /// Finished
    Done,
    /// Zero length marker
    Milestone,
}

impl TaskState {
    fn tag(self) -> &'static str {
        match self {
            TaskState::Active => "active",
            TaskState::Done => "done",
            TaskState::Milestone => "milestone",
        }
    }
}

/// One bar of a Gantt chart
///
/// Rendered as `name :[crit, ][state, ][id, ]start, duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Label shown on the bar
    pub name: String,
    /// Id other tasks can start after
    pub id: Option<String>,
    /// Start date, or `after {id}`
    pub start: String,
    /// Duration such as `5d`, or an end date
    pub duration: String,
    /// On the critical path
    pub critical: bool,
    /// Progress tag
    pub state: Option<TaskState>,
}

impl Task {
    /// Task starting at `start` and lasting `duration`
    pub fn new(name: impl Into<String>, start: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            start: start.into(),
            duration: duration.into(),
            critical: false,
            state: None,
        }
    }

    /// Task starting when task `task_id` ends
    pub fn after(name: impl Into<String>, task_id: impl fmt::Display, duration: impl Into<String>) -> Self {
        Self::new(name, format!("after {}", task_id), duration)
    }

    /// Zero length milestone at `date`
    pub fn milestone(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self::new(name, date, "0d").with_state(TaskState::Milestone)
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Mark as critical
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    /// Mark as in progress
    pub fn active(self) -> Self {
        self.with_state(TaskState::Active)
    }

    /// Mark as finished
    pub fn done(self) -> Self {
        self.with_state(TaskState::Done)
    }

    /// Set the progress tag
    pub fn with_state(mut self, state: TaskState) -> Self {
        self.state = Some(state);
        self
    }

    fn line(&self) -> String {
        let mut fields: Vec<&str> = Vec::new();
        if self.critical {
            fields.push("crit");
        }
        if let Some(state) = self.state {
            fields.push(state.tag());
        }
        if let Some(id) = &self.id {
            fields.push(id);
        }
        fields.push(&self.start);
        fields.push(&self.duration);
        format!("{} :{}", self.name, fields.join(", "))
    }
}

/// Mermaid Gantt chart builder
pub struct GanttChart<W> {
    body: DiagramBody<W>,
}

impl<W: Write> GanttChart<W> {
    /// Create a chart using the platform line feed
    pub fn new(dest: W, config: GanttConfig) -> Self {
        Self::with_line_feed(dest, config, LineFeed::native())
    }

    /// Create a chart with an explicit line feed
    pub fn with_line_feed(dest: W, config: GanttConfig, line_feed: LineFeed) -> Self {
        Self {
            body: DiagramBody::new(dest, line_feed, config.header()),
        }
    }

    /// Render and write the chart to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> GanttChart<W> {
    /// Render the chart source
    pub fn render(&self) -> String {
        self.body.render()
    }

    /// Lines appended so far, header included
    pub fn lines(&self) -> &[String] {
        self.body.lines()
    }

    /// `section name`
    pub fn section(&mut self, name: impl fmt::Display) -> &mut Self {
        self.body.statement(format!("section {}", name));
        self
    }

    /// Add a task
    pub fn task(&mut self, task: &Task) -> &mut Self {
        self.body.statement(task.line());
        self
    }

    /// Add several tasks in order
    pub fn tasks<'a>(&mut self, tasks: impl IntoIterator<Item = &'a Task>) -> &mut Self {
        for task in tasks {
            self.task(task);
        }
        self
    }

    /// Empty line
    pub fn lf(&mut self) -> &mut Self {
        self.body.blank();
        self
    }
}

impl<W> fmt::Display for GanttChart<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    fn chart(config: GanttConfig) -> GanttChart<io::Sink> {
        GanttChart::with_line_feed(io::sink(), config, LineFeed::Lf)
    }

    #[test]
    fn test_bare_header() {
        assert_eq!(chart(GanttConfig::default()).lines(), ["gantt"]);
    }

    #[test]
    fn test_full_header() {
        let c = chart(
            GanttConfig::default()
                .with_title("Plan")
                .with_date_format("YYYY-MM-DD")
                .with_axis_format("%d/%m")
                .with_tick_interval("1week")
                .with_today_marker("off")
                .with_exclude("weekends")
                .with_exclude("2024-01-01"),
        );
        assert_eq!(
            c.lines(),
            [
                "gantt",
                "    title Plan",
                "    dateFormat YYYY-MM-DD",
                "    axisFormat %d/%m",
                "    tickInterval 1week",
                "    todayMarker off",
                "    excludes weekends",
                "    excludes 2024-01-01",
            ]
        );
    }

    #[test]
    fn test_empty_title_is_omitted() {
        assert_eq!(chart(GanttConfig::default().with_title("")).lines(), ["gantt"]);
    }

    #[test]
    fn test_task_tags() {
        let mut c = chart(GanttConfig::default());
        c.tasks(&[
            Task::new("Plain", "2024-01-01", "3d"),
            Task::new("Named", "2024-01-01", "3d").with_id("a1"),
            Task::new("Crit", "2024-01-01", "3d").critical(),
            Task::new("Busy", "2024-01-01", "3d").active().with_id("b"),
            Task::new("Over", "2024-01-01", "3d").critical().done(),
            Task::after("Next", "a1", "2d"),
            Task::milestone("Ship", "2024-02-01").critical().with_id("ship"),
        ]);

        assert_eq!(
            &c.lines()[1..],
            [
                "    Plain :2024-01-01, 3d",
                "    Named :a1, 2024-01-01, 3d",
                "    Crit :crit, 2024-01-01, 3d",
                "    Busy :active, b, 2024-01-01, 3d",
                "    Over :crit, done, 2024-01-01, 3d",
                "    Next :after a1, 2d",
                "    Ship :crit, milestone, ship, 2024-02-01, 0d",
            ]
        );
    }

    #[test]
    fn test_project_schedule() {
        let mut c = chart(
            GanttConfig::default()
                .with_title("Project Schedule")
                .with_date_format("YYYY-MM-DD"),
        );
        c.section("Planning")
            .task(&Task::new("Requirements", "2024-01-01", "5d").done().with_id("req"))
            .task(&Task::new("Design", "2024-01-08", "3d").done().with_id("design"))
            .section("Development")
            .task(&Task::new("Coding", "2024-01-12", "10d").critical().active().with_id("code"))
            .task(&Task::after("Review", "code", "2d").with_id("review"))
            .section("Release")
            .task(&Task::milestone("Launch", "2024-01-26").with_id("launch"))
            .lf();

        assert_eq!(
            c.to_string(),
            [
                "gantt",
                "    title Project Schedule",
                "    dateFormat YYYY-MM-DD",
                "    section Planning",
                "    Requirements :done, req, 2024-01-01, 5d",
                "    Design :done, design, 2024-01-08, 3d",
                "    section Development",
                "    Coding :crit, active, code, 2024-01-12, 10d",
                "    Review :review, after code, 2d",
                "    section Release",
                "    Launch :milestone, launch, 2024-01-26, 0d",
                "",
            ]
            .join("\n")
        );
    }
}
