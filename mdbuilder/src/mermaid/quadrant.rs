//! Quadrant charts

use super::DiagramBody;
use crate::error::BuildError;
use crate::line_feed::LineFeed;
use std::fmt;
use std::io::Write;

/// Quadrant chart options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuadrantConfig {
    /// Chart title; blank titles are omitted
    pub title: Option<String>,
}

impl QuadrantConfig {
    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One of the four areas of the chart, numbered as Mermaid does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// `quadrant-1`
    TopRight,
    /// `quadrant-2`
    TopLeft,
    /// `quadrant-3`
    BottomLeft,
    /// `quadrant-4`
    BottomRight,
}

impl Quadrant {
    fn number(self) -> u8 {
        match self {
            Quadrant::TopRight => 1,
            Quadrant::TopLeft => 2,
            Quadrant::BottomLeft => 3,
            Quadrant::BottomRight => 4,
        }
    }
}

/// Look of a point or of a point class
///
/// Renders only the properties that are set, e.g.
/// `color: #ff0000, radius: 10`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointStyle {
    /// Fill color
    pub color: Option<String>,
    /// Radius in pixels; zero means unset
    pub radius: u32,
    /// Border color
    pub stroke_color: Option<String>,
    /// Border width, e.g. `5px`
    pub stroke_width: Option<String>,
}

impl PointStyle {
    /// Set the fill color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the border color
    pub fn with_stroke_color(mut self, color: impl Into<String>) -> Self {
        self.stroke_color = Some(color.into());
        self
    }

    /// Set the border width
    pub fn with_stroke_width(mut self, width: impl Into<String>) -> Self {
        self.stroke_width = Some(width.into());
        self
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        self.to_string().is_empty()
    }
}

impl fmt::Display for PointStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(color) = &self.color {
            parts.push(format!("color: {}", color));
        }
        if self.radius > 0 {
            parts.push(format!("radius: {}", self.radius));
        }
        if let Some(color) = &self.stroke_color {
            parts.push(format!("stroke-color: {}", color));
        }
        if let Some(width) = &self.stroke_width {
            parts.push(format!("stroke-width: {}", width));
        }
        f.write_str(&parts.join(", "))
    }
}

/// Mermaid quadrant chart builder
///
/// Point coordinates are expected in 0.0..=1.0 and are written with two
/// decimals.
pub struct QuadrantChart<W> {
    body: DiagramBody<W>,
}

impl<W: Write> QuadrantChart<W> {
    /// Create a chart using the platform line feed
    pub fn new(dest: W, config: QuadrantConfig) -> Self {
        Self::with_line_feed(dest, config, LineFeed::native())
    }

    /// Create a chart with an explicit line feed
    pub fn with_line_feed(dest: W, config: QuadrantConfig, line_feed: LineFeed) -> Self {
        let mut body = DiagramBody::new(dest, line_feed, ["quadrantChart"]);
        if let Some(title) = config.title.as_deref().filter(|t| !t.is_empty()) {
            body.statement(format!("title {}", title));
        }
        Self { body }
    }

    /// Render and write the chart to the destination
    pub fn build(&mut self) -> Result<(), BuildError> {
        let rendered = self.render();
        self.body.write(&rendered)
    }
}

impl<W> QuadrantChart<W> {
    /// Render the chart source
    pub fn render(&self) -> String {
        self.body.render()
    }

    /// Lines appended so far, header included
    pub fn lines(&self) -> &[String] {
        self.body.lines()
    }

    fn push(&mut self, line: String) -> &mut Self {
        self.body.statement(line);
        self
    }

    /// `x-axis label`
    pub fn x_axis(&mut self, label: impl fmt::Display) -> &mut Self {
        self.push(format!("x-axis {}", label))
    }

    /// `x-axis left --> right`
    pub fn x_axis_range(&mut self, left: impl fmt::Display, right: impl fmt::Display) -> &mut Self {
        self.push(format!("x-axis {} --> {}", left, right))
    }

    /// `y-axis label`
    pub fn y_axis(&mut self, label: impl fmt::Display) -> &mut Self {
        self.push(format!("y-axis {}", label))
    }

    /// `y-axis bottom --> top`
    pub fn y_axis_range(&mut self, bottom: impl fmt::Display, top: impl fmt::Display) -> &mut Self {
        self.push(format!("y-axis {} --> {}", bottom, top))
    }

    /// `quadrant-N label`
    pub fn quadrant(&mut self, quadrant: Quadrant, label: impl fmt::Display) -> &mut Self {
        self.push(format!("quadrant-{} {}", quadrant.number(), label))
    }

    /// `name: [x, y]`
    pub fn point(&mut self, name: impl fmt::Display, x: f64, y: f64) -> &mut Self {
        self.push(format!("{}: [{:.2}, {:.2}]", name, x, y))
    }

    /// `name: [x, y] style`; an empty style is left out
    pub fn point_with_style(&mut self, name: impl fmt::Display, x: f64, y: f64, style: &PointStyle) -> &mut Self {
        if style.is_empty() {
            return self.point(name, x, y);
        }
        self.push(format!("{}: [{:.2}, {:.2}] {}", name, x, y, style))
    }

    /// `name:::class: [x, y]`
    pub fn point_with_class(&mut self, name: impl fmt::Display, class: &str, x: f64, y: f64) -> &mut Self {
        self.push(format!("{}:::{}: [{:.2}, {:.2}]", name, class, x, y))
    }

    /// `name:::class: [x, y] style`
    pub fn point_with_class_and_style(
        &mut self,
        name: impl fmt::Display,
        class: &str,
        x: f64,
        y: f64,
        style: &PointStyle,
    ) -> &mut Self {
        self.push(format!("{}:::{}: [{:.2}, {:.2}] {}", name, class, x, y, style))
    }

    /// `classDef class style`
    pub fn class_def(&mut self, class: &str, style: &PointStyle) -> &mut Self {
        self.push(format!("classDef {} {}", class, style))
    }

    /// Empty line
    pub fn lf(&mut self) -> &mut Self {
        self.body.blank();
        self
    }
}

impl<W> fmt::Display for QuadrantChart<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    fn chart(config: QuadrantConfig) -> QuadrantChart<io::Sink> {
        QuadrantChart::with_line_feed(io::sink(), config, LineFeed::Lf)
    }

    #[test]
    fn test_header() {
        assert_eq!(chart(QuadrantConfig::default()).lines(), ["quadrantChart"]);
        assert_eq!(
            chart(QuadrantConfig::default().with_title("Matrix")).lines(),
            ["quadrantChart", "    title Matrix"]
        );
    }

    #[test]
    fn test_axes_and_quadrants() {
        let mut c = chart(QuadrantConfig::default());
        c.x_axis("Effort")
            .x_axis_range("Low Effort", "High Effort")
            .y_axis("Impact")
            .y_axis_range("Low Impact", "High Impact")
            .quadrant(Quadrant::TopRight, "Quick Wins")
            .quadrant(Quadrant::TopLeft, "Major Projects")
            .quadrant(Quadrant::BottomLeft, "Fill Ins")
            .quadrant(Quadrant::BottomRight, "Time Wasters");

        assert_eq!(
            &c.lines()[1..],
            [
                "    x-axis Effort",
                "    x-axis Low Effort --> High Effort",
                "    y-axis Impact",
                "    y-axis Low Impact --> High Impact",
                "    quadrant-1 Quick Wins",
                "    quadrant-2 Major Projects",
                "    quadrant-3 Fill Ins",
                "    quadrant-4 Time Wasters",
            ]
        );
    }

    #[test]
    fn test_style_lists_only_set_properties() {
        assert_eq!(PointStyle::default().to_string(), "");
        assert_eq!(PointStyle::default().with_radius(12).to_string(), "radius: 12");
        assert_eq!(
            PointStyle::default()
                .with_stroke_width("10px")
                .with_radius(10)
                .with_color("#908342")
                .with_stroke_color("#310085")
                .to_string(),
            "color: #908342, radius: 10, stroke-color: #310085, stroke-width: 10px"
        );
    }

    #[test]
    fn test_styled_points_and_classes() {
        let mut c = chart(QuadrantConfig::default().with_title("Reach and engagement of campaigns"));
        c.x_axis_range("Low Reach", "High Reach")
            .y_axis_range("Low Engagement", "High Engagement")
            .point_with_style("Campaign A", 0.9, 0.0, &PointStyle::default().with_radius(12))
            .point_with_class("Campaign B", "class1", 0.8, 0.1)
            .point_with_style(
                "Campaign C",
                0.7,
                0.2,
                &PointStyle::default()
                    .with_radius(25)
                    .with_color("#00ff33")
                    .with_stroke_color("#10f0f0"),
            )
            .point_with_style("Campaign D", 0.5, 0.4, &PointStyle::default())
            .point_with_class_and_style("Campaign E", "class2", 0.3, 0.6, &PointStyle::default().with_radius(8))
            .class_def("class1", &PointStyle::default().with_color("#109060"));

        assert_eq!(
            c.to_string(),
            [
                "quadrantChart",
                "    title Reach and engagement of campaigns",
                "    x-axis Low Reach --> High Reach",
                "    y-axis Low Engagement --> High Engagement",
                "    Campaign A: [0.90, 0.00] radius: 12",
                "    Campaign B:::class1: [0.80, 0.10]",
                "    Campaign C: [0.70, 0.20] color: #00ff33, radius: 25, stroke-color: #10f0f0",
                "    Campaign D: [0.50, 0.40]",
                "    Campaign E:::class2: [0.30, 0.60] radius: 8",
                "    classDef class1 color: #109060",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_points_are_rounded_to_two_decimals() {
        let mut c = chart(QuadrantConfig::default());
        c.point("Task A", 0.8, 0.9).point("Task B", 0.256, 0.7);
        assert_eq!(&c.lines()[1..], ["    Task A: [0.80, 0.90]", "    Task B: [0.26, 0.70]"]);
    }
}
