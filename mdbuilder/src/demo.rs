//! Sample documents written by `mdbuilder demo`

use crate::cli::DemoKind;
use mdbuilder::mermaid::{
    ArchitectureDiagram, Attribute, Cardinality, Edge, Entity, EntityRelationshipDiagram,
    Flowchart, FlowchartConfig, GanttChart, GanttConfig, Icon, Identify, NoteSide, Orientation,
    PieChart, PieConfig, Position, Quadrant, QuadrantChart, QuadrantConfig, SequenceDiagram,
    StateConfig, StateDiagram, Task,
};
use mdbuilder::{BuildError, LineFeed, Markdown, SyntaxHighlight};
use std::io::{self, Write};

/// Write the sample document for `kind` to `dest`
pub fn write_demo<W: Write>(kind: DemoKind, dest: W, line_feed: LineFeed) -> Result<(), BuildError> {
    log::info!("Writing {:?} demo", kind);
    match kind {
        DemoKind::Toc => toc(dest, line_feed),
        DemoKind::Flowchart => {
            let chart = flowchart(line_feed);
            mermaid_document(dest, line_feed, "Flowchart", chart)
        }
        DemoKind::Sequence => {
            let diagram = sequence(line_feed);
            mermaid_document(dest, line_feed, "Sequence Diagram", diagram)
        }
        DemoKind::Er => {
            let diagram = entity_relationship(line_feed);
            mermaid_document(dest, line_feed, "Entity Relationship Diagram", diagram)
        }
        DemoKind::Pie => {
            let chart = pie(line_feed);
            mermaid_document(dest, line_feed, "Pie Chart", chart)
        }
        DemoKind::Gantt => {
            let chart = gantt(line_feed);
            mermaid_document(dest, line_feed, "Gantt Chart", chart)
        }
        DemoKind::Quadrant => {
            let chart = quadrant(line_feed);
            mermaid_document(dest, line_feed, "Quadrant Chart", chart)
        }
        DemoKind::State => {
            let diagram = state(line_feed);
            mermaid_document(dest, line_feed, "State Diagram", diagram)
        }
        DemoKind::Arch => {
            let diagram = architecture(line_feed);
            mermaid_document(dest, line_feed, "Architecture Diagram", diagram)
        }
    }
}

fn mermaid_document<W: Write>(
    dest: W,
    line_feed: LineFeed,
    title: &str,
    source: String,
) -> Result<(), BuildError> {
    Markdown::with_line_feed(dest, line_feed)
        .h2(title)
        .code_blocks(SyntaxHighlight::Mermaid, source)
        .build()
}

fn toc<W: Write>(dest: W, line_feed: LineFeed) -> Result<(), BuildError> {
    Markdown::with_line_feed(dest, line_feed)
        .h1("Table of Contents Example")
        .plain_text("This document demonstrates the table of contents functionality.")
        .lf()
        .h2("Table of Contents")
        .table_of_contents_with_range(2, 4)
        .lf()
        .h2("Introduction")
        .plain_text("The table of contents above is filled in when the document is built.")
        .lf()
        .h3("Purpose")
        .plain_text("Headings added after the table of contents still appear in it.")
        .lf()
        .h3("Scope")
        .plain_text("Only H2 to H4 headings are listed.")
        .lf()
        .h2("Usage")
        .h4("Example")
        .code_blocks(
            SyntaxHighlight::Rust,
            "Markdown::new(io::stdout())\n    .h1(\"Title\")\n    .table_of_contents(3)\n    .h2(\"Section\")\n    .build()?;",
        )
        .lf()
        .h3("Anchor Generation")
        .bullet_list([
            "Convert to lowercase",
            "Replace spaces with hyphens",
            "Keep only alphanumeric characters and hyphens",
        ])
        .lf()
        .h2("Best Practices")
        .ordered_list([
            "Place the table of contents after the main title",
            "Use a depth range to leave the document title out",
            "Keep heading text unique so anchors do not collide",
        ])
        .lf()
        .h2("Conclusion")
        .plain_text("Deeper headings are left out of the table of contents.")
        .h5("Not in the Table of Contents")
        .build()
}

fn flowchart(line_feed: LineFeed) -> String {
    let config = FlowchartConfig::default()
        .with_title("mermaid flowchart builder")
        .with_orientation(Orientation::TopToBottom);
    Flowchart::with_line_feed(io::sink(), config, line_feed)
        .node_with_text("A", "Node A")
        .stadium_node("B", "Node B")
        .subroutine_node("C", "Node C")
        .database_node("D", "Database")
        .link_with_arrow_head("A", "B")
        .link_with_arrow_head_and_text("B", "D", "send original data")
        .link_with_arrow_head("B", "C")
        .dotted_link_with_text("C", "D", "send filtered data")
        .render()
}

fn sequence(line_feed: LineFeed) -> String {
    SequenceDiagram::with_line_feed(io::sink(), line_feed)
        .participant("Sophia")
        .participant("David")
        .participant("Subaru")
        .lf()
        .sync_request("Sophia", "David", "Please wake up Subaru")
        .sync_response("David", "Sophia", "OK")
        .lf()
        .loop_start("until Subaru wake up")
        .sync_request("David", "Subaru", "Wake up!")
        .sync_response("Subaru", "David", "zzz")
        .sync_request("David", "Subaru", "Hey!!!")
        .break_start("if Subaru wake up")
        .sync_response("Subaru", "David", "......")
        .break_end()
        .loop_end()
        .lf()
        .sync_response("David", "Sophia", "wake up, wake up")
        .render()
}

fn entity_relationship(line_feed: LineFeed) -> String {
    let teachers = Entity::new(
        "teachers",
        vec![
            Attribute::new("int", "id").primary_key().unique_key().with_comment("Teacher ID"),
            Attribute::new("string", "name").with_comment("Teacher Name"),
        ],
    );
    let students = Entity::new(
        "students",
        vec![
            Attribute::new("int", "id").primary_key().unique_key().with_comment("Student ID"),
            Attribute::new("string", "name").with_comment("Student Name"),
            Attribute::new("int", "teacher_id").foreign_key().unique_key().with_comment("Teacher ID"),
        ],
    );
    let schools = Entity::new(
        "schools",
        vec![
            Attribute::new("int", "id").primary_key().unique_key().with_comment("School ID"),
            Attribute::new("string", "name").with_comment("School Name"),
            Attribute::new("int", "teacher_id").foreign_key().unique_key().with_comment("Teacher ID"),
        ],
    );

    EntityRelationshipDiagram::with_line_feed(io::sink(), line_feed)
        .relationship(
            &teachers,
            &students,
            Cardinality::ExactlyOne,
            Cardinality::ZeroToMore,
            Identify::Identifying,
            "Teacher has many students",
        )
        .relationship(
            &teachers,
            &schools,
            Cardinality::OneToMore,
            Cardinality::ExactlyOne,
            Identify::NonIdentifying,
            "School has many teachers",
        )
        .render()
}

fn pie(line_feed: LineFeed) -> String {
    let config = PieConfig::default()
        .with_title("mermaid pie chart builder")
        .with_show_data(true);
    PieChart::with_line_feed(io::sink(), config, line_feed)
        .label_and_int_value("A", 10)
        .label_and_float_value("B", 20.1)
        .label_and_int_value("C", 30)
        .render()
}

fn gantt(line_feed: LineFeed) -> String {
    let config = GanttConfig::default()
        .with_title("Software Development Schedule")
        .with_date_format("YYYY-MM-DD");
    GanttChart::with_line_feed(io::sink(), config, line_feed)
        .section("Planning")
        .task(&Task::new("Requirements Analysis", "2024-01-01", "7d").done().with_id("req"))
        .task(&Task::new("System Design", "2024-01-08", "5d").done().with_id("design"))
        .lf()
        .section("Development")
        .task(&Task::new("Backend Development", "2024-01-15", "14d").critical().active().with_id("backend"))
        .task(&Task::new("Frontend Development", "2024-01-15", "14d").active().with_id("frontend"))
        .task(&Task::after("Integration", "backend", "5d").with_id("integrate"))
        .lf()
        .section("Testing")
        .task(&Task::after("Unit Testing", "integrate", "3d").with_id("unit"))
        .task(&Task::after("Integration Testing", "unit", "4d").with_id("inttest"))
        .task(&Task::after("UAT", "inttest", "5d").with_id("uat"))
        .lf()
        .section("Deployment")
        .task(&Task::after("Staging Deploy", "uat", "2d"))
        .task(&Task::milestone("Production Release", "2024-03-01").critical())
        .render()
}

fn quadrant(line_feed: LineFeed) -> String {
    let config = QuadrantConfig::default().with_title("Product Prioritization");
    QuadrantChart::with_line_feed(io::sink(), config, line_feed)
        .x_axis_range("Low Effort", "High Effort")
        .y_axis_range("Low Value", "High Value")
        .lf()
        .quadrant(Quadrant::TopRight, "Quick Wins")
        .quadrant(Quadrant::TopLeft, "Major Projects")
        .quadrant(Quadrant::BottomLeft, "Fill Ins")
        .quadrant(Quadrant::BottomRight, "Thankless Tasks")
        .lf()
        .point("Feature A", 0.9, 0.85)
        .point("Feature B", 0.25, 0.75)
        .point("Feature C", 0.15, 0.20)
        .point("Feature D", 0.80, 0.15)
        .render()
}

fn state(line_feed: LineFeed) -> String {
    let config = StateConfig::default().with_title("Order State Machine");
    StateDiagram::with_line_feed(io::sink(), config, line_feed)
        .start_transition("Pending")
        .state_with_description("Pending", "Order received")
        .state_with_description("Processing", "Preparing order")
        .state_with_description("Shipped", "Order in transit")
        .state_with_description("Delivered", "Order completed")
        .lf()
        .transition_with_note("Pending", "Processing", "payment confirmed")
        .transition_with_note("Processing", "Shipped", "items packed")
        .transition_with_note("Shipped", "Delivered", "customer received")
        .lf()
        .note(NoteSide::Right, "Pending", "Waiting for payment")
        .note(NoteSide::Right, "Processing", "Preparing items")
        .lf()
        .end_transition("Delivered")
        .render()
}

fn architecture(line_feed: LineFeed) -> String {
    ArchitectureDiagram::with_line_feed(io::sink(), line_feed)
        .group("api", Icon::Cloud, "API")
        .service_in_group("db", Icon::Database, "Database", "api")
        .service_in_group("disk1", Icon::Disk, "Storage", "api")
        .service_in_group("disk2", Icon::Disk, "Storage", "api")
        .service_in_group("server", Icon::Server, "Server", "api")
        .service("gateway", Icon::Internet, "Gateway")
        .lf()
        .edge(&Edge::new("db", Position::Left), &Edge::new("server", Position::Right))
        .edge(&Edge::new("disk1", Position::Top), &Edge::new("server", Position::Bottom))
        .edge(&Edge::new("disk2", Position::Bottom), &Edge::new("db", Position::Top))
        .edge(
            &Edge::new("gateway", Position::Right),
            &Edge::new("server", Position::Left).with_arrow(),
        )
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(kind: DemoKind) -> String {
        let mut out = Vec::new();
        write_demo(kind, &mut out, LineFeed::Lf).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_toc_demo() {
        let text = demo(DemoKind::Toc);
        assert!(text.starts_with("# Table of Contents Example\n"));
        assert!(text.contains("- [Introduction](#introduction)\n  - [Purpose](#purpose)"));
        assert!(text.contains("    - [Example](#example)"));
        assert!(!text.contains("](#table-of-contents-example)"));
        assert!(!text.contains("](#not-in-the-table-of-contents)"));
    }

    #[test]
    fn test_mermaid_demos_are_fenced() {
        for (kind, first_line) in [
            (DemoKind::Flowchart, "---"),
            (DemoKind::Sequence, "sequenceDiagram"),
            (DemoKind::Er, "erDiagram"),
            (DemoKind::Pie, "%%{init:"),
            (DemoKind::Gantt, "gantt"),
            (DemoKind::Quadrant, "quadrantChart"),
            (DemoKind::State, "---"),
            (DemoKind::Arch, "architecture-beta"),
        ] {
            let text = demo(kind);
            assert!(text.starts_with("## "), "{:?}", kind);
            assert!(text.contains(&format!("```mermaid\n{}", first_line)), "{:?}", kind);
            assert!(text.ends_with("\n```"), "{:?}", kind);
        }
    }

    #[test]
    fn test_er_demo_lists_entities_sorted() {
        let text = demo(DemoKind::Er);
        let schools = text.find("    schools {").unwrap();
        let students = text.find("    students {").unwrap();
        let teachers = text.find("    teachers {").unwrap();
        assert!(schools < students && students < teachers);
        assert!(text.contains("    teachers }|..|| schools : \"School has many teachers\""));
    }

    #[test]
    fn test_gantt_demo() {
        let text = demo(DemoKind::Gantt);
        let expected = [
            "## Gantt Chart",
            "```mermaid",
            "gantt",
            "    title Software Development Schedule",
            "    dateFormat YYYY-MM-DD",
            "    section Planning",
            "    Requirements Analysis :done, req, 2024-01-01, 7d",
            "    System Design :done, design, 2024-01-08, 5d",
            "",
            "    section Development",
            "    Backend Development :crit, active, backend, 2024-01-15, 14d",
            "    Frontend Development :active, frontend, 2024-01-15, 14d",
            "    Integration :integrate, after backend, 5d",
            "",
            "    section Testing",
            "    Unit Testing :unit, after integrate, 3d",
            "    Integration Testing :inttest, after unit, 4d",
            "    UAT :uat, after inttest, 5d",
            "",
            "    section Deployment",
            "    Staging Deploy :after uat, 2d",
            "    Production Release :crit, milestone, 2024-03-01, 0d",
            "```",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_quadrant_demo() {
        let text = demo(DemoKind::Quadrant);
        assert!(text.contains("quadrantChart\n    title Product Prioritization\n"));
        assert!(text.contains("    quadrant-4 Thankless Tasks\n\n    Feature A: [0.90, 0.85]\n"));
        assert!(text.contains("    Feature D: [0.80, 0.15]\n```"));
    }

    #[test]
    fn test_state_demo() {
        let text = demo(DemoKind::State);
        let expected = [
            "## State Diagram",
            "```mermaid",
            "---",
            "title: Order State Machine",
            "---",
            "stateDiagram-v2",
            "    [*] --> Pending",
            "    Pending : Order received",
            "    Processing : Preparing order",
            "    Shipped : Order in transit",
            "    Delivered : Order completed",
            "",
            "    Pending --> Processing : payment confirmed",
            "    Processing --> Shipped : items packed",
            "    Shipped --> Delivered : customer received",
            "",
            "    note right of Pending : Waiting for payment",
            "    note right of Processing : Preparing items",
            "",
            "    Delivered --> [*]",
            "```",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_architecture_demo() {
        let text = demo(DemoKind::Arch);
        assert!(text.contains("    group api(cloud)[API]\n    service db(database)[Database] in api\n"));
        assert!(text.contains("    gateway:R --> L:server\n```"));
    }
}
