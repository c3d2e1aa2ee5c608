//! Modal content renderer: converts a project record into markup.
//!
//! The dispatch over section kinds is total — every variant renders
//! something, and the fallback variant renders an empty paragraph. Section
//! content is trusted authoring data and is embedded verbatim; only
//! attribute-position values (image paths, captions) are escaped, since a
//! stray quote there would corrupt the surrounding structure.

use crate::catalog::{ChartSpec, ComparisonCard, GalleryEntry, Project, Section, SectionBody};
use folio_protocol::contract::ids;

/// Id of the placeholder canvas emitted for the chart section at this
/// index. The chart itself is drawn by the host once the markup is
/// mounted — every canvas exists in the document before any chart draws.
pub fn canvas_id(section_index: usize) -> String {
    format!("chart-{section_index}")
}

/// Render a project's full modal markup: header plus every section in
/// order. The paper link is a separate fragment appended by the modal
/// controller, not part of this string.
pub fn render_project(project: &Project) -> String {
    let mut html = String::with_capacity(1024 + project.sections.len() * 512);

    html.push_str(&format!(
        r#"<div class="modal-header"><h2 class="modal-title">{}</h2><p class="modal-subtitle">{}</p></div>"#,
        project.title, project.subtitle,
    ));

    for (index, section) in project.sections.iter().enumerate() {
        render_section(&mut html, index, section);
    }

    html
}

/// The footer fragment linking the published paper, opened in a new
/// browsing context.
pub fn render_paper_link(url: &str) -> String {
    format!(
        r#"<div class="modal-footer" style="margin-top:30px;text-align:center"><a href="{}" target="_blank" class="btn btn-primary"><i class="fas fa-external-link-alt"></i> View Published Paper</a></div>"#,
        escape_attr(url),
    )
}

fn render_section(html: &mut String, index: usize, section: &Section) {
    html.push_str(&format!(
        r#"<div class="modal-section"><h3 class="modal-section-title"><i class="fas {}"></i> {}</h3>"#,
        escape_attr(&section.icon),
        section.title,
    ));

    match &section.body {
        SectionBody::Text { content } => render_text(html, content),
        SectionBody::Comparison { winner, runner_up } => render_comparison(html, winner, runner_up),
        SectionBody::Table { headers, rows } => render_table(html, headers, rows),
        SectionBody::Chart { .. } => render_chart_slot(html, index),
        SectionBody::Toggle { before, after } => render_toggle(html, before, after, index),
        SectionBody::Gallery { images } => render_gallery(html, images),
        SectionBody::IotDashboard => render_iot_dashboard(html),
        SectionBody::Unknown => render_text(html, ""),
    }

    html.push_str("</div>");
}

fn render_text(html: &mut String, content: &str) {
    html.push_str(&format!(r#"<p class="modal-text">{content}</p>"#));
}

fn render_comparison(html: &mut String, winner: &ComparisonCard, runner_up: &ComparisonCard) {
    // The first card is the winner by authoring order, not by value.
    html.push_str(&format!(
        r#"<div class="comparison-grid"><div class="comparison-card winner"><div class="comparison-value">{}%</div><div class="comparison-label">{} (Winner)</div></div><div class="comparison-card"><div class="comparison-value">{}%</div><div class="comparison-label">{}</div></div></div>"#,
        winner.percent, winner.label, runner_up.percent, runner_up.label,
    ));
}

fn render_table(html: &mut String, headers: &[String], rows: &[Vec<String>]) {
    html.push_str(r#"<table class="metrics-table"><thead><tr>"#);
    for header in headers {
        html.push_str(&format!("<th>{header}</th>"));
    }
    html.push_str("</tr></thead><tbody>");
    // Rows render as-is; a ragged row stays ragged.
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
}

fn render_chart_slot(html: &mut String, index: usize) {
    html.push_str(&format!(
        r#"<div class="modal-chart"><canvas id="{}"></canvas></div>"#,
        canvas_id(index),
    ));
}

fn render_toggle(html: &mut String, before: &str, after: &str, index: usize) {
    let before_id = format!("before-{index}");
    let after_id = format!("after-{index}");
    html.push_str(&format!(
        r#"<div class="toggle-container"><button class="toggle-btn active" data-target="{before_id}">Before</button><button class="toggle-btn" data-target="{after_id}">After</button></div>"#,
    ));
    html.push_str(&format!(
        r#"<div class="toggle-content active" id="{before_id}"><pre class="data-preview">{before}</pre></div>"#,
    ));
    html.push_str(&format!(
        r#"<div class="toggle-content" id="{after_id}"><pre class="data-preview">{after}</pre></div>"#,
    ));
}

fn render_gallery(html: &mut String, images: &[GalleryEntry]) {
    html.push_str(
        r#"<div class="project-gallery" style="display:grid;grid-template-columns:repeat(auto-fit,minmax(200px,1fr));gap:20px;margin-top:15px">"#,
    );
    for image in images {
        match image.caption() {
            None => html.push_str(&format!(
                r#"<img src="{}" alt="Project Documentation" style="width:100%;border-radius:8px;border:1px solid rgba(255,255,255,0.1)">"#,
                escape_attr(image.src()),
            )),
            Some(caption) => html.push_str(&format!(
                r#"<div class="gallery-item" style="text-align:center"><img src="{}" alt="{}" style="width:100%;border-radius:8px;border:1px solid rgba(255,255,255,0.1);margin-bottom:8px"><p style="color:var(--text-secondary);font-size:0.85rem">{}</p></div>"#,
                escape_attr(image.src()),
                escape_attr(caption),
                caption,
            )),
        }
    }
    html.push_str("</div>");
}

fn render_iot_dashboard(html: &mut String) {
    let slot = |icon: &str, value_id: &str, value: &str, label: &str, status_id: &str| {
        format!(
            r#"<div class="sensor-card"><div class="sensor-icon"><i class="fas {icon}"></i></div><div class="sensor-value" id="{value_id}">{value}</div><div class="sensor-label">{label}</div><span class="sensor-status status-normal" id="{status_id}">Normal</span></div>"#,
        )
    };
    html.push_str(r#"<div class="iot-dashboard">"#);
    html.push_str(&slot(
        "fa-thermometer-half",
        ids::TEMP_VALUE,
        "28.5°C",
        "Temperature",
        ids::TEMP_STATUS,
    ));
    html.push_str(&slot(
        "fa-wind",
        ids::AMMONIA_VALUE,
        "0.02 ppm",
        "Ammonia",
        ids::AMMONIA_STATUS,
    ));
    html.push_str(&slot(
        "fa-tint",
        ids::PH_VALUE,
        "7.2",
        "pH Level",
        ids::PH_STATUS,
    ));
    html.push_str("</div>");
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// The chart sections of a project, with their section indices (which
/// determine the canvas ids the markup emitted for them).
pub fn chart_sections(project: &Project) -> Vec<(usize, &ChartSpec)> {
    project
        .sections
        .iter()
        .enumerate()
        .filter_map(|(index, section)| match &section.body {
            SectionBody::Chart { spec } => Some((index, spec)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn section(body: SectionBody) -> Section {
        Section {
            title: "Test".into(),
            icon: "fa-vial".into(),
            body,
        }
    }

    fn render_one(body: SectionBody) -> String {
        let mut html = String::new();
        render_section(&mut html, 0, &section(body));
        html
    }

    #[test]
    fn table_preserves_order_and_shape() {
        let html = render_one(SectionBody::Table {
            headers: vec!["A".into(), "B".into()],
            rows: vec![
                vec!["1".into(), "2".into()],
                vec!["3".into(), "4".into()],
            ],
        });
        assert_eq!(html.matches("<th>").count(), 2);
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 4);
        // Input order exactly.
        let a = html.find("<td>1</td>").unwrap_or(usize::MAX);
        let b = html.find("<td>4</td>").unwrap_or(0);
        assert!(a < b);
    }

    #[test]
    fn ragged_rows_render_short() {
        let html = render_one(SectionBody::Table {
            headers: vec!["A".into(), "B".into(), "C".into()],
            rows: vec![vec!["1".into()]],
        });
        assert_eq!(html.matches("<th>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 1);
    }

    #[test]
    fn comparison_marks_first_card_winner() {
        let html = render_one(SectionBody::Comparison {
            winner: ComparisonCard {
                label: "SVM".into(),
                percent: 87.0,
            },
            runner_up: ComparisonCard {
                label: "Naive Bayes".into(),
                percent: 78.0,
            },
        });
        assert!(html.contains(r#"<div class="comparison-card winner"><div class="comparison-value">87%"#));
        assert!(html.contains("SVM (Winner)"));
        assert!(!html.contains("Naive Bayes (Winner)"));
    }

    #[test]
    fn gallery_handles_mixed_entries() {
        let html = render_one(SectionBody::Gallery {
            images: vec![
                GalleryEntry::Path("assets/a.png".into()),
                GalleryEntry::Captioned {
                    src: "assets/b.png".into(),
                    caption: "Field test".into(),
                },
            ],
        });
        assert_eq!(html.matches("<img").count(), 2);
        // Only the captioned entry gets caption markup.
        assert_eq!(html.matches("gallery-item").count(), 1);
        assert!(html.contains("Field test"));
    }

    #[test]
    fn chart_section_emits_indexed_canvas() {
        let catalog = Catalog::builtin();
        let sentiment = match catalog.get("sentiment") {
            Some(p) => p,
            None => panic!("sentiment project missing"),
        };
        let html = render_project(sentiment);
        // The pie chart is section index 4.
        assert!(html.contains(r#"<canvas id="chart-4">"#));
    }

    #[test]
    fn toggle_scopes_ids_per_section() {
        let html = render_one(SectionBody::Toggle {
            before: "raw".into(),
            after: "clean".into(),
        });
        assert!(html.contains(r#"data-target="before-0""#));
        assert!(html.contains(r#"<div class="toggle-content active" id="before-0">"#));
        assert!(html.contains(r#"<div class="toggle-content" id="after-0">"#));
    }

    #[test]
    fn unknown_section_renders_empty_paragraph() {
        let html = render_one(SectionBody::Unknown);
        assert!(html.contains(r#"<p class="modal-text"></p>"#));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let html = render_one(SectionBody::Gallery {
            images: vec![GalleryEntry::Path("a\"b.png".into())],
        });
        assert!(html.contains("a&quot;b.png"));
    }

    #[test]
    fn iot_dashboard_has_three_slots() {
        let html = render_one(SectionBody::IotDashboard);
        assert_eq!(html.matches("sensor-card").count(), 3);
        assert_eq!(html.matches("status-normal").count(), 3);
        assert!(html.contains(ids::TEMP_VALUE));
        assert!(html.contains(ids::PH_STATUS));
    }
}
