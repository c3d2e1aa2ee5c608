//! Draws the page model with ratatui.
//!
//! Everything scroll- or event-dependent is read back from the
//! `PageModel`, never recomputed here, so the terminal shows exactly what
//! the command stream produced.

use folio_core::SectionBody;
use folio_core::controllers::modal::DeferredChart;
use folio_protocol::chart::{ChartConfig, ChartKind, Paint};
use folio_protocol::contract::{css, ids};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Clear, Dataset, Gauge, GraphType, Paragraph,
        Wrap},
};

use crate::app::{App, FILTERS, ROW_UNITS, SECTIONS, SKILL_BARS, card_id};

const ACCENT: Color = Color::Rgb(99, 102, 241);
const MUTED: Color = Color::Rgb(107, 107, 123);

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if area.height < 4 {
        return;
    }

    let header = Rect::new(area.x, area.y, area.width, 1);
    let footer = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    let content = Rect::new(area.x, area.y + 1, area.width, area.height - 2);

    draw_navbar(frame, app, header);
    draw_sections(frame, app, content);
    draw_footer(frame, app, footer);

    if app.modal.is_open() {
        draw_modal(frame, app, content);
    }
}

fn draw_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let scrolled = app.model.id_has_class(ids::NAVBAR, css::SCROLLED);
    let menu_open = app.model.id_has_class(ids::NAV_MENU, css::ACTIVE);

    let mut spans = vec![Span::styled(
        " folio ",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    for section in &SECTIONS {
        let active = app
            .model
            .attr_has_class("href", &format!("#{}", section.id), css::ACTIVE);
        let style = if active {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", section.label), style));
    }
    if menu_open {
        spans.push(Span::styled(" [menu] ", Style::default().fg(ACCENT)));
    }

    let bg = if scrolled {
        Color::Rgb(30, 30, 46)
    } else {
        Color::Black
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let help = if app.modal.is_open() {
        " Esc close | b/a toggle panels ".to_string()
    } else {
        format!(
            " ↑↓ scroll | Tab/1-{} filter | ←→ select | Enter open | m menu | d download | q quit ",
            FILTERS.len(),
        )
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(MUTED).bg(Color::Black)),
        area,
    );
}

/// Map a page-unit rectangle into terminal rows within `content`.
fn section_area(content: Rect, scroll_y: f64, top: f64, height: f64) -> Option<Rect> {
    let start = ((top - scroll_y) / ROW_UNITS).floor() as i32;
    let rows = (height / ROW_UNITS).ceil() as i32;
    let end = start + rows;
    let visible_start = start.max(0);
    let visible_end = end.min(i32::from(content.height));
    if visible_start >= visible_end {
        return None;
    }
    Some(Rect::new(
        content.x,
        content.y + visible_start as u16,
        content.width,
        (visible_end - visible_start) as u16,
    ))
}

fn draw_sections(frame: &mut Frame, app: &App, content: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), content);

    for section in &SECTIONS {
        let Some(area) = section_area(content, app.scroll_y, section.top, section.height) else {
            continue;
        };
        let block = Block::default()
            .borders(Borders::TOP)
            .title(format!(" {} ", section.label))
            .border_style(Style::default().fg(MUTED));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match section.id {
            "home" => draw_home(frame, app, inner),
            "about" => draw_about(frame, app, inner),
            "skills" => draw_skills(frame, app, inner),
            "projects" => draw_projects(frame, app, inner),
            "contact" => draw_contact(frame, inner),
            _ => {}
        }
    }
}

fn draw_home(frame: &mut Frame, app: &App, area: Rect) {
    let typing = app.model.text(ids::TYPING_TEXT);
    let count = app.model.text(ids::DOWNLOAD_COUNT);
    let button = strip_tags(app.model.markup(ids::DOWNLOAD_BUTTON).unwrap_or(
        r#"<i class="fas fa-download"></i> Download CV"#,
    ));
    let lines = vec![
        Line::from(Span::styled(
            "Hi, I'm a Data Professional",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(typing.to_string(), Style::default().fg(ACCENT)),
            Span::styled("▌", Style::default().fg(ACCENT)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("[d] {button}"), Style::default().fg(Color::Green)),
            Span::styled(
                format!("  downloads: {count}"),
                Style::default().fg(MUTED),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_about(frame: &mut Frame, _app: &App, area: Rect) {
    let text = "Data analyst with a focus on NLP, classical machine learning, \
                and IoT telemetry. Projects below — open one for the details.";
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_skills(frame: &mut Frame, app: &App, area: Rect) {
    for (i, (id, label, _)) in SKILL_BARS.iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y + 1 >= area.y + area.height {
            break;
        }
        let row = Rect::new(area.x, y, area.width.min(60), 1);
        // Width arrives only after the bar has been scrolled into view.
        let percent = app.model.width(id).unwrap_or(0.0);
        frame.render_widget(
            Gauge::default()
                .label(format!("{label} {percent:.0}%"))
                .ratio((percent / 100.0).clamp(0.0, 1.0))
                .gauge_style(Style::default().fg(ACCENT).bg(Color::Rgb(30, 30, 46))),
            row,
        );
    }
}

fn draw_projects(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let mut tabs = vec![Span::styled("filters: ", Style::default().fg(MUTED))];
    for key in FILTERS {
        let active = app.model.attr_has_class("data-filter", key, css::ACTIVE);
        let style = if active {
            Style::default().fg(Color::Black).bg(ACCENT)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {key} "), style));
        tabs.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), Rect::new(
        area.x,
        area.y,
        area.width,
        1,
    ));

    let mut y = area.y + 2;
    for (i, project) in app.catalog.projects().iter().enumerate() {
        if app.model.is_hidden(&card_id(&project.key)) {
            continue;
        }
        if y + 2 > area.y + area.height {
            break;
        }
        let selected = i == app.selected_card;
        let revealed = app
            .model
            .id_has_class(&card_id(&project.key), css::ANIMATED);
        let marker = if selected { "▶" } else { " " };
        let title_style = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if revealed {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(MUTED)
        };
        let lines = vec![
            Line::from(Span::styled(
                format!("{marker} {}", project.title),
                title_style,
            )),
            Line::from(Span::styled(
                format!("   {}", project.subtitle),
                Style::default().fg(MUTED),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines),
            Rect::new(area.x, y, area.width, 2),
        );
        y += 3;
    }
}

fn draw_contact(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("Reach me via the links on the published papers.")
            .style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn draw_modal(frame: &mut Frame, app: &App, content: Rect) {
    let Some(key) = app.modal.open_key() else {
        return;
    };
    let Some(project) = app.catalog.get(key) else {
        return;
    };

    let margin_x = content.width / 10;
    let margin_y = content.height / 12;
    let area = Rect::new(
        content.x + margin_x,
        content.y + margin_y,
        content.width - margin_x * 2,
        content.height - margin_y * 2,
    );
    if area.width < 4 || area.height < 4 {
        return;
    }
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} — {} ", project.title, project.subtitle))
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Rgb(16, 16, 26)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    for (index, section) in project.sections.iter().enumerate() {
        if y >= inner.y + inner.height {
            break;
        }
        let remaining = Rect::new(inner.x, y, inner.width, inner.y + inner.height - y);
        y += draw_modal_section(frame, app, remaining, index, section);
    }

    if let Some(url) = &project.paper_url {
        let row = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        frame.render_widget(
            Paragraph::new(format!("paper: {url}"))
                .style(Style::default().fg(MUTED))
                .alignment(Alignment::Left),
            row,
        );
    }
}

/// Draw one modal section into the top of `area`; returns rows consumed.
fn draw_modal_section(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    index: usize,
    section: &folio_core::Section,
) -> u16 {
    if area.height == 0 {
        return 0;
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            section.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Rect::new(area.x, area.y, area.width, 1),
    );
    let body = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1),
    );
    if body.height == 0 {
        return 1;
    }

    let used = match &section.body {
        SectionBody::Text { content } => {
            let text = strip_tags(content);
            let rows = (text.len() as u16 / body.width.max(1) + 1).min(body.height).min(3);
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true }),
                Rect::new(body.x, body.y, body.width, rows),
            );
            rows
        }
        SectionBody::Comparison { winner, runner_up } => {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {}% {} (Winner) ", winner.percent, winner.label),
                    Style::default().fg(Color::Black).bg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {}% {} ", runner_up.percent, runner_up.label),
                    Style::default().fg(Color::Gray).bg(Color::Rgb(30, 30, 46)),
                ),
            ]);
            frame.render_widget(
                Paragraph::new(line),
                Rect::new(body.x, body.y, body.width, 1),
            );
            1
        }
        SectionBody::Table { headers, rows } => {
            let mut lines = vec![Line::from(Span::styled(
                headers
                    .iter()
                    .map(|h| format!("{h:<12}"))
                    .collect::<String>(),
                Style::default().fg(ACCENT),
            ))];
            for row in rows {
                lines.push(Line::from(
                    row.iter().map(|c| format!("{c:<12}")).collect::<String>(),
                ));
            }
            let rows_used = (lines.len() as u16).min(body.height);
            frame.render_widget(
                Paragraph::new(lines),
                Rect::new(body.x, body.y, body.width, rows_used),
            );
            rows_used
        }
        SectionBody::Chart { .. } => {
            let canvas = folio_core::markup::canvas_id(index);
            let chart = app.modal_charts.iter().find(|c| c.canvas_id == canvas);
            match chart {
                Some(chart) => draw_chart(frame, chart, body),
                None => 0,
            }
        }
        SectionBody::Toggle { before, after } => {
            let after_active = app
                .model
                .id_has_class(&format!("after-{index}"), css::ACTIVE);
            let (label, text) = if after_active {
                ("After", after)
            } else {
                ("Before", before)
            };
            let rows = (body.height).min(4);
            let mut lines = vec![Line::from(Span::styled(
                format!("[{label}]"),
                Style::default().fg(ACCENT),
            ))];
            lines.extend(text.lines().take(rows as usize - 1).map(|l| {
                Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Gray)))
            }));
            frame.render_widget(
                Paragraph::new(lines),
                Rect::new(body.x, body.y, body.width, rows),
            );
            rows
        }
        SectionBody::Gallery { images } => {
            let lines: Vec<Line> = images
                .iter()
                .map(|img| {
                    let caption = img.caption().map(|c| format!(" — {c}")).unwrap_or_default();
                    Line::from(Span::styled(
                        format!("▣ {}{caption}", img.src()),
                        Style::default().fg(Color::Gray),
                    ))
                })
                .collect();
            let rows = (lines.len() as u16).min(body.height);
            frame.render_widget(
                Paragraph::new(lines),
                Rect::new(body.x, body.y, body.width, rows),
            );
            rows
        }
        SectionBody::IotDashboard => {
            let slot = |value_id: &str, status_id: &str, label: &str| {
                let value = app.model.text(value_id);
                let status = app.model.text(status_id);
                let warn = app.model.id_has_class(status_id, css::STATUS_WARNING);
                let color = if warn { Color::Yellow } else { Color::Green };
                Span::styled(
                    format!(" {label}: {} [{}] ", value, status),
                    Style::default().fg(color),
                )
            };
            let line = Line::from(vec![
                slot(ids::TEMP_VALUE, ids::TEMP_STATUS, "Temp"),
                slot(ids::AMMONIA_VALUE, ids::AMMONIA_STATUS, "NH₃"),
                slot(ids::PH_VALUE, ids::PH_STATUS, "pH"),
            ]);
            frame.render_widget(
                Paragraph::new(line),
                Rect::new(body.x, body.y, body.width, 1),
            );
            1
        }
        SectionBody::Unknown => 0,
    };

    used + 2
}

/// Draw a bound chart config with the widget that fits its kind.
fn draw_chart(frame: &mut Frame, chart: &DeferredChart, area: Rect) -> u16 {
    match chart.config.kind {
        ChartKind::Bar => draw_bar_chart(frame, &chart.config, area),
        ChartKind::Line => draw_line_chart(frame, &chart.config, area),
        ChartKind::Pie | ChartKind::Doughnut => draw_slice_legend(frame, &chart.config, area),
    }
}

fn draw_bar_chart(frame: &mut Frame, config: &ChartConfig, area: Rect) -> u16 {
    let Some(dataset) = config.data.datasets.first() else {
        return 0;
    };
    let rows = area.height.min(6);
    let values: Vec<(String, u64)> = config
        .data
        .labels
        .iter()
        .zip(&dataset.data)
        .map(|(label, value)| (label.clone(), *value as u64))
        .collect();
    let data: Vec<(&str, u64)> = values.iter().map(|(l, v)| (l.as_str(), *v)).collect();
    frame.render_widget(
        BarChart::default()
            .data(&data)
            .bar_width(9)
            .bar_gap(1)
            // The y scale is pinned 0–100 by the binding.
            .max(config.options.scales.as_ref().and_then(|s| s.y.max).unwrap_or(100.0) as u64)
            .bar_style(Style::default().fg(ACCENT))
            .value_style(Style::default().fg(Color::White)),
        Rect::new(area.x, area.y, area.width, rows),
    );
    rows
}

fn draw_line_chart(frame: &mut Frame, config: &ChartConfig, area: Rect) -> u16 {
    let rows = area.height.min(8);
    let points: Vec<(String, Color, Vec<(f64, f64)>)> = config
        .data
        .datasets
        .iter()
        .map(|ds| {
            (
                ds.label.clone().unwrap_or_default(),
                ds.border_color.as_deref().map_or(ACCENT, hex_color),
                ds.data
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v))
                    .collect(),
            )
        })
        .collect();
    let (min, max) = points
        .iter()
        .flat_map(|(_, _, p)| p.iter().map(|(_, v)| *v))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !min.is_finite() {
        return 0;
    }
    let datasets: Vec<Dataset> = points
        .iter()
        .map(|(label, color, data)| {
            Dataset::default()
                .name(label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(*color))
                .data(data)
        })
        .collect();
    let x_max = config.data.labels.len().saturating_sub(1) as f64;
    frame.render_widget(
        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max.max(1.0)])
                    .labels(config.data.labels.clone())
                    .style(Style::default().fg(MUTED)),
            )
            .y_axis(
                Axis::default()
                    .bounds([min.floor(), max.ceil()])
                    .labels(vec![format!("{min:.0}"), format!("{max:.0}")])
                    .style(Style::default().fg(MUTED)),
            ),
        Rect::new(area.x, area.y, area.width, rows),
    );
    rows
}

fn draw_slice_legend(frame: &mut Frame, config: &ChartConfig, area: Rect) -> u16 {
    let Some(dataset) = config.data.datasets.first() else {
        return 0;
    };
    let total: f64 = dataset.data.iter().sum();
    let colors: Vec<Color> = match &dataset.background_color {
        Some(Paint::PerPoint(list)) => list.iter().map(|c| hex_color(c)).collect(),
        Some(Paint::Single(c)) => vec![hex_color(c)],
        None => vec![ACCENT],
    };
    let lines: Vec<Line> = config
        .data
        .labels
        .iter()
        .zip(&dataset.data)
        .enumerate()
        .map(|(i, (label, value))| {
            let color = colors.get(i % colors.len().max(1)).copied().unwrap_or(ACCENT);
            let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{label}: {value} ({share:.1}%)"),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();
    let rows = (lines.len() as u16).min(area.height);
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(area.x, area.y, area.width, rows),
    );
    rows
}

/// Reduce trusted inline markup to plain terminal text. `<br>` becomes a
/// separator; every other tag just disappears.
fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut tag: Option<String> = None;
    for ch in markup.chars() {
        match ch {
            '<' => tag = Some(String::new()),
            '>' => {
                if let Some(name) = tag.take() {
                    if name.trim_start_matches('/').eq_ignore_ascii_case("br") {
                        out.push(' ');
                    }
                }
            }
            _ => match tag.as_mut() {
                Some(name) => name.push(ch),
                None => out.push(ch),
            },
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    let parse = |s: Option<&str>| s.and_then(|s| u8::from_str_radix(s, 16).ok());
    match (parse(hex.get(0..2)), parse(hex.get(2..4)), parse(hex.get(4..6))) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_flattens_markup() {
        assert_eq!(
            strip_tags("<strong>Sensors:</strong> pH<br>next"),
            "Sensors: pH next"
        );
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(hex_color("#ef4444"), Color::Rgb(0xef, 0x44, 0x44));
        assert_eq!(hex_color("nonsense"), ACCENT);
    }
}
