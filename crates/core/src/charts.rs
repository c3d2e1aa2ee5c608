//! Chart binding: maps a catalog chart spec to the charting backend's
//! configuration object.
//!
//! This is a pure mapping. The visual constants are design tokens, not
//! configuration: line charts are smoothed and filled with a translucent
//! derivative of the series color, bar charts pin the vertical scale to
//! 0–100, pie and doughnut charts carry no axes at all.

use folio_protocol::chart::{
    ChartConfig, ChartData, ChartDataset, ChartKind, ChartOptions, GridOptions, LegendLabels,
    LegendOptions, Paint, PluginOptions, ScaleOptions, ScalePair, TickOptions,
};
use folio_protocol::theme;

use crate::catalog::{ChartSeries, ChartSpec};

/// Dataset label for bar charts declared with the bare value shape.
const BAR_SERIES_LABEL: &str = "Accuracy (%)";

/// Build the backend configuration for one chart section.
pub fn bind_chart(spec: &ChartSpec) -> ChartConfig {
    ChartConfig {
        kind: spec.kind,
        data: ChartData {
            labels: spec.labels.clone(),
            datasets: datasets_for(spec),
        },
        options: options_for(spec.kind),
    }
}

fn datasets_for(spec: &ChartSpec) -> Vec<ChartDataset> {
    match (spec.kind, &spec.series) {
        (ChartKind::Line, ChartSeries::Series(series)) => series
            .iter()
            .map(|s| ChartDataset {
                label: Some(s.label.clone()),
                data: s.values.clone(),
                border_color: Some(s.color.clone()),
                background_color: Some(Paint::Single(theme::translucent_fill(&s.color))),
                tension: Some(0.4),
                fill: Some(true),
                ..ChartDataset::default()
            })
            .collect(),
        (ChartKind::Line, ChartSeries::Values { data, colors }) => {
            // A line chart declared with the bare shape still draws: one
            // unlabeled series in the first palette color.
            let color = colors.first().cloned();
            vec![ChartDataset {
                data: data.clone(),
                background_color: color
                    .as_deref()
                    .map(|c| Paint::Single(theme::translucent_fill(c))),
                border_color: color,
                tension: Some(0.4),
                fill: Some(true),
                ..ChartDataset::default()
            }]
        }
        (ChartKind::Bar, ChartSeries::Values { data, colors }) => vec![ChartDataset {
            label: Some(BAR_SERIES_LABEL.into()),
            data: data.clone(),
            background_color: Some(Paint::PerPoint(colors.clone())),
            border_radius: Some(8.0),
            ..ChartDataset::default()
        }],
        (ChartKind::Bar, ChartSeries::Series(series)) => series
            .iter()
            .map(|s| ChartDataset {
                label: Some(s.label.clone()),
                data: s.values.clone(),
                background_color: Some(Paint::Single(s.color.clone())),
                border_radius: Some(8.0),
                ..ChartDataset::default()
            })
            .collect(),
        (ChartKind::Pie | ChartKind::Doughnut, ChartSeries::Values { data, colors }) => {
            vec![ChartDataset {
                data: data.clone(),
                background_color: Some(Paint::PerPoint(colors.clone())),
                border_width: Some(0.0),
                ..ChartDataset::default()
            }]
        }
        (ChartKind::Pie | ChartKind::Doughnut, ChartSeries::Series(series)) => series
            .iter()
            .map(|s| ChartDataset {
                data: s.values.clone(),
                background_color: Some(Paint::Single(s.color.clone())),
                border_width: Some(0.0),
                ..ChartDataset::default()
            })
            .collect(),
    }
}

fn options_for(kind: ChartKind) -> ChartOptions {
    let scales = match kind {
        ChartKind::Line => Some(ScalePair {
            x: ticked_scale(GridOptions {
                color: Some(theme::GRID_LINE.into()),
                display: None,
            }),
            y: ticked_scale(GridOptions {
                color: Some(theme::GRID_LINE.into()),
                display: None,
            }),
        }),
        ChartKind::Bar => Some(ScalePair {
            x: ticked_scale(GridOptions {
                color: None,
                display: Some(false),
            }),
            y: ScaleOptions {
                min: Some(0.0),
                max: Some(100.0),
                ..ticked_scale(GridOptions {
                    color: Some(theme::GRID_LINE.into()),
                    display: None,
                })
            },
        }),
        ChartKind::Pie | ChartKind::Doughnut => None,
    };

    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: true,
        plugins: PluginOptions {
            legend: LegendOptions {
                labels: LegendLabels {
                    color: theme::LEGEND_TEXT.into(),
                },
            },
        },
        scales,
    }
}

fn ticked_scale(grid: GridOptions) -> ScaleOptions {
    ScaleOptions {
        ticks: Some(TickOptions {
            color: theme::AXIS_TICK.into(),
        }),
        grid: Some(grid),
        min: None,
        max: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LabeledSeries;

    fn line_spec() -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            labels: vec!["00:00".into(), "04:00".into()],
            series: ChartSeries::Series(vec![LabeledSeries {
                label: "Temperature (°C)".into(),
                values: vec![27.0, 26.0],
                color: "#ef4444".into(),
            }]),
        }
    }

    #[test]
    fn line_series_get_translucent_fills() {
        let config = bind_chart(&line_spec());
        assert_eq!(config.kind, ChartKind::Line);
        let ds = &config.data.datasets[0];
        assert_eq!(ds.border_color.as_deref(), Some("#ef4444"));
        assert_eq!(
            ds.background_color,
            Some(Paint::Single("#ef444420".into()))
        );
        assert_eq!(ds.tension, Some(0.4));
        assert_eq!(ds.fill, Some(true));
    }

    #[test]
    fn bar_pins_vertical_scale() {
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            labels: vec!["RF".into(), "SVM".into()],
            series: ChartSeries::Values {
                data: vec![88.0, 85.0],
                colors: vec!["#6366f1".into(), "#8b5cf6".into()],
            },
        };
        let config = bind_chart(&spec);
        let scales = match config.options.scales {
            Some(s) => s,
            None => panic!("bar chart must have scales"),
        };
        assert_eq!(scales.y.min, Some(0.0));
        assert_eq!(scales.y.max, Some(100.0));
        assert_eq!(scales.x.grid.and_then(|g| g.display), Some(false));
        assert_eq!(
            config.data.datasets[0].label.as_deref(),
            Some(BAR_SERIES_LABEL)
        );
        assert_eq!(config.data.datasets[0].border_radius, Some(8.0));
    }

    #[test]
    fn pie_and_doughnut_carry_no_scales() {
        for kind in [ChartKind::Pie, ChartKind::Doughnut] {
            let spec = ChartSpec {
                kind,
                labels: vec!["Positive".into(), "Negative".into()],
                series: ChartSeries::Values {
                    data: vec![85.3, 14.7],
                    colors: vec!["#10b981".into(), "#ef4444".into()],
                },
            };
            let config = bind_chart(&spec);
            assert!(config.options.scales.is_none());
            assert_eq!(config.data.datasets[0].border_width, Some(0.0));
            assert_eq!(
                config.data.datasets[0].background_color,
                Some(Paint::PerPoint(vec!["#10b981".into(), "#ef4444".into()]))
            );
        }
    }

    #[test]
    fn legend_always_uses_the_design_token() {
        let config = bind_chart(&line_spec());
        assert_eq!(config.options.plugins.legend.labels.color, theme::LEGEND_TEXT);
    }

    #[test]
    fn bare_shaped_line_still_binds() {
        let spec = ChartSpec {
            kind: ChartKind::Line,
            labels: vec!["a".into()],
            series: ChartSeries::Values {
                data: vec![1.0],
                colors: vec![],
            },
        };
        let config = bind_chart(&spec);
        assert_eq!(config.data.datasets.len(), 1);
        assert_eq!(config.data.datasets[0].border_color, None);
    }
}
