use serde::{Deserialize, Serialize};

/// Configuration object handed to the external charting backend.
///
/// The backend is an opaque drawing library; this type exists so the core
/// can build the full configuration as plain data and hosts can pass it
/// through unchanged (the browser bridge serializes it to JSON whose keys
/// match the library's expected config object verbatim).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// The four chart kinds the catalog can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One dataset. Field names serialize camelCase to match the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

/// A fill/stroke paint: one color for the whole dataset, or one per point
/// (bar/pie/doughnut slices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: PluginOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalePair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLabels {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub x: ScaleOptions,
    pub y: ScaleOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOptions {
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ChartKind::Doughnut).unwrap_or_default();
        assert_eq!(json, "\"doughnut\"");
    }

    #[test]
    fn config_keys_are_camel_case() {
        let config = ChartConfig {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: vec!["SVM".into()],
                datasets: vec![ChartDataset {
                    label: Some("Accuracy (%)".into()),
                    data: vec![87.0],
                    background_color: Some(Paint::PerPoint(vec!["#6366f1".into()])),
                    border_radius: Some(8.0),
                    ..ChartDataset::default()
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: true,
                plugins: PluginOptions {
                    legend: LegendOptions {
                        labels: LegendLabels {
                            color: "#a0a0b0".into(),
                        },
                    },
                },
                scales: None,
            },
        };
        let json = serde_json::to_string(&config).unwrap_or_default();
        assert!(json.contains("\"type\":\"bar\""));
        assert!(json.contains("\"backgroundColor\""));
        assert!(json.contains("\"borderRadius\""));
        assert!(json.contains("\"maintainAspectRatio\""));
        // Unset options are omitted, not serialized as null.
        assert!(!json.contains("borderColor"));
        assert!(!json.contains("scales"));
    }

    #[test]
    fn per_point_paint_is_a_bare_array() {
        let paint = Paint::PerPoint(vec!["#10b981".into(), "#ef4444".into()]);
        let json = serde_json::to_string(&paint).unwrap_or_default();
        assert_eq!(json, "[\"#10b981\",\"#ef4444\"]");
    }
}
