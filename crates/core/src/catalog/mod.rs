mod builtin;
mod load;

pub use load::CatalogError;

use folio_protocol::ChartKind;
use serde::{Deserialize, Serialize};

/// The fixed collection of project records available to the modal.
///
/// Defined once at startup — either the built-in set or a JSON file — and
/// never mutated afterwards. Lookup misses are part of normal operation
/// (a card can reference a key the catalog does not carry) and yield
/// `None`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog from a project list, rejecting duplicate keys.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        for (i, project) in projects.iter().enumerate() {
            if projects[..i].iter().any(|p| p.key == project.key) {
                return Err(CatalogError::DuplicateKey(project.key.clone()));
            }
        }
        Ok(Self { projects })
    }

    /// Look up a project by its stable key.
    pub fn get(&self, key: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.key == key)
    }

    /// All projects in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// One project record: header fields plus an ordered run of content
/// sections, optionally closed by an external paper reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_url: Option<String>,
}

impl Project {
    /// Whether any section renders the live IoT dashboard (its presence is
    /// what starts the sensor simulation on modal open).
    pub fn has_iot_dashboard(&self) -> bool {
        self.sections
            .iter()
            .any(|s| matches!(s.body, SectionBody::IotDashboard))
    }
}

/// One self-contained unit of project-detail content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    /// Icon glyph name rendered next to the section title.
    pub icon: String,
    #[serde(flatten)]
    pub body: SectionBody,
}

/// The closed set of section rendering kinds.
///
/// Tagged by a `type` field in JSON. Tags outside the known set
/// deserialize to `Unknown`, which renders as an empty paragraph —
/// an unrecognized tag must never fail a catalog load or a render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionBody {
    /// A paragraph of trusted content (may embed limited inline markup).
    Text { content: String },
    /// Two labeled percentages. The first is always presented as the
    /// winner — the ordering is an authoring decision, not a comparison
    /// computed at render time.
    Comparison {
        winner: ComparisonCard,
        runner_up: ComparisonCard,
    },
    /// Header row plus body rows. Rows are expected to match the header
    /// length; the renderer tolerates ragged rows and renders them as-is.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A chart drawn by the external charting backend into a placeholder
    /// canvas emitted at render time.
    Chart {
        #[serde(flatten)]
        spec: ChartSpec,
    },
    /// Two named content blobs with exactly one visible at a time,
    /// "before" shown by default.
    Toggle { before: String, after: String },
    /// A grid of images, each a bare path or a path with a caption.
    Gallery { images: Vec<GalleryEntry> },
    /// Three live sensor slots fed by the sensor simulation.
    IotDashboard,
    /// Fallback for unrecognized tags.
    #[serde(other)]
    Unknown,
}

/// One side of a comparison layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCard {
    pub label: String,
    pub percent: f64,
}

/// Declarative chart description carried by a `Chart` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: ChartSeries,
}

/// The two dataset shapes a chart section can declare: a list of labeled
/// series (line charts), or one bare value run with per-point colors
/// (bar/pie/doughnut).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartSeries {
    Series(Vec<LabeledSeries>),
    Values { data: Vec<f64>, colors: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

/// A gallery image: a bare path, or a path with a caption. Layout never
/// assumes the caption exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GalleryEntry {
    Path(String),
    Captioned { src: String, caption: String },
}

impl GalleryEntry {
    pub fn src(&self) -> &str {
        match self {
            Self::Path(src) => src,
            Self::Captioned { src, .. } => src,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::Path(_) => None,
            Self::Captioned { caption, .. } => Some(caption),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("sentiment").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn duplicate_keys_rejected() {
        let project = |key: &str| Project {
            key: key.into(),
            title: "T".into(),
            subtitle: "S".into(),
            sections: vec![],
            paper_url: None,
        };
        let result = Catalog::from_projects(vec![project("a"), project("a")]);
        assert!(matches!(result, Err(CatalogError::DuplicateKey(k)) if k == "a"));
    }

    #[test]
    fn unknown_section_tag_falls_back() {
        let json = r#"{"title":"X","icon":"fa-star","type":"hologram"}"#;
        let section: Section = serde_json::from_str(json).unwrap_or(Section {
            title: String::new(),
            icon: String::new(),
            body: SectionBody::Text {
                content: "parse failed".into(),
            },
        });
        assert!(matches!(section.body, SectionBody::Unknown));
    }

    #[test]
    fn gallery_entry_accepts_both_shapes() {
        let json = r#"["assets/a.png",{"src":"assets/b.png","caption":"Field test"}]"#;
        let entries: Vec<GalleryEntry> = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].src(), "assets/a.png");
        assert_eq!(entries[0].caption(), None);
        assert_eq!(entries[1].caption(), Some("Field test"));
    }

    #[test]
    fn chart_series_accepts_both_shapes() {
        let labeled = r##"[{"label":"pH","values":[7.2,7.1],"color":"#10b981"}]"##;
        let series: ChartSeries = serde_json::from_str(labeled)
            .unwrap_or(ChartSeries::Values {
                data: vec![],
                colors: vec![],
            });
        assert!(matches!(series, ChartSeries::Series(ref s) if s.len() == 1));

        let bare = r##"{"data":[85.3,14.7],"colors":["#10b981","#ef4444"]}"##;
        let series: ChartSeries = serde_json::from_str(bare).unwrap_or(ChartSeries::Series(vec![]));
        assert!(matches!(series, ChartSeries::Values { ref data, .. } if data.len() == 2));
    }

    #[test]
    fn iot_presence_detected() {
        let catalog = Catalog::builtin();
        let pale = catalog.get("pale").map(Project::has_iot_dashboard);
        let sentiment = catalog.get("sentiment").map(Project::has_iot_dashboard);
        assert_eq!(pale, Some(true));
        assert_eq!(sentiment, Some(false));
    }
}
