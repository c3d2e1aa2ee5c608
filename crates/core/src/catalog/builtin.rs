//! The built-in project catalog.

use folio_protocol::ChartKind;

use super::{
    Catalog, ChartSeries, ChartSpec, ComparisonCard, GalleryEntry, LabeledSeries, Project, Section,
    SectionBody,
};

impl Catalog {
    /// The three portfolio projects shipped with the page.
    pub fn builtin() -> Self {
        Self {
            projects: vec![sentiment(), pale(), ecommerce()],
        }
    }
}

fn text(title: &str, icon: &str, content: &str) -> Section {
    Section {
        title: title.into(),
        icon: icon.into(),
        body: SectionBody::Text {
            content: content.into(),
        },
    }
}

fn sentiment() -> Project {
    Project {
        key: "sentiment".into(),
        title: "Sentiment Analysis - Wisata Brebes".into(),
        subtitle: "NLP-based sentiment classification of tourist reviews".into(),
        sections: vec![
            text(
                "Project Overview",
                "fa-info-circle",
                "This project analyzes sentiment from tourist reviews of attractions in Brebes \
                 using Support Vector Machine (SVM) classification. The goal was to help tourism \
                 stakeholders understand visitor satisfaction and identify areas for improvement.",
            ),
            text(
                "Methodology",
                "fa-cogs",
                "<strong>Data Collection:</strong> Scraped reviews from various platforms<br>\
                 <strong>Preprocessing:</strong> Text cleaning, tokenization, stopword removal, stemming<br>\
                 <strong>Feature Extraction:</strong> TF-IDF Vectorization<br>\
                 <strong>Modeling:</strong> SVM with RBF kernel, cross-validation",
            ),
            Section {
                title: "Algorithm Comparison".into(),
                icon: "fa-chart-bar".into(),
                body: SectionBody::Comparison {
                    winner: ComparisonCard {
                        label: "SVM".into(),
                        percent: 87.0,
                    },
                    runner_up: ComparisonCard {
                        label: "Naive Bayes".into(),
                        percent: 78.0,
                    },
                },
            },
            Section {
                title: "Classification Report".into(),
                icon: "fa-table".into(),
                body: SectionBody::Table {
                    headers: vec![
                        "Metric".into(),
                        "Positive".into(),
                        "Negative".into(),
                        "Neutral".into(),
                    ],
                    rows: vec![
                        vec!["Precision".into(), "0.89".into(), "0.85".into(), "0.82".into()],
                        vec!["Recall".into(), "0.87".into(), "0.88".into(), "0.80".into()],
                        vec!["F1-Score".into(), "0.88".into(), "0.86".into(), "0.81".into()],
                    ],
                },
            },
            Section {
                title: "Sentiment Distribution".into(),
                icon: "fa-chart-pie".into(),
                body: SectionBody::Chart {
                    spec: ChartSpec {
                        kind: ChartKind::Pie,
                        labels: vec!["Positive".into(), "Negative".into()],
                        series: ChartSeries::Values {
                            data: vec![85.3, 14.7],
                            colors: vec!["#10b981".into(), "#ef4444".into()],
                        },
                    },
                },
            },
            Section {
                title: "Model Results".into(),
                icon: "fa-images".into(),
                body: SectionBody::Gallery {
                    images: vec![GalleryEntry::Path("assets/konten1.png".into())],
                },
            },
        ],
        paper_url: Some(
            "https://openlibrarypublications.telkomuniversity.ac.id/index.php/engineering/article/download/27583/26061/54564"
                .into(),
        ),
    }
}

fn pale() -> Project {
    Project {
        key: "pale".into(),
        title: "PALE - Pantau Lele".into(),
        subtitle: "IoT-based catfish pond monitoring system".into(),
        sections: vec![
            text(
                "Project Overview",
                "fa-info-circle",
                "PALE (Pantau Lele) is an IoT-based monitoring system for catfish farming. \
                 The system uses sensors to track water quality parameters in real-time, \
                 helping farmers maintain optimal conditions for fish health and growth.",
            ),
            text(
                "System Architecture",
                "fa-network-wired",
                "<strong>Sensors:</strong> pH, Temperature, Ammonia sensors<br>\
                 <strong>Controller:</strong> ESP32 microcontroller<br>\
                 <strong>Communication:</strong> MQTT protocol<br>\
                 <strong>Dashboard:</strong> Real-time web monitoring",
            ),
            Section {
                title: "Live Sensor Dashboard".into(),
                icon: "fa-tachometer-alt".into(),
                body: SectionBody::IotDashboard,
            },
            Section {
                title: "Historical Data".into(),
                icon: "fa-chart-line".into(),
                body: SectionBody::Chart {
                    spec: ChartSpec {
                        kind: ChartKind::Line,
                        labels: vec![
                            "00:00".into(),
                            "04:00".into(),
                            "08:00".into(),
                            "12:00".into(),
                            "16:00".into(),
                            "20:00".into(),
                        ],
                        series: ChartSeries::Series(vec![
                            LabeledSeries {
                                label: "Temperature (°C)".into(),
                                values: vec![27.0, 26.0, 28.0, 30.0, 29.0, 27.0],
                                color: "#ef4444".into(),
                            },
                            LabeledSeries {
                                label: "pH".into(),
                                values: vec![7.2, 7.1, 7.3, 7.4, 7.2, 7.1],
                                color: "#10b981".into(),
                            },
                        ]),
                    },
                },
            },
            Section {
                title: "Project Activity & Documentation".into(),
                icon: "fa-camera".into(),
                body: SectionBody::Gallery {
                    images: vec![
                        GalleryEntry::Captioned {
                            src: "assets/pale_doc1.png".into(),
                            caption: "Presentation Team & Overview".into(),
                        },
                        GalleryEntry::Captioned {
                            src: "assets/pale_doc2.png".into(),
                            caption: "Mobile App & IoT Interface".into(),
                        },
                        GalleryEntry::Captioned {
                            src: "assets/pale_doc3.png".into(),
                            caption: "System Architecture Diagram".into(),
                        },
                        GalleryEntry::Captioned {
                            src: "assets/pale_doc4.png".into(),
                            caption: "Field Testing Activity".into(),
                        },
                    ],
                },
            },
        ],
        paper_url: Some("https://jurnalfti.unmer.ac.id/index.php/senasif/article/view/594".into()),
    }
}

fn ecommerce() -> Project {
    Project {
        key: "ecommerce".into(),
        title: "E-Commerce Text Classification".into(),
        subtitle: "Automated product categorization using machine learning".into(),
        sections: vec![
            text(
                "Project Overview",
                "fa-info-circle",
                "This project automates the categorization of e-commerce products based on \
                 their text descriptions. Using NLP techniques and machine learning, the system \
                 classifies products into appropriate categories with high accuracy.",
            ),
            Section {
                title: "Data Preprocessing".into(),
                icon: "fa-broom".into(),
                body: SectionBody::Toggle {
                    before: "{\n  \"text\": \"DISKON BESAR!! Beli sekarang SEPATU NIKE Air Max \
                             original 100%!!! size 42 warna hitam\",\n  \"category\": \"?\"\n}"
                        .into(),
                    after: "{\n  \"text\": \"sepatu nike air max original size warna hitam\",\n  \
                            \"category\": \"Fashion > Sepatu > Sneakers\"\n}"
                        .into(),
                },
            },
            Section {
                title: "Model Performance".into(),
                icon: "fa-chart-bar".into(),
                body: SectionBody::Chart {
                    spec: ChartSpec {
                        kind: ChartKind::Bar,
                        labels: vec![
                            "Random Forest".into(),
                            "SVM".into(),
                            "Naive Bayes".into(),
                            "Logistic Regression".into(),
                        ],
                        series: ChartSeries::Values {
                            data: vec![88.0, 85.0, 79.0, 82.0],
                            colors: vec![
                                "#6366f1".into(),
                                "#8b5cf6".into(),
                                "#a855f7".into(),
                                "#06b6d4".into(),
                            ],
                        },
                    },
                },
            },
            Section {
                title: "Category Distribution".into(),
                icon: "fa-tags".into(),
                body: SectionBody::Chart {
                    spec: ChartSpec {
                        kind: ChartKind::Doughnut,
                        labels: vec![
                            "Fashion".into(),
                            "Electronics".into(),
                            "Home & Living".into(),
                            "Books".into(),
                            "Others".into(),
                        ],
                        series: ChartSeries::Values {
                            data: vec![35.0, 25.0, 20.0, 12.0, 8.0],
                            colors: vec![
                                "#6366f1".into(),
                                "#8b5cf6".into(),
                                "#a855f7".into(),
                                "#06b6d4".into(),
                                "#64748b".into(),
                            ],
                        },
                    },
                },
            },
            Section {
                title: "Project Documentation".into(),
                icon: "fa-images".into(),
                body: SectionBody::Gallery {
                    images: vec![GalleryEntry::Path("assets/konten3.png".into())],
                },
            },
        ],
        paper_url: Some(
            "https://drive.google.com/file/d/1-KUVfWqGX9_ueImu_IzigzJQkNUNFANL/view?usp=sharing"
                .into(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_projects_in_order() {
        let catalog = Catalog::builtin();
        let keys: Vec<&str> = catalog.projects().iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["sentiment", "pale", "ecommerce"]);
    }

    #[test]
    fn every_project_has_a_paper_link() {
        for project in Catalog::builtin().projects() {
            assert!(project.paper_url.is_some(), "{} lacks a paper", project.key);
        }
    }

    #[test]
    fn table_rows_match_headers() {
        let catalog = Catalog::builtin();
        for project in catalog.projects() {
            for section in &project.sections {
                if let SectionBody::Table { headers, rows } = &section.body {
                    for row in rows {
                        assert_eq!(row.len(), headers.len());
                    }
                }
            }
        }
    }
}
