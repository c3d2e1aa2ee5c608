use thiserror::Error;

use super::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate project key: {0}")]
    DuplicateKey(String),
}

impl Catalog {
    /// Load a catalog from JSON bytes.
    ///
    /// The document is an object with a `projects` array; section bodies
    /// are tagged by `type`. Unrecognized section tags load as the
    /// fallback variant rather than failing the whole catalog.
    pub fn from_json(data: &[u8]) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_slice(data)?;
        Self::from_projects(catalog.projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SectionBody;

    const MINIMAL: &str = r#"{
        "projects": [{
            "key": "demo",
            "title": "Demo",
            "subtitle": "A demo project",
            "sections": [
                {"title": "Overview", "icon": "fa-info-circle", "type": "text",
                 "content": "Hello."},
                {"title": "Mystery", "icon": "fa-question", "type": "quantum-blob"}
            ]
        }]
    }"#;

    #[test]
    fn loads_minimal_catalog() {
        let catalog = match Catalog::from_json(MINIMAL.as_bytes()) {
            Ok(c) => c,
            Err(e) => panic!("load failed: {e}"),
        };
        assert_eq!(catalog.len(), 1);
        let demo = match catalog.get("demo") {
            Some(p) => p,
            None => panic!("demo project missing"),
        };
        assert_eq!(demo.sections.len(), 2);
        assert!(matches!(demo.sections[1].body, SectionBody::Unknown));
    }

    #[test]
    fn rejects_duplicate_keys() {
        let json = r#"{"projects": [
            {"key": "a", "title": "A", "subtitle": "", "sections": []},
            {"key": "a", "title": "A again", "subtitle": "", "sections": []}
        ]}"#;
        let result = Catalog::from_json(json.as_bytes());
        assert!(matches!(result, Err(CatalogError::DuplicateKey(_))));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = Catalog::from_json(b"{not json");
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn builtin_roundtrips_through_json() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_vec(&catalog).unwrap_or_default();
        let back = match Catalog::from_json(&json) {
            Ok(c) => c,
            Err(e) => panic!("builtin did not roundtrip: {e}"),
        };
        assert_eq!(back.len(), catalog.len());
        for project in catalog.projects() {
            assert!(back.get(&project.key).is_some());
        }
    }
}
