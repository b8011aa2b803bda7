use crate::foundation::error::{WavelengthError, WavelengthResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One portfolio project record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Image URL or path.
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

/// `true` for a usable link: non-blank and not the `#` placeholder.
pub fn has_valid_url(url: Option<&str>) -> bool {
    url.map(str::trim)
        .is_some_and(|u| !u.is_empty() && u != "#")
}

/// Parse a JSON array of projects.
pub fn projects_from_reader<R: std::io::Read>(r: R) -> WavelengthResult<Vec<Project>> {
    serde_json::from_reader(r)
        .map_err(|e| WavelengthError::serde(format!("parse projects JSON: {e}")))
}

/// Load a JSON array of projects from disk.
pub fn load_projects(path: impl AsRef<Path>) -> WavelengthResult<Vec<Project>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        WavelengthError::validation(format!("open projects JSON '{}': {e}", path.display()))
    })?;
    projects_from_reader(BufReader::new(f))
}
