//! Approved vessel reference list

use std::path::Path;
use tracing::{error, info};

/// Read the approved vessel list from a JSON file
///
/// The file must hold a JSON array of strings. Entries are returned verbatim,
/// in file order, with casing and whitespace untouched. A missing, unreadable
/// or malformed file is logged and yields an empty list; every vessel check
/// will then fail.
pub fn load_reference_vessels(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            error!("Vessels file not found: {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            error!("Failed to read vessels file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&contents) {
        Ok(vessels) => {
            info!("Loaded {} valid vessels", vessels.len());
            vessels
        }
        Err(e) => {
            error!("Invalid vessels JSON in {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Read-only approved vessel list, owned by a validator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceVessels(Vec<String>);

impl ReferenceVessels {
    /// Load the list from a file (see [`load_reference_vessels`])
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self(load_reference_vessels(path))
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|vessel| vessel == name)
    }

    /// Number of approved vessels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the names in file order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for ReferenceVessels {
    fn from(vessels: Vec<String>) -> Self {
        Self(vessels)
    }
}
