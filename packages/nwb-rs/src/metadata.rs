use std::path::Path;

use crate::error::{ConvertError, Result};

/// Session metadata loaded verbatim from the experimenter's YAML file.
/// No schema is enforced; the mapping is passed through unmodified to
/// the ingestion adapter and embedded in the container.
pub type Metadata = serde_yaml::Value;

/// Load the metadata YAML file into a [`Metadata`] mapping.
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConvertError::MetadataNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| ConvertError::MetadataParse(e.to_string()))
}
