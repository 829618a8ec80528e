use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// One row of the electrode table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electrode {
    pub label: String,
    pub group: String,
    pub location: String,
}

/// Reference to one acquisition block recorded by the amplifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionSeries {
    pub name: String,
    pub source_file: String,
    pub size_bytes: u64,
}

/// In-memory NWB session container.
///
/// Built by the conversion orchestrator, populated by ingestion
/// adapters, and handed to the writer exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NwbContainer {
    pub identifier: String,
    pub session_description: String,
    pub session_start_time: Option<String>,
    pub created_at: String,
    pub metadata: Metadata,
    pub electrodes: Vec<Electrode>,
    pub acquisition: Vec<AcquisitionSeries>,
}

impl NwbContainer {
    /// Create an empty container seeded from the session metadata.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let session_description = metadata
            .get("session_description")
            .and_then(|v| v.as_str())
            .unwrap_or("no description")
            .to_string();

        let session_start_time = metadata
            .get("session_start_time")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Self {
            identifier: uuid::Uuid::new_v4().to_string(),
            session_description,
            session_start_time,
            created_at: chrono::Utc::now().to_rfc3339(),
            metadata: metadata.clone(),
            electrodes: Vec::new(),
            acquisition: Vec::new(),
        }
    }
}
