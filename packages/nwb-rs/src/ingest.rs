use std::path::{Path, PathBuf};

use crate::container::{AcquisitionSeries, Electrode, NwbContainer};
use crate::error::{ConvertError, Result};
use crate::metadata::Metadata;

/// Ingestion seam for one recording modality.
///
/// Each call takes ownership of the current container (absent on the
/// first call), mutates or replaces it, and returns the next value.
/// Additional modalities compose by threading the same reference
/// through successive adapters.
pub trait RecordingIngest {
    fn ingest(
        &self,
        container: Option<NwbContainer>,
        metadata: &Metadata,
        recording_dir: Option<&Path>,
        electrodes_file: Option<&Path>,
    ) -> Result<NwbContainer>;
}

/// Default adapter for Intan RHD recording sessions.
///
/// Enumerates `*.rhd` files in the recording directory and records one
/// acquisition series entry per file; the electrode info file is read
/// as CSV with `label,group,location` headers. Signal decoding is the
/// concern of whatever replaces this adapter behind [`RecordingIngest`].
pub struct RhdIngest;

impl RhdIngest {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RhdIngest {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingIngest for RhdIngest {
    fn ingest(
        &self,
        container: Option<NwbContainer>,
        metadata: &Metadata,
        recording_dir: Option<&Path>,
        electrodes_file: Option<&Path>,
    ) -> Result<NwbContainer> {
        let mut container = container.unwrap_or_else(|| NwbContainer::from_metadata(metadata));

        if let Some(dir) = recording_dir {
            for file in find_rhd_files(dir)? {
                let size_bytes = std::fs::metadata(&file)
                    .map_err(|e| {
                        ConvertError::Adapter(format!("Failed to stat '{}': {}", file.display(), e))
                    })?
                    .len();

                let name = file
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("recording")
                    .to_string();

                container.acquisition.push(AcquisitionSeries {
                    name,
                    source_file: file.display().to_string(),
                    size_bytes,
                });
            }
            log::info!(
                "Ingested {} .rhd file(s) from {}",
                container.acquisition.len(),
                dir.display()
            );
        }

        if let Some(path) = electrodes_file {
            container.electrodes = read_electrodes(path)?;
            log::info!(
                "Loaded {} electrode(s) from {}",
                container.electrodes.len(),
                path.display()
            );
        }

        Ok(container)
    }
}

/// Enumerate `*.rhd` files in `dir`, sorted by path for a stable
/// acquisition order.
fn find_rhd_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.rhd");
    let pattern = pattern.to_str().ok_or_else(|| {
        ConvertError::Adapter(format!(
            "Recording directory path is not valid UTF-8: {}",
            dir.display()
        ))
    })?;

    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|e| ConvertError::Adapter(format!("Invalid recording directory pattern: {}", e)))?
        .filter_map(|entry| entry.ok())
        .collect();
    files.sort();
    Ok(files)
}

fn read_electrodes(path: &Path) -> Result<Vec<Electrode>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        ConvertError::Adapter(format!(
            "Failed to open electrodes file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut electrodes = Vec::new();
    for record in reader.deserialize() {
        let electrode: Electrode = record
            .map_err(|e| ConvertError::Adapter(format!("Malformed electrode row: {}", e)))?;
        electrodes.push(electrode);
    }
    Ok(electrodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_metadata() -> Metadata {
        serde_yaml::from_str("session_description: test\n").unwrap()
    }

    #[test]
    fn test_ingest_empty_directory() {
        let dir = tempfile::TempDir::new().unwrap();

        let container = RhdIngest::new()
            .ingest(None, &test_metadata(), Some(dir.path()), None)
            .unwrap();
        assert!(container.acquisition.is_empty());
        assert_eq!(container.session_description, "test");
    }

    #[test]
    fn test_ingest_records_rhd_files_sorted() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("b_session.rhd"), b"fake rhd").unwrap();
        std::fs::write(dir.path().join("a_session.rhd"), b"fake rhd data").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"ignored").unwrap();

        let container = RhdIngest::new()
            .ingest(None, &test_metadata(), Some(dir.path()), None)
            .unwrap();
        assert_eq!(container.acquisition.len(), 2);
        assert_eq!(container.acquisition[0].name, "a_session");
        assert_eq!(container.acquisition[1].name, "b_session");
        assert_eq!(container.acquisition[0].size_bytes, 13);
    }

    #[test]
    fn test_ingest_reads_electrode_table() {
        let dir = tempfile::TempDir::new().unwrap();
        let electrodes = dir.path().join("electrodes.csv");
        std::fs::write(
            &electrodes,
            "label,group,location\nch0,shank0,CA1\nch1,shank0,CA1\n",
        )
        .unwrap();

        let container = RhdIngest::new()
            .ingest(None, &test_metadata(), None, Some(&electrodes))
            .unwrap();
        assert_eq!(container.electrodes.len(), 2);
        assert_eq!(container.electrodes[0].label, "ch0");
        assert_eq!(container.electrodes[1].location, "CA1");
    }

    #[test]
    fn test_ingest_missing_electrodes_file() {
        let result = RhdIngest::new().ingest(
            None,
            &test_metadata(),
            None,
            Some(Path::new("/nonexistent/electrodes.csv")),
        );
        assert!(matches!(result, Err(ConvertError::Adapter(_))));
    }

    #[test]
    fn test_ingest_reuses_existing_container() {
        let metadata = test_metadata();
        let existing = NwbContainer::from_metadata(&metadata);
        let identifier = existing.identifier.clone();

        let container = RhdIngest::new()
            .ingest(Some(existing), &metadata, None, None)
            .unwrap();
        assert_eq!(container.identifier, identifier);
    }
}
