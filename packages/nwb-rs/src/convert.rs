use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::container::NwbContainer;
use crate::error::Result;
use crate::ingest::RecordingIngest;
use crate::metadata::Metadata;
use crate::writer::ContainerWriter;

/// Resolved source locations for one conversion run.
///
/// A fixed set of known inputs rather than a name-keyed dictionary, so
/// resolution is checked at compile time. Unset entries are absent,
/// never empty strings.
#[derive(Debug, Clone, Default)]
pub struct SourcePaths {
    /// Directory containing the `.rhd` recording files.
    pub recording_dir: Option<PathBuf>,
    /// Electrode info file.
    pub electrodes_file: Option<PathBuf>,
}

impl SourcePaths {
    /// Build the path set from raw CLI values. Empty strings mean
    /// "not supplied" and resolve to absent.
    pub fn from_cli(recording_dir: Option<&str>, electrodes_file: Option<&str>) -> Self {
        Self {
            recording_dir: non_empty(recording_dir),
            electrodes_file: non_empty(electrodes_file),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<PathBuf> {
    value.filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Recognized conversion options. New modalities add new named fields
/// here instead of an open-ended keyword bag.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Run the RHD ingestion step (`--add_rhd`).
    pub add_recording: bool,
}

/// Outcome of a completed conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub output_path: String,
    pub size_bytes: u64,
    pub acquisition_count: usize,
    pub electrode_count: usize,
}

impl ConvertReport {
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / 1e6
    }
}

/// Convert one recording session to an NWB container file.
///
/// The container reference starts absent and is threaded through each
/// enabled ingestion step; the final value is persisted to
/// `output_path` in a single pass. When no ingestion step ran, a
/// metadata-only container is constructed explicitly rather than
/// persisting an absent one. Adapter failure propagates before the
/// write, so no output file is created in that case.
pub fn convert(
    source_paths: &SourcePaths,
    output_path: &Path,
    metadata: &Metadata,
    options: &ConvertOptions,
    adapter: &dyn RecordingIngest,
    writer: &dyn ContainerWriter,
) -> Result<ConvertReport> {
    let mut container: Option<NwbContainer> = None;

    if options.add_recording {
        log::info!("Running RHD ingestion step");
        container = Some(adapter.ingest(
            container.take(),
            metadata,
            source_paths.recording_dir.as_deref(),
            source_paths.electrodes_file.as_deref(),
        )?);
    }

    // Further modalities thread the same Option through their own
    // adapter calls here.

    let container = container.unwrap_or_else(|| {
        log::warn!("No ingestion step ran; writing a metadata-only container");
        NwbContainer::from_metadata(metadata)
    });

    let size_bytes = writer.write(output_path, &container)?;
    log::info!(
        "Container written to {} ({} bytes)",
        output_path.display(),
        size_bytes
    );

    Ok(ConvertReport {
        output_path: output_path.display().to_string(),
        size_bytes,
        acquisition_count: container.acquisition.len(),
        electrode_count: container.electrodes.len(),
    })
}
