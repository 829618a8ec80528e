use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::container::NwbContainer;
use crate::error::{ConvertError, Result};

/// Persistence seam: writes a complete container to `path` in one pass
/// and returns the resulting file size in bytes.
pub trait ContainerWriter {
    fn write(&self, path: &Path, container: &NwbContainer) -> Result<u64>;
}

/// Default writer: serializes the container as pretty-printed JSON.
///
/// The destination is created (or truncated) and released when the
/// scoped handle drops; on failure the partial-file state is
/// writer-defined.
pub struct NwbFileWriter;

impl NwbFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NwbFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerWriter for NwbFileWriter {
    fn write(&self, path: &Path, container: &NwbContainer) -> Result<u64> {
        let file = File::create(path).map_err(|e| {
            ConvertError::Write(format!("Failed to create '{}': {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, container)
            .map_err(|e| ConvertError::Write(format!("Failed to serialize container: {}", e)))?;
        writer.flush().map_err(|e| {
            ConvertError::Write(format!("Failed to flush '{}': {}", path.display(), e))
        })?;
        drop(writer);

        let size = std::fs::metadata(path)
            .map_err(|e| {
                ConvertError::Write(format!("Failed to stat '{}': {}", path.display(), e))
            })?
            .len();
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Metadata;

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("session.nwb");

        let metadata: Metadata =
            serde_yaml::from_str("session_description: roundtrip\nlab: Jaeger Lab\n").unwrap();
        let container = NwbContainer::from_metadata(&metadata);

        let size = NwbFileWriter::new().write(&out, &container).unwrap();
        assert!(size > 0);
        assert_eq!(std::fs::metadata(&out).unwrap().len(), size);

        let content = std::fs::read_to_string(&out).unwrap();
        let read_back: NwbContainer = serde_json::from_str(&content).unwrap();
        assert_eq!(read_back, container);
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("session.nwb");
        std::fs::write(&out, vec![b'x'; 100_000]).unwrap();

        let metadata: Metadata = serde_yaml::from_str("a: 1\n").unwrap();
        let container = NwbContainer::from_metadata(&metadata);

        let size = NwbFileWriter::new().write(&out, &container).unwrap();
        assert!(size < 100_000);
        assert_eq!(std::fs::metadata(&out).unwrap().len(), size);
    }

    #[test]
    fn test_write_to_unwritable_path() {
        let metadata: Metadata = serde_yaml::from_str("a: 1\n").unwrap();
        let container = NwbContainer::from_metadata(&metadata);

        let result =
            NwbFileWriter::new().write(Path::new("/nonexistent/dir/session.nwb"), &container);
        assert!(matches!(result, Err(ConvertError::Write(_))));
    }
}
