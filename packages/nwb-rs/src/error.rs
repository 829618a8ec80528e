use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Metadata file not found: {0}")]
    MetadataNotFound(String),

    #[error("Failed to parse metadata YAML: {0}")]
    MetadataParse(String),

    #[error("Ingestion adapter failed: {0}")]
    Adapter(String),

    #[error("Failed to write container: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
