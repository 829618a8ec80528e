pub mod container;
pub mod convert;
pub mod error;
pub mod ingest;
pub mod metadata;
pub mod writer;

pub use container::NwbContainer;
pub use convert::{convert, ConvertOptions, ConvertReport, SourcePaths};
pub use error::{ConvertError, Result};
pub use ingest::{RecordingIngest, RhdIngest};
pub use metadata::{load_metadata, Metadata};
pub use writer::{ContainerWriter, NwbFileWriter};
