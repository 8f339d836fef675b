//! Snapshot loading
//!
//! Each snapshot is a gzip-compressed JSON document captured from the node.
//! Files are read fully into memory; there is no streaming decode.

pub mod dataset;
pub mod reader;

pub use dataset::LspNodeData;
pub use reader::{read_channels, read_closed_channels, read_forwards, read_gzip_json};
