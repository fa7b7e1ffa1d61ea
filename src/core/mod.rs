pub mod exporter;
pub mod manifest;
