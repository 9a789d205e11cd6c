pub mod log_format;

pub use log_format::{preview_source, SourcePreview};
