//! 配置模块
pub mod scan;

pub use self::scan::{CatalogOrigin, CustomConfigBuilder, ScanConfig, ScanOptions};
