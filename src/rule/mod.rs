//! 目录加载模块
pub mod loader;

pub use self::loader::CatalogLoader;
