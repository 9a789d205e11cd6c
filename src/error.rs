//! 全局错误类型定义
use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

use cppscan_engine::CoreError;

#[derive(Error, Debug)]
pub enum CppScanError {
    // 内核错误（目录校验/正则编译/推荐器）
    #[error("{0}")]
    Core(#[from] CoreError),

    // 目录相关错误
    #[error("Catalog load failed: {0}")]
    CatalogLoadError(String),

    // 分析器相关错误
    #[error("Analyzer not initialized: {0}")]
    AnalyzerNotInitialized(String),
    #[error("Analyzer init failed: {0}")]
    AnalyzerInitError(String),

    // 序列化/反序列化错误
    #[error("JSON parse failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO operation failed: {0}")]
    IoError(#[from] IoError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type ScanResult<T> = Result<T, CppScanError>;
