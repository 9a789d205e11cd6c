//! 全局分析器单例管理
//! 进程内唯一的CppAnalyzer实例，首次使用时按默认配置懒加载

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use cppscan_engine::{LeakReport, PerformanceReport, Recommendation, RequirementVector, StandardReport};

use super::detector::CppAnalyzer;
use crate::config::ScanConfig;
use crate::error::{CppScanError, ScanResult};

/// 全局分析器实例 - 线程安全单例
static GLOBAL_ANALYZER: Lazy<Arc<OnceCell<CppAnalyzer>>> = Lazy::new(|| Arc::new(OnceCell::new()));

/// 初始化全局分析器
/// 幂等：已初始化则直接返回Ok(())，不会替换已有实例
pub fn init_global_analyzer(config: ScanConfig) -> ScanResult<()> {
    if GLOBAL_ANALYZER.get().is_some() {
        log::debug!("Global analyzer already initialized, skip reinitialization");
        return Ok(());
    }

    let analyzer = CppAnalyzer::new(config).map_err(|e| {
        CppScanError::AnalyzerInitError(format!("Failed to create CppAnalyzer instance: {}", e))
    })?;

    // 并发初始化时另一线程已写入，视为成功
    if GLOBAL_ANALYZER.set(analyzer).is_err() {
        log::debug!("Global analyzer initialized concurrently by another thread");
        return Ok(());
    }

    log::info!("Global CppAnalyzer initialized successfully");
    Ok(())
}

/// 获取全局分析器实例（未初始化时使用内置目录懒加载）
pub(crate) fn get_global_analyzer() -> ScanResult<&'static CppAnalyzer> {
    if GLOBAL_ANALYZER.get().is_none() {
        log::debug!("Lazy initializing global CppAnalyzer with built-in catalogs");
        init_global_analyzer(ScanConfig::builtin())?;
    }

    GLOBAL_ANALYZER.get().ok_or_else(|| {
        CppScanError::AnalyzerNotInitialized("Global analyzer instance not created".to_string())
    })
}

/// 使用全局分析器检测内存泄漏模式
pub fn detect_leaks(code: &str) -> ScanResult<LeakReport> {
    get_global_analyzer()?.detect_leaks(code)
}

/// 使用全局分析器分析性能模式
pub fn analyze_performance(code: &str) -> ScanResult<PerformanceReport> {
    get_global_analyzer()?.analyze_performance(code)
}

/// 使用全局分析器检测C++标准
pub fn detect_standard(code: &str) -> ScanResult<StandardReport> {
    get_global_analyzer()?.detect_standard(code)
}

/// 使用全局分析器推荐容器
pub fn recommend_container(requirements: &RequirementVector) -> ScanResult<Recommendation> {
    get_global_analyzer()?.recommend_container(requirements)
}
