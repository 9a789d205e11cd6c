//! cppscan - 基于正则启发式的 C++ 源码扫描工具
//! 泄漏模式检测 / 性能模式分析 / C++标准检测 / STL容器推荐 / 工程脚手架

pub mod config;
pub mod detector;
pub mod error;
pub mod rule;
pub mod scaffold;

// 导出全局错误类型
pub use self::error::{CppScanError, ScanResult};

// 导出配置模块核心结构体与构建器
pub use crate::config::{CatalogOrigin, CustomConfigBuilder, ScanConfig, ScanOptions};

// 导出目录加载器
pub use crate::rule::CatalogLoader;

// 导出分析模块核心接口（含全局单例的简化接口）
pub use crate::detector::{
    analyze_performance, detect_leaks, detect_standard, init_global_analyzer, recommend_container,
    CppAnalyzer,
};

// 导出脚手架
pub use crate::scaffold::{analyze_project, generate_cmake, CMakeOptions, ProjectReport, TargetType};

// 透出内核常用类型，调用方无需直接依赖 cppscan-engine
pub use cppscan_engine::{
    get_catalog, AnalyzerKind, Catalog, ContainerCatalog, ContainerProfile, CoreError, CxxStandard,
    LeakReport, PerformanceReport, Recommendation, Report, Requirement, RequirementVector,
    RiskLevel, Rule, RuleCatalog, RuleCategory, Severity, StandardReport, TimeClass,
};
