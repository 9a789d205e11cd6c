//! 分析器模块：持有已编译目录，对外提供各类分析入口
pub mod global;
pub mod detector;

// 导出核心接口
pub use self::global::{
    analyze_performance, detect_leaks, detect_standard, init_global_analyzer, recommend_container,
};
pub use self::detector::CppAnalyzer;
