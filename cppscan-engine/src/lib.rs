// 内核错误定义
pub mod error;
// 核心公共结构体+枚举
pub mod core;
// 内置规则目录 + 容器目录
pub mod catalog;
// 目录编译 + 文本匹配
pub mod matcher;
// 各分析器的聚合策略
pub mod policy;
// 容器推荐评分
pub mod scorer;
// 日志辅助
pub mod utils;

// 顶层导出常用类型
pub use crate::catalog::{builtin_compiled, builtin_containers, get_catalog};
pub use crate::core::{
    AnalyzerKind, Catalog, ContainerCatalog, ContainerProfile, CxxStandard, Requirement,
    RequirementVector, Rule, RuleCatalog, RuleCategory, Severity, TimeClass,
};
pub use crate::error::{CoreError, CoreResult};
pub use crate::matcher::{CompiledCatalog, CompiledRule, MatchSet, Matcher, RuleMatch};
pub use crate::policy::{
    analyze_performance, detect_leaks, detect_standard, AnalysisPolicy, LeakReport,
    PerformanceReport, Report, RiskLevel, StandardReport,
};
pub use crate::scorer::{entry_score, recommend, Recommendation};
