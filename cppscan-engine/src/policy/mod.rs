//! 聚合策略：把匹配结果折叠为各分析器的报告
pub mod leak;
pub mod perf;
pub mod standard;

use serde::Serialize;

use crate::core::AnalyzerKind;
use crate::error::{CoreError, CoreResult};
use crate::matcher::{CompiledCatalog, MatchSet, Matcher};

pub use self::leak::{classify_risk, detect_leaks, LeakIssue, LeakReport, RiskLevel};
pub use self::perf::{analyze_performance, performance_score, GoodPractice, PerfIssue, PerformanceReport};
pub use self::standard::{detect_standard, infer_minimum_standard, StandardReport};

/// 校验匹配结果来自预期种类的目录
pub(crate) fn ensure_kind(matches: &MatchSet<'_>, expected: AnalyzerKind) -> CoreResult<()> {
    if matches.kind() != expected {
        return Err(CoreError::CatalogKindMismatch {
            expected,
            actual: matches.kind(),
        });
    }
    Ok(())
}

/// 文本分析策略（封闭集合，按分析器种类一一对应）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisPolicy {
    Leak,
    Performance,
    Standard,
}

impl AnalysisPolicy {
    pub const ALL: [AnalysisPolicy; 3] = [
        AnalysisPolicy::Leak,
        AnalysisPolicy::Performance,
        AnalysisPolicy::Standard,
    ];

    /// 根据目录种类选择策略，容器目录没有文本策略
    pub fn for_kind(kind: AnalyzerKind) -> CoreResult<Self> {
        match kind {
            AnalyzerKind::LeakDetection => Ok(AnalysisPolicy::Leak),
            AnalyzerKind::Performance => Ok(AnalysisPolicy::Performance),
            AnalyzerKind::StandardFeature => Ok(AnalysisPolicy::Standard),
            AnalyzerKind::ContainerProfile => Err(CoreError::NotARuleCatalog(kind)),
        }
    }

    pub fn kind(self) -> AnalyzerKind {
        match self {
            AnalysisPolicy::Leak => AnalyzerKind::LeakDetection,
            AnalysisPolicy::Performance => AnalyzerKind::Performance,
            AnalysisPolicy::Standard => AnalyzerKind::StandardFeature,
        }
    }

    /// 将匹配结果聚合为报告
    pub fn aggregate(self, matches: &MatchSet<'_>) -> CoreResult<Report> {
        match self {
            AnalysisPolicy::Leak => leak::aggregate(matches).map(Report::Leak),
            AnalysisPolicy::Performance => perf::aggregate(matches).map(Report::Performance),
            AnalysisPolicy::Standard => standard::aggregate(matches).map(Report::Standard),
        }
    }

    /// 匹配 + 聚合一步完成
    pub fn analyze(self, text: &str, catalog: &CompiledCatalog) -> CoreResult<Report> {
        let matches = Matcher::count_all(text, catalog);
        self.aggregate(&matches)
    }
}

/// 分析报告（序列化时不带外层标签，直接输出各报告字段）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Leak(LeakReport),
    Performance(PerformanceReport),
    Standard(StandardReport),
}

impl Report {
    pub fn kind(&self) -> AnalyzerKind {
        match self {
            Report::Leak(_) => AnalyzerKind::LeakDetection,
            Report::Performance(_) => AnalyzerKind::Performance,
            Report::Standard(_) => AnalyzerKind::StandardFeature,
        }
    }

    /// 报告中的问题条目数（标准检测为命中的特性数）
    pub fn issue_count(&self) -> usize {
        match self {
            Report::Leak(report) => report.issue_count,
            Report::Performance(report) => report.potential_issues.len(),
            Report::Standard(report) => report.detected_features.values().map(Vec::len).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_compiled;

    const SAMPLE: &str = r#"
        #include <memory>
        class Widget {
        public:
            virtual void draw();
            ~Widget() {}
        };
        void run() {
            auto w = std::make_unique<Widget>();
            Widget* raw = new Widget;
            try { raw->draw(); } catch (...) {}
            delete raw;
        }
    "#;

    #[test]
    fn test_policy_rejects_foreign_catalog() {
        let catalog = builtin_compiled(AnalyzerKind::Performance).unwrap();
        let result = AnalysisPolicy::Leak.analyze("new int;", &catalog);
        assert!(matches!(result, Err(CoreError::CatalogKindMismatch { .. })));
    }

    #[test]
    fn test_for_kind_round_trip() {
        for policy in AnalysisPolicy::ALL {
            assert_eq!(AnalysisPolicy::for_kind(policy.kind()).unwrap(), policy);
        }
        assert!(AnalysisPolicy::for_kind(AnalyzerKind::ContainerProfile).is_err());
    }

    #[test]
    fn test_analysis_is_deterministic() {
        for policy in AnalysisPolicy::ALL {
            let catalog = builtin_compiled(policy.kind()).unwrap();
            let first = policy.analyze(SAMPLE, &catalog).unwrap();
            let second = policy.analyze(SAMPLE, &catalog).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.kind(), policy.kind());
        }
    }

    #[test]
    fn test_issue_list_exactness_across_policies() {
        for policy in AnalysisPolicy::ALL {
            let catalog = builtin_compiled(policy.kind()).unwrap();
            let matches = Matcher::count_all(SAMPLE, &catalog);
            let expected = matches.hits().filter(|m| !m.rule.is_positive()).count();
            let report = policy.aggregate(&matches).unwrap();
            assert_eq!(report.issue_count(), expected, "policy {:?}", policy);
        }
    }

    #[test]
    fn test_untagged_serialization() {
        let catalog = builtin_compiled(AnalyzerKind::LeakDetection).unwrap();
        let report = AnalysisPolicy::Leak.analyze(SAMPLE, &catalog).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("Leak").is_none());
        assert_eq!(value["risk_level"], "high");
        assert_eq!(value["smart_pointer_usage"], 1);
    }
}
