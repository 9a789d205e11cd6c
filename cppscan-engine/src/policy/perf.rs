//! 性能分析聚合策略

use serde::Serialize;

use crate::core::{AnalyzerKind, RuleCategory, Severity};
use crate::error::{CoreError, CoreResult};
use crate::matcher::{CompiledCatalog, MatchSet, Matcher};

use super::ensure_kind;

pub const PERF_ISSUES_RECOMMENDATION: &str = "Profile before optimizing";
pub const PERF_CLEAN_RECOMMENDATION: &str = "Code looks performant";

/// 潜在性能问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfIssue {
    pub pattern: String,
    pub count: usize,
    pub impact: Severity,
    pub note: String,
}

/// 命中的良好实践
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoodPractice {
    pub pattern: String,
    pub count: usize,
}

/// 性能分析报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceReport {
    pub potential_issues: Vec<PerfIssue>,
    pub good_practices: Vec<GoodPractice>,
    pub performance_score: u32,
    pub recommendation: String,
}

impl PerformanceReport {
    /// 良好实践的总出现次数
    pub fn good_practice_total(&self) -> usize {
        self.good_practices.iter().map(|practice| practice.count).sum()
    }
}

/// 性能评分：按"种类数"计分而非出现次数，结果限制在 [0, 100]
pub fn performance_score(distinct_issue_types: usize, distinct_good_practice_types: usize) -> u32 {
    let raw = 100 - 10 * distinct_issue_types as i64 + 5 * distinct_good_practice_types as i64;
    raw.clamp(0, 100) as u32
}

/// 对源码文本执行性能模式分析
pub fn analyze_performance(text: &str, catalog: &CompiledCatalog) -> CoreResult<PerformanceReport> {
    aggregate(&Matcher::count_all(text, catalog))
}

/// 聚合匹配结果（目录种类不符时报错）
pub fn aggregate(matches: &MatchSet<'_>) -> CoreResult<PerformanceReport> {
    ensure_kind(matches, AnalyzerKind::Performance)?;

    let mut potential_issues = Vec::new();
    let mut good_practices = Vec::new();

    for m in matches.iter() {
        match &m.rule.category {
            RuleCategory::Impact(impact) => {
                if m.count > 0 {
                    potential_issues.push(PerfIssue {
                        pattern: m.rule.name.clone(),
                        count: m.count,
                        impact: *impact,
                        note: m.rule.remediation_text().to_string(),
                    });
                }
            }
            RuleCategory::GoodPractice => {
                if m.count > 0 {
                    good_practices.push(GoodPractice {
                        pattern: m.rule.name.clone(),
                        count: m.count,
                    });
                }
            }
            _ => {
                return Err(CoreError::UnexpectedCategory {
                    kind: AnalyzerKind::Performance,
                    rule: m.rule.name.clone(),
                })
            }
        }
    }

    let performance_score = performance_score(potential_issues.len(), good_practices.len());
    let recommendation = if potential_issues.is_empty() {
        PERF_CLEAN_RECOMMENDATION
    } else {
        PERF_ISSUES_RECOMMENDATION
    };

    Ok(PerformanceReport {
        potential_issues,
        good_practices,
        performance_score,
        recommendation: recommendation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_compiled;

    fn analyze(text: &str) -> PerformanceReport {
        let catalog = builtin_compiled(AnalyzerKind::Performance).unwrap();
        aggregate(&Matcher::count_all(text, &catalog)).unwrap()
    }

    #[test]
    fn test_score_formula() {
        assert_eq!(performance_score(0, 0), 100);
        assert_eq!(performance_score(2, 1), 85);
        assert_eq!(performance_score(0, 6), 100);
        assert_eq!(performance_score(11, 0), 0);
        assert_eq!(performance_score(5, 6), 80);
    }

    #[test]
    fn test_two_issue_types_one_good_practice() {
        // virtual 出现两次、throw 出现两次，只按种类扣分
        let code = r#"
            virtual void run();
            virtual ~Task();
            void f() { throw 1; throw 2; }
            void g() noexcept;
        "#;
        let report = analyze(code);
        assert_eq!(report.potential_issues.len(), 2);
        assert_eq!(report.good_practices.len(), 1);
        assert_eq!(report.performance_score, 85);
        assert_eq!(report.recommendation, PERF_ISSUES_RECOMMENDATION);
    }

    #[test]
    fn test_empty_text() {
        let report = analyze("");
        assert!(report.potential_issues.is_empty());
        assert!(report.good_practices.is_empty());
        assert_eq!(report.performance_score, 100);
        assert_eq!(report.recommendation, "Code looks performant");
    }

    #[test]
    fn test_recommendation_ignores_score() {
        // 问题种类1个 + 良好实践种类3个 => 分数105被截断为100，但依然建议做性能剖析
        let code = "std::shared_ptr<int> p = std::make_shared<int>(1); v.reserve(4); v.emplace_back(1); x = std::move(y);";
        let report = analyze(code);
        assert_eq!(report.potential_issues.len(), 1);
        assert_eq!(report.potential_issues[0].pattern, "shared_ptr");
        assert_eq!(report.potential_issues[0].impact, Severity::Low);
        assert_eq!(report.good_practices.len(), 3);
        assert_eq!(report.performance_score, 100);
        assert_eq!(report.recommendation, PERF_ISSUES_RECOMMENDATION);
    }

    #[test]
    fn test_good_practice_total() {
        let report = analyze("inline int a() noexcept; inline int b() noexcept; constexpr int c = 1;");
        assert_eq!(report.good_practices.len(), 3);
        assert_eq!(report.good_practice_total(), 5);
        assert_eq!(report.performance_score, 100);
    }

    #[test]
    fn test_report_field_names() {
        let value = serde_json::to_value(analyze("std::string name = other;")).unwrap();
        assert_eq!(value["potential_issues"][0]["pattern"], "string_copy");
        assert_eq!(value["potential_issues"][0]["impact"], "medium");
        assert_eq!(value["potential_issues"][0]["note"], "Consider string_view or references");
        assert_eq!(value["performance_score"], 90);
        assert!(value["good_practices"].as_array().unwrap().is_empty());
    }
}
