//! 泄漏检测聚合策略

use serde::Serialize;

use crate::core::{AnalyzerKind, RuleCategory, Severity};
use crate::error::{CoreError, CoreResult};
use crate::matcher::{CompiledCatalog, MatchSet, Matcher};

use super::ensure_kind;

/// 存在问题时的建议
pub const LEAK_ISSUES_RECOMMENDATION: &str = "Consider using smart pointers";
/// 无问题时的建议
pub const LEAK_CLEAN_RECOMMENDATION: &str = "Good memory practices";

/// 整体风险等级：只有高/低两档，medium 问题不会抬高整体等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    High,
}

/// 单个泄漏问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeakIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub count: usize,
    pub risk: Severity,
    pub fix: String,
}

/// 泄漏检测报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeakReport {
    pub issues: Vec<LeakIssue>,
    pub issue_count: usize,
    /// 智能指针用法次数，仅供参考，不进入问题列表
    pub smart_pointer_usage: usize,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}

/// 整体风险分级：任一 high 问题即为 high
pub fn classify_risk(issues: &[LeakIssue]) -> RiskLevel {
    if issues.iter().any(|issue| issue.risk == Severity::High) {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// 对源码文本执行泄漏模式检测
pub fn detect_leaks(text: &str, catalog: &CompiledCatalog) -> CoreResult<LeakReport> {
    aggregate(&Matcher::count_all(text, catalog))
}

/// 聚合匹配结果（目录种类不符时报错）
pub fn aggregate(matches: &MatchSet<'_>) -> CoreResult<LeakReport> {
    ensure_kind(matches, AnalyzerKind::LeakDetection)?;

    let mut issues = Vec::new();
    let mut smart_pointer_usage = 0;

    for m in matches.iter() {
        match &m.rule.category {
            RuleCategory::Risk(risk) => {
                if m.count > 0 {
                    issues.push(LeakIssue {
                        issue_type: m.rule.name.clone(),
                        count: m.count,
                        risk: *risk,
                        fix: m.rule.remediation_text().to_string(),
                    });
                }
            }
            RuleCategory::GoodPractice => smart_pointer_usage += m.count,
            _ => {
                return Err(CoreError::UnexpectedCategory {
                    kind: AnalyzerKind::LeakDetection,
                    rule: m.rule.name.clone(),
                })
            }
        }
    }

    let risk_level = classify_risk(&issues);
    let recommendation = if issues.is_empty() {
        LEAK_CLEAN_RECOMMENDATION
    } else {
        LEAK_ISSUES_RECOMMENDATION
    };

    Ok(LeakReport {
        issue_count: issues.len(),
        issues,
        smart_pointer_usage,
        risk_level,
        recommendation: recommendation.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_compiled;

    fn analyze(text: &str) -> LeakReport {
        let catalog = builtin_compiled(AnalyzerKind::LeakDetection).unwrap();
        aggregate(&Matcher::count_all(text, &catalog)).unwrap()
    }

    fn issue(risk: Severity) -> LeakIssue {
        LeakIssue {
            issue_type: "probe".to_string(),
            count: 1,
            risk,
            fix: String::new(),
        }
    }

    #[test]
    fn test_new_and_delete_scenario() {
        let report = analyze("int* p = new int(5); delete p;");
        let found: Vec<(&str, usize, Severity)> = report
            .issues
            .iter()
            .map(|issue| (issue.issue_type.as_str(), issue.count, issue.risk))
            .collect();
        assert!(found.contains(&("raw_new", 1, Severity::High)));
        assert!(found.contains(&("raw_delete", 1, Severity::High)));
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.recommendation, LEAK_ISSUES_RECOMMENDATION);
    }

    #[test]
    fn test_empty_text() {
        let report = analyze("");
        assert_eq!(report.issue_count, 0);
        assert!(report.issues.is_empty());
        assert_eq!(report.smart_pointer_usage, 0);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.recommendation, "Good memory practices");
    }

    #[test]
    fn test_single_high_dominates_mediums() {
        let mut issues = vec![issue(Severity::Medium); 10];
        assert_eq!(classify_risk(&issues), RiskLevel::Low);
        issues.push(issue(Severity::High));
        assert_eq!(classify_risk(&issues), RiskLevel::High);
    }

    #[test]
    fn test_medium_only_stays_low() {
        let code = "class Base {\npublic:\n    ~Base() {}\n};";
        let report = analyze(code);
        assert_eq!(report.issue_count, 1);
        assert_eq!(report.issues[0].issue_type, "missing_virtual_destructor");
        assert_eq!(report.issues[0].risk, Severity::Medium);
        assert_eq!(report.risk_level, RiskLevel::Low);
        // 有问题即给出智能指针建议，与分级无关
        assert_eq!(report.recommendation, LEAK_ISSUES_RECOMMENDATION);
    }

    #[test]
    fn test_smart_pointers_are_counted_not_reported() {
        let code = "auto a = std::make_unique<int>(1); std::shared_ptr<int> b;";
        let report = analyze(code);
        assert_eq!(report.smart_pointer_usage, 2);
        assert_eq!(report.issue_count, 0);
        assert!(report.issues.iter().all(|issue| issue.issue_type != "smart_pointer_usage"));
    }

    #[test]
    fn test_issue_list_is_exact() {
        let code = "void* buf = malloc(16); free(buf); free (buf);";
        let report = analyze(code);
        let names: Vec<&str> = report.issues.iter().map(|issue| issue.issue_type.as_str()).collect();
        assert_eq!(names, ["malloc", "free"]);
        assert_eq!(report.issues[1].count, 2);
        assert_eq!(report.issues[1].fix, "Use C++ RAII patterns");
    }

    #[test]
    fn test_report_field_names() {
        let value = serde_json::to_value(analyze("delete p;")).unwrap();
        assert_eq!(value["issue_count"], 1);
        assert_eq!(value["risk_level"], "high");
        assert_eq!(value["issues"][0]["type"], "raw_delete");
        assert_eq!(value["issues"][0]["risk"], "high");
        assert!(value.get("smart_pointer_usage").is_some());
        assert!(value.get("recommendation").is_some());
    }
}
