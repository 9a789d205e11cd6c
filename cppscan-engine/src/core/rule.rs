use serde::{Deserialize, Serialize};

use super::container::ContainerCatalog;
use super::enums::{AnalyzerKind, CxxStandard, Severity};
use crate::error::{CoreError, CoreResult};

/// 规则分类：决定规则在聚合阶段的角色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RuleCategory {
    /// 泄漏风险等级
    Risk(Severity),
    /// 性能影响等级
    Impact(Severity),
    /// 引入该特性的C++标准
    Since(CxxStandard),
    /// 正向模式（良好实践），只计数不进问题列表
    GoodPractice,
}

impl RuleCategory {
    /// 该分类是否允许出现在指定种类的目录中
    pub fn allowed_in(&self, kind: AnalyzerKind) -> bool {
        match (kind, self) {
            (AnalyzerKind::LeakDetection, RuleCategory::Risk(_) | RuleCategory::GoodPractice) => true,
            (AnalyzerKind::Performance, RuleCategory::Impact(_) | RuleCategory::GoodPractice) => true,
            (AnalyzerKind::StandardFeature, RuleCategory::Since(_)) => true,
            _ => false,
        }
    }
}

/// 单条规则：名称 + 正则 + 元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    pub category: RuleCategory,
    /// 修复建议（泄漏规则的 fix / 性能规则的 note）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Rule {
    pub fn risk(name: &str, pattern: &str, risk: Severity, fix: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            category: RuleCategory::Risk(risk),
            remediation: Some(fix.to_string()),
        }
    }

    pub fn impact(name: &str, pattern: &str, impact: Severity, note: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            category: RuleCategory::Impact(impact),
            remediation: Some(note.to_string()),
        }
    }

    /// 标准特性规则：特性名即模式文本
    pub fn since(standard: CxxStandard, pattern: &str) -> Self {
        Self {
            name: pattern.to_string(),
            pattern: pattern.to_string(),
            category: RuleCategory::Since(standard),
            remediation: None,
        }
    }

    pub fn good_practice(name: &str, pattern: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            category: RuleCategory::GoodPractice,
            remediation: None,
        }
    }

    /// 是否为正向规则（零次匹配也计入统计）
    pub fn is_positive(&self) -> bool {
        matches!(self.category, RuleCategory::GoodPractice)
    }

    pub fn remediation_text(&self) -> &str {
        self.remediation.as_deref().unwrap_or_default()
    }
}

/// 规则目录：同一分析器的全部规则，匹配选项按目录固定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCatalog {
    pub kind: AnalyzerKind,
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default)]
    pub multi_line: bool,
    pub rules: Vec<Rule>,
}

impl RuleCatalog {
    pub fn new(kind: AnalyzerKind, case_insensitive: bool, multi_line: bool, rules: Vec<Rule>) -> Self {
        Self {
            kind,
            case_insensitive,
            multi_line,
            rules,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// get_catalog 的返回值：规则目录或容器目录
#[derive(Debug, Clone, PartialEq)]
pub enum Catalog {
    Rules(RuleCatalog),
    Containers(ContainerCatalog),
}

impl Catalog {
    pub fn kind(&self) -> AnalyzerKind {
        match self {
            Catalog::Rules(catalog) => catalog.kind,
            Catalog::Containers(_) => AnalyzerKind::ContainerProfile,
        }
    }

    pub fn into_rules(self) -> CoreResult<RuleCatalog> {
        match self {
            Catalog::Rules(catalog) => Ok(catalog),
            Catalog::Containers(_) => Err(CoreError::NotARuleCatalog(AnalyzerKind::ContainerProfile)),
        }
    }

    pub fn into_containers(self) -> CoreResult<ContainerCatalog> {
        match self {
            Catalog::Containers(catalog) => Ok(catalog),
            Catalog::Rules(catalog) => Err(CoreError::CatalogKindMismatch {
                expected: AnalyzerKind::ContainerProfile,
                actual: catalog.kind,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_allowed_in_kind() {
        let risk = RuleCategory::Risk(Severity::High);
        assert!(risk.allowed_in(AnalyzerKind::LeakDetection));
        assert!(!risk.allowed_in(AnalyzerKind::Performance));
        assert!(RuleCategory::GoodPractice.allowed_in(AnalyzerKind::Performance));
        assert!(!RuleCategory::GoodPractice.allowed_in(AnalyzerKind::StandardFeature));
        assert!(!RuleCategory::Since(CxxStandard::Cxx17).allowed_in(AnalyzerKind::ContainerProfile));
    }

    #[test]
    fn test_rule_json_shape() {
        let json = r#"{
            "name": "raw_new",
            "pattern": "\\bnew\\s+\\w+",
            "category": {"kind": "risk", "value": "high"},
            "remediation": "Use std::make_unique"
        }"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.category, RuleCategory::Risk(Severity::High));
        assert_eq!(rule.remediation_text(), "Use std::make_unique");

        let positive: Rule = serde_json::from_str(
            r#"{"name": "reserve", "pattern": "\\.reserve\\(", "category": {"kind": "good_practice"}}"#,
        )
        .unwrap();
        assert!(positive.is_positive());
        assert_eq!(positive.remediation_text(), "");
    }

    #[test]
    fn test_since_rule_uses_pattern_as_name() {
        let rule = Rule::since(CxxStandard::Cxx11, r"move\(");
        assert_eq!(rule.name, r"move\(");
        assert_eq!(rule.category, RuleCategory::Since(CxxStandard::Cxx11));
    }
}
