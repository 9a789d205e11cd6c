//! 编译后规则模型
//! 目录在编译阶段一次性校验并编译全部正则，运行期只读

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;
use std::time::Instant;

use crate::core::{AnalyzerKind, Rule, RuleCatalog};
use crate::error::{CoreError, CoreResult};

/// 编译后的单条规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// 原始规则（名称/分类/建议）
    pub rule: Rule,
    regex: Regex,
}

impl CompiledRule {
    /// 按目录的匹配选项编译单条规则
    pub fn compile(rule: &Rule, case_insensitive: bool, multi_line: bool) -> CoreResult<Self> {
        let regex = RegexBuilder::new(&rule.pattern)
            .case_insensitive(case_insensitive)
            .multi_line(multi_line)
            .build()
            .map_err(|source| CoreError::RegexCompileError {
                rule: rule.name.clone(),
                source,
            })?;

        Ok(Self {
            rule: rule.clone(),
            regex,
        })
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.rule.name
    }

    #[inline(always)]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// 描述规则（用于日志/调试输出）
    pub fn describe(&self) -> String {
        format!("{}: {}", self.rule.name, self.regex.as_str())
    }
}

/// 编译后的规则目录
#[derive(Debug, Clone)]
pub struct CompiledCatalog {
    kind: AnalyzerKind,
    rules: Vec<CompiledRule>,
}

impl CompiledCatalog {
    /// 校验并编译规则目录
    /// 校验项：种类必须是规则目录、名称唯一、分类与种类匹配、正则可编译
    pub fn compile(catalog: &RuleCatalog) -> CoreResult<Self> {
        let start = Instant::now();
        let kind = catalog.kind;
        if kind == AnalyzerKind::ContainerProfile {
            return Err(CoreError::NotARuleCatalog(kind));
        }

        let mut seen_names = FxHashSet::default();
        let mut rules = Vec::with_capacity(catalog.rules.len());

        for rule in &catalog.rules {
            if !seen_names.insert(rule.name.as_str()) {
                return Err(CoreError::DuplicateRule {
                    kind,
                    name: rule.name.clone(),
                });
            }
            if !rule.category.allowed_in(kind) {
                return Err(CoreError::UnexpectedCategory {
                    kind,
                    rule: rule.name.clone(),
                });
            }
            rules.push(CompiledRule::compile(rule, catalog.case_insensitive, catalog.multi_line)?);
        }

        log::debug!(
            "Catalog compiled | kind={} rules={} case_insensitive={} multi_line={} elapsed={:?}",
            kind,
            rules.len(),
            catalog.case_insensitive,
            catalog.multi_line,
            start.elapsed()
        );

        Ok(Self { kind, rules })
    }

    pub fn kind(&self) -> AnalyzerKind {
        self.kind
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CxxStandard, Severity};

    #[test]
    fn test_compile_rejects_duplicate_names() {
        let catalog = RuleCatalog::new(
            AnalyzerKind::LeakDetection,
            false,
            true,
            vec![
                Rule::risk("raw_new", r"\bnew\b", Severity::High, "a"),
                Rule::risk("raw_new", r"\bnew\s+", Severity::High, "b"),
            ],
        );
        assert!(matches!(
            CompiledCatalog::compile(&catalog),
            Err(CoreError::DuplicateRule { .. })
        ));
    }

    #[test]
    fn test_lookup_compiled_rule() {
        let catalog = RuleCatalog::new(
            AnalyzerKind::Performance,
            false,
            true,
            vec![
                Rule::impact("virtual_call", r"\bvirtual\b", Severity::Medium, "a"),
                Rule::good_practice("reserve", r"\.reserve\("),
            ],
        );
        let compiled = CompiledCatalog::compile(&catalog).unwrap();
        let reserve = compiled.get("reserve").unwrap();
        assert_eq!(reserve.name(), "reserve");
        assert!(reserve.regex().is_match("items.reserve(8);"));
        assert!(compiled.get("heap_allocation").is_none());
    }

    #[test]
    fn test_compile_rejects_invalid_pattern() {
        let catalog = RuleCatalog::new(
            AnalyzerKind::Performance,
            false,
            false,
            vec![Rule::impact("broken", r"(unclosed", Severity::Low, "x")],
        );
        match CompiledCatalog::compile(&catalog) {
            Err(CoreError::RegexCompileError { rule, .. }) => assert_eq!(rule, "broken"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_compile_rejects_foreign_category() {
        let catalog = RuleCatalog::new(
            AnalyzerKind::Performance,
            false,
            false,
            vec![Rule::since(CxxStandard::Cxx17, "optional")],
        );
        assert!(matches!(
            CompiledCatalog::compile(&catalog),
            Err(CoreError::UnexpectedCategory { .. })
        ));
    }

    #[test]
    fn test_compile_applies_case_option() {
        let rule = Rule::since(CxxStandard::Cxx11, "nullptr");
        let insensitive = CompiledRule::compile(&rule, true, false).unwrap();
        let sensitive = CompiledRule::compile(&rule, false, false).unwrap();
        assert!(insensitive.regex().is_match("NULLPTR"));
        assert!(!sensitive.regex().is_match("NULLPTR"));
    }
}
