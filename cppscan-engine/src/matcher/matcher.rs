use crate::core::{AnalyzerKind, Rule};
use crate::utils::log_format::preview_source;

use super::compiled::{CompiledCatalog, CompiledRule};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 单条规则的匹配结果
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'c> {
    pub rule: &'c Rule,
    /// 非重叠匹配次数
    pub count: usize,
}

/// 一次目录匹配的全部结果（保持目录顺序）
#[derive(Debug, Clone)]
pub struct MatchSet<'c> {
    kind: AnalyzerKind,
    matches: Vec<RuleMatch<'c>>,
}

impl<'c> MatchSet<'c> {
    pub fn kind(&self) -> AnalyzerKind {
        self.kind
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleMatch<'c>> {
        self.matches.iter()
    }

    /// 按规则名查询次数，不存在的规则视为0
    pub fn count_of(&self, name: &str) -> usize {
        self.matches
            .iter()
            .find(|m| m.rule.name == name)
            .map_or(0, |m| m.count)
    }

    /// 仅保留命中（次数>0）的结果
    pub fn hits(&self) -> impl Iterator<Item = &RuleMatch<'c>> {
        self.matches.iter().filter(|m| m.count > 0)
    }
}

/// 文本匹配器：无状态，同一输入重复调用结果恒定
pub struct Matcher;

impl Matcher {
    /// 统计单条规则在文本中的非重叠匹配次数
    #[inline]
    pub fn count(text: &str, rule: &CompiledRule) -> usize {
        rule.regex().find_iter(text).count()
    }

    /// 对整个目录逐条独立匹配
    pub fn count_all<'c>(text: &str, catalog: &'c CompiledCatalog) -> MatchSet<'c> {
        log::debug!(
            "Matching {} catalog ({} rules) | input_len={} preview={}",
            catalog.kind(),
            catalog.len(),
            text.len(),
            preview_source(text, 60)
        );

        let matches = Self::evaluate(text, catalog.rules());

        for m in &matches {
            log::trace!("Rule evaluated | rule={} count={}", m.rule.name, m.count);
        }

        MatchSet {
            kind: catalog.kind(),
            matches,
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate<'c>(text: &str, rules: &'c [CompiledRule]) -> Vec<RuleMatch<'c>> {
        rules
            .iter()
            .map(|rule| RuleMatch {
                rule: &rule.rule,
                count: Self::count(text, rule),
            })
            .collect()
    }

    /// 并行求值：collect 保持输入顺序，结果与串行一致
    #[cfg(feature = "parallel")]
    fn evaluate<'c>(text: &str, rules: &'c [CompiledRule]) -> Vec<RuleMatch<'c>> {
        rules
            .par_iter()
            .map(|rule| RuleMatch {
                rule: &rule.rule,
                count: Self::count(text, rule),
            })
            .collect()
    }
}
