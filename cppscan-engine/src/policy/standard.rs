//! C++标准版本检测聚合策略
//! 结果取所有命中特性中的最高标准（"天花板"而非"地板"）

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{AnalyzerKind, CxxStandard, RuleCategory};
use crate::error::{CoreError, CoreResult};
use crate::matcher::{CompiledCatalog, MatchSet, Matcher};

use super::ensure_kind;

/// 标准检测报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardReport {
    /// 形如 "C++17" 的标签
    pub minimum_standard: String,
    /// 标准编号 → 命中的特性列表（保持目录顺序）
    pub detected_features: BTreeMap<u16, Vec<String>>,
    /// 编译器参数形式的建议
    pub recommendation: String,
    pub modern: bool,
    #[serde(skip)]
    pub standard: CxxStandard,
}

/// 推断"最低标准"：从前现代哨兵开始取最大值
pub fn infer_minimum_standard<I>(detected: I) -> CxxStandard
where
    I: IntoIterator<Item = CxxStandard>,
{
    detected
        .into_iter()
        .fold(CxxStandard::PRE_MODERN, |current, standard| current.max(standard))
}

/// 对源码文本执行C++标准检测
pub fn detect_standard(text: &str, catalog: &CompiledCatalog) -> CoreResult<StandardReport> {
    aggregate(&Matcher::count_all(text, catalog))
}

/// 聚合匹配结果（目录种类不符时报错）
pub fn aggregate(matches: &MatchSet<'_>) -> CoreResult<StandardReport> {
    ensure_kind(matches, AnalyzerKind::StandardFeature)?;

    let mut detected_features: BTreeMap<u16, Vec<String>> = BTreeMap::new();
    let mut hit_standards = Vec::new();

    for m in matches.iter() {
        let RuleCategory::Since(standard) = m.rule.category else {
            return Err(CoreError::UnexpectedCategory {
                kind: AnalyzerKind::StandardFeature,
                rule: m.rule.name.clone(),
            });
        };
        if m.count == 0 {
            continue;
        }
        detected_features
            .entry(standard.number())
            .or_default()
            .push(m.rule.name.clone());
        hit_standards.push(standard);
    }

    let standard = infer_minimum_standard(hit_standards);

    Ok(StandardReport {
        minimum_standard: standard.to_string(),
        detected_features,
        recommendation: standard.compiler_flag(),
        modern: standard.is_modern(),
        standard,
    })
}
