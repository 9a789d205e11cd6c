//! C++标准特性目录：版本 → 特性模式列表

use crate::core::{AnalyzerKind, CxxStandard, Rule, RuleCatalog};

const CXX11_FEATURES: &[&str] = &[
    "nullptr", "auto", "decltype", "constexpr", "override", "final",
    "unique_ptr", "shared_ptr", "lambda", r"move\(", r"forward\(",
];

const CXX14_FEATURES: &[&str] = &["make_unique", "generic lambda", "'[0-9]+'s", "'[0-9]+'ms"];

const CXX17_FEATURES: &[&str] = &[
    "optional", "variant", "any", "string_view", "filesystem",
    "if constexpr", "structured binding", r"\[\[nodiscard\]\]",
];

const CXX20_FEATURES: &[&str] = &[
    "concept", "requires", "co_await", "co_yield", "co_return",
    "span", "jthread", r"\|", "ranges::", "<=>",
];

const CXX23_FEATURES: &[&str] = &["expected", "mdspan", r"print\(", "this auto"];

/// 内置标准特性目录（忽略大小写）
pub fn catalog() -> RuleCatalog {
    let table = [
        (CxxStandard::Cxx11, CXX11_FEATURES),
        (CxxStandard::Cxx14, CXX14_FEATURES),
        (CxxStandard::Cxx17, CXX17_FEATURES),
        (CxxStandard::Cxx20, CXX20_FEATURES),
        (CxxStandard::Cxx23, CXX23_FEATURES),
    ];

    let rules = table
        .iter()
        .flat_map(|(standard, features)| features.iter().map(move |feature| Rule::since(*standard, feature)))
        .collect();

    RuleCatalog::new(AnalyzerKind::StandardFeature, true, false, rules)
}
