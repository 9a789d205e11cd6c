//! 性能反模式目录

use crate::core::{AnalyzerKind, Rule, RuleCatalog, Severity};

/// 内置性能分析目录（区分大小写，多行模式）
pub fn catalog() -> RuleCatalog {
    RuleCatalog::new(
        AnalyzerKind::Performance,
        false,
        true,
        vec![
            Rule::impact("virtual_call", r"\bvirtual\b", Severity::Medium, "Virtual calls prevent inlining"),
            Rule::impact("heap_allocation", r"\bnew\s+\w+", Severity::High, "Heap allocations are expensive"),
            Rule::impact(
                "exception_handling",
                r"\b(try|throw|catch)\b",
                Severity::Medium,
                "Exceptions have runtime cost",
            ),
            Rule::impact(
                "string_copy",
                r"std::string\s+\w+\s*=",
                Severity::Medium,
                "Consider string_view or references",
            ),
            Rule::impact("shared_ptr", r"shared_ptr", Severity::Low, "Atomic ref counting overhead"),
            // 良好实践
            Rule::good_practice("move_semantics", r"std::move\("),
            Rule::good_practice("reserve", r"\.reserve\("),
            Rule::good_practice("emplace", r"\.emplace"),
            Rule::good_practice("constexpr", r"\bconstexpr\b"),
            Rule::good_practice("inline", r"\binline\b"),
            Rule::good_practice("noexcept", r"\bnoexcept\b"),
        ],
    )
}
