//! 内存泄漏模式目录

use crate::core::{AnalyzerKind, Rule, RuleCatalog, Severity};

/// 内置泄漏检测目录（区分大小写，多行模式）
pub fn catalog() -> RuleCatalog {
    RuleCatalog::new(
        AnalyzerKind::LeakDetection,
        false,
        true,
        vec![
            Rule::risk(
                "raw_new",
                r"\bnew\s+\w+",
                Severity::High,
                "Use std::make_unique or std::make_shared",
            ),
            Rule::risk("raw_delete", r"\bdelete\s+", Severity::High, "Use smart pointers instead"),
            Rule::risk(
                "malloc",
                r"\bmalloc\s*\(",
                Severity::High,
                "Use C++ containers or smart pointers",
            ),
            Rule::risk("free", r"\bfree\s*\(", Severity::High, "Use C++ RAII patterns"),
            // 花括号启发式：嵌套类体时可能多报或漏报，保持近似
            Rule::risk(
                "missing_virtual_destructor",
                r"class\s+\w+\s*\{[^}]*public:[^}]*~\w+\(\)[^}]*\}",
                Severity::Medium,
                "Add virtual destructor for polymorphic base classes",
            ),
            Rule::good_practice(
                "smart_pointer_usage",
                r"(unique_ptr|shared_ptr|make_unique|make_shared)",
            ),
        ],
    )
}
