//! cppscan-engine 内核错误定义
//! 封装内核层所有核心错误，与业务层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

use regex::Error as RegexError;

use crate::core::AnalyzerKind;

/// 内核核心错误枚举
/// 内核层只有配置类错误：源码文本本身永远是合法输入
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 规则目录相关错误 =====================
    /// 未知的目录种类（字符串选择器无法识别）
    #[error("Unknown catalog kind: {0}")]
    UnknownCatalogKind(String),

    /// 目录内规则名称重复
    #[error("Duplicate rule name in {kind} catalog: {name}")]
    DuplicateRule { kind: AnalyzerKind, name: String },

    /// 规则分类与目录种类不匹配（例如性能目录里出现风险规则）
    #[error("Rule `{rule}` has a category not allowed in a {kind} catalog")]
    UnexpectedCategory { kind: AnalyzerKind, rule: String },

    /// 请求的目录不是规则目录（容器目录没有正则规则）
    #[error("{0} catalog does not contain pattern rules")]
    NotARuleCatalog(AnalyzerKind),

    /// 目录种类与分析策略不一致
    #[error("Catalog kind mismatch: expected {expected}, got {actual}")]
    CatalogKindMismatch {
        expected: AnalyzerKind,
        actual: AnalyzerKind,
    },

    // ===================== 编译相关错误 =====================
    /// 正则表达式编译失败（正则语法错误/不支持的特性）
    #[error("Regex compilation failed for rule `{rule}`: {source}")]
    RegexCompileError {
        rule: String,
        #[source]
        source: RegexError,
    },

    // ===================== 推荐器相关错误 =====================
    /// 容器目录为空，无法选出最佳条目
    #[error("Container catalog is empty")]
    EmptyCatalog,

    /// 容器目录内条目名称重复
    #[error("Duplicate container entry: {0}")]
    DuplicateEntry(String),

    /// 未知需求名称
    #[error("Unknown requirement: {0}")]
    UnknownRequirement(String),

    /// 未知的C++标准版本号
    #[error("Unknown C++ standard: {0}")]
    UnknownStandard(u16),
}

/// 内核层全局Result类型别名
/// 统一使用CoreError作为内核层错误类型
pub type CoreResult<T> = Result<T, CoreError>;
