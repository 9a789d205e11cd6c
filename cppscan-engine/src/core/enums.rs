use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CoreError;

/// 分析器种类枚举，决定使用哪一份目录
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalyzerKind {
    LeakDetection,
    Performance,
    StandardFeature,
    ContainerProfile,
}

impl AnalyzerKind {
    /// 全部种类（按固定顺序）
    pub const ALL: [AnalyzerKind; 4] = [
        AnalyzerKind::LeakDetection,
        AnalyzerKind::Performance,
        AnalyzerKind::StandardFeature,
        AnalyzerKind::ContainerProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerKind::LeakDetection => "leak-detection",
            AnalyzerKind::Performance => "performance",
            AnalyzerKind::StandardFeature => "standard-feature",
            AnalyzerKind::ContainerProfile => "container-profile",
        }
    }
}

impl Display for AnalyzerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyzerKind {
    type Err = CoreError;

    /// 解析目录选择器，未知名称直接报错，不做默认回退
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leak-detection" | "leak" | "leaks" => Ok(AnalyzerKind::LeakDetection),
            "performance" | "perf" => Ok(AnalyzerKind::Performance),
            "standard-feature" | "standard" | "std" => Ok(AnalyzerKind::StandardFeature),
            "container-profile" | "container" | "containers" => Ok(AnalyzerKind::ContainerProfile),
            _ => Err(CoreError::UnknownCatalogKind(s.to_string())),
        }
    }
}

/// 严重程度（泄漏风险 / 性能影响共用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// C++语言标准版本
/// 枚举声明顺序即时间顺序：Cxx98 作为"前现代"哨兵，小于所有真实标准
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum CxxStandard {
    Cxx98,
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
    Cxx23,
}

impl CxxStandard {
    /// 未检测到任何特性时的基线
    pub const PRE_MODERN: CxxStandard = CxxStandard::Cxx98;
    /// 第一个"现代"标准
    pub const FIRST_MODERN: CxxStandard = CxxStandard::Cxx11;

    /// 标准的年份编号（98/11/14/...）
    pub fn number(self) -> u16 {
        match self {
            CxxStandard::Cxx98 => 98,
            CxxStandard::Cxx11 => 11,
            CxxStandard::Cxx14 => 14,
            CxxStandard::Cxx17 => 17,
            CxxStandard::Cxx20 => 20,
            CxxStandard::Cxx23 => 23,
        }
    }

    /// 编译器参数形式的建议
    /// 哨兵版本没有对应的检测依据，回退为 -std=c++11
    pub fn compiler_flag(self) -> String {
        if self > CxxStandard::PRE_MODERN {
            format!("-std=c++{}", self.number())
        } else {
            "-std=c++11".to_string()
        }
    }

    pub fn is_modern(self) -> bool {
        self >= CxxStandard::FIRST_MODERN
    }
}

impl Display for CxxStandard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "C++{}", self.number())
    }
}

impl TryFrom<u16> for CxxStandard {
    type Error = CoreError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            98 => Ok(CxxStandard::Cxx98),
            11 => Ok(CxxStandard::Cxx11),
            14 => Ok(CxxStandard::Cxx14),
            17 => Ok(CxxStandard::Cxx17),
            20 => Ok(CxxStandard::Cxx20),
            23 => Ok(CxxStandard::Cxx23),
            other => Err(CoreError::UnknownStandard(other)),
        }
    }
}

impl From<CxxStandard> for u16 {
    fn from(standard: CxxStandard) -> Self {
        standard.number()
    }
}
