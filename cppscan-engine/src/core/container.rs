use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 操作的时间复杂度分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeClass {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(1) amortized")]
    AmortizedConstant,
    #[serde(rename = "O(1) average")]
    AverageConstant,
    #[serde(rename = "O(log n)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
}

impl TimeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeClass::Constant => "O(1)",
            TimeClass::AmortizedConstant => "O(1) amortized",
            TimeClass::AverageConstant => "O(1) average",
            TimeClass::Logarithmic => "O(log n)",
            TimeClass::Linear => "O(n)",
        }
    }

    /// 任意常数级（含均摊/平均）
    pub fn is_constant(&self) -> bool {
        matches!(
            self,
            TimeClass::Constant | TimeClass::AmortizedConstant | TimeClass::AverageConstant
        )
    }
}

impl Display for TimeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 容器画像：各操作复杂度 + 适用场景
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerProfile {
    pub name: String,
    pub access: TimeClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert: Option<TimeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_end: Option<TimeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_front: Option<TimeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_mid: Option<TimeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<TimeClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    #[serde(default)]
    pub best_for: Vec<String>,
}

impl ContainerProfile {
    pub fn new(name: &str, access: TimeClass) -> Self {
        Self {
            name: name.to_string(),
            access,
            insert: None,
            insert_end: None,
            insert_front: None,
            insert_mid: None,
            search: None,
            ordered: None,
            best_for: Vec::new(),
        }
    }

    pub fn insert(mut self, class: TimeClass) -> Self {
        self.insert = Some(class);
        self
    }

    pub fn insert_end(mut self, class: TimeClass) -> Self {
        self.insert_end = Some(class);
        self
    }

    pub fn insert_front(mut self, class: TimeClass) -> Self {
        self.insert_front = Some(class);
        self
    }

    pub fn insert_mid(mut self, class: TimeClass) -> Self {
        self.insert_mid = Some(class);
        self
    }

    pub fn search(mut self, class: TimeClass) -> Self {
        self.search = Some(class);
        self
    }

    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = Some(ordered);
        self
    }

    pub fn best_for(mut self, tags: &[&str]) -> Self {
        self.best_for = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }
}

/// 容器目录（顺序有意义：同分时靠前者胜出）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCatalog {
    pub entries: Vec<ContainerProfile>,
}

impl ContainerCatalog {
    pub fn new(entries: Vec<ContainerProfile>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&ContainerProfile> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 推荐器支持的需求项
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    RandomAccess,
    FastLookup,
    Ordered,
    FrequentInsert,
}

impl Requirement {
    pub const ALL: [Requirement; 4] = [
        Requirement::RandomAccess,
        Requirement::FastLookup,
        Requirement::Ordered,
        Requirement::FrequentInsert,
    ];

    /// 需求被请求且被满足时计入的固定权重
    pub fn weight(self) -> u32 {
        match self {
            Requirement::RandomAccess => 2,
            Requirement::FastLookup => 3,
            Requirement::Ordered => 2,
            Requirement::FrequentInsert => 2,
        }
    }

    /// 判断容器画像是否满足该需求
    pub fn is_satisfied_by(self, profile: &ContainerProfile) -> bool {
        match self {
            // 严格 O(1)，均摊/平均不算
            Requirement::RandomAccess => profile.access == TimeClass::Constant,
            Requirement::FastLookup => profile.access.is_constant(),
            Requirement::Ordered => profile.ordered == Some(true),
            // 只看通用 insert，不看 insert_end / insert_front
            Requirement::FrequentInsert => profile.insert.is_some_and(|class| class.is_constant()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Requirement::RandomAccess => "random_access",
            Requirement::FastLookup => "fast_lookup",
            Requirement::Ordered => "ordered",
            Requirement::FrequentInsert => "frequent_insert",
        }
    }
}

impl Display for Requirement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Requirement {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random_access" => Ok(Requirement::RandomAccess),
            "fast_lookup" => Ok(Requirement::FastLookup),
            "ordered" => Ok(Requirement::Ordered),
            "frequent_insert" => Ok(Requirement::FrequentInsert),
            _ => Err(CoreError::UnknownRequirement(s.to_string())),
        }
    }
}

/// 需求向量：需求名 → 是否需要
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequirementVector {
    flags: BTreeMap<Requirement, bool>,
}

impl RequirementVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式添加一项需求
    pub fn require(mut self, requirement: Requirement) -> Self {
        self.flags.insert(requirement, true);
        self
    }

    pub fn set(&mut self, requirement: Requirement, wanted: bool) {
        self.flags.insert(requirement, wanted);
    }

    pub fn is_requested(&self, requirement: Requirement) -> bool {
        self.flags.get(&requirement).copied().unwrap_or(false)
    }

    /// 从名称键值对构建，未知名称忽略（记录警告）
    pub fn from_named<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut vector = Self::new();
        for (name, wanted) in pairs {
            match name.as_ref().parse::<Requirement>() {
                Ok(requirement) => vector.set(requirement, wanted),
                Err(e) => log::warn!("Ignoring requirement entry: {}", e),
            }
        }
        vector
    }
}

impl FromIterator<(Requirement, bool)> for RequirementVector {
    fn from_iter<T: IntoIterator<Item = (Requirement, bool)>>(iter: T) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
