//! 容器推荐评分器
//! 每个条目的得分 = 既被请求又被满足的需求权重之和，最高分胜出
//! 同分时按目录顺序取第一个（隐式规则，下方测试固定了这一行为）

use rustc_hash::FxHashSet;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::core::{ContainerCatalog, ContainerProfile, Requirement, RequirementVector};
use crate::error::{CoreError, CoreResult};

/// 推荐结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// 最佳条目名称
    pub best: String,
    pub score: u32,
    /// 最佳条目的完整画像
    pub properties: ContainerProfile,
    /// 每个条目的得分，保持目录顺序（同分时靠前者胜出，顺序即依据）
    #[serde(serialize_with = "serialize_in_order")]
    pub all_scores: Vec<(String, u32)>,
}

impl Recommendation {
    /// 按名称查询得分
    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.all_scores
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, score)| *score)
    }
}

/// 序列化为 JSON 对象，键顺序与目录顺序一致
fn serialize_in_order<S>(scores: &[(String, u32)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(scores.len()))?;
    for (name, score) in scores {
        map.serialize_entry(name, score)?;
    }
    map.end()
}

/// 单个条目的得分（纯函数）
pub fn entry_score(requirements: &RequirementVector, profile: &ContainerProfile) -> u32 {
    Requirement::ALL
        .iter()
        .filter(|requirement| requirements.is_requested(**requirement))
        .filter(|requirement| requirement.is_satisfied_by(profile))
        .map(|requirement| requirement.weight())
        .sum()
}

/// 为需求向量选出最佳容器
pub fn recommend(requirements: &RequirementVector, catalog: &ContainerCatalog) -> CoreResult<Recommendation> {
    let mut seen = FxHashSet::default();
    let mut all_scores = Vec::with_capacity(catalog.len());
    let mut best: Option<(&ContainerProfile, u32)> = None;

    for profile in &catalog.entries {
        if !seen.insert(profile.name.as_str()) {
            return Err(CoreError::DuplicateEntry(profile.name.clone()));
        }

        let score = entry_score(requirements, profile);
        all_scores.push((profile.name.clone(), score));

        // 严格大于才替换，保证同分时靠前者胜出
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((profile, score)),
        }
    }

    let (profile, score) = best.ok_or(CoreError::EmptyCatalog)?;
    log::debug!(
        "Container recommended | best={} score={} candidates={}",
        profile.name,
        score,
        catalog.len()
    );

    Ok(Recommendation {
        best: profile.name.clone(),
        score,
        properties: profile.clone(),
        all_scores,
    })
}
