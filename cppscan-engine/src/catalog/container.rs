//! STL容器画像目录

use crate::core::{ContainerCatalog, ContainerProfile, TimeClass};

/// 内置容器目录，顺序即同分时的优先级
pub fn catalog() -> ContainerCatalog {
    ContainerCatalog::new(vec![
        ContainerProfile::new("vector", TimeClass::Constant)
            .insert_end(TimeClass::AmortizedConstant)
            .insert_mid(TimeClass::Linear)
            .search(TimeClass::Linear)
            .best_for(&["random access", "cache friendly", "default choice"]),
        ContainerProfile::new("deque", TimeClass::Constant)
            .insert_end(TimeClass::Constant)
            .insert_front(TimeClass::Constant)
            .best_for(&["double-ended operations", "queue implementation"]),
        ContainerProfile::new("list", TimeClass::Linear)
            .insert(TimeClass::Constant)
            .best_for(&["frequent insertions", "splice operations"]),
        ContainerProfile::new("map", TimeClass::Logarithmic)
            .insert(TimeClass::Logarithmic)
            .ordered(true)
            .best_for(&["ordered key-value", "range queries"]),
        ContainerProfile::new("unordered_map", TimeClass::AverageConstant)
            .insert(TimeClass::AverageConstant)
            .ordered(false)
            .best_for(&["fast lookup", "hash-based access"]),
        ContainerProfile::new("set", TimeClass::Logarithmic)
            .insert(TimeClass::Logarithmic)
            .best_for(&["unique ordered elements", "range queries"]),
    ])
}
