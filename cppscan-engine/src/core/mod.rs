mod enums;
mod rule;
mod container;

// 导出常用项
pub use enums::{AnalyzerKind, CxxStandard, Severity};
pub use rule::{Catalog, Rule, RuleCatalog, RuleCategory};
pub use container::{ContainerCatalog, ContainerProfile, Requirement, RequirementVector, TimeClass};
