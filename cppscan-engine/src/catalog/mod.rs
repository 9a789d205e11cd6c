//! 内置目录：编译进程序的静态配置
pub mod leak;
pub mod perf;
pub mod standard;
pub mod container;

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::core::{AnalyzerKind, Catalog, ContainerCatalog};
use crate::error::{CoreError, CoreResult};
use crate::matcher::CompiledCatalog;

/// 按种类获取内置目录（每次返回新实例，调用方可自由修改副本）
pub fn get_catalog(kind: AnalyzerKind) -> Catalog {
    match kind {
        AnalyzerKind::LeakDetection => Catalog::Rules(leak::catalog()),
        AnalyzerKind::Performance => Catalog::Rules(perf::catalog()),
        AnalyzerKind::StandardFeature => Catalog::Rules(standard::catalog()),
        AnalyzerKind::ContainerProfile => Catalog::Containers(container::catalog()),
    }
}

/// 编译内置目录，失败属于程序缺陷，启动时立即崩溃
fn compile_builtin(kind: AnalyzerKind) -> Arc<CompiledCatalog> {
    let catalog = get_catalog(kind).into_rules().unwrap_or_else(|e| {
        panic!("Built-in {} catalog is not a rule catalog: {}", kind, e);
    });
    let compiled = CompiledCatalog::compile(&catalog).unwrap_or_else(|e| {
        panic!("Built-in {} catalog failed to compile: {}", kind, e);
    });
    Arc::new(compiled)
}

/// 全局懒加载的内置编译目录，初始化后只读，线程安全
static BUILTIN_LEAK: Lazy<Arc<CompiledCatalog>> = Lazy::new(|| compile_builtin(AnalyzerKind::LeakDetection));
static BUILTIN_PERF: Lazy<Arc<CompiledCatalog>> = Lazy::new(|| compile_builtin(AnalyzerKind::Performance));
static BUILTIN_STANDARD: Lazy<Arc<CompiledCatalog>> =
    Lazy::new(|| compile_builtin(AnalyzerKind::StandardFeature));
static BUILTIN_CONTAINERS: Lazy<Arc<ContainerCatalog>> = Lazy::new(|| Arc::new(container::catalog()));

/// 获取内置的已编译规则目录
pub fn builtin_compiled(kind: AnalyzerKind) -> CoreResult<Arc<CompiledCatalog>> {
    match kind {
        AnalyzerKind::LeakDetection => Ok(BUILTIN_LEAK.clone()),
        AnalyzerKind::Performance => Ok(BUILTIN_PERF.clone()),
        AnalyzerKind::StandardFeature => Ok(BUILTIN_STANDARD.clone()),
        AnalyzerKind::ContainerProfile => Err(CoreError::NotARuleCatalog(kind)),
    }
}

/// 获取内置容器目录
pub fn builtin_containers() -> Arc<ContainerCatalog> {
    BUILTIN_CONTAINERS.clone()
}
