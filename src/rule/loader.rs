//! 目录加载器：内置目录或本地 JSON 目录文件

use std::fs;
use std::path::Path;
use std::time::Instant;

use cppscan_engine::{get_catalog, AnalyzerKind, ContainerCatalog, RuleCatalog};

use crate::config::{CatalogOrigin, ScanConfig};
use crate::error::{CppScanError, ScanResult};

#[derive(Debug, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// 按配置加载规则目录；开启回退时本地加载失败改用内置目录
    pub fn load_rules(&self, config: &ScanConfig, kind: AnalyzerKind) -> ScanResult<RuleCatalog> {
        match (self.load_rules_from(config.origin(kind), kind), config.options.fallback_to_builtin) {
            (Ok(catalog), _) => Ok(catalog),
            (Err(e), true) => {
                log::warn!("Falling back to built-in {} catalog: {}", kind, e);
                Ok(get_catalog(kind).into_rules()?)
            }
            (Err(e), false) => Err(e),
        }
    }

    pub fn load_rules_from(&self, origin: &CatalogOrigin, kind: AnalyzerKind) -> ScanResult<RuleCatalog> {
        match origin {
            CatalogOrigin::Builtin => Ok(get_catalog(kind).into_rules()?),
            CatalogOrigin::LocalFile(path) => self.load_rule_file(path, kind),
        }
    }

    /// 读取本地规则目录，目录声明的种类必须与加载槽位一致
    pub fn load_rule_file(&self, path: &Path, kind: AnalyzerKind) -> ScanResult<RuleCatalog> {
        let start = Instant::now();
        let bytes = read_catalog_file(path)?;
        let catalog: RuleCatalog = serde_json::from_slice(&bytes)?;

        if catalog.kind != kind {
            return Err(CppScanError::CatalogLoadError(format!(
                "{} declares a {} catalog, expected {}",
                path.display(),
                catalog.kind,
                kind
            )));
        }

        log::debug!(
            "Local catalog loaded | kind={} rules={} path={} cost={}µs",
            kind,
            catalog.len(),
            path.display(),
            start.elapsed().as_micros()
        );
        Ok(catalog)
    }

    pub fn load_containers(&self, config: &ScanConfig) -> ScanResult<ContainerCatalog> {
        match &config.containers {
            CatalogOrigin::Builtin => Ok(get_catalog(AnalyzerKind::ContainerProfile).into_containers()?),
            CatalogOrigin::LocalFile(path) => match self.load_container_file(path) {
                Ok(catalog) => Ok(catalog),
                Err(e) if config.options.fallback_to_builtin => {
                    log::warn!("Falling back to built-in container catalog: {}", e);
                    Ok(get_catalog(AnalyzerKind::ContainerProfile).into_containers()?)
                }
                Err(e) => Err(e),
            },
        }
    }

    /// 读取本地容器目录
    pub fn load_container_file(&self, path: &Path) -> ScanResult<ContainerCatalog> {
        let bytes = read_catalog_file(path)?;
        let catalog: ContainerCatalog = serde_json::from_slice(&bytes)?;
        log::debug!(
            "Local container catalog loaded | entries={} path={}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

fn read_catalog_file(path: &Path) -> ScanResult<Vec<u8>> {
    if !path.is_file() {
        return Err(CppScanError::CatalogLoadError(format!(
            "catalog file not found: {}",
            path.display()
        )));
    }
    Ok(fs::read(path)?)
}
