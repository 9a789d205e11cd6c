//! C++源码分析器核心
//! 核心职责：
//! 1. 按配置加载并编译三份规则目录与容器目录
//! 2. 对源码文本执行泄漏/性能/标准检测
//! 3. 根据需求向量推荐STL容器

use std::sync::Arc;
use std::time::Instant;

use cppscan_engine::{
    builtin_compiled, builtin_containers, recommend, AnalysisPolicy, AnalyzerKind, CompiledCatalog,
    ContainerCatalog, LeakReport, PerformanceReport, Recommendation, Report, RequirementVector,
    RuleCatalog, StandardReport,
};

use crate::config::{CatalogOrigin, ScanConfig};
use crate::error::{CppScanError, ScanResult};
use crate::rule::CatalogLoader;

/// 分析器核心结构体
/// 内置目录直接复用全局编译结果（Arc共享），本地目录在构造时编译一次
#[derive(Debug, Clone)]
pub struct CppAnalyzer {
    leak: Arc<CompiledCatalog>,
    performance: Arc<CompiledCatalog>,
    standard: Arc<CompiledCatalog>,
    containers: Arc<ContainerCatalog>,
    config: ScanConfig,
}

impl CppAnalyzer {
    /// 全部使用内置目录，不会失败
    pub fn builtin() -> Self {
        Self {
            leak: builtin_rules(AnalyzerKind::LeakDetection),
            performance: builtin_rules(AnalyzerKind::Performance),
            standard: builtin_rules(AnalyzerKind::StandardFeature),
            containers: builtin_containers(),
            config: ScanConfig::builtin(),
        }
    }

    /// 按配置创建分析器
    pub fn new(config: ScanConfig) -> ScanResult<Self> {
        if config.is_all_builtin() {
            log::debug!("Using built-in catalogs");
            return Ok(Self {
                config,
                ..Self::builtin()
            });
        }

        let start = Instant::now();
        let loader = CatalogLoader::new();
        let leak = Self::prepare(&loader, &config, AnalyzerKind::LeakDetection)?;
        let performance = Self::prepare(&loader, &config, AnalyzerKind::Performance)?;
        let standard = Self::prepare(&loader, &config, AnalyzerKind::StandardFeature)?;
        let containers = match config.containers {
            CatalogOrigin::Builtin => builtin_containers(),
            CatalogOrigin::LocalFile(_) => Arc::new(loader.load_containers(&config)?),
        };

        log::info!(
            "CppAnalyzer ready | leak_rules={} perf_rules={} standard_rules={} containers={} cost={}ms",
            leak.len(),
            performance.len(),
            standard.len(),
            containers.len(),
            start.elapsed().as_millis()
        );

        if config.options.verbose {
            for catalog in [&leak, &performance, &standard] {
                for rule in catalog.rules() {
                    log::debug!("Loaded rule | {} | {}", catalog.kind(), rule.describe());
                }
            }
        }

        Ok(Self {
            leak,
            performance,
            standard,
            containers,
            config,
        })
    }

    /// 内置来源复用全局编译结果，本地来源加载后编译
    fn prepare(loader: &CatalogLoader, config: &ScanConfig, kind: AnalyzerKind) -> ScanResult<Arc<CompiledCatalog>> {
        match config.origin(kind) {
            CatalogOrigin::Builtin => Ok(builtin_compiled(kind)?),
            CatalogOrigin::LocalFile(_) => {
                let compiled = loader
                    .load_rules(config, kind)
                    .and_then(|catalog| Ok(CompiledCatalog::compile(&catalog)?));
                match compiled {
                    Ok(catalog) => Ok(Arc::new(catalog)),
                    Err(e) if config.options.fallback_to_builtin => {
                        log::warn!("Falling back to built-in {} catalog: {}", kind, e);
                        Ok(builtin_compiled(kind)?)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// 替换某一份规则目录（目录种类决定替换哪个槽位）
    pub fn with_catalog(mut self, catalog: &RuleCatalog) -> ScanResult<Self> {
        let compiled = Arc::new(CompiledCatalog::compile(catalog)?);
        match catalog.kind {
            AnalyzerKind::LeakDetection => self.leak = compiled,
            AnalyzerKind::Performance => self.performance = compiled,
            AnalyzerKind::StandardFeature => self.standard = compiled,
            AnalyzerKind::ContainerProfile => {
                return Err(CppScanError::InvalidInput(
                    "container catalog cannot be used as a rule catalog".to_string(),
                ))
            }
        }
        Ok(self)
    }

    /// 替换容器目录
    pub fn with_containers(mut self, containers: ContainerCatalog) -> Self {
        self.containers = Arc::new(containers);
        self
    }

    /// 获取某个种类的已编译目录
    pub fn catalog(&self, kind: AnalyzerKind) -> ScanResult<&CompiledCatalog> {
        match kind {
            AnalyzerKind::LeakDetection => Ok(&self.leak),
            AnalyzerKind::Performance => Ok(&self.performance),
            AnalyzerKind::StandardFeature => Ok(&self.standard),
            AnalyzerKind::ContainerProfile => Err(CppScanError::InvalidInput(format!(
                "{} has no pattern rules",
                kind
            ))),
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn containers(&self) -> &ContainerCatalog {
        &self.containers
    }

    /// 内存泄漏模式检测
    pub fn detect_leaks(&self, code: &str) -> ScanResult<LeakReport> {
        Ok(cppscan_engine::detect_leaks(code, &self.leak)?)
    }

    /// 性能模式分析
    pub fn analyze_performance(&self, code: &str) -> ScanResult<PerformanceReport> {
        Ok(cppscan_engine::analyze_performance(code, &self.performance)?)
    }

    /// C++标准版本检测
    pub fn detect_standard(&self, code: &str) -> ScanResult<StandardReport> {
        Ok(cppscan_engine::detect_standard(code, &self.standard)?)
    }

    /// 按种类分析（CLI 等按名称分派的场景）
    pub fn analyze(&self, kind: AnalyzerKind, code: &str) -> ScanResult<Report> {
        let policy = AnalysisPolicy::for_kind(kind)?;
        let start = Instant::now();
        let report = policy.analyze(code, self.catalog(kind)?)?;
        log::debug!(
            "Analysis finished | kind={} issues={} input_len={} cost={}µs",
            kind,
            report.issue_count(),
            code.len(),
            start.elapsed().as_micros()
        );
        Ok(report)
    }

    /// STL容器推荐
    pub fn recommend_container(&self, requirements: &RequirementVector) -> ScanResult<Recommendation> {
        Ok(recommend(requirements, &self.containers)?)
    }
}

impl Default for CppAnalyzer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 内置目录由引擎保证可用，规则种类不会失败
fn builtin_rules(kind: AnalyzerKind) -> Arc<CompiledCatalog> {
    builtin_compiled(kind).unwrap_or_else(|e| panic!("Built-in {} catalog unavailable: {}", kind, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomConfigBuilder;
    use cppscan_engine::{ContainerProfile, Requirement, Rule, RiskLevel, Severity, TimeClass};
    use std::io::Write;

    /// 测试时输出到 capture 的日志，覆盖编译/匹配路径上的 debug/trace 分支
    fn init_test_logger() {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    fn write_catalog(catalog: &RuleCatalog) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(catalog).unwrap().as_bytes())
            .unwrap();
        file
    }

    const SAMPLE: &str = r#"
        #include <vector>
        template <typename T>
        void process(std::vector<T> items) {
            int* raw = new int[items.size()];
            for (int i = 0; i < items.size(); ++i) {
                auto x = items[i];
            }
            delete[] raw;
        }
    "#;

    #[test]
    fn test_builtin_analyzer() {
        init_test_logger();
        let analyzer = CppAnalyzer::builtin();

        let leaks = analyzer.detect_leaks(SAMPLE).unwrap();
        assert_eq!(leaks.risk_level, RiskLevel::High);

        let perf = analyzer.analyze_performance(SAMPLE).unwrap();
        assert!(perf
            .potential_issues
            .iter()
            .any(|issue| issue.pattern == "heap_allocation"));

        let standard = analyzer.detect_standard(SAMPLE).unwrap();
        assert_eq!(standard.minimum_standard, "C++11");
    }

    #[test]
    fn test_analyze_dispatch_matches_typed_calls() {
        let analyzer = CppAnalyzer::builtin();
        let typed = analyzer.detect_leaks(SAMPLE).unwrap();
        let dispatched = analyzer.analyze(AnalyzerKind::LeakDetection, SAMPLE).unwrap();
        assert_eq!(dispatched, Report::Leak(typed));
        assert!(analyzer.analyze(AnalyzerKind::ContainerProfile, SAMPLE).is_err());
    }

    #[test]
    fn test_new_with_builtin_config() {
        let analyzer = CppAnalyzer::new(ScanConfig::builtin()).unwrap();
        assert!(analyzer.config().is_all_builtin());
        assert_eq!(analyzer.containers().len(), 6);
        assert!(analyzer.containers().get("unordered_map").is_some());
        let result = analyzer
            .recommend_container(&RequirementVector::new().require(Requirement::Ordered))
            .unwrap();
        assert_eq!(result.best, "map");
    }

    #[test]
    fn test_new_with_local_catalog() {
        let catalog = RuleCatalog::new(
            AnalyzerKind::LeakDetection,
            false,
            true,
            vec![Rule::risk("alloca", r"alloca\s*\(", Severity::High, "Avoid alloca")],
        );
        init_test_logger();
        let file = write_catalog(&catalog);

        let config = CustomConfigBuilder::new()
            .local_catalog(AnalyzerKind::LeakDetection, file.path())
            .verbose(true)
            .build();
        let analyzer = CppAnalyzer::new(config).unwrap();
        assert!(!analyzer.config().is_all_builtin());
        assert!(analyzer.catalog(AnalyzerKind::LeakDetection).unwrap().get("alloca").is_some());

        let report = analyzer.detect_leaks("char* buf = alloca(64); int* p = new int;").unwrap();
        assert_eq!(report.issue_count, 1);
        assert_eq!(report.issues[0].issue_type, "alloca");
        // 其他槽位仍为内置目录
        assert_eq!(
            analyzer.catalog(AnalyzerKind::Performance).unwrap().len(),
            builtin_compiled(AnalyzerKind::Performance).unwrap().len()
        );
    }

    #[test]
    fn test_with_catalog_rejects_bad_regex() {
        let catalog = RuleCatalog::new(
            AnalyzerKind::Performance,
            false,
            true,
            vec![Rule::impact("broken", r"(unclosed", Severity::Low, "never")],
        );
        let result = CppAnalyzer::builtin().with_catalog(&catalog);
        assert!(matches!(result, Err(CppScanError::Core(_))));
    }

    #[test]
    fn test_fallback_covers_compile_failure() {
        init_test_logger();
        let catalog = RuleCatalog::new(
            AnalyzerKind::LeakDetection,
            false,
            true,
            vec![Rule::risk("broken", r"(unclosed", Severity::High, "never")],
        );
        let file = write_catalog(&catalog);

        let strict = CustomConfigBuilder::new()
            .local_catalog(AnalyzerKind::LeakDetection, file.path())
            .build();
        assert!(matches!(CppAnalyzer::new(strict), Err(CppScanError::Core(_))));

        let lenient = CustomConfigBuilder::new()
            .local_catalog(AnalyzerKind::LeakDetection, file.path())
            .fallback_to_builtin(true)
            .build();
        let analyzer = CppAnalyzer::new(lenient).unwrap();
        let leak = analyzer.catalog(AnalyzerKind::LeakDetection).unwrap();
        assert!(leak.get("broken").is_none());
        assert_eq!(leak.len(), builtin_compiled(AnalyzerKind::LeakDetection).unwrap().len());

        let report = analyzer.detect_leaks("int* p = new int(5); delete p;").unwrap();
        assert_eq!(report.issue_count, 2);
    }

    #[test]
    fn test_with_containers() {
        let analyzer = CppAnalyzer::builtin().with_containers(ContainerCatalog::new(vec![
            ContainerProfile::new("array", TimeClass::Constant),
        ]));
        let result = analyzer
            .recommend_container(&RequirementVector::new().require(Requirement::RandomAccess))
            .unwrap();
        assert_eq!(result.best, "array");
        assert_eq!(result.score, 2);
    }
}
