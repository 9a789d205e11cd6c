//! 扫描配置管理

use std::path::PathBuf;

use cppscan_engine::AnalyzerKind;

/// 目录来源
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogOrigin {
    #[default]
    Builtin,            // 内置目录（编译进程序）
    LocalFile(PathBuf), // 本地 JSON 目录文件（运行时）
}

impl CatalogOrigin {
    pub fn is_builtin(&self) -> bool {
        matches!(self, CatalogOrigin::Builtin)
    }
}

/// 运行选项
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// 输出详细日志（CLI 据此把日志级别提升到 debug）
    pub verbose: bool,
    /// 本地目录读取/解析/编译任一步失败时回退到内置目录
    pub fallback_to_builtin: bool,
}

/// 完整扫描配置：每个分析器各有一个目录来源
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub leak: CatalogOrigin,
    pub performance: CatalogOrigin,
    pub standard: CatalogOrigin,
    pub containers: CatalogOrigin,
    pub options: ScanOptions,
}

impl ScanConfig {
    /// 全部使用内置目录
    pub fn builtin() -> Self {
        Self::default()
    }

    /// 某个种类的目录来源
    pub fn origin(&self, kind: AnalyzerKind) -> &CatalogOrigin {
        match kind {
            AnalyzerKind::LeakDetection => &self.leak,
            AnalyzerKind::Performance => &self.performance,
            AnalyzerKind::StandardFeature => &self.standard,
            AnalyzerKind::ContainerProfile => &self.containers,
        }
    }

    fn origin_mut(&mut self, kind: AnalyzerKind) -> &mut CatalogOrigin {
        match kind {
            AnalyzerKind::LeakDetection => &mut self.leak,
            AnalyzerKind::Performance => &mut self.performance,
            AnalyzerKind::StandardFeature => &mut self.standard,
            AnalyzerKind::ContainerProfile => &mut self.containers,
        }
    }

    /// 是否所有目录都来自内置
    pub fn is_all_builtin(&self) -> bool {
        AnalyzerKind::ALL.iter().all(|kind| self.origin(*kind).is_builtin())
    }
}

/// 自定义构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ScanConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, kind: AnalyzerKind, origin: CatalogOrigin) -> Self {
        *self.config.origin_mut(kind) = origin;
        self
    }

    /// 指定本地目录文件
    pub fn local_catalog(self, kind: AnalyzerKind, path: impl Into<PathBuf>) -> Self {
        self.origin(kind, CatalogOrigin::LocalFile(path.into()))
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.options.verbose = verbose;
        self
    }

    pub fn fallback_to_builtin(mut self, fallback: bool) -> Self {
        self.config.options.fallback_to_builtin = fallback;
        self
    }

    pub fn build(self) -> ScanConfig {
        self.config
    }
}
