//! cppscan 命令行入口
//!
//! ```bash
//! cppscan leaks src/widget.cpp
//! cat main.cpp | cppscan std
//! cppscan recommend --random-access --frequent-insert
//! cppscan cmake --name demo --executable
//! cppscan project .
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use serde::Serialize;

use cppscan::{
    analyze_project, generate_cmake, AnalyzerKind, CMakeOptions, CppAnalyzer, CustomConfigBuilder,
    Requirement, RequirementVector, TargetType,
};

/// 根据 verbose 标志初始化日志（RUST_LOG 优先），日志写到 stderr，stdout 只输出结果
fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .init();
}

#[derive(Parser)]
#[command(name = "cppscan")]
#[command(about = "Regex-heuristic C++ source scanner", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect memory-leak prone patterns
    Leaks(SourceArgs),
    /// Report performance anti-patterns and good practices
    Perf(SourceArgs),
    /// Infer the minimum C++ standard a source file needs
    Std(SourceArgs),
    /// Recommend an STL container for a set of requirements
    Recommend(RecommendArgs),
    /// Print a CMakeLists.txt template
    Cmake(CmakeArgs),
    /// Analyze a C++ project directory
    Project {
        /// Project root (defaults to current directory)
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Source file to scan (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
    /// Use a JSON rule catalog instead of the built-in one
    #[arg(long, value_name = "JSON")]
    catalog: Option<PathBuf>,
}

#[derive(Args)]
struct RecommendArgs {
    #[arg(long)]
    random_access: bool,
    #[arg(long)]
    fast_lookup: bool,
    #[arg(long)]
    ordered: bool,
    #[arg(long)]
    frequent_insert: bool,
    /// Requirement vector as JSON, e.g. {"ordered": true}
    #[arg(long, value_name = "JSON")]
    requirements: Option<String>,
    /// Use a JSON container catalog instead of the built-in one
    #[arg(long, value_name = "JSON")]
    catalog: Option<PathBuf>,
}

#[derive(Args)]
struct CmakeArgs {
    #[arg(long, default_value = "MyProject")]
    name: String,
    #[arg(long, default_value_t = 20)]
    cxx_standard: u16,
    #[arg(long, default_value = "3.20")]
    cmake_version: String,
    /// Generate add_executable instead of add_library
    #[arg(long)]
    executable: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Leaks(args) => run_scan(AnalyzerKind::LeakDetection, args, cli.verbose),
        Commands::Perf(args) => run_scan(AnalyzerKind::Performance, args, cli.verbose),
        Commands::Std(args) => run_scan(AnalyzerKind::StandardFeature, args, cli.verbose),
        Commands::Recommend(args) => run_recommend(args, cli.verbose),
        Commands::Cmake(args) => {
            let options = CMakeOptions {
                cmake_version: args.cmake_version,
                project_name: args.name,
                cxx_standard: args.cxx_standard,
                target_type: if args.executable {
                    TargetType::Executable
                } else {
                    TargetType::Library
                },
            };
            print!("{}", generate_cmake(&options));
            Ok(())
        }
        Commands::Project { path } => print_json(&analyze_project(&path)),
    }
}

fn run_scan(kind: AnalyzerKind, args: SourceArgs, verbose: bool) -> Result<()> {
    let mut builder = CustomConfigBuilder::new().verbose(verbose);
    if let Some(path) = args.catalog {
        builder = builder.local_catalog(kind, path);
    }
    let analyzer = CppAnalyzer::new(builder.build()).context("failed to initialize analyzer")?;

    let code = read_source(args.file.as_deref())?;
    let report = analyzer.analyze(kind, &code)?;
    print_json(&report)
}

fn run_recommend(args: RecommendArgs, verbose: bool) -> Result<()> {
    let mut builder = CustomConfigBuilder::new().verbose(verbose);
    if let Some(path) = args.catalog {
        builder = builder.local_catalog(AnalyzerKind::ContainerProfile, path);
    }
    let analyzer = CppAnalyzer::new(builder.build()).context("failed to initialize analyzer")?;

    let mut requirements = match &args.requirements {
        Some(json) => {
            let named: BTreeMap<String, bool> =
                serde_json::from_str(json).context("invalid --requirements JSON")?;
            RequirementVector::from_named(named)
        }
        None => RequirementVector::new(),
    };
    let flags = [
        (Requirement::RandomAccess, args.random_access),
        (Requirement::FastLookup, args.fast_lookup),
        (Requirement::Ordered, args.ordered),
        (Requirement::FrequentInsert, args.frequent_insert),
    ];
    for (requirement, wanted) in flags {
        if wanted {
            requirements.set(requirement, true);
        }
    }
    // 未给出任何需求时使用示例需求：随机访问 + 频繁插入
    if args.requirements.is_none() && flags.iter().all(|(_, wanted)| !wanted) {
        requirements = RequirementVector::new()
            .require(Requirement::RandomAccess)
            .require(Requirement::FrequentInsert);
    }

    let recommendation = analyzer.recommend_container(&requirements)?;
    print_json(&recommendation)
}

/// 读取源码：文件或 stdin，非 UTF-8 字节按有损方式转换
fn read_source(file: Option<&Path>) -> Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path).with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("failed to read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
