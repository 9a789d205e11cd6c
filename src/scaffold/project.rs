//! C++工程结构分析

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

/// 工程结构报告
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub has_cmake: bool,
    pub has_src_dir: bool,
    pub has_include_dir: bool,
    pub cpp_file_count: usize,
    /// .hpp 与 .h 合计
    pub header_file_count: usize,
    /// 有源文件但没有 CMakeLists.txt
    pub needs_cmake: bool,
}

/// 分析工程目录；路径不存在时返回全空报告
pub fn analyze_project(path: impl AsRef<Path>) -> ProjectReport {
    let root = path.as_ref();
    let mut report = ProjectReport {
        has_cmake: root.join("CMakeLists.txt").exists(),
        has_src_dir: root.join("src").exists(),
        has_include_dir: root.join("include").exists(),
        ..ProjectReport::default()
    };

    // 无法读取的条目直接跳过
    for entry in WalkDir::new(root).min_depth(1).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension().and_then(|ext| ext.to_str()) {
            Some("cpp") => report.cpp_file_count += 1,
            Some("hpp") | Some("h") => report.header_file_count += 1,
            _ => {}
        }
    }

    report.needs_cmake = !report.has_cmake && report.cpp_file_count > 0;
    log::debug!(
        "Project analyzed | path={} cpp={} headers={} needs_cmake={}",
        root.display(),
        report.cpp_file_count,
        report.header_file_count,
        report.needs_cmake
    );
    report
}
