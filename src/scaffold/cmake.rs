//! CMakeLists.txt 模板生成

use serde::{Deserialize, Serialize};

/// 构建目标类型，除 "executable" 外一律视为库
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum TargetType {
    Executable,
    #[default]
    Library,
}

impl From<String> for TargetType {
    fn from(value: String) -> Self {
        if value == "executable" {
            TargetType::Executable
        } else {
            TargetType::Library
        }
    }
}

impl TargetType {
    /// 对应的 CMake 命令后缀（add_executable / add_library）
    pub fn cmake_command(self) -> &'static str {
        match self {
            TargetType::Executable => "executable",
            TargetType::Library => "library",
        }
    }
}

/// 生成参数，缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CMakeOptions {
    pub cmake_version: String,
    pub project_name: String,
    pub cxx_standard: u16,
    #[serde(rename = "type")]
    pub target_type: TargetType,
}

impl Default for CMakeOptions {
    fn default() -> Self {
        Self {
            cmake_version: "3.20".to_string(),
            project_name: "MyProject".to_string(),
            cxx_standard: 20,
            target_type: TargetType::Library,
        }
    }
}

/// 填充 CMakeLists.txt 模板
pub fn generate_cmake(options: &CMakeOptions) -> String {
    let name = &options.project_name;
    format!(
        r#"cmake_minimum_required(VERSION {version})
project({name} VERSION 1.0.0 LANGUAGES CXX)

set(CMAKE_CXX_STANDARD {standard})
set(CMAKE_CXX_STANDARD_REQUIRED ON)
set(CMAKE_EXPORT_COMPILE_COMMANDS ON)

# Sources
file(GLOB_RECURSE SOURCES "src/*.cpp")
file(GLOB_RECURSE HEADERS "include/*.hpp")

# Target
add_{target}({name} ${{SOURCES}})
target_include_directories({name} PUBLIC include)

# Compiler warnings
target_compile_options({name} PRIVATE
    $<$<CXX_COMPILER_ID:GNU>:-Wall -Wextra -Wpedantic>
    $<$<CXX_COMPILER_ID:Clang>:-Wall -Wextra>
    $<$<CXX_COMPILER_ID:MSVC>:/W4>
)
"#,
        version = options.cmake_version,
        name = name,
        standard = options.cxx_standard,
        target = options.target_type.cmake_command(),
    )
}
