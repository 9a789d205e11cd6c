//! 工程脚手架：CMakeLists.txt 生成 + 工程结构分析
pub mod cmake;
pub mod project;

pub use self::cmake::{generate_cmake, CMakeOptions, TargetType};
pub use self::project::{analyze_project, ProjectReport};
