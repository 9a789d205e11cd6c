//! 匹配模块：目录编译 + 文本计数
pub mod compiled;
pub mod matcher;

pub use self::compiled::{CompiledCatalog, CompiledRule};
pub use self::matcher::{MatchSet, Matcher, RuleMatch};
