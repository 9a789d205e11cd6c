use std::fmt::{self, Write};

/// 源码日志预览：连续空白（含换行/缩进）折叠为一个空格，超过上限截断并追加省略号
/// 只在 Display 时逐字符输出，不额外分配
pub struct SourcePreview<'a> {
    source: &'a str,
    max_chars: usize,
}

impl fmt::Display for SourcePreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        let mut in_blank = false;

        for ch in self.source.chars() {
            if ch.is_whitespace() {
                in_blank = true;
                continue;
            }
            // 折叠后的空白在下一个可见字符前补一个空格，首尾空白不输出
            let pending_space = in_blank && written > 0;
            let needed = if pending_space { 2 } else { 1 };
            if written + needed > self.max_chars {
                return f.write_char('…');
            }
            if pending_space {
                f.write_char(' ')?;
            }
            f.write_char(ch)?;
            written += needed;
            in_blank = false;
        }
        Ok(())
    }
}

/// 源码文本的单行预览
#[inline]
pub fn preview_source(source: &str, max_chars: usize) -> SourcePreview<'_> {
    SourcePreview { source, max_chars }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_folds_whitespace() {
        let preview = preview_source("int  main()\n\n{\treturn 0; }", 100).to_string();
        assert_eq!(preview, "int main() { return 0; }");
    }

    #[test]
    fn test_preview_trims_edges() {
        assert_eq!(preview_source("\n\n  delete p;\n", 100).to_string(), "delete p;");
        assert_eq!(preview_source("   \n\t", 10).to_string(), "");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview_source("abcdefgh", 3).to_string(), "abc…");
        assert_eq!(preview_source("abc", 3).to_string(), "abc");
        assert_eq!(preview_source("ab cd", 3).to_string(), "ab…");
    }
}
