//! 源代码位置追踪
//!
//! - line/column: 人类可读的错误显示（1-based）
//! - byte_offset: 行内字节偏移（0-based），用于切片原始文本

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self::at_line(1)
    }

    /// 指定行的行首
    pub fn at_line(line: usize) -> Self {
        Self {
            line,
            column: 1,
            byte_offset: 0,
        }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.byte_offset += c.len_utf8();
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            line: self.line,
            column: self.column,
        }
    }
}

/// 源代码区间（Span）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }
}

/// 源代码坐标（只保留行列，用于错误报告）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub line: usize,
    pub column: usize,
}

impl Default for Coordinate {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}
