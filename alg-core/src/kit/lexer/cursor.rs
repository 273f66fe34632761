//! 字符游标
//!
//! 在一段已完整读入的源码上逐字符前进，同时维护位置。

use super::position::SourcePosition;

pub struct CharCursor<'a> {
    source: &'a str,
    position: SourcePosition,
}

impl<'a> CharCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::starting_at(source, SourcePosition::start())
    }

    /// 从给定位置开始计数（用于逐行解析时保留真实行号）
    pub fn starting_at(source: &'a str, position: SourcePosition) -> Self {
        Self {
            source,
            position: SourcePosition {
                byte_offset: 0,
                ..position
            },
        }
    }

    /// 查看当前字符，不前进
    pub fn peek(&self) -> Option<char> {
        self.source[self.position.byte_offset..].chars().next()
    }

    /// 消费当前字符
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.advance(c);
        Some(c)
    }

    /// 只要谓词成立就持续前进
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.position.advance(c);
        }
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.position.byte_offset >= self.source.len()
    }

    /// 从 `start` 到当前位置的原始文本
    pub fn slice_from(&self, start: SourcePosition) -> &'a str {
        &self.source[start.byte_offset..self.position.byte_offset]
    }
}
