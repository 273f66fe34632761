use super::position::{SourcePosition, SourceSpan};

/// Token 结构
#[derive(Debug, Clone, PartialEq)]
pub struct Token<K> {
    pub kind: K,
    pub span: SourceSpan,
    /// 原始文本
    pub text: String,
}

impl<K> Token<K> {
    pub fn new(kind: K, span: SourceSpan, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// 获取 token 的起始位置
    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    /// 获取 token 的结束位置
    pub fn end(&self) -> SourcePosition {
        self.span.end
    }
}
