//! 计算器 Token 类型定义

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgTokenKind {
    // 字面量
    Number,
    // 标识符（变量名或内置函数名）
    Identifier,

    // 单字符符号
    Plus,
    Minus,
    Asterisk,
    Slash,
    Caret,
    LeftParenthesis,
    RightParenthesis,
    Equal,
}

impl AlgTokenKind {
    /// 单字符符号对应的 Token 类型
    pub fn from_symbol(c: char) -> Option<Self> {
        let kind = match c {
            '+' => AlgTokenKind::Plus,
            '-' => AlgTokenKind::Minus,
            '*' => AlgTokenKind::Asterisk,
            '/' => AlgTokenKind::Slash,
            '^' => AlgTokenKind::Caret,
            '(' => AlgTokenKind::LeftParenthesis,
            ')' => AlgTokenKind::RightParenthesis,
            '=' => AlgTokenKind::Equal,
            _ => return None,
        };
        Some(kind)
    }
}

/// 标识符字符：只接受 ASCII 字母和下划线，数字不属于标识符
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
