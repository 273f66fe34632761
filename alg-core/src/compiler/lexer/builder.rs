//! Lexer 构建器

use super::lexer::Lexer;
use super::token_kind::AlgTokenKind;
use crate::kit::lexer::{LexerError, Token};

/// 创建新的 Lexer
pub fn build_lexer(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// 创建新的 Lexer，位置从第 `line` 行开始
pub fn build_lexer_at_line(source: &str, line: usize) -> Lexer<'_> {
    Lexer::with_line(source, line)
}

/// 一次性切分整行
pub fn tokenize(source: &str) -> Result<Vec<Token<AlgTokenKind>>, LexerError> {
    build_lexer(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_functions() {
        let tokens = tokenize("sqrt(16)").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, AlgTokenKind::Identifier);
        assert_eq!(tokens[0].text, "sqrt");
    }

    #[test]
    fn test_build_lexer_at_line() {
        let mut lexer = build_lexer_at_line("  z", 12);
        let token = lexer.next_token().unwrap().unwrap();
        assert_eq!(token.start().line, 12);
        assert_eq!(token.start().column, 3);
    }
}
