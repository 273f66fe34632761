use super::super::lexer::token_kind::AlgTokenKind;
use super::expr::BinaryOp;

/// 二元运算符及其优先级
///
/// 所有二元运算符都是左结合，包括 `^`：`2 ^ 3 ^ 2` 为 64。
pub fn binary_operator(kind: AlgTokenKind) -> Option<(BinaryOp, i32)> {
    match kind {
        AlgTokenKind::Plus => Some((BinaryOp::Add, 200)),
        AlgTokenKind::Minus => Some((BinaryOp::Subtract, 200)),
        AlgTokenKind::Asterisk => Some((BinaryOp::Multiply, 300)),
        AlgTokenKind::Slash => Some((BinaryOp::Divide, 300)),
        AlgTokenKind::Caret => Some((BinaryOp::Power, 400)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        let add = binary_operator(AlgTokenKind::Plus).unwrap().1;
        let mul = binary_operator(AlgTokenKind::Asterisk).unwrap().1;
        let pow = binary_operator(AlgTokenKind::Caret).unwrap().1;
        assert!(add < mul && mul < pow);
        assert_eq!(binary_operator(AlgTokenKind::Equal), None);
    }
}
