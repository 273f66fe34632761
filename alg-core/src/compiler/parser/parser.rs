//! 语句解析器
//!
//! 一行一条语句。含 `=` 的行是赋值，左侧必须是单个标识符；
//! 不含 `=` 的行是查询（单个变量名）或求值（任意表达式）。
//! 表达式使用优先级爬升法解析，所有二元运算符左结合，
//! 一元负号和内置函数作用于紧随其后的一元操作数。

use super::super::lexer::token_kind::AlgTokenKind;
use super::error::{ParseResult, ParserError, ParserErrorKind};
use super::expr::{Binary, Builtin, Call, Expr, ExprKind};
use super::stmt::Statement;
use super::utils::binary_operator;
use crate::kit::lexer::{Coordinate, SourcePosition, Token};
use crate::runtime::environment::is_constant;
use tracing::debug;

/// 默认的最大嵌套深度
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// 配置的嵌套深度上限，超出部分按此截断
pub const MAX_DEPTH_CEILING: usize = 1024;

pub struct Parser<'a> {
    /// 与 tokens 对应的整行源码
    source: &'a str,
    tokens: Vec<Token<AlgTokenKind>>,
    position: usize,
    line: usize,
    depth: usize,
    max_depth: usize,
    /// 当前正在解析的表达式原文，用于错误消息
    expression_text: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, tokens: Vec<Token<AlgTokenKind>>) -> Self {
        let line = tokens.first().map(|t| t.start().line).unwrap_or(1);
        Self {
            source,
            tokens,
            position: 0,
            line,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            expression_text: "",
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// 设置嵌套深度上限，最大为 [`MAX_DEPTH_CEILING`]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    /// 解析整行
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let equal = self
            .tokens
            .iter()
            .position(|t| t.kind == AlgTokenKind::Equal);

        let statement = match equal {
            Some(index) => self.parse_assignment(index)?,
            None => self.parse_query()?,
        };

        debug!(
            target: "alg::parser",
            line = statement.line,
            "parsed {:?} statement: {} <- {}",
            statement.kind,
            statement.target,
            statement.expr
        );
        Ok(statement)
    }

    fn parse_assignment(&mut self, index: usize) -> ParseResult<Statement> {
        let source = self.source;
        let equal_start = self.tokens[index].start();
        let equal_end = self.tokens[index].end();

        let target = match &self.tokens[..index] {
            [token] if token.kind == AlgTokenKind::Identifier => token.text.clone(),
            other => {
                let target_text = source[..equal_start.byte_offset].trim();
                let coordinate = other.first().map(|t| t.start()).unwrap_or(equal_start);
                return Err(ParserError::here(
                    ParserErrorKind::InvalidTarget(target_text.to_string()),
                    coordinate.coordinate(),
                ));
            }
        };

        if is_constant(&target) {
            return Err(ParserError::here(
                ParserErrorKind::AssignConstant(target),
                self.tokens[0].start().coordinate(),
            ));
        }

        self.position = index + 1;
        let expression_text = source[equal_end.byte_offset..].trim();
        let expr = self.parse_complete_expression(expression_text, equal_end)?;
        Ok(Statement::assign(target, expr, self.line))
    }

    fn parse_query(&mut self) -> ParseResult<Statement> {
        let source = self.source;

        if let [token] = self.tokens.as_slice() {
            if token.kind == AlgTokenKind::Identifier && Builtin::from_name(&token.text).is_none() {
                let name = token.text.clone();
                let expr = Box::new(ExprKind::Variable(name.clone()));
                return Ok(Statement::query(name, expr, self.line));
            }
        }

        let text = source.trim();
        let expr = self.parse_complete_expression(text, SourcePosition::at_line(self.line))?;
        Ok(Statement::evaluate(text, expr, self.line))
    }

    /// 解析从当前位置到行尾的完整表达式，不允许剩余 token
    fn parse_complete_expression(
        &mut self,
        text: &'a str,
        anchor: SourcePosition,
    ) -> ParseResult<Expr> {
        self.expression_text = text;

        if self.current().is_none() {
            return Err(ParserError::after(
                ParserErrorKind::InvalidExpression(text.to_string()),
                anchor.coordinate(),
            ));
        }

        let expr = self.parse_expression(0)?;

        if let Some(token) = self.current() {
            let kind = match token.kind {
                // 操作数直接相邻，例如 `2 x`
                AlgTokenKind::Number | AlgTokenKind::Identifier => {
                    ParserErrorKind::InvalidExpression(text.to_string())
                }
                _ => ParserErrorKind::UnexpectedToken {
                    found: token.text.clone(),
                },
            };
            return Err(ParserError::here(kind, token.start().coordinate()));
        }

        Ok(expr)
    }

    /// 解析表达式（优先级爬升）
    ///
    /// 每次折叠出一个二元节点，语法树就加深一层，因此也计入嵌套深度；
    /// 表达式结束后恢复进入时的深度。
    fn parse_expression(&mut self, min_precedence: i32) -> ParseResult<Expr> {
        let depth = self.depth;
        let result = self.parse_binary_chain(min_precedence);
        self.depth = depth;
        result
    }

    fn parse_binary_chain(&mut self, min_precedence: i32) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;

        while let Some((op, precedence)) = self.current().and_then(|t| binary_operator(t.kind)) {
            if precedence <= min_precedence {
                break;
            }
            self.depth += 1;
            if self.depth > self.max_depth {
                return Err(self.nesting_too_deep());
            }
            self.advance();

            // 右侧以相同优先级解析，得到左结合
            let right = self.parse_expression(precedence)?;
            left = Box::new(ExprKind::Binary(Binary { left, op, right }));
        }

        Ok(left)
    }

    /// 解析一元表达式（带嵌套深度检查）
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        self.depth += 1;
        let result = if self.depth > self.max_depth {
            Err(self.nesting_too_deep())
        } else {
            self.parse_unary_operand()
        };
        self.depth -= 1;
        result
    }

    fn parse_unary_operand(&mut self) -> ParseResult<Expr> {
        let (kind, function) = match self.current() {
            Some(token) => (token.kind, Builtin::from_name(&token.text)),
            None => return Err(self.unexpected_end()),
        };

        match (kind, function) {
            (AlgTokenKind::Minus, _) => {
                self.advance();
                let operand = self.parse_unary()?;
                Ok(Box::new(ExprKind::Negate(operand)))
            }
            (AlgTokenKind::Identifier, Some(function)) => {
                self.advance();
                let argument = self.parse_unary()?;
                Ok(Box::new(ExprKind::Call(Call { function, argument })))
            }
            _ => self.parse_primary(),
        }
    }

    /// 解析基础表达式：数字、变量、括号
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let (kind, text, coordinate) = match self.current() {
            Some(token) => (token.kind, token.text.clone(), token.start().coordinate()),
            None => return Err(self.unexpected_end()),
        };

        match kind {
            AlgTokenKind::Number => {
                self.advance();
                let value = text.parse::<f64>().map_err(|_| {
                    ParserError::here(ParserErrorKind::InvalidNumberFormat(text.clone()), coordinate)
                })?;
                Ok(Box::new(ExprKind::Number(value)))
            }
            AlgTokenKind::Identifier => {
                self.advance();
                Ok(Box::new(ExprKind::Variable(text)))
            }
            AlgTokenKind::LeftParenthesis => {
                self.advance();
                let inner = self.parse_expression(0)?;
                let closing = self.current().map(|t| (t.kind, t.start().coordinate()));
                match closing {
                    Some((AlgTokenKind::RightParenthesis, _)) => {
                        self.advance();
                        Ok(inner)
                    }
                    Some((_, coordinate)) => Err(ParserError::here(
                        ParserErrorKind::MissingRightParen,
                        coordinate,
                    )),
                    None => Err(ParserError::after(
                        ParserErrorKind::MissingRightParen,
                        self.end_coordinate(),
                    )),
                }
            }
            _ => Err(ParserError::here(
                ParserErrorKind::UnexpectedToken { found: text },
                coordinate,
            )),
        }
    }

    fn current(&self) -> Option<&Token<AlgTokenKind>> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn current_coordinate(&self) -> Coordinate {
        match self.current() {
            Some(token) => token.start().coordinate(),
            None => self.end_coordinate(),
        }
    }

    /// 最后一个 token 的结束位置
    fn end_coordinate(&self) -> Coordinate {
        match self.tokens.last() {
            Some(token) => token.end().coordinate(),
            None => SourcePosition::at_line(self.line).coordinate(),
        }
    }

    fn nesting_too_deep(&self) -> ParserError {
        ParserError::here(
            ParserErrorKind::NestingTooDeep {
                limit: self.max_depth,
            },
            self.current_coordinate(),
        )
    }

    /// 表达式在需要操作数的地方提前结束
    fn unexpected_end(&self) -> ParserError {
        ParserError::after(
            ParserErrorKind::InvalidExpression(self.expression_text.to_string()),
            self.end_coordinate(),
        )
    }
}
