use std::fmt;

// 表达式类型别名
pub type Expr = Box<ExprKind>;

/// 计算器表达式
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    // 数字字面量
    Number(f64),
    // 变量引用
    Variable(String),
    // 二元运算
    Binary(Binary),
    // 取负
    Negate(Expr),
    // 内置函数调用（单参数）
    Call(Call),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Expr,
    pub op: BinaryOp,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub function: Builtin,
    pub argument: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Subtract => left - right,
            BinaryOp::Multiply => left * right,
            BinaryOp::Divide => left / right,
            BinaryOp::Power => left.powf(right),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Power => '^',
        }
    }
}

/// 内置单参数函数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    /// 常用对数（以 10 为底）
    Log,
    /// 自然对数
    Ln,
    Sqrt,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::Log,
        Builtin::Ln,
        Builtin::Sqrt,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Log => "log",
            Builtin::Ln => "ln",
            Builtin::Sqrt => "sqrt",
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Builtin::Sin => x.sin(),
            Builtin::Cos => x.cos(),
            Builtin::Tan => x.tan(),
            Builtin::Log => x.log10(),
            Builtin::Ln => x.ln(),
            Builtin::Sqrt => x.sqrt(),
        }
    }
}

// 全括号形式，便于调试和测试断言
impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Number(value) => write!(f, "{value}"),
            ExprKind::Variable(name) => write!(f, "{name}"),
            ExprKind::Binary(bin) => write!(f, "({} {} {})", bin.left, bin.op.symbol(), bin.right),
            ExprKind::Negate(operand) => write!(f, "(-{operand})"),
            ExprKind::Call(call) => write!(f, "{}({})", call.function.name(), call.argument),
        }
    }
}
