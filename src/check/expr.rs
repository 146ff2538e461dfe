//! 表达式树
//!
//! 由外部解析器产生、交给检查器的表达式节点

use std::fmt;

/// 二元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl BinOp {
    /// 比较运算符：结果为 `Int`（语言的真值类型）
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge | BinOp::Eq | BinOp::Ne
        )
    }
}

impl fmt::Display for BinOp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Sub => write!(f, "-"),
            BinOp::Mul => write!(f, "*"),
            BinOp::Div => write!(f, "/"),
            BinOp::Mod => write!(f, "%"),
            BinOp::Pow => write!(f, "**"),
            BinOp::Lt => write!(f, "<"),
            BinOp::Le => write!(f, "<="),
            BinOp::Gt => write!(f, ">"),
            BinOp::Ge => write!(f, ">="),
            BinOp::Eq => write!(f, "=="),
            BinOp::Ne => write!(f, "!="),
        }
    }
}

/// 表达式
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// 整数字面量
    IntLit(i64),
    /// 浮点字面量
    FloatLit(f64),
    /// 字符串字面量
    StrLit(String),
    /// 捕获组引用：第 `pattern` 个已注册正则的第 `group` 个捕获组
    CaptureRef { pattern: usize, group: usize },
    /// 内置函数调用
    Call { name: String, args: Vec<Expr> },
    /// 二元运算
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn capture(
        pattern: usize,
        group: usize,
    ) -> Self {
        Expr::CaptureRef { pattern, group }
    }

    pub fn call(
        name: impl Into<String>,
        args: Vec<Expr>,
    ) -> Self {
        Expr::Call {
            name: name.into(),
            args,
        }
    }

    pub fn binary(
        op: BinOp,
        lhs: Expr,
        rhs: Expr,
    ) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}
