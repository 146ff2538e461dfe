//! 类型表示
//!
//! 类型只有两种形态：
//! - `Type::Var`: 类型变量，绑定状态由 arena 维护
//! - `Type::Op`: 类型算子，名字加有序参数；函数类型是名为 `→` 的算子

use super::var::TypeVar;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// 函数类型算子的名字
pub const FUNCTION: &str = "→";

/// 类型算子
///
/// 原子类型没有参数；函数类型的参数除最后一个外都是形参类型，最后一个是返回类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeOperator {
    name: Arc<str>,
    args: Vec<Type>,
}

impl TypeOperator {
    /// 创建新的类型算子
    pub fn new(
        name: impl Into<Arc<str>>,
        args: Vec<Type>,
    ) -> Self {
        TypeOperator {
            name: name.into(),
            args,
        }
    }

    /// 算子名字
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 参数类型
    pub fn args(&self) -> &[Type] {
        &self.args
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// 是否是函数类型
    pub fn is_function(&self) -> bool {
        &*self.name == FUNCTION
    }

    /// 函数类型的形参（返回类型之外的参数）
    pub fn params(&self) -> &[Type] {
        match self.args.split_last() {
            Some((_, params)) => params,
            None => &[],
        }
    }

    /// 函数类型的返回类型
    pub fn return_type(&self) -> Option<&Type> {
        self.args.last()
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}

/// 类型
///
/// 派生的 `PartialEq` 是结构相等：变量比较索引，算子比较名字和参数。
/// 需要先解析变量绑定再比较时，用 [`TypeArena::equals`](super::TypeArena::equals)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// 类型变量
    Var(TypeVar),
    /// 类型算子
    Op(Arc<TypeOperator>),
}

impl Type {
    /// 构造类型算子
    pub fn op(
        name: impl Into<Arc<str>>,
        args: Vec<Type>,
    ) -> Self {
        Type::Op(Arc::new(TypeOperator::new(name, args)))
    }

    /// 构造无参数的原子类型
    pub fn atom(name: impl Into<Arc<str>>) -> Self {
        Type::op(name, Vec::new())
    }

    /// 构造函数类型：`args` 的最后一个元素是返回类型
    pub fn function(args: Vec<Type>) -> Self {
        Type::op(FUNCTION, args)
    }

    pub fn undef() -> Self {
        UNDEF.clone()
    }

    pub fn error() -> Self {
        ERROR.clone()
    }

    pub fn none() -> Self {
        NONE.clone()
    }

    pub fn int() -> Self {
        INT.clone()
    }

    pub fn float() -> Self {
        FLOAT.clone()
    }

    pub fn string() -> Self {
        STRING.clone()
    }

    /// 如果是类型变量，返回该变量
    pub fn as_var(&self) -> Option<TypeVar> {
        match self {
            Type::Var(var) => Some(*var),
            Type::Op(_) => None,
        }
    }

    /// 如果是类型算子，返回该算子
    pub fn as_op(&self) -> Option<&TypeOperator> {
        match self {
            Type::Var(_) => None,
            Type::Op(op) => Some(op),
        }
    }

    /// 是否是类型变量
    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }
}

impl From<TypeVar> for Type {
    fn from(var: TypeVar) -> Self {
        Type::Var(var)
    }
}

impl From<TypeOperator> for Type {
    fn from(op: TypeOperator) -> Self {
        Type::Op(Arc::new(op))
    }
}

// 内置原子类型，进程内共享
pub static UNDEF: Lazy<Type> = Lazy::new(|| Type::atom("Undef"));
pub static ERROR: Lazy<Type> = Lazy::new(|| Type::atom("Error"));
pub static NONE: Lazy<Type> = Lazy::new(|| Type::atom("None"));
pub static INT: Lazy<Type> = Lazy::new(|| Type::atom("Int"));
pub static FLOAT: Lazy<Type> = Lazy::new(|| Type::atom("Float"));
pub static STRING: Lazy<Type> = Lazy::new(|| Type::atom("String"));
